//! Integration tests for the template generation pipeline.

mod common;

use common::{envelope, TestApp};
use regex::Regex;
use serde_json::json;
use service_core::envelope::RequestEnvelope;
use service_core::providers::mock::MockTextProvider;
use service_core::storage::MemoryStorage;
use template_service::handlers::{EMPTY_TEMPLATE_MESSAGE, PREVIEW_CHARS};

const BUCKET_TEMPLATE: &str = "Resources:\n  Bucket:\n    Type: AWS::S3::Bucket";

fn key_pattern() -> Regex {
    Regex::new(r"^cloudformation/generated-template-\d{14}\.yaml$").unwrap()
}

#[tokio::test]
async fn fenced_template_is_extracted_stored_and_previewed() {
    let reply = format!("```yaml\n{}\n```", BUCKET_TEMPLATE);
    let app = TestApp::replying(&reply);

    let response = app
        .handler
        .handle(envelope(json!({"cfn_request": "an S3 bucket"})))
        .await;

    assert_eq!(response.status_code, 200);
    let body = response.json_body().unwrap();
    let key = body["s3_key"].as_str().unwrap();
    assert!(key_pattern().is_match(key), "unexpected key: {}", key);
    assert_eq!(body["preview"], BUCKET_TEMPLATE);

    let prompts = app.provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("an S3 bucket"));
    assert!(prompts[0].contains("Generate a valid AWS CloudFormation YAML template"));

    let writes = app.storage.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, key);
    assert_eq!(writes[0].1.as_slice(), BUCKET_TEMPLATE.as_bytes());
}

#[tokio::test]
async fn unfenced_output_is_stored_unchanged() {
    let app = TestApp::replying("Resources: {}");

    let result = app
        .handler
        .process(&envelope(json!({"cfn_request": "nothing"})))
        .await
        .unwrap();

    assert_eq!(result.preview, "Resources: {}");
    assert_eq!(
        app.storage.objects().get(&result.s3_key).map(Vec::as_slice),
        Some("Resources: {}".as_bytes())
    );
}

#[tokio::test]
async fn completion_shaped_payload_is_accepted() {
    let app = TestApp::spawn(
        MockTextProvider::returning_raw(r#"{"completion":"```\nResources: {}\n```"}"#),
        MemoryStorage::new(),
    );

    let result = app
        .handler
        .process(&envelope(json!({"cfn_request": "nothing"})))
        .await
        .unwrap();

    assert_eq!(result.preview, "Resources: {}");
}

#[tokio::test]
async fn preview_is_limited_to_300_characters() {
    let long_template = format!("Resources:\n{}", "  # padding\n".repeat(100));
    let app = TestApp::replying(&long_template);

    let result = app
        .handler
        .process(&envelope(json!({"cfn_request": "big"})))
        .await
        .unwrap();

    assert_eq!(result.preview.chars().count(), PREVIEW_CHARS);
    let stored = &app.storage.writes()[0].1;
    assert_eq!(stored.as_slice(), long_template.trim().as_bytes());
}

#[tokio::test]
async fn missing_request_returns_400_without_remote_calls() {
    let app = TestApp::replying("unused");

    let response = app.handler.handle(envelope(json!({"request": "x"}))).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.json_body().unwrap(),
        json!({"error": "Missing 'cfn_request' in request body"})
    );
    assert_eq!(app.provider.call_count(), 0);
    assert!(app.storage.writes().is_empty());
}

#[tokio::test]
async fn missing_body_reports_missing_request_field() {
    let app = TestApp::replying("unused");

    let response = app.handler.handle(RequestEnvelope::default()).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.json_body().unwrap(),
        json!({"error": "Missing 'cfn_request' in request body"})
    );
}

#[tokio::test]
async fn empty_model_output_returns_500() {
    let app = TestApp::spawn(
        MockTextProvider::returning_raw(r#"{"outputs":[{"text":"  ```yaml\n```  "}]}"#),
        MemoryStorage::new(),
    );

    let response = app
        .handler
        .handle(envelope(json!({"cfn_request": "an S3 bucket"})))
        .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(
        response.json_body().unwrap(),
        json!({"error": EMPTY_TEMPLATE_MESSAGE})
    );
    assert!(app.storage.writes().is_empty());
}

#[tokio::test]
async fn inference_failure_returns_500_with_message() {
    let app = TestApp::spawn(
        MockTextProvider::failing("ThrottlingException: slow down"),
        MemoryStorage::new(),
    );

    let response = app
        .handler
        .handle(envelope(json!({"cfn_request": "an S3 bucket"})))
        .await;

    assert_eq!(response.status_code, 500);
    let error = response.json_body().unwrap()["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.contains("ThrottlingException: slow down"), "{}", error);
    assert!(app.storage.writes().is_empty());
}

#[tokio::test]
async fn storage_failure_returns_500() {
    let app = TestApp::spawn(
        MockTextProvider::returning("Resources: {}"),
        MemoryStorage::failing("AccessDenied"),
    );

    let response = app
        .handler
        .handle(envelope(json!({"cfn_request": "an S3 bucket"})))
        .await;

    assert_eq!(response.status_code, 500);
    let error = response.json_body().unwrap()["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(error.contains("AccessDenied"), "{}", error);
}
