//! Request and response envelopes exchanged with the hosting platform.
//!
//! Inbound events look like `{"body": "<json-string>"}`; responses are
//! `{"statusCode": <int>, "body": "<json-string>"}`.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub body: Option<Value>,
}

impl RequestEnvelope {
    /// Build an envelope carrying `body` as a JSON-encoded string.
    pub fn with_body(body: &Value) -> Self {
        Self {
            body: Some(Value::String(body.to_string())),
        }
    }

    /// Decode the body, rejecting envelopes that have none.
    pub fn decode_body(&self) -> Result<Value, AppError> {
        match &self.body {
            None | Some(Value::Null) => {
                Err(AppError::BadRequest("Missing 'body' in request".to_string()))
            }
            Some(body) => decode(body),
        }
    }

    /// Decode the body, treating a missing one as an empty object.
    pub fn decode_body_or_empty(&self) -> Result<Value, AppError> {
        match &self.body {
            None | Some(Value::Null) => Ok(Value::Object(Map::new())),
            Some(body) => decode(body),
        }
    }
}

fn decode(body: &Value) -> Result<Value, AppError> {
    match body {
        Value::String(raw) => serde_json::from_str(raw)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON in request body: {}", e))),
        // Direct invocations may hand over an already-decoded object.
        other => Ok(other.clone()),
    }
}

/// Extract a required, non-empty text field from a decoded body.
pub fn required_text(body: &Value, field: &str) -> Result<String, AppError> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest(format!("Missing '{}' in request body", field)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    /// 200 with `payload` serialized as the body.
    pub fn ok_json<T: Serialize + ?Sized>(payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status_code: 200,
                body,
            },
            Err(e) => Self::error(500, e.to_string()),
        }
    }

    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let body = serde_json::to_string(&ErrorResponse {
            error: message.into(),
        })
        .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.to_string());

        Self { status_code, body }
    }

    /// Decode the body back into JSON.
    pub fn json_body(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
