//! AWS SDK client construction.
//!
//! The inference client carries the read timeout and retry budget; the
//! storage client keeps SDK defaults.

use crate::config::AwsConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_bedrockruntime::config::retry::RetryConfig;
use aws_sdk_bedrockruntime::config::timeout::TimeoutConfig;
use std::time::Duration;

/// Load credentials and shared settings for `region` from the ambient environment.
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

pub fn bedrock_client(sdk_config: &SdkConfig, aws: &AwsConfig) -> aws_sdk_bedrockruntime::Client {
    let config = aws_sdk_bedrockruntime::config::Builder::from(sdk_config)
        .retry_config(RetryConfig::standard().with_max_attempts(aws.max_attempts))
        .timeout_config(
            TimeoutConfig::builder()
                .read_timeout(Duration::from_secs(aws.read_timeout_secs))
                .build(),
        )
        .build();

    tracing::info!(
        region = %aws.region,
        read_timeout_secs = aws.read_timeout_secs,
        max_attempts = aws.max_attempts,
        "Initialized Bedrock runtime client"
    );

    aws_sdk_bedrockruntime::Client::from_conf(config)
}

pub fn s3_client(sdk_config: &SdkConfig) -> aws_sdk_s3::Client {
    aws_sdk_s3::Client::new(sdk_config)
}
