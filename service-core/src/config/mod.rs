use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Settings shared by every handler binary.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string())
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Region, timeout and retry settings for the inference client.
#[derive(Debug, Clone, Deserialize)]
pub struct AwsConfig {
    pub region: String,
    /// Read timeout for a single InvokeModel call.
    pub read_timeout_secs: u64,
    /// Total attempts made by the SDK retry policy, including the first.
    pub max_attempts: u32,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            read_timeout_secs: 300,
            max_attempts: 3,
        }
    }
}

impl AwsConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            region: get_env("BEDROCK_REGION", Some(&defaults.region))?,
            read_timeout_secs: get_env_parsed(
                "BEDROCK_READ_TIMEOUT_SECS",
                defaults.read_timeout_secs,
            ),
            max_attempts: get_env_parsed("BEDROCK_MAX_ATTEMPTS", defaults.max_attempts),
        })
    }
}

/// Model identifier and sampling parameters. Fixed per deployment, never per request.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl ModelConfig {
    /// Overlay `MODEL_*` environment variables on the handler's defaults.
    pub fn from_env(defaults: ModelConfig) -> Result<Self, AppError> {
        Ok(Self {
            model_id: get_env("MODEL_ID", Some(&defaults.model_id))?,
            max_tokens: get_env_parsed("MODEL_MAX_TOKENS", defaults.max_tokens),
            temperature: get_env_parsed("MODEL_TEMPERATURE", defaults.temperature),
            top_p: get_env_parsed("MODEL_TOP_P", defaults.top_p),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub bucket: String,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Local,
    S3,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::S3,
            bucket: "aws-bedrock-praful".to_string(),
            local_path: "storage".to_string(),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            backend: get_env("STORAGE_BACKEND", Some("s3"))?
                .parse()
                .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
            bucket: get_env("S3_BUCKET", Some(&defaults.bucket))?,
            local_path: get_env("STORAGE_LOCAL_PATH", Some(&defaults.local_path))?,
        })
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(StorageBackend::Local),
            "s3" => Ok(StorageBackend::S3),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Read a setting, falling back to `default`. A setting without a default is required.
pub fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}

/// Read a numeric tunable, falling back to `default` when unset or unparsable.
pub fn get_env_parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
