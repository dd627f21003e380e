use service_core::config::{self as core_config, AwsConfig, ModelConfig, StorageConfig};
use service_core::error::AppError;

pub const DEFAULT_MODEL_ID: &str = "mistral.mistral-7b-instruct-v0:2";

#[derive(Debug, Clone)]
pub struct BlogConfig {
    pub common: core_config::Config,
    pub aws: AwsConfig,
    pub model: ModelConfig,
    pub storage: StorageConfig,
}

impl BlogConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(BlogConfig {
            aws: AwsConfig::from_env()?,
            model: ModelConfig::from_env(default_model())?,
            storage: StorageConfig::from_env()?,
            common,
        })
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            aws: AwsConfig::default(),
            model: default_model(),
            storage: StorageConfig::default(),
        }
    }
}

/// Sampling defaults for free-form prose.
pub fn default_model() -> ModelConfig {
    ModelConfig {
        model_id: DEFAULT_MODEL_ID.to_string(),
        max_tokens: 512,
        temperature: 0.5,
        top_p: 0.9,
    }
}
