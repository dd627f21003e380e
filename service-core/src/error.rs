use crate::envelope::ApiResponse;
use crate::providers::InferenceError;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::Inference(_)
            | AppError::Storage(_)
            | AppError::InternalError(_)
            | AppError::ConfigError(_) => 500,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Inference(err) => err.to_string(),
            AppError::Storage(err) => err.to_string(),
            AppError::InternalError(err) => err.to_string(),
            AppError::ConfigError(err) => err.to_string(),
        }
    }

    pub fn into_response(self) -> ApiResponse {
        ApiResponse::error(self.status_code(), self.message())
    }
}
