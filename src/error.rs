use legends_riot_api::LegendsApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("API error: {0}")]
    Api(#[from] LegendsApiError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
