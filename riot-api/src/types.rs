use legends_shared::traits::api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LegendsApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTPError {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Decoding raw response error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(ApiError),
}

impl LegendsApiError {
    pub fn from_status(status: u16) -> Self {
        Self::Status {
            status,
            message: status_message(status),
        }
    }

    /// Recover a typed error from a boxed transport error when possible.
    pub fn from_transport(err: ApiError) -> Self {
        match err.downcast::<LegendsApiError>() {
            Ok(err) => *err,
            Err(err) => Self::Transport(err),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Human readable message for an HTTP error status.
pub fn status_message(status: u16) -> String {
    match status {
        400 => "Bad request".to_string(),
        401 => "Unauthorized".to_string(),
        404 => "Not found".to_string(),
        500 => "Internal server error".to_string(),
        _ => format!("Server responded with status code {status}"),
    }
}

/// A call to the API can either result in a success with the success type or fail with a [`LegendsApiError`].
pub type LegendsApiResponse<T> = Result<T, LegendsApiError>;
