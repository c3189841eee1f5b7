use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Serialize, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A call required a session but none exists. Raised before any network
    /// traffic happens.
    #[error("authentication required")]
    Unauthenticated,

    #[error("network error: {0}")]
    NetworkError(String),

    /// The server rejected the request. `message` is the server-provided
    /// explanation, or a generic fallback when the body was unparsable.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("invalid response: {0}")]
    DecodeError(String),

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP status carried by the error, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(error: String) -> Self {
        AppError::InternalError(error)
    }
}

impl From<&str> for AppError {
    fn from(error: &str) -> Self {
        AppError::InternalError(error.to_string())
    }
}

// A serializable version of AppError for surfacing to UI layers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializableError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl From<AppError> for SerializableError {
    fn from(error: AppError) -> Self {
        let code = match error {
            AppError::Unauthenticated => "UNAUTHENTICATED",
            AppError::NetworkError(_) => "NETWORK_ERROR",
            AppError::ApiError { .. } => "API_ERROR",
            AppError::DecodeError(_) => "DECODE_ERROR",
            AppError::StorageError(_) => "STORAGE_ERROR",
            AppError::ConfigError(_) => "CONFIG_ERROR",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
        .to_string();

        SerializableError {
            code,
            message: error.to_string(),
            details: None,
        }
    }
}

// Define a Result type alias using our AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status() {
        let error = AppError::ApiError {
            status: 404,
            message: "Resource not found".to_string(),
        };
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.to_string(), "API error (404): Resource not found");
    }

    #[test]
    fn test_network_error_has_no_status() {
        let error = AppError::NetworkError("connection refused".to_string());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_serializable_error_codes() {
        let serializable = SerializableError::from(AppError::Unauthenticated);
        assert_eq!(serializable.code, "UNAUTHENTICATED");
        assert_eq!(serializable.message, "authentication required");
    }
}
