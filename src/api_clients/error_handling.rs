use log::debug;
use serde::Deserialize;

use crate::error::AppError;

/// Error payload the backend returns for rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
}

/// Map a non-2xx response to the normalized error, pulling the
/// server-provided message out of the body when there is one.
pub fn map_api_error(status_code: u16, response_text: &str) -> AppError {
    debug!(
        "Mapping API error: status={}, body={}",
        status_code, response_text
    );

    let message = serde_json::from_str::<ErrorEnvelope>(response_text)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| generic_message(status_code).to_string());

    AppError::ApiError {
        status: status_code,
        message,
    }
}

fn generic_message(status_code: u16) -> &'static str {
    match status_code {
        400 => "Bad request",
        401 => "Authentication failed",
        403 => "Access denied",
        404 => "Resource not found",
        409 => "Conflict",
        422 => "Validation failed",
        429 => "Too many requests",
        500..=599 => "Server error",
        _ => "Request failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_extracted() {
        let error = map_api_error(400, r#"{"status": "fail", "message": "Email already in use"}"#);
        assert_eq!(
            error,
            AppError::ApiError {
                status: 400,
                message: "Email already in use".to_string()
            }
        );
    }

    #[test]
    fn test_non_json_body_falls_back_to_generic_message() {
        let error = map_api_error(502, "Bad Gateway");
        assert_eq!(
            error,
            AppError::ApiError {
                status: 502,
                message: "Server error".to_string()
            }
        );
    }

    #[test]
    fn test_json_body_without_message_falls_back() {
        let error = map_api_error(401, r#"{"status": "fail"}"#);
        assert_eq!(
            error,
            AppError::ApiError {
                status: 401,
                message: "Authentication failed".to_string()
            }
        );
    }
}
