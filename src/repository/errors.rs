use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a backend call, normalized at the repository boundary.
///
/// Callers only ever see these variants, whatever shape the transport
/// produced the failure in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend could not be reached or failed on its side (5xx).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a well-formed rejection (4xx).
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The response could not be interpreted.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classifies a non-success response by status and body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        if status.is_server_error() {
            return ApiError::Network(format!("{status}: {}", rejection_message(body)));
        }
        ApiError::Rejected {
            status: status.as_u16(),
            message: rejection_message(body),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

/// Picks the human-readable message out of an error body.
fn rejection_message(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["message", "error", "title"] {
            if let Some(Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }
    trimmed.to_string()
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Unexpected(format!("Failed to decode response: {err}"));
        }
        if let Some(status) = err.status() {
            return ApiError::from_response(status, "");
        }
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Unexpected(format!("Failed to decode response: {err}"))
    }
}
