//! Remote Collection Errors
//!
//! Failures are classified only to pick the message shown to the user.
//! Every variant ends the action that triggered it; nothing is retried.

use thiserror::Error;

use crate::config::Messages;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server answered with a non-success status
    #[error("server responded {status} {status_text}")]
    Server { status: u16, status_text: String },
    /// Request went out but no response came back (network down, CORS)
    #[error("no response received: {0}")]
    Network(String),
    /// Request could not be built or sent
    #[error("request failed: {0}")]
    Request(String),
    /// Success status, but the body is not what we expected
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the message banner
    pub fn user_message(&self, messages: &Messages) -> String {
        match self {
            ApiError::Server { status, status_text } => {
                format!("{} {} {}", messages.server_error, status, status_text)
                    .trim_end()
                    .to_string()
            }
            ApiError::Network(_) => messages.network_error.clone(),
            ApiError::Request(detail) => format!("{} {}", messages.request_error, detail),
            ApiError::Decode(detail) => format!("{} {}", messages.decode_error, detail),
        }
    }
}
