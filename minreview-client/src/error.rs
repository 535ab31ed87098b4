//! Client error types

use thiserror::Error;

/// Message shown when no response was received at all
pub const NETWORK_UNREACHABLE: &str = "network unreachable, check that the backend service is running";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response received (connect failure, timeout, DNS, ...)
    #[error("{}", NETWORK_UNREACHABLE)]
    Network(#[source] reqwest::Error),

    /// HTTP failure after a response started (body read, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Envelope code was not the success code; `msg` is the server's text
    #[error("{msg}")]
    Api { code: i32, msg: String },

    /// Non-2xx status without a readable envelope
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// HTTP 401. `redirect` names the login page the UI must navigate to,
    /// set only by clients that drop their session on 401.
    #[error("login expired, please sign in again")]
    Unauthorized { redirect: Option<String> },

    /// Envelope decoded but its payload was unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejected locally before anything was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Durable storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Server-provided message, if the failure came with a non-empty one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { msg, .. } if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }

    /// Whether no response was received
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
