//! Error types for the Vouch SDK.

use thiserror::Error;
use vouch_domain::RegistryError;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// The registry has no record of the agent
    #[error("Agent not found: {0}")]
    NotFound(String),

    /// Transport failure, timeout, or a gateway-class status (502/503/504)
    #[error("Registry unavailable: {0}")]
    ServiceUnavailable(String),

    /// Any other non-success status
    #[error("{message}")]
    OperationFailed {
        /// HTTP status code
        status: u16,
        /// Server-supplied or templated message
        message: String,
    },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request rejected locally before sending
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client misconfiguration (bad URL, bad timeout)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// Whether retrying the same request later could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, SdkError::ServiceUnavailable(_))
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SdkError::InvalidResponse(e.to_string())
        } else if e.is_builder() {
            SdkError::Config(e.to_string())
        } else if e.is_timeout() {
            SdkError::ServiceUnavailable(format!("Request timed out: {}", e))
        } else {
            // connect, request and body errors all mean the registry is out of reach
            SdkError::ServiceUnavailable(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}

impl From<SdkError> for RegistryError {
    fn from(e: SdkError) -> Self {
        match e {
            SdkError::ServiceUnavailable(msg) => RegistryError::ServiceUnavailable(msg),
            SdkError::OperationFailed { status, message } => {
                RegistryError::OperationFailed { status, message }
            }
            SdkError::NotFound(id) => RegistryError::OperationFailed {
                status: 404,
                message: format!("Agent not found: {}", id),
            },
            SdkError::InvalidResponse(msg) => RegistryError::InvalidResponse(msg),
            SdkError::InvalidInput(msg) | SdkError::Config(msg) => {
                RegistryError::InvalidRequest(msg)
            }
        }
    }
}
