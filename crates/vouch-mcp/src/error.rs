//! Error types for MCP server operations.

use thiserror::Error;
use vouch_domain::RegistryError;
use vouch_gatekeeper::GatekeeperError;
use vouch_sdk::SdkError;

/// JSON-RPC error code for an unreachable registry.
pub const REGISTRY_UNAVAILABLE_CODE: i32 = -32001;

/// MCP server error types
#[derive(Error, Debug)]
pub enum McpError {
    /// Invalid request format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool arguments did not match the tool's schema
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Registry could not be reached; the caller may retry
    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(String),

    /// Registry answered with an error
    #[error("Registry error: {0}")]
    Registry(String),

    /// Server configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidRequest(_) => -32600,
            McpError::InvalidParams(_) => -32602,
            McpError::ToolNotFound(_) => -32601,
            McpError::RegistryUnavailable(_) => REGISTRY_UNAVAILABLE_CODE,
            McpError::Registry(_) => -32000,
            McpError::Config(_) => -32603,
            McpError::JsonError(_) => -32700,
            McpError::IoError(_) => -32000,
        }
    }
}

impl From<GatekeeperError> for McpError {
    fn from(e: GatekeeperError) -> Self {
        match e {
            GatekeeperError::ServiceUnavailable(msg) => McpError::RegistryUnavailable(msg),
            GatekeeperError::Config(msg) => McpError::Config(msg),
            other => McpError::Registry(other.to_string()),
        }
    }
}

impl From<RegistryError> for McpError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::ServiceUnavailable(msg) => McpError::RegistryUnavailable(msg),
            other => McpError::Registry(other.to_string()),
        }
    }
}

impl From<SdkError> for McpError {
    fn from(e: SdkError) -> Self {
        match e {
            SdkError::ServiceUnavailable(msg) => McpError::RegistryUnavailable(msg),
            SdkError::InvalidInput(msg) => McpError::InvalidParams(msg),
            SdkError::Config(msg) => McpError::Config(msg),
            other => McpError::Registry(other.to_string()),
        }
    }
}
