//! Error types for the CLI application.

use thiserror::Error;
use vouch_domain::RegistryError;
use vouch_gatekeeper::GatekeeperError;
use vouch_sdk::SdkError;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Process exit code for a denied transaction.
pub const EXIT_DENIED: i32 = 2;

/// Process exit code when the registry could not be reached.
pub const EXIT_UNAVAILABLE: i32 = 3;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SDK error
    #[error("{0}")]
    Sdk(#[from] SdkError),

    /// Registry error surfaced through the service trait
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// Risk gate error
    #[error("{0}")]
    Gate(#[from] GatekeeperError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sdk(e) if e.is_retryable() => EXIT_UNAVAILABLE,
            CliError::Registry(e) if e.is_unavailable() => EXIT_UNAVAILABLE,
            CliError::Gate(e) if e.is_retryable() => EXIT_UNAVAILABLE,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_exit_code() {
        let err = CliError::from(SdkError::ServiceUnavailable("refused".into()));
        assert_eq!(err.exit_code(), EXIT_UNAVAILABLE);

        let err = CliError::from(GatekeeperError::ServiceUnavailable("503".into()));
        assert_eq!(err.exit_code(), EXIT_UNAVAILABLE);
    }

    #[test]
    fn test_other_errors_exit_one() {
        let err = CliError::from(SdkError::NotFound("x".into()));
        assert_eq!(err.exit_code(), 1);

        let err = CliError::Config("bad".into());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_sdk_message_passes_through() {
        let err = CliError::from(SdkError::OperationFailed {
            status: 409,
            message: "Name already registered".into(),
        });
        assert_eq!(err.to_string(), "Name already registered");
    }
}
