//! Gatekeeper error types

use thiserror::Error;
use vouch_domain::RegistryError;

/// Errors that can occur during a transaction check
///
/// A denied transaction is not an error. These only describe failures to
/// reach a decision at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatekeeperError {
    /// Registry could not be reached; the caller may retry later
    #[error("Registry unavailable: {0}")]
    ServiceUnavailable(String),

    /// Registry answered but the answer was unusable
    #[error("Registry error: {0}")]
    Registry(RegistryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatekeeperError {
    /// Whether retrying the same check later could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatekeeperError::ServiceUnavailable(_))
    }
}

impl From<RegistryError> for GatekeeperError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::ServiceUnavailable(msg) => GatekeeperError::ServiceUnavailable(msg),
            other => GatekeeperError::Registry(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_maps_to_retryable() {
        let err = GatekeeperError::from(RegistryError::ServiceUnavailable("503".into()));
        assert!(err.is_retryable());
        assert!(matches!(err, GatekeeperError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_other_registry_errors_not_retryable() {
        let err = GatekeeperError::from(RegistryError::OperationFailed {
            status: 500,
            message: "internal".into(),
        });
        assert!(!err.is_retryable());
        assert!(matches!(err, GatekeeperError::Registry(_)));
    }
}
