//! Trait definitions for external interactions
//!
//! The registry is the only collaborator the decision logic talks to.
//! Implementations live in other crates (vouch-sdk for HTTP).

use crate::TrustScore;
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a registry implementation
///
/// "No such agent" is not an error; it is `Ok(None)` from
/// [`RegistryService::fetch_trust_score`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
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

    /// Response could not be understood
    #[error("Invalid registry response: {0}")]
    InvalidResponse(String),

    /// Request was rejected before it was sent
    #[error("Invalid registry request: {0}")]
    InvalidRequest(String),
}

impl RegistryError {
    /// Whether this failure means the registry itself is down
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RegistryError::ServiceUnavailable(_))
    }
}

/// Read access to agent trust scores
///
/// Implemented by the infrastructure layer (vouch-sdk) and by test fakes.
#[async_trait]
pub trait RegistryService: Send + Sync {
    /// Fetch the current trust score for an agent
    ///
    /// Returns `Ok(None)` when the registry has no record of the agent.
    async fn fetch_trust_score(&self, agent_id: &str) -> Result<Option<TrustScore>, RegistryError>;
}

#[async_trait]
impl<T: RegistryService + ?Sized> RegistryService for std::sync::Arc<T> {
    async fn fetch_trust_score(&self, agent_id: &str) -> Result<Option<TrustScore>, RegistryError> {
        (**self).fetch_trust_score(agent_id).await
    }
}
