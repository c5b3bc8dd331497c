//! Vouch Domain Layer
//!
//! This crate contains the trust model shared by every other Vouch crate:
//! the tier bands, the trust score as reported by the registry, the
//! transaction recommendation value, and the trait the decision logic uses to
//! reach the registry.
//!
//! ## Key Concepts
//!
//! - **Trust score**: 0-100 reputation value computed by the external registry
//! - **Tier**: Discrete band derived from the score (Unverified → Highly Trusted)
//! - **Recommendation**: Proceed/deny decision for one proposed transaction
//! - **Registry records**: Agents and reviews, passed through untouched
//!
//! ## Architecture
//!
//! - Pure business logic only, no I/O
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod agent;
pub mod recommendation;
pub mod score;
pub mod tier;
pub mod traits;

// Re-exports for convenience
pub use agent::{Agent, AgentPage, AgentRegistration, Review, ReviewSubmission};
pub use recommendation::TransactionRecommendation;
pub use score::{DimensionScore, Dimensions, RiskLevel, TrustScore};
pub use tier::Tier;
pub use traits::{RegistryError, RegistryService};
