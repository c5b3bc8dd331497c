//! Vouch Gatekeeper
//!
//! Decides whether a proposed transaction with an agent should go ahead.
//!
//! The Gatekeeper provides:
//! - Amount-dependent score thresholds
//! - Proceed/deny recommendations with a risk level and reason
//! - Distinct errors for an unreachable registry, separate from denials
//!
//! # Examples
//!
//! ```no_run
//! use vouch_gatekeeper::{GateConfig, RiskGate};
//! use vouch_sdk::{ClientConfig, RegistryClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = RegistryClient::new(ClientConfig::default())?;
//! let gate = RiskGate::new(registry, GateConfig::default());
//!
//! let recommendation = gate.check_transaction("agent-42", 5_000).await?;
//! if recommendation.proceed {
//!     // pay
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod gate;

pub use config::GateConfig;
pub use error::GatekeeperError;
pub use gate::RiskGate;
