//! Vouch Rust SDK
//!
//! Client library for the agent trust registry's HTTP API.
//!
//! The client is a thin transport layer: it fetches agents and trust scores,
//! registers agents, submits reviews and lists the registry. It makes no
//! trust decisions itself; see `vouch-gatekeeper` for that.
//!
//! Failures are split so callers can tell "registry is down" apart from
//! everything else: transport errors and 502/503/504 responses become
//! [`SdkError::ServiceUnavailable`].
//!
//! # Example
//!
//! ```no_run
//! use vouch_sdk::{ClientConfig, RegistryClient};
//!
//! # async fn run() -> Result<(), vouch_sdk::SdkError> {
//! let client = RegistryClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//! match client.fetch_trust_score("agent-42").await? {
//!     Some(score) => println!("{} ({})", score.total, score.tier()),
//!     None => println!("unknown agent"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod wire;

pub use client::{is_gateway_status, RegistryClient, API_KEY_HEADER, MAX_PAGE_SIZE};
pub use config::{
    ClientConfig, DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_REGISTRY_URL,
    ENV_TIMEOUT_SECS,
};
pub use error::SdkError;
