//! Vouch MCP Server
//!
//! Model Context Protocol server that lets AI agents check counterparties
//! against the trust registry before paying them.
//!
//! Provides 3 MCP tools:
//! - `vouch_check_transaction` - Go/no-go decision for a payment
//! - `vouch_get_trust` - Trust score, tier and risk flags
//! - `vouch_get_agent` - Registry record and badge URL
//!
//! A denied transaction is a normal tool result. An unreachable registry is
//! a JSON-RPC error with code [`REGISTRY_UNAVAILABLE_CODE`].
//!
//! # Example
//!
//! ```no_run
//! use vouch_gatekeeper::GateConfig;
//! use vouch_mcp::McpServer;
//! use vouch_sdk::ClientConfig;
//!
//! let server = McpServer::new(ClientConfig::from_env().unwrap(), GateConfig::default()).unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod protocol;
mod server;
mod tools;

pub use error::{McpError, REGISTRY_UNAVAILABLE_CODE};
pub use server::McpServer;
