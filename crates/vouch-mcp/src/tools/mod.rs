//! MCP tool implementations

mod agent;
mod check;
mod trust;

pub use agent::{handle_get_agent, AgentResult, GetAgentParams};
pub use check::{handle_check_transaction, CheckTransactionParams, CheckTransactionResult};
pub use trust::{handle_get_trust, GetTrustParams, GetTrustResult};
