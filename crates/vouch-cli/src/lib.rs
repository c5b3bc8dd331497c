//! Vouch CLI library.
//!
//! Command-line access to the agent trust registry: transaction checks,
//! trust scores, agent records, reviews and connection profiles.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result, EXIT_DENIED, EXIT_UNAVAILABLE};
pub use output::Formatter;
