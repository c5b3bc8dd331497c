//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Vouch CLI - Check agent trust before you transact.
#[derive(Debug, Parser)]
#[command(name = "vouch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VOUCH_CONFIG")]
    pub config: Option<String>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Registry URL (overrides the profile)
    #[arg(long, global = true, env = "VOUCH_REGISTRY_URL")]
    pub registry: Option<String>,

    /// API key (overrides the profile)
    #[arg(long, global = true, env = "VOUCH_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether a transaction with an agent should proceed
    Check(CheckArgs),

    /// Show an agent's trust score and tier
    Score(ScoreArgs),

    /// Show an agent's registry record
    Agent(AgentArgs),

    /// List registered agents
    List(ListArgs),

    /// Register a new agent
    Register(RegisterArgs),

    /// Submit a review for an agent
    Review(ReviewArgs),

    /// Print the trust badge URL for an agent
    Badge(BadgeArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Agent ID
    pub agent_id: String,

    /// Transaction amount in sats
    pub amount: u64,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Agent ID
    pub agent_id: String,
}

/// Arguments for the agent command.
#[derive(Debug, Parser)]
pub struct AgentArgs {
    /// Agent ID
    pub agent_id: String,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Agents per page (max 100)
    #[arg(short, long, default_value = "20")]
    pub limit: u32,
}

/// Arguments for the register command.
#[derive(Debug, Parser)]
pub struct RegisterArgs {
    /// Agent display name
    pub name: String,

    /// Description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Contact address
    #[arg(long)]
    pub contact: Option<String>,

    /// Capability (repeatable)
    #[arg(long = "capability", value_name = "CAPABILITY")]
    pub capabilities: Vec<String>,
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
pub struct ReviewArgs {
    /// Agent being reviewed
    pub agent_id: String,

    /// Rating from 1 to 5
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: u8,

    /// Reviewer identity
    #[arg(long)]
    pub reviewer: String,

    /// Optional comment
    #[arg(short = 'm', long)]
    pub comment: Option<String>,
}

/// Arguments for the badge command.
#[derive(Debug, Parser)]
pub struct BadgeArgs {
    /// Agent ID
    pub agent_id: String,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Registry URL
        #[arg(short, long)]
        url: String,
        /// API key
        #[arg(short = 'k', long)]
        api_key: Option<String>,
        /// Request timeout in seconds
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
