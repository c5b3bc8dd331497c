//! Vouch CLI - Check agent trust before you transact.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vouch_cli::commands;
use vouch_cli::{Cli, Command, Config, Formatter, EXIT_DENIED};
use vouch_gatekeeper::RiskGate;
use vouch_sdk::RegistryClient;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_DENIED),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Run the CLI. Returns `false` only when a checked transaction was denied.
async fn run() -> vouch_cli::Result<bool> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), profile = %config.active_profile, "Loaded configuration");

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let command = match cli.command {
        Command::Profile(args) => {
            commands::execute_profile(args, &mut config, &config_path, &formatter)?;
            return Ok(true);
        }
        command => command,
    };

    // A one-off profile override is not persisted
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    let client_config = config
        .get_active_profile()?
        .client_config(cli.registry.as_deref(), cli.api_key.as_deref());
    let client = RegistryClient::new(client_config)?;

    match command {
        Command::Check(args) => {
            let gate = RiskGate::new(client, config.gate.clone());
            return commands::execute_check(args, &gate, &formatter).await;
        }
        Command::Score(args) => commands::execute_score(args, &client, &formatter).await?,
        Command::Agent(args) => commands::execute_agent(args, &client, &formatter).await?,
        Command::List(args) => commands::execute_list(args, &client, &formatter).await?,
        Command::Register(args) => commands::execute_register(args, &client, &formatter).await?,
        Command::Review(args) => commands::execute_review(args, &client, &formatter).await?,
        Command::Badge(args) => commands::execute_badge(args, &client, &formatter)?,
        Command::Profile(_) => unreachable!("handled above"),
    }

    Ok(true)
}
