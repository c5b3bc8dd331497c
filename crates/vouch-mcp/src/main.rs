//! Vouch MCP Server - Main entry point

use tracing_subscriber::EnvFilter;
use vouch_gatekeeper::GateConfig;
use vouch_mcp::McpServer;
use vouch_sdk::ClientConfig;

fn main() {
    // Log to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid registry configuration: {}", e);
            std::process::exit(1);
        }
    };

    let server = match McpServer::new(config, GateConfig::default()) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to create MCP server: {}", e);
            std::process::exit(1);
        }
    };

    // Blocks until stdin closes
    if let Err(e) = server.run() {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}
