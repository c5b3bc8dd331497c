//! Badge command implementation.

use crate::cli::BadgeArgs;
use crate::error::Result;
use crate::output::Formatter;
use vouch_sdk::RegistryClient;

/// Execute the badge command. No request is made.
pub fn execute_badge(args: BadgeArgs, client: &RegistryClient, formatter: &Formatter) -> Result<()> {
    let url = client.badge_url(&args.agent_id);
    println!("{}", formatter.format_badge(&args.agent_id, &url)?);
    Ok(())
}
