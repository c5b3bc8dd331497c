//! Agent command implementation.

use crate::cli::AgentArgs;
use crate::error::Result;
use crate::output::Formatter;
use vouch_sdk::RegistryClient;

/// Execute the agent command.
pub async fn execute_agent(
    args: AgentArgs,
    client: &RegistryClient,
    formatter: &Formatter,
) -> Result<()> {
    let agent = client.fetch_agent(&args.agent_id).await?;
    println!("{}", formatter.format_agent(&agent)?);
    Ok(())
}
