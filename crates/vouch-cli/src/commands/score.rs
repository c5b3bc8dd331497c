//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::output::Formatter;
use vouch_domain::RegistryService;
use vouch_sdk::SdkError;

/// Execute the score command.
pub async fn execute_score<R: RegistryService>(
    args: ScoreArgs,
    registry: &R,
    formatter: &Formatter,
) -> Result<()> {
    let score = registry
        .fetch_trust_score(&args.agent_id)
        .await?
        .ok_or_else(|| SdkError::NotFound(args.agent_id.clone()))?;

    println!("{}", formatter.format_score(&args.agent_id, &score)?);
    Ok(())
}
