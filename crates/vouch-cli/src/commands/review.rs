//! Review command implementation.

use crate::cli::ReviewArgs;
use crate::error::Result;
use crate::output::Formatter;
use vouch_domain::ReviewSubmission;
use vouch_sdk::RegistryClient;

/// Execute the review command.
pub async fn execute_review(
    args: ReviewArgs,
    client: &RegistryClient,
    formatter: &Formatter,
) -> Result<()> {
    let submission = ReviewSubmission {
        reviewer: args.reviewer,
        rating: args.rating,
        comment: args.comment,
    };

    let review = client.submit_review(&args.agent_id, &submission).await?;
    println!("{}", formatter.format_review(&review)?);
    Ok(())
}
