//! List command implementation.

use crate::cli::ListArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use vouch_sdk::{RegistryClient, MAX_PAGE_SIZE};

/// Execute the list command.
pub async fn execute_list(
    args: ListArgs,
    client: &RegistryClient,
    formatter: &Formatter,
) -> Result<()> {
    validate_list_args(&args)?;

    let page = client.list_agents(args.page, args.limit).await?;
    println!("{}", formatter.format_agents(&page)?);
    Ok(())
}

/// Reject paging values the registry would silently clamp.
fn validate_list_args(args: &ListArgs) -> Result<()> {
    if args.page == 0 {
        return Err(CliError::InvalidInput("Page numbers start at 1".to_string()));
    }
    if args.limit == 0 || args.limit > MAX_PAGE_SIZE {
        return Err(CliError::InvalidInput(format!(
            "Limit must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(())
}
