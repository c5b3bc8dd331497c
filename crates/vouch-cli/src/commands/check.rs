//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::Formatter;
use vouch_domain::RegistryService;
use vouch_gatekeeper::RiskGate;

/// Execute the check command.
///
/// Returns whether the transaction may proceed. A denial is printed like any
/// other result; only a failure to reach a decision is an error.
pub async fn execute_check<R: RegistryService>(
    args: CheckArgs,
    gate: &RiskGate<R>,
    formatter: &Formatter,
) -> Result<bool> {
    let rec = gate.check_transaction(&args.agent_id, args.amount).await?;
    println!(
        "{}",
        formatter.format_recommendation(&args.agent_id, args.amount, &rec)?
    );
    Ok(rec.proceed)
}
