//! Transaction recommendation module

use crate::RiskLevel;

/// Reason given when the registry has no record of the agent
pub const NOT_FOUND_REASON: &str = "Agent not found in registry. Unverified counterparty.";

/// Go/no-go recommendation for a single proposed transaction
///
/// A value produced fresh per check; it has no identity or lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecommendation {
    /// Whether the transaction should go ahead
    pub proceed: bool,
    /// Score the decision was based on (0 when the agent is unknown)
    pub score: u8,
    /// Human-readable explanation
    pub reason: String,
    /// Risk attached to the decision
    pub risk_level: RiskLevel,
}

impl TransactionRecommendation {
    /// Recommendation for an agent the registry does not know
    pub fn not_found() -> Self {
        Self {
            proceed: false,
            score: 0,
            reason: NOT_FOUND_REASON.to_string(),
            risk_level: RiskLevel::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found() {
        let rec = TransactionRecommendation::not_found();
        assert!(!rec.proceed);
        assert_eq!(rec.score, 0);
        assert_eq!(rec.risk_level, RiskLevel::Unknown);
        assert_eq!(rec.reason, NOT_FOUND_REASON);
    }
}
