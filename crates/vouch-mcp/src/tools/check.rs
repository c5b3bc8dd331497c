//! Check transaction tool - Go/no-go decision for a payment to an agent

use crate::error::McpError;
use serde::{Deserialize, Serialize};
use vouch_domain::{RegistryService, TransactionRecommendation};
use vouch_gatekeeper::RiskGate;

/// Parameters for checking a transaction
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckTransactionParams {
    /// Counterparty agent
    #[serde(alias = "agent_id")]
    pub agent_id: String,
    /// Amount in sats
    pub amount: u64,
}

/// Result of a transaction check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckTransactionResult {
    /// Whether the transaction should go ahead
    pub proceed: bool,
    /// Score the decision was based on
    pub score: u8,
    /// Explanation
    pub reason: String,
    /// low, medium, high or unknown
    pub risk_level: String,
}

impl From<TransactionRecommendation> for CheckTransactionResult {
    fn from(rec: TransactionRecommendation) -> Self {
        Self {
            proceed: rec.proceed,
            score: rec.score,
            reason: rec.reason,
            risk_level: rec.risk_level.as_str().to_string(),
        }
    }
}

/// Handle vouch_check_transaction tool invocation
///
/// A denial is a normal result. Only an unreachable registry is an error.
pub async fn handle_check_transaction<R: RegistryService>(
    gate: &RiskGate<R>,
    params: CheckTransactionParams,
) -> Result<CheckTransactionResult, McpError> {
    if params.agent_id.trim().is_empty() {
        return Err(McpError::InvalidParams("agentId cannot be empty".to_string()));
    }

    let rec = gate.check_transaction(&params.agent_id, params.amount).await?;
    Ok(rec.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use vouch_domain::{RegistryError, TrustScore};

    struct OneAgent;

    #[async_trait]
    impl RegistryService for OneAgent {
        async fn fetch_trust_score(
            &self,
            agent_id: &str,
        ) -> Result<Option<TrustScore>, RegistryError> {
            match agent_id {
                "bob" => Ok(Some(TrustScore::with_total(45))),
                "down" => Err(RegistryError::ServiceUnavailable("503".into())),
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn test_params_accept_both_spellings() {
        let p: CheckTransactionParams =
            serde_json::from_value(json!({"agentId": "a", "amount": 5})).unwrap();
        assert_eq!(p.agent_id, "a");
        let p: CheckTransactionParams =
            serde_json::from_value(json!({"agent_id": "b", "amount": 5})).unwrap();
        assert_eq!(p.agent_id, "b");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result: Result<CheckTransactionParams, _> =
            serde_json::from_value(json!({"agentId": "a", "amount": -1}));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_denial_is_a_result() {
        let gate = RiskGate::with_defaults(OneAgent);
        let params = CheckTransactionParams {
            agent_id: "bob".to_string(),
            amount: 15_000,
        };
        let result = handle_check_transaction(&gate, params).await.unwrap();
        assert!(!result.proceed);
        assert_eq!(result.score, 45);
        assert_eq!(result.risk_level, "medium");

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["riskLevel"], "medium");
    }

    #[tokio::test]
    async fn test_unknown_agent() {
        let gate = RiskGate::with_defaults(OneAgent);
        let params = CheckTransactionParams {
            agent_id: "ghost".to_string(),
            amount: 1,
        };
        let result = handle_check_transaction(&gate, params).await.unwrap();
        assert_eq!(result.risk_level, "unknown");
        assert_eq!(result.score, 0);
    }

    #[tokio::test]
    async fn test_outage_is_an_error() {
        let gate = RiskGate::with_defaults(OneAgent);
        let params = CheckTransactionParams {
            agent_id: "down".to_string(),
            amount: 1,
        };
        let err = handle_check_transaction(&gate, params).await.unwrap_err();
        assert!(matches!(err, McpError::RegistryUnavailable(_)));
    }
}
