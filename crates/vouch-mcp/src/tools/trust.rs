//! Get trust tool - Trust score and tier for an agent

use crate::error::McpError;
use serde::{Deserialize, Serialize};
use vouch_domain::{RegistryService, Tier, TrustScore};

/// Parameters for fetching a trust score
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTrustParams {
    /// Agent to look up
    #[serde(alias = "agent_id")]
    pub agent_id: String,
}

/// Trust score summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTrustResult {
    /// Agent looked up
    pub agent_id: String,
    /// Whether the registry knows the agent
    pub found: bool,
    /// Score 0-100 (0 when unknown)
    pub total: u8,
    /// Tier key
    pub tier: String,
    /// Tier label with badge
    pub label: String,
    /// Whether the tier is considered safe
    pub safe: bool,
    /// Registry's own verdict
    pub safe_to_transact: bool,
    /// Registry risk level
    pub risk_level: String,
    /// Registry confidence in the score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Registry risk flags
    pub risk_flags: Vec<String>,
    /// Registry evidence summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_summary: Option<String>,
}

impl GetTrustResult {
    fn found(agent_id: String, score: TrustScore) -> Self {
        let tier = score.tier();
        Self {
            agent_id,
            found: true,
            total: score.total,
            tier: tier.as_str().to_string(),
            label: tier.to_string(),
            safe: tier.is_safe(),
            safe_to_transact: score.safe_to_transact,
            risk_level: score.risk_level.as_str().to_string(),
            confidence: Some(score.confidence),
            risk_flags: score.risk_flags,
            evidence_summary: Some(score.evidence_summary),
        }
    }

    fn unknown(agent_id: String) -> Self {
        let tier = Tier::Unverified;
        Self {
            agent_id,
            found: false,
            total: 0,
            tier: tier.as_str().to_string(),
            label: tier.to_string(),
            safe: false,
            safe_to_transact: false,
            risk_level: vouch_domain::RiskLevel::Unknown.as_str().to_string(),
            confidence: None,
            risk_flags: Vec::new(),
            evidence_summary: None,
        }
    }
}

/// Handle vouch_get_trust tool invocation
pub async fn handle_get_trust<R: RegistryService>(
    registry: &R,
    params: GetTrustParams,
) -> Result<GetTrustResult, McpError> {
    if params.agent_id.trim().is_empty() {
        return Err(McpError::InvalidParams("agentId cannot be empty".to_string()));
    }

    let result = match registry.fetch_trust_score(&params.agent_id).await? {
        Some(score) => GetTrustResult::found(params.agent_id, score),
        None => GetTrustResult::unknown(params.agent_id),
    };
    Ok(result)
}
