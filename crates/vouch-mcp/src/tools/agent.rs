//! Get agent tool - Registry record for an agent

use crate::error::McpError;
use serde::{Deserialize, Serialize};
use vouch_domain::Agent;
use vouch_sdk::{RegistryClient, SdkError};

/// Parameters for fetching an agent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAgentParams {
    /// Agent to look up
    #[serde(alias = "agent_id")]
    pub agent_id: String,
}

/// Agent record, or `found: false`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResult {
    /// Whether the registry knows the agent
    pub found: bool,
    /// Agent id
    pub id: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Capabilities
    pub capabilities: Vec<String>,
    /// Registration timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    /// Number of reviews
    pub review_count: u64,
    /// Badge image URL
    pub badge_url: String,
}

impl AgentResult {
    fn new(agent: Agent, badge_url: String) -> Self {
        Self {
            found: true,
            id: agent.id,
            name: Some(agent.name),
            description: agent.description,
            contact: agent.contact,
            capabilities: agent.capabilities,
            registered_at: agent.registered_at,
            review_count: agent.review_count,
            badge_url,
        }
    }

    fn missing(id: String, badge_url: String) -> Self {
        Self {
            found: false,
            id,
            name: None,
            description: None,
            contact: None,
            capabilities: Vec::new(),
            registered_at: None,
            review_count: 0,
            badge_url,
        }
    }
}

/// Handle vouch_get_agent tool invocation
pub async fn handle_get_agent(
    client: &RegistryClient,
    params: GetAgentParams,
) -> Result<AgentResult, McpError> {
    let badge_url = client.badge_url(&params.agent_id);
    match client.fetch_agent(&params.agent_id).await {
        Ok(agent) => Ok(AgentResult::new(agent, badge_url)),
        Err(SdkError::NotFound(_)) => Ok(AgentResult::missing(params.agent_id, badge_url)),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_agent_serialization() {
        let result = AgentResult::missing("x".into(), "http://r/agents/x/badge.svg".into());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["found"], false);
        assert_eq!(value["badgeUrl"], "http://r/agents/x/badge.svg");
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_agent_serialization() {
        let agent = Agent {
            id: "a1".into(),
            name: "Helper".into(),
            review_count: 4,
            ..Default::default()
        };
        let value = serde_json::to_value(AgentResult::new(agent, "u".into())).unwrap();
        assert_eq!(value["found"], true);
        assert_eq!(value["name"], "Helper");
        assert_eq!(value["reviewCount"], 4);
    }
}
