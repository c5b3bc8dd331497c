//! Registry records
//!
//! These are owned by the registry and passed through untouched.

/// An agent registered in the trust registry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Agent {
    /// Registry identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Contact address (email, URL, nostr key...)
    pub contact: Option<String>,
    /// Advertised capabilities
    pub capabilities: Vec<String>,
    /// Registration timestamp as reported by the registry
    pub registered_at: Option<String>,
    /// Number of reviews received
    pub review_count: u64,
}

/// Registration request for a new agent
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentRegistration {
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Contact address
    pub contact: Option<String>,
    /// Advertised capabilities
    pub capabilities: Vec<String>,
}

/// Review to submit for an agent
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSubmission {
    /// Identifier of the reviewing party
    pub reviewer: String,
    /// Rating from 1 (worst) to 5 (best)
    pub rating: u8,
    /// Optional comment
    pub comment: Option<String>,
}

/// Lowest accepted review rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted review rating
pub const MAX_RATING: u8 = 5;

impl ReviewSubmission {
    /// Whether the rating is within the accepted range
    pub fn has_valid_rating(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}

/// A review stored by the registry
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    /// Registry identifier of the review
    pub id: String,
    /// Reviewed agent
    pub agent_id: String,
    /// Reviewing party
    pub reviewer: String,
    /// Rating from 1 to 5
    pub rating: u8,
    /// Optional comment
    pub comment: Option<String>,
    /// Creation timestamp as reported by the registry
    pub created_at: Option<String>,
}

/// One page of an agent listing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentPage {
    /// Agents on this page
    pub agents: Vec<Agent>,
    /// 1-based page number
    pub page: u32,
    /// Page size requested
    pub limit: u32,
    /// Total number of agents in the registry
    pub total: u64,
}

impl AgentPage {
    /// Whether more pages follow this one
    pub fn has_more(&self) -> bool {
        (self.page as u64) * (self.limit as u64) < self.total
    }
}
