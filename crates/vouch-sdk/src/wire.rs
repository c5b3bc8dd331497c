//! JSON wire types for the registry HTTP API and their domain conversions.
//!
//! The registry speaks camelCase; snake_case aliases are accepted as well.
//! Every field except identifiers is optional on the wire.

use serde::{Deserialize, Serialize};
use vouch_domain::score::clamp_total;
use vouch_domain::{
    Agent, AgentPage, AgentRegistration, DimensionScore, Dimensions, Review, ReviewSubmission,
    RiskLevel, TrustScore,
};

/// Agent record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentWire {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default, alias = "registered_at", alias = "createdAt", alias = "created_at")]
    pub registered_at: Option<String>,
    #[serde(default, alias = "review_count")]
    pub review_count: u64,
}

impl From<AgentWire> for Agent {
    fn from(w: AgentWire) -> Self {
        Agent {
            id: w.id,
            name: w.name,
            description: w.description,
            contact: w.contact,
            capabilities: w.capabilities,
            registered_at: w.registered_at,
            review_count: w.review_count,
        }
    }
}

/// One scored dimension
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DimensionWire {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub max: f64,
}

/// Dimension breakdown; unknown dimensions are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DimensionsWire {
    #[serde(default)]
    pub identity: Option<DimensionWire>,
    #[serde(default)]
    pub reputation: Option<DimensionWire>,
    #[serde(default)]
    pub activity: Option<DimensionWire>,
    #[serde(default)]
    pub longevity: Option<DimensionWire>,
    #[serde(default)]
    pub compliance: Option<DimensionWire>,
}

fn dimension(w: Option<DimensionWire>) -> DimensionScore {
    w.map(|d| DimensionScore::new(d.score, d.max))
        .unwrap_or_default()
}

impl From<DimensionsWire> for Dimensions {
    fn from(w: DimensionsWire) -> Self {
        Dimensions {
            identity: dimension(w.identity),
            reputation: dimension(w.reputation),
            activity: dimension(w.activity),
            longevity: dimension(w.longevity),
            compliance: dimension(w.compliance),
        }
    }
}

/// Trust score record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustScoreWire {
    pub total: f64,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub dimensions: DimensionsWire,
    #[serde(default, alias = "risk_flags")]
    pub risk_flags: Vec<String>,
    #[serde(default, alias = "safe_to_transact")]
    pub safe_to_transact: bool,
    #[serde(default, alias = "risk_level")]
    pub risk_level: Option<String>,
    #[serde(default, alias = "evidence_summary")]
    pub evidence_summary: String,
}

impl From<TrustScoreWire> for TrustScore {
    fn from(w: TrustScoreWire) -> Self {
        TrustScore {
            // NaN casts to 0
            total: clamp_total(w.total.round() as i64),
            confidence: w.confidence,
            dimensions: w.dimensions.into(),
            risk_flags: w.risk_flags,
            safe_to_transact: w.safe_to_transact,
            risk_level: w
                .risk_level
                .as_deref()
                .map(RiskLevel::parse)
                .unwrap_or(RiskLevel::Unknown),
            evidence_summary: w.evidence_summary,
        }
    }
}

/// Registration request body
#[derive(Debug, Serialize)]
pub struct RegistrationWire<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<&'a str>,
    pub capabilities: &'a [String],
}

impl<'a> From<&'a AgentRegistration> for RegistrationWire<'a> {
    fn from(r: &'a AgentRegistration) -> Self {
        RegistrationWire {
            name: &r.name,
            description: r.description.as_deref(),
            contact: r.contact.as_deref(),
            capabilities: &r.capabilities,
        }
    }
}

/// Review submission body
#[derive(Debug, Serialize)]
pub struct ReviewSubmissionWire<'a> {
    pub reviewer: &'a str,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'a str>,
}

impl<'a> From<&'a ReviewSubmission> for ReviewSubmissionWire<'a> {
    fn from(r: &'a ReviewSubmission) -> Self {
        ReviewSubmissionWire {
            reviewer: &r.reviewer,
            rating: r.rating,
            comment: r.comment.as_deref(),
        }
    }
}

/// Stored review
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWire {
    pub id: String,
    #[serde(default, alias = "agent_id")]
    pub agent_id: String,
    #[serde(default)]
    pub reviewer: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, alias = "created_at")]
    pub created_at: Option<String>,
}

impl From<ReviewWire> for Review {
    fn from(w: ReviewWire) -> Self {
        Review {
            id: w.id,
            agent_id: w.agent_id,
            reviewer: w.reviewer,
            rating: w.rating,
            comment: w.comment,
            created_at: w.created_at,
        }
    }
}

/// Page of agents
#[derive(Debug, Clone, Deserialize)]
pub struct AgentPageWire {
    #[serde(default)]
    pub agents: Vec<AgentWire>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
}

impl From<AgentPageWire> for AgentPage {
    fn from(w: AgentPageWire) -> Self {
        AgentPage {
            agents: w.agents.into_iter().map(Agent::from).collect(),
            page: w.page,
            limit: w.limit,
            total: w.total,
        }
    }
}

/// Error body returned by the registry on failures
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Server-supplied message, if any
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}
