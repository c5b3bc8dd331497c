//! Trust score module - the registry's opinion of an agent
//!
//! Scores are computed entirely by the registry. This crate only reads
//! `total`; dimensions and flags are carried through for display.

use crate::Tier;

/// Upper bound of the `total` score scale
pub const MAX_SCORE: u8 = 100;

/// Risk level attached to a score or a transaction recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    /// Safe to transact at the requested size
    Low,
    /// Proceed with caution, or denied for size reasons
    Medium,
    /// Counterparty has little or no track record
    High,
    /// Nothing is known about the counterparty
    Unknown,
}

impl RiskLevel {
    /// Get the risk level as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "unknown",
        }
    }

    /// Parse a risk level; anything unrecognised is `Unknown`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dimension of a trust score
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DimensionScore {
    /// Points earned
    pub score: f64,
    /// Points available
    pub max: f64,
}

impl DimensionScore {
    /// Create a new dimension score
    pub fn new(score: f64, max: f64) -> Self {
        Self { score, max }
    }

    /// Fraction of available points earned, 0.0 when the dimension is empty
    pub fn ratio(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.score / self.max).clamp(0.0, 1.0)
        }
    }
}

/// The fixed set of scored dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    /// Verified identity and contact details
    pub identity: DimensionScore,
    /// Peer reviews
    pub reputation: DimensionScore,
    /// Recent transaction activity
    pub activity: DimensionScore,
    /// Time since registration
    pub longevity: DimensionScore,
    /// Policy and dispute record
    pub compliance: DimensionScore,
}

impl Dimensions {
    /// Named view over all dimensions, in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, DimensionScore)> {
        [
            ("identity", self.identity),
            ("reputation", self.reputation),
            ("activity", self.activity),
            ("longevity", self.longevity),
            ("compliance", self.compliance),
        ]
        .into_iter()
    }
}

/// Trust score for an agent as reported by the registry
#[derive(Debug, Clone, PartialEq)]
pub struct TrustScore {
    /// Overall score, always within 0..=100
    pub total: u8,
    /// Registry's confidence in the score
    pub confidence: f64,
    /// Per-dimension breakdown
    pub dimensions: Dimensions,
    /// Free-text risk flags raised by the registry
    pub risk_flags: Vec<String>,
    /// Registry's own go/no-go flag
    pub safe_to_transact: bool,
    /// Registry's own risk assessment
    pub risk_level: RiskLevel,
    /// Short summary of the evidence behind the score
    pub evidence_summary: String,
}

impl TrustScore {
    /// Create a score with the given total and empty details
    ///
    /// Totals above 100 are clamped.
    pub fn with_total(total: i64) -> Self {
        Self {
            total: clamp_total(total),
            confidence: 0.0,
            dimensions: Dimensions::default(),
            risk_flags: Vec::new(),
            safe_to_transact: false,
            risk_level: RiskLevel::Unknown,
            evidence_summary: String::new(),
        }
    }

    /// Tier for this score
    pub fn tier(&self) -> Tier {
        Tier::classify(self.total as f64)
    }
}

/// Clamp a raw registry total into 0..=100
pub fn clamp_total(raw: i64) -> u8 {
    raw.clamp(0, MAX_SCORE as i64) as u8
}
