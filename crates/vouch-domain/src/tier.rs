//! Tier module - discrete trust bands derived from a registry score

/// Trust tier of an agent
///
/// Tiers are derived from the registry's 0-100 trust score and are never
/// stored. Variants are declared lowest first so the derived ordering matches
/// trust: `Unverified < NewLimited < Moderate < Trusted < HighlyTrusted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// No meaningful history (score below 20)
    Unverified,

    /// Some history, not enough to rely on (20-39)
    NewLimited,

    /// Mixed or thin track record (40-59)
    Moderate,

    /// Reliable counterparty (60-79)
    Trusted,

    /// Strong, established track record (80 and above)
    HighlyTrusted,
}

/// Band table, highest threshold first. Thresholds are inclusive lower bounds.
const BANDS: [(f64, Tier); 4] = [
    (80.0, Tier::HighlyTrusted),
    (60.0, Tier::Trusted),
    (40.0, Tier::Moderate),
    (20.0, Tier::NewLimited),
];

impl Tier {
    /// Classify a trust score into a tier
    ///
    /// Total over all inputs: scores above 100 land in the top band, negative
    /// scores and NaN land in the bottom band.
    ///
    /// # Examples
    ///
    /// ```
    /// use vouch_domain::Tier;
    ///
    /// assert_eq!(Tier::classify(85.0), Tier::HighlyTrusted);
    /// assert_eq!(Tier::classify(60.0), Tier::Trusted);
    /// assert_eq!(Tier::classify(-5.0), Tier::Unverified);
    /// ```
    pub fn classify(score: f64) -> Self {
        BANDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Unverified)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Tier::HighlyTrusted => "Highly Trusted",
            Tier::Trusted => "Trusted",
            Tier::Moderate => "Moderate",
            Tier::NewLimited => "New/Limited",
            Tier::Unverified => "Unverified",
        }
    }

    /// Display glyph for badges and terminal output
    pub fn badge(&self) -> &'static str {
        match self {
            Tier::HighlyTrusted => "🟢",
            Tier::Trusted => "🔵",
            Tier::Moderate => "🟡",
            Tier::NewLimited => "🟠",
            Tier::Unverified => "🔴",
        }
    }

    /// Whether agents in this tier are considered safe counterparties
    pub fn is_safe(&self) -> bool {
        matches!(self, Tier::HighlyTrusted | Tier::Trusted)
    }

    /// Inclusive lower bound of the band
    pub fn min_score(&self) -> u8 {
        match self {
            Tier::HighlyTrusted => 80,
            Tier::Trusted => 60,
            Tier::Moderate => 40,
            Tier::NewLimited => 20,
            Tier::Unverified => 0,
        }
    }

    /// Machine name, used in JSON output and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::HighlyTrusted => "highly_trusted",
            Tier::Trusted => "trusted",
            Tier::Moderate => "moderate",
            Tier::NewLimited => "new_limited",
            Tier::Unverified => "unverified",
        }
    }

    /// Parse a tier from its machine name or label
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' ', '/'], "_").as_str() {
            "highly_trusted" => Some(Tier::HighlyTrusted),
            "trusted" => Some(Tier::Trusted),
            "moderate" => Some(Tier::Moderate),
            "new_limited" => Some(Tier::NewLimited),
            "unverified" => Some(Tier::Unverified),
            _ => None,
        }
    }

    /// Next tier up
    pub fn next(&self) -> Option<Self> {
        match self {
            Tier::Unverified => Some(Tier::NewLimited),
            Tier::NewLimited => Some(Tier::Moderate),
            Tier::Moderate => Some(Tier::Trusted),
            Tier::Trusted => Some(Tier::HighlyTrusted),
            Tier::HighlyTrusted => None,
        }
    }

    /// Next tier down
    pub fn previous(&self) -> Option<Self> {
        match self {
            Tier::Unverified => None,
            Tier::NewLimited => Some(Tier::Unverified),
            Tier::Moderate => Some(Tier::NewLimited),
            Tier::Trusted => Some(Tier::Moderate),
            Tier::HighlyTrusted => Some(Tier::Trusted),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.badge(), self.label())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tier: {}", s))
    }
}
