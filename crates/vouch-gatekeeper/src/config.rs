//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};
use vouch_domain::score::MAX_SCORE;

/// Amount-dependent score requirements
///
/// Amounts are in the smallest currency unit (sats). Band upper bounds are
/// compared with strictly-greater-than, so an amount equal to a threshold
/// falls into the lower band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Amounts above this are "large"
    pub large_amount_threshold: u64,

    /// Minimum score for large amounts
    pub large_min_score: u8,

    /// Amounts above this (and not large) are "medium"
    pub medium_amount_threshold: u64,

    /// Minimum score for medium amounts
    pub medium_min_score: u8,

    /// Minimum score for everything else
    pub base_min_score: u8,

    /// Denied agents scoring below this are high risk, the rest medium
    pub high_risk_below: u8,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            large_amount_threshold: 10_000,
            large_min_score: 60,
            medium_amount_threshold: 1_000,
            medium_min_score: 40,
            base_min_score: 20,
            high_risk_below: 20,
        }
    }
}

impl GateConfig {
    /// Minimum score required for a transaction of `amount` sats
    pub fn required_score(&self, amount: u64) -> u8 {
        if amount > self.large_amount_threshold {
            self.large_min_score
        } else if amount > self.medium_amount_threshold {
            self.medium_min_score
        } else {
            self.base_min_score
        }
    }

    /// Check that the table is well-formed
    ///
    /// Requirements must not decrease as amounts grow, and no requirement may
    /// exceed the top of the score scale.
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.medium_amount_threshold >= self.large_amount_threshold {
            return Err(GatekeeperError::Config(format!(
                "medium_amount_threshold ({}) must be below large_amount_threshold ({})",
                self.medium_amount_threshold, self.large_amount_threshold
            )));
        }

        if self.base_min_score > self.medium_min_score
            || self.medium_min_score > self.large_min_score
        {
            return Err(GatekeeperError::Config(format!(
                "score requirements must not decrease with amount (got {}, {}, {})",
                self.base_min_score, self.medium_min_score, self.large_min_score
            )));
        }

        for (name, value) in [
            ("base_min_score", self.base_min_score),
            ("medium_min_score", self.medium_min_score),
            ("large_min_score", self.large_min_score),
            ("high_risk_below", self.high_risk_below),
        ] {
            if value > MAX_SCORE {
                return Err(GatekeeperError::Config(format!(
                    "{} ({}) exceeds maximum score {}",
                    name, value, MAX_SCORE
                )));
            }
        }

        Ok(())
    }
}
