//! Transaction risk gate

use crate::{GateConfig, GatekeeperError};
use tracing::{debug, info, warn};
use vouch_domain::{RegistryService, RiskLevel, Tier, TransactionRecommendation};

/// The risk gate decides whether a transaction with an agent should proceed
///
/// The registry is injected so tests can substitute an in-memory fake. The
/// gate holds no mutable state; concurrent checks are independent.
pub struct RiskGate<R> {
    registry: R,
    config: GateConfig,
}

impl<R: RegistryService> RiskGate<R> {
    /// Create a new gate over the given registry
    pub fn new(registry: R, config: GateConfig) -> Self {
        Self { registry, config }
    }

    /// Create a gate with the default threshold table
    pub fn with_defaults(registry: R) -> Self {
        Self::new(registry, GateConfig::default())
    }

    /// Threshold table in use
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Underlying registry
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Check a proposed transaction of `amount` sats with `agent_id`
    ///
    /// Performs at most one registry read. An unknown agent yields a normal
    /// denial with [`RiskLevel::Unknown`]; a blank id is treated the same way
    /// without asking the registry. An unreachable registry yields
    /// [`GatekeeperError::ServiceUnavailable`] and never a denial.
    pub async fn check_transaction(
        &self,
        agent_id: &str,
        amount: u64,
    ) -> Result<TransactionRecommendation, GatekeeperError> {
        if agent_id.trim().is_empty() {
            info!(amount, "Blank agent id, denying transaction");
            return Ok(TransactionRecommendation::not_found());
        }

        debug!(agent_id, amount, "Fetching trust score");

        let score = match self.registry.fetch_trust_score(agent_id).await {
            Ok(Some(score)) => score,
            Ok(None) => {
                info!(agent_id, amount, "Agent not found, denying transaction");
                return Ok(TransactionRecommendation::not_found());
            }
            Err(e) => {
                if e.is_unavailable() {
                    warn!(agent_id, error = %e, "Registry unavailable during transaction check");
                }
                return Err(e.into());
            }
        };

        let recommendation = self.evaluate(score.total, amount);

        info!(
            agent_id,
            amount,
            score = score.total,
            required = self.config.required_score(amount),
            proceed = recommendation.proceed,
            risk = %recommendation.risk_level,
            "Transaction check complete"
        );

        Ok(recommendation)
    }

    /// Decide on a transaction given an already-known score
    ///
    /// Pure; never fails. The deny path uses its own low-score cutoff and does
    /// not consult the tier table.
    pub fn evaluate(&self, score: u8, amount: u64) -> TransactionRecommendation {
        let required = self.config.required_score(amount);

        if score >= required {
            let tier = Tier::classify(score as f64);
            let risk_level = if tier.is_safe() {
                RiskLevel::Low
            } else {
                RiskLevel::Medium
            };

            TransactionRecommendation {
                proceed: true,
                score,
                reason: format!("{} agent with score {}/100", tier.label(), score),
                risk_level,
            }
        } else {
            let risk_level = if score < self.config.high_risk_below {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            };

            TransactionRecommendation {
                proceed: false,
                score,
                reason: format!(
                    "Score {}/100 below threshold {} for {} sats transaction",
                    score, required, amount
                ),
                risk_level,
            }
        }
    }
}
