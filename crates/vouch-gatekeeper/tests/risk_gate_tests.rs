//! Integration tests for the risk gate against an in-memory registry

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use vouch_domain::{
    RegistryError, RegistryService, RiskLevel, TransactionRecommendation, TrustScore,
};
use vouch_gatekeeper::{GateConfig, GatekeeperError, RiskGate};

/// In-memory registry keyed by agent id
#[derive(Default)]
struct InMemoryRegistry {
    scores: HashMap<String, i64>,
    offline: bool,
}

impl InMemoryRegistry {
    fn with(agents: &[(&str, i64)]) -> Self {
        Self {
            scores: agents
                .iter()
                .map(|(id, total)| (id.to_string(), *total))
                .collect(),
            offline: false,
        }
    }

    fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl RegistryService for InMemoryRegistry {
    async fn fetch_trust_score(&self, agent_id: &str) -> Result<Option<TrustScore>, RegistryError> {
        if self.offline {
            return Err(RegistryError::ServiceUnavailable(
                "Registry returned 503".to_string(),
            ));
        }
        Ok(self.scores.get(agent_id).map(|t| TrustScore::with_total(*t)))
    }
}

fn registry() -> InMemoryRegistry {
    InMemoryRegistry::with(&[
        ("alice", 85),
        ("bob", 45),
        ("carol", 25),
        ("dave", 15),
    ])
}

#[tokio::test]
async fn test_trusted_agent_small_payment() {
    let gate = RiskGate::with_defaults(registry());
    let rec = gate.check_transaction("alice", 500).await.unwrap();

    assert!(rec.proceed);
    assert_eq!(rec.risk_level, RiskLevel::Low);
    assert!(rec.reason.contains("Highly Trusted agent with score 85/100"));
}

#[tokio::test]
async fn test_untrusted_agent_tiny_payment() {
    let gate = RiskGate::with_defaults(registry());
    let rec = gate.check_transaction("dave", 50).await.unwrap();

    assert!(!rec.proceed);
    assert_eq!(rec.risk_level, RiskLevel::High);
    assert!(rec.reason.contains("Score 15/100 below threshold 20"));
}

#[tokio::test]
async fn test_moderate_agent_large_payment() {
    let gate = RiskGate::with_defaults(registry());
    let rec = gate.check_transaction("bob", 15_000).await.unwrap();

    assert!(!rec.proceed);
    assert_eq!(rec.risk_level, RiskLevel::Medium);
    assert!(rec.reason.contains("threshold 60"));
    assert!(rec.reason.contains("15000 sats"));
}

#[tokio::test]
async fn test_new_agent_medium_payment() {
    let gate = RiskGate::with_defaults(registry());
    let rec = gate.check_transaction("carol", 5_000).await.unwrap();

    assert!(!rec.proceed);
    assert_eq!(rec.risk_level, RiskLevel::Medium);
}

#[tokio::test]
async fn test_unknown_agent() {
    let gate = RiskGate::with_defaults(registry());

    for amount in [1, 1_000, 1_000_000] {
        let rec = gate.check_transaction("mallory", amount).await.unwrap();
        assert!(!rec.proceed);
        assert_eq!(rec.score, 0);
        assert_eq!(rec.risk_level, RiskLevel::Unknown);
        assert_eq!(
            rec.reason,
            "Agent not found in registry. Unverified counterparty."
        );
    }
}

#[tokio::test]
async fn test_blank_agent_id_is_unknown() {
    // Offline registry: a blank id must be denied without a lookup
    let gate = RiskGate::with_defaults(InMemoryRegistry::offline());

    for (id, amount) in [("", 1), ("   ", 500), ("\t", 50_000)] {
        let rec = gate.check_transaction(id, amount).await.unwrap();
        assert_eq!(rec, TransactionRecommendation::not_found());
    }
}

#[tokio::test]
async fn test_offline_registry_is_not_a_denial() {
    let gate = RiskGate::with_defaults(InMemoryRegistry::offline());
    let result = gate.check_transaction("alice", 500).await;

    match result {
        Err(GatekeeperError::ServiceUnavailable(msg)) => assert!(msg.contains("503")),
        other => panic!("Expected ServiceUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_checks_are_independent() {
    let gate = Arc::new(RiskGate::new(Arc::new(registry()), GateConfig::default()));

    let (a, b, c) = tokio::join!(
        gate.check_transaction("alice", 20_000),
        gate.check_transaction("alice", 20_000),
        gate.check_transaction("dave", 20_000),
    );

    let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
    assert_eq!(a, b);
    assert!(a.proceed);
    assert!(!c.proceed);
}

#[tokio::test]
async fn test_gate_over_shared_registry() {
    let shared = Arc::new(registry());
    let strict = RiskGate::new(
        shared.clone(),
        GateConfig {
            base_min_score: 50,
            medium_min_score: 70,
            large_min_score: 90,
            ..GateConfig::default()
        },
    );
    let lenient = RiskGate::with_defaults(shared);

    assert!(!strict.check_transaction("bob", 100).await.unwrap().proceed);
    assert!(lenient.check_transaction("bob", 100).await.unwrap().proceed);
}
