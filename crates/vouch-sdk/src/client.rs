//! Registry client implementation.

use crate::config::ClientConfig;
use crate::error::SdkError;
use crate::wire::{
    AgentPageWire, AgentWire, ErrorBody, RegistrationWire, ReviewSubmissionWire, ReviewWire,
    TrustScoreWire,
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};
use vouch_domain::{
    Agent, AgentPage, AgentRegistration, RegistryError, RegistryService, Review, ReviewSubmission,
    TrustScore,
};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Largest page size accepted by `list_agents`
pub const MAX_PAGE_SIZE: u32 = 100;

/// HTTP client for the agent trust registry
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: Url,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a new registry client
    ///
    /// Fails if the base URL cannot be parsed or cannot carry a path.
    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            SdkError::Config(format!("Invalid registry URL '{}': {}", config.base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(SdkError::Config(format!(
                "Registry URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        if config.timeout_secs == 0 {
            return Err(SdkError::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            api_key: config.api_key,
            http,
        })
    }

    /// Registry base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of the SVG trust badge for an agent
    ///
    /// Pure URL construction, no request is made.
    pub fn badge_url(&self, agent_id: &str) -> String {
        self.endpoint(&["agents", agent_id, "badge.svg"]).into()
    }

    /// Fetch an agent record
    pub async fn fetch_agent(&self, agent_id: &str) -> Result<Agent, SdkError> {
        require_agent_id(agent_id)?;

        let url = self.endpoint(&["agents", agent_id]);
        let response = self.send(self.request(Method::GET, url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SdkError::NotFound(agent_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(failure(response, "Agent lookup").await);
        }

        let agent: AgentWire = response.json().await?;
        Ok(agent.into())
    }

    /// Fetch an agent's current trust score
    ///
    /// Returns `Ok(None)` when the registry has no record of the agent.
    pub async fn fetch_trust_score(&self, agent_id: &str) -> Result<Option<TrustScore>, SdkError> {
        require_agent_id(agent_id)?;

        let url = self.endpoint(&["agents", agent_id, "trust"]);
        let response = self.send(self.request(Method::GET, url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(agent_id, "No trust score on record");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(failure(response, "Trust score lookup").await);
        }

        let score: TrustScoreWire = response.json().await?;
        Ok(Some(score.into()))
    }

    /// Register a new agent
    pub async fn register_agent(&self, registration: &AgentRegistration) -> Result<Agent, SdkError> {
        if registration.name.trim().is_empty() {
            return Err(SdkError::InvalidInput("Agent name must not be empty".to_string()));
        }

        let url = self.endpoint(&["agents"]);
        let request = self
            .request(Method::POST, url)
            .json(&RegistrationWire::from(registration));
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(failure(response, "Registration").await);
        }

        let agent: AgentWire = response.json().await?;
        Ok(agent.into())
    }

    /// Submit a review for an agent
    pub async fn submit_review(
        &self,
        agent_id: &str,
        review: &ReviewSubmission,
    ) -> Result<Review, SdkError> {
        require_agent_id(agent_id)?;
        if !review.has_valid_rating() {
            return Err(SdkError::InvalidInput(format!(
                "Rating must be between {} and {}, got {}",
                vouch_domain::agent::MIN_RATING,
                vouch_domain::agent::MAX_RATING,
                review.rating
            )));
        }

        let url = self.endpoint(&["agents", agent_id, "reviews"]);
        let request = self
            .request(Method::POST, url)
            .json(&ReviewSubmissionWire::from(review));
        let response = self.send(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SdkError::NotFound(agent_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(failure(response, "Review submission").await);
        }

        let review: ReviewWire = response.json().await?;
        Ok(review.into())
    }

    /// List registered agents, one page at a time
    ///
    /// `page` is 1-based; `limit` is clamped to 1..=100.
    pub async fn list_agents(&self, page: u32, limit: u32) -> Result<AgentPage, SdkError> {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);

        let url = self.endpoint(&["agents"]);
        let request = self
            .request(Method::GET, url)
            .query(&[("page", page), ("limit", limit)]);
        let response = self.send(request).await?;

        if !response.status().is_success() {
            return Err(failure(response, "Agent listing").await);
        }

        let mut listing: AgentPage = response.json::<AgentPageWire>().await?.into();
        if listing.page == 0 {
            listing.page = page;
        }
        if listing.limit == 0 {
            listing.limit = limit;
        }
        Ok(listing)
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.http.request(method, url);
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    /// Send a request, folding transport failures and gateway statuses into
    /// `ServiceUnavailable`
    async fn send(&self, request: RequestBuilder) -> Result<Response, SdkError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Registry request failed");
            SdkError::from(e)
        })?;

        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "Registry responded");

        if is_gateway_status(status) {
            warn!(status = status.as_u16(), "Registry is offline");
            return Err(SdkError::ServiceUnavailable(format!(
                "Registry returned {}",
                status
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl RegistryService for RegistryClient {
    async fn fetch_trust_score(&self, agent_id: &str) -> Result<Option<TrustScore>, RegistryError> {
        RegistryClient::fetch_trust_score(self, agent_id)
            .await
            .map_err(RegistryError::from)
    }
}

/// Statuses treated as "registry offline"
pub fn is_gateway_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
    )
}

fn require_agent_id(agent_id: &str) -> Result<(), SdkError> {
    if agent_id.trim().is_empty() {
        return Err(SdkError::InvalidInput("Agent ID must not be empty".to_string()));
    }
    Ok(())
}

/// Build an `OperationFailed` from a non-success response
async fn failure(response: Response, operation: &str) -> SdkError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("{} failed ({})", operation, status));

    SdkError::OperationFailed { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> RegistryClient {
        RegistryClient::new(ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_invalid_base_url() {
        let result = RegistryClient::new(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(SdkError::Config(_))));

        let result = RegistryClient::new(ClientConfig::new("mailto:ops@example.com"));
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = RegistryClient::new(ClientConfig::new("http://localhost:8080").with_timeout_secs(0));
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let c = client("https://registry.example.com/api/");
        assert_eq!(
            c.endpoint(&["agents", "a1", "trust"]).as_str(),
            "https://registry.example.com/api/agents/a1/trust"
        );

        let c = client("https://registry.example.com");
        assert_eq!(
            c.endpoint(&["agents"]).as_str(),
            "https://registry.example.com/agents"
        );
    }

    #[test]
    fn test_badge_url_encodes_id() {
        let c = client("https://registry.example.com/v1");
        assert_eq!(
            c.badge_url("agent/one two"),
            "https://registry.example.com/v1/agents/agent%2Fone%20two/badge.svg"
        );
    }

    #[test]
    fn test_gateway_statuses() {
        assert!(is_gateway_status(StatusCode::BAD_GATEWAY));
        assert!(is_gateway_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_gateway_status(StatusCode::GATEWAY_TIMEOUT));
        assert!(!is_gateway_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_gateway_status(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_empty_agent_id_rejected_locally() {
        let c = client("http://localhost:9");
        assert!(matches!(
            c.fetch_trust_score("  ").await,
            Err(SdkError::InvalidInput(_))
        ));
        assert!(matches!(c.fetch_agent("").await, Err(SdkError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_rating_validated_locally() {
        let c = client("http://localhost:9");
        let review = ReviewSubmission {
            reviewer: "me".to_string(),
            rating: 9,
            comment: None,
        };
        let err = c.submit_review("agent-1", &review).await.unwrap_err();
        assert!(matches!(err, SdkError::InvalidInput(_)));
        assert!(err.to_string().contains("between 1 and 5"));
    }
}
