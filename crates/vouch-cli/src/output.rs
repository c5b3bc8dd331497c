//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vouch_domain::{Agent, AgentPage, Review, Tier, TransactionRecommendation, TrustScore};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a transaction recommendation.
    pub fn format_recommendation(
        &self,
        agent_id: &str,
        amount: u64,
        rec: &TransactionRecommendation,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "agentId": agent_id,
                "amount": amount,
                "proceed": rec.proceed,
                "score": rec.score,
                "reason": rec.reason,
                "riskLevel": rec.risk_level.as_str(),
            }))?),
            OutputFormat::Quiet => Ok(if rec.proceed { "proceed" } else { "deny" }.to_string()),
            OutputFormat::Table => {
                let verdict = if rec.proceed {
                    self.success(&format!("PROCEED  {} sats with {}", amount, agent_id))
                } else {
                    self.error(&format!("DENY  {} sats with {}", amount, agent_id))
                };
                Ok(format!(
                    "{}\n  Score: {}/100\n  Risk:  {}\n  {}",
                    verdict,
                    rec.score,
                    rec.risk_level,
                    rec.reason
                ))
            }
        }
    }

    /// Format a trust score with its tier and dimension breakdown.
    pub fn format_score(&self, agent_id: &str, score: &TrustScore) -> Result<String> {
        let tier = score.tier();
        match self.format {
            OutputFormat::Json => {
                let dimensions: serde_json::Map<String, serde_json::Value> = score
                    .dimensions
                    .iter()
                    .map(|(name, d)| (name.to_string(), json!({"score": d.score, "max": d.max})))
                    .collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "agentId": agent_id,
                    "total": score.total,
                    "tier": tier.as_str(),
                    "label": tier.label(),
                    "confidence": score.confidence,
                    "dimensions": dimensions,
                    "riskFlags": score.risk_flags,
                    "safeToTransact": score.safe_to_transact,
                    "riskLevel": score.risk_level.as_str(),
                    "evidenceSummary": score.evidence_summary,
                }))?)
            }
            OutputFormat::Quiet => Ok(score.total.to_string()),
            OutputFormat::Table => {
                let mut out = format!(
                    "{} {}/100  {}\n",
                    agent_id,
                    score.total,
                    self.tier_colored(tier)
                );
                out.push_str(&format!(
                    "Confidence: {:.2}  Risk: {}  Safe to transact: {}\n",
                    score.confidence,
                    score.risk_level,
                    if score.safe_to_transact { "yes" } else { "no" }
                ));

                let mut builder = Builder::default();
                builder.push_record(["Dimension", "Score", "Max"]);
                for (name, d) in score.dimensions.iter() {
                    builder.push_record([
                        name.to_string(),
                        format!("{:.1}", d.score),
                        format!("{:.1}", d.max),
                    ]);
                }
                out.push_str(&self.render(builder));

                if !score.risk_flags.is_empty() {
                    out.push('\n');
                    for flag in &score.risk_flags {
                        out.push_str(&format!("\n{}", self.warning(flag)));
                    }
                }
                if !score.evidence_summary.is_empty() {
                    out.push_str(&format!("\n\n{}", score.evidence_summary));
                }
                Ok(out)
            }
        }
    }

    /// Format a single agent record.
    pub fn format_agent(&self, agent: &Agent) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&agent_json(agent))?),
            OutputFormat::Quiet => Ok(agent.id.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["ID".to_string(), agent.id.clone()]);
                builder.push_record(["Name".to_string(), agent.name.clone()]);
                builder.push_record([
                    "Description".to_string(),
                    agent.description.clone().unwrap_or_default(),
                ]);
                builder.push_record([
                    "Contact".to_string(),
                    agent.contact.clone().unwrap_or_default(),
                ]);
                builder.push_record(["Capabilities".to_string(), agent.capabilities.join(", ")]);
                builder.push_record([
                    "Registered".to_string(),
                    agent.registered_at.clone().unwrap_or_default(),
                ]);
                builder.push_record(["Reviews".to_string(), agent.review_count.to_string()]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format a page of agents.
    pub fn format_agents(&self, page: &AgentPage) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let agents: Vec<serde_json::Value> = page.agents.iter().map(agent_json).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "agents": agents,
                    "page": page.page,
                    "limit": page.limit,
                    "total": page.total,
                }))?)
            }
            OutputFormat::Quiet => {
                let ids: Vec<&str> = page.agents.iter().map(|a| a.id.as_str()).collect();
                Ok(ids.join("\n"))
            }
            OutputFormat::Table => {
                if page.agents.is_empty() {
                    return Ok(self.colorize("No agents found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Capabilities", "Reviews"]);
                for agent in &page.agents {
                    builder.push_record([
                        agent.id.clone(),
                        agent.name.clone(),
                        agent.capabilities.join(", "),
                        agent.review_count.to_string(),
                    ]);
                }

                let mut out = self.render(builder);
                out.push_str(&format!(
                    "\nPage {} ({} of {} agents)",
                    page.page,
                    page.agents.len(),
                    page.total
                ));
                if page.has_more() {
                    out.push_str(&format!("\n{}", self.info("More results: use --page")));
                }
                Ok(out)
            }
        }
    }

    /// Format a submitted review.
    pub fn format_review(&self, review: &Review) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "id": review.id,
                "agentId": review.agent_id,
                "reviewer": review.reviewer,
                "rating": review.rating,
                "comment": review.comment,
                "createdAt": review.created_at,
            }))?),
            OutputFormat::Quiet => Ok(review.id.clone()),
            OutputFormat::Table => Ok(self.success(&format!(
                "Review {} recorded for {} ({}/5)",
                review.id, review.agent_id, review.rating
            ))),
        }
    }

    /// Format a newly registered agent.
    pub fn format_registered(&self, agent: &Agent) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.success(&format!(
                "Registered '{}' as {}",
                agent.name, agent.id
            ))),
            _ => self.format_agent(agent),
        }
    }

    /// Format a badge URL.
    pub fn format_badge(&self, agent_id: &str, url: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "agentId": agent_id,
                "badgeUrl": url,
            }))?),
            _ => Ok(url.to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn tier_colored(&self, tier: Tier) -> String {
        let color = match tier {
            Tier::HighlyTrusted => "green",
            Tier::Trusted => "blue",
            Tier::Moderate => "yellow",
            Tier::NewLimited => "magenta",
            Tier::Unverified => "red",
        };
        self.colorize(&tier.to_string(), color)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn agent_json(agent: &Agent) -> serde_json::Value {
    json!({
        "id": agent.id,
        "name": agent.name,
        "description": agent.description,
        "contact": agent.contact,
        "capabilities": agent.capabilities,
        "registeredAt": agent.registered_at,
        "reviewCount": agent.review_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_domain::{DimensionScore, RiskLevel};

    fn test_score() -> TrustScore {
        let mut score = TrustScore::with_total(72);
        score.confidence = 0.8;
        score.dimensions.identity = DimensionScore::new(18.0, 20.0);
        score.risk_flags = vec!["new-contact-address".to_string()];
        score.safe_to_transact = true;
        score.risk_level = RiskLevel::Low;
        score
    }

    fn test_agent() -> Agent {
        Agent {
            id: "agent-1".to_string(),
            name: "Helper".to_string(),
            capabilities: vec!["payments".to_string(), "escrow".to_string()],
            review_count: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_recommendation_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let rec = TransactionRecommendation::not_found();
        let output = formatter.format_recommendation("ghost", 500, &rec).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["proceed"], false);
        assert_eq!(value["score"], 0);
        assert_eq!(value["riskLevel"], "unknown");
        assert_eq!(value["agentId"], "ghost");
    }

    #[test]
    fn test_recommendation_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let rec = TransactionRecommendation {
            proceed: true,
            score: 85,
            reason: "Highly Trusted agent with score 85/100".to_string(),
            risk_level: RiskLevel::Low,
        };
        assert_eq!(formatter.format_recommendation("a", 1, &rec).unwrap(), "proceed");
    }

    #[test]
    fn test_recommendation_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let rec = TransactionRecommendation::not_found();
        let output = formatter.format_recommendation("ghost", 500, &rec).unwrap();
        assert!(output.starts_with("✗ DENY"));
        assert!(output.contains("Unverified counterparty"));
    }

    #[test]
    fn test_score_table_shows_tier_and_dimensions() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_score("agent-1", &test_score()).unwrap();
        assert!(output.contains("🔵 Trusted"));
        assert!(output.contains("identity"));
        assert!(output.contains("compliance"));
        assert!(output.contains("⚠ new-contact-address"));
    }

    #[test]
    fn test_score_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_score("agent-1", &test_score()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 72);
        assert_eq!(value["tier"], Tier::Trusted.as_str());
        assert_eq!(value["dimensions"]["identity"]["score"], 18.0);
    }

    #[test]
    fn test_score_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_score("a", &test_score()).unwrap(), "72");
    }

    #[test]
    fn test_agent_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_agent(&test_agent()).unwrap();
        assert!(output.contains("Helper"));
        assert!(output.contains("payments, escrow"));
    }

    #[test]
    fn test_empty_agent_page() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_agents(&AgentPage::default()).unwrap();
        assert!(output.contains("No agents found"));
    }

    #[test]
    fn test_agent_page_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let page = AgentPage {
            agents: vec![test_agent(), test_agent()],
            page: 1,
            limit: 20,
            total: 2,
        };
        assert_eq!(formatter.format_agents(&page).unwrap(), "agent-1\nagent-1");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }

    #[test]
    fn test_message_glyphs() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.error("denied"), "✗ denied");
        assert_eq!(formatter.warning("flagged"), "⚠ flagged");
        assert_eq!(formatter.info("note"), "ℹ note");
    }
}
