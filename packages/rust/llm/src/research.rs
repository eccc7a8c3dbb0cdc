//! Research service client.
//!
//! The primary content path delegates to an external research service that
//! grounds articles in retrieved sources. The service exposes a single
//! `POST /generate` endpoint; when it is unreachable or fails, callers fall
//! back to direct chat generation.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use coursegen_shared::{CoursegenError, Result};

/// Default timeout in seconds for research requests. Research runs a full
/// retrieval and synthesis pass per chapter, so this is generous.
const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// User-Agent string for research requests.
const USER_AGENT: &str = concat!("coursegen/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Retriever
// ---------------------------------------------------------------------------

/// Search backend used by the research service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retriever {
    Bing,
    Wiki,
    #[default]
    DuckDuckGo,
}

impl Retriever {
    /// Wire name sent to the research service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bing => "bing",
            Self::Wiki => "wiki",
            Self::DuckDuckGo => "duckduckgo",
        }
    }

    /// Parse a retriever name as given on the command line or in config.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "bing" => Ok(Self::Bing),
            "wiki" => Ok(Self::Wiki),
            "duckduckgo" => Ok(Self::DuckDuckGo),
            other => Err(CoursegenError::validation(format!(
                "unknown retriever '{other}' (expected bing, wiki, or duckduckgo)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ResearchRequest<'a> {
    topic: &'a str,
    retriever: &'static str,
    language: &'a str,
}

/// Article returned by the research service.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchArticle {
    pub article: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the research service.
#[derive(Debug, Clone)]
pub struct ResearchClient {
    http: Client,
    generate_url: String,
    retriever: Retriever,
}

impl ResearchClient {
    /// Build a client for a research service endpoint.
    pub fn new(endpoint: &str, retriever: Retriever) -> Result<Self> {
        let base = Url::parse(endpoint).map_err(|e| {
            CoursegenError::config(format!("invalid research endpoint '{endpoint}': {e}"))
        })?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CoursegenError::Network(format!("failed to build HTTP client: {e}")))?;

        let generate_url = format!("{}/generate", base.as_str().trim_end_matches('/'));

        Ok(Self {
            http,
            generate_url,
            retriever,
        })
    }

    /// Generate a researched article for a topic.
    #[instrument(skip_all, fields(retriever = self.retriever.as_str()))]
    pub async fn generate(&self, topic: &str, language: &str) -> Result<ResearchArticle> {
        let request = ResearchRequest {
            topic,
            retriever: self.retriever.as_str(),
            language,
        };

        let response = self
            .http
            .post(&self.generate_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CoursegenError::Network(format!("research request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(500).collect();
            return Err(CoursegenError::Generation(format!(
                "research service failed: HTTP {status}: {snippet}"
            )));
        }

        let article: ResearchArticle = response
            .json()
            .await
            .map_err(|e| CoursegenError::parse(format!("invalid research response: {e}")))?;

        if article.article.trim().is_empty() {
            return Err(CoursegenError::Generation(
                "research service returned an empty article".into(),
            ));
        }

        debug!(chars = article.article.len(), "research article received");
        Ok(article)
    }
}
