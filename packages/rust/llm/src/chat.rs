//! Azure OpenAI chat completions client.
//!
//! All structured generation (roadmap, outline) goes through
//! [`ChatClient::complete_json`], which requests a JSON-object response.
//! Free-form chapter text uses [`ChatClient::complete`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use coursegen_shared::{CoursegenError, GenerationConfig, Result};

use crate::TextGenerator;

/// Default timeout in seconds for chat completion requests.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Token budget for free-form chapter generation.
const MAX_COMPLETION_TOKENS: u32 = 16_000;

/// Sampling temperature for structured JSON generation.
const JSON_TEMPERATURE: f32 = 0.7;

/// User-Agent string for generation requests.
const USER_AGENT: &str = concat!("coursegen/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Wire types (Azure OpenAI chat completions)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for an Azure OpenAI chat deployment.
///
/// Cheap to clone; the inner `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    chat_url: String,
    api_key: String,
}

impl ChatClient {
    /// Build a client from the resolved generation config.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CoursegenError::Network(format!("failed to build HTTP client: {e}")))?;

        let chat_url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            config.endpoint, config.deployment, config.api_version
        );

        Ok(Self {
            http,
            chat_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Send a chat completion request and extract the first choice's content.
    #[instrument(skip_all, fields(json = request.response_format.is_some()))]
    async fn send(&self, request: &ChatRequest<'_>) -> Result<String> {
        let response = self
            .http
            .post(&self.chat_url)
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| CoursegenError::Network(format!("chat completion request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(500).collect();
            return Err(CoursegenError::Generation(format!(
                "chat completion failed: HTTP {status}: {snippet}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CoursegenError::parse(format!("invalid chat completion response: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                CoursegenError::Generation("chat completion returned no content".into())
            })?;

        debug!(chars = content.len(), "chat completion received");
        Ok(content)
    }
}

impl TextGenerator for ChatClient {
    /// Structured generation: the model is constrained to emit a JSON object.
    async fn complete_json(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: Some(JSON_TEMPERATURE),
            max_completion_tokens: None,
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
        };
        self.send(&request).await
    }

    /// Free-form generation for long-form chapter text.
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: None,
            max_completion_tokens: Some(MAX_COMPLETION_TOKENS),
            response_format: None,
        };
        self.send(&request).await
    }
}
