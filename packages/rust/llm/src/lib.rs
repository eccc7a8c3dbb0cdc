//! Generation backends for coursegen.
//!
//! Two HTTP services back the pipeline: the Azure OpenAI chat deployment
//! ([`ChatClient`]) for structured roadmap/outline generation and for
//! fallback chapter text, and an optional research service
//! ([`ResearchClient`]) that produces source-grounded chapter articles.
//! [`ContentGenerator`] routes between them.

mod chat;
mod generator;
mod research;

use coursegen_shared::Result;

pub use chat::ChatClient;
pub use generator::ContentGenerator;
pub use research::{ResearchArticle, ResearchClient, Retriever};

/// Abstraction over a chat completion backend.
///
/// Implemented by [`ChatClient`]; the pipeline is generic over this trait so
/// tests can substitute canned generators.
pub trait TextGenerator: Send + Sync {
    /// Complete a prompt, constraining the model to a JSON-object response.
    fn complete_json(
        &self,
        system: &str,
        user: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Complete a prompt as free-form text.
    fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
