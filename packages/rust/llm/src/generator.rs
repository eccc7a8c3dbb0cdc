//! Chapter content generation with primary/fallback routing.
//!
//! Chapters are generated by the research service when one is configured;
//! any research failure falls back silently (with a warning log) to direct
//! chat generation. A fallback failure is fatal for the run.

use tracing::{info, instrument, warn};

use coursegen_shared::lang::language_instruction;
use coursegen_shared::{ChapterContext, Result};

use crate::research::ResearchClient;
use crate::TextGenerator;

/// Generates chapter articles, preferring researched content.
///
/// Whether the research path is available is decided once at construction;
/// per-chapter failures do not disable it for later chapters.
#[derive(Debug, Clone)]
pub struct ContentGenerator<G> {
    research: Option<ResearchClient>,
    fallback: G,
    language: String,
}

impl<G: TextGenerator> ContentGenerator<G> {
    pub fn new(research: Option<ResearchClient>, fallback: G, language: &str) -> Self {
        Self {
            research,
            fallback,
            language: language.to_string(),
        }
    }

    /// Whether the research path is configured.
    pub fn has_research(&self) -> bool {
        self.research.is_some()
    }

    /// Generate the raw article for one chapter.
    ///
    /// `topic` is the chapter's full topic line ("{module name}: {chapter
    /// title}"); the chapter context enriches the request with description,
    /// sections, and learning objectives.
    #[instrument(skip_all, fields(topic = %topic))]
    pub async fn generate_chapter(&self, topic: &str, ctx: &ChapterContext) -> Result<String> {
        let enhanced = build_enhanced_topic(topic, ctx, &self.language);

        if let Some(research) = &self.research {
            match research.generate(&enhanced, &self.language).await {
                Ok(article) => {
                    info!("chapter generated via research service");
                    return Ok(article.article);
                }
                Err(e) => {
                    warn!(error = %e, "research generation failed, falling back to chat");
                }
            }
        }

        let system = content_system_prompt(&self.language);
        let user = content_user_prompt(&enhanced, &self.language);
        let article = self.fallback.complete(&system, &user).await?;
        info!("chapter generated via chat fallback");
        Ok(article)
    }
}

// ---------------------------------------------------------------------------
// Prompt construction
// ---------------------------------------------------------------------------

/// Build the enhanced topic string sent to either generation path.
fn build_enhanced_topic(topic: &str, ctx: &ChapterContext, language: &str) -> String {
    let mut enhanced = topic.to_string();

    if !ctx.description.is_empty() {
        enhanced.push_str(&format!("\n\nContext: {}", ctx.description));
    }
    if !ctx.sections.is_empty() {
        enhanced.push_str(&format!(
            "\n\nKey sections to cover: {}",
            ctx.sections.join(", ")
        ));
    }
    if !ctx.learning_objectives.is_empty() {
        enhanced.push_str("\n\nLearning objectives:");
        for objective in &ctx.learning_objectives {
            enhanced.push_str(&format!("\n- {objective}"));
        }
    }

    enhanced.push_str(&format!("\n\n{}", language_instruction(language)));
    enhanced
}

/// System prompt for the chat fallback path.
fn content_system_prompt(language: &str) -> String {
    if language == "id" {
        "Anda adalah penulis materi pembelajaran yang berpengalaman. Tulis materi \
         yang terstruktur, akurat, dan mudah dipahami dalam format Markdown. \
         Gunakan heading '##' untuk setiap bagian utama dan sertakan contoh \
         konkret di mana relevan."
            .to_string()
    } else {
        "You are an experienced educational content writer. Write structured, \
         accurate, and easy-to-understand learning material in Markdown format. \
         Use '##' headings for each major section and include concrete examples \
         where relevant."
            .to_string()
    }
}

/// User prompt for the chat fallback path.
fn content_user_prompt(enhanced_topic: &str, language: &str) -> String {
    if language == "id" {
        format!(
            "Tulis materi pembelajaran yang lengkap untuk topik berikut:\n\n{enhanced_topic}"
        )
    } else {
        format!(
            "Write complete learning material for the following topic:\n\n{enhanced_topic}"
        )
    }
}
