//! Module-to-chapter expansion orchestration.

use tracing::{info, instrument};

use coursegen_llm::TextGenerator;
use coursegen_shared::{CoursegenError, Outline, Result, Roadmap};

use crate::prompt;
use crate::repair::{self, RawOutline};

/// Expand the roadmap's modules into a chapter-level outline.
///
/// Like roadmap generation, failures propagate unchanged; a successful
/// return has already passed repair.
#[instrument(skip_all, fields(course = %roadmap.course_title))]
pub async fn expand_modules<G: TextGenerator>(
    generator: &G,
    roadmap: &Roadmap,
) -> Result<Outline> {
    let system = prompt::outline_system_prompt(&roadmap.language);
    let user = prompt::outline_user_prompt(roadmap);
    let response = generator.complete_json(&system, &user).await?;

    let raw: RawOutline = serde_json::from_str(&response)
        .map_err(|e| CoursegenError::parse(format!("invalid outline JSON: {e}")))?;
    let outline = repair::repair_outline(raw, roadmap)?;

    info!(
        modules = outline.modules.len(),
        chapters = outline.chapter_count(),
        "outline generated"
    );
    Ok(outline)
}
