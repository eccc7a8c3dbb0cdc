//! Chapter rendering: generation plus normalization, written to disk.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use coursegen_llm::{ContentGenerator, TextGenerator};
use coursegen_markdown::normalize_chapter;
use coursegen_shared::lang::SectionLabels;
use coursegen_shared::{ChapterContext, ChapterMeta, CoursegenError, Outline, Result};

use crate::pipeline::ProgressReporter;

/// Render every chapter of the outline into `content_dir`.
///
/// Layout: `content_dir/<module-slug>/chapter-N.md` plus a
/// `chapter-N.meta.json` sidecar per chapter. Chapters render sequentially;
/// a chapter's fatal generation error aborts the remaining run and leaves
/// no partial file for that chapter.
#[instrument(skip_all, fields(chapters = outline.chapter_count()))]
pub async fn render_chapters<G: TextGenerator>(
    generator: &ContentGenerator<G>,
    outline: &Outline,
    content_dir: &Path,
    progress: &dyn ProgressReporter,
) -> Result<Vec<PathBuf>> {
    let labels = SectionLabels::for_language(&outline.language);
    let total = outline.chapter_count();
    let mut files = Vec::with_capacity(total);
    let mut current = 0;

    for module in &outline.modules {
        let module_dir = content_dir.join(&module.module_slug);
        std::fs::create_dir_all(&module_dir).map_err(|e| CoursegenError::io(&module_dir, e))?;

        for chapter in &module.chapters {
            current += 1;
            progress.chapter_rendered(&chapter.title, current, total);

            let topic = format!("{}: {}", module.module_name, chapter.title);
            let ctx = ChapterContext::from(chapter);
            let raw = generator.generate_chapter(&topic, &ctx).await?;
            let normalized = normalize_chapter(&raw, &ctx, &labels);

            let file_name = format!("chapter-{}.md", chapter.chapter_number);
            let file_path = module_dir.join(&file_name);
            std::fs::write(&file_path, &normalized)
                .map_err(|e| CoursegenError::io(&file_path, e))?;

            let meta = ChapterMeta {
                module_number: module.module_number,
                chapter_number: chapter.chapter_number,
                title: chapter.title.clone(),
                file: format!("{}/{}", module.module_slug, file_name),
            };
            let meta_path =
                module_dir.join(format!("chapter-{}.meta.json", chapter.chapter_number));
            let json = serde_json::to_string_pretty(&meta).map_err(|e| {
                CoursegenError::validation(format!("JSON serialization failed: {e}"))
            })?;
            std::fs::write(&meta_path, json).map_err(|e| CoursegenError::io(&meta_path, e))?;

            debug!(path = %file_path.display(), "chapter rendered");
            files.push(file_path);
        }
    }

    info!(rendered = files.len(), "all chapters rendered");
    Ok(files)
}
