//! End-to-end course pipeline: topic → roadmap → outline → chapters → site.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use tracing::{info, instrument};

use coursegen_llm::{ContentGenerator, TextGenerator};
use coursegen_outline::{expand_modules, generate_roadmap};
use coursegen_shared::{
    CoursegenError, LegacyOutline, Outline, Requirements, Result, Roadmap,
};
use coursegen_site::{SiteResult, assemble_site};

use crate::render::render_chapters;

/// Configuration for a course generation run.
#[derive(Debug, Clone)]
pub struct CourseConfig {
    /// Course topic.
    pub topic: String,
    /// Language code for all generated content.
    pub language: String,
    /// Audience level.
    pub audience: String,
    /// Directory for intermediate artifacts and rendered content.
    pub output_dir: PathBuf,
    /// Directory for the assembled site.
    pub site_dir: PathBuf,
}

/// Result of a completed course generation run.
#[derive(Debug)]
pub struct CourseResult {
    /// The repaired roadmap.
    pub roadmap: Roadmap,
    /// The repaired outline.
    pub outline: Outline,
    /// Rendered chapter markdown files, in render order.
    pub content_files: Vec<PathBuf>,
    /// The renderer's output root.
    pub content_dir: PathBuf,
    /// Assembled site info.
    pub site: SiteResult,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when a chapter starts rendering.
    fn chapter_rendered(&self, title: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &CourseResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn chapter_rendered(&self, _title: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &CourseResult) {}
}

/// Run the full course pipeline.
///
/// 1. Persist requirements
/// 2. Generate + repair roadmap
/// 3. Expand modules into the outline
/// 4. Render chapters (primary/fallback generation + normalization)
/// 5. Assemble the site
///
/// Every stage runs to completion or fails the run; intermediate artifacts
/// written before a failure are left in place.
#[instrument(skip_all, fields(topic = %config.topic, language = %config.language))]
pub async fn run_course<G, F>(
    config: &CourseConfig,
    requirements: &Requirements,
    generator: &G,
    content: &ContentGenerator<F>,
    progress: &dyn ProgressReporter,
) -> Result<CourseResult>
where
    G: TextGenerator,
    F: TextGenerator,
{
    let start = Instant::now();
    info!(topic = %config.topic, "starting course pipeline");

    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| CoursegenError::io(&config.output_dir, e))?;

    // --- Phase 1: Requirements ---
    progress.phase("Saving requirements");
    write_json(
        &config.output_dir.join("course_requirements.json"),
        requirements,
    )?;

    // --- Phase 2: Roadmap ---
    progress.phase("Generating roadmap");
    let roadmap = generate_roadmap(
        generator,
        &config.topic,
        requirements,
        &config.language,
        &config.audience,
    )
    .await?;
    write_json(&config.output_dir.join("course_roadmap.json"), &roadmap)?;

    // --- Phase 3: Outline ---
    progress.phase("Expanding modules");
    let outline = expand_modules(generator, &roadmap).await?;
    write_json(&config.output_dir.join("course_outline.json"), &outline)?;
    write_json(
        &config.output_dir.join("outline.json"),
        &LegacyOutline::from(&outline),
    )?;

    // --- Phase 4: Chapters ---
    progress.phase("Rendering chapters");
    let content_dir = config.output_dir.join("content");
    let content_files = render_chapters(content, &outline, &content_dir, progress).await?;

    // --- Phase 5: Site ---
    progress.phase("Assembling site");
    let site = assemble_site(
        &roadmap,
        &outline,
        requirements,
        &content_dir,
        &config.site_dir,
    )?;

    let result = CourseResult {
        roadmap,
        outline,
        content_files,
        content_dir,
        site,
        elapsed: start.elapsed(),
    };

    info!(
        phases = result.roadmap.learning_path.len(),
        chapters = result.outline.chapter_count(),
        elapsed = ?result.elapsed,
        "course pipeline complete"
    );
    progress.done(&result);
    Ok(result)
}

/// Write the aggregated `summary.json` for a completed run.
pub fn save_summary(
    config: &CourseConfig,
    requirements: &Requirements,
    result: &CourseResult,
) -> Result<PathBuf> {
    let summary = serde_json::json!({
        "topic": config.topic,
        "course_title": result.roadmap.course_title,
        "language": config.language,
        "audience": config.audience,
        "course_requirements": requirements,
        "roadmap": {
            "phases": result.roadmap.learning_path.len(),
            "modules": result.roadmap.module_count(),
        },
        "outline": {
            "modules": result.outline.modules.len(),
            "chapters": result.outline.chapter_count(),
        },
        "content_files": result.content_files,
        "files": {
            "requirements": config.output_dir.join("course_requirements.json"),
            "roadmap": config.output_dir.join("course_roadmap.json"),
            "outline": config.output_dir.join("course_outline.json"),
            "content_dir": result.content_dir,
        },
        "generated_at": Utc::now(),
    });

    let path = config.output_dir.join("summary.json");
    write_json(&path, &summary)?;
    Ok(path)
}

/// Write a JSON file (pretty-printed).
fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| CoursegenError::validation(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json).map_err(|e| CoursegenError::io(path, e))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
