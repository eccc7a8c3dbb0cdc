//! Site assembly.
//!
//! Takes the outline plus rendered chapter files on disk and produces the
//! navigation-ready site tree: per-module directories with category
//! descriptors, chapter files with injected front-matter and MDX-safe
//! bodies, the sidebar manifest, and the index page.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use coursegen_shared::{CoursegenError, Outline, Requirements, Result, Roadmap};

use crate::frontmatter::{self, quoted};
use crate::index::build_index;
use crate::mdx::escape_braces;
use crate::sidebar::build_sidebar;

/// Output from a successful site assembly.
#[derive(Debug, Clone)]
pub struct SiteResult {
    /// Root of the assembled site.
    pub site_dir: PathBuf,
    /// The docs directory under the site root.
    pub docs_dir: PathBuf,
    /// Number of chapter documents written.
    pub chapter_count: usize,
}

/// Assemble the site from rendered chapter files.
///
/// `content_dir` is the renderer's output root: one subdirectory per module
/// slug containing `chapter-N.md` files. The layout produced is:
///
/// ```text
/// <site_dir>/
/// ├── docs/
/// │   ├── index.md
/// │   └── <module-slug>/
/// │       ├── _category_.json
/// │       └── chapter-N.md
/// └── sidebars.json
/// ```
#[instrument(skip_all, fields(site = %site_dir.display(), modules = outline.modules.len()))]
pub fn assemble_site(
    roadmap: &Roadmap,
    outline: &Outline,
    requirements: &Requirements,
    content_dir: &Path,
    site_dir: &Path,
) -> Result<SiteResult> {
    let docs_dir = site_dir.join("docs");
    std::fs::create_dir_all(&docs_dir).map_err(|e| CoursegenError::io(&docs_dir, e))?;

    let mut chapter_count = 0;
    for module in &outline.modules {
        let module_dir = docs_dir.join(&module.module_slug);
        std::fs::create_dir_all(&module_dir).map_err(|e| CoursegenError::io(&module_dir, e))?;

        write_category(&module_dir, &module.module_name, &outline.language)?;

        for chapter in &module.chapters {
            let file_name = format!("chapter-{}.md", chapter.chapter_number);
            let source = content_dir.join(&module.module_slug).join(&file_name);
            let content =
                std::fs::read_to_string(&source).map_err(|e| CoursegenError::io(&source, e))?;

            let (existing, body) = frontmatter::split_front_matter(&content);
            let injected = vec![
                ("title".to_string(), quoted(&chapter.title)),
                (
                    "sidebar_position".to_string(),
                    chapter.chapter_number.to_string(),
                ),
                ("part".to_string(), quoted(&module.module_slug)),
                ("part_title".to_string(), quoted(&module.module_name)),
            ];
            let merged = frontmatter::merge(&existing, &injected);

            let document = format!(
                "{}\n{}",
                frontmatter::render(&merged),
                escape_braces(body)
            );

            let target = module_dir.join(&file_name);
            std::fs::write(&target, document).map_err(|e| CoursegenError::io(&target, e))?;
            debug!(path = %target.display(), "wrote site chapter");
            chapter_count += 1;
        }
    }

    let index = build_index(roadmap, outline, requirements);
    let index_path = docs_dir.join("index.md");
    std::fs::write(&index_path, index).map_err(|e| CoursegenError::io(&index_path, e))?;

    let sidebar = build_sidebar(outline);
    write_json(&site_dir.join("sidebars.json"), &sidebar)?;

    info!(chapter_count, "site assembly complete");

    Ok(SiteResult {
        site_dir: site_dir.to_path_buf(),
        docs_dir,
        chapter_count,
    })
}

/// Write a module directory's category descriptor. Indonesian sites use the
/// `label_id` key; everything else uses `label`.
fn write_category(module_dir: &Path, module_name: &str, language: &str) -> Result<()> {
    let label_key = if language == "id" { "label_id" } else { "label" };
    let category = serde_json::json!({
        label_key: module_name,
        "position": 1,
    });
    write_json(&module_dir.join("_category_.json"), &category)
}

/// Write a JSON file (pretty-printed).
fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| CoursegenError::validation(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json).map_err(|e| CoursegenError::io(path, e))?;
    debug!(path = %path.display(), "wrote JSON file");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
