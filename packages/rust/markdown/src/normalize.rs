//! Document normalization pass for generated chapter text.
//!
//! Raw generation output arrives in mixed shapes: markdown headings at
//! levels 2/3, alternate `==`/`===` marker headings, "Section N" labels
//! baked into heading text, and sometimes its own title or intro headings.
//! This pass rewrites it into the canonical chapter document:
//!
//! 1. `# Title` header, injected Learning Objectives and Introduction
//!    sections (each followed by a horizontal rule)
//! 2. the body with headings normalized to `##`/`###` and labels stripped
//! 3. appended Summary / Reflection Questions / References placeholders,
//!    each guarded by a presence check
//!
//! Lines inside fenced code blocks pass through verbatim and are exempt
//! from every transform.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use coursegen_shared::ChapterContext;
use coursegen_shared::lang::SectionLabels;

/// Normalize one chapter's raw article text into the canonical shape.
pub fn normalize_chapter(raw: &str, ctx: &ChapterContext, labels: &SectionLabels) -> String {
    let mut content = header_sections(ctx, labels);
    content.push_str(&normalize_body(raw, ctx, labels));

    let lower = content.to_lowercase();

    if !lower.contains(&format!("## {}", labels.summary).to_lowercase()) {
        content.push_str(&format!(
            "\n\n---\n\n## {}\n\n{}",
            labels.summary, labels.summary_placeholder
        ));
    }

    let lower = content.to_lowercase();
    if !lower.contains(&format!("## {}", labels.reflection).to_lowercase()) {
        content.push_str(&format!(
            "\n\n---\n\n## {}\n\n{}\n\n{}",
            labels.reflection, labels.reflection_intro, labels.reflection_placeholder
        ));
    }

    // References only when the raw article actually carried citation markers
    if raw.contains("[1]") || raw.contains("[2]") {
        let lower = content.to_lowercase();
        if !lower.contains(&format!("## {}", labels.references).to_lowercase()) {
            content.push_str(&format!(
                "\n\n---\n\n## {}\n\n{}",
                labels.references, labels.references_placeholder
            ));
        }
    }

    let trimmed = content.trim_end_matches('\n');
    debug!(title = %ctx.title, chars = trimmed.len(), "chapter normalized");
    format!("{trimmed}\n")
}

// ---------------------------------------------------------------------------
// Injected header sections
// ---------------------------------------------------------------------------

/// Title, Learning Objectives, and Introduction sections prepended before
/// the body. Objectives and Introduction are only emitted when supplied.
fn header_sections(ctx: &ChapterContext, labels: &SectionLabels) -> String {
    let mut out = format!("# {}\n\n", ctx.title);

    if !ctx.learning_objectives.is_empty() {
        out.push_str(&format!("## {}\n\n", labels.learning_objectives));
        for objective in &ctx.learning_objectives {
            out.push_str(&format!("- {objective}\n"));
        }
        out.push_str("\n---\n\n");
    }

    if !ctx.description.is_empty() {
        out.push_str(&format!(
            "## {}\n\n{}\n\n---\n\n",
            labels.introduction, ctx.description
        ));
    }

    out
}

// ---------------------------------------------------------------------------
// Body line scan
// ---------------------------------------------------------------------------

/// Normalize the raw body: heading conversion, label stripping, duplicate
/// heading elision, and truncation at a trailing reference block.
fn normalize_body(raw: &str, ctx: &ChapterContext, labels: &SectionLabels) -> String {
    let title_lower = ctx.title.to_lowercase();
    let intro_lower = labels.introduction.to_lowercase();
    let objectives_lower = labels.learning_objectives.to_lowercase();
    let injected_intro = !ctx.description.is_empty();
    let injected_objectives = !ctx.learning_objectives.is_empty();

    let mut out: Vec<String> = Vec::new();
    let mut in_fence = false;

    for line in raw.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            out.push(line.to_string());
            continue;
        }
        if in_fence {
            out.push(line.to_string());
            continue;
        }

        let trimmed = line.trim();

        // A trailing reference block from the research service; drop it and
        // everything after, placeholders are injected instead.
        if trimmed.starts_with("== Reference") || trimmed.starts_with("== Referensi") {
            break;
        }

        // Duplicate H1 repeating the chapter title (already injected).
        if !title_lower.is_empty()
            && trimmed.starts_with("# ")
            && trimmed.to_lowercase().contains(&title_lower)
        {
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("### ") {
            push_level3(&mut out, &clean_section_title(text));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            let text_lower = text.to_lowercase();
            // Duplicate of an injected section: drop the heading line only,
            // body text underneath stays.
            if (injected_intro && text_lower.contains(&intro_lower))
                || (injected_objectives && text_lower.contains(&objectives_lower))
            {
                continue;
            }
            push_level2(&mut out, &clean_section_title(text));
        } else if trimmed.starts_with("===") {
            let text = trimmed.trim_matches('=').trim();
            push_level3(&mut out, &clean_section_title(text));
        } else if trimmed.starts_with("==") {
            let text = trimmed.trim_matches('=').trim();
            push_level2(&mut out, &clean_section_title(text));
        } else {
            out.push(line.to_string());
        }
    }

    out.join("\n")
}

/// Append a level-2 heading, separated from preceding prose by a rule.
fn push_level2(out: &mut Vec<String>, text: &str) {
    if out.last().is_some_and(|l| !l.trim().is_empty()) {
        out.push(String::new());
        out.push("---".into());
        out.push(String::new());
    }
    out.push(format!("## {text}"));
}

/// Append a level-3 heading, separated from preceding prose by a blank line.
fn push_level3(out: &mut Vec<String>, text: &str) {
    if out
        .last()
        .is_some_and(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
    {
        out.push(String::new());
    }
    out.push(format!("### {text}"));
}

// ---------------------------------------------------------------------------
// Section label stripping
// ---------------------------------------------------------------------------

/// Strip a leading "Section N" / ordinal label from heading text.
///
/// Recognized forms (case-insensitive): "Section 1: Title", "Section 1 Title",
/// "1. Title". Idempotent: already-stripped text is unchanged.
pub fn clean_section_title(title: &str) -> String {
    static SECTION_SEP_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)^section\s+\d+\s*[:.\-]\s*").expect("valid regex"));
    static SECTION_PLAIN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)^section\s+\d+\s+").expect("valid regex"));
    static ORDINAL_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\d+\s*[:.\-]\s*").expect("valid regex"));

    let mut text = title.trim().to_string();
    text = SECTION_SEP_RE.replace(&text, "").to_string();
    text = SECTION_PLAIN_RE.replace(&text, "").to_string();
    text = ORDINAL_RE.replace(&text, "").to_string();
    text.trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn en_labels() -> SectionLabels {
        SectionLabels::for_language("en")
    }

    fn ctx() -> ChapterContext {
        ChapterContext {
            title: "What is a Vector".into(),
            description: "A gentle intro to vectors.".into(),
            sections: vec!["Definition".into()],
            learning_objectives: vec!["Define a vector".into()],
        }
    }

    #[test]
    fn clean_section_title_strips_label_forms() {
        assert_eq!(clean_section_title("Section 1: Basics"), "Basics");
        assert_eq!(clean_section_title("section 2 - Basics"), "Basics");
        assert_eq!(clean_section_title("SECTION 3 Basics"), "Basics");
        assert_eq!(clean_section_title("1. Basics"), "Basics");
        assert_eq!(clean_section_title("2: Basics"), "Basics");
    }

    #[test]
    fn clean_section_title_is_idempotent() {
        let once = clean_section_title("Section 1: Basics");
        assert_eq!(clean_section_title(&once), once);
        assert_eq!(clean_section_title("Basics"), "Basics");
    }

    #[test]
    fn injects_header_sections_with_rules() {
        let result = normalize_chapter("Body text.", &ctx(), &en_labels());

        assert!(result.starts_with("# What is a Vector\n\n"));
        assert!(result.contains("## Learning Objectives\n\n- Define a vector\n"));
        assert!(result.contains("## Introduction\n\nA gentle intro to vectors.\n\n---"));
        let objectives_pos = result.find("## Learning Objectives").unwrap();
        let intro_pos = result.find("## Introduction").unwrap();
        assert!(objectives_pos < intro_pos);
    }

    #[test]
    fn skips_injected_sections_without_context() {
        let bare = ChapterContext {
            title: "Bare".into(),
            ..Default::default()
        };
        let result = normalize_chapter("Body.", &bare, &en_labels());
        assert!(!result.contains("## Learning Objectives"));
        assert!(!result.contains("## Introduction"));
    }

    #[test]
    fn converts_marker_headings() {
        let raw = "Intro prose.\n== Core Ideas ==\nSome text.\n=== Details ===\nMore.";
        let result = normalize_chapter(raw, &ctx(), &en_labels());
        assert!(result.contains("## Core Ideas"));
        assert!(result.contains("### Details"));
        assert!(!result.contains("=="));
    }

    #[test]
    fn strips_section_labels_from_headings() {
        let raw = "## Section 1: Getting Started\ntext\n### 2. Deep Dive\nmore";
        let result = normalize_chapter(raw, &ctx(), &en_labels());
        assert!(result.contains("## Getting Started"));
        assert!(result.contains("### Deep Dive"));
        assert!(!result.contains("Section 1"));
    }

    #[test]
    fn fenced_code_passes_through_verbatim() {
        let raw = "Text.\n```python\n## not a heading\n== also not ==\nx = {1}\n```\nAfter.";
        let result = normalize_chapter(raw, &ctx(), &en_labels());
        assert!(result.contains("## not a heading"));
        assert!(result.contains("== also not =="));
        assert!(result.contains("x = {1}"));
    }

    #[test]
    fn duplicate_title_heading_dropped() {
        let raw = "# What is a Vector\n\nThe body starts here.";
        let result = normalize_chapter(raw, &ctx(), &en_labels());
        assert_eq!(result.matches("# What is a Vector").count(), 1);
        assert!(result.contains("The body starts here."));
    }

    #[test]
    fn duplicate_injected_heading_dropped_but_body_kept() {
        let raw = "## Introduction\nDuplicated prose under the heading.\n## Real Section\nBody.";
        let result = normalize_chapter(raw, &ctx(), &en_labels());

        assert_eq!(result.matches("## Introduction").count(), 1);
        assert!(result.contains("Duplicated prose under the heading."));
        assert!(result.contains("## Real Section"));
    }

    #[test]
    fn appends_summary_and_reflection_placeholders() {
        let result = normalize_chapter("Body.", &ctx(), &en_labels());
        assert!(result.contains("## Summary"));
        assert!(result.contains("## Reflection Questions"));
        assert!(!result.contains("## References"));
    }

    #[test]
    fn placeholder_injection_guarded_by_presence() {
        let raw = "Body.\n\n## Summary\n\nMy own summary.";
        let result = normalize_chapter(raw, &ctx(), &en_labels());
        assert_eq!(result.matches("## Summary").count(), 1);
        assert!(result.contains("My own summary."));
    }

    #[test]
    fn references_injected_only_with_citations() {
        let raw = "Vectors are useful [1] in many fields.";
        let result = normalize_chapter(raw, &ctx(), &en_labels());
        assert!(result.contains("## References"));
    }

    #[test]
    fn reference_marker_block_truncates_body() {
        let raw = "Useful prose.\n== References ==\n[1] Some source\n[2] Another";
        let result = normalize_chapter(raw, &ctx(), &en_labels());
        assert!(result.contains("Useful prose."));
        assert!(!result.contains("Some source"));
        // The raw text carried citation markers, so a placeholder is added
        assert!(result.contains("## References"));
    }

    #[test]
    fn indonesian_labels_are_used() {
        let labels = SectionLabels::for_language("id");
        let result = normalize_chapter("Isi.", &ctx(), &labels);
        assert!(result.contains("## Tujuan Pembelajaran"));
        assert!(result.contains("## Pengantar"));
        assert!(result.contains("## Ringkasan"));
        assert!(result.contains("## Pertanyaan Refleksi"));
    }

    #[test]
    fn ends_with_single_newline() {
        let result = normalize_chapter("Body.\n\n\n", &ctx(), &en_labels());
        assert!(result.ends_with('\n'));
        assert!(!result.ends_with("\n\n"));
    }
}
