//! Domain types for the course generation pipeline.
//!
//! Lifecycle: [`Requirements`] → [`Roadmap`] → [`Outline`] → rendered
//! chapters → site documents. Each stage's output is the next stage's sole
//! input; persisted artifacts are rewritten whole, never patched.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

/// Answers from the course requirements questionnaire.
///
/// `learning_focus` is an enumerated option code ("1".."4"); the mapping to
/// human-readable text lives in [`crate::lang::learning_focus_text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub learning_goals: String,
    #[serde(default)]
    pub time_dedication: String,
    #[serde(default)]
    pub prior_knowledge: String,
    #[serde(default)]
    pub learning_focus: String,
    #[serde(default)]
    pub expected_outcomes: String,
}

// ---------------------------------------------------------------------------
// Roadmap
// ---------------------------------------------------------------------------

/// Phased, module-level curriculum for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub course_title: String,
    pub course_description: String,
    pub estimated_duration: String,
    pub level: String,
    pub course_objectives: Vec<String>,
    pub learning_path: Vec<Phase>,
    /// Original topic, stamped during repair.
    pub topic: String,
    /// Language code, stamped during repair.
    pub language: String,
    /// Audience level, stamped during repair.
    pub audience: String,
}

/// One learning phase within a roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub phase: String,
    pub description: String,
    pub modules: Vec<RoadmapModule>,
}

/// A module as named in the roadmap (before chapter breakdown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapModule {
    pub module_name: String,
    pub description: String,
    pub estimated_time: String,
    pub prerequisites: Vec<String>,
    pub topics: Vec<String>,
}

impl Roadmap {
    /// Total module count across all phases.
    pub fn module_count(&self) -> usize {
        self.learning_path.iter().map(|p| p.modules.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

/// Chapter-level breakdown of the roadmap's modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub topic: String,
    pub language: String,
    pub audience: String,
    pub modules: Vec<OutlineModule>,
}

/// One module of the outline, with its chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineModule {
    pub module_number: u32,
    pub module_name: String,
    pub module_slug: String,
    pub description: String,
    pub chapters: Vec<Chapter>,
}

/// A single chapter: sections to cover plus learning objectives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter_number: u32,
    pub title: String,
    pub description: String,
    pub sections: Vec<String>,
    pub learning_objectives: Vec<String>,
}

impl Outline {
    /// Total chapter count across all modules.
    pub fn chapter_count(&self) -> usize {
        self.modules.iter().map(|m| m.chapters.len()).sum()
    }

    /// Derive the legacy flat "parts" view (modules renamed to parts,
    /// chapters unchanged). Pure; the canonical representation stays
    /// module-based throughout the pipeline.
    pub fn to_parts(&self) -> Vec<Part> {
        self.modules
            .iter()
            .map(|m| Part {
                part_number: m.module_number,
                title: m.module_name.clone(),
                description: m.description.clone(),
                chapters: m.chapters.clone(),
            })
            .collect()
    }
}

/// Legacy flat view of an outline module, persisted only in `outline.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub part_number: u32,
    pub title: String,
    pub description: String,
    pub chapters: Vec<Chapter>,
}

/// The legacy `outline.json` artifact written for backward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyOutline {
    pub topic: String,
    pub language: String,
    pub audience: String,
    pub parts: Vec<Part>,
}

impl From<&Outline> for LegacyOutline {
    fn from(outline: &Outline) -> Self {
        Self {
            topic: outline.topic.clone(),
            language: outline.language.clone(),
            audience: outline.audience.clone(),
            parts: outline.to_parts(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Context handed to the content generator and the normalization pass
/// for a single chapter.
#[derive(Debug, Clone, Default)]
pub struct ChapterContext {
    pub title: String,
    pub description: String,
    pub sections: Vec<String>,
    pub learning_objectives: Vec<String>,
}

impl From<&Chapter> for ChapterContext {
    fn from(chapter: &Chapter) -> Self {
        Self {
            title: chapter.title.clone(),
            description: chapter.description.clone(),
            sections: chapter.sections.clone(),
            learning_objectives: chapter.learning_objectives.clone(),
        }
    }
}

/// Sidecar metadata written next to each rendered chapter file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterMeta {
    pub module_number: u32,
    pub chapter_number: u32,
    pub title: String,
    pub file: String,
}

// ---------------------------------------------------------------------------
// Site navigation
// ---------------------------------------------------------------------------

/// Navigation manifest for the generated site (`sidebars.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarConfig {
    pub docs: Vec<SidebarCategory>,
}

/// One sidebar category: a module and its ordered document references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarCategory {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outline() -> Outline {
        Outline {
            topic: "Linear Algebra".into(),
            language: "en".into(),
            audience: "beginner".into(),
            modules: vec![OutlineModule {
                module_number: 1,
                module_name: "Vectors".into(),
                module_slug: "module-1".into(),
                description: "Vector basics".into(),
                chapters: vec![Chapter {
                    chapter_number: 1,
                    title: "What is a Vector".into(),
                    description: "Intro".into(),
                    sections: vec!["Definition".into()],
                    learning_objectives: vec!["Define a vector".into()],
                }],
            }],
        }
    }

    #[test]
    fn parts_view_renames_modules() {
        let outline = sample_outline();
        let parts = outline.to_parts();

        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].part_number, 1);
        assert_eq!(parts[0].title, "Vectors");
        assert_eq!(parts[0].chapters, outline.modules[0].chapters);
    }

    #[test]
    fn parts_view_is_pure() {
        let outline = sample_outline();
        let before = outline.clone();
        let _ = outline.to_parts();
        assert_eq!(outline, before);
    }

    #[test]
    fn legacy_outline_serializes_parts_only() {
        let outline = sample_outline();
        let legacy = LegacyOutline::from(&outline);
        let json = serde_json::to_string(&legacy).unwrap();

        assert!(json.contains("\"parts\""));
        assert!(!json.contains("\"modules\""));
    }

    #[test]
    fn sidebar_category_serializes_type_key() {
        let category = SidebarCategory {
            kind: "category".into(),
            label: "Vectors".into(),
            items: vec!["module-1/chapter-1".into()],
        };
        let json = serde_json::to_string(&category).unwrap();
        assert!(json.contains("\"type\":\"category\""));
    }
}
