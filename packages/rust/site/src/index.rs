//! Index page synthesis.
//!
//! The index document concatenates the course header, an overview block, a
//! mermaid dependency diagram of phases and modules, a per-phase roadmap
//! table, and the full outline listing with links matching the navigation
//! manifest's slug/number scheme.

use coursegen_shared::lang::learning_focus_text;
use coursegen_shared::{Outline, Requirements, Roadmap};

use crate::frontmatter::quoted;

/// Maximum characters for a module label inside the diagram.
const DIAGRAM_LABEL_MAX: usize = 30;

/// Maximum characters for a description cell in the roadmap table.
const TABLE_DESCRIPTION_MAX: usize = 100;

struct IndexLabels {
    overview: &'static str,
    duration: &'static str,
    level: &'static str,
    focus: &'static str,
    objectives: &'static str,
    course_map: &'static str,
    roadmap: &'static str,
    outline: &'static str,
    module: &'static str,
    time: &'static str,
    description: &'static str,
}

fn index_labels(language: &str) -> IndexLabels {
    if language == "id" {
        IndexLabels {
            overview: "Ikhtisar",
            duration: "Durasi",
            level: "Tingkat",
            focus: "Fokus",
            objectives: "Tujuan Kursus",
            course_map: "Peta Kursus",
            roadmap: "Peta Jalan",
            outline: "Kerangka Kursus",
            module: "Modul",
            time: "Waktu",
            description: "Deskripsi",
        }
    } else {
        IndexLabels {
            overview: "Overview",
            duration: "Duration",
            level: "Level",
            focus: "Focus",
            objectives: "Course Objectives",
            course_map: "Course Map",
            roadmap: "Roadmap",
            outline: "Course Outline",
            module: "Module",
            time: "Time",
            description: "Description",
        }
    }
}

/// Build the `index.md` document for the site.
pub fn build_index(roadmap: &Roadmap, outline: &Outline, requirements: &Requirements) -> String {
    let labels = index_labels(&roadmap.language);
    let mut out = String::new();

    out.push_str(&format!(
        "---\ntitle: {}\nsidebar_position: 0\n---\n\n",
        quoted(&roadmap.course_title)
    ));
    out.push_str(&format!("# {}\n\n", roadmap.course_title));
    out.push_str(&format!("{}\n\n", roadmap.course_description));

    // Overview
    out.push_str(&format!("## {}\n\n", labels.overview));
    out.push_str(&format!(
        "- **{}**: {}\n",
        labels.duration, roadmap.estimated_duration
    ));
    out.push_str(&format!("- **{}**: {}\n", labels.level, roadmap.level));
    out.push_str(&format!(
        "- **{}**: {}\n",
        labels.focus,
        learning_focus_text(&requirements.learning_focus, &roadmap.language)
    ));
    if !roadmap.course_objectives.is_empty() {
        out.push_str(&format!("\n### {}\n\n", labels.objectives));
        for objective in &roadmap.course_objectives {
            out.push_str(&format!("- {objective}\n"));
        }
    }
    out.push('\n');

    out.push_str(&diagram_section(roadmap, labels.course_map));
    out.push_str(&roadmap_section(roadmap, &labels));
    out.push_str(&outline_section(outline, &labels));

    out
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Mermaid flowchart of phases and their modules.
fn diagram_section(roadmap: &Roadmap, heading: &str) -> String {
    let mut out = format!("## {heading}\n\n```mermaid\nflowchart TD\n");

    for (i, phase) in roadmap.learning_path.iter().enumerate() {
        let phase_id = format!("P{}", i + 1);
        out.push_str(&format!(
            "    {phase_id}[\"{}\"]\n",
            escape_label(&phase.phase)
        ));
        for (j, module) in phase.modules.iter().enumerate() {
            let label = truncate(&escape_label(&module.module_name), DIAGRAM_LABEL_MAX);
            out.push_str(&format!("    {phase_id} --> {phase_id}M{}[\"{label}\"]\n", j + 1));
        }
        if i + 1 < roadmap.learning_path.len() {
            out.push_str(&format!("    {phase_id} --> P{}\n", i + 2));
        }
    }

    out.push_str("```\n\n");
    out
}

/// Per-phase roadmap tables.
fn roadmap_section(roadmap: &Roadmap, labels: &IndexLabels) -> String {
    let mut out = format!("## {}\n\n", labels.roadmap);

    for phase in &roadmap.learning_path {
        out.push_str(&format!("### {}\n\n", phase.phase));
        if !phase.description.is_empty() {
            out.push_str(&format!("{}\n\n", phase.description));
        }
        out.push_str(&format!(
            "| {} | {} | {} |\n|---|---|---|\n",
            labels.module, labels.description, labels.time
        ));
        for module in &phase.modules {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                module.module_name,
                truncate(&module.description, TABLE_DESCRIPTION_MAX),
                module.estimated_time
            ));
        }
        out.push('\n');
    }

    out
}

/// Full outline listing with chapter links and objectives.
fn outline_section(outline: &Outline, labels: &IndexLabels) -> String {
    let mut out = format!("## {}\n\n", labels.outline);

    for module in &outline.modules {
        out.push_str(&format!(
            "### {} {}: {}\n\n",
            labels.module, module.module_number, module.module_name
        ));
        if !module.description.is_empty() {
            out.push_str(&format!("{}\n\n", module.description));
        }
        for chapter in &module.chapters {
            out.push_str(&format!(
                "- [{}]({}/chapter-{})\n",
                chapter.title, module.module_slug, chapter.chapter_number
            ));
            for objective in &chapter.learning_objectives {
                out.push_str(&format!("  - {objective}\n"));
            }
        }
        out.push('\n');
    }

    out
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Replace double quotes so labels stay valid inside diagram node syntax.
fn escape_label(text: &str) -> String {
    text.replace('"', "'")
}

/// Truncate to `max` characters with an ellipsis (character-based, never
/// splits a multi-byte character).
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_shared::{Chapter, OutlineModule, Phase, RoadmapModule};

    fn sample() -> (Roadmap, Outline) {
        let roadmap = Roadmap {
            course_title: "Graph Theory Basics".into(),
            course_description: "Graphs from the ground up.".into(),
            estimated_duration: "4 weeks".into(),
            level: "beginner".into(),
            course_objectives: vec!["Understand traversal".into()],
            learning_path: vec![
                Phase {
                    phase: "Foundations".into(),
                    description: "Core ideas".into(),
                    modules: vec![RoadmapModule {
                        module_name: "A very long module name that keeps going on".into(),
                        description: "d".repeat(150),
                        estimated_time: "1 week".into(),
                        prerequisites: vec![],
                        topics: vec![],
                    }],
                },
                Phase {
                    phase: "Applications".into(),
                    description: "".into(),
                    modules: vec![],
                },
            ],
            topic: "Graphs".into(),
            language: "en".into(),
            audience: "beginner".into(),
        };
        let outline = Outline {
            topic: "Graph Theory Basics".into(),
            language: "en".into(),
            audience: "beginner".into(),
            modules: vec![OutlineModule {
                module_number: 1,
                module_name: "Traversal".into(),
                module_slug: "module-1".into(),
                description: "Walks and searches".into(),
                chapters: vec![Chapter {
                    chapter_number: 1,
                    title: "Breadth-First Search".into(),
                    description: "".into(),
                    sections: vec![],
                    learning_objectives: vec!["Run BFS by hand".into()],
                }],
            }],
        };
        (roadmap, outline)
    }

    #[test]
    fn index_carries_all_sections() {
        let (roadmap, outline) = sample();
        let index = build_index(&roadmap, &outline, &Requirements::default());

        assert!(index.starts_with("---\ntitle: \"Graph Theory Basics\"\n"));
        assert!(index.contains("# Graph Theory Basics"));
        assert!(index.contains("## Overview"));
        assert!(index.contains("- **Duration**: 4 weeks"));
        assert!(index.contains("```mermaid"));
        assert!(index.contains("## Roadmap"));
        assert!(index.contains("### Foundations"));
        assert!(index.contains("## Course Outline"));
        assert!(index.contains("[Breadth-First Search](module-1/chapter-1)"));
        assert!(index.contains("  - Run BFS by hand"));
    }

    #[test]
    fn diagram_truncates_long_module_labels() {
        let (roadmap, _) = sample();
        let section = diagram_section(&roadmap, "Course Map");
        assert!(section.contains("P1M1[\"A very long module name that k...\"]"));
        assert!(section.contains("P1 --> P2"));
    }

    #[test]
    fn table_truncates_long_descriptions() {
        let (roadmap, _) = sample();
        let index = build_index(&roadmap, &sample().1, &Requirements::default());
        let truncated = format!("{}...", "d".repeat(100));
        assert!(index.contains(&truncated));
        assert!(!index.contains(&"d".repeat(101)));
    }

    #[test]
    fn labels_quote_escaped() {
        assert_eq!(escape_label(r#"The "best" module"#), "The 'best' module");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let text = "ééééééééééé";
        let result = truncate(text, 5);
        assert_eq!(result, "ééééé...");
    }
}
