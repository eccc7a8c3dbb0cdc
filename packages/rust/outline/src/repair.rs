//! Validation and repair of generated roadmap/outline structures.
//!
//! Generation responses arrive loosely structured: optional fields may be
//! absent, numbering may be missing or reused. Repair coerces them into the
//! canonical shapes, synthesizing defaults for anything recoverable and
//! failing only when the top-level container is missing or empty.
//!
//! Repair is idempotent: running it on already-canonical structure yields
//! the same structure.

use serde::Deserialize;

use coursegen_shared::{
    Chapter, CoursegenError, Outline, OutlineModule, Phase, Result, Roadmap, RoadmapModule,
};

// ---------------------------------------------------------------------------
// Raw schemas (every field optional)
// ---------------------------------------------------------------------------

/// Roadmap as the generation service returns it.
#[derive(Debug, Deserialize)]
pub struct RawRoadmap {
    pub course_title: Option<String>,
    pub course_description: Option<String>,
    pub estimated_duration: Option<String>,
    pub level: Option<String>,
    pub course_objectives: Option<Vec<String>>,
    pub learning_path: Option<Vec<RawPhase>>,
}

#[derive(Debug, Deserialize)]
pub struct RawPhase {
    pub phase: Option<String>,
    pub description: Option<String>,
    pub modules: Option<Vec<RawRoadmapModule>>,
}

#[derive(Debug, Deserialize)]
pub struct RawRoadmapModule {
    pub module_name: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub prerequisites: Option<Vec<String>>,
    pub topics: Option<Vec<String>>,
}

/// Outline as the generation service returns it.
#[derive(Debug, Deserialize)]
pub struct RawOutline {
    pub modules: Option<Vec<RawOutlineModule>>,
}

#[derive(Debug, Deserialize)]
pub struct RawOutlineModule {
    pub module_number: Option<u32>,
    pub module_name: Option<String>,
    pub module_slug: Option<String>,
    pub description: Option<String>,
    pub chapters: Option<Vec<RawChapter>>,
}

#[derive(Debug, Deserialize)]
pub struct RawChapter {
    pub chapter_number: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sections: Option<Vec<String>>,
    pub learning_objectives: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Roadmap repair
// ---------------------------------------------------------------------------

/// Repair a raw roadmap into the canonical shape, stamping run metadata.
///
/// Fails with a structure error when `learning_path` is missing or empty;
/// everything else is defaulted.
pub fn repair_roadmap(
    raw: RawRoadmap,
    topic: &str,
    language: &str,
    audience: &str,
) -> Result<Roadmap> {
    let learning_path = match raw.learning_path {
        Some(phases) if !phases.is_empty() => phases,
        _ => {
            return Err(CoursegenError::structure(
                "roadmap response has no learning_path phases",
            ));
        }
    };

    let learning_path = learning_path
        .into_iter()
        .enumerate()
        .map(|(i, phase)| Phase {
            phase: phase.phase.unwrap_or_else(|| format!("Phase {}", i + 1)),
            description: phase.description.unwrap_or_default(),
            modules: phase
                .modules
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .map(|(j, module)| RoadmapModule {
                    module_name: module
                        .module_name
                        .unwrap_or_else(|| format!("Module {}", j + 1)),
                    description: module.description.unwrap_or_default(),
                    estimated_time: module.estimated_time.unwrap_or_default(),
                    prerequisites: module.prerequisites.unwrap_or_default(),
                    topics: module.topics.unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    Ok(Roadmap {
        course_title: raw.course_title.unwrap_or_else(|| topic.to_string()),
        course_description: raw
            .course_description
            .unwrap_or_else(|| format!("Comprehensive course about {topic}")),
        estimated_duration: raw.estimated_duration.unwrap_or_default(),
        level: raw.level.unwrap_or_else(|| audience.to_string()),
        course_objectives: raw.course_objectives.unwrap_or_default(),
        learning_path,
        topic: topic.to_string(),
        language: language.to_string(),
        audience: audience.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Outline repair
// ---------------------------------------------------------------------------

/// Repair a raw outline into the canonical shape, stamping run metadata
/// from the roadmap.
///
/// Fails with a structure error when `modules` is missing or empty. Missing
/// chapter numbers are assigned from a single counter spanning the whole
/// outline (not reset per module), so synthesized numbers stay unique even
/// when the response omits numbering entirely.
pub fn repair_outline(raw: RawOutline, roadmap: &Roadmap) -> Result<Outline> {
    let modules = match raw.modules {
        Some(modules) if !modules.is_empty() => modules,
        _ => {
            return Err(CoursegenError::structure(
                "outline response has no modules",
            ));
        }
    };

    let mut chapter_counter: u32 = 1;
    let modules = modules
        .into_iter()
        .enumerate()
        .map(|(i, module)| {
            let position = (i + 1) as u32;
            let chapters = module
                .chapters
                .unwrap_or_default()
                .into_iter()
                .map(|chapter| {
                    let chapter_number = match chapter.chapter_number {
                        Some(n) => n,
                        None => {
                            let assigned = chapter_counter;
                            chapter_counter += 1;
                            assigned
                        }
                    };
                    Chapter {
                        chapter_number,
                        title: chapter
                            .title
                            .unwrap_or_else(|| format!("Chapter {chapter_number}")),
                        description: chapter.description.unwrap_or_default(),
                        sections: chapter.sections.unwrap_or_default(),
                        learning_objectives: chapter.learning_objectives.unwrap_or_default(),
                    }
                })
                .collect();

            OutlineModule {
                module_number: module.module_number.unwrap_or(position),
                module_name: module
                    .module_name
                    .unwrap_or_else(|| format!("Module {position}")),
                module_slug: module
                    .module_slug
                    .unwrap_or_else(|| format!("module-{position}")),
                description: module.description.unwrap_or_default(),
                chapters,
            }
        })
        .collect();

    Ok(Outline {
        topic: roadmap.course_title.clone(),
        language: roadmap.language.clone(),
        audience: roadmap.audience.clone(),
        modules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roadmap() -> Roadmap {
        Roadmap {
            course_title: "Linear Algebra Fundamentals".into(),
            course_description: "A course".into(),
            estimated_duration: "6 weeks".into(),
            level: "beginner".into(),
            course_objectives: vec!["Understand vectors".into()],
            learning_path: vec![Phase {
                phase: "Phase 1".into(),
                description: "Basics".into(),
                modules: vec![RoadmapModule {
                    module_name: "Vectors".into(),
                    description: "Vector basics".into(),
                    estimated_time: "1 week".into(),
                    prerequisites: vec![],
                    topics: vec!["Definition".into()],
                }],
            }],
            topic: "Linear Algebra".into(),
            language: "en".into(),
            audience: "beginner".into(),
        }
    }

    #[test]
    fn roadmap_missing_learning_path_is_structure_error() {
        let raw: RawRoadmap = serde_json::from_str(r#"{"course_title": "X"}"#).unwrap();
        let err = repair_roadmap(raw, "Topic", "en", "beginner").unwrap_err();
        assert!(matches!(err, CoursegenError::Structure { .. }));
    }

    #[test]
    fn roadmap_empty_learning_path_is_structure_error() {
        let raw: RawRoadmap = serde_json::from_str(r#"{"learning_path": []}"#).unwrap();
        assert!(repair_roadmap(raw, "Topic", "en", "beginner").is_err());
    }

    #[test]
    fn roadmap_sparse_entries_get_defaults() {
        let raw: RawRoadmap = serde_json::from_str(
            r#"{"learning_path": [{}, {"modules": [{}]}]}"#,
        )
        .unwrap();
        let roadmap = repair_roadmap(raw, "Rust", "en", "intermediate").unwrap();

        assert_eq!(roadmap.course_title, "Rust");
        assert_eq!(roadmap.course_description, "Comprehensive course about Rust");
        assert_eq!(roadmap.level, "intermediate");
        assert_eq!(roadmap.learning_path[0].phase, "Phase 1");
        assert_eq!(roadmap.learning_path[1].phase, "Phase 2");
        assert_eq!(roadmap.learning_path[1].modules[0].module_name, "Module 1");
        assert!(roadmap.learning_path[1].modules[0].topics.is_empty());
        assert_eq!(roadmap.topic, "Rust");
        assert_eq!(roadmap.language, "en");
    }

    #[test]
    fn roadmap_repair_is_idempotent() {
        let roadmap = sample_roadmap();
        let json = serde_json::to_string(&roadmap).unwrap();
        let raw: RawRoadmap = serde_json::from_str(&json).unwrap();
        let repaired =
            repair_roadmap(raw, &roadmap.topic, &roadmap.language, &roadmap.audience).unwrap();
        assert_eq!(repaired, roadmap);
    }

    #[test]
    fn outline_missing_modules_is_structure_error() {
        let raw: RawOutline = serde_json::from_str("{}").unwrap();
        let err = repair_outline(raw, &sample_roadmap()).unwrap_err();
        assert!(matches!(err, CoursegenError::Structure { .. }));

        let raw: RawOutline = serde_json::from_str(r#"{"modules": []}"#).unwrap();
        assert!(repair_outline(raw, &sample_roadmap()).is_err());
    }

    #[test]
    fn outline_sparse_entries_get_defaults() {
        let raw: RawOutline = serde_json::from_str(
            r#"{"modules": [{"chapters": [{}, {}]}, {"chapters": [{}]}]}"#,
        )
        .unwrap();
        let outline = repair_outline(raw, &sample_roadmap()).unwrap();

        assert_eq!(outline.topic, "Linear Algebra Fundamentals");
        assert_eq!(outline.modules[0].module_number, 1);
        assert_eq!(outline.modules[0].module_name, "Module 1");
        assert_eq!(outline.modules[0].module_slug, "module-1");
        assert_eq!(outline.modules[1].module_slug, "module-2");

        let chapters: Vec<u32> = outline
            .modules
            .iter()
            .flat_map(|m| m.chapters.iter().map(|c| c.chapter_number))
            .collect();
        assert_eq!(chapters, vec![1, 2, 3]);
        assert_eq!(outline.modules[0].chapters[0].title, "Chapter 1");
        assert_eq!(outline.modules[1].chapters[0].title, "Chapter 3");
    }

    #[test]
    fn outline_numbering_spans_modules_without_reset() {
        let raw: RawOutline = serde_json::from_str(
            r#"{"modules": [
                {"chapters": [{"chapter_number": 7, "title": "Given"}, {}]},
                {"chapters": [{}]}
            ]}"#,
        )
        .unwrap();
        let outline = repair_outline(raw, &sample_roadmap()).unwrap();

        assert_eq!(outline.modules[0].chapters[0].chapter_number, 7);
        // Synthesized numbers come from the global counter, strictly increasing
        assert_eq!(outline.modules[0].chapters[1].chapter_number, 1);
        assert_eq!(outline.modules[1].chapters[0].chapter_number, 2);
    }

    #[test]
    fn outline_repair_is_idempotent() {
        let raw: RawOutline = serde_json::from_str(
            r#"{"modules": [{"chapters": [{}, {}]}]}"#,
        )
        .unwrap();
        let roadmap = sample_roadmap();
        let once = repair_outline(raw, &roadmap).unwrap();

        let json = serde_json::to_string(&once).unwrap();
        let raw_again: RawOutline = serde_json::from_str(&json).unwrap();
        let twice = repair_outline(raw_again, &roadmap).unwrap();

        assert_eq!(once, twice);
    }
}
