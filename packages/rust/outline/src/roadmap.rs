//! Roadmap generation orchestration.

use tracing::{info, instrument};

use coursegen_llm::TextGenerator;
use coursegen_shared::{CoursegenError, Requirements, Result, Roadmap};

use crate::prompt;
use crate::repair::{self, RawRoadmap};

/// Generate and repair a course roadmap for a topic.
///
/// Generation or parse failures propagate unchanged; there is no retry and
/// no partial roadmap. A successful return has already passed repair.
#[instrument(skip_all, fields(topic = %topic, language = %language))]
pub async fn generate_roadmap<G: TextGenerator>(
    generator: &G,
    topic: &str,
    requirements: &Requirements,
    language: &str,
    audience: &str,
) -> Result<Roadmap> {
    if topic.trim().is_empty() {
        return Err(CoursegenError::validation("topic must be non-empty"));
    }

    let system = prompt::roadmap_system_prompt(language);
    let user = prompt::roadmap_user_prompt(topic, requirements, language, audience);
    let response = generator.complete_json(&system, &user).await?;

    let raw: RawRoadmap = serde_json::from_str(&response)
        .map_err(|e| CoursegenError::parse(format!("invalid roadmap JSON: {e}")))?;
    let roadmap = repair::repair_roadmap(raw, topic, language, audience)?;

    info!(
        phases = roadmap.learning_path.len(),
        modules = roadmap.module_count(),
        "roadmap generated"
    );
    Ok(roadmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_shared::CoursegenError;

    struct StubGenerator {
        response: &'static str,
    }

    impl TextGenerator for StubGenerator {
        async fn complete_json(&self, _system: &str, _user: &str) -> Result<String> {
            Ok(self.response.to_string())
        }

        async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            Ok(self.response.to_string())
        }
    }

    #[tokio::test]
    async fn generates_and_repairs_roadmap() {
        let generator = StubGenerator {
            response: r#"{
                "course_title": "Intro to Graphs",
                "learning_path": [{"modules": [{"module_name": "Traversal"}]}]
            }"#,
        };
        let roadmap = generate_roadmap(
            &generator,
            "Graph Theory",
            &Requirements::default(),
            "en",
            "beginner",
        )
        .await
        .unwrap();

        assert_eq!(roadmap.course_title, "Intro to Graphs");
        assert_eq!(roadmap.learning_path[0].phase, "Phase 1");
        assert_eq!(roadmap.topic, "Graph Theory");
        assert_eq!(roadmap.audience, "beginner");
    }

    #[tokio::test]
    async fn empty_topic_is_rejected() {
        let generator = StubGenerator { response: "{}" };
        let err = generate_roadmap(&generator, "  ", &Requirements::default(), "en", "beginner")
            .await
            .unwrap_err();
        assert!(matches!(err, CoursegenError::Validation { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let generator = StubGenerator {
            response: "not json at all",
        };
        let err = generate_roadmap(&generator, "Topic", &Requirements::default(), "en", "beginner")
            .await
            .unwrap_err();
        assert!(matches!(err, CoursegenError::Parse { .. }));
    }

    #[tokio::test]
    async fn missing_learning_path_is_structure_error() {
        let generator = StubGenerator {
            response: r#"{"course_title": "X"}"#,
        };
        let err = generate_roadmap(&generator, "Topic", &Requirements::default(), "en", "beginner")
            .await
            .unwrap_err();
        assert!(matches!(err, CoursegenError::Structure { .. }));
    }
}
