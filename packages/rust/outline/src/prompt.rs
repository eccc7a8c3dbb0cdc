//! Prompt construction for roadmap and outline generation.
//!
//! Both prompts demand a JSON-object reply; the expected schema is spelled
//! out inline so the response can be parsed by the raw schemas in
//! [`crate::repair`].

use coursegen_shared::lang::{audience_description, language_name, learning_focus_text};
use coursegen_shared::{Requirements, Roadmap};

/// System prompt for roadmap generation.
pub fn roadmap_system_prompt(language: &str) -> String {
    format!(
        "You are an expert curriculum designer. You design structured, \
         practical learning roadmaps. Always respond with a single JSON \
         object, no prose outside it. Write all text values in {}.",
        language_name(language)
    )
}

/// User prompt for roadmap generation.
pub fn roadmap_user_prompt(
    topic: &str,
    requirements: &Requirements,
    language: &str,
    audience: &str,
) -> String {
    format!(
        "Create a learning roadmap for the topic: {topic}\n\
         \n\
         Target audience: {audience_desc}\n\
         Learner goals: {goals}\n\
         Time available: {time}\n\
         Prior knowledge: {prior}\n\
         Learning focus: {focus}\n\
         Expected outcomes: {outcomes}\n\
         \n\
         Respond with a JSON object of this shape:\n\
         {{\n\
           \"course_title\": \"...\",\n\
           \"course_description\": \"...\",\n\
           \"estimated_duration\": \"...\",\n\
           \"level\": \"...\",\n\
           \"course_objectives\": [\"...\"],\n\
           \"learning_path\": [\n\
             {{\n\
               \"phase\": \"...\",\n\
               \"description\": \"...\",\n\
               \"modules\": [\n\
                 {{\n\
                   \"module_name\": \"...\",\n\
                   \"description\": \"...\",\n\
                   \"estimated_time\": \"...\",\n\
                   \"prerequisites\": [\"...\"],\n\
                   \"topics\": [\"...\"]\n\
                 }}\n\
               ]\n\
             }}\n\
           ]\n\
         }}",
        audience_desc = audience_description(audience, language),
        goals = requirements.learning_goals,
        time = requirements.time_dedication,
        prior = requirements.prior_knowledge,
        focus = learning_focus_text(&requirements.learning_focus, language),
        outcomes = requirements.expected_outcomes,
    )
}

/// System prompt for module-to-chapter expansion.
pub fn outline_system_prompt(language: &str) -> String {
    format!(
        "You are an expert course author. You break curriculum modules down \
         into concrete chapters with sections and learning objectives. \
         Always respond with a single JSON object, no prose outside it. \
         Write all text values in {}.",
        language_name(language)
    )
}

/// User prompt for module-to-chapter expansion, embedding a compact summary
/// of the roadmap the outline must follow.
pub fn outline_user_prompt(roadmap: &Roadmap) -> String {
    format!(
        "Expand each module of this course roadmap into chapters.\n\
         \n\
         Course: {title}\n\
         Description: {description}\n\
         Roadmap summary:\n{summary}\n\
         \n\
         Every roadmap module must become one outline module, in order. \
         Respond with a JSON object of this shape:\n\
         {{\n\
           \"modules\": [\n\
             {{\n\
               \"module_number\": 1,\n\
               \"module_name\": \"...\",\n\
               \"description\": \"...\",\n\
               \"chapters\": [\n\
                 {{\n\
                   \"chapter_number\": 1,\n\
                   \"title\": \"...\",\n\
                   \"description\": \"...\",\n\
                   \"sections\": [\"...\"],\n\
                   \"learning_objectives\": [\"...\"]\n\
                 }}\n\
               ]\n\
             }}\n\
           ]\n\
         }}",
        title = roadmap.course_title,
        description = roadmap.course_description,
        summary = roadmap_summary(roadmap),
    )
}

/// Compact JSON summary of the roadmap's phases and modules, used as prompt
/// context for the expansion call.
pub fn roadmap_summary(roadmap: &Roadmap) -> String {
    let phases: Vec<serde_json::Value> = roadmap
        .learning_path
        .iter()
        .map(|phase| {
            serde_json::json!({
                "phase": phase.phase,
                "modules": phase
                    .modules
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "module_name": m.module_name,
                            "description": m.description,
                            "topics": m.topics,
                        })
                    })
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    serde_json::to_string_pretty(&phases).unwrap_or_default()
}
