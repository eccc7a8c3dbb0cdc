//! Pipeline orchestration for coursegen.
//!
//! Sequences the whole run: requirements → roadmap → outline → chapter
//! rendering → site assembly, persisting each stage's artifact before the
//! next begins.

pub mod pipeline;
pub mod questionnaire;
pub mod render;

pub use pipeline::{
    CourseConfig, CourseResult, ProgressReporter, SilentProgress, run_course, save_summary,
};
pub use questionnaire::{default_requirements, gather_requirements};
pub use render::render_chapters;
