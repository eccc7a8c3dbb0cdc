//! Shared types, error model, and configuration for coursegen.
//!
//! This crate is the foundation depended on by all other coursegen crates.
//! It provides:
//! - [`CoursegenError`] — the unified error type
//! - Domain types ([`Roadmap`], [`Outline`], [`Chapter`], [`Requirements`])
//! - Configuration ([`AppConfig`], [`GenerationConfig`], config loading)
//! - Language and audience helpers ([`lang`])

pub mod config;
pub mod error;
pub mod input;
pub mod lang;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, GenerationConfig, GenerationSettings, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{CoursegenError, Result};
pub use input::{CourseInput, read_input};
pub use types::{
    Chapter, ChapterContext, ChapterMeta, LegacyOutline, Outline, OutlineModule, Part, Phase,
    Requirements, Roadmap, RoadmapModule, SidebarCategory, SidebarConfig,
};
