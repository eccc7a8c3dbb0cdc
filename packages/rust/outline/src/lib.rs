//! Roadmap and outline generation for coursegen.
//!
//! This crate turns a topic plus requirements into a phased roadmap, then
//! expands the roadmap's modules into a chapter-level outline. Generation
//! responses are loosely structured; [`repair`] coerces them into the
//! canonical shapes before anything downstream sees them.

pub mod modules;
pub mod prompt;
pub mod repair;
pub mod roadmap;

pub use modules::expand_modules;
pub use repair::{RawOutline, RawRoadmap, repair_outline, repair_roadmap};
pub use roadmap::generate_roadmap;
