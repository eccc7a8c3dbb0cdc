//! Markdown normalization for generated course content.
//!
//! Takes the raw article text a generation backend returns and rewrites it
//! into the canonical chapter document shape consumed by the site assembler.

mod normalize;

pub use normalize::{clean_section_title, normalize_chapter};
