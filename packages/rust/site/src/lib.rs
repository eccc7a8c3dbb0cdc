//! Site assembly for coursegen.
//!
//! Turns rendered chapter files plus the outline into a navigation-ready
//! documentation site: per-module directories with category descriptors,
//! front-matter injection, MDX brace escaping, a sidebar manifest, and a
//! synthesized index page.

mod convert;
mod frontmatter;
mod index;
mod mdx;
mod sidebar;

pub use convert::{SiteResult, assemble_site};
pub use frontmatter::{FrontMatter, merge, render, split_front_matter};
pub use index::build_index;
pub use mdx::escape_braces;
pub use sidebar::build_sidebar;
