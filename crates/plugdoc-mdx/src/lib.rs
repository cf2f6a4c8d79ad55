//! MDX rendering for plugin documentation.
//!
//! This crate turns plugin records into MDX pages with YAML frontmatter,
//! builds the overview table page, and derives the URL slugs both share.

pub mod codeblock;
pub mod frontmatter;
pub mod overview;
pub mod page;
pub mod record;
pub mod slug;

pub use frontmatter::Frontmatter;
pub use overview::render_overview;
pub use page::{render_page, RenderError};
pub use record::{Phase, PluginRecord};
pub use slug::sanitize;
