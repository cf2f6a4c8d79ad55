//! Filesystem side of the plugin docs generator.
//!
//! Writes one MDX page per plugin plus an overview page, then points the
//! site navigation at them.

pub mod builder;
pub mod navigation;

pub use builder::{BuildResult, SiteBuilder, SiteConfig, SiteError};
pub use navigation::{MissingKey, NavTab, NavigationError, PatchOutcome};
