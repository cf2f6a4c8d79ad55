//! Record fetching from a hosted Postgres table.
//!
//! The table is reached through its PostgREST endpoint
//! (`{url}/rest/v1/{view}`), authenticated with the project's API key.

pub mod client;

pub use client::{Credentials, SourceError, TableClient, DEFAULT_VIEW, KEY_VAR, URL_VAR};
