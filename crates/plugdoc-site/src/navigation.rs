//! Navigation patching for the docs site config (`docs.json`).
//!
//! The config is treated as an opaque document except for
//! `navigation.tabs`, where one named tab is replaced or appended. Key
//! order of everything else survives the rewrite.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

/// A page group inside a navigation tab.
#[derive(Debug, Clone, PartialEq)]
pub struct NavGroup {
    pub group: String,
    pub pages: Vec<String>,
}

/// A top-level navigation tab.
#[derive(Debug, Clone, PartialEq)]
pub struct NavTab {
    pub tab: String,
    pub groups: Vec<NavGroup>,
}

impl NavTab {
    /// Build a single-group tab listing `<dir>/index` followed by
    /// `<dir>/<slug>` for each slug, in order.
    pub fn for_pages(tab: &str, group: &str, dir: &str, slugs: &[String]) -> Self {
        let pages = std::iter::once(format!("{dir}/index"))
            .chain(slugs.iter().map(|slug| format!("{dir}/{slug}")))
            .collect();

        Self {
            tab: tab.to_string(),
            groups: vec![NavGroup {
                group: group.to_string(),
                pages,
            }],
        }
    }

    /// The tab as a `docs.json` node.
    pub fn to_value(&self) -> Value {
        let groups: Vec<Value> = self
            .groups
            .iter()
            .map(|g| json!({ "group": g.group, "pages": g.pages }))
            .collect();

        json!({ "tab": self.tab, "groups": groups })
    }
}

/// What the patch did to the tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// An existing tab with the same name was replaced in place
    Updated,
    /// No tab matched, so the tab was appended
    Added,
}

/// Errors that can occur when patching the navigation config.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("{path} has no `{key}` entry")]
    MissingKey { path: String, key: &'static str },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// A config document lacks the entry a patch needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no `{0}` entry")]
pub struct MissingKey(pub &'static str);

/// Replace the first tab named like `tab` in `config`, or append it.
pub fn apply_tab(config: &mut Value, tab: &NavTab) -> Result<PatchOutcome, MissingKey> {
    let tabs = config
        .get_mut("navigation")
        .ok_or(MissingKey("navigation"))?
        .get_mut("tabs")
        .and_then(Value::as_array_mut)
        .ok_or(MissingKey("navigation.tabs"))?;

    let value = tab.to_value();

    match tabs
        .iter_mut()
        .find(|existing| existing.get("tab").and_then(Value::as_str) == Some(tab.tab.as_str()))
    {
        Some(existing) => {
            *existing = value;
            Ok(PatchOutcome::Updated)
        }
        None => {
            tabs.push(value);
            Ok(PatchOutcome::Added)
        }
    }
}

/// Load the config at `path`, apply `tab`, and write it back with
/// two-space indentation and a trailing newline.
pub fn patch_file(path: &Path, tab: &NavTab) -> Result<PatchOutcome, NavigationError> {
    let display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| NavigationError::Read {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let mut config: Value = serde_json::from_str(&content).map_err(|e| NavigationError::Parse {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let outcome = apply_tab(&mut config, tab).map_err(|MissingKey(key)| {
        NavigationError::MissingKey {
            path: display.clone(),
            key,
        }
    })?;

    let mut json = serde_json::to_string_pretty(&config).map_err(|e| NavigationError::Write {
        path: display.clone(),
        message: e.to_string(),
    })?;
    json.push('\n');

    fs::write(path, json).map_err(|e| NavigationError::Write {
        path: display,
        message: e.to_string(),
    })?;

    Ok(outcome)
}
