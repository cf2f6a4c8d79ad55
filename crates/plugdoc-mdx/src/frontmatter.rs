//! Frontmatter emission and parsing.

use serde::{Deserialize, Serialize};

/// The two-field header every generated page starts with.
///
/// Fields are declared in key order so the emitted YAML is sorted
/// (`description` before `title`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Short summary shown under the title
    #[serde(default)]
    pub description: String,

    /// Page title
    pub title: String,
}

impl Frontmatter {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            title: title.into(),
        }
    }

    /// Render as a `---` delimited YAML block followed by a blank line.
    ///
    /// Values go through the YAML serializer so colons, quotes and other
    /// special characters come out escaped.
    pub fn render(&self) -> Result<String, FrontmatterError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| FrontmatterError::Serialize(e.to_string()))?;
        Ok(format!("---\n{yaml}---\n\n"))
    }
}

/// Extract frontmatter from MDX content.
///
/// Returns the parsed frontmatter and the remaining content after the
/// frontmatter block. Only tests read generated pages back.
#[cfg(test)]
pub(crate) fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when emitting or parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),

    #[error("Failed to serialize frontmatter: {0}")]
    Serialize(String),
}
