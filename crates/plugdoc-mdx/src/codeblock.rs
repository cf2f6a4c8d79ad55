//! Fenced code blocks.

/// A fenced code block ready to be appended to a page.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// Info string after the opening fence (usually the language)
    pub info: String,

    /// Block content without a trailing newline
    pub source: String,
}

impl CodeBlock {
    /// Create a new code block.
    pub fn new(info: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            info: info.into(),
            source: source.into(),
        }
    }

    /// Pretty-print a JSON value with two-space indentation.
    pub fn json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(Self::new("json", serde_json::to_string_pretty(value)?))
    }

    /// Render the block, closing fence included, ending in a newline.
    pub fn render(&self) -> String {
        format!("```{}\n{}\n```\n", self.info, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn renders_fenced_block() {
        let block = CodeBlock::new("bash", "echo hi");

        assert_eq!(block.render(), "```bash\necho hi\n```\n");
    }

    #[test]
    fn pretty_prints_json() {
        let block = CodeBlock::json(&json!({"threshold": 0.5, "labels": ["a"]})).unwrap();

        assert_eq!(block.info, "json");
        assert_eq!(
            block.render(),
            "```json\n{\n  \"threshold\": 0.5,\n  \"labels\": [\n    \"a\"\n  ]\n}\n```\n"
        );
    }
}
