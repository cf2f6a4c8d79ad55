//! Plugin page rendering.

use crate::codeblock::CodeBlock;
use crate::frontmatter::{Frontmatter, FrontmatterError};
use crate::record::PluginRecord;

/// Separator placed before each appended section.
const SECTION_RULE: &str = "\n\n---\n\n";

/// Errors that can occur when rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("Failed to serialize config schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Render one plugin record as an MDX page.
///
/// The page is the frontmatter header, the readme (minus a leading H1 that
/// would duplicate the frontmatter title), then optional configuration
/// schema and supported phase sections.
pub fn render_page(record: &PluginRecord) -> Result<String, RenderError> {
    let mut content = Frontmatter::new(record.title(), record.description()).render()?;

    content.push_str(&strip_leading_title(record.readme()));

    if let Some(schema) = record.config_schema() {
        content.push_str(SECTION_RULE);
        content.push_str("## Configuration Schema\n\n");
        content.push_str(&CodeBlock::json(schema)?.render());
    }

    let phases = record.phases();
    if !phases.is_empty() {
        content.push_str(SECTION_RULE);
        content.push_str("## Supported Phases\n\n");
        for phase in phases {
            content.push_str(&format!("- **{}**: {}\n", phase.label(), phase.summary()));
        }
    }

    Ok(content)
}

/// Drop a level-1 heading from the first line of a readme.
///
/// The frontmatter title already renders as the page heading. Readmes that
/// do not open with `# ` come back untouched.
fn strip_leading_title(readme: &str) -> String {
    let trimmed = readme.trim();
    match trimmed.split_once('\n') {
        Some((first, rest)) if first.starts_with("# ") => rest.trim().to_string(),
        None if trimmed.starts_with("# ") => String::new(),
        _ => readme.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::extract_frontmatter;
    use crate::record::MISSING_README;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(name: &str, readme: &str) -> PluginRecord {
        PluginRecord {
            name: Some(name.to_string()),
            description: Some(format!("{name} description")),
            readme: Some(readme.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn renders_complete_page() {
        let plugin = PluginRecord {
            config_schema: Some(json!({"type": "object"})),
            support_request: true,
            support_response: true,
            ..record("Guard", "# Guard\n\nBlocks bad input.\n")
        };

        assert_eq!(
            render_page(&plugin).unwrap(),
            "---\n\
             description: Guard description\n\
             title: Guard\n\
             ---\n\
             \n\
             Blocks bad input.\n\
             \n\
             ---\n\
             \n\
             ## Configuration Schema\n\
             \n\
             ```json\n\
             {\n  \"type\": \"object\"\n}\n\
             ```\n\
             \n\
             \n\
             ---\n\
             \n\
             ## Supported Phases\n\
             \n\
             - **Request Phase**: Supports processing during the REQUEST phase\n\
             - **Response Phase**: Supports processing during the RESPONSE phase\n"
        );
    }

    #[test]
    fn header_appears_exactly_once() {
        let page = render_page(&record("Echo", "Some text\n\n---\n\nMore")).unwrap();

        let (fm, body) = extract_frontmatter(&page).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title, "Echo");
        assert_eq!(fm.description, "Echo description");
        assert!(page.starts_with("---\n"));
        assert_eq!(page.matches("title: Echo").count(), 1);
        assert!(!body.contains("title: Echo"));
    }

    #[test]
    fn strips_duplicate_title() {
        let page = render_page(&record("Echo", "# Echo\nRepeats input")).unwrap();

        assert!(!page.contains("# Echo"));
        assert!(page.ends_with("Repeats input"));
    }

    #[test]
    fn keeps_h1_only_once_when_repeated_later() {
        let page = render_page(&record("Echo", "# Echo\n\n# Echo\n")).unwrap();

        assert_eq!(page.matches("# Echo").count(), 1);
    }

    #[test]
    fn leaves_readme_without_h1_untouched() {
        let readme = "\n## Usage\n\nCall it.  \n";
        let page = render_page(&record("Echo", readme)).unwrap();

        let (_, body) = extract_frontmatter(&page).unwrap();
        assert!(page.ends_with(readme));
        assert_eq!(body, readme.trim_start());
    }

    #[test]
    fn single_line_h1_readme_becomes_empty() {
        let page = render_page(&record("Echo", "# Echo")).unwrap();

        assert!(page.ends_with("---\n\n"));
    }

    #[test]
    fn level_two_heading_is_not_stripped() {
        let page = render_page(&record("Echo", "## Echo\nBody")).unwrap();

        assert!(page.contains("## Echo\nBody"));
    }

    #[test]
    fn unnamed_record_uses_placeholder_title() {
        let plugin = PluginRecord {
            readme: Some("Body".to_string()),
            ..Default::default()
        };

        let page = render_page(&plugin).unwrap();
        let (fm, _) = extract_frontmatter(&page).unwrap();

        assert!(page.contains("title: Unnamed Plugin\n"));
        assert_eq!(fm.unwrap().title, "Unnamed Plugin");
        assert_eq!(plugin.slug(), "unnamed-plugin");
    }

    #[test]
    fn missing_readme_uses_placeholder() {
        let plugin = PluginRecord {
            name: Some("Empty".to_string()),
            ..Default::default()
        };

        let page = render_page(&plugin).unwrap();

        assert!(page.ends_with(MISSING_README));
        assert!(page.contains("description: ''\n"));
    }

    #[test]
    fn lists_request_and_log_phases_in_order() {
        let plugin = PluginRecord {
            support_request: true,
            support_response: false,
            support_log: true,
            ..record("Audit", "Body")
        };

        let page = render_page(&plugin).unwrap();
        let bullets: Vec<&str> = page.lines().filter(|l| l.starts_with("- **")).collect();

        assert_eq!(
            bullets,
            vec![
                "- **Request Phase**: Supports processing during the REQUEST phase",
                "- **Log Phase**: Supports processing during the LOG phase",
            ]
        );
    }

    #[test]
    fn omits_empty_sections() {
        let page = render_page(&PluginRecord {
            config_schema: Some(json!({})),
            ..record("Plain", "Body")
        })
        .unwrap();

        assert!(!page.contains("## Configuration Schema"));
        assert!(!page.contains("## Supported Phases"));
    }
}
