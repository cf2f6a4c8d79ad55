//! Plugin records as served by the `public_plugin` view.

use serde::{Deserialize, Deserializer};

/// Title used when a record carries no name.
pub const UNNAMED_PLUGIN: &str = "Unnamed Plugin";

/// Body used when a record carries no readme.
pub const MISSING_README: &str = "No documentation available.";

/// One row of the plugin view. Unknown columns are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PluginRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Markdown body
    #[serde(default)]
    pub readme: Option<String>,

    /// Fetched with the row but not rendered anywhere yet.
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub config_schema: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_false")]
    pub support_request: bool,

    #[serde(default, deserialize_with = "null_as_false")]
    pub support_response: bool,

    #[serde(default, deserialize_with = "null_as_false")]
    pub support_log: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl PluginRecord {
    /// Display name, falling back to [`UNNAMED_PLUGIN`].
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_PLUGIN)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Readme body, falling back to [`MISSING_README`].
    pub fn readme(&self) -> &str {
        self.readme.as_deref().unwrap_or(MISSING_README)
    }

    /// Slug for this record's page, derived from [`Self::title`].
    pub fn slug(&self) -> String {
        crate::slug::sanitize(self.title())
    }

    /// The config schema, if it holds anything worth documenting.
    ///
    /// `null`, `false`, `0`, `""`, `[]` and `{}` all count as absent.
    pub fn config_schema(&self) -> Option<&serde_json::Value> {
        use serde_json::Value;

        self.config_schema.as_ref().filter(|schema| match schema {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(fields) => !fields.is_empty(),
        })
    }

    /// Phases this plugin supports, in request/response/log order.
    pub fn phases(&self) -> Vec<Phase> {
        Phase::ALL
            .into_iter()
            .filter(|phase| match phase {
                Phase::Request => self.support_request,
                Phase::Response => self.support_response,
                Phase::Log => self.support_log,
            })
            .collect()
    }
}

/// A processing stage a plugin can hook into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Request,
    Response,
    Log,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Request, Phase::Response, Phase::Log];

    /// Bullet label on a plugin page.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Request => "Request Phase",
            Self::Response => "Response Phase",
            Self::Log => "Log Phase",
        }
    }

    /// Upper-case badge used in the overview table.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Request => "REQUEST",
            Self::Response => "RESPONSE",
            Self::Log => "LOG",
        }
    }

    pub fn summary(&self) -> String {
        format!("Supports processing during the {} phase", self.badge())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_row() {
        let record: PluginRecord = serde_json::from_value(json!({
            "id": "3f0c",
            "name": "PII Detector",
            "description": "Finds personal data",
            "readme": "# PII Detector\n\nBody",
            "icon": "https://cdn.example.com/pii.png",
            "config_schema": {"type": "object"},
            "support_request": true,
            "support_response": false,
            "support_log": true
        }))
        .unwrap();

        assert_eq!(record.title(), "PII Detector");
        assert_eq!(record.slug(), "pii-detector");
        assert_eq!(record.phases(), vec![Phase::Request, Phase::Log]);
        assert!(record.config_schema().is_some());
    }

    #[test]
    fn nulls_fall_back_to_defaults() {
        let record: PluginRecord = serde_json::from_value(json!({
            "name": null,
            "description": null,
            "readme": null,
            "config_schema": null,
            "support_request": null
        }))
        .unwrap();

        assert_eq!(record.title(), UNNAMED_PLUGIN);
        assert_eq!(record.slug(), "unnamed-plugin");
        assert_eq!(record.description(), "");
        assert_eq!(record.readme(), MISSING_README);
        assert!(record.config_schema().is_none());
        assert!(record.phases().is_empty());
    }

    #[test]
    fn empty_schemas_count_as_absent() {
        for empty in [json!({}), json!([]), json!(""), json!(false), json!(0)] {
            let record = PluginRecord {
                config_schema: Some(empty.clone()),
                ..Default::default()
            };
            assert!(record.config_schema().is_none(), "{empty}");
        }
    }

    #[test]
    fn phase_text() {
        assert_eq!(Phase::Response.label(), "Response Phase");
        assert_eq!(Phase::Log.badge(), "LOG");
        assert_eq!(
            Phase::Request.summary(),
            "Supports processing during the REQUEST phase"
        );
    }
}
