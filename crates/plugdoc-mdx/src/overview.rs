//! Overview page listing every plugin in a table.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::page::RenderError;
use crate::record::PluginRecord;

/// One table row of the overview page.
#[derive(Debug, Clone, Serialize)]
struct OverviewRow<'a> {
    name: &'a str,
    slug: &'a str,
    description: String,
    phases: String,
}

impl<'a> OverviewRow<'a> {
    fn new(record: &'a PluginRecord, slug: &'a str) -> Self {
        let badges: Vec<&str> = record.phases().iter().map(|p| p.badge()).collect();

        Self {
            name: record.title(),
            slug,
            description: record.description().replace('|', "\\|"),
            phases: if badges.is_empty() {
                "-".to_string()
            } else {
                badges.join(", ")
            },
        }
    }
}

/// Render the overview page.
///
/// Records and slugs are paired positionally and the table keeps that
/// order; nothing is sorted.
pub fn render_overview(records: &[PluginRecord], slugs: &[String]) -> Result<String, RenderError> {
    let rows: Vec<OverviewRow<'_>> = records
        .iter()
        .zip(slugs)
        .map(|(record, slug)| OverviewRow::new(record, slug))
        .collect();

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template("index.mdx", OVERVIEW_TEMPLATE)?;

    let tmpl = env.get_template("index.mdx")?;
    Ok(tmpl.render(context! { rows => rows })?)
}

const OVERVIEW_TEMPLATE: &str = r#"---
title: 'Public Plugins'
description: 'Pre-built plugins for common use cases'
---

Datawizz provides a collection of pre-built plugins that you can use in your endpoints without writing any custom code. These public plugins cover common use cases like content filtering, PII detection, compliance checks, and more.

## Available Plugins

Browse our collection of public plugins below. Click on any plugin to view detailed documentation and configuration options.

| Plugin | Description | Phases |
|--------|-------------|--------|
{% for row in rows %}
| [{{ row.name }}](./{{ row.slug }}) | {{ row.description }} | {{ row.phases }} |
{% endfor %}

---

## Using Public Plugins

To use a public plugin in your endpoint:

1. Navigate to your endpoint configuration in the Datawizz dashboard
2. Select the "Plugins" tab
3. Click "Add Plugin"
4. Choose "Public Plugins" from the plugin source dropdown
5. Select the plugin you want to use
6. Configure the plugin settings (phase, priority, async execution, etc.)
7. Save your endpoint configuration

For more information on plugin configuration and execution, see the [Plugins documentation](/plugins/plugins).

## Need a Custom Plugin?

If you need functionality that isn't covered by our public plugins, you can build your own custom plugin. See [Building Custom Plugins](/plugins/build-custom-plugins) for details.
"#;
