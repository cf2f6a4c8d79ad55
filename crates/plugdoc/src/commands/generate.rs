//! Plugin docs generation command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use plugdoc_mdx::PluginRecord;
use plugdoc_site::{BuildResult, SiteBuilder, SiteConfig};
use plugdoc_source::{Credentials, TableClient, DEFAULT_VIEW, KEY_VAR, URL_VAR};

/// Configuration file structure (plugdoc.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    source: SourceSettings,
    #[serde(default)]
    output: OutputSettings,
    #[serde(default)]
    navigation: NavigationSettings,
}

#[derive(Debug, Deserialize)]
struct SourceSettings {
    url: Option<String>,
    key: Option<String>,
    #[serde(default = "default_view")]
    view: String,
}

#[derive(Debug, Deserialize)]
struct OutputSettings {
    #[serde(default = "default_root")]
    root: String,
    #[serde(default = "default_pages_dir")]
    dir: String,
    #[serde(default = "default_extension")]
    extension: String,
    /// Defaults to `images/<dir>`
    images: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NavigationSettings {
    #[serde(default = "default_navigation_file")]
    file: String,
    #[serde(default = "default_tab")]
    tab: String,
    #[serde(default = "default_group")]
    group: String,
}

fn default_view() -> String {
    DEFAULT_VIEW.to_string()
}
fn default_root() -> String {
    ".".to_string()
}
fn default_pages_dir() -> String {
    "public-plugins".to_string()
}
fn default_extension() -> String {
    "mdx".to_string()
}
fn default_navigation_file() -> String {
    "docs.json".to_string()
}
fn default_tab() -> String {
    "Public Plugins".to_string()
}
fn default_group() -> String {
    "Plugins".to_string()
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: None,
            key: None,
            view: default_view(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            dir: default_pages_dir(),
            extension: default_extension(),
            images: None,
        }
    }
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            file: default_navigation_file(),
            tab: default_tab(),
            group: default_group(),
        }
    }
}

impl ConfigFile {
    fn site_config(&self) -> SiteConfig {
        let images = self
            .output
            .images
            .clone()
            .unwrap_or_else(|| format!("images/{}", self.output.dir));

        SiteConfig {
            root: PathBuf::from(&self.output.root),
            pages_dir: self.output.dir.clone(),
            extension: self.output.extension.clone(),
            images_dir: PathBuf::from(images),
            navigation_file: PathBuf::from(&self.navigation.file),
            tab: self.navigation.tab.clone(),
            group: self.navigation.group.clone(),
        }
    }

    /// Environment credentials win over the config file.
    fn credentials(&self, env_url: Option<String>, env_key: Option<String>) -> Result<Credentials> {
        let pick = |env: Option<String>, file: &Option<String>| -> Option<String> {
            env.filter(|v| !v.is_empty()).or_else(|| file.clone())
        };

        Ok(Credentials::new(
            pick(env_url, &self.source.url),
            pick(env_key, &self.source.key),
        )?)
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Fetch every plugin and build the docs.
///
/// Returns `None` when the view is empty; nothing is written in that case.
async fn generate(
    credentials: Credentials,
    view: &str,
    site: SiteConfig,
) -> Result<Option<BuildResult>> {
    tracing::info!("Connecting to {}", credentials.url);
    let client = TableClient::new(credentials);

    tracing::info!("Fetching plugins from {} view", view);
    let plugins: Vec<PluginRecord> = client
        .fetch_plugins(view)
        .await
        .context("Error fetching plugins")?;
    tracing::info!("Found {} plugins", plugins.len());

    if plugins.is_empty() {
        tracing::info!("No plugins found. Exiting.");
        return Ok(None);
    }

    let result = SiteBuilder::new(site).build(&plugins)?;
    Ok(Some(result))
}

/// Run the generate command.
pub async fn run(config_path: &Path) -> Result<()> {
    tracing::info!("Generating public plugin documentation...");

    let config = load_config(config_path)?;
    let credentials = config.credentials(
        std::env::var(URL_VAR).ok(),
        std::env::var(KEY_VAR).ok(),
    )?;

    let Some(result) = generate(credentials, &config.source.view, config.site_config()).await?
    else {
        return Ok(());
    };

    tracing::info!(
        "Successfully generated documentation for {} plugins in {}ms",
        result.pages,
        result.duration_ms
    );
    tracing::info!("Pages created in: {}", result.output_dir.display());
    tracing::info!("Next steps: review the generated pages, commit them, and deploy the docs");

    Ok(())
}
