//! Plugin docs site builder.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use plugdoc_mdx::{render_overview, render_page, PluginRecord, RenderError};

use crate::navigation::{self, NavTab, NavigationError, PatchOutcome};

/// Configuration for building the plugin docs.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Docs site root (where `docs.json` lives)
    pub root: PathBuf,

    /// Directory under the root that receives the pages; also the URL prefix
    /// used in navigation entries
    pub pages_dir: String,

    /// Extension for generated page files
    pub extension: String,

    /// Images directory relative to the root
    pub images_dir: PathBuf,

    /// Navigation config relative to the root
    pub navigation_file: PathBuf,

    /// Name of the navigation tab that lists the pages
    pub tab: String,

    /// Name of the page group inside that tab
    pub group: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pages_dir: "public-plugins".to_string(),
            extension: "mdx".to_string(),
            images_dir: PathBuf::from("images/public-plugins"),
            navigation_file: PathBuf::from("docs.json"),
            tab: "Public Plugins".to_string(),
            group: "Plugins".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.pages_dir)
    }

    pub fn navigation_path(&self) -> PathBuf {
        self.root.join(&self.navigation_file)
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of plugin pages written (the overview is not counted)
    pub pages: usize,

    /// Slugs in the order their pages were written
    pub slugs: Vec<String>,

    /// Whether the navigation tab was replaced or appended
    pub navigation: PatchOutcome,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to render {page}: {source}")]
    Render {
        page: String,
        #[source]
        source: RenderError,
    },

    #[error("Failed to write output: {0}")]
    Write(String),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Writes plugin pages, the overview page and the navigation tab.
///
/// Nothing is rolled back: if a later step fails, files written by earlier
/// steps stay on disk. Pages for plugins that disappeared upstream are
/// never removed.
pub struct SiteBuilder {
    config: SiteConfig,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Build the docs for `records`, in order.
    pub fn build(&self, records: &[PluginRecord]) -> Result<BuildResult, SiteError> {
        let start = Instant::now();
        let output_dir = self.config.output_dir();

        self.prepare_dirs(&output_dir)?;

        tracing::info!("Generating plugin pages in {}", output_dir.display());
        let slugs = records
            .iter()
            .map(|record| self.write_page(&output_dir, record))
            .collect::<Result<Vec<_>, _>>()?;
        warn_on_collisions(records, &slugs);

        tracing::info!("Generating overview page");
        self.write_overview(&output_dir, records, &slugs)?;

        tracing::info!("Updating {}", self.config.navigation_file.display());
        let navigation = self.patch_navigation(&slugs)?;

        Ok(BuildResult {
            pages: slugs.len(),
            slugs,
            navigation,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir,
        })
    }

    /// Create the output and images directories.
    ///
    /// The images directory stays empty; plugin icons are not written yet.
    fn prepare_dirs(&self, output_dir: &Path) -> Result<(), SiteError> {
        let images_dir = self.config.root.join(&self.config.images_dir);
        for dir in [output_dir, images_dir.as_path()] {
            fs::create_dir_all(dir)
                .map_err(|e| SiteError::Write(format!("{}: {}", dir.display(), e)))?;
        }
        Ok(())
    }

    /// Render one record to `<slug>.<ext>` and return the slug.
    fn write_page(&self, output_dir: &Path, record: &PluginRecord) -> Result<String, SiteError> {
        let slug = record.slug();
        let filename = format!("{}.{}", slug, self.config.extension);

        let content = render_page(record).map_err(|source| SiteError::Render {
            page: filename.clone(),
            source,
        })?;

        write_file(&output_dir.join(&filename), &content)?;
        tracing::info!("  Generated {}", filename);

        Ok(slug)
    }

    fn write_overview(
        &self,
        output_dir: &Path,
        records: &[PluginRecord],
        slugs: &[String],
    ) -> Result<(), SiteError> {
        let filename = format!("index.{}", self.config.extension);

        let content = render_overview(records, slugs).map_err(|source| SiteError::Render {
            page: filename.clone(),
            source,
        })?;

        write_file(&output_dir.join(&filename), &content)?;
        tracing::info!("  Generated {} (overview page)", filename);

        Ok(())
    }

    fn patch_navigation(&self, slugs: &[String]) -> Result<PatchOutcome, SiteError> {
        let tab = NavTab::for_pages(
            &self.config.tab,
            &self.config.group,
            &self.config.pages_dir,
            slugs,
        );

        let outcome = navigation::patch_file(&self.config.navigation_path(), &tab)?;
        match outcome {
            PatchOutcome::Updated => tracing::info!("  Updated existing {} tab", tab.tab),
            PatchOutcome::Added => tracing::info!("  Added new {} tab", tab.tab),
        }

        Ok(outcome)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    fs::write(path, content).map_err(|e| SiteError::Write(format!("{}: {}", path.display(), e)))
}

/// Log slugs that are empty or shared by several records.
///
/// Colliding pages overwrite each other (last write wins) and are still
/// listed once per record; this only makes that visible.
fn warn_on_collisions(records: &[PluginRecord], slugs: &[String]) {
    let mut seen = HashSet::new();
    for (record, slug) in records.iter().zip(slugs) {
        if slug.is_empty() {
            tracing::warn!("Plugin {:?} has an empty slug", record.title());
        } else if !seen.insert(slug.as_str()) {
            tracing::warn!(
                "Plugin {:?} shares slug {:?} with an earlier plugin; its page overwrites the earlier one",
                record.title(),
                slug
            );
        }
    }
}
