//! Arguments shared by the collection commands.

use clap::Args;
use iconpull_core::config::IconpullConfig;
use iconpull_core::{CollectionSpec, ConfigError, PageRange};
use std::path::PathBuf;

/// Which collection and pages to work on.
#[derive(Debug, Clone, Args)]
pub struct CollectionArgs {
    /// Collection slug, e.g. `cat-icons` for `{base_url}/cat-icons/{page}`.
    #[arg(env = "COLLECTION_SLUG")]
    pub slug: String,

    /// First listing page (1-based).
    #[arg(long, default_value = "1", env = "COLLECTION_PAGE_START")]
    pub start: u32,

    /// Last listing page, inclusive. Defaults to the start page.
    #[arg(long, env = "COLLECTION_PAGE_END", conflicts_with = "count")]
    pub end: Option<u32>,

    /// Number of pages to read, starting at --start.
    #[arg(long)]
    pub count: Option<u32>,

    /// Catalog root; overrides `base_url` in config.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Parent output directory; assets go to `<DIR>/<slug>`.
    #[arg(long, env = "OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl CollectionArgs {
    pub fn page_range(&self) -> Result<PageRange, ConfigError> {
        match (self.end, self.count) {
            (_, Some(count)) => PageRange::from_count(self.start, count),
            (Some(end), None) => PageRange::new(self.start, end),
            (None, None) => PageRange::new(self.start, self.start),
        }
    }

    /// Validated run description; CLI flags win over config values.
    pub fn to_spec(&self, cfg: &IconpullConfig) -> Result<CollectionSpec, ConfigError> {
        let pages = self.page_range()?;
        let base_url = self.base_url.clone().unwrap_or_else(|| cfg.base_url.clone());
        let parent = self.output_dir.clone().unwrap_or_else(|| cfg.output_dir.clone());
        CollectionSpec::new(base_url, self.slug.clone(), pages, parent.join(&self.slug))
    }
}

/// `iconpull fetch` arguments.
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub collection: CollectionArgs,

    /// Display name for the banner.
    #[arg(long, env = "COLLECTION_NAME")]
    pub name: Option<String>,

    /// Concurrent asset downloads; overrides `jobs` in config.
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Write into an existing output directory, replacing files with the same name.
    #[arg(long)]
    pub overwrite: bool,

    /// Exit with status 2 if any asset failed.
    #[arg(long)]
    pub strict: bool,
}
