//! Error types for a collection run.
//!
//! Configuration and discovery errors end a run; asset fetch and write
//! errors are recorded per item in the run report instead.

use std::path::PathBuf;

/// Invalid or missing run parameters. Raised before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("collection slug must not be empty")]
    EmptySlug,
    #[error("collection slug {0:?} must not contain '/', '?', '#' or whitespace")]
    InvalidSlug(String),
    #[error("page numbers start at 1 (got page start 0)")]
    PageStartZero,
    #[error("page start {start} must be less than or equal to page end {end}")]
    InvertedRange { start: u32, end: u32 },
    #[error("page count must be at least 1")]
    ZeroPageCount,
    #[error("page range starting at {start} with {count} pages overflows")]
    RangeOverflow { start: u32, count: u32 },
    #[error("invalid base URL {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("output directory must not be empty")]
    EmptyOutputDir,
    #[error("output directory {} already exists; remove it or pass --overwrite", .0.display())]
    OutputDirExists(PathBuf),
    #[error("failed to create output directory {}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A listing page or asset request that did not produce a body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// libcurl failed (DNS, connect, TLS, timeout, ...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The server answered outside the 2xx range.
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u32 },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. } | FetchError::Status { url, .. } => url,
        }
    }
}

/// Persisting one asset failed.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Why a single asset was not saved.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A listing page could not be fetched; nothing was downloaded.
    #[error("discovery failed at page {page} ({url})")]
    Discovery {
        page: u32,
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("run aborted during discovery")]
    Aborted,
}
