//! Validated description of one collection run.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Inclusive, non-empty range of listing page numbers (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    /// Range `start..=end`. Fails on page 0 or `start > end`.
    pub fn new(start: u32, end: u32) -> Result<Self, ConfigError> {
        if start == 0 {
            return Err(ConfigError::PageStartZero);
        }
        if start > end {
            return Err(ConfigError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// `count` pages beginning at `start`.
    pub fn from_count(start: u32, count: u32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::ZeroPageCount);
        }
        let end = start
            .checked_add(count - 1)
            .ok_or(ConfigError::RangeOverflow { start, count })?;
        Self::new(start, end)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of pages in the range.
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// One run: where the collection lives, which pages to read, where assets go.
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CollectionSpec {
    base_url: String,
    slug: String,
    pages: PageRange,
    output_dir: PathBuf,
}

impl CollectionSpec {
    /// Validates `base_url`, `slug` and `output_dir`; the page range is already valid.
    pub fn new(
        base_url: impl Into<String>,
        slug: impl Into<String>,
        pages: PageRange,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let slug = slug.into();
        let output_dir = output_dir.into();

        if let Err(source) = url::Url::parse(&base_url) {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                source,
            });
        }
        validate_slug(&slug)?;
        if output_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputDir);
        }

        Ok(Self {
            base_url,
            slug,
            pages,
            output_dir,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn pages(&self) -> PageRange {
        self.pages
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn validate_slug(slug: &str) -> Result<(), ConfigError> {
    if slug.is_empty() {
        return Err(ConfigError::EmptySlug);
    }
    if slug
        .chars()
        .any(|c| c == '/' || c == '?' || c == '#' || c.is_whitespace())
    {
        return Err(ConfigError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}
