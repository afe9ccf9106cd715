//! Asset discovery in listing page markup.
//!
//! Each icon on a listing page is an `<img itemprop="contentUrl">` whose
//! `src` points at the SVG and whose `alt` is the display label.

use crate::names::normalize_name;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Label used when an image carries no `alt` attribute.
pub const DEFAULT_LABEL: &str = "icon";

static CONTENT_IMG: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"img[itemprop="contentUrl"]"#).expect("static selector is valid")
});

/// One downloadable asset and the filename it will be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetItem {
    pub source_url: String,
    pub filename: String,
}

/// Returns every asset referenced by `markup`, in document order.
///
/// Images without a (non-empty) `src` are skipped. Markup without matching
/// images yields an empty list.
pub fn extract_assets(markup: &str) -> Vec<AssetItem> {
    let document = Html::parse_document(markup);
    document
        .select(&CONTENT_IMG)
        .filter_map(|img| {
            let element = img.value();
            let src = element.attr("src").filter(|s| !s.is_empty())?;
            let label = element.attr("alt").unwrap_or(DEFAULT_LABEL);
            Some(AssetItem {
                source_url: src.to_string(),
                filename: normalize_name(label),
            })
        })
        .collect()
}
