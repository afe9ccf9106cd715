//! Filename derivation from icon display labels.

/// Extension appended to every derived filename.
pub const SVG_EXTENSION: &str = ".svg";

/// Suffix the catalog appends to alt texts ("Cat Face SVG File").
const SITE_SUFFIX: &str = "_svg_file";

/// Stem used when nothing survives normalization.
const EMPTY_STEM: &str = "_";

/// Linux NAME_MAX minus the extension.
const MAX_STEM_BYTES: usize = 255 - SVG_EXTENSION.len();

/// Turns a display label into a safe `.svg` filename.
///
/// - Replaces every character outside `[a-zA-Z0-9_-]` with `_` (one per char)
/// - Lowercases the result
/// - Strips one trailing `_svg_file`
/// - Appends `.svg`
///
/// Never fails: an empty stem becomes `_`, long stems are cut to fit NAME_MAX.
///
/// # Examples
///
/// - `normalize_name("Fancy Icon SVG File")` → `"fancy_icon.svg"`
/// - `normalize_name("")` → `"_.svg"`
pub fn normalize_name(label: &str) -> String {
    let mut stem: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if stem.ends_with(SITE_SUFFIX) {
        stem.truncate(stem.len() - SITE_SUFFIX.len());
    }
    // Only ASCII remains, so any byte index is a char boundary.
    stem.truncate(MAX_STEM_BYTES);
    if stem.is_empty() {
        stem.push_str(EMPTY_STEM);
    }

    stem.push_str(SVG_EXTENSION);
    stem
}
