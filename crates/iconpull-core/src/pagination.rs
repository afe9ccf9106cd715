//! Listing page URL planning.

use crate::collection::CollectionSpec;

/// One page of the collection index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub page: u32,
    pub url: String,
}

/// Builds `{base_url}/{slug}/{page}` for every page in `start..=end`, ascending.
///
/// Callers validate the bounds (see [`crate::collection::PageRange`]); an
/// inverted range simply yields no pages. A trailing `/` on `base_url` is
/// not doubled.
pub fn plan_pages(base_url: &str, slug: &str, start: u32, end: u32) -> Vec<ListingPage> {
    let base = base_url.trim_end_matches('/');
    (start..=end)
        .map(|page| ListingPage {
            page,
            url: format!("{}/{}/{}", base, slug, page),
        })
        .collect()
}

/// Plans the listing pages of a validated run.
pub fn plan_for(spec: &CollectionSpec) -> Vec<ListingPage> {
    let pages = spec.pages();
    plan_pages(spec.base_url(), spec.slug(), pages.start(), pages.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.svgrepo.com/collection";

    #[test]
    fn one_url_per_page_ascending() {
        let plan = plan_pages(BASE, "cats", 3, 6);
        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0].url, "https://www.svgrepo.com/collection/cats/3");
        assert_eq!(plan[3].url, "https://www.svgrepo.com/collection/cats/6");
        assert!(plan.windows(2).all(|w| w[0].page < w[1].page));
    }

    #[test]
    fn single_page() {
        let plan = plan_pages(BASE, "test", 1, 1);
        assert_eq!(
            plan,
            vec![ListingPage {
                page: 1,
                url: "https://www.svgrepo.com/collection/test/1".to_string(),
            }]
        );
    }

    #[test]
    fn trailing_slash_not_doubled() {
        let plan = plan_pages("https://example.com/collection/", "x", 2, 2);
        assert_eq!(plan[0].url, "https://example.com/collection/x/2");
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(plan_pages(BASE, "x", 5, 4).is_empty());
    }

    #[test]
    fn plan_for_uses_spec_range() {
        let pages = crate::collection::PageRange::from_count(2, 2).unwrap();
        let spec = CollectionSpec::new(BASE, "dogs", pages, "/tmp/out").unwrap();
        let urls: Vec<_> = plan_for(&spec).into_iter().map(|p| p.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://www.svgrepo.com/collection/dogs/2",
                "https://www.svgrepo.com/collection/dogs/3",
            ]
        );
    }
}
