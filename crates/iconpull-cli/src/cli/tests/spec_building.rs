//! Tests for turning parsed arguments into a validated run description.

use super::parse;
use crate::cli::{CliCommand, CollectionArgs};
use iconpull_core::config::IconpullConfig;
use iconpull_core::ConfigError;
use std::path::Path;

fn plan_args(args: &[&str]) -> CollectionArgs {
    let mut argv = vec!["iconpull", "plan"];
    argv.extend_from_slice(args);
    match parse(&argv) {
        CliCommand::Plan(a) => a,
        _ => panic!("expected Plan"),
    }
}

#[test]
fn defaults_to_single_start_page() {
    let range = plan_args(&["x", "--start", "4"]).page_range().unwrap();
    assert_eq!((range.start(), range.end()), (4, 4));
}

#[test]
fn count_extends_from_start() {
    let range = plan_args(&["x", "--start", "2", "--count", "3"])
        .page_range()
        .unwrap();
    assert_eq!((range.start(), range.end()), (2, 4));
}

#[test]
fn inverted_range_is_config_error() {
    let err = plan_args(&["x", "--start", "5", "--end", "2"])
        .page_range()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvertedRange { start: 5, end: 2 }));
}

#[test]
fn spec_joins_slug_onto_output_dir() {
    let cfg = IconpullConfig::default();
    let spec = plan_args(&["cats", "--output-dir", "/tmp/vectors"])
        .to_spec(&cfg)
        .unwrap();
    assert_eq!(spec.output_dir(), Path::new("/tmp/vectors/cats"));
    assert_eq!(spec.base_url(), cfg.base_url);
}

#[test]
fn spec_uses_config_when_flags_absent() {
    let cfg = IconpullConfig {
        base_url: "https://icons.example.com/c".to_string(),
        output_dir: "/srv/icons".into(),
        ..IconpullConfig::default()
    };
    let spec = plan_args(&["dogs"]).to_spec(&cfg).unwrap();
    assert_eq!(spec.base_url(), "https://icons.example.com/c");
    assert_eq!(spec.output_dir(), Path::new("/srv/icons/dogs"));
}

#[test]
fn slug_with_slash_rejected() {
    let cfg = IconpullConfig::default();
    let err = plan_args(&["a/b", "--output-dir", "/tmp"])
        .to_spec(&cfg)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSlug(_)));
}
