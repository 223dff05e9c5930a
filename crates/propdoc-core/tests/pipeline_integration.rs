//! End-to-end tests over the on-disk fixture registry: manifest lookup,
//! source resolution, doc extraction, and display formatting together.

use propdoc_core::{
    NO_DEFAULT, RegistrySource, SourceLocator, extract_docs, format_rows, not_found_sentinel,
};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn locator() -> SourceLocator {
    SourceLocator::new(vec![
        RegistrySource::new(fixtures_dir().join("registry.json")),
        RegistrySource::new(fixtures_dir().join("fallback/registry.json")),
    ])
}

#[test]
fn test_source_matches_file_bytes() {
    let locator = locator();
    let code = locator.component_source("usage-meter");

    let expected =
        std::fs::read_to_string(fixtures_dir().join("src/usage-meter.tsx")).unwrap();
    assert_eq!(&*code, expected);
}

#[test]
fn test_primary_registry_wins() {
    // usage-meter exists in both manifests; the primary's file must win
    let locator = locator();
    let code = locator.component_source("usage-meter");
    assert!(code.contains("forwardRef"));
    assert!(!code.contains("Shadow copy"));
}

#[test]
fn test_component_only_in_fallback() {
    let locator = locator();
    let code = locator.component_source("usage-badge");
    assert!(code.contains("UsageBadgeProps"));
}

#[test]
fn test_unknown_component_sentinel() {
    let locator = locator();
    let code = locator.component_source("does-not-exist");
    assert_eq!(&*code, not_found_sentinel("does-not-exist"));
}

#[test]
fn test_broken_primary_falls_through() {
    let locator = SourceLocator::new(vec![
        RegistrySource::new(fixtures_dir().join("broken/registry.json")),
        RegistrySource::new(fixtures_dir().join("registry.json")),
    ]);
    let code = locator.component_source("usage-meter");
    assert!(code.contains("UsageMeterProps"));
}

#[test]
fn test_empty_files_item_degrades() {
    let locator = locator();
    assert_eq!(&*locator.component_source("bare"), not_found_sentinel("bare"));
    assert!(locator.component_docs("bare").is_empty());
    assert!(locator.component_file_path("bare").is_none());
}

#[test]
fn test_extracted_docs_for_usage_meter() {
    let locator = locator();
    let docs = locator.component_docs("usage-meter");
    assert_eq!(docs.len(), 1);

    let doc = &docs[0];
    assert_eq!(doc.display_name, "UsageMeter");
    assert!(
        doc.description
            .as_deref()
            .unwrap()
            .starts_with("Displays resource usage")
    );

    let names: Vec<&str> = doc.props.iter().map(|p| p.prop.as_str()).collect();
    assert_eq!(names, ["value", "max", "variant", "label", "showPercentage"]);

    assert!(doc.props[0].required);
    assert_eq!(doc.props[1].default.as_deref(), Some("100"));
    assert_eq!(doc.props[1].description.as_deref(), Some("Maximum value"));
    assert_eq!(doc.props[2].ty, "keyof typeof meterVariants");
    assert_eq!(doc.props[2].default.as_deref(), Some("\"default\""));
    assert_eq!(doc.props[3].default, None);
    assert_eq!(doc.props[4].default.as_deref(), Some("true"));
}

#[test]
fn test_formatted_rows_for_usage_meter() {
    let locator = locator();
    let docs = locator.component_docs("usage-meter");
    let rows = format_rows(&docs[0].props);

    assert_eq!(rows[0].default, "Required");
    assert_eq!(rows[1].default, "100");
    assert_eq!(rows[3].default, NO_DEFAULT);
}

#[test]
fn test_formatted_union_type_for_usage_badge() {
    let locator = locator();
    let docs = locator.component_docs("usage-badge");
    let rows = format_rows(&docs[0].props);

    let tone = rows.iter().find(|r| r.prop == "tone").unwrap();
    assert_eq!(tone.ty, r#""default" | "success" | "warning" | "danger""#);
}

#[test]
fn test_extract_docs_idempotent_over_fixture() {
    let source =
        std::fs::read_to_string(fixtures_dir().join("src/usage-meter.tsx")).unwrap();
    assert_eq!(extract_docs(&source), extract_docs(&source));
}

#[test]
fn test_component_names_across_sources() {
    let locator = locator();
    // usage-dashboard is a block, not a component; usage-meter de-duplicates
    assert_eq!(
        locator.component_names(),
        ["usage-meter", "bare", "usage-badge"]
    );
}
