// Integration tests for save-document loading
// Fixtures are trimmed save files with the custom `!tags` annotation

use serialdiff_core::errors::ExErrorKind;
use serialdiff_core::extract::{extract_serials, extract_unknown_serials, ExtractorConfig};
use serialdiff_core::StateFlags;
use serialdiff_store::{load_document, DecodeOptions, TagPolicy};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_load_original_save() {
    let path = fixtures_dir().join("save_original.yaml");

    let doc = load_document(&path, &DecodeOptions::default()).unwrap();
    let serials = extract_serials(&doc, &ExtractorConfig::default());

    assert_eq!(serials.len(), 3);
    assert_eq!(
        serials.get("@Uge98>m/)}}!c5JeNWCvCXc"),
        Some(&StateFlags::from(17))
    );
    assert!(extract_unknown_serials(&doc, &ExtractorConfig::default()).is_empty());
}

#[test]
fn test_load_live_save_flattens_tags() {
    let path = fixtures_dir().join("save_live.yaml");

    let doc = load_document(&path, &DecodeOptions::default()).unwrap();
    let serials = extract_serials(&doc, &ExtractorConfig::default());

    assert_eq!(serials.len(), 4);
    assert_eq!(
        serials.get("@Ugr$ZCm/&tH!t{KgK/Shxu>k"),
        Some(&StateFlags::from(3))
    );
    assert_eq!(doc["state"]["currencies"]["cash"], serde_yaml::Value::from(98120));

    let unknown = extract_unknown_serials(&doc, &ExtractorConfig::default());
    assert_eq!(unknown.len(), 1);
    assert!(unknown.contains("@UgwSAs2}TYg>Rp6YtQM!!3pr"));
}

#[test]
fn test_load_live_save_with_tag_allowlist() {
    let path = fixtures_dir().join("save_live.yaml");

    let allowed = DecodeOptions {
        tag_policy: TagPolicy::flatten_only(["!tags"]).unwrap(),
    };
    assert!(load_document(&path, &allowed).is_ok());

    let restricted = DecodeOptions {
        tag_policy: TagPolicy::flatten_only(["!other"]).unwrap(),
    };
    let err = load_document(&path, &restricted).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::UnsupportedTag);
    assert_eq!(err.path(), Some(path.display().to_string().as_str()));
}

#[test]
fn test_load_malformed_save() {
    let path = fixtures_dir().join("save_malformed.yaml");

    let err = load_document(&path, &DecodeOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
    assert_eq!(err.code(), "ERR_INVALID_DOCUMENT");
}

#[test]
fn test_load_missing_save() {
    let path = fixtures_dir().join("does_not_exist.yaml");

    let err = load_document(&path, &DecodeOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::DocumentUnreadable);
    assert_eq!(err.op(), Some("load_document"));
    assert!(err.path().unwrap().ends_with("does_not_exist.yaml"));
}
