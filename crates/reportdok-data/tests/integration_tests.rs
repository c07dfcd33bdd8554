//! Integration tests for dataset loading

use std::fs;

use reportdok_data::{BuiltinSource, DataError, DatasetLoader, DatasetSource, FileSource};
use reportdok_model::{Lang, Severity, Status};
use tempfile::TempDir;

const MINIMAL_AUDIT: &str = r#"
product = "Demo"
title = { de = "Bericht", en = "Report" }
prepared_for = "Review"
description = "A *demo* app"

[[categories]]
title = { de = "Zahlungen", en = "Payments" }

[[categories.entries]]
name = "Stripe"
status = "no"
details = { de = "Nicht integriert", en = "Not integrated" }
"#;

#[test]
fn test_builtin_audit_loads() {
    let audit = DatasetLoader::audit(&BuiltinSource::AUDIT).unwrap();
    assert_eq!(audit.product, "SchichtPlan");
    assert_eq!(audit.categories.len(), 17);

    let summary = audit.summary();
    assert_eq!(summary.total, 94);
    assert_eq!(summary.implemented, 70);
    assert_eq!(summary.partial, 2);
    assert_eq!(summary.missing, 22);
    assert_eq!(summary.percent_implemented(), 74);
    assert_eq!(audit.missing().count(), 22);
    assert_eq!(audit.recommendations.len(), 4);
}

#[test]
fn test_builtin_product_loads() {
    let product = DatasetLoader::product(&BuiltinSource::PRODUCT).unwrap();
    assert_eq!(product.features.len(), 14);
    assert_eq!(product.feature_count(), 56);
    assert_eq!(product.bugs.len(), 4);
    assert_eq!(product.dead_code.len(), 10);
    assert_eq!(product.missing.len(), 12);
    assert_eq!(product.missing_with_priority(Severity::High), 3);
    assert_eq!(product.roadmap.len(), 3);
    assert!(!product.short_title.get(Lang::En).is_empty());
}

#[test]
fn test_builtin_origin() {
    assert_eq!(BuiltinSource::AUDIT.origin(), "builtin:audit");
    assert_eq!(BuiltinSource::PRODUCT.origin(), "builtin:product");
}

#[test]
fn test_load_audit_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("audit.toml");
    fs::write(&path, MINIMAL_AUDIT).unwrap();

    let audit = DatasetLoader::audit(&FileSource::new(&path)).unwrap();
    assert_eq!(audit.categories[0].title.get(Lang::En), "Payments");
    assert_eq!(audit.categories[0].entries[0].status, Status::Missing);
    assert_eq!(audit.prepared_for.get(Lang::De), "Review");
}

#[test]
fn test_category_without_entries_is_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("audit.toml");
    let source = format!("{MINIMAL_AUDIT}\n[[categories]]\ntitle = {{ de = \"Leer\", en = \"Empty\" }}\n");
    fs::write(&path, source).unwrap();

    let audit = DatasetLoader::audit(&FileSource::new(&path)).unwrap();
    assert_eq!(audit.categories.len(), 2);
    assert_eq!(audit.categories[1].title.get(Lang::En), "Empty");
    assert!(audit.categories[1].entries.is_empty());
    assert_eq!(audit.summary().total, 1);
}

#[test]
fn test_missing_translation_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("audit.toml");
    let broken = MINIMAL_AUDIT.replace(
        r#"details = { de = "Nicht integriert", en = "Not integrated" }"#,
        r#"details = { de = "Nicht integriert" }"#,
    );
    fs::write(&path, broken).unwrap();

    let err = DatasetLoader::audit(&FileSource::new(&path)).unwrap_err();
    match err {
        DataError::MissingTranslation { path, lang } => {
            assert_eq!(path, "categories[0].entries[0].details");
            assert_eq!(lang, Lang::En);
        }
        other => panic!("expected missing translation, got {other}"),
    }
}

#[test]
fn test_unknown_status_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("audit.toml");
    fs::write(&path, MINIMAL_AUDIT.replace("status = \"no\"", "status = \"maybe\"")).unwrap();

    let err = DatasetLoader::audit(&FileSource::new(&path)).unwrap_err();
    assert!(matches!(err, DataError::Parse { .. }));
    assert!(err.to_string().contains("audit.toml"));
}

#[test]
fn test_empty_product_name_is_invalid() {
    let source = MINIMAL_AUDIT.replace("product = \"Demo\"", "product = \"  \"");
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("audit.toml");
    fs::write(&path, source).unwrap();

    let err = DatasetLoader::audit(&FileSource::new(&path)).unwrap_err();
    assert!(matches!(err, DataError::Invalid { ref path, .. } if path == "product"));
}

#[test]
fn test_missing_file() {
    let err = DatasetLoader::product(&FileSource::new("/nonexistent/product.toml")).unwrap_err();
    assert!(matches!(err, DataError::FileNotFound(_)));
}
