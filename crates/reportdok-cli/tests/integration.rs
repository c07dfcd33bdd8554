//! Integration tests for the reportdok CLI
//!
//! These tests run whole commands against temporary directories:
//! dataset -> PDF files on disk, plus the binary's exit status.

use std::fs;
use std::path::Path;
use std::process::Command;

use chrono::NaiveDate;
use reportdok_cli::{audit_command, product_command, write_atomic, RunContext};
use reportdok_data::Settings;
use reportdok_model::Lang;
use reportdok_pdf::RenderedDocument;
use tempfile::TempDir;

fn context(dir: &Path) -> RunContext {
    let mut settings = Settings::default();
    settings.output.dir = dir.to_path_buf();
    RunContext::new(settings, NaiveDate::from_ymd_opt(2026, 3, 7).unwrap())
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reportdok"))
}

#[test]
fn test_audit_command_writes_pdf() {
    let temp = TempDir::new().unwrap();
    let ctx = context(temp.path());

    let summary = audit_command(&ctx, None, None).unwrap();

    assert_eq!(summary.total, 94);
    assert_eq!(summary.percent_implemented(), 74);
    let pdf = fs::read(temp.path().join("Audit_Report.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
    assert_eq!(file_names(temp.path()), vec!["Audit_Report.pdf"]);
}

#[test]
fn test_product_command_writes_one_file_per_language() {
    let temp = TempDir::new().unwrap();
    let ctx = context(temp.path());

    let written = product_command(&ctx, None, None, &Lang::ALL).unwrap();

    assert_eq!(written.len(), 2);
    assert_eq!(
        file_names(temp.path()),
        vec![
            "SchichtPlan_Report_DE_07-03-2026.pdf",
            "SchichtPlan_Report_EN_07-03-2026.pdf"
        ]
    );
    for path in written {
        assert!(fs::read(path).unwrap().starts_with(b"%PDF"));
    }
}

#[test]
fn test_audit_from_custom_dataset() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("audit.toml");
    fs::write(
        &data,
        r#"
product = "Demo"
title = { de = "Bericht", en = "Report" }
prepared_for = "Review"
description = { de = "Eine Demo.", en = "A demo." }

[[categories]]
title = "Core"

[[categories.entries]]
name = "Login"
status = "yes"
details = { de = "Funktioniert", en = "Works" }

[[categories.entries]]
name = "Export"
status = "no"
details = { de = "Fehlt", en = "Missing" }
"#,
    )
    .unwrap();
    let output = temp.path().join("out").join("demo.pdf");
    let ctx = context(temp.path());

    let summary = audit_command(&ctx, Some(&data), Some(&output)).unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.missing, 1);
    assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_missing_translation_leaves_no_output() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("audit.toml");
    fs::write(
        &data,
        r#"
product = "Demo"
title = { de = "Bericht", en = "Report" }
prepared_for = "Review"
description = "Demo"

[[categories]]
title = "Core"

[[categories.entries]]
name = "Login"
status = "yes"
details = { de = "Funktioniert" }
"#,
    )
    .unwrap();
    let out_dir = temp.path().join("out");
    let ctx = context(&out_dir);

    let err = audit_command(&ctx, Some(&data), None).unwrap_err();

    let message = format!("{:#}", err);
    assert!(
        message.contains("categories[0].entries[0].details"),
        "unexpected error: {}",
        message
    );
    assert!(!out_dir.exists());
}

#[test]
fn test_write_atomic_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.pdf");
    fs::write(&path, b"old").unwrap();

    let document = RenderedDocument {
        bytes: b"%PDF-1.7 new".to_vec(),
        pages: 1,
    };
    write_atomic(&path, &document).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.7 new");
    assert_eq!(file_names(temp.path()), vec!["report.pdf"]);
}

#[test]
fn test_write_atomic_failure_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.pdf");
    fs::create_dir(&path).unwrap();

    let document = RenderedDocument {
        bytes: b"%PDF-1.7".to_vec(),
        pages: 1,
    };
    let err = write_atomic(&path, &document).unwrap_err();

    assert!(err.to_string().contains("report.pdf"));
    assert_eq!(file_names(temp.path()), vec!["report.pdf"]);
    assert!(path.is_dir());
    drop(err);
}

#[test]
fn test_binary_default_run() {
    let temp = TempDir::new().unwrap();

    let output = binary()
        .current_dir(temp.path())
        .args(["--date", "2026-03-07"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total features: 94"), "{}", stdout);
    assert_eq!(
        file_names(&temp.path().join("reports")),
        vec![
            "Audit_Report.pdf",
            "SchichtPlan_Report_DE_07-03-2026.pdf",
            "SchichtPlan_Report_EN_07-03-2026.pdf"
        ]
    );
}

#[test]
fn test_binary_reads_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("reportdok.toml"),
        "[output]\ndir = \"pdf\"\naudit_file = \"audit.pdf\"\n",
    )
    .unwrap();

    let status = binary()
        .current_dir(temp.path())
        .arg("audit")
        .status()
        .unwrap();

    assert!(status.success());
    assert!(temp.path().join("pdf").join("audit.pdf").exists());
}

#[test]
fn test_binary_summary_json() {
    let output = binary().args(["summary", "--format", "json"]).output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 94);
    assert_eq!(json["implemented"], 70);
    assert_eq!(json["partial"], 2);
    assert_eq!(json["missing"], 22);
    assert_eq!(json["percent_implemented"], 74);
}

#[test]
fn test_binary_fails_on_missing_dataset() {
    let temp = TempDir::new().unwrap();

    let output = binary()
        .current_dir(temp.path())
        .args(["audit", "--data", "nope.toml"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.toml"), "{}", stderr);
    assert!(!temp.path().join("reports").exists());
}
