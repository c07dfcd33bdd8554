//! reportdok CLI - Command-line interface library
//!
//! This library provides the CLI functionality for reportdok, including:
//! - Audit: render the bilingual app audit report
//! - Product: render the product report in German and/or English
//! - Summary: print feature status counts without rendering
//!
//! # Library Usage
//!
//! ```ignore
//! use reportdok_cli::{audit_command, RunContext};
//!
//! let ctx = RunContext::new(settings, date);
//! let summary = audit_command(&ctx, None, None)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Render everything from the built-in datasets
//! reportdok
//!
//! # Audit report from a custom dataset
//! reportdok audit --data audit.toml --output out/Audit.pdf
//!
//! # English product report only
//! reportdok product --lang en --output-dir out/
//!
//! # Status counts as JSON
//! reportdok summary --format json
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{
    all_command, audit_command, completion_summary, product_command, summary_command,
    write_atomic,
};
pub use app::{run_cli, LangChoice, OutputFormat, RunContext};
