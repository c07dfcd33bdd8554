//! reportdok-model - Report data model
//!
//! This crate provides the typed, read-only data that reportdok renders:
//! localized text, status flags, report entries grouped into categories,
//! and the two datasets (audit report and product report).
//!
//! All values are built once by `reportdok-data` and never mutated.

pub mod dataset;
pub mod entry;
pub mod lang;

pub use dataset::{AuditDataset, ProductDataset, RecommendationGroup, RoadmapPhase, StatusSummary};
pub use entry::{
    ArchitectureStat, Bug, Category, DeadCodeItem, FeatureEntry, MissingFeature, Recommendation,
    Severity, StackItem, Status, WorkingFeature,
};
pub use lang::{Lang, Text};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
