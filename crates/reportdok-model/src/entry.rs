//! Report entries and categories
//!
//! Entries are plain records of display strings. They have no identity
//! beyond their position in the parent list, and list order is rendering
//! order.

use serde::{Deserialize, Serialize};

use crate::lang::{Lang, Text};

/// Implementation status of an audited feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Fully implemented
    #[serde(rename = "yes", alias = "implemented")]
    Implemented,
    /// Partially available
    #[serde(rename = "partial")]
    Partial,
    /// Not built yet
    #[serde(rename = "no", alias = "missing")]
    Missing,
}

impl Status {
    /// Status label in one language
    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Status::Implemented => lang.pick("Vorhanden", "Implemented"),
            Status::Partial => lang.pick("Teilweise", "Partial"),
            Status::Missing => lang.pick("Fehlt", "Missing"),
        }
    }
}

/// Severity of a bug or priority of a missing feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Severity label in one language
    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Severity::High => lang.pick("HOCH", "HIGH"),
            Severity::Medium => lang.pick("MITTEL", "MEDIUM"),
            Severity::Low => lang.pick("NIEDRIG", "LOW"),
        }
    }

    /// Both labels, e.g. `MITTEL / MEDIUM`
    pub fn bilingual(self) -> String {
        format!("{} / {}", self.label(Lang::De), self.label(Lang::En))
    }
}

/// A named, ordered group of entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category<E> {
    /// Category heading
    pub title: Text,
    /// Entries in rendering order
    pub entries: Vec<E>,
}

impl<E> Category<E> {
    /// Number of entries in this category
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the category has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An audited feature with its implementation status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureEntry {
    pub name: Text,
    pub status: Status,
    pub details: Text,
}

/// A verified, working feature of the product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkingFeature {
    pub name: Text,
    pub note: Text,
}

/// A known bug found in the source code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bug {
    pub title: Text,
    pub severity: Severity,
    pub location: Text,
    pub description: Text,
}

/// Code or schema that exists but is never used
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeadCodeItem {
    pub item: Text,
    pub location: String,
    pub reason: Text,
}

/// A feature that is still missing, with its priority
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingFeature {
    pub name: Text,
    pub priority: Severity,
    pub description: Text,
}

/// One row of the technology stack table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackItem {
    pub component: Text,
    pub technology: String,
}

/// One row of the architecture metrics table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchitectureStat {
    pub metric: Text,
    pub value: Text,
}

/// A recommended next step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: Text,
    pub description: Text,
}
