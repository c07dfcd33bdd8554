//! The two report datasets
//!
//! `AuditDataset` feeds the single bilingual audit report; `ProductDataset`
//! feeds the product report, which is rendered once per language.

use serde::Serialize;

use crate::entry::{
    ArchitectureStat, Bug, Category, DeadCodeItem, FeatureEntry, MissingFeature, Recommendation,
    Severity, StackItem, Status, WorkingFeature,
};
use crate::lang::Text;

/// Data for the bilingual app audit report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditDataset {
    /// Product name shown on the cover and in footers
    pub product: String,
    /// Report title (e.g. "App Audit Report")
    pub title: Text,
    /// "Prepared for" line on the cover
    pub prepared_for: Text,
    /// Product description opening the executive summary (markup)
    pub description: Text,
    /// Audited feature categories
    pub categories: Vec<Category<FeatureEntry>>,
    /// Recommendation groups, highest priority first
    pub recommendations: Vec<RecommendationGroup>,
    /// Technology stack table
    pub stack: Vec<StackItem>,
}

impl AuditDataset {
    /// All features across categories, in rendering order
    pub fn features(&self) -> impl Iterator<Item = &FeatureEntry> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }

    /// Missing features paired with the category they belong to
    pub fn missing(&self) -> impl Iterator<Item = (&FeatureEntry, &Category<FeatureEntry>)> {
        self.categories.iter().flat_map(|category| {
            category
                .entries
                .iter()
                .filter(|entry| entry.status == Status::Missing)
                .map(move |entry| (entry, category))
        })
    }

    /// Count features by status
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_statuses(self.features().map(|f| f.status))
    }
}

/// A titled group of recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationGroup {
    pub priority: Text,
    pub items: Vec<Recommendation>,
}

/// Data for the product and investment report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDataset {
    pub product: String,
    /// Title on the cover page
    pub report_title: Text,
    /// Title in the running page header
    pub short_title: Text,
    pub tagline: Text,
    /// Executive summary paragraphs
    pub summary: Vec<Text>,
    pub stack: Vec<StackItem>,
    pub architecture: Vec<ArchitectureStat>,
    pub features: Vec<Category<WorkingFeature>>,
    pub bugs: Vec<Bug>,
    pub dead_code: Vec<DeadCodeItem>,
    pub missing: Vec<MissingFeature>,
    pub roadmap: Vec<RoadmapPhase>,
    /// Conclusion paragraphs
    pub conclusion: Vec<Text>,
    /// Investment highlights (bullets under the conclusion)
    pub highlights: Vec<Text>,
}

impl ProductDataset {
    /// Total number of working features
    pub fn feature_count(&self) -> usize {
        self.features.iter().map(Category::len).sum()
    }

    /// Number of missing features with the given priority
    pub fn missing_with_priority(&self, priority: Severity) -> usize {
        self.missing.iter().filter(|m| m.priority == priority).count()
    }
}

/// A roadmap phase with its work items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapPhase {
    pub phase: Text,
    pub items: Vec<Text>,
}

/// Counts of features by implementation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub implemented: usize,
    pub partial: usize,
    pub missing: usize,
}

impl StatusSummary {
    /// Tally a sequence of statuses
    pub fn from_statuses(statuses: impl IntoIterator<Item = Status>) -> Self {
        let mut summary = Self::default();
        for status in statuses {
            summary.total += 1;
            match status {
                Status::Implemented => summary.implemented += 1,
                Status::Partial => summary.partial += 1,
                Status::Missing => summary.missing += 1,
            }
        }
        summary
    }

    /// Implemented share in whole percent, rounded down (0 for an empty set)
    pub fn percent_implemented(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.implemented * 100 / self.total
        }
    }
}
