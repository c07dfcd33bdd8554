//! # reportdok-data
//!
//! Loads report datasets and run settings for reportdok.
//!
//! Datasets are TOML files validated into the typed `reportdok-model`
//! structures in one explicit step, so the renderer never sees raw input.
//! Each text field is either a plain string or a `{ de, en }` table; a
//! missing or blank variant fails the load with the offending field path.
//!
//! ## Example
//!
//! ```rust,ignore
//! use reportdok_data::{BuiltinSource, DatasetLoader, FileSource};
//!
//! let audit = DatasetLoader::audit(&BuiltinSource::AUDIT)?;
//! let product = DatasetLoader::product(&FileSource::new("product.toml"))?;
//! ```

pub mod error;
mod raw;
pub mod settings;
pub mod sources;

pub use error::{DataError, Result};
pub use settings::{LayoutSettings, OutputSettings, Settings, SETTINGS_FILE};
pub use sources::{BuiltinSource, DatasetSource, FileSource};

use reportdok_model::{AuditDataset, ProductDataset};

use crate::raw::{RawAudit, RawProduct};

/// Entry point for turning dataset sources into validated models
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load and validate an audit dataset
    pub fn audit(source: &dyn DatasetSource) -> Result<AuditDataset> {
        let origin = source.origin();
        let raw: RawAudit = parse(&source.read()?, &origin)?;
        let dataset = raw.validate()?;
        tracing::info!(
            "Loaded audit dataset from {}: {} categories, {} features",
            origin,
            dataset.categories.len(),
            dataset.features().count()
        );
        Ok(dataset)
    }

    /// Load and validate a product dataset
    pub fn product(source: &dyn DatasetSource) -> Result<ProductDataset> {
        let origin = source.origin();
        let raw: RawProduct = parse(&source.read()?, &origin)?;
        let dataset = raw.validate()?;
        tracing::info!(
            "Loaded product dataset from {}: {} features, {} bugs",
            origin,
            dataset.feature_count(),
            dataset.bugs.len()
        );
        Ok(dataset)
    }
}

fn parse<T: serde::de::DeserializeOwned>(content: &str, origin: &str) -> Result<T> {
    toml::from_str(content).map_err(|source| DataError::Parse {
        origin: origin.to_string(),
        source,
    })
}
