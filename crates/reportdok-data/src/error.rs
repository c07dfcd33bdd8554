//! Error types for dataset loading.

use reportdok_model::Lang;
use thiserror::Error;

/// Result type for data operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading a dataset or settings
#[derive(Debug, Error)]
pub enum DataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The source is not valid TOML or does not match the dataset shape
    #[error("Failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// A localized field lacks one of its language variants
    #[error("Missing {lang} translation at {path}")]
    MissingTranslation { path: String, lang: Lang },

    /// A field is present but unusable
    #[error("Invalid value at {path}: {reason}")]
    Invalid { path: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
