//! Error types for layout and PDF generation

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during layout or PDF generation
#[derive(Error, Debug)]
pub enum PdfError {
    /// Table or page parameters that cannot be laid out
    #[error("Invalid layout in {context}: {reason}")]
    InvalidLayout { context: String, reason: String },

    /// Nothing was drawn, so there is no page to serialize
    #[error("Document has no pages")]
    EmptyDocument,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PdfError {
    pub(crate) fn layout(context: impl Into<String>, reason: impl Into<String>) -> Self {
        PdfError::InvalidLayout {
            context: context.into(),
            reason: reason.into(),
        }
    }
}
