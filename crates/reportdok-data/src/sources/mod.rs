//! Dataset sources.
//!
//! A source yields the TOML text of one dataset and a human-readable origin
//! used in error messages.

pub mod builtin;
pub mod file;

pub use builtin::BuiltinSource;
pub use file::FileSource;

use crate::error::Result;

/// Trait for anything that can provide dataset TOML
pub trait DatasetSource {
    /// Read the full dataset text
    fn read(&self) -> Result<String>;

    /// Where the dataset comes from (a path, or `builtin:<name>`)
    fn origin(&self) -> String;
}
