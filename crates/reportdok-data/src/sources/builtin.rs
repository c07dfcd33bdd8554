//! Datasets compiled into the binary.

use crate::error::Result;
use crate::sources::DatasetSource;

/// A dataset embedded at compile time
#[derive(Debug, Clone, Copy)]
pub struct BuiltinSource {
    name: &'static str,
    content: &'static str,
}

impl BuiltinSource {
    /// The bilingual app audit dataset
    pub const AUDIT: BuiltinSource = BuiltinSource {
        name: "audit",
        content: include_str!("../../data/audit.toml"),
    };

    /// The product and investment report dataset
    pub const PRODUCT: BuiltinSource = BuiltinSource {
        name: "product",
        content: include_str!("../../data/product.toml"),
    };

    /// Raw TOML text of the dataset
    pub fn content(&self) -> &'static str {
        self.content
    }
}

impl DatasetSource for BuiltinSource {
    fn read(&self) -> Result<String> {
        Ok(self.content.to_string())
    }

    fn origin(&self) -> String {
        format!("builtin:{}", self.name)
    }
}
