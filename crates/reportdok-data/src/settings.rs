//! Run settings loaded from `reportdok.toml`.
//!
//! ```toml
//! [output]
//! dir = "reports"
//! audit_file = "Audit_Report.pdf"
//!
//! [layout]
//! repeat_table_headers = true
//! stripe_rows = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Default settings file name looked up in the working directory
pub const SETTINGS_FILE: &str = "reportdok.toml";

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Where generated documents go
    pub output: OutputSettings,
    /// Table layout switches
    pub layout: LayoutSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DataError::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|source| DataError::Parse {
            origin: path.display().to_string(),
            source,
        })
    }

    /// Load `reportdok.toml` from `dir` if it exists, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if path.exists() {
            tracing::info!("Loading settings: {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Output locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory that receives generated PDFs
    pub dir: PathBuf,
    /// File name of the audit report inside `dir`
    pub audit_file: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("reports"),
            audit_file: "Audit_Report.pdf".to_string(),
        }
    }
}

/// Table layout switches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    /// Repeat the header row on every page a table spans
    pub repeat_table_headers: bool,
    /// Shade every other data row
    pub stripe_rows: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            repeat_table_headers: true,
            stripe_rows: true,
        }
    }
}
