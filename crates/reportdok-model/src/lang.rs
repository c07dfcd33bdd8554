//! Languages and localized text
//!
//! Every display string in a dataset exists in German and English. A
//! document selects one variant per output file (product report) or shows
//! both side by side (audit report).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output language of a localized variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// German (the primary language of the reports)
    De,
    /// English
    En,
}

impl Lang {
    /// Both languages in rendering order
    pub const ALL: [Lang; 2] = [Lang::De, Lang::En];

    /// Lowercase language code (`de`, `en`)
    pub fn code(self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
        }
    }

    /// Pick one of two literals by language
    pub fn pick<'a>(self, de: &'a str, en: &'a str) -> &'a str {
        match self {
            Lang::De => de,
            Lang::En => en,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code().to_uppercase())
    }
}

/// A string with a German and an English variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    /// German variant
    pub de: String,
    /// English variant
    pub en: String,
}

impl Text {
    /// Create a text with distinct variants
    pub fn new(de: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            de: de.into(),
            en: en.into(),
        }
    }

    /// Create a text that reads the same in both languages
    pub fn shared(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            de: text.clone(),
            en: text,
        }
    }

    /// Select the variant for `lang`
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::De => &self.de,
            Lang::En => &self.en,
        }
    }

    /// Whether both variants are identical
    pub fn is_shared(&self) -> bool {
        self.de == self.en
    }

    /// Render as `de / en`, or a single string when both variants agree
    pub fn bilingual(&self) -> String {
        if self.is_shared() {
            self.de.clone()
        } else {
            format!("{} / {}", self.de, self.en)
        }
    }
}
