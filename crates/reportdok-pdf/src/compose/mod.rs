//! Report documents
//!
//! Each composer turns a validated dataset into recorded pages, then hands
//! them to [`PdfBackend`]. Layout is separate from serialization so tests
//! can inspect page counts and text without parsing PDF output.

mod audit;
mod product;

pub use audit::AuditReport;
pub use product::ProductReport;

use std::io::Write;

use chrono::{Datelike, NaiveDate};
use reportdok_model::{Lang, Text};

use crate::backend::{DocumentInfo, PdfBackend};
use crate::canvas::{Canvas, PageRecorder};
use crate::error::Result;
use crate::geometry::pt_to_mm;
use crate::markup::escape_markup;

/// Switches shared by both documents
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Date printed on covers, headers and footers
    pub date: NaiveDate,
    pub repeat_table_headers: bool,
    pub stripe_rows: bool,
}

impl RenderOptions {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            repeat_table_headers: true,
            stripe_rows: true,
        }
    }
}

/// A finished PDF
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

impl RenderedDocument {
    /// Write the PDF bytes and flush
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }
}

pub(crate) fn finish_document(recorder: &PageRecorder, info: &DocumentInfo) -> Result<RenderedDocument> {
    let bytes = PdfBackend::render(recorder, info)?;
    Ok(RenderedDocument {
        bytes,
        pages: recorder.page_count(),
    })
}

/// `17.10.2026`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `17-10-2026`, for file names
pub fn file_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// `17. Oktober 2026` or `October 17, 2026`
pub fn long_date(date: NaiveDate, lang: Lang) -> String {
    const MONATE: [&str; 12] = [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ];
    match lang {
        Lang::De => format!(
            "{}. {} {}",
            date.day(),
            MONATE[date.month0() as usize],
            date.year()
        ),
        Lang::En => date.format("%B %-d, %Y").to_string(),
    }
}

/// Points to millimetres, for type-oriented measurements
pub(crate) fn pt(points: f32) -> f32 {
    pt_to_mm(points)
}

/// German text with the English variant below it in muted italics; a
/// shared text is shown once
pub(crate) fn bilingual_block(text: &Text) -> String {
    if text.is_shared() {
        text.de.clone()
    } else {
        format!("{}\n[muted]#_{}_#", text.de, text.en)
    }
}

/// Literal text from a dataset field that is not meant as markup
pub(crate) fn literal(text: &str) -> String {
    escape_markup(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(short_date(date()), "07.03.2026");
        assert_eq!(file_date(date()), "07-03-2026");
        assert_eq!(long_date(date(), Lang::De), "7. März 2026");
        assert_eq!(long_date(date(), Lang::En), "March 7, 2026");
    }

    #[test]
    fn test_write_to() {
        let document = RenderedDocument {
            bytes: b"%PDF-1.7".to_vec(),
            pages: 1,
        };
        let mut out = Vec::new();
        document.write_to(&mut out).unwrap();
        assert_eq!(out, b"%PDF-1.7");
    }

    #[test]
    fn test_bilingual_block() {
        assert_eq!(bilingual_block(&Text::shared("Dashboard")), "Dashboard");
        assert_eq!(
            bilingual_block(&Text::new("Zahlungen", "Payments")),
            "Zahlungen\n[muted]#_Payments_#"
        );
    }
}
