//! PDF serialization of recorded pages
//!
//! Pages are written with `pdf-writer`. Layout coordinates (millimetres,
//! top-left origin) are converted to PDF user space (points, bottom-left
//! origin) here and nowhere else.

use chrono::{Datelike, NaiveDate};
use pdf_writer::{Content, Date, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::canvas::{Canvas, DrawOp, PageRecorder};
use crate::color::Color;
use crate::error::{PdfError, Result};
use crate::geometry::mm_to_pt;
use crate::metrics::{encode_win_ansi, Font, TextMeasure};

/// Document metadata written to the info dictionary
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub created: Option<NaiveDate>,
}

/// Serializes a [`PageRecorder`] into PDF bytes
pub struct PdfBackend;

impl PdfBackend {
    /// Producer string written into every document
    pub const PRODUCER: &'static str = concat!("reportdok ", env!("CARGO_PKG_VERSION"));

    /// Render all recorded pages
    pub fn render<M: TextMeasure>(recorder: &PageRecorder<M>, info: &DocumentInfo) -> Result<Vec<u8>> {
        let pages = recorder.pages();
        if pages.is_empty() {
            return Err(PdfError::EmptyDocument);
        }

        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();
        let font_ids: Vec<(Font, Ref)> = Font::ALL.iter().map(|&font| (font, alloc())).collect();
        let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc(), alloc())).collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().map(|(page, _)| *page))
            .count(page_ids.len() as i32);

        for (font, id) in &font_ids {
            pdf.type1_font(*id)
                .base_font(Name(font.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let geometry = recorder.geometry();
        let (width, height) = (mm_to_pt(geometry.width), mm_to_pt(geometry.height));
        for (ops, (page_id, content_id)) in pages.iter().zip(&page_ids) {
            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, width, height))
                .parent(pages_id)
                .contents(*content_id);
            {
                let mut resources = page.resources();
                let mut fonts = resources.fonts();
                for (font, id) in &font_ids {
                    fonts.pair(Name(font.resource_name()), *id);
                }
            }
            page.finish();

            let raw = content_stream(ops, height);
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
            pdf.stream(*content_id, &compressed)
                .filter(Filter::FlateDecode);
        }

        {
            let mut doc_info = pdf.document_info(info_id);
            doc_info
                .title(TextStr(&info.title))
                .author(TextStr(&info.author))
                .subject(TextStr(&info.subject))
                .producer(TextStr(Self::PRODUCER));
            if let Some(date) = info.created {
                doc_info.creation_date(pdf_date(date));
            }
        }

        tracing::debug!("Serialized {} pages", pages.len());
        Ok(pdf.finish())
    }
}

fn pdf_date(date: NaiveDate) -> Date {
    Date::new(date.year().clamp(0, 9999) as u16)
        .month(date.month() as u8)
        .day(date.day() as u8)
}

fn set_fill(content: &mut Content, color: Color) {
    let (r, g, b) = color.to_unit();
    content.set_fill_rgb(r, g, b);
}

fn content_stream(ops: &[DrawOp], page_height: f32) -> Vec<u8> {
    let flip = |y: f32| page_height - mm_to_pt(y);
    let mut content = Content::new();

    for op in ops {
        match op {
            DrawOp::FillRect { rect, color } => {
                set_fill(&mut content, *color);
                content.rect(
                    mm_to_pt(rect.x),
                    flip(rect.bottom()),
                    mm_to_pt(rect.width),
                    mm_to_pt(rect.height),
                );
                content.fill_nonzero();
            }
            DrawOp::StrokeLine {
                from,
                to,
                width,
                color,
            } => {
                let (r, g, b) = color.to_unit();
                content.set_stroke_rgb(r, g, b);
                content.set_line_width(mm_to_pt(*width));
                content.move_to(mm_to_pt(from.0), flip(from.1));
                content.line_to(mm_to_pt(to.0), flip(to.1));
                content.stroke();
            }
            DrawOp::Text {
                x,
                y,
                text,
                font,
                size,
                color,
            } => {
                set_fill(&mut content, *color);
                content.begin_text();
                content.set_font(Name(font.resource_name()), *size);
                content.next_line(mm_to_pt(*x), flip(*y));
                content.show(Str(&encode_win_ansi(text)));
                content.end_text();
            }
        }
    }

    content.finish().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Margins, PageGeometry};

    fn recorder() -> PageRecorder {
        PageRecorder::new(PageGeometry::a4(Margins::new(20.0, 20.0, 25.0, 20.0)))
    }

    #[test]
    fn test_render_produces_pdf() {
        let mut canvas = recorder();
        canvas.fill_rect(crate::geometry::Rect::new(0.0, 0.0, 210.0, 40.0), Color::rgb(124, 58, 237));
        canvas.draw_text(20.0, 30.0, "Prüfbericht", Font::Bold, 28.0, Color::WHITE);
        canvas.begin_page();
        canvas.stroke_line((20.0, 20.0), (190.0, 20.0), 0.4, Color::BLACK);

        let info = DocumentInfo {
            title: "Audit".to_string(),
            created: NaiveDate::from_ymd_opt(2026, 10, 17),
            ..DocumentInfo::default()
        };
        let bytes = PdfBackend::render(&canvas, &info).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "Output doesn't start with PDF header");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Encoding /WinAnsiEncoding"));
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let err = PdfBackend::render(&recorder(), &DocumentInfo::default()).unwrap_err();
        assert!(matches!(err, PdfError::EmptyDocument));
    }

    #[test]
    fn test_content_stream_flips_y() {
        let ops = vec![DrawOp::Text {
            x: 0.0,
            y: 0.0,
            text: "A".to_string(),
            font: Font::Regular,
            size: 10.0,
            color: Color::BLACK,
        }];
        let stream = String::from_utf8_lossy(&content_stream(&ops, 842.0)).to_string();
        assert!(stream.contains("0 842 Td"), "stream was: {stream}");
        assert!(stream.contains("/F1 10 Tf"));
    }
}
