//! Vertical flow layout
//!
//! [`Flow`] keeps a cursor on the current page and stacks paragraphs,
//! headings, bullets, badges and tables below each other, starting a new
//! page whenever the next piece does not fit. Paragraphs break between
//! lines; tables break between rows.

use crate::canvas::{baseline_offset, draw_line, Canvas};
use crate::color::{Color, Theme};
use crate::error::Result;
use crate::geometry::Rect;
use crate::markup::{parse_markup, Span};
use crate::metrics::Font;
use crate::table::{Align, Table, TableLayout};
use crate::wrap::wrap;

const EPSILON: f32 = 1e-3;

/// Typography of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    /// Font size in points
    pub size: f32,
    /// Line pitch in millimetres
    pub leading: f32,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
    pub align: Align,
    /// Left indent in millimetres
    pub indent: f32,
    /// Space above, skipped at the top of a page
    pub space_before: f32,
    pub space_after: f32,
}

impl ParagraphStyle {
    pub fn new(size: f32, leading: f32, color: Color) -> Self {
        Self {
            size,
            leading,
            color,
            bold: false,
            italic: false,
            align: Align::Left,
            indent: 0.0,
            space_before: 0.0,
            space_after: 0.0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    pub fn spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self::new(10.0, 5.5, Color::BLACK)
    }
}

/// A rule drawn below a heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingRule {
    pub color: Color,
    /// Stroke width in millimetres
    pub width: f32,
    /// Rule length, `None` for the full content width
    pub length: Option<f32>,
    /// Gap between the text and the rule
    pub gap: f32,
}

/// Typography of a heading
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingStyle {
    pub text: ParagraphStyle,
    pub rule: Option<HeadingRule>,
    /// Space that must remain below the heading on the same page
    pub keep_with_next: f32,
}

/// Page information handed to the page chrome pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based page index
    pub index: usize,
    /// Total number of pages in the document
    pub total: usize,
}

impl PageInfo {
    /// One-based page number
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Cursor-based layout over a [`Canvas`]
pub struct Flow<C: Canvas> {
    canvas: C,
    theme: Theme,
    y: f32,
}

impl<C: Canvas> Flow<C> {
    /// Start a flow at the top of the first page
    pub fn new(mut canvas: C, theme: Theme) -> Self {
        if canvas.page_count() == 0 {
            canvas.begin_page();
        }
        let y = canvas.geometry().content_top();
        Self { canvas, theme, y }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Direct canvas access for free-form drawing (cover pages)
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub fn left(&self) -> f32 {
        self.canvas.geometry().content_left()
    }

    pub fn width(&self) -> f32 {
        self.canvas.geometry().content_width()
    }

    pub fn top(&self) -> f32 {
        self.canvas.geometry().content_top()
    }

    pub fn bottom(&self) -> f32 {
        self.canvas.geometry().content_bottom()
    }

    /// Space left on the current page
    pub fn remaining(&self) -> f32 {
        self.bottom() - self.y
    }

    pub fn at_page_top(&self) -> bool {
        self.y <= self.top() + EPSILON
    }

    pub fn page_break(&mut self) {
        self.canvas.begin_page();
        self.y = self.top();
    }

    /// Break the page unless `height` fits below the cursor; returns whether
    /// a break was taken
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if self.y + height > self.bottom() + EPSILON && !self.at_page_top() {
            self.page_break();
            true
        } else {
            false
        }
    }

    /// Vertical gap; a gap reaching past the bottom ends the page instead
    pub fn spacer(&mut self, height: f32) {
        if self.y + height > self.bottom() + EPSILON {
            self.page_break();
        } else {
            self.y += height;
        }
    }

    /// Wrapped paragraph of markup text; returns the number of lines
    pub fn paragraph(&mut self, markup: &str, style: &ParagraphStyle) -> usize {
        let width = self.width() - style.indent;
        let x = self.left() + style.indent;
        self.paragraph_at(markup, style, x, width)
    }

    /// Heading, kept on the same page as `keep_with_next` of following space
    pub fn heading(&mut self, markup: &str, style: &HeadingStyle) {
        let text = &style.text;
        let lines = self.measure_lines(markup, text, self.width() - text.indent);
        let rule_height = style.rule.map_or(0.0, |r| r.gap + r.width);
        let needed = text.space_before
            + lines as f32 * text.leading
            + rule_height
            + text.space_after
            + style.keep_with_next;
        self.ensure_space(needed);

        let mut body = text.clone();
        body.space_after = 0.0;
        self.paragraph(markup, &body);

        if let Some(rule) = style.rule {
            let y = self.y + rule.gap;
            let x = self.left() + text.indent;
            let length = rule.length.unwrap_or(self.width() - text.indent);
            self.canvas
                .stroke_line((x, y), (x + length, y), rule.width, rule.color);
            self.y = y + rule.width;
        }
        self.y += text.space_after;
    }

    /// Bullet item: `glyph` in the indent, wrapped text beside it
    pub fn bullet(&mut self, markup: &str, style: &ParagraphStyle, glyph: &str, glyph_color: Color) {
        const GLYPH_WIDTH: f32 = 5.0;
        self.ensure_space(style.space_before + style.leading);
        if !self.at_page_top() {
            self.y += style.space_before;
        }

        let x = self.left() + style.indent;
        let baseline = self.y + baseline_offset(style.leading, style.size);
        let font = if style.bold { Font::Bold } else { Font::Regular };
        self.canvas
            .draw_text(x, baseline, glyph, font, style.size, glyph_color);

        let mut text = style.clone();
        text.space_before = 0.0;
        let width = self.width() - style.indent - GLYPH_WIDTH;
        self.paragraph_at(markup, &text, x + GLYPH_WIDTH, width);
    }

    /// Filled label box (e.g. a severity badge) at the left margin
    pub fn badge(&mut self, label: &str, fill: Color, text_color: Color) {
        const HEIGHT: f32 = 5.5;
        const SIZE: f32 = 8.0;
        self.ensure_space(HEIGHT);
        let width = self.canvas.text_width(label, Font::Bold, SIZE) + 6.0;
        let x = self.left();
        self.canvas
            .fill_rect(Rect::new(x, self.y, width, HEIGHT), fill);
        let baseline = self.y + baseline_offset(HEIGHT, SIZE);
        self.canvas
            .draw_text(x + 3.0, baseline, label, Font::Bold, SIZE, text_color);
        self.y += HEIGHT;
    }

    /// Render a table at the cursor, honoring keep-together
    pub fn table(&mut self, table: &Table) -> Result<TableLayout> {
        if table.keep_together {
            let height = table.total_height(self.canvas.measure())?;
            let page_height = self.bottom() - self.top();
            if height > self.remaining() && height <= page_height && !self.at_page_top() {
                tracing::debug!("Moving table '{}' to a new page", table.name);
                self.page_break();
            }
        }
        let x = self.left();
        let bottom = self.bottom();
        let layout = table.render(&mut self.canvas, &self.theme, x, self.y, bottom)?;
        self.y = layout.end_y;
        Ok(layout)
    }

    /// Number of pages so far
    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    /// Run `chrome` on every page once the page count is final, then hand
    /// back the canvas
    pub fn finish(mut self, mut chrome: impl FnMut(&mut C, PageInfo)) -> C {
        let total = self.canvas.page_count();
        for index in 0..total {
            self.canvas.select_page(index);
            chrome(&mut self.canvas, PageInfo { index, total });
        }
        self.canvas
    }

    fn measure_lines(&self, markup: &str, style: &ParagraphStyle, width: f32) -> usize {
        let spans = styled_spans(markup, style);
        wrap(&spans, width, style.size, self.canvas.measure()).len()
    }

    fn paragraph_at(&mut self, markup: &str, style: &ParagraphStyle, x: f32, width: f32) -> usize {
        if !self.at_page_top() && style.space_before > 0.0 {
            self.spacer(style.space_before);
        }
        let spans = styled_spans(markup, style);
        let lines = wrap(&spans, width, style.size, self.canvas.measure());
        let offset = baseline_offset(style.leading, style.size);

        for line in &lines {
            self.ensure_space(style.leading);
            let line_x = match style.align {
                Align::Left => x,
                Align::Center => x + (width - line.width) / 2.0,
            };
            draw_line(
                &mut self.canvas,
                line,
                line_x,
                self.y + offset,
                style.size,
                &self.theme,
                style.color,
            );
            self.y += style.leading;
        }
        if style.space_after > 0.0 {
            self.spacer(style.space_after);
        }
        lines.len()
    }
}

fn styled_spans(markup: &str, style: &ParagraphStyle) -> Vec<Span> {
    let mut spans = parse_markup(markup);
    for span in &mut spans {
        span.style.bold |= style.bold;
        span.style.italic |= style.italic;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, PageRecorder};
    use crate::geometry::{Margins, PageGeometry};
    use crate::table::{Column, Row};

    fn flow() -> Flow<PageRecorder> {
        let geometry = PageGeometry::a4(Margins::new(20.0, 20.0, 25.0, 20.0));
        Flow::new(PageRecorder::new(geometry), Theme::default())
    }

    #[test]
    fn test_new_flow_starts_at_top() {
        let flow = flow();
        assert_eq!(flow.page_count(), 1);
        assert!(flow.at_page_top());
        assert_eq!(flow.remaining(), 252.0);
    }

    #[test]
    fn test_paragraph_advances_by_lines() {
        let mut flow = flow();
        let style = ParagraphStyle::default();
        let lines = flow.paragraph("One\nTwo\nThree", &style);
        assert_eq!(lines, 3);
        assert!((flow.y() - (20.0 + 3.0 * 5.5)).abs() < 1e-4);
    }

    #[test]
    fn test_long_paragraph_breaks_between_lines() {
        let mut flow = flow();
        let style = ParagraphStyle::default();
        let text = vec!["line"; 60].join("\n");
        flow.paragraph(&text, &style);
        // 252mm holds 45 lines of 5.5mm
        assert_eq!(flow.page_count(), 2);
        assert!((flow.y() - (20.0 + 15.0 * 5.5)).abs() < 1e-3);
    }

    #[test]
    fn test_ensure_space() {
        let mut flow = flow();
        assert!(!flow.ensure_space(500.0), "no break at the top of a page");
        flow.set_y(250.0);
        assert!(!flow.ensure_space(22.0));
        assert!(flow.ensure_space(22.5));
        assert_eq!(flow.page_count(), 2);
        assert!(flow.at_page_top());
    }

    #[test]
    fn test_heading_keeps_with_next() {
        let mut flow = flow();
        flow.set_y(260.0);
        let style = HeadingStyle {
            text: ParagraphStyle::new(16.0, 10.0, Color::BLACK).bold(),
            rule: Some(HeadingRule {
                color: Color::BLACK,
                width: 0.6,
                length: Some(70.0),
                gap: 1.0,
            }),
            keep_with_next: 20.0,
        };
        flow.heading("1  Executive Summary", &style);
        assert_eq!(flow.page_count(), 2);
        let ops = &flow.canvas().pages()[1];
        assert!(ops.iter().any(|op| matches!(op, DrawOp::StrokeLine { .. })));
    }

    #[test]
    fn test_keep_together_moves_table() {
        let mut flow = flow();
        flow.set_y(240.0);
        let mut table = Table::new("Kept", vec![Column::new("A", 80.0), Column::new("B", 90.0)])
            .kept_together();
        for i in 0..10 {
            table.push_row(Row::new([format!("row {i}"), "value".to_string()]));
        }
        let layout = flow.table(&table).unwrap();
        assert_eq!(layout.start_page, 1);
        assert_eq!(layout.page_breaks, 0);
        assert_eq!(flow.y(), 20.0 + 11.0 * 5.0);
    }

    #[test]
    fn test_table_without_keep_together_splits() {
        let mut flow = flow();
        flow.set_y(240.0);
        let mut table = Table::new("Split", vec![Column::new("A", 170.0)]);
        for i in 0..10 {
            table.push_row(Row::new([format!("row {i}")]));
        }
        let layout = flow.table(&table).unwrap();
        assert_eq!(layout.start_page, 0);
        assert_eq!(layout.page_breaks, 1);
    }

    #[test]
    fn test_finish_visits_every_page() {
        let mut flow = flow();
        flow.page_break();
        flow.page_break();
        let canvas = flow.finish(|canvas, page| {
            let label = format!("Page {}/{}", page.number(), page.total);
            canvas.draw_text(100.0, 290.0, &label, Font::Regular, 7.0, Color::BLACK);
        });
        assert_eq!(canvas.page_text(0), "Page 1/3");
        assert_eq!(canvas.page_text(2), "Page 3/3");
    }

    #[test]
    fn test_bullet_draws_glyph_and_text() {
        let mut flow = flow();
        flow.bullet("Add middleware.ts", &ParagraphStyle::default().indent(14.0), "•", Color::BLACK);
        let text = flow.canvas().page_text(0);
        assert_eq!(text, "•\nAdd middleware.ts");
    }
}
