//! Drawing surface abstraction
//!
//! Layout code draws through the [`Canvas`] trait in page coordinates
//! (millimetres, top-left origin). [`PageRecorder`] keeps the operations
//! per page so that pages can be revisited (running headers and "page N of
//! M" footers are drawn after the body) and serialized later.

use crate::color::{Color, Theme};
use crate::geometry::{PageGeometry, Rect};
use crate::metrics::{Font, Helvetica, TextMeasure};
use crate::wrap::Line;

/// A single drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeLine {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
    /// Text with its baseline at `y`
    Text {
        x: f32,
        y: f32,
        text: String,
        font: Font,
        size: f32,
        color: Color,
    },
}

/// Rendering backend capabilities needed by the layout engine
pub trait Canvas {
    fn geometry(&self) -> &PageGeometry;

    fn measure(&self) -> &dyn TextMeasure;

    /// Width of `text` in millimetres
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32 {
        self.measure().text_width(text, font, size)
    }

    /// Append a new page and make it current
    fn begin_page(&mut self);

    fn page_count(&self) -> usize;

    /// Zero-based index of the current page
    fn current_page(&self) -> usize;

    /// Make an existing page current again
    fn select_page(&mut self, index: usize);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color);

    /// Draw left-aligned text with its baseline at `y`
    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: Font, size: f32, color: Color);

    /// Draw text centered horizontally on `center_x`
    fn draw_text_centered(
        &mut self,
        center_x: f32,
        y: f32,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
    ) {
        let width = self.text_width(text, font, size);
        self.draw_text(center_x - width / 2.0, y, text, font, size, color);
    }

    /// Draw text right-aligned against `right_x`
    fn draw_text_right(
        &mut self,
        right_x: f32,
        y: f32,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
    ) {
        let width = self.text_width(text, font, size);
        self.draw_text(right_x - width, y, text, font, size, color);
    }
}

/// Draw one wrapped line fragment by fragment, resolving roles via `theme`
pub fn draw_line(
    canvas: &mut dyn Canvas,
    line: &Line,
    x: f32,
    baseline: f32,
    size: f32,
    theme: &Theme,
    color: Color,
) {
    let mut x = x;
    for fragment in &line.fragments {
        let font = Font::from_style(fragment.style);
        let fill = theme.resolve(fragment.style.role, color);
        canvas.draw_text(x, baseline, &fragment.text, font, size, fill);
        x += canvas.text_width(&fragment.text, font, size);
    }
}

/// Distance from the top of a line box to the baseline, centering the
/// Helvetica cap height in `line_height`
pub fn baseline_offset(line_height: f32, font_size: f32) -> f32 {
    let cap_height = crate::geometry::pt_to_mm(font_size * 0.718);
    (line_height + cap_height) / 2.0
}

/// A canvas that records drawing operations per page
#[derive(Debug, Clone)]
pub struct PageRecorder<M: TextMeasure = Helvetica> {
    geometry: PageGeometry,
    measure: M,
    pages: Vec<Vec<DrawOp>>,
    current: usize,
}

impl PageRecorder<Helvetica> {
    pub fn new(geometry: PageGeometry) -> Self {
        Self::with_measure(geometry, Helvetica)
    }
}

impl<M: TextMeasure> PageRecorder<M> {
    pub fn with_measure(geometry: PageGeometry, measure: M) -> Self {
        Self {
            geometry,
            measure,
            pages: Vec::new(),
            current: 0,
        }
    }

    /// Recorded operations, one list per page
    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    /// All text drawn on `page`, joined by newlines
    pub fn page_text(&self, page: usize) -> String {
        self.pages
            .get(page)
            .map(|ops| {
                ops.iter()
                    .filter_map(|op| match op {
                        DrawOp::Text { text, .. } => Some(text.as_str()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }

    fn push(&mut self, op: DrawOp) {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
            self.current = 0;
        }
        self.pages[self.current].push(op);
    }
}

impl<M: TextMeasure> Canvas for PageRecorder<M> {
    fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    fn measure(&self) -> &dyn TextMeasure {
        &self.measure
    }

    fn begin_page(&mut self) {
        self.pages.push(Vec::new());
        self.current = self.pages.len() - 1;
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn select_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        } else {
            tracing::warn!(
                "Ignoring selection of page {} ({} pages recorded)",
                index,
                self.pages.len()
            );
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        self.push(DrawOp::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: Font, size: f32, color: Color) {
        if text.is_empty() {
            return;
        }
        self.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            font,
            size,
            color,
        });
    }
}
