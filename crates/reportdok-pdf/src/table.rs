//! Paginating table renderer
//!
//! Row heights come from wrapped line counts: a row is as tall as its
//! tallest cell, `lines * line_height`. Rows are placed top to bottom and
//! a page break is taken before any row that would extend past the bottom
//! of the content area. Rows are never split. A row that is taller than a
//! whole page is placed anyway (and overflows) when it is the first row on
//! a fresh page, so tables never produce blank pages.
//!
//! Placement is computed by [`paginate`] without touching a canvas, which
//! keeps break positions independent of the rendering backend.

use crate::canvas::{baseline_offset, draw_line, Canvas};
use crate::color::{Color, Theme};
use crate::error::{PdfError, Result};
use crate::geometry::Rect;
use crate::markup::parse_markup;
use crate::metrics::TextMeasure;
use crate::wrap::{wrap, Line};

/// Tolerance for floating point comparisons (mm)
const EPSILON: f32 = 1e-3;

/// Horizontal alignment of cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// A table column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Header text (markup)
    pub header: String,
    /// Width in millimetres
    pub width: f32,
    pub align: Align,
}

impl Column {
    pub fn new(header: impl Into<String>, width: f32) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Left,
        }
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// Cell text (markup)
    pub text: String,
    /// Background overriding the row stripe
    pub fill: Option<Color>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new<C: Into<Cell>>(cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }
}

/// Visual parameters of a table
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Text size in points
    pub font_size: f32,
    /// Height of one text line in millimetres
    pub line_height: f32,
    /// Horizontal cell padding in millimetres
    pub padding: f32,
    pub text_color: Color,
    pub header_fill: Color,
    pub header_text: Color,
    pub header_align: Align,
    /// Minimum header height; the header grows with its line count
    pub header_height: f32,
    /// Background of striped rows, `None` disables striping
    pub stripe: Option<Color>,
    /// Whether striping starts at the first data row
    pub stripe_first: bool,
    /// Cell border color
    pub grid: Option<Color>,
    /// Heavier rule below the header
    pub header_rule: Option<Color>,
    /// Repeat the header row on every page the table spans
    pub repeat_header: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_size: 9.0,
            line_height: 5.0,
            padding: 1.5,
            text_color: Color::BLACK,
            header_fill: Color::rgb(0xe5, 0xe7, 0xeb),
            header_text: Color::BLACK,
            header_align: Align::Left,
            header_height: 0.0,
            stripe: None,
            stripe_first: false,
            grid: None,
            header_rule: None,
            repeat_header: true,
        }
    }
}

/// Where one row landed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlacement {
    /// Data row index, `None` for a header row
    pub row: Option<usize>,
    /// Page offset from the page the table started on
    pub page: usize,
    /// Top edge of the row
    pub y: f32,
    pub height: f32,
}

/// Result of laying out a table
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Page index the table started on (0 for a detached layout)
    pub start_page: usize,
    /// Every placed row in drawing order, headers included
    pub placements: Vec<RowPlacement>,
    /// Number of page breaks taken inside the table
    pub page_breaks: usize,
    /// Data rows taller than an empty page, placed anyway past the bottom
    pub overflowing: Vec<usize>,
    /// Cursor position below the last row
    pub end_y: f32,
}

impl TableLayout {
    /// Placements of data rows only
    pub fn rows(&self) -> impl Iterator<Item = &RowPlacement> {
        self.placements.iter().filter(|p| p.row.is_some())
    }

    /// Absolute index of the page the table ended on
    pub fn end_page(&self) -> usize {
        self.start_page + self.page_breaks
    }
}

/// Vertical extent available on every page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub top: f32,
    pub bottom: f32,
}

impl Area {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Place rows of the given heights, breaking pages where needed.
///
/// `header` is the header row height, if the table has one. The header is
/// placed first and, when `repeat_header` is set, again at the top of every
/// continuation page. A break is taken before a row when
/// `y + height > area.bottom`, unless the row would be the first row on a
/// fresh page. A repeated header is left out on a page where it would push
/// the following row past the bottom. Rows that still do not fit are
/// listed in [`TableLayout::overflowing`].
pub fn paginate(
    heights: &[f32],
    header: Option<f32>,
    start_y: f32,
    area: Area,
    repeat_header: bool,
) -> TableLayout {
    let mut placements = Vec::with_capacity(heights.len() + 1);
    let mut overflowing = Vec::new();
    let mut page = 0;
    let mut page_breaks = 0;
    let mut y = start_y;
    let mut fresh = start_y <= area.top + EPSILON;

    if let Some(header_height) = header {
        // Do not strand a header at the bottom of a page
        let first = heights.first().copied().unwrap_or(0.0);
        if !fresh && y + header_height + first > area.bottom + EPSILON {
            page += 1;
            page_breaks += 1;
            y = area.top;
            fresh = true;
        }
        placements.push(RowPlacement {
            row: None,
            page,
            y,
            height: header_height,
        });
        y += header_height;
    }

    for (index, &height) in heights.iter().enumerate() {
        if y + height > area.bottom + EPSILON {
            if !fresh {
                page += 1;
                page_breaks += 1;
                y = area.top;
                tracing::debug!("Page break before row {}", index);
                if let (Some(header_height), true) = (header, repeat_header) {
                    // A row that fits an empty page never overflows because
                    // of the repeated header; the header is skipped instead
                    if area.top + header_height + height <= area.bottom + EPSILON {
                        placements.push(RowPlacement {
                            row: None,
                            page,
                            y,
                            height: header_height,
                        });
                        y += header_height;
                    } else {
                        tracing::debug!("Header not repeated above row {}", index);
                    }
                }
            }
            if y + height > area.bottom + EPSILON {
                overflowing.push(index);
            }
        }
        placements.push(RowPlacement {
            row: Some(index),
            page,
            y,
            height,
        });
        y += height;
        fresh = false;
    }

    TableLayout {
        start_page: 0,
        placements,
        page_breaks,
        overflowing,
        end_y: y,
    }
}

/// A table ready to be laid out and drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name used in error messages
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub style: TableStyle,
    pub show_header: bool,
    /// Move the whole table to a new page if it fits there but not here
    pub keep_together: bool,
}

/// Wrapped lines of every cell in a row
struct WrappedRow {
    cells: Vec<Vec<Line>>,
    height: f32,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
            style: TableStyle::default(),
            show_header: true,
            keep_together: false,
        }
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.show_header = false;
        self
    }

    pub fn kept_together(mut self) -> Self {
        self.keep_together = true;
        self
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Total width of all columns
    pub fn width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Check columns and rows before anything is drawn
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(PdfError::layout(&self.name, "table has no columns"));
        }
        if !(self.style.line_height > 0.0) {
            return Err(PdfError::layout(
                &self.name,
                format!("line height must be positive, got {}", self.style.line_height),
            ));
        }
        for (i, column) in self.columns.iter().enumerate() {
            if !(column.width > 0.0) {
                return Err(PdfError::layout(
                    format!("{} column {}", self.name, i),
                    format!("width must be positive, got {}", column.width),
                ));
            }
            if column.width <= 2.0 * self.style.padding {
                return Err(PdfError::layout(
                    format!("{} column {}", self.name, i),
                    format!(
                        "width {} leaves no room inside padding {}",
                        column.width, self.style.padding
                    ),
                ));
            }
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.cells.len() != self.columns.len() {
                return Err(PdfError::layout(
                    format!("{} row {}", self.name, i),
                    format!(
                        "expected {} cells, found {}",
                        self.columns.len(),
                        row.cells.len()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Heights of the header (if shown) and of every data row
    pub fn row_heights(&self, measure: &dyn TextMeasure) -> Result<(Option<f32>, Vec<f32>)> {
        self.validate()?;
        let (header, rows) = self.wrap_rows(measure);
        Ok((
            header.map(|h| h.height),
            rows.iter().map(|r| r.height).collect(),
        ))
    }

    /// Height of the whole table when drawn without breaks
    pub fn total_height(&self, measure: &dyn TextMeasure) -> Result<f32> {
        let (header, rows) = self.row_heights(measure)?;
        Ok(header.unwrap_or(0.0) + rows.iter().sum::<f32>())
    }

    /// Lay out the table without drawing
    pub fn layout(&self, measure: &dyn TextMeasure, start_y: f32, area: Area) -> Result<TableLayout> {
        let (header, rows) = self.row_heights(measure)?;
        Ok(paginate(
            &rows,
            header,
            start_y,
            area,
            self.style.repeat_header,
        ))
    }

    /// Lay out and draw the table at (`x`, `start_y`) on the current page,
    /// continuing on new pages as needed
    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        theme: &Theme,
        x: f32,
        start_y: f32,
        page_bottom: f32,
    ) -> Result<TableLayout> {
        self.validate()?;
        let (header, rows) = self.wrap_rows(canvas.measure());
        let heights: Vec<f32> = rows.iter().map(|r| r.height).collect();
        let area = Area {
            top: canvas.geometry().content_top(),
            bottom: page_bottom,
        };
        let mut layout = paginate(
            &heights,
            header.as_ref().map(|h| h.height),
            start_y,
            area,
            self.style.repeat_header,
        );

        for &index in &layout.overflowing {
            tracing::warn!(
                "Table '{}': row {} ({:.1}mm) does not fit on an empty page ({:.1}mm); it will overflow",
                self.name,
                index,
                heights[index],
                area.height()
            );
        }

        if canvas.page_count() == 0 {
            canvas.begin_page();
        }
        layout.start_page = canvas.current_page();

        for placement in &layout.placements {
            let page = layout.start_page + placement.page;
            while canvas.page_count() <= page {
                canvas.begin_page();
            }
            if canvas.current_page() != page {
                canvas.select_page(page);
            }
            match placement.row {
                None => {
                    if let Some(header) = &header {
                        self.draw_header(canvas, theme, header, x, placement.y);
                    }
                }
                Some(index) => {
                    self.draw_row(canvas, theme, index, &rows[index], x, placement.y);
                }
            }
        }

        tracing::debug!(
            "Table '{}': {} rows, {} page breaks",
            self.name,
            self.rows.len(),
            layout.page_breaks
        );
        Ok(layout)
    }

    fn wrap_rows(&self, measure: &dyn TextMeasure) -> (Option<WrappedRow>, Vec<WrappedRow>) {
        let style = &self.style;
        let wrap_cell = |text: &str, width: f32, bold: bool| {
            let mut spans = parse_markup(text);
            if bold {
                for span in &mut spans {
                    span.style.bold = true;
                }
            }
            wrap(&spans, width - 2.0 * style.padding, style.font_size, measure)
        };
        let height_of = |cells: &[Vec<Line>]| {
            let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
            lines as f32 * style.line_height
        };

        let header = self.show_header.then(|| {
            let cells: Vec<Vec<Line>> = self
                .columns
                .iter()
                .map(|c| wrap_cell(&c.header, c.width, true))
                .collect();
            let height = height_of(&cells).max(style.header_height);
            WrappedRow { cells, height }
        });

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let cells: Vec<Vec<Line>> = row
                    .cells
                    .iter()
                    .zip(&self.columns)
                    .map(|(cell, column)| wrap_cell(&cell.text, column.width, false))
                    .collect();
                let height = height_of(&cells);
                WrappedRow { cells, height }
            })
            .collect();

        (header, rows)
    }

    fn draw_header(
        &self,
        canvas: &mut dyn Canvas,
        theme: &Theme,
        header: &WrappedRow,
        x: f32,
        y: f32,
    ) {
        let style = &self.style;
        canvas.fill_rect(Rect::new(x, y, self.width(), header.height), style.header_fill);

        let text_height = header.cells.iter().map(Vec::len).max().unwrap_or(1) as f32
            * style.line_height;
        let top = y + (header.height - text_height) / 2.0;
        let mut cell_x = x;
        for (column, lines) in self.columns.iter().zip(&header.cells) {
            self.draw_cell_text(
                canvas,
                theme,
                lines,
                cell_x,
                top,
                column.width,
                style.header_align,
                style.header_text,
            );
            cell_x += column.width;
        }

        self.draw_grid(canvas, y, x, header.height);
        if let Some(rule) = style.header_rule {
            let bottom = y + header.height;
            canvas.stroke_line((x, bottom), (x + self.width(), bottom), 0.35, rule);
        }
    }

    fn draw_row(
        &self,
        canvas: &mut dyn Canvas,
        theme: &Theme,
        index: usize,
        row: &WrappedRow,
        x: f32,
        y: f32,
    ) {
        let style = &self.style;
        let striped = (index % 2 == 0) == style.stripe_first;
        let stripe = style.stripe.filter(|_| striped);

        let mut cell_x = x;
        for ((cell, column), lines) in self.rows[index]
            .cells
            .iter()
            .zip(&self.columns)
            .zip(&row.cells)
        {
            if let Some(fill) = cell.fill.or(stripe) {
                canvas.fill_rect(Rect::new(cell_x, y, column.width, row.height), fill);
            }
            self.draw_cell_text(
                canvas,
                theme,
                lines,
                cell_x,
                y,
                column.width,
                column.align,
                style.text_color,
            );
            cell_x += column.width;
        }
        self.draw_grid(canvas, y, x, row.height);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell_text(
        &self,
        canvas: &mut dyn Canvas,
        theme: &Theme,
        lines: &[Line],
        x: f32,
        top: f32,
        width: f32,
        align: Align,
        color: Color,
    ) {
        let style = &self.style;
        let offset = baseline_offset(style.line_height, style.font_size);
        for (k, line) in lines.iter().enumerate() {
            let line_x = match align {
                Align::Left => x + style.padding,
                Align::Center => x + (width - line.width) / 2.0,
            };
            let baseline = top + k as f32 * style.line_height + offset;
            draw_line(canvas, line, line_x, baseline, style.font_size, theme, color);
        }
    }

    fn draw_grid(&self, canvas: &mut dyn Canvas, y: f32, x: f32, height: f32) {
        let Some(grid) = self.style.grid else {
            return;
        };
        let right = x + self.width();
        let bottom = y + height;
        canvas.stroke_line((x, y), (right, y), 0.1, grid);
        canvas.stroke_line((x, bottom), (right, bottom), 0.1, grid);
        let mut edge = x;
        canvas.stroke_line((edge, y), (edge, bottom), 0.1, grid);
        for column in &self.columns {
            edge += column.width;
            canvas.stroke_line((edge, y), (edge, bottom), 0.1, grid);
        }
    }
}

/// Draw `table` at (`start_x`, `start_y`), breaking pages at `page_bottom`
pub fn render_table(
    canvas: &mut dyn Canvas,
    table: &Table,
    theme: &Theme,
    start_x: f32,
    start_y: f32,
    page_bottom: f32,
) -> Result<TableLayout> {
    table.render(canvas, theme, start_x, start_y, page_bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PageRecorder;
    use crate::geometry::{Margins, PageGeometry};
    use crate::metrics::Helvetica;

    const AREA: Area = Area {
        top: 20.0,
        bottom: 272.0,
    };

    fn pages(layout: &TableLayout) -> Vec<(Option<usize>, usize)> {
        layout.placements.iter().map(|p| (p.row, p.page)).collect()
    }

    fn geometry() -> PageGeometry {
        PageGeometry::a4(Margins::new(20.0, 20.0, 25.0, 20.0))
    }

    fn sample_table(rows: usize) -> Table {
        let mut table = Table::new(
            "Stack",
            vec![Column::new("Component", 50.0), Column::new("Technology", 104.0)],
        );
        for i in 0..rows {
            table.push_row(Row::new([format!("Item {i}"), "Next.js 16, React 19".to_string()]));
        }
        table
    }

    #[test]
    fn test_break_before_overflowing_row() {
        let layout = paginate(&[10.0, 12.0, 8.0], None, AREA.bottom - 15.0, AREA, false);
        assert_eq!(
            pages(&layout),
            vec![(Some(0), 0), (Some(1), 1), (Some(2), 1)]
        );
        assert_eq!(layout.page_breaks, 1);
        assert_eq!(layout.placements[1].y, AREA.top);
        assert_eq!(layout.placements[2].y, AREA.top + 12.0);
        assert_eq!(layout.end_y, AREA.top + 20.0);
    }

    #[test]
    fn test_exact_fit_does_not_break() {
        let layout = paginate(&[10.0, 5.0], None, AREA.bottom - 15.0, AREA, false);
        assert_eq!(layout.page_breaks, 0);
        assert_eq!(layout.end_y, AREA.bottom);
    }

    #[test]
    fn test_zero_rows_places_only_header() {
        let layout = paginate(&[], Some(7.0), 100.0, AREA, true);
        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.placements[0].row, None);
        assert_eq!(layout.page_breaks, 0);
        assert_eq!(layout.end_y, 107.0);
    }

    #[test]
    fn test_header_repeats_on_continuation_pages() {
        let layout = paginate(&[100.0, 100.0, 100.0], Some(7.0), AREA.top, AREA, true);
        assert_eq!(
            pages(&layout),
            vec![
                (None, 0),
                (Some(0), 0),
                (Some(1), 0),
                (None, 1),
                (Some(2), 1)
            ]
        );
        assert_eq!(layout.placements[4].y, AREA.top + 7.0);
    }

    #[test]
    fn test_header_not_repeated_when_disabled() {
        let layout = paginate(&[100.0, 100.0, 100.0], Some(7.0), AREA.top, AREA, false);
        assert_eq!(layout.placements.iter().filter(|p| p.row.is_none()).count(), 1);
        assert_eq!(layout.placements[3].y, AREA.top);
    }

    #[test]
    fn test_header_moves_with_first_row() {
        let layout = paginate(&[10.0], Some(7.0), AREA.bottom - 12.0, AREA, true);
        assert_eq!(pages(&layout), vec![(None, 1), (Some(0), 1)]);
        assert_eq!(layout.page_breaks, 1);
    }

    #[test]
    fn test_oversize_row_on_fresh_page_overflows() {
        let layout = paginate(&[300.0], None, AREA.top, AREA, true);
        assert_eq!(layout.page_breaks, 0);
        assert!(layout.end_y > AREA.bottom);
        assert_eq!(layout.overflowing, vec![0]);

        let layout = paginate(&[10.0, 300.0, 10.0], None, AREA.top, AREA, true);
        assert_eq!(pages(&layout), vec![(Some(0), 0), (Some(1), 1), (Some(2), 2)]);
        assert_eq!(layout.page_breaks, 2);
    }

    #[test]
    fn test_repeated_header_never_pushes_fitting_row_past_bottom() {
        let layout = paginate(&[10.0, 248.0], Some(7.0), AREA.top, AREA, true);
        assert_eq!(
            pages(&layout),
            vec![(None, 0), (Some(0), 0), (Some(1), 1)]
        );
        let row = layout.placements[2];
        assert_eq!(row.y, AREA.top);
        assert!(row.y + row.height <= AREA.bottom);
        assert!(layout.overflowing.is_empty());
    }

    #[test]
    fn test_overflowing_rows_are_reported() {
        let layout = paginate(&[10.0, 300.0, 10.0], Some(7.0), AREA.top, AREA, true);
        assert_eq!(layout.overflowing, vec![1]);
        assert!(layout.placements.iter().all(|p| p.row.is_some() || p.y + p.height <= AREA.bottom));

        let layout = paginate(&[100.0, 100.0], Some(7.0), AREA.top, AREA, true);
        assert!(layout.overflowing.is_empty());
    }

    #[test]
    fn test_break_count_matches_accumulation() {
        // 3 rows of 80mm fit in 252mm, so 20 rows need 7 pages
        let heights = vec![80.0; 20];
        let layout = paginate(&heights, None, AREA.top, AREA, true);
        assert_eq!(layout.page_breaks, 6);

        let mut expected = 0;
        let mut y = AREA.top;
        for h in &heights {
            if y + h > AREA.bottom {
                expected += 1;
                y = AREA.top;
            }
            y += h;
        }
        assert_eq!(layout.page_breaks, expected);
    }

    #[test]
    fn test_single_line_row_is_one_line_height() {
        let table = sample_table(1);
        let (header, rows) = table.row_heights(&Helvetica).unwrap();
        assert_eq!(rows, vec![table.style.line_height]);
        assert_eq!(header, Some(table.style.line_height));
    }

    #[test]
    fn test_wrapped_and_forced_lines_grow_row() {
        let mut table = sample_table(0);
        table.push_row(Row::new(["Line one\nLine two\nLine three", "x"]));
        let (_, rows) = table.row_heights(&Helvetica).unwrap();
        assert_eq!(rows, vec![3.0 * table.style.line_height]);
    }

    #[test]
    fn test_zero_width_fails_before_drawing() {
        let mut table = sample_table(3);
        table.columns[1].width = 0.0;
        let mut canvas = PageRecorder::new(geometry());
        let err = table
            .render(&mut canvas, &Theme::default(), 20.0, 20.0, 272.0)
            .unwrap_err();
        assert!(matches!(err, PdfError::InvalidLayout { .. }));
        assert!(err.to_string().contains("Stack column 1"));
        assert_eq!(canvas.page_count(), 0);
    }

    #[test]
    fn test_cell_count_mismatch_names_row() {
        let mut table = sample_table(2);
        table.push_row(Row::new(["only one"]));
        let err = table.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid layout in Stack row 2: expected 2 cells, found 1"
        );
    }

    #[test]
    fn test_no_columns_is_invalid() {
        let table = Table::new("Empty", Vec::new());
        assert!(matches!(table.validate(), Err(PdfError::InvalidLayout { .. })));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let table = sample_table(120);
        let first = table.layout(&Helvetica, 40.0, AREA).unwrap();
        let second = table.layout(&Helvetica, 40.0, AREA).unwrap();
        assert_eq!(first, second);
        assert!(first.page_breaks > 0);
    }

    #[test]
    fn test_render_matches_layout_and_repeats_header() {
        let table = sample_table(120);
        let mut canvas = PageRecorder::new(geometry());
        canvas.begin_page();
        let rendered = table
            .render(&mut canvas, &Theme::default(), 20.0, 40.0, AREA.bottom)
            .unwrap();
        let planned = table.layout(&Helvetica, 40.0, AREA).unwrap();
        assert_eq!(rendered.placements, planned.placements);
        assert_eq!(canvas.page_count(), rendered.page_breaks + 1);
        assert_eq!(canvas.current_page(), rendered.end_page());
        for page in 0..canvas.page_count() {
            assert!(
                canvas.page_text(page).starts_with("Component"),
                "page {} lacks the header",
                page
            );
        }
    }

    #[test]
    fn test_render_twice_is_identical() {
        let table = sample_table(60);
        let mut first = PageRecorder::new(geometry());
        let mut second = PageRecorder::new(geometry());
        table
            .render(&mut first, &Theme::default(), 20.0, 20.0, AREA.bottom)
            .unwrap();
        table
            .render(&mut second, &Theme::default(), 20.0, 20.0, AREA.bottom)
            .unwrap();
        assert_eq!(first.pages(), second.pages());
    }
}
