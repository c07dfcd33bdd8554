//! The bilingual app audit report
//!
//! One document with German and English side by side: cover, table of
//! contents, executive summary with status counts, one feature table per
//! category, missing features, recommendations and the technology stack.

use reportdok_model::{AuditDataset, Lang, Status};

use super::{bilingual_block, finish_document, long_date, pt, short_date, RenderOptions, RenderedDocument};
use crate::backend::DocumentInfo;
use crate::canvas::{baseline_offset, Canvas, PageRecorder};
use crate::color::{Color, Theme};
use crate::error::Result;
use crate::flow::{Flow, HeadingStyle, ParagraphStyle};
use crate::geometry::{Margins, PageGeometry, Rect};
use crate::metrics::Font;
use crate::table::{Cell, Column, Row, Table, TableStyle};

const BRAND: Color = Color::rgb(0x7c, 0x3a, 0xed);
const BRAND_LIGHT: Color = Color::rgb(0xed, 0xe9, 0xfe);
const BRAND_DARK: Color = Color::rgb(0x5b, 0x21, 0xb6);
const BRAND_PALE: Color = Color::rgb(0xc4, 0xb5, 0xfd);
const GREEN: Color = Color::rgb(0x10, 0xb9, 0x81);
const GREEN_BG: Color = Color::rgb(0xec, 0xfd, 0xf5);
const RED: Color = Color::rgb(0xef, 0x44, 0x44);
const RED_BG: Color = Color::rgb(0xfe, 0xf2, 0xf2);
const AMBER: Color = Color::rgb(0xf5, 0x9e, 0x0b);
const AMBER_BG: Color = Color::rgb(0xff, 0xfb, 0xeb);
const GRAY_50: Color = Color::rgb(0xf9, 0xfa, 0xfb);
const GRAY_200: Color = Color::rgb(0xe5, 0xe7, 0xeb);
const GRAY_500: Color = Color::rgb(0x6b, 0x72, 0x80);
const GRAY_700: Color = Color::rgb(0x37, 0x41, 0x51);
const GRAY_900: Color = Color::rgb(0x11, 0x18, 0x27);

const THEME: Theme = Theme {
    brand: BRAND,
    muted: GRAY_500,
    success: GREEN,
    warning: AMBER,
    danger: RED,
    light: BRAND_PALE,
};

/// Text, fill and role of a status cell
fn status_look(status: Status) -> (&'static str, Color) {
    match status {
        Status::Implemented => ("success", GREEN_BG),
        Status::Partial => ("warning", AMBER_BG),
        Status::Missing => ("danger", RED_BG),
    }
}

struct Styles {
    title: ParagraphStyle,
    subtitle: ParagraphStyle,
    h1: HeadingStyle,
    h2: HeadingStyle,
    body: ParagraphStyle,
    body_small: ParagraphStyle,
    toc_item: ParagraphStyle,
}

impl Styles {
    fn new() -> Self {
        let heading = |size: f32, leading: f32, color: Color, before: f32, after: f32| HeadingStyle {
            text: ParagraphStyle::new(size, pt(leading), color)
                .bold()
                .spacing(pt(before), pt(after)),
            rule: None,
            keep_with_next: 25.0,
        };
        Self {
            title: ParagraphStyle::new(28.0, pt(34.0), Color::WHITE)
                .bold()
                .spacing(0.0, pt(6.0)),
            subtitle: ParagraphStyle::new(13.0, pt(18.0), BRAND_PALE),
            h1: heading(20.0, 26.0, BRAND_DARK, 18.0, 10.0),
            h2: heading(14.0, 19.0, GRAY_900, 14.0, 6.0),
            body: ParagraphStyle::new(10.0, pt(15.0), GRAY_700).spacing(0.0, pt(6.0)),
            body_small: ParagraphStyle::new(9.0, pt(13.0), GRAY_500).spacing(0.0, pt(4.0)),
            toc_item: ParagraphStyle::new(11.0, pt(22.0), GRAY_700).indent(pt(12.0)),
        }
    }
}

/// The audit report for one dataset
pub struct AuditReport<'a> {
    data: &'a AuditDataset,
    options: &'a RenderOptions,
}

impl<'a> AuditReport<'a> {
    pub fn new(data: &'a AuditDataset, options: &'a RenderOptions) -> Self {
        Self { data, options }
    }

    pub fn geometry() -> PageGeometry {
        PageGeometry::a4(Margins::new(20.0, 20.0, 25.0, 20.0))
    }

    /// Lay out every page without serializing
    pub fn layout(&self) -> Result<PageRecorder> {
        let styles = Styles::new();
        let mut flow = Flow::new(PageRecorder::new(Self::geometry()), THEME);

        self.cover(&mut flow, &styles);
        flow.page_break();
        self.contents(&mut flow, &styles);
        flow.page_break();
        self.summary(&mut flow, &styles);
        flow.page_break();
        self.features(&mut flow, &styles)?;
        flow.page_break();
        self.missing(&mut flow, &styles)?;
        flow.page_break();
        self.recommendations(&mut flow, &styles);
        flow.page_break();
        self.stack(&mut flow, &styles)?;

        let footer = format!(
            "{} Audit Report  •  {}  •  Seite / Page",
            self.data.product,
            short_date(self.options.date)
        );
        Ok(flow.finish(|canvas, page| {
            if page.index == 0 {
                return;
            }
            let geometry = *canvas.geometry();
            canvas.fill_rect(
                Rect::new(0.0, geometry.height - 18.0, geometry.width, 18.0),
                GRAY_200,
            );
            canvas.draw_text_centered(
                geometry.width / 2.0,
                geometry.height - 10.0,
                &format!("{} {}", footer, page.number()),
                Font::Regular,
                7.0,
                GRAY_500,
            );
        }))
    }

    /// Lay out and serialize the report
    pub fn render(&self) -> Result<RenderedDocument> {
        let recorder = self.layout()?;
        let info = DocumentInfo {
            title: format!("{} - {}", self.data.product, self.data.title.bilingual()),
            author: self.data.product.clone(),
            subject: self.data.prepared_for.bilingual(),
            created: Some(self.options.date),
        };
        let document = finish_document(&recorder, &info)?;
        tracing::info!("Audit report: {} pages", document.pages);
        Ok(document)
    }

    fn cover(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) {
        let geometry = Self::geometry();
        let band = geometry.height * 0.45;
        let canvas = flow.canvas_mut();
        canvas.fill_rect(Rect::new(0.0, 0.0, geometry.width, band), BRAND);
        canvas.fill_rect(Rect::new(0.0, band - pt(3.0), geometry.width, pt(3.0)), BRAND_DARK);

        flow.set_y(geometry.content_top() + 100.0);
        flow.paragraph(&self.data.product, &styles.title);
        flow.paragraph(&self.data.title.bilingual(), &styles.subtitle);
        flow.spacer(8.0);
        let date = format!(
            "{} / {}",
            long_date(self.options.date, Lang::De),
            long_date(self.options.date, Lang::En)
        );
        flow.paragraph(&date, &ParagraphStyle::new(10.0, pt(18.0), BRAND_PALE));
        flow.spacer(4.0);
        flow.paragraph(
            &self.data.prepared_for.bilingual(),
            &ParagraphStyle::new(9.0, pt(18.0), BRAND_PALE),
        );
    }

    fn contents(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) {
        flow.heading("Inhaltsverzeichnis / Table of Contents", &styles.h1);
        flow.spacer(4.0);

        let mut items = vec![
            "Zusammenfassung / Executive Summary".to_string(),
            "Feature-Übersicht / Feature Overview".to_string(),
        ];
        items.extend(self.data.categories.iter().map(|c| c.title.bilingual()));
        items.push("Fehlende Features / Missing Features".to_string());
        items.push("Empfehlungen / Recommendations".to_string());
        items.push("Tech-Stack / Technology Stack".to_string());

        for (i, item) in items.iter().enumerate() {
            flow.paragraph(&format!("[brand]#{}.#  {}", i + 1, item), &styles.toc_item);
        }
    }

    fn summary(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) {
        let counts = self.data.summary();
        let pct = counts.percent_implemented();

        flow.heading("Zusammenfassung / Executive Summary", &styles.h1);
        flow.paragraph("*DE:*", &styles.body);
        flow.paragraph(&self.data.description.de, &styles.body);
        flow.paragraph(
            &format!(
                "Von *{} geprüften Features* sind [success]#*{} vollständig implementiert*#, \
                 [warning]#*{} teilweise vorhanden*# und [danger]#*{} noch nicht umgesetzt*#. \
                 Das ergibt einen *Umsetzungsgrad von {}%*.",
                counts.total, counts.implemented, counts.partial, counts.missing, pct
            ),
            &styles.body,
        );

        flow.spacer(4.0);
        flow.paragraph("*EN:*", &styles.body);
        flow.paragraph(&self.data.description.en, &styles.body);
        flow.paragraph(
            &format!(
                "Out of *{} audited features*, [success]#*{} are fully implemented*#, \
                 [warning]#*{} are partially available*#, and [danger]#*{} are not yet built*#. \
                 This gives an *implementation rate of {}%*.",
                counts.total, counts.implemented, counts.partial, counts.missing, pct
            ),
            &styles.body,
        );

        flow.spacer(6.0);
        let cells = [
            (counts.implemented.to_string(), GREEN, "Implementiert", "Implemented"),
            (counts.partial.to_string(), AMBER, "Teilweise", "Partial"),
            (counts.missing.to_string(), RED, "Fehlt", "Missing"),
            (format!("{}%", pct), BRAND, "Fortschritt", "Progress"),
        ];
        stats_box(flow, &cells);
    }

    fn features(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) -> Result<()> {
        flow.heading("Feature-Übersicht / Feature Overview", &styles.h1);
        flow.paragraph(
            "Im Folgenden werden alle Features nach Kategorie aufgelistet. \
             Jedes Feature wird bewertet und auf Deutsch sowie Englisch beschrieben.",
            &styles.body,
        );
        flow.paragraph(
            "_Below, all features are listed by category. \
             Each feature is rated and described in German and English._",
            &styles.body_small,
        );
        flow.spacer(4.0);

        for category in &self.data.categories {
            flow.heading(&bilingual_block(&category.title), &styles.h2);

            let mut table = Table::new(
                category.title.en.clone(),
                vec![
                    Column::new("Feature", 48.0),
                    Column::new("Status", 28.0),
                    Column::new("Details (DE / EN)", 78.0),
                ],
            )
            .with_style(self.table_style(8.0, BRAND_LIGHT, BRAND))
            .kept_together();

            for entry in &category.entries {
                let (role, fill) = status_look(entry.status);
                let status = format!(
                    "[{role}]#*{}*\n_{}_#",
                    entry.status.label(Lang::De),
                    entry.status.label(Lang::En)
                );
                table.push_row(Row {
                    cells: vec![
                        Cell::new(bilingual_block(&entry.name)),
                        Cell::new(status).with_fill(fill),
                        Cell::new(bilingual_block(&entry.details)),
                    ],
                });
            }
            flow.table(&table)?;
            flow.spacer(6.0);
        }
        Ok(())
    }

    fn missing(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) -> Result<()> {
        flow.heading("Fehlende Features / Missing Features", &styles.h1);
        flow.paragraph(
            "Die folgenden Features fehlen noch und sollten für einen vollwertigen \
             Produktlaunch priorisiert werden:",
            &styles.body,
        );
        flow.paragraph(
            "_The following features are still missing and should be prioritized \
             for a full product launch:_",
            &styles.body_small,
        );
        flow.spacer(3.0);

        let mut table = Table::new(
            "Missing features",
            vec![
                Column::new("#", 10.0),
                Column::new("Feature", 70.0),
                Column::new("Kategorie / Category", 74.0),
            ],
        )
        .with_style(self.table_style(8.0, RED_BG, RED));

        for (i, (entry, category)) in self.data.missing().enumerate() {
            table.push_row(Row::new([
                (i + 1).to_string(),
                bilingual_block(&entry.name),
                bilingual_block(&category.title),
            ]));
        }
        flow.table(&table)?;
        Ok(())
    }

    fn recommendations(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) {
        flow.heading("Empfehlungen / Recommendations", &styles.h1);
        let detail = styles.body_small.clone().indent(5.0);

        for group in &self.data.recommendations {
            flow.heading(&format!("*{}*", group.priority.bilingual()), &styles.h2);
            for item in &group.items {
                let name = if item.name.is_shared() {
                    format!("[brand]#»# *{}*", item.name.de)
                } else {
                    format!("[brand]#»# *{}* / _{}_", item.name.de, item.name.en)
                };
                flow.paragraph(&name, &styles.body);
                flow.paragraph(&bilingual_block(&item.description), &detail);
            }
            flow.spacer(4.0);
        }
    }

    fn stack(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) -> Result<()> {
        flow.heading("Tech-Stack / Technology Stack", &styles.h1);
        let mut table = Table::new(
            "Technology stack",
            vec![
                Column::new("Komponente / Component", 50.0),
                Column::new("Technologie / Technology", 104.0),
            ],
        )
        .with_style(TableStyle {
            font_size: 9.0,
            line_height: pt(13.0),
            padding: pt(6.0),
            stripe: None,
            ..self.table_style(9.0, BRAND_LIGHT, BRAND)
        });
        for item in &self.data.stack {
            table.push_row(Row::new([item.component.bilingual(), item.technology.clone()]));
        }
        flow.table(&table)?;
        Ok(())
    }

    fn table_style(&self, font_size: f32, header_fill: Color, rule: Color) -> TableStyle {
        TableStyle {
            font_size,
            line_height: pt(font_size + 3.5),
            padding: pt(5.0),
            text_color: GRAY_700,
            header_fill,
            header_text: GRAY_900,
            header_height: pt(font_size + 3.5) + 2.0,
            stripe: self.options.stripe_rows.then_some(GRAY_50),
            stripe_first: false,
            grid: Some(GRAY_200),
            header_rule: Some(rule),
            repeat_header: self.options.repeat_table_headers,
            ..TableStyle::default()
        }
    }
}

/// Four colored figures with two-line captions in a shaded box
fn stats_box(flow: &mut Flow<PageRecorder>, cells: &[(String, Color, &str, &str)]) {
    const WIDTH: f32 = 38.0;
    const FIGURE_ROW: f32 = 14.0;
    const CAPTION_ROW: f32 = 12.0;

    flow.ensure_space(FIGURE_ROW + CAPTION_ROW);
    let x = flow.left();
    let y = flow.y();
    let total = WIDTH * cells.len() as f32;
    let canvas = flow.canvas_mut();

    canvas.fill_rect(Rect::new(x, y, total, FIGURE_ROW + CAPTION_ROW), GRAY_50);
    let bottom = y + FIGURE_ROW + CAPTION_ROW;
    for (from, to) in [
        ((x, y), (x + total, y)),
        ((x, bottom), (x + total, bottom)),
        ((x, y), (x, bottom)),
        ((x + total, y), (x + total, bottom)),
        ((x, y + FIGURE_ROW), (x + total, y + FIGURE_ROW)),
    ] {
        canvas.stroke_line(from, to, 0.18, GRAY_200);
    }

    for (i, (figure, color, de, en)) in cells.iter().enumerate() {
        let center = x + WIDTH * (i as f32 + 0.5);
        canvas.draw_text_centered(
            center,
            y + baseline_offset(FIGURE_ROW, 20.0),
            figure,
            Font::Bold,
            20.0,
            *color,
        );
        let caption_top = y + FIGURE_ROW + 2.0;
        canvas.draw_text_centered(center, caption_top + 3.5, de, Font::Regular, 8.0, GRAY_700);
        canvas.draw_text_centered(center, caption_top + 7.5, en, Font::Regular, 8.0, GRAY_700);
    }
    flow.set_y(bottom);
}
