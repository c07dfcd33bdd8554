//! The product and investment report
//!
//! Rendered once per language from the same dataset. Dataset text is
//! printed literally; only the report's own fixed strings carry markup.

use reportdok_model::{Lang, ProductDataset, Severity, Text};

use super::{file_date, finish_document, literal, long_date, short_date, RenderOptions, RenderedDocument};
use crate::backend::DocumentInfo;
use crate::canvas::{Canvas, PageRecorder};
use crate::color::{Color, Theme};
use crate::error::Result;
use crate::flow::{Flow, HeadingRule, HeadingStyle, ParagraphStyle};
use crate::geometry::{Margins, PageGeometry, Rect};
use crate::metrics::Font;
use crate::table::{Align, Cell, Column, Row, Table, TableStyle};

const DARK: Color = Color::rgb(15, 23, 42);
const BLUE: Color = Color::rgb(59, 130, 246);
const GREEN: Color = Color::rgb(34, 197, 94);
const RED: Color = Color::rgb(239, 68, 68);
const AMBER: Color = Color::rgb(245, 158, 11);
const GRAY: Color = Color::rgb(100, 116, 139);
const LIGHT: Color = Color::rgb(241, 245, 249);
const COVER_TEXT: Color = Color::rgb(203, 213, 225);

const THEME: Theme = Theme {
    brand: BLUE,
    muted: GRAY,
    success: GREEN,
    warning: AMBER,
    danger: RED,
    light: LIGHT,
};

/// Marker that starts a bullet line inside a summary paragraph
const BULLET_MARKER: &str = "\n  - ";

/// Section titles in table-of-contents order
const SECTIONS: [(&str, &str); 9] = [
    ("Executive Summary", "Executive Summary"),
    ("Technologie-Stack", "Technology Stack"),
    ("Architektur", "Architecture"),
    ("Funktionsumfang", "Feature Inventory"),
    ("Bekannte Fehler", "Known Bugs"),
    ("Toter Code & unbenutztes Schema", "Dead Code & Unused Schema"),
    ("Fehlende Funktionen", "Missing Features"),
    ("Roadmap", "Roadmap"),
    ("Zusammenfassung", "Conclusion"),
];

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => RED,
        Severity::Medium => AMBER,
        Severity::Low => GRAY,
    }
}

fn severity_role(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "danger",
        Severity::Medium => "warning",
        Severity::Low => "muted",
    }
}

struct Styles {
    section: HeadingStyle,
    subsection: HeadingStyle,
    bug_title: HeadingStyle,
    body: ParagraphStyle,
    bullet: ParagraphStyle,
    location: ParagraphStyle,
}

impl Styles {
    fn new() -> Self {
        Self {
            section: HeadingStyle {
                text: ParagraphStyle::new(16.0, 10.0, DARK).bold(),
                rule: Some(HeadingRule {
                    color: BLUE,
                    width: 0.6,
                    length: Some(70.0),
                    gap: 1.0,
                }),
                keep_with_next: 20.0,
            },
            subsection: HeadingStyle {
                text: ParagraphStyle::new(12.0, 8.0, BLUE).bold().spacing(4.0, 1.0),
                rule: None,
                keep_with_next: 15.0,
            },
            bug_title: HeadingStyle {
                text: ParagraphStyle::new(11.0, 7.0, DARK).bold().spacing(4.0, 1.0),
                rule: None,
                keep_with_next: 18.0,
            },
            body: ParagraphStyle::new(10.0, 5.5, DARK).spacing(0.0, 2.0),
            bullet: ParagraphStyle::new(10.0, 5.5, DARK).indent(4.0),
            location: ParagraphStyle::new(9.0, 5.0, GRAY).italic(),
        }
    }
}

/// The product report in one language
pub struct ProductReport<'a> {
    data: &'a ProductDataset,
    lang: Lang,
    options: &'a RenderOptions,
}

impl<'a> ProductReport<'a> {
    pub fn new(data: &'a ProductDataset, lang: Lang, options: &'a RenderOptions) -> Self {
        Self {
            data,
            lang,
            options,
        }
    }

    pub fn geometry() -> PageGeometry {
        PageGeometry::a4(Margins::new(22.0, 10.0, 25.0, 10.0))
    }

    /// `<Product>_Report_<LANG>_<dd-mm-yyyy>.pdf`
    pub fn file_name(&self) -> String {
        format!(
            "{}_Report_{}_{}.pdf",
            self.data.product,
            self.lang,
            file_date(self.options.date)
        )
    }

    fn t<'t>(&self, text: &'t Text) -> &'t str {
        text.get(self.lang)
    }

    fn pick(&self, de: &'static str, en: &'static str) -> &'static str {
        self.lang.pick(de, en)
    }

    fn section_title(&self, index: usize) -> String {
        let (de, en) = SECTIONS[index];
        format!("{}. {}", index + 1, self.pick(de, en))
    }

    /// Lay out every page without serializing
    pub fn layout(&self) -> Result<PageRecorder> {
        let styles = Styles::new();
        let mut flow = Flow::new(PageRecorder::new(Self::geometry()), THEME);

        self.cover(&mut flow);
        flow.page_break();
        self.summary(&mut flow, &styles);
        flow.page_break();
        self.stack_and_architecture(&mut flow, &styles)?;
        flow.page_break();
        self.features(&mut flow, &styles)?;
        flow.page_break();
        self.bugs(&mut flow, &styles);
        flow.page_break();
        self.dead_code(&mut flow, &styles)?;
        flow.page_break();
        self.missing(&mut flow, &styles)?;
        flow.page_break();
        self.roadmap(&mut flow, &styles);
        flow.page_break();
        self.conclusion(&mut flow, &styles);

        let header = format!("{} - {}", self.data.product, self.t(&self.data.short_title));
        let date = short_date(self.options.date);
        let confidential = self.pick("Vertraulich", "Confidential");
        let page_word = self.pick("Seite", "Page");
        let product = self.data.product.clone();

        Ok(flow.finish(|canvas, page| {
            let geometry = *canvas.geometry();
            let left = geometry.content_left();
            let right = geometry.content_right();
            if page.index > 0 {
                canvas.draw_text(left, 14.0, &header, Font::Bold, 9.0, GRAY);
                canvas.draw_text_right(right, 14.0, &date, Font::Regular, 9.0, GRAY);
                canvas.stroke_line((left, 18.0), (right, 18.0), 0.4, BLUE);
            }
            let footer = format!(
                "{}  |  {}  |  {} {}/{}",
                product,
                confidential,
                page_word,
                page.number(),
                page.total
            );
            canvas.draw_text_centered(
                geometry.width / 2.0,
                geometry.height - 12.0,
                &footer,
                Font::Regular,
                8.0,
                GRAY,
            );
        }))
    }

    /// Lay out and serialize the report
    pub fn render(&self) -> Result<RenderedDocument> {
        let recorder = self.layout()?;
        let info = DocumentInfo {
            title: format!("{} - {}", self.data.product, self.t(&self.data.report_title)),
            author: self.data.product.clone(),
            subject: self.t(&self.data.tagline).to_string(),
            created: Some(self.options.date),
        };
        let document = finish_document(&recorder, &info)?;
        tracing::info!("Product report ({}): {} pages", self.lang, document.pages);
        Ok(document)
    }

    fn cover(&self, flow: &mut Flow<PageRecorder>) {
        let geometry = Self::geometry();
        flow.canvas_mut()
            .fill_rect(Rect::new(0.0, 30.0, geometry.width, 90.0), DARK);

        flow.set_y(38.0);
        let title = ParagraphStyle::new(36.0, 16.0, Color::WHITE).bold().centered();
        flow.paragraph(&literal(&self.data.product), &title);
        flow.spacer(2.0);
        let tagline = ParagraphStyle::new(14.0, 7.0, COVER_TEXT).centered();
        flow.paragraph(&literal(self.t(&self.data.tagline)), &tagline);

        let middle = geometry.width / 2.0;
        let rule_y = flow.y() + 6.0;
        flow.canvas_mut()
            .stroke_line((middle - 45.0, rule_y), (middle + 45.0, rule_y), 0.8, BLUE);
        flow.set_y(rule_y + 6.0);

        let small = ParagraphStyle::new(11.0, 6.0, COVER_TEXT).centered();
        flow.paragraph(&literal(self.t(&self.data.report_title)), &small);
        flow.paragraph(&long_date(self.options.date, self.lang), &small);

        flow.set_y(140.0);
        let toc_title = ParagraphStyle::new(12.0, 8.0, DARK).bold().spacing(0.0, 2.0);
        flow.paragraph(self.pick("Inhaltsverzeichnis", "Table of Contents"), &toc_title);
        let item = ParagraphStyle::new(11.0, 7.0, DARK).indent(5.0);
        for index in 0..SECTIONS.len() {
            flow.paragraph(&literal(&self.section_title(index)), &item);
        }
    }

    fn section(&self, flow: &mut Flow<PageRecorder>, styles: &Styles, index: usize) {
        flow.heading(&literal(&self.section_title(index)), &styles.section);
        flow.spacer(3.0);
    }

    fn bullet(&self, flow: &mut Flow<PageRecorder>, styles: &Styles, text: &str) {
        flow.bullet(&literal(text), &styles.bullet, "•", BLUE);
    }

    /// A paragraph whose `\n  - ` lines become bullets
    fn rich_paragraph(&self, flow: &mut Flow<PageRecorder>, styles: &Styles, text: &str) {
        let mut parts = text.split(BULLET_MARKER);
        let lead = parts.next().unwrap_or_default();
        let items: Vec<&str> = parts.collect();
        if items.is_empty() {
            flow.paragraph(&literal(lead), &styles.body);
            return;
        }
        let mut lead_style = styles.body.clone();
        lead_style.space_after = 1.0;
        flow.paragraph(&format!("*{}*", literal(lead)), &lead_style);
        for item in items {
            self.bullet(flow, styles, item);
        }
        flow.spacer(2.0);
    }

    fn summary(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) {
        self.section(flow, styles, 0);
        for paragraph in &self.data.summary {
            self.rich_paragraph(flow, styles, self.t(paragraph));
        }
    }

    fn stack_and_architecture(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) -> Result<()> {
        self.section(flow, styles, 1);
        let mut stack = Table::new(
            "Technology stack",
            vec![
                Column::new(self.pick("Komponente", "Component"), 50.0),
                Column::new(self.pick("Technologie", "Technology"), 140.0),
            ],
        )
        .with_style(self.table_style());
        for item in &self.data.stack {
            stack.push_row(Row::new([
                literal(self.t(&item.component)),
                literal(&item.technology),
            ]));
        }
        flow.table(&stack)?;
        flow.spacer(8.0);

        self.section(flow, styles, 2);
        let mut architecture = Table::new(
            "Architecture",
            vec![
                Column::new(self.pick("Kennzahl", "Metric"), 70.0),
                Column::new(self.pick("Wert", "Value"), 120.0),
            ],
        )
        .with_style(self.table_style());
        for stat in &self.data.architecture {
            architecture.push_row(Row::new([
                literal(self.t(&stat.metric)),
                literal(self.t(&stat.value)),
            ]));
        }
        flow.table(&architecture)?;
        Ok(())
    }

    fn features(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) -> Result<()> {
        self.section(flow, styles, 3);
        let count = self.data.feature_count();
        let categories = self.data.features.len();
        let intro = match self.lang {
            Lang::De => format!(
                "Insgesamt *{count} verifizierte, funktionierende Features* in {categories} Kategorien:"
            ),
            Lang::En => format!(
                "A total of *{count} verified, working features* across {categories} categories:"
            ),
        };
        flow.paragraph(&intro, &styles.body);

        for category in &self.data.features {
            flow.heading(&literal(self.t(&category.title)), &styles.subsection);
            let mut table = Table::new(
                category.title.en.clone(),
                vec![
                    Column::new(self.pick("Funktion", "Feature"), 70.0),
                    Column::new("Details", 120.0),
                ],
            )
            .with_style(self.table_style());
            for feature in &category.entries {
                table.push_row(Row::new([
                    literal(self.t(&feature.name)),
                    literal(self.t(&feature.note)),
                ]));
            }
            flow.table(&table)?;
            flow.spacer(3.0);
        }
        Ok(())
    }

    fn bugs(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) {
        self.section(flow, styles, 4);
        let n = self.data.bugs.len();
        let intro = match self.lang {
            Lang::De => format!("Es wurden {n} Fehler im Quellcode identifiziert:"),
            Lang::En => format!("{n} bugs were identified in the source code:"),
        };
        flow.paragraph(&intro, &styles.body);

        for (i, bug) in self.data.bugs.iter().enumerate() {
            let title = format!("{}. {}", i + 1, self.t(&bug.title));
            flow.heading(&literal(&title), &styles.bug_title);
            flow.badge(
                bug.severity.label(self.lang),
                severity_color(bug.severity),
                Color::WHITE,
            );
            flow.spacer(1.5);
            let location = format!(
                "{} {}",
                self.pick("Ort:", "Location:"),
                self.t(&bug.location)
            );
            flow.paragraph(&literal(&location), &styles.location);
            flow.paragraph(&literal(self.t(&bug.description)), &styles.body);
        }
    }

    fn dead_code(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) -> Result<()> {
        self.section(flow, styles, 5);
        flow.paragraph(
            self.pick(
                "Die folgenden Elemente existieren im Code, werden aber nicht verwendet:",
                "The following items exist in the code but are never used:",
            ),
            &styles.body,
        );
        let mut table = Table::new(
            "Dead code",
            vec![
                Column::new(self.pick("Element", "Item"), 50.0),
                Column::new(self.pick("Ort", "Location"), 45.0),
                Column::new(self.pick("Grund", "Reason"), 95.0),
            ],
        )
        .with_style(self.table_style());
        for item in &self.data.dead_code {
            table.push_row(Row::new([
                literal(self.t(&item.item)),
                literal(&item.location),
                literal(self.t(&item.reason)),
            ]));
        }
        flow.table(&table)?;
        Ok(())
    }

    fn missing(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) -> Result<()> {
        self.section(flow, styles, 6);
        let n = self.data.missing.len();
        let high = self.data.missing_with_priority(Severity::High);
        let intro = match self.lang {
            Lang::De => format!("{n} Funktionen fehlen noch, davon *{high} mit hoher Priorität*:"),
            Lang::En => format!("{n} features are still missing, *{high} of them high priority*:"),
        };
        flow.paragraph(&intro, &styles.body);

        let mut table = Table::new(
            "Missing features",
            vec![
                Column::new(self.pick("Funktion", "Feature"), 45.0),
                Column::new(self.pick("Priorität", "Priority"), 30.0).centered(),
                Column::new(self.pick("Beschreibung", "Description"), 115.0),
            ],
        )
        .with_style(self.table_style());
        for feature in &self.data.missing {
            let priority = format!(
                "[{}]#*{}*#",
                severity_role(feature.priority),
                feature.priority.label(self.lang)
            );
            table.push_row(Row {
                cells: vec![
                    Cell::new(literal(self.t(&feature.name))),
                    Cell::new(priority),
                    Cell::new(literal(self.t(&feature.description))),
                ],
            });
        }
        flow.table(&table)?;
        Ok(())
    }

    fn roadmap(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) {
        self.section(flow, styles, 7);
        for phase in &self.data.roadmap {
            flow.heading(&literal(self.t(&phase.phase)), &styles.subsection);
            for item in &phase.items {
                self.bullet(flow, styles, self.t(item));
            }
            flow.spacer(2.0);
        }
    }

    fn conclusion(&self, flow: &mut Flow<PageRecorder>, styles: &Styles) {
        self.section(flow, styles, 8);
        for paragraph in &self.data.conclusion {
            self.rich_paragraph(flow, styles, self.t(paragraph));
        }
        if self.data.highlights.is_empty() {
            return;
        }
        flow.heading(
            self.pick("Investitions-Highlights", "Investment Highlights"),
            &styles.subsection,
        );
        for highlight in &self.data.highlights {
            self.bullet(flow, styles, self.t(highlight));
        }
    }

    fn table_style(&self) -> TableStyle {
        TableStyle {
            font_size: 9.0,
            line_height: 5.0,
            padding: 1.5,
            text_color: DARK,
            header_fill: DARK,
            header_text: Color::WHITE,
            header_align: Align::Center,
            header_height: 7.0,
            stripe: self.options.stripe_rows.then_some(LIGHT),
            stripe_first: true,
            grid: Some(Color::rgb(203, 213, 225)),
            header_rule: None,
            repeat_header: self.options.repeat_table_headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reportdok_model::{Bug, Category, RoadmapPhase, WorkingFeature};

    fn dataset(features: usize) -> ProductDataset {
        ProductDataset {
            product: "SchichtPlan".to_string(),
            report_title: Text::new("Produktbericht", "Product Report"),
            short_title: Text::new("Bericht", "Report"),
            tagline: Text::new("Schichtplanung", "Shift scheduling"),
            summary: vec![Text::new(
                "Stärken:\n  - DATEV-Export\n  - ArbZG",
                "Strengths:\n  - DATEV export\n  - ArbZG",
            )],
            stack: Vec::new(),
            architecture: Vec::new(),
            features: vec![Category {
                title: Text::shared("Dashboard"),
                entries: (0..features)
                    .map(|i| WorkingFeature {
                        name: Text::shared(format!("Feature {i}")),
                        note: Text::new("Notiz", "Note"),
                    })
                    .collect(),
            }],
            bugs: vec![Bug {
                title: Text::new("Konflikt", "Conflict"),
                severity: Severity::High,
                location: Text::shared("src/app/api/shifts/[id]/route.ts"),
                description: Text::new("Beschreibung", "Description"),
            }],
            dead_code: Vec::new(),
            missing: Vec::new(),
            roadmap: vec![RoadmapPhase {
                phase: Text::new("Phase 1", "Phase 1"),
                items: vec![Text::new("Middleware", "Middleware")],
            }],
            conclusion: vec![Text::new("Fazit", "Conclusion")],
            highlights: vec![Text::new("Stark", "Strong")],
        }
    }

    fn options() -> RenderOptions {
        RenderOptions::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
    }

    #[test]
    fn test_file_name() {
        let data = dataset(1);
        let options = options();
        assert_eq!(
            ProductReport::new(&data, Lang::De, &options).file_name(),
            "SchichtPlan_Report_DE_17-10-2026.pdf"
        );
        assert_eq!(
            ProductReport::new(&data, Lang::En, &options).file_name(),
            "SchichtPlan_Report_EN_17-10-2026.pdf"
        );
    }

    #[test]
    fn test_footer_counts_pages() {
        let data = dataset(3);
        let options = options();
        let recorder = ProductReport::new(&data, Lang::En, &options).layout().unwrap();
        let total = recorder.page_count();
        assert_eq!(total, 9);
        let last = recorder.page_text(total - 1);
        assert!(
            last.contains(&format!("SchichtPlan  |  Confidential  |  Page {total}/{total}")),
            "{last}"
        );
        assert!(!recorder.page_text(0).contains("SchichtPlan - Report"));
        assert!(recorder.page_text(1).contains("SchichtPlan - Report"));
    }

    #[test]
    fn test_german_strings() {
        let data = dataset(3);
        let options = options();
        let recorder = ProductReport::new(&data, Lang::De, &options).layout().unwrap();
        assert!(recorder.page_text(0).contains("Inhaltsverzeichnis"));
        assert!(recorder.page_text(1).contains("Seite 2/9"));
        let bugs = recorder.page_text(4);
        assert!(bugs.contains("HOCH"), "{bugs}");
        assert!(bugs.contains("src/app/api/shifts/[id]/route.ts"), "{bugs}");
    }

    #[test]
    fn test_summary_bullets() {
        let data = dataset(1);
        let options = options();
        let recorder = ProductReport::new(&data, Lang::En, &options).layout().unwrap();
        let text = recorder.page_text(1);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"•"));
        assert!(lines.contains(&"DATEV export"));
        assert!(lines.contains(&"Strengths:"));
    }

    #[test]
    fn test_long_feature_table_continues() {
        let data = dataset(120);
        let options = options();
        let recorder = ProductReport::new(&data, Lang::De, &options).layout().unwrap();
        assert!(recorder.page_count() > 9);
    }
}
