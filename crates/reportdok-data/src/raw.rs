//! Raw dataset shapes as they appear in TOML, and their validation into
//! the typed model.
//!
//! Every conversion carries the dotted field path so a missing translation
//! is reported as e.g. `categories[2].entries[4].details`.

use serde::Deserialize;

use reportdok_model::{
    ArchitectureStat, AuditDataset, Bug, Category, DeadCodeItem, FeatureEntry, Lang,
    MissingFeature, ProductDataset, Recommendation, RecommendationGroup, RoadmapPhase, Severity,
    StackItem, Status, Text, WorkingFeature,
};

use crate::error::{DataError, Result};

/// A text field: one string for both languages, or a `{ de, en }` table
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawText {
    Shared(String),
    Localized {
        de: Option<String>,
        en: Option<String>,
    },
}

impl RawText {
    fn into_text(self, path: &str) -> Result<Text> {
        match self {
            RawText::Shared(text) => Ok(Text::shared(text)),
            RawText::Localized { de, en } => Ok(Text::new(
                variant(de, path, Lang::De)?,
                variant(en, path, Lang::En)?,
            )),
        }
    }
}

fn variant(value: Option<String>, path: &str, lang: Lang) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(DataError::MissingTranslation {
            path: path.to_string(),
            lang,
        }),
    }
}

fn texts(raw: Vec<RawText>, path: &str) -> Result<Vec<Text>> {
    raw.into_iter()
        .enumerate()
        .map(|(i, t)| t.into_text(&format!("{path}[{i}]")))
        .collect()
}

fn non_empty(value: String, path: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(DataError::Invalid {
            path: path.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(value)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategory<E> {
    title: RawText,
    #[serde(default = "Vec::new")]
    entries: Vec<E>,
}

impl<E> RawCategory<E> {
    fn convert<T>(
        self,
        path: &str,
        entry: impl Fn(E, &str) -> Result<T>,
    ) -> Result<Category<T>> {
        let title = self.title.into_text(&format!("{path}.title"))?;
        let entries = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| entry(e, &format!("{path}.entries[{i}]")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Category { title, entries })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    name: RawText,
    status: Status,
    details: RawText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRecommendationGroup {
    priority: RawText,
    #[serde(default)]
    items: Vec<RawRecommendation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRecommendation {
    name: RawText,
    description: RawText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStackItem {
    component: RawText,
    technology: String,
}

impl RawStackItem {
    fn convert(self, path: &str) -> Result<StackItem> {
        Ok(StackItem {
            component: self.component.into_text(&format!("{path}.component"))?,
            technology: self.technology,
        })
    }
}

/// Audit report dataset as written in TOML
#[derive(Debug, Deserialize)]
pub(crate) struct RawAudit {
    product: String,
    title: RawText,
    prepared_for: RawText,
    description: RawText,
    #[serde(default)]
    categories: Vec<RawCategory<RawFeature>>,
    #[serde(default)]
    recommendations: Vec<RawRecommendationGroup>,
    #[serde(default)]
    stack: Vec<RawStackItem>,
}

impl RawAudit {
    pub(crate) fn validate(self) -> Result<AuditDataset> {
        let categories = self
            .categories
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                c.convert(&format!("categories[{i}]"), |f, path| {
                    Ok(FeatureEntry {
                        name: f.name.into_text(&format!("{path}.name"))?,
                        status: f.status,
                        details: f.details.into_text(&format!("{path}.details"))?,
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let recommendations = self
            .recommendations
            .into_iter()
            .enumerate()
            .map(|(i, group)| -> Result<RecommendationGroup> {
                let path = format!("recommendations[{i}]");
                let items = group
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(j, r)| -> Result<Recommendation> {
                        let item = format!("{path}.items[{j}]");
                        Ok(Recommendation {
                            name: r.name.into_text(&format!("{item}.name"))?,
                            description: r.description.into_text(&format!("{item}.description"))?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(RecommendationGroup {
                    priority: group.priority.into_text(&format!("{path}.priority"))?,
                    items,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let stack = self
            .stack
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.convert(&format!("stack[{i}]")))
            .collect::<Result<Vec<_>>>()?;

        Ok(AuditDataset {
            product: non_empty(self.product, "product")?,
            title: self.title.into_text("title")?,
            prepared_for: self.prepared_for.into_text("prepared_for")?,
            description: self.description.into_text("description")?,
            categories,
            recommendations,
            stack,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawWorkingFeature {
    name: RawText,
    note: RawText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawArchitectureStat {
    metric: RawText,
    value: RawText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBug {
    title: RawText,
    severity: Severity,
    location: RawText,
    description: RawText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDeadCode {
    item: RawText,
    location: String,
    reason: RawText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMissing {
    name: RawText,
    priority: Severity,
    description: RawText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPhase {
    phase: RawText,
    #[serde(default)]
    items: Vec<RawText>,
}

/// Product report dataset as written in TOML
#[derive(Debug, Deserialize)]
pub(crate) struct RawProduct {
    product: String,
    report_title: RawText,
    short_title: RawText,
    tagline: RawText,
    #[serde(default)]
    summary: Vec<RawText>,
    #[serde(default)]
    stack: Vec<RawStackItem>,
    #[serde(default)]
    architecture: Vec<RawArchitectureStat>,
    #[serde(default)]
    features: Vec<RawCategory<RawWorkingFeature>>,
    #[serde(default)]
    bugs: Vec<RawBug>,
    #[serde(default)]
    dead_code: Vec<RawDeadCode>,
    #[serde(default)]
    missing: Vec<RawMissing>,
    #[serde(default)]
    roadmap: Vec<RawPhase>,
    #[serde(default)]
    conclusion: Vec<RawText>,
    #[serde(default)]
    highlights: Vec<RawText>,
}

impl RawProduct {
    pub(crate) fn validate(self) -> Result<ProductDataset> {
        let stack = self
            .stack
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.convert(&format!("stack[{i}]")))
            .collect::<Result<Vec<_>>>()?;

        let architecture = self
            .architecture
            .into_iter()
            .enumerate()
            .map(|(i, a)| -> Result<ArchitectureStat> {
                Ok(ArchitectureStat {
                    metric: a.metric.into_text(&format!("architecture[{i}].metric"))?,
                    value: a.value.into_text(&format!("architecture[{i}].value"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let features = self
            .features
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                c.convert(&format!("features[{i}]"), |f, path| {
                    Ok(WorkingFeature {
                        name: f.name.into_text(&format!("{path}.name"))?,
                        note: f.note.into_text(&format!("{path}.note"))?,
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let bugs = self
            .bugs
            .into_iter()
            .enumerate()
            .map(|(i, b)| -> Result<Bug> {
                let path = format!("bugs[{i}]");
                Ok(Bug {
                    title: b.title.into_text(&format!("{path}.title"))?,
                    severity: b.severity,
                    location: b.location.into_text(&format!("{path}.location"))?,
                    description: b.description.into_text(&format!("{path}.description"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let dead_code = self
            .dead_code
            .into_iter()
            .enumerate()
            .map(|(i, d)| -> Result<DeadCodeItem> {
                Ok(DeadCodeItem {
                    item: d.item.into_text(&format!("dead_code[{i}].item"))?,
                    location: d.location,
                    reason: d.reason.into_text(&format!("dead_code[{i}].reason"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let missing = self
            .missing
            .into_iter()
            .enumerate()
            .map(|(i, m)| -> Result<MissingFeature> {
                Ok(MissingFeature {
                    name: m.name.into_text(&format!("missing[{i}].name"))?,
                    priority: m.priority,
                    description: m.description.into_text(&format!("missing[{i}].description"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let roadmap = self
            .roadmap
            .into_iter()
            .enumerate()
            .map(|(i, p)| -> Result<RoadmapPhase> {
                Ok(RoadmapPhase {
                    phase: p.phase.into_text(&format!("roadmap[{i}].phase"))?,
                    items: texts(p.items, &format!("roadmap[{i}].items"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ProductDataset {
            product: non_empty(self.product, "product")?,
            report_title: self.report_title.into_text("report_title")?,
            short_title: self.short_title.into_text("short_title")?,
            tagline: self.tagline.into_text("tagline")?,
            summary: texts(self.summary, "summary")?,
            stack,
            architecture,
            features,
            bugs,
            dead_code,
            missing,
            roadmap,
            conclusion: texts(self.conclusion, "conclusion")?,
            highlights: texts(self.highlights, "highlights")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Field {
        t: RawText,
    }

    #[test]
    fn test_shared_and_localized_text() {
        let field: Field = toml::from_str("t = \"PWA\"").unwrap();
        assert_eq!(field.t.into_text("t").unwrap(), Text::shared("PWA"));

        let field: Field = toml::from_str("t = { de = \"Zahlungen\", en = \"Payments\" }").unwrap();
        assert_eq!(field.t.into_text("t").unwrap(), Text::new("Zahlungen", "Payments"));
    }

    #[test]
    fn test_blank_variant_is_missing() {
        let raw = RawText::Localized {
            de: Some("Fehlt".to_string()),
            en: Some("  ".to_string()),
        };
        match raw.into_text("stack[0].component") {
            Err(DataError::MissingTranslation { path, lang }) => {
                assert_eq!(path, "stack[0].component");
                assert_eq!(lang, Lang::En);
            }
            other => panic!("expected missing translation, got {:?}", other),
        }
    }

    #[test]
    fn test_texts_index_paths() {
        let raw = vec![
            RawText::Shared("a".to_string()),
            RawText::Localized {
                de: None,
                en: Some("b".to_string()),
            },
        ];
        let err = texts(raw, "highlights").unwrap_err();
        assert_eq!(err.to_string(), "Missing DE translation at highlights[1]");
    }
}
