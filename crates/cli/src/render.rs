//! Terminal presentation of a search result.
//!
//! [`build_report`] turns a `SearchResult` into a structured [`Report`]
//! (category plus ordered sections) and is what tests assert against;
//! [`print_report`] is the thin colored printer over it. Rendering rules:
//! free-text sections are omitted when empty or literally "n/a" (any case),
//! the conditional-guidelines grid appears only for MR Conditional
//! findings, and the disclaimer always renders when present.

use colored::{ColoredString, Colorize};

use mrisafe_types::{SafetyClassification, SearchResult};

/// Visual treatment of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Negative,
    Neutral,
}

/// Label, glyph, and tone for one safety classification.
#[derive(Debug, Clone, Copy)]
pub struct SafetyCategory {
    pub label: &'static str,
    pub glyph: &'static str,
    pub tone: Tone,
}

impl SafetyCategory {
    /// Maps a classification to its visual category. Anything outside the
    /// three recognised classifications gets the "not found" treatment;
    /// this is the default fallback, never an error.
    pub fn for_classification(classification: SafetyClassification) -> Self {
        match classification {
            SafetyClassification::MrSafe => Self {
                label: "MR Safe",
                glyph: "✔",
                tone: Tone::Positive,
            },
            SafetyClassification::MrConditional => Self {
                label: "MR Conditional",
                glyph: "⚠",
                tone: Tone::Caution,
            },
            SafetyClassification::MrUnsafe => Self {
                label: "MR Unsafe",
                glyph: "✘",
                tone: Tone::Negative,
            },
            SafetyClassification::Unknown => Self {
                label: "Information Not Found",
                glyph: "?",
                tone: Tone::Neutral,
            },
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self.tone {
            Tone::Positive => text.green().bold(),
            Tone::Caution => text.yellow().bold(),
            Tone::Negative => text.red().bold(),
            Tone::Neutral => text.bold(),
        }
    }
}

/// One citation line: display label plus the link itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub label: String,
    pub uri: String,
}

/// A renderable block of the report, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Text {
        title: &'static str,
        body: String,
    },
    Guidelines {
        static_field: Option<String>,
        gradient_field: Option<String>,
        sar_limit: Option<String>,
        notes: Option<String>,
    },
    Disclaimer(String),
    Sources(Vec<SourceLink>),
}

/// Fully-resolved presentation of one search result.
#[derive(Debug, Clone)]
pub struct Report {
    pub category: SafetyCategory,
    pub device_name: String,
    pub manufacturer: Option<String>,
    pub sections: Vec<Section>,
}

/// Whether a free-text field is worth showing: non-empty and not the
/// literal "n/a" in any case.
fn renderable(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("n/a")
}

/// Builds the structured report for a search result.
pub fn build_report(result: &SearchResult) -> Report {
    let data = &result.data;
    let category = SafetyCategory::for_classification(data.safety_classification);
    let mut sections = Vec::new();

    if renderable(&data.summary) {
        sections.push(Section::Text {
            title: "Summary",
            body: data.summary.trim().to_owned(),
        });
    }

    if data.safety_classification == SafetyClassification::MrConditional {
        if let Some(guidelines) = &data.conditional_guidelines {
            let keep = |field: &Option<String>| {
                field
                    .as_deref()
                    .filter(|value| renderable(value))
                    .map(|value| value.trim().to_owned())
            };
            sections.push(Section::Guidelines {
                static_field: keep(&guidelines.static_magnetic_field),
                gradient_field: keep(&guidelines.spatial_gradient_field),
                sar_limit: keep(&guidelines.sar_limit),
                notes: keep(&guidelines.notes),
            });
        }
    }

    if renderable(&data.risks_and_artifacts) {
        sections.push(Section::Text {
            title: "Potential Risks & Artifacts",
            body: data.risks_and_artifacts.trim().to_owned(),
        });
    }

    if renderable(&data.waiting_period) {
        sections.push(Section::Text {
            title: "Post-Procedure Waiting Period",
            body: data.waiting_period.trim().to_owned(),
        });
    }

    if let Some(disclaimer) = data.disclaimer.as_deref() {
        if !disclaimer.trim().is_empty() {
            sections.push(Section::Disclaimer(disclaimer.trim().to_owned()));
        }
    }

    let links: Vec<SourceLink> = result
        .sources
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            web.uri.clone().map(|uri| SourceLink {
                label: web
                    .title
                    .clone()
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| uri.clone()),
                uri,
            })
        })
        .collect();
    if !links.is_empty() {
        sections.push(Section::Sources(links));
    }

    Report {
        category,
        device_name: data.device_name.clone(),
        manufacturer: renderable(&data.manufacturer).then(|| data.manufacturer.clone()),
        sections,
    }
}

/// Prints the report to stdout with color.
pub fn print_report(report: &Report) {
    let header = format!("{} {}", report.category.glyph, report.category.label);
    println!("{}", report.category.paint(&header));
    if !report.device_name.is_empty() {
        println!("{}", report.device_name.bold());
    }
    if let Some(manufacturer) = &report.manufacturer {
        println!("by {manufacturer}");
    }

    for section in &report.sections {
        println!();
        match section {
            Section::Text { title, body } => {
                println!("{}", title.bold().underline());
                println!("{body}");
            }
            Section::Guidelines {
                static_field,
                gradient_field,
                sar_limit,
                notes,
            } => {
                println!("{}", "MR Conditional Guidelines".bold().underline());
                for (label, value) in [
                    ("Static Field:", static_field),
                    ("Gradient Field:", gradient_field),
                    ("SAR Limit:", sar_limit),
                ] {
                    if let Some(value) = value {
                        println!("  {label:<16}{value}");
                    }
                }
                if let Some(notes) = notes {
                    println!("  {notes}");
                }
            }
            Section::Disclaimer(text) => {
                println!("{} {text}", "Disclaimer:".yellow().bold());
            }
            Section::Sources(links) => {
                println!("{}", "Sources".bold().underline());
                for link in links {
                    println!("  - {} ({})", link.label, link.uri.blue());
                }
            }
        }
    }
}
