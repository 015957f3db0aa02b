//! Advisory checks on a parsed deck
//!
//! The page renders whatever it is given; these checks catch the authoring
//! mistakes that make it misbehave (a nav link scrolling to the wrong slide,
//! a chart drawn on someone else's canvas).

use std::collections::HashSet;
use std::fmt;

use crate::model::{ContentItem, Presentation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptySectionId { index: usize },
    DuplicateSectionId(String),
    EmptyChartId { section: String },
    DuplicateChartId(String),
    RaggedTableRow {
        section: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySectionId { index } => write!(f, "section #{index} has an empty id"),
            Self::DuplicateSectionId(id) => write!(f, "section id '{id}' is used more than once"),
            Self::EmptyChartId { section } => {
                write!(f, "chart in section '{section}' has an empty chartId")
            }
            Self::DuplicateChartId(id) => write!(f, "chartId '{id}' is used more than once"),
            Self::RaggedTableRow {
                section,
                row,
                expected,
                found,
            } => write!(
                f,
                "table row {row} in section '{section}' has {found} cells, headers have {expected}"
            ),
        }
    }
}

/// Collect every issue in document order
pub fn lint(deck: &Presentation) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut section_ids = HashSet::new();
    let mut chart_ids = HashSet::new();

    for (index, section) in deck.sections.iter().enumerate() {
        if section.id.is_empty() {
            issues.push(Issue::EmptySectionId { index });
        } else if !section_ids.insert(section.id.as_str()) {
            issues.push(Issue::DuplicateSectionId(section.id.clone()));
        }

        for item in &section.content {
            match item {
                ContentItem::Chart { chart_id, .. } if chart_id.is_empty() => {
                    issues.push(Issue::EmptyChartId {
                        section: section.id.clone(),
                    });
                }
                ContentItem::Chart { chart_id, .. } => {
                    if !chart_ids.insert(chart_id.as_str()) {
                        issues.push(Issue::DuplicateChartId(chart_id.clone()));
                    }
                }
                ContentItem::Table { headers, rows } => {
                    for (row, cells) in rows.iter().enumerate() {
                        if cells.len() != headers.len() {
                            issues.push(Issue::RaggedTableRow {
                                section: section.id.clone(),
                                row,
                                expected: headers.len(),
                                found: cells.len(),
                            });
                        }
                    }
                }
                _ => {}
            }
        }
    }

    issues
}
