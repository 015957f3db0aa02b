//! Build a draft deck from extracted slide text
//!
//! Heuristic: short lines that are all caps or mention a typical academic
//! heading start a new section, every other line becomes a text item.

use crate::model::{ContentItem, Meta, Presentation, Scalar, Section};

/// Lines at or above this length are never headings
const MAX_HEADING_LEN: usize = 50;

const HEADING_KEYWORDS: [&str; 6] = [
    "introdução",
    "objetivo",
    "método",
    "resultado",
    "conclusão",
    "referência",
];

const DEFAULT_SECTION_ID: &str = "conteudo";
const DEFAULT_SECTION_TITLE: &str = "Conteúdo Extraído";

/// Whether a trimmed line looks like a section heading
pub fn is_heading(line: &str) -> bool {
    if line.chars().count() >= MAX_HEADING_LEN {
        return false;
    }
    let upper = line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase);
    if upper {
        return true;
    }
    let lower = line.to_lowercase();
    HEADING_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// URL-friendly id for a heading: lowercase, non `[a-z0-9]` chars become `-`
pub fn slugify(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' })
        .collect();
    slug.trim_matches('-').to_string()
}

/// Split text into sections. Sections without content are dropped.
pub fn sections_from_text(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section {
        id: DEFAULT_SECTION_ID.to_string(),
        title: DEFAULT_SECTION_TITLE.into(),
        content: Vec::new(),
    };

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_heading(line) {
            let next = Section {
                id: slugify(line),
                title: line.into(),
                content: Vec::new(),
            };
            let done = std::mem::replace(&mut current, next);
            if !done.content.is_empty() {
                sections.push(done);
            }
        } else {
            current.content.push(ContentItem::Text {
                value: line.into(),
            });
        }
    }

    if !current.content.is_empty() {
        sections.push(current);
    }
    sections
}

/// Draft presentation named after the source file stem
pub fn outline_presentation(file_stem: &str, text: &str) -> Presentation {
    let author: Scalar = file_stem
        .split_whitespace()
        .next()
        .unwrap_or("Autor")
        .into();

    Presentation {
        id: Some(file_stem.to_lowercase().replace(' ', "-")),
        meta: Meta {
            title: file_stem.into(),
            subtitle: "Extraído automaticamente do PDF".into(),
            authors: vec![author],
            ..Meta::default()
        },
        sections: sections_from_text(text),
    }
}
