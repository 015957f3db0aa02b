//! HTML fragments for every part of the page
//!
//! All builders are pure: they take model values and return markup strings
//! that the UI crate assigns with `set_inner_html`. Values are inserted
//! unescaped; deck files are author-controlled assets and may carry markup
//! (`<strong>`, `<br>`) on purpose.

use std::fmt::Write;

use crate::model::{display_value, Badge, Card, ContentItem, Meta, Scalar, Section};

/// Overlay composited over `meta.backgroundImage` on the hero banner
const HERO_OVERLAY: &str = "linear-gradient(rgba(0, 74, 173, 0.9), rgba(0, 42, 96, 0.9))";

/// Class carried by every nav link
pub const NAV_LINK_CLASS: &str = "nav-link";
/// Marker class of the current nav link
pub const ACTIVE_CLASS: &str = "active";
/// Class carried by every rendered section element
pub const SECTION_CLASS: &str = "slide-section";

/// CSS `background-image` value for the hero banner, if the deck has an image
pub fn hero_background(meta: &Meta) -> Option<String> {
    meta.background_image
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| format!("{HERO_OVERLAY}, url('{url}')"))
}

/// Inner markup of the hero `.container`
pub fn hero_body(meta: &Meta) -> String {
    let mut html = format!(
        r#"<h1 style="font-size: 2.2rem; max-width: 900px; margin: 0 auto;">{}</h1>
<p style="margin-top: 1rem; font-size: 1.2rem;">{}</p>
<p style="margin-top: 0.5rem; font-size: 1.1rem; font-weight: 500;">{}</p>
<p style="font-size: 0.9rem; opacity: 0.8;">Orientadora: {}</p>"#,
        meta.title,
        meta.subtitle,
        meta.authors
            .iter()
            .map(Scalar::as_str)
            .collect::<Vec<_>>()
            .join(" & "),
        meta.advisor,
    );

    let footer = match (meta.institution.as_deref(), meta.date.as_deref()) {
        (Some(inst), Some(date)) => Some(format!("{inst} · {date}")),
        (Some(inst), None) => Some(inst.to_string()),
        (None, Some(date)) => Some(date.to_string()),
        (None, None) => None,
    };
    if let Some(footer) = footer {
        let _ = write!(
            html,
            "\n<p style=\"font-size: 0.85rem; opacity: 0.7;\">{footer}</p>"
        );
    }
    html
}

/// One link per section, the first one marked active
pub fn nav_links(sections: &[Section]) -> String {
    sections
        .iter()
        .enumerate()
        .fold(String::new(), |mut html, (index, section)| {
            let class = if index == 0 {
                format!("{NAV_LINK_CLASS} {ACTIVE_CLASS}")
            } else {
                NAV_LINK_CLASS.to_string()
            };
            let _ = write!(
                html,
                r##"<a href="#{}" class="{class}">{}</a>"##,
                section.id, section.title
            );
            html
        })
}

/// Header plus content region of one section element
pub fn section_body(section: &Section) -> String {
    format!(
        r#"<div class="slide-header"><h2 class="slide-title">{}</h2></div>
<div class="slide-content">{}</div>"#,
        section.title,
        render_items(&section.content)
    )
}

/// Concatenated markup of a section's content list
pub fn render_items(items: &[ContentItem]) -> String {
    items.iter().map(render_item).collect()
}

/// Markup for a single content item. Unknown item types render to nothing.
pub fn render_item(item: &ContentItem) -> String {
    match item {
        ContentItem::Text { value } => format!("<p>{value}</p>"),
        ContentItem::HighlightBox {
            title,
            text,
            items,
            style,
        } => highlight_box(title, text.as_deref(), items.as_deref(), style.as_deref()),
        ContentItem::Badges { items } => badges(items),
        ContentItem::Grid { title, cards } => grid(title, cards),
        ContentItem::Chart { chart_id, .. } => format!(
            r#"<div class="chart-container" style="position: relative; height:350px; width:100%; margin: 2rem 0;"><canvas id="{chart_id}"></canvas></div>"#
        ),
        ContentItem::Table { headers, rows } => table(headers, rows),
        ContentItem::Unknown => String::new(),
    }
}

fn highlight_box(
    title: &str,
    text: Option<&str>,
    items: Option<&[Scalar]>,
    style: Option<&str>,
) -> String {
    let text_html = text.map(|t| format!("<p>{t}</p>")).unwrap_or_default();
    let list_html = match items {
        Some(items) if !items.is_empty() => {
            let lis: String = items.iter().map(|li| format!("<li>{li}</li>")).collect();
            format!("<ul>{lis}</ul>")
        }
        _ => String::new(),
    };
    format!(
        r#"<div class="highlight-box" style="{}"><h3>{title}</h3>{text_html}{list_html}</div>"#,
        style.unwrap_or_default()
    )
}

fn badges(items: &[Badge]) -> String {
    let spans: String = items
        .iter()
        .map(|badge| {
            format!(
                r#"<span class="badge" style="padding: 0.5rem 1rem; border-radius: 20px; {}">{}</span>"#,
                badge.style, badge.text
            )
        })
        .collect();
    format!(
        r#"<div style="display: flex; gap: 1rem; margin-top: 1rem; align-items: center; justify-content: center; flex-wrap: wrap;">{spans}</div>"#
    )
}

fn grid(title: &str, cards: &[Card]) -> String {
    let cards_html: String = cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="data-card"><div class="stat-label">{}</div><div class="big-stat" style="font-size: 1.5rem;">{}</div></div>"#,
                card.label,
                display_value(&card.value)
            )
        })
        .collect();
    format!(
        r#"<h3 style="margin-top: 2rem;">{title}</h3><div class="data-grid">{cards_html}</div>"#
    )
}

fn table(headers: &[Scalar], rows: &[Vec<serde_json::Value>]) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!(r#"<th style="padding: 1rem;">{h}</th>"#))
        .collect();

    let mut body = String::new();
    for row in rows {
        body.push_str(r#"<tr style="border-bottom: 1px solid #eee;">"#);
        for (col, cell) in row.iter().enumerate() {
            // Every column after the first is bold
            let weight = if col > 0 { "font-weight: bold;" } else { "" };
            let _ = write!(
                body,
                r#"<td style="padding: 1rem; {weight}">{}</td>"#,
                display_value(cell)
            );
        }
        body.push_str("</tr>");
    }

    format!(
        r#"<div class="table-responsive" style="margin-top: 2rem;"><table style="width: 100%; border-collapse: collapse; text-align: center;"><thead style="background: var(--color-primary); color: white;"><tr>{head}</tr></thead><tbody>{body}</tbody></table></div>"#
    )
}

/// Whole-body replacement shown when loading fails
pub fn error_page(message: &str) -> String {
    format!(r#"<div class="container"><p>Erro ao carregar apresentação: {message}</p></div>"#)
}
