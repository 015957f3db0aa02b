//! Presentation document model
//!
//! Mirrors the JSON shape fetched by the page loader:
//! `{ "meta": {...}, "sections": [{ "id", "title", "content": [...] }] }`

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Root document, lives for one page load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Slug written by the outline importer, unused by the renderers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub meta: Meta,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Presentation {
    /// Parse a presentation from a JSON body
    pub fn from_json(body: &str) -> Result<Self, crate::LoadError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Iterate every chart item as `(chart_id, config)` in document order
    pub fn charts(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.sections.iter().flat_map(Section::charts)
    }
}

/// Hero banner metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub title: Scalar,
    #[serde(default)]
    pub subtitle: Scalar,
    #[serde(default)]
    pub authors: Vec<Scalar>,
    #[serde(default)]
    pub advisor: Scalar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Scalar>,
}

/// One scrollable slide, addressed by `id` in the nav bar and URL fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: Scalar,
    #[serde(default, deserialize_with = "lenient_items")]
    pub content: Vec<ContentItem>,
}

impl Section {
    /// Chart items of this section as `(chart_id, config)`
    pub fn charts(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.content.iter().filter_map(|item| match item {
            ContentItem::Chart { chart_id, config } => Some((chart_id.as_str(), config)),
            _ => None,
        })
    }
}

/// A renderable unit inside a section, tagged by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentItem {
    Text {
        value: Scalar,
    },
    HighlightBox {
        title: Scalar,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<Scalar>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        items: Option<Vec<Scalar>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    Badges {
        items: Vec<Badge>,
    },
    Grid {
        title: Scalar,
        cards: Vec<Card>,
    },
    Chart {
        #[serde(rename = "chartId")]
        chart_id: String,
        /// Passed verbatim to the charting library
        #[serde(default)]
        config: Value,
    },
    Table {
        headers: Vec<Scalar>,
        #[serde(default)]
        rows: Vec<Vec<Value>>,
    },
    /// Any `type` this version does not know; renders to nothing
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub text: Scalar,
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub label: Scalar,
    pub value: Value,
}

/// Text of a scalar JSON value as it should appear in markup.
/// Strings are used as-is, null is empty, anything else is its JSON text.
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// Content list where an item that fails to parse (no `type`, missing or
/// mistyped fields) becomes [`ContentItem::Unknown`] instead of failing the deck
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<ContentItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|value| ContentItem::deserialize(value).unwrap_or(ContentItem::Unknown))
        .collect())
}

/// Text field that accepts any JSON scalar, stored as its display text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Scalar(String);

impl Scalar {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        Self(display_value(&value).into_owned())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Deref for Scalar {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK: &str = r##"{
        "meta": {
            "title": "Analysis",
            "subtitle": "Results",
            "authors": ["Ana", "Bruno"],
            "advisor": "Dr. Lima",
            "backgroundImage": "img/bg.png"
        },
        "sections": [
            { "id": "intro", "title": "Intro", "content": [
                { "type": "text", "value": "Hello" },
                { "type": "chart", "chartId": "c1", "config": { "type": "bar" } }
            ]},
            { "id": "end", "title": "End", "content": [
                { "type": "video", "src": "x.mp4" },
                { "type": "table", "headers": ["Metric", "Value"], "rows": [["Accuracy", 0.92]] }
            ]}
        ]
    }"##;

    #[test]
    fn test_parse_full_document() {
        let deck = Presentation::from_json(DECK).unwrap();
        assert_eq!(deck.meta.authors, vec!["Ana", "Bruno"]);
        assert_eq!(deck.meta.background_image.as_deref(), Some("img/bg.png"));
        assert_eq!(deck.sections.len(), 2);
        assert_eq!(deck.sections[0].id, "intro");
        assert_eq!(
            deck.sections[0].content[0],
            ContentItem::Text { value: "Hello".into() }
        );
    }

    #[test]
    fn test_unknown_type_is_kept_as_unknown() {
        let deck = Presentation::from_json(DECK).unwrap();
        assert_eq!(deck.sections[1].content[0], ContentItem::Unknown);
    }

    #[test]
    fn test_charts_in_document_order() {
        let deck = Presentation::from_json(DECK).unwrap();
        let charts: Vec<_> = deck.charts().collect();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].0, "c1");
        assert_eq!(charts[0].1["type"], "bar");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Presentation::from_json("{ \"meta\": ").unwrap_err();
        assert!(matches!(err, crate::LoadError::Parse(_)));
    }

    #[test]
    fn test_item_without_type_is_skipped() {
        let deck = Presentation::from_json(
            r#"{"meta":{},"sections":[{"id":"a","title":"A","content":[
                {"value":"x"},
                {"type":"text","value":"ok"},
                {"type":"table"}
            ]}]}"#,
        )
        .unwrap();
        let content = &deck.sections[0].content;
        assert_eq!(content.len(), 3);
        assert_eq!(content[0], ContentItem::Unknown);
        assert_eq!(content[1], ContentItem::Text { value: "ok".into() });
        assert_eq!(content[2], ContentItem::Unknown);
        assert_eq!(crate::markup::render_items(content), "<p>ok</p>");
    }

    #[test]
    fn test_scalar_text_fields_accept_numbers() {
        let deck = Presentation::from_json(
            r#"{"meta":{"title":2026,"authors":["Ana",7],"date":2024},"sections":[{"id":"a","title":3,"content":[
                {"type":"text","value":42},
                {"type":"badges","items":[{"text":1,"style":""}]},
                {"type":"grid","title":true,"cards":[{"label":0.5,"value":1}]},
                {"type":"table","headers":[1,"Value"],"rows":[]}
            ]}]}"#,
        )
        .unwrap();
        assert_eq!(deck.meta.title, "2026");
        assert_eq!(deck.meta.authors, vec!["Ana", "7"]);
        assert_eq!(deck.meta.date, Some("2024".into()));
        assert_eq!(deck.sections[0].title, "3");

        let html = crate::markup::render_items(&deck.sections[0].content);
        assert!(html.starts_with("<p>42</p>"));
        assert!(html.contains(">1</span>"));
        assert!(html.contains(">true</h3>"));
        assert!(html.contains(r#"<div class="stat-label">0.5</div>"#));
        assert!(html.contains(r#"<th style="padding: 1rem;">1</th>"#));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::from("92%")), "92%");
        assert_eq!(display_value(&Value::from(0.92)), "0.92");
        assert_eq!(display_value(&Value::from(true)), "true");
        assert_eq!(display_value(&Value::Null), "");
    }
}
