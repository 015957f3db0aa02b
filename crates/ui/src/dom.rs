use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

/// Hero banner region; its `.container` child receives the title block
pub const HERO_ID: &str = "hero-section";
/// Nav bar container
pub const NAV_ID: &str = "presentation-nav";
/// Region the section elements are appended to
pub const MAIN_ID: &str = "main-content";

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Deck URL declared on the page as `<body data-presentation="...">`
pub fn presentation_source() -> Option<String> {
    get_document()?
        .body()?
        .get_attribute("data-presentation")
        .filter(|url| !url.is_empty())
}

/// Replace the whole page body
pub fn set_body_html(html: &str) {
    if let Some(body) = get_document().and_then(|doc| doc.body()) {
        body.set_inner_html(html);
    }
}

/// Elements matching `selector` under `root`, in document order
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `offsetTop` of the element with this id, if it exists and is an `HtmlElement`
pub fn offset_top_of(doc: &Document, id: &str) -> Option<f64> {
    doc.get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|el| f64::from(el.offset_top()))
}

/// Readable text for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
