use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use slide_deck::markup;
use slide_deck::Meta;

use crate::dom::{get_document, HERO_ID};

/// Fill the hero banner. No-op when the page has no hero region.
pub fn render(meta: &Meta) -> Result<(), JsValue> {
    let Some(hero) = get_document().and_then(|doc| doc.get_element_by_id(HERO_ID)) else {
        return Ok(());
    };

    // Keep the stylesheet's background unless the deck brings its own image
    if let Some(background) = markup::hero_background(meta) {
        if let Some(el) = hero.dyn_ref::<HtmlElement>() {
            el.style().set_property("background-image", &background)?;
        }
    }

    if let Some(container) = hero.query_selector(".container")? {
        container.set_inner_html(&markup::hero_body(meta));
    }

    Ok(())
}
