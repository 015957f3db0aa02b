//! Browser frontend for slide-deck
//!
//! Page contract: `#hero-section` (with a `.container`), `#presentation-nav`
//! and `#main-content`. A deck is loaded either from
//! `<body data-presentation="decks/x.json">` on start or by calling
//! `loadPresentation(url)` from JavaScript.

mod chart;
mod dom;
mod hero;
mod loader;
mod nav;
mod scroll_spy;
mod sections;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if let Some(url) = dom::presentation_source() {
        spawn_local(async move {
            loader::load(&url).await;
        });
    }

    Ok(())
}

/// Fetch the deck at `url` and render it into the page
#[wasm_bindgen(js_name = loadPresentation)]
pub async fn load_presentation(url: String) {
    loader::load(&url).await;
}
