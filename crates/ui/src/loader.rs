//! Fetch a deck and build the page from it

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Response};

use slide_deck::markup;
use slide_deck::{LoadError, Presentation};

use crate::dom::{js_error_message, set_body_html};
use crate::{hero, nav, scroll_spy, sections};

/// Load `url` and render it. Any failure replaces the whole page body with
/// an error message; there is no retry.
pub async fn load(url: &str) {
    let result = match fetch_presentation(url).await {
        Ok(deck) => render(&deck),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            web_sys::console::log_1(&format!("Presentation loaded: {url}").into());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Could not load presentation: {e}").into());
            set_body_html(&markup::error_page(&e.to_string()));
        }
    }
}

async fn fetch_presentation(url: &str) -> Result<Presentation, LoadError> {
    let win = window().ok_or_else(|| LoadError::Render("no window".into()))?;

    let resp_val = JsFuture::from(win.fetch_with_str(url))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_val.dyn_into().map_err(transport_error)?;

    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let body = JsFuture::from(resp.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?
        .as_string()
        .unwrap_or_default();

    Presentation::from_json(&body)
}

/// Hero, nav, sections, then the scroll spy, in that order
fn render(deck: &Presentation) -> Result<(), LoadError> {
    hero::render(&deck.meta).map_err(render_error)?;
    nav::render(&deck.sections).map_err(render_error)?;
    sections::render(&deck.sections).map_err(render_error)?;
    scroll_spy::install().map_err(render_error)?;
    Ok(())
}

#[allow(clippy::needless_pass_by_value)]
fn transport_error(e: JsValue) -> LoadError {
    LoadError::Transport(js_error_message(&e))
}

#[allow(clippy::needless_pass_by_value)]
fn render_error(e: JsValue) -> LoadError {
    LoadError::Render(js_error_message(&e))
}
