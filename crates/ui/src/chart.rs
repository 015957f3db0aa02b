//! Glue to the page's charting library
//!
//! Looks for a global `Chart` constructor (Chart.js) and calls
//! `new Chart(ctx, config)` with the deck's config untouched.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlCanvasElement};

use crate::dom::get_document;

/// Global the charting library installs on `window`
const CHART_GLOBAL: &str = "Chart";

/// Draw a chart on the canvas `chart_id`. A missing canvas or a page without
/// the charting library is silently skipped; a constructor that throws is
/// returned to the caller and fails the load.
pub fn bind(chart_id: &str, config: &serde_json::Value) -> Result<(), JsValue> {
    let Some(canvas) = get_document()
        .and_then(|doc| doc.get_element_by_id(chart_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return Ok(());
    };
    let Some(ctx) = canvas.get_context("2d")? else {
        return Ok(());
    };

    let win = window().ok_or("No window")?;
    let ctor = js_sys::Reflect::get(&win, &CHART_GLOBAL.into())?;
    let Some(ctor) = ctor.dyn_ref::<js_sys::Function>() else {
        return Ok(());
    };

    let json = serde_json::to_string(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = js_sys::JSON::parse(&json)?;
    js_sys::Reflect::construct(ctor, &js_sys::Array::of2(&ctx, &config))?;
    Ok(())
}
