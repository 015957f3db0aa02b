//! Scroll listener keeping the nav bar in sync with the visible section

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};

use slide_deck::markup::{ACTIVE_CLASS, NAV_LINK_CLASS, SECTION_CLASS};
use slide_deck::{ScrollSpy, SectionBounds};

use crate::dom::{js_error_message, query_all};

/// Install the page-lifetime scroll listener.
///
/// Links and sections are collected once; section tops are re-read on every
/// event since charts and images keep shifting layout after load.
pub fn install() -> Result<(), JsValue> {
    let win = window().ok_or("No window")?;
    let doc = win.document().ok_or("No document")?;
    let root = doc.document_element().ok_or("No document element")?;

    let links = query_all(&root, &format!(".{NAV_LINK_CLASS}"))?;
    let sections: Vec<HtmlElement> = query_all(&root, &format!(".{SECTION_CLASS}"))?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    let mut spy = ScrollSpy::new();
    let win_cb = win.clone();
    let cb = Closure::wrap(Box::new(move || {
        let offset = win_cb.scroll_y().unwrap_or(0.0);
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|s| SectionBounds::new(s.id(), f64::from(s.offset_top())))
            .collect();
        spy.update(offset, &bounds);
        apply(&spy, &links);
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref())?;
    cb.forget();

    Ok(())
}

/// Clear the marker everywhere, then set it on the current section's link
fn apply(spy: &ScrollSpy, links: &[Element]) {
    for link in links {
        let classes = link.class_list();
        let mut result = classes.remove_1(ACTIVE_CLASS);
        if result.is_ok()
            && link
                .get_attribute("href")
                .is_some_and(|href| spy.is_active(&href))
        {
            result = classes.add_1(ACTIVE_CLASS);
        }
        if let Err(e) = result {
            web_sys::console::warn_1(
                &format!("Nav marker update failed: {}", js_error_message(&e)).into(),
            );
        }
    }
}
