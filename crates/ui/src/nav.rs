use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, ScrollBehavior, ScrollToOptions};

use slide_deck::markup::{self, NAV_LINK_CLASS};
use slide_deck::spy::nav_scroll_target;
use slide_deck::Section;

use crate::dom::{get_document, offset_top_of, query_all, NAV_ID};

/// Build the nav bar and hook smooth scrolling on every link.
/// No-op when the page has no nav container.
pub fn render(sections: &[Section]) -> Result<(), JsValue> {
    let Some(nav) = get_document().and_then(|doc| doc.get_element_by_id(NAV_ID)) else {
        return Ok(());
    };

    nav.set_inner_html(&markup::nav_links(sections));

    for link in query_all(&nav, &format!(".{NAV_LINK_CLASS}"))? {
        let target_id = link
            .get_attribute("href")
            .and_then(|href| href.strip_prefix('#').map(ToString::to_string))
            .unwrap_or_default();

        let cb = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            scroll_to_section(&target_id);
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}

/// Smooth-scroll so the section sits just below the fixed header
fn scroll_to_section(id: &str) {
    let Some(win) = window() else { return };
    let Some(top) = win.document().and_then(|doc| offset_top_of(&doc, id)) else {
        return;
    };

    let opts = ScrollToOptions::new();
    opts.set_top(nav_scroll_target(top));
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}
