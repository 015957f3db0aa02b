use wasm_bindgen::prelude::*;

use slide_deck::markup::{self, SECTION_CLASS};
use slide_deck::Section;

use crate::chart;
use crate::dom::{get_document, MAIN_ID};

/// Append one `<section>` per deck section to the main region, in order.
/// No-op when the page has no main region.
pub fn render(sections: &[Section]) -> Result<(), JsValue> {
    let Some(doc) = get_document() else {
        return Ok(());
    };
    let Some(main) = doc.get_element_by_id(MAIN_ID) else {
        return Ok(());
    };

    for section in sections {
        let el = doc.create_element("section")?;
        el.set_id(&section.id);
        el.set_class_name(SECTION_CLASS);
        el.set_inner_html(&markup::section_body(section));
        main.append_child(&el)?;

        // Canvases only exist once the section is attached
        for (chart_id, config) in section.charts() {
            chart::bind(chart_id, config)?;
        }
    }

    Ok(())
}
