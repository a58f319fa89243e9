use super::PageWiring;
use crate::constants::{NAV_SECTION_ATTR, SCROLL_TO_ATTR};
use crate::dom;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Section a click should scroll to: nav buttons first, then other scroll links.
fn scroll_target(target: &web::Element) -> Option<String> {
    [NAV_SECTION_ATTR, SCROLL_TO_ATTR].iter().find_map(|attr| {
        target
            .closest(&format!("[{attr}]"))
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute(attr))
    })
}

/// One delegated listener on the page root covers every navigation control.
pub fn wire_navigation_clicks(w: &PageWiring) -> EventListener {
    let w = w.clone();
    let target = w.root.clone();
    EventListener::new(&target, "click", move |ev| {
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if let Some(id) = scroll_target(&el) {
            log::info!("[nav] scroll to {}", id);
            dom::scroll_to_section(&w.document, &id);
        }
    })
}
