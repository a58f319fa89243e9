use crate::constants::{
    ACTIVE_CLASS, BACKDROP_ID, BLOB_PRIMARY_ID, BLOB_PRIMARY_ROTATE, BLOB_PRIMARY_SHIFT,
    BLOB_SECONDARY_ID, BLOB_SECONDARY_ROTATE, BLOB_SECONDARY_SHIFT, NAV_ID, NAV_SECTION_ATTR,
    PARTICLE_CLASS, POINTER_X_VAR, POINTER_Y_VAR, VISIBLE_CLASS,
};
use crate::core::{RecomputeOutcome, SectionId, ViewportState, SECTION_ORDER};
use crate::dom;
use crate::input;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bring the whole page in line with `state` (used once after mounting).
pub fn sync_all(document: &web::Document, state: &ViewportState) {
    sync_nav(document, state.active);
    for id in SECTION_ORDER {
        if state.is_visited(id) {
            reveal(document, id);
        }
    }
    sync_parallax(document, state.scroll_y);
}

/// Apply only what a recompute changed, plus the scroll-bound parallax.
pub fn apply(document: &web::Document, state: &ViewportState, outcome: &RecomputeOutcome) {
    if let Some((prev, next)) = outcome.active_changed {
        log::debug!(
            "[tracker] active {} -> {}",
            prev.map(SectionId::dom_id).unwrap_or("none"),
            next.dom_id()
        );
        sync_nav(document, Some(next));
    }
    for &id in &outcome.revealed {
        log::debug!("[tracker] reveal {}", id.dom_id());
        reveal(document, id);
    }
    sync_parallax(document, state.scroll_y);
}

fn sync_nav(document: &web::Document, active: Option<SectionId>) {
    let Some(nav) = document.get_element_by_id(NAV_ID) else {
        return;
    };
    let Ok(buttons) = nav.query_selector_all(&format!("[{NAV_SECTION_ATTR}]")) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let is_active = el
            .get_attribute(NAV_SECTION_ATTR)
            .and_then(|id| SectionId::from_dom_id(&id))
            .is_some_and(|id| active == Some(id));
        dom::set_class(&el, ACTIVE_CLASS, is_active);
    }
}

fn reveal(document: &web::Document, id: SectionId) {
    if let Some(el) = document.get_element_by_id(id.dom_id()) {
        dom::set_class(&el, VISIBLE_CLASS, true);
    }
}

fn sync_parallax(document: &web::Document, scroll_y: f64) {
    if let Some(el) = document.get_element_by_id(BLOB_PRIMARY_ID) {
        let t = input::parallax_transform(scroll_y, BLOB_PRIMARY_SHIFT, BLOB_PRIMARY_ROTATE);
        dom::set_style(&el, "transform", &t);
    }
    if let Some(el) = document.get_element_by_id(BLOB_SECONDARY_ID) {
        let t = input::parallax_transform(scroll_y, BLOB_SECONDARY_SHIFT, BLOB_SECONDARY_ROTATE);
        dom::set_style(&el, "transform", &t);
    }
    let particles = document.get_elements_by_class_name(PARTICLE_CLASS);
    for i in 0..particles.length() {
        if let Some(el) = particles.item(i) {
            let t = input::parallax_transform(scroll_y, input::particle_shift(i as usize), 0.0);
            dom::set_style(&el, "transform", &t);
        }
    }
}

/// Move the decorative glow under the pointer.
pub fn sync_pointer(document: &web::Document, window: &web::Window, state: &ViewportState) {
    let Some(backdrop) = document.get_element_by_id(BACKDROP_ID) else {
        return;
    };
    let (vw, vh) = dom::viewport_size(window);
    let pointer = Vec2::new(state.pointer.x, state.pointer.y);
    let (x, y) = input::pointer_glow_percent(pointer, Vec2::new(vw, vh));
    dom::set_style(&backdrop, POINTER_X_VAR, &x);
    dom::set_style(&backdrop, POINTER_Y_VAR, &y);
}
