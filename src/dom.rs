use crate::core::{SectionGeometry, SectionId, SectionLayout};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current `(scrollY, innerHeight)` of the window, if readable.
pub fn scroll_metrics(window: &web::Window) -> Option<(f64, f64)> {
    let scroll_y = window.scroll_y().ok()?;
    let viewport_h = window.inner_height().ok()?.as_f64()?;
    Some((scroll_y, viewport_h))
}

/// Viewport size in CSS pixels, `(0, 0)` when unavailable.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Section geometry read from the live document via `offsetTop`/`offsetHeight`.
#[derive(Clone)]
pub struct DomLayout {
    document: web::Document,
}

impl DomLayout {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl SectionLayout for DomLayout {
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        let el = self
            .document
            .get_element_by_id(id.dom_id())?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(SectionGeometry::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }
}

/// Smoothly scroll so the section's top edge meets the viewport top.
///
/// Ids outside the section list, or sections with no element, are ignored.
pub fn scroll_to_section(document: &web::Document, id: &str) {
    let Some(section) = SectionId::from_dom_id(id) else {
        log::debug!("[nav] ignoring scroll to unknown section '{}'", id);
        return;
    };
    let Some(el) = document.get_element_by_id(section.dom_id()) else {
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Set an inline style property on an element that is an `HtmlElement`.
#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}
