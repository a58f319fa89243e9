use super::PageWiring;
use crate::dom;
use crate::view;
use gloo::events::EventListener;

/// Re-run the tracker against the live layout and push the result to the DOM.
pub fn recompute(w: &PageWiring) {
    let Some((scroll_y, viewport_h)) = dom::scroll_metrics(&w.window) else {
        return;
    };
    let mut state = w.state.borrow_mut();
    let outcome = w
        .tracker
        .recompute(&w.layout, &mut state, scroll_y, viewport_h);
    view::apply(&w.document, &state, &outcome);
}

pub fn wire_scroll(w: &PageWiring) -> EventListener {
    let w = w.clone();
    let target = w.window.clone();
    EventListener::new(&target, "scroll", move |_ev| recompute(&w))
}
