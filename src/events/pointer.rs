use super::PageWiring;
use crate::view;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_mousemove(w: &PageWiring) -> EventListener {
    let w = w.clone();
    let target = w.window.clone();
    EventListener::new(&target, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let mut state = w.state.borrow_mut();
        state.set_pointer(ev.client_x() as f32, ev.client_y() as f32);
        view::sync_pointer(&w.document, &w.window, &state);
    })
}
