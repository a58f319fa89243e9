#![cfg(target_arch = "wasm32")]
use crate::constants::APP_ROOT_ID;
use crate::core::{Portfolio, ViewportState, ViewportTracker, SECTION_ORDER};
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod input;
mod markup;
mod view;

/// A page that is on screen and listening. Dropping it detaches every listener.
struct MountedPage {
    wiring: events::PageWiring,
    _listeners: events::PageListeners,
}

thread_local! {
    static PAGE: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");
    mount_page()
}

/// Render the portfolio into `#app` and start tracking the viewport.
#[wasm_bindgen]
pub fn mount_page() -> Result<(), JsValue> {
    mount().map_err(|e| {
        log::error!("mount error: {:?}", e);
        js_sys::Error::new(&format!("{:#}", e)).into()
    })
}

/// Tear the page down: listeners are detached and viewport state is discarded.
#[wasm_bindgen]
pub fn unmount() {
    let Some(page) = PAGE.with(|p| p.borrow_mut().take()) else {
        return;
    };
    page.wiring.root.set_inner_html("");
    drop(page);
    log::info!("portfolio-web unmounted");
}

/// Smoothly scroll to a section by its DOM id. Unknown ids are ignored.
#[wasm_bindgen]
pub fn scroll_to_section(id: &str) {
    if let Some(document) = dom::window_document() {
        dom::scroll_to_section(&document, id);
    }
}

fn mount() -> anyhow::Result<()> {
    if PAGE.with(|p| p.borrow().is_some()) {
        log::warn!("page already mounted");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(APP_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", APP_ROOT_ID))?;

    let portfolio = Portfolio::load().context("portfolio content failed validation")?;
    let state = ViewportState::default();
    root.set_inner_html(&markup::render_page(&portfolio, state.active));

    let wiring = events::PageWiring {
        window,
        layout: dom::DomLayout::new(document.clone()),
        document,
        root,
        tracker: Rc::new(ViewportTracker::default()),
        state: Rc::new(RefCell::new(state)),
    };

    // First paint: a page opened mid-scroll (reload, anchor) needs state before any event.
    events::recompute(&wiring);
    view::sync_all(&wiring.document, &wiring.state.borrow());

    let listeners = events::attach(&wiring);
    PAGE.with(|p| {
        *p.borrow_mut() = Some(MountedPage {
            wiring,
            _listeners: listeners,
        })
    });
    log::info!("portfolio-web mounted ({} sections)", SECTION_ORDER.len());
    Ok(())
}
