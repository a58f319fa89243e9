mod click;
mod pointer;
mod scroll;

use crate::core::{ViewportState, ViewportTracker};
use crate::dom::DomLayout;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use scroll::recompute;

/// Handles shared by every page listener.
#[derive(Clone)]
pub struct PageWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub root: web::Element,
    pub layout: DomLayout,
    pub tracker: Rc<ViewportTracker>,
    pub state: Rc<RefCell<ViewportState>>,
}

/// Listeners owned by a mounted page. Dropping this detaches all of them.
pub struct PageListeners {
    _scroll: EventListener,
    _mousemove: EventListener,
    _click: EventListener,
}

pub fn attach(w: &PageWiring) -> PageListeners {
    PageListeners {
        _scroll: scroll::wire_scroll(w),
        _mousemove: pointer::wire_mousemove(w),
        _click: click::wire_navigation_clicks(w),
    }
}
