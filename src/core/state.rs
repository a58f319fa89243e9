// Page-view state exposed to the rendering layer.
//
// One `ViewportState` exists per mounted page. It is owned by the page and
// handed to the tracker by reference on every signal; nothing here is global.

use super::section::SectionId;
use fnv::FnvHashSet;

/// Last-known pointer coordinates in client (viewport) pixels.
///
/// Decorative only: the background glow follows it, no decision reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug)]
pub struct ViewportState {
    /// Section highlighted in the navigation bar.
    pub active: Option<SectionId>,
    /// Sections that have overlapped the viewport at least once. Only grows.
    pub visited: FnvHashSet<SectionId>,
    pub pointer: PointerPosition,
    /// Scroll offset seen by the last recompute; drives the parallax background.
    pub scroll_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            active: Some(SectionId::Home),
            visited: FnvHashSet::default(),
            pointer: PointerPosition::default(),
            scroll_y: 0.0,
        }
    }
}

impl ViewportState {
    #[inline]
    pub fn is_visited(&self, id: SectionId) -> bool {
        self.visited.contains(&id)
    }

    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = PointerPosition { x, y };
    }
}
