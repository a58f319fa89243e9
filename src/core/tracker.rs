// Scroll-driven section tracking.
//
// On every scroll signal the tracker re-reads section geometry through a
// [`SectionLayout`] and updates a [`ViewportState`]:
//
// * the active section is the one containing `scroll_offset + active_offset`;
//   when no section contains the probe the previous value is kept;
// * a section becomes visited once `window_bottom > top + visibility_margin`
//   while `scroll_offset < bottom`, and stays visited for the page view.
//
// Sections the layout cannot measure are skipped for that tick.

use super::constants::{ACTIVE_OFFSET, VISIBILITY_MARGIN};
use super::section::{SectionId, SECTION_ORDER};
use super::state::ViewportState;
use smallvec::SmallVec;

/// Vertical extent of a section within the scrollable content, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    #[inline]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.top.is_finite() && self.height.is_finite()
    }
}

/// Read access to section measurements owned by the display layer.
pub trait SectionLayout {
    /// `None` when the section has no measurable element (yet).
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry>;
}

impl<F> SectionLayout for F
where
    F: Fn(SectionId) -> Option<SectionGeometry>,
{
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        self(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub visibility_margin: f64,
    pub active_offset: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            visibility_margin: VISIBILITY_MARGIN,
            active_offset: ACTIVE_OFFSET,
        }
    }
}

pub type RevealedSections = SmallVec<[SectionId; 6]>;

/// What a single recompute changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecomputeOutcome {
    /// `(previous, current)` when the active section moved.
    pub active_changed: Option<(Option<SectionId>, SectionId)>,
    /// Sections visited for the first time on this call, in display order.
    pub revealed: RevealedSections,
}

impl RecomputeOutcome {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active_changed.is_none() && self.revealed.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct ViewportTracker {
    config: TrackerConfig,
    sections: SmallVec<[SectionId; 6]>,
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl ViewportTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_sections(config, &SECTION_ORDER)
    }

    /// Track a custom ordered subset of sections. Order decides tie-breaks.
    pub fn with_sections(config: TrackerConfig, sections: &[SectionId]) -> Self {
        Self {
            config,
            sections: sections.iter().copied().collect(),
        }
    }

    #[inline]
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Visibility rule with the configured margin.
    #[inline]
    pub fn is_visible(
        &self,
        geometry: SectionGeometry,
        scroll_offset: f64,
        viewport_height: f64,
    ) -> bool {
        let window_bottom = scroll_offset + viewport_height;
        window_bottom > geometry.top + self.config.visibility_margin
            && scroll_offset < geometry.bottom()
    }

    /// Whether the active probe falls in `[top, bottom)`.
    #[inline]
    pub fn contains_probe(&self, geometry: SectionGeometry, scroll_offset: f64) -> bool {
        let probe = scroll_offset + self.config.active_offset;
        probe >= geometry.top && probe < geometry.bottom()
    }

    pub fn recompute<L: SectionLayout + ?Sized>(
        &self,
        layout: &L,
        state: &mut ViewportState,
        scroll_offset: f64,
        viewport_height: f64,
    ) -> RecomputeOutcome {
        let mut outcome = RecomputeOutcome::default();
        let mut next_active = None::<SectionId>;

        for &id in &self.sections {
            let Some(geometry) = layout.geometry(id).filter(SectionGeometry::is_finite) else {
                log::trace!("[tracker] section '{}' not measurable, skipped", id.dom_id());
                continue;
            };

            if self.is_visible(geometry, scroll_offset, viewport_height)
                && state.visited.insert(id)
            {
                outcome.revealed.push(id);
            }

            if next_active.is_none() && self.contains_probe(geometry, scroll_offset) {
                next_active = Some(id);
            }
        }

        if let Some(id) = next_active {
            if state.active != Some(id) {
                outcome.active_changed = Some((state.active, id));
                state.active = Some(id);
            }
        }
        state.scroll_y = scroll_offset;

        outcome
    }
}
