// Host-side tests for the viewport tracker.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod section {
        include!("../src/core/section.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod tracker {
        include!("../src/core/tracker.rs");
    }
}

use crate::core::section::{SectionId, SECTION_ORDER};
use crate::core::state::ViewportState;
use crate::core::tracker::{SectionGeometry, SectionLayout, TrackerConfig, ViewportTracker};

/// Sections stacked top to bottom with the given heights.
fn stacked(heights: &[(SectionId, f64)]) -> Vec<(SectionId, SectionGeometry)> {
    let mut top = 0.0;
    heights
        .iter()
        .map(|&(id, h)| {
            let g = SectionGeometry::new(top, h);
            top += h;
            (id, g)
        })
        .collect()
}

fn layout_of(sections: Vec<(SectionId, SectionGeometry)>) -> impl Fn(SectionId) -> Option<SectionGeometry> {
    move |id: SectionId| sections.iter().find(|(s, _)| *s == id).map(|(_, g)| *g)
}

fn page() -> impl Fn(SectionId) -> Option<SectionGeometry> {
    layout_of(stacked(&[
        (SectionId::Home, 800.0),
        (SectionId::About, 900.0),
        (SectionId::Experience, 1200.0),
        (SectionId::Projects, 1000.0),
        (SectionId::Skills, 700.0),
        (SectionId::Contact, 500.0),
    ]))
}

fn unset_state() -> ViewportState {
    ViewportState {
        active: None,
        ..ViewportState::default()
    }
}

#[test]
fn default_state_starts_on_home_with_nothing_visited() {
    let state = ViewportState::default();
    assert_eq!(state.active, Some(SectionId::Home));
    assert!(state.visited.is_empty());
    assert_eq!(state.scroll_y, 0.0);
}

#[test]
fn top_of_page_activates_first_section() {
    let tracker = ViewportTracker::default();
    let layout = layout_of(vec![(SectionId::Home, SectionGeometry::new(0.0, 800.0))]);
    let mut state = unset_state();

    let outcome = tracker.recompute(&layout, &mut state, 0.0, 800.0);

    assert_eq!(state.active, Some(SectionId::Home));
    assert_eq!(outcome.active_changed, Some((None, SectionId::Home)));
}

#[test]
fn probe_past_last_section_keeps_previous_active() {
    let tracker = ViewportTracker::default();
    let layout = page();
    let mut state = unset_state();

    tracker.recompute(&layout, &mut state, 4000.0, 800.0); // probe 4100, inside skills
    assert_eq!(state.active, Some(SectionId::Skills));

    // Total height is 5100; probe 6100 is past contact's bottom.
    let outcome = tracker.recompute(&layout, &mut state, 6000.0, 800.0);
    assert_eq!(state.active, Some(SectionId::Skills));
    assert_eq!(outcome.active_changed, None);
}

#[test]
fn probe_before_first_section_keeps_previous_active() {
    let tracker = ViewportTracker::default();
    let layout = layout_of(vec![(SectionId::About, SectionGeometry::new(500.0, 500.0))]);
    let mut state = ViewportState::default();

    tracker.recompute(&layout, &mut state, 0.0, 800.0);
    assert_eq!(state.active, Some(SectionId::Home));

    let mut unset = unset_state();
    tracker.recompute(&layout, &mut unset, 0.0, 800.0);
    assert_eq!(unset.active, None);
}

#[test]
fn section_becomes_visible_only_past_the_margin() {
    let tracker = ViewportTracker::default();
    let layout = layout_of(vec![
        (SectionId::Home, SectionGeometry::new(0.0, 1000.0)),
        (SectionId::About, SectionGeometry::new(1000.0, 600.0)),
    ]);
    let mut state = unset_state();

    // window bottom 1050: 1050 > 1100 is false
    tracker.recompute(&layout, &mut state, 0.0, 1050.0);
    assert!(!state.is_visited(SectionId::About));
    assert!(state.is_visited(SectionId::Home));

    // window bottom 1101
    let outcome = tracker.recompute(&layout, &mut state, 0.0, 1101.0);
    assert!(state.is_visited(SectionId::About));
    assert_eq!(outcome.revealed.as_slice(), &[SectionId::About]);
}

#[test]
fn section_scrolled_entirely_past_is_not_newly_visible() {
    let tracker = ViewportTracker::default();
    let layout = page();
    let mut state = unset_state();

    // Jump straight to projects: home (0..800) is above the viewport.
    tracker.recompute(&layout, &mut state, 3000.0, 800.0);
    assert!(!state.is_visited(SectionId::Home));
    assert!(state.is_visited(SectionId::Projects));
}

#[test]
fn visited_set_only_grows() {
    let tracker = ViewportTracker::default();
    let layout = page();
    let mut state = unset_state();
    let mut previous = state.visited.clone();

    for offset in [0.0, 400.0, 1500.0, 2900.0, 4400.0, 5000.0, 2000.0, 0.0, 3000.0] {
        tracker.recompute(&layout, &mut state, offset, 800.0);
        assert!(
            state.visited.is_superset(&previous),
            "visited shrank at offset {offset}"
        );
        previous = state.visited.clone();
    }
    assert_eq!(state.visited.len(), SECTION_ORDER.len());
}

#[test]
fn active_is_always_one_known_section() {
    let tracker = ViewportTracker::default();
    let layout = page();
    let mut state = unset_state();

    let mut offset = 0.0;
    while offset < 6000.0 {
        tracker.recompute(&layout, &mut state, offset, 800.0);
        let active = state.active.expect("probe starts inside home");
        assert!(SECTION_ORDER.contains(&active));
        offset += 137.0;
    }
}

#[test]
fn recompute_is_idempotent() {
    let tracker = ViewportTracker::default();
    let layout = page();
    let mut state = unset_state();

    let first = tracker.recompute(&layout, &mut state, 1700.0, 900.0);
    assert!(!first.is_empty());
    let active = state.active;
    let visited = state.visited.clone();

    let second = tracker.recompute(&layout, &mut state, 1700.0, 900.0);
    assert!(second.is_empty());
    assert_eq!(state.active, active);
    assert_eq!(state.visited, visited);
}

#[test]
fn probe_range_is_half_open() {
    let tracker = ViewportTracker::default();
    let layout = page();
    let mut state = unset_state();

    // probe = 799 is the last pixel of home
    tracker.recompute(&layout, &mut state, 699.0, 800.0);
    assert_eq!(state.active, Some(SectionId::Home));

    // probe = 800 is home's bottom and about's top
    tracker.recompute(&layout, &mut state, 700.0, 800.0);
    assert_eq!(state.active, Some(SectionId::About));
}

#[test]
fn overlapping_sections_resolve_to_first_in_order() {
    let tracker = ViewportTracker::default();
    let layout = layout_of(vec![
        (SectionId::Home, SectionGeometry::new(0.0, 1000.0)),
        (SectionId::About, SectionGeometry::new(500.0, 1000.0)),
    ]);
    let mut state = unset_state();

    tracker.recompute(&layout, &mut state, 600.0, 800.0);
    assert_eq!(state.active, Some(SectionId::Home));
}

#[test]
fn unmeasurable_sections_are_skipped() {
    let tracker = ViewportTracker::default();
    // No contact element, like a page whose last section has not attached yet.
    let layout = layout_of(stacked(&[
        (SectionId::Home, 800.0),
        (SectionId::About, 900.0),
        (SectionId::Experience, 1200.0),
        (SectionId::Projects, 1000.0),
        (SectionId::Skills, 700.0),
    ]));
    let mut state = unset_state();

    for offset in [0.0, 2000.0, 4000.0, 5000.0] {
        tracker.recompute(&layout, &mut state, offset, 800.0);
    }
    assert!(!state.is_visited(SectionId::Contact));
    assert_eq!(state.active, Some(SectionId::Skills));
}

#[test]
fn non_finite_geometry_is_treated_as_absent() {
    let tracker = ViewportTracker::default();
    let layout = |id: SectionId| match id {
        SectionId::Home => Some(SectionGeometry::new(f64::NAN, 800.0)),
        SectionId::About => Some(SectionGeometry::new(0.0, f64::INFINITY)),
        _ => None,
    };
    let mut state = unset_state();

    let outcome = tracker.recompute(&layout, &mut state, 0.0, 800.0);
    assert!(outcome.is_empty());
    assert_eq!(state.active, None);
    assert!(state.visited.is_empty());
}

#[test]
fn revealed_lists_first_time_sections_in_display_order() {
    let tracker = ViewportTracker::default();
    let layout = page();
    let mut state = unset_state();

    // Tall viewport covering home, about and experience.
    let outcome = tracker.recompute(&layout, &mut state, 0.0, 2500.0);
    assert_eq!(
        outcome.revealed.as_slice(),
        &[SectionId::Home, SectionId::About, SectionId::Experience]
    );

    let outcome = tracker.recompute(&layout, &mut state, 100.0, 2500.0);
    assert!(outcome.revealed.is_empty());
}

#[test]
fn recompute_records_scroll_offset() {
    let tracker = ViewportTracker::default();
    let mut state = unset_state();
    let nothing = |_: SectionId| -> Option<SectionGeometry> { None };

    tracker.recompute(&nothing, &mut state, 321.5, 800.0);
    assert_eq!(state.scroll_y, 321.5);
}

#[test]
fn custom_config_moves_both_thresholds() {
    let config = TrackerConfig {
        visibility_margin: 0.0,
        active_offset: 0.0,
    };
    let tracker = ViewportTracker::new(config);
    let layout = layout_of(vec![
        (SectionId::Home, SectionGeometry::new(0.0, 1000.0)),
        (SectionId::About, SectionGeometry::new(1000.0, 600.0)),
    ]);
    let mut state = unset_state();

    tracker.recompute(&layout, &mut state, 950.0, 60.0);
    assert!(state.is_visited(SectionId::About));
    assert_eq!(state.active, Some(SectionId::Home));

    tracker.recompute(&layout, &mut state, 1000.0, 60.0);
    assert_eq!(state.active, Some(SectionId::About));
}

#[test]
fn tracker_restricted_to_subset_ignores_other_sections() {
    let tracker =
        ViewportTracker::with_sections(TrackerConfig::default(), &[SectionId::Projects]);
    let layout = page();
    let mut state = unset_state();

    tracker.recompute(&layout, &mut state, 0.0, 800.0);
    assert_eq!(state.active, None);
    assert!(state.visited.is_empty());
    assert_eq!(tracker.sections(), &[SectionId::Projects]);
}

#[test]
fn pointer_updates_do_not_touch_tracking_state() {
    let tracker = ViewportTracker::default();
    let layout = page();
    let mut state = unset_state();
    tracker.recompute(&layout, &mut state, 1000.0, 800.0);
    let active = state.active;
    let visited = state.visited.clone();

    state.set_pointer(12.0, 34.0);
    assert_eq!(state.pointer.x, 12.0);
    assert_eq!(state.pointer.y, 34.0);
    assert_eq!(state.active, active);
    assert_eq!(state.visited, visited);
}

#[test]
fn unknown_section_ids_do_not_resolve() {
    assert_eq!(SectionId::from_dom_id("blog"), None);
    assert_eq!(SectionId::from_dom_id(""), None);
    assert_eq!(SectionId::from_dom_id("Home"), None);
}

#[test]
fn section_ids_round_trip_through_dom_ids() {
    for id in SECTION_ORDER {
        assert_eq!(SectionId::from_dom_id(id.dom_id()), Some(id));
        assert!(id.label().starts_with(|c: char| c.is_ascii_uppercase()));
        assert_eq!(id.label().to_lowercase(), id.dom_id());
    }
}

#[test]
fn layout_trait_accepts_closures() {
    let layout = |id: SectionId| (id == SectionId::About).then(|| SectionGeometry::new(10.0, 5.0));
    assert_eq!(
        layout.geometry(SectionId::About).map(|g| g.bottom()),
        Some(15.0)
    );
    assert_eq!(layout.geometry(SectionId::Home), None);
}
