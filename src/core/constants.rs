// Viewport tracking constants shared by the tracker and the DOM layer.

// A section counts as visible once the viewport bottom passes this far below
// its top edge, so reveals start slightly before the section fills the frame.
pub const VISIBILITY_MARGIN: f64 = 100.0;

// Added to the scroll offset to get the point that decides the active section.
pub const ACTIVE_OFFSET: f64 = 100.0;
