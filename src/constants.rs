/// DOM hooks and decorative tuning shared by the markup builder and the DOM layer.
///
/// Element ids and class names live here so the generated HTML and the code
/// that later queries it cannot drift apart.
// Mount point provided by index.html
pub const APP_ROOT_ID: &str = "app";

// Generated element ids
pub const NAV_ID: &str = "site-nav";
pub const BACKDROP_ID: &str = "backdrop";
pub const BLOB_PRIMARY_ID: &str = "blob-primary";
pub const BLOB_SECONDARY_ID: &str = "blob-secondary";
pub const PARTICLE_CLASS: &str = "particle";

// Classes toggled from viewport state
pub const ACTIVE_CLASS: &str = "active"; // nav button of the active section
pub const VISIBLE_CLASS: &str = "visible"; // section that has been on screen
pub const REVEAL_CLASS: &str = "reveal"; // children that fade in once the section is visible

// Click targets
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const SCROLL_TO_ATTR: &str = "data-scroll-to";

// Pointer glow custom properties on the backdrop
pub const POINTER_X_VAR: &str = "--pointer-x";
pub const POINTER_Y_VAR: &str = "--pointer-y";

// Parallax: translate px per scrolled px, rotate deg per scrolled px
pub const BLOB_PRIMARY_SHIFT: f64 = 0.3;
pub const BLOB_PRIMARY_ROTATE: f64 = 0.1;
pub const BLOB_SECONDARY_SHIFT: f64 = -0.2;
pub const BLOB_SECONDARY_ROTATE: f64 = -0.05;

// Floating particles
pub const PARTICLE_COUNT: usize = 12;
pub const PARTICLE_SHIFT_BASE: f64 = 0.1;
pub const PARTICLE_SHIFT_STEP: f64 = 0.02;
pub const PARTICLE_LEFT_STRIDE: usize = 73; // left % = i * stride mod 100
pub const PARTICLE_TOP_STRIDE: usize = 47;
pub const PARTICLE_BASE_DURATION_SEC: f32 = 8.0;
pub const PARTICLE_DURATION_STEP_SEC: f32 = 2.0;
pub const PARTICLE_DELAY_STEP_SEC: f32 = 0.5;

// Staggered reveal of cards within a section
pub const STAGGER_STEP_MS: u32 = 200;
