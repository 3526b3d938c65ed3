// Numeric tuning shared by the pure interaction logic.
// Times are milliseconds, distances are CSS pixels.

// Grid background
pub const GRID_STRIDE: f64 = 50.0;
pub const GRID_MAX_DISTANCE: f64 = 150.0; // pointer influence radius
pub const GRID_BASE_OPACITY: f64 = 0.15;
pub const GRID_BASE_RADIUS: f64 = 1.0;
pub const GRID_OPACITY_GAIN: f64 = 0.4; // added at distance 0
pub const GRID_RADIUS_GAIN: f64 = 2.0;
pub const GRID_LINK_OPACITY_RATIO: f64 = 0.5;
pub const GRID_OVERLAY_OPACITY: f64 = 0.08;
pub const GRID_LINE_WIDTH: f64 = 0.5;

// Expandable cards
pub const CARD_EXPAND_SCALE: f64 = 2.5;
pub const CARD_SETTLE_MS: u32 = 500;

// Pointer micro-interactions
pub const MAGNETIC_STRENGTH: f64 = 0.1;
pub const TILT_DIVISOR: f64 = 20.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const HERO_PARALLAX_SPEED: f64 = 0.3;
pub const HERO_FADE_SPAN: f64 = 0.5; // opacity lost across the full hero height
pub const IMAGE_PARALLAX_DEFAULT_SPEED: f64 = 0.1;
pub const WORK_ITEM_DIM_OPACITY: f64 = 0.5;

// Lifecycle
pub const LOADER_HIDE_MS: u32 = 1800;
pub const LOADER_RELEASE_MS: u32 = 100;
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;
pub const ANCHOR_HEADER_OFFSET: f64 = 100.0;

// Counters
pub const COUNTER_DURATION_MS: u32 = 1500;
pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_DEFAULT_SUFFIX: &str = "+";

// Service carousel
pub const CAROUSEL_PERIOD_MS: u32 = 2000;
