/// DOM hooks and host-side defaults for the web frontend.
///
/// Ripple tuning lives in `core::constants`; this file only holds values that
/// describe how the effect is attached to the page.
// Element ids
pub const CONTAINER_ID: &str = "container";
pub const PLAY_TOGGLE_ID: &str = "play-toggle";

// Container data attributes
pub const ATTR_IMAGE: &str = "data-image";
pub const ATTR_BRUSH: &str = "data-brush";
pub const ATTR_COLOR_SPACE: &str = "data-color-space";
pub const ATTR_PLAY_TOGGLE: &str = "data-play-toggle";

// Default asset locations, relative to the page
pub const DEFAULT_IMAGE_URL: &str = "assets/ocean.jpg";
pub const DEFAULT_BRUSH_URL: &str = "assets/brush.png";

// Canvas backing store never exceeds this many physical px per CSS px
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Procedural fallbacks when an asset cannot be loaded
pub const FALLBACK_BRUSH_SIZE: u32 = 128;
pub const FALLBACK_IMAGE_WIDTH: u32 = 400;
pub const FALLBACK_IMAGE_HEIGHT: u32 = 300;

// Frame statistics cadence (seconds)
pub const STATS_INTERVAL_SEC: f32 = 5.0;

// Composite clear colour; only visible before the first frame lands
pub const CLEAR_RGB: [f64; 3] = [0.0, 0.0, 0.0];
