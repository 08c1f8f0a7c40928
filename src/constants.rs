//! Global constants for the Shelf webapp

/// Element id of the click counter display on the asset page
pub const DEFAULT_DISPLAY_ID: &str = "click-count";

/// Transform scale applied to the counter right after a click
pub const DEFAULT_POP_SCALE: f32 = 1.2;

/// Transform scale the counter rests at between clicks
pub const DEFAULT_REST_SCALE: f32 = 1.0;

/// Delay before a clicked counter scales back down, in milliseconds
pub const DEFAULT_RESET_DELAY_MS: u32 = 200;

/// CSS transition installed on the counter once the DOM is ready
pub const DEFAULT_TRANSITION: &str = "transform 0.2s ease";

/// Banner printed to the console when the module starts
pub const PAGE_LOAD_BANNER: &str = "Shelf Asset Router - Page loaded successfully!";
