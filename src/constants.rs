/// Page effect tuning constants.
///
/// Selectors and class names must match the page markup and stylesheet.
// Content top edge (CSS px from viewport top) at or below which the header stays hidden
pub const VISIBLE_TOP_THRESHOLD_PX: f64 = 150.0;

// Rate limit for header re-evaluation
pub const POLL_INTERVAL_MS: i32 = 250;

// Markup hooks
pub const FLOATING_HEADER_SELECTOR: &str = ".floating-header";
pub const CONTENT_SELECTOR: &str = ".content-wrapper";
pub const HERO_SELECTOR: &str = ".hero";

// Class toggled on the floating header
pub const VISIBLE_CLASS: &str = "visible";
