//! Shared numeric constants for the rating engine.

// ── Config defaults ─────────────────────────────────────────────

/// Default lowest rating a user can set.
pub const DEFAULT_MIN_RATING: u32 = 0;

/// Default highest rating, which is also the number of icons drawn.
pub const DEFAULT_MAX_RATING: u32 = 5;

/// Default floor for each icon's width and height, in points.
pub const DEFAULT_MIN_ICON_SIZE: f64 = 5.0;

// ── Half-step quantization ──────────────────────────────────────

/// Local fractions strictly above this claim the whole icon in half mode.
pub const HALF_UPPER_THRESHOLD: f64 = 0.75;

/// Local fractions strictly above this (and not above the upper threshold)
/// claim half the icon in half mode.
pub const HALF_LOWER_THRESHOLD: f64 = 0.25;
