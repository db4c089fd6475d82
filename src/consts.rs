//! Shared numeric constants for the sketchpad crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Maximum distance from a polyline segment that still counts as a body hit.
pub const BODY_HIT_TOLERANCE: f64 = 5.0;

/// Visual radius of a corner resize handle.
pub const HANDLE_RADIUS: f64 = 5.0;

/// Pointer slop around a handle centre: four times its visual radius.
pub const HANDLE_HIT_RADIUS: f64 = HANDLE_RADIUS * 4.0;

// ── Scaling ─────────────────────────────────────────────────────

/// Floor for the per-move scale factor. There is no ceiling.
pub const MIN_SCALE_FACTOR: f64 = 0.1;

// ── Text metrics ────────────────────────────────────────────────

/// Estimated glyph advance as a fraction of the font size.
pub const TEXT_WIDTH_FACTOR: f64 = 0.6;

/// Estimated line height as a multiple of the font size.
pub const TEXT_HEIGHT_FACTOR: f64 = 1.2;

/// Downward nudge of the estimated text box below the baseline.
pub const TEXT_BASELINE_OFFSET: f64 = 5.0;
