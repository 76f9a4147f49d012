//! Shared numeric constants for the star rating engine.

// ── Math ────────────────────────────────────────────────────────

/// π / 5 (36°) — angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

/// Inner-to-outer radius ratio for a classic 5-point star silhouette.
pub const STAR_INNER_RATIO: f64 = 0.382;

// ── Input ───────────────────────────────────────────────────────

/// Horizontal movement in CSS pixels before a press counts as a swipe.
pub const TAP_SLOP_PX: f64 = 6.0;

// ── Configuration defaults ──────────────────────────────────────

/// Default stroke width around each star.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Default padding between stars, as a fraction of the per-star width.
pub const DEFAULT_PADDING_RATIO: f64 = 0.05;
