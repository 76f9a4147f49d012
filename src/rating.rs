//! Rating math: fill fractions, quantization, and position mapping.
//!
//! Stateless helpers recomputed on every render or gesture update. The facade
//! owns the current rating; this module only transforms values.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

use crate::config::{Granularity, RatingConfig};
use crate::error::RatingError;

/// Per-star fill fractions for `rating`, distributed left to right.
///
/// Star `i` receives `clamp(rating - i, 0, 1)`: stars below the integer part
/// of the rating fill completely, the star spanning the fractional part fills
/// by exactly that fraction, and later stars stay empty. The fractions sum to
/// the rating (within floating rounding) whenever it fits in the row.
#[must_use]
pub fn fill_fractions(rating: f64, number_of_stars: u32) -> Vec<f64> {
    (0..number_of_stars)
        .map(|i| (rating - f64::from(i)).clamp(0.0, 1.0))
        .collect()
}

/// Round `raw` to the nearest permitted step for `granularity`.
///
/// Exact midpoints round away from zero. Quarter steps apply only when
/// quarter granularity is configured; half-step rounding is the floor under
/// any coarser setting.
#[must_use]
pub fn quantize(raw: f64, granularity: Granularity) -> f64 {
    let step = granularity.step();
    (raw / step).round() * step
}

/// Map a horizontal offset within the row to a quantized rating.
///
/// The raw rating is continuous — `x` divided by the star slot width —
/// then clamped to `[0, number_of_stars]` and quantized. Negative and
/// overflowing offsets clamp silently; that is deliberate.
///
/// # Errors
///
/// Returns `OutOfBounds` only when `x` is NaN or infinite.
pub fn rating_from_position(x: f64, config: &RatingConfig) -> Result<f64, RatingError> {
    if !x.is_finite() {
        return Err(RatingError::OutOfBounds { value: x });
    }
    let raw = x / config.slot_width();
    let clamped = raw.clamp(0.0, f64::from(config.number_of_stars));
    Ok(quantize(clamped, config.granularity))
}

/// Clamp and quantize a rating value under `config`.
///
/// Non-finite input collapses to zero; everything else is clamped into the
/// row and snapped to the configured granularity.
#[must_use]
pub fn normalized(rating: f64, config: &RatingConfig) -> f64 {
    if !rating.is_finite() {
        return 0.0;
    }
    let clamped = rating.clamp(0.0, f64::from(config.number_of_stars));
    quantize(clamped, config.granularity)
}
