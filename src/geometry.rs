//! Star path generation: layout, outline vertices, and fill clipping.
//!
//! Pure geometry over the configuration — nothing here touches the canvas or
//! mutates state. The renderer consumes the outputs of this module to issue
//! draw calls; the same outputs back the engine's unit tests.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::config::{RatingConfig, StarSize};
use crate::consts::{FRAC_PI_5, STAR_INNER_RATIO};
use crate::error::RatingError;

/// A point in canvas space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One star slot: a center point plus the star dimensions.
///
/// Recomputed on every layout pass; geometry is identical across stars of
/// equal size, so only the center varies along the row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGeometry {
    /// Center of the star's bounding box.
    pub center: Point,
    /// The star's bounding-box dimensions.
    pub size: StarSize,
}

impl StarGeometry {
    /// The 10-vertex star outline.
    ///
    /// Outer and inner vertices alternate on the ellipse matched to the star
    /// size, starting at the top point, so tracing them in order yields a
    /// non-self-intersecting outline suitable for filling and stroking.
    #[must_use]
    pub fn outline(&self) -> Vec<Point> {
        let rx_outer = self.size.width / 2.0;
        let ry_outer = self.size.height / 2.0;
        let rx_inner = rx_outer * STAR_INNER_RATIO;
        let ry_inner = ry_outer * STAR_INNER_RATIO;

        let offset = std::f64::consts::FRAC_PI_2;

        (0..10u32)
            .map(|i| {
                let angle = FRAC_PI_5.mul_add(f64::from(i), -offset);
                let (rx, ry) = if i % 2 == 0 {
                    (rx_outer, ry_outer)
                } else {
                    (rx_inner, ry_inner)
                };
                Point::new(
                    rx.mul_add(angle.cos(), self.center.x),
                    ry.mul_add(angle.sin(), self.center.y),
                )
            })
            .collect()
    }

    /// Bounding box of this star slot.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.center.x - self.size.width / 2.0,
            y: self.center.y - self.size.height / 2.0,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

/// Where a star's filled region extends, for a given fill fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillPath {
    /// No filled region.
    Empty,
    /// The whole star outline is filled.
    Full,
    /// The star outline intersected with `clip` — a left-to-right wipe.
    Partial {
        /// Rectangle from the star's left edge to the fill boundary.
        clip: Rect,
    },
}

/// Lay out all star slots left to right, vertically centered in the viewport.
///
/// Star `i` is centered at `x = i * (star_width + padding) + star_width / 2`.
///
/// # Errors
///
/// Returns `InvalidConfiguration` when the configuration fails
/// [`RatingConfig::validate`].
pub fn layout(
    config: &RatingConfig,
    viewport_h: f64,
) -> Result<Vec<StarGeometry>, RatingError> {
    config.validate()?;

    let slot = config.slot_width();
    let half_width = config.star_size.width / 2.0;
    let center_y = viewport_h / 2.0;

    Ok((0..config.number_of_stars)
        .map(|i| StarGeometry {
            center: Point::new(f64::from(i).mul_add(slot, half_width), center_y),
            size: config.star_size,
        })
        .collect())
}

/// The fill sub-path for one star at fill fraction `fraction`.
///
/// Fractions at or below zero produce nothing, at or above one the full
/// outline; anything between clips the outline to the leftmost
/// `fraction * star_width` of the bounding box, so partial ratings render a
/// visually partial star rather than an all-or-nothing one.
#[must_use]
pub fn fill_path(star: &StarGeometry, fraction: f64) -> FillPath {
    if fraction <= 0.0 {
        return FillPath::Empty;
    }
    if fraction >= 1.0 {
        return FillPath::Full;
    }
    let bounds = star.bounds();
    FillPath::Partial {
        clip: Rect {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width * fraction,
            height: bounds.height,
        },
    }
}

/// Natural content size of the whole row, as `(width, height)`:
/// `n` stars plus `n - 1` gaps.
#[must_use]
pub fn intrinsic_size(config: &RatingConfig) -> (f64, f64) {
    let stars = f64::from(config.number_of_stars);
    let gaps = f64::from(config.number_of_stars.saturating_sub(1));
    (
        stars.mul_add(config.star_size.width, gaps * config.padding()),
        config.star_size.height,
    )
}
