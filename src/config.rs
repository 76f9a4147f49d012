//! Widget configuration: star dimensions, counts, colors, and edit flags.
//!
//! `RatingConfig` is the full bundle owned by the facade; it is validated
//! before it is ever used for layout, so the renderer never sees degenerate
//! geometry. `ConfigPatch` is a sparse-update mirror for incremental edits
//! from the host — only present fields are applied, and the patched result
//! is re-validated as a whole before it replaces the current configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LINE_WIDTH, DEFAULT_PADDING_RATIO};
use crate::error::RatingError;

/// The individual size for each star, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarSize {
    pub width: f64,
    pub height: f64,
}

impl StarSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Smallest permitted increment between distinct ratings.
///
/// `Quarter` is the constructor default and explicitly supersedes the
/// half-step contract; half-step rounding is the floor whenever quarter
/// steps are not enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Whole-star ratings only.
    Integer,
    /// Half-star steps.
    Half,
    /// Quarter-star steps.
    #[default]
    Quarter,
}

impl Granularity {
    /// The rounding step for this granularity.
    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            Self::Integer => 1.0,
            Self::Half => 0.5,
            Self::Quarter => 0.25,
        }
    }
}

/// Full widget configuration.
///
/// Owned by the facade and immutable per render pass. Colors are CSS color
/// strings passed straight through to the canvas context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// The individual size for each star.
    pub star_size: StarSize,
    /// The total number of stars to show.
    pub number_of_stars: u32,
    /// The space between each star. `None` selects the default of
    /// [`DEFAULT_PADDING_RATIO`] of the per-star width.
    pub padding: Option<f64>,
    /// The width of the stroke around the stars.
    pub line_width: f64,
    /// Rounding step for rating values.
    pub granularity: Granularity,
    /// The fill color of the stars.
    pub fill_color: String,
    /// The unfilled color of the stars.
    pub unfilled_color: String,
    /// The color of the star's stroke.
    pub stroke_color: String,
    /// Whether the user can change the rating at all.
    pub editable: bool,
    /// Allow rating changes by tapping, if `editable` is set.
    pub allows_tap_when_editable: bool,
    /// Allow rating changes by swiping, if `editable` is set.
    pub allows_swipe_when_editable: bool,
}

impl RatingConfig {
    /// Create a configuration from the required initial state; all other
    /// options take their documented defaults.
    #[must_use]
    pub fn new(
        star_size: StarSize,
        number_of_stars: u32,
        fill_color: &str,
        unfilled_color: &str,
        stroke_color: &str,
    ) -> Self {
        Self {
            star_size,
            number_of_stars,
            padding: None,
            line_width: DEFAULT_LINE_WIDTH,
            granularity: Granularity::default(),
            fill_color: fill_color.to_owned(),
            unfilled_color: unfilled_color.to_owned(),
            stroke_color: stroke_color.to_owned(),
            editable: false,
            allows_tap_when_editable: true,
            allows_swipe_when_editable: true,
        }
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the JSON is malformed or the parsed
    /// configuration fails [`RatingConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, RatingError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| RatingError::invalid(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Effective padding: the explicit value, or the default fraction of the
    /// star width.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
            .unwrap_or(self.star_size.width * DEFAULT_PADDING_RATIO)
    }

    /// Horizontal extent of one star slot (star width plus padding).
    #[must_use]
    pub fn slot_width(&self) -> f64 {
        self.star_size.width + self.padding()
    }

    /// Check that this configuration can produce a valid render.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the star count is zero, a star
    /// dimension is not strictly positive and finite, or padding / line
    /// width are negative or non-finite.
    pub fn validate(&self) -> Result<(), RatingError> {
        if self.number_of_stars < 1 {
            return Err(RatingError::invalid("number of stars must be at least 1"));
        }
        if !(self.star_size.width.is_finite() && self.star_size.width > 0.0) {
            return Err(RatingError::invalid("star width must be positive"));
        }
        if !(self.star_size.height.is_finite() && self.star_size.height > 0.0) {
            return Err(RatingError::invalid("star height must be positive"));
        }
        if let Some(padding) = self.padding {
            if !(padding.is_finite() && padding >= 0.0) {
                return Err(RatingError::invalid("padding must be non-negative"));
            }
        }
        if !(self.line_width.is_finite() && self.line_width >= 0.0) {
            return Err(RatingError::invalid("line width must be non-negative"));
        }
        Ok(())
    }

    /// Convenience for hosts that think in terms of allowing quarter
    /// ratings: quarter granularity when allowed, half steps otherwise.
    pub fn allow_quarter_ratings(&mut self, allowed: bool) {
        self.granularity = if allowed { Granularity::Quarter } else { Granularity::Half };
    }

    /// Return a copy with every present field of `patch` applied.
    /// The caller is responsible for validating the result.
    #[must_use]
    pub fn patched(&self, patch: &ConfigPatch) -> Self {
        let mut next = self.clone();
        if let Some(star_size) = patch.star_size {
            next.star_size = star_size;
        }
        if let Some(number_of_stars) = patch.number_of_stars {
            next.number_of_stars = number_of_stars;
        }
        if let Some(padding) = patch.padding {
            next.padding = Some(padding);
        }
        if let Some(line_width) = patch.line_width {
            next.line_width = line_width;
        }
        if let Some(granularity) = patch.granularity {
            next.granularity = granularity;
        }
        if let Some(ref fill_color) = patch.fill_color {
            next.fill_color = fill_color.clone();
        }
        if let Some(ref unfilled_color) = patch.unfilled_color {
            next.unfilled_color = unfilled_color.clone();
        }
        if let Some(ref stroke_color) = patch.stroke_color {
            next.stroke_color = stroke_color.clone();
        }
        if let Some(editable) = patch.editable {
            next.editable = editable;
        }
        if let Some(allows_tap) = patch.allows_tap_when_editable {
            next.allows_tap_when_editable = allows_tap;
        }
        if let Some(allows_swipe) = patch.allows_swipe_when_editable {
            next.allows_swipe_when_editable = allows_swipe;
        }
        next
    }
}

/// Sparse update for a `RatingConfig`. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigPatch {
    /// New star size, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_size: Option<StarSize>,
    /// New star count, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_stars: Option<u32>,
    /// New explicit padding, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    /// New stroke width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    /// New granularity, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    /// New fill color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// New unfilled color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfilled_color: Option<String>,
    /// New stroke color, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    /// New editable flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    /// New tap flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_tap_when_editable: Option<bool>,
    /// New swipe flag, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_swipe_when_editable: Option<bool>,
}

impl ConfigPatch {
    /// Parse a patch from JSON. Validation happens when the patch is applied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, RatingError> {
        serde_json::from_str(json).map_err(|err| RatingError::invalid(err.to_string()))
    }
}
