//! The rating facade: testable core plus the canvas-bound view.
//!
//! `RatingCore` owns the configuration, the current rating, and the gesture
//! state machine. Every mutation returns a batch of [`Action`]s for the host
//! to process; within a batch `RatingChanged` always precedes `RenderNeeded`,
//! so the listener is notified before any redraw happens.
//!
//! `RatingView` wraps the core with the browser canvas element, the single
//! rating-changed subscriber, and the renderer.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{ConfigPatch, RatingConfig, StarSize};
use crate::error::RatingError;
use crate::input::InputState;
use crate::{rating, render};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from core handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A user-driven rating change. Emitted at most once per discrete change;
    /// programmatic rating changes never produce this.
    RatingChanged { from: f64, to: f64 },
    /// The view must be redrawn.
    RenderNeeded,
}

/// Quantized ratings are exact step multiples, so any real change clears
/// epsilon.
fn changed(a: f64, b: f64) -> bool {
    (a - b).abs() > f64::EPSILON
}

/// Core widget state — all logic that doesn't depend on the canvas element.
///
/// Separated from `RatingView` so it can be tested without WASM/browser
/// dependencies.
pub struct RatingCore {
    config: RatingConfig,
    rating: f64,
    input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl RatingCore {
    /// Create a core from the required initial state; all other options take
    /// their documented defaults. The initial rating is clamped and
    /// quantized.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a zero star count or non-positive
    /// star dimensions.
    pub fn new(
        star_size: StarSize,
        number_of_stars: u32,
        rating: f64,
        fill_color: &str,
        unfilled_color: &str,
        stroke_color: &str,
    ) -> Result<Self, RatingError> {
        let config =
            RatingConfig::new(star_size, number_of_stars, fill_color, unfilled_color, stroke_color);
        config.validate()?;
        let rating = rating::normalized(rating, &config);
        Ok(Self {
            config,
            rating,
            input: InputState::Idle,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        })
    }

    // --- Configuration ---

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Apply a sparse configuration update.
    ///
    /// The patched configuration is validated as a whole before it replaces
    /// the current one; the current rating is re-clamped and re-quantized
    /// under the new configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` and leaves the configuration untouched
    /// if the patched result fails validation.
    pub fn apply(&mut self, patch: &ConfigPatch) -> Result<Vec<Action>, RatingError> {
        let next = self.config.patched(patch);
        next.validate()?;
        self.config = next;
        self.rating = rating::normalized(self.rating, &self.config);
        Ok(vec![Action::RenderNeeded])
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
        vec![Action::RenderNeeded]
    }

    // --- Rating ---

    /// The current rating.
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Per-star fill fractions for the current rating.
    #[must_use]
    pub fn fill_fractions(&self) -> Vec<f64> {
        rating::fill_fractions(self.rating, self.config.number_of_stars)
    }

    /// Set the rating programmatically. The value is clamped into the row and
    /// quantized to the configured granularity.
    ///
    /// Programmatic changes request a redraw but never emit `RatingChanged` —
    /// only interaction-driven changes notify the listener.
    pub fn set_rating(&mut self, value: f64) -> Vec<Action> {
        if !value.is_finite() {
            log::warn!("ignoring non-finite rating {value}");
            return Vec::new();
        }
        let next = rating::normalized(value, &self.config);
        if !changed(next, self.rating) {
            return Vec::new();
        }
        log::debug!("rating set to {next}");
        self.rating = next;
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Pointer pressed at horizontal offset `x` within the row.
    ///
    /// Ignored unless the view is editable. No rating change happens yet;
    /// the gesture resolves on movement or release.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `x` is not finite.
    pub fn on_pointer_down(&mut self, x: f64) -> Result<Vec<Action>, RatingError> {
        if !x.is_finite() {
            return Err(RatingError::OutOfBounds { value: x });
        }
        if self.config.editable {
            self.input = InputState::Pressed { start_x: x };
        }
        Ok(Vec::new())
    }

    /// Pointer moved to `x` while down.
    ///
    /// Once movement exceeds the tap slop the gesture becomes a swipe (if
    /// swiping is allowed) and the rating tracks the pointer continuously.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `x` is not finite.
    pub fn on_pointer_move(&mut self, x: f64) -> Result<Vec<Action>, RatingError> {
        if !x.is_finite() {
            return Err(RatingError::OutOfBounds { value: x });
        }
        match self.input {
            InputState::Idle => Ok(Vec::new()),
            InputState::Pressed { .. } => {
                if self.config.allows_swipe_when_editable && self.input.exceeds_slop(x) {
                    self.input = InputState::Swiping;
                    self.interaction_rating(x)
                } else {
                    Ok(Vec::new())
                }
            }
            InputState::Swiping => self.interaction_rating(x),
        }
    }

    /// Pointer released at `x`. A press that never left the slop is a tap and
    /// sets the rating at the release position (if tapping is allowed); a
    /// swipe takes its final update here.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `x` is not finite.
    pub fn on_pointer_up(&mut self, x: f64) -> Result<Vec<Action>, RatingError> {
        if !x.is_finite() {
            return Err(RatingError::OutOfBounds { value: x });
        }
        let state = self.input;
        self.input = InputState::Idle;
        match state {
            InputState::Idle => Ok(Vec::new()),
            InputState::Pressed { .. } => {
                if self.config.allows_tap_when_editable {
                    self.interaction_rating(x)
                } else {
                    Ok(Vec::new())
                }
            }
            InputState::Swiping => self.interaction_rating(x),
        }
    }

    /// Compute the rating at `x` and emit change actions if it differs from
    /// the current one.
    fn interaction_rating(&mut self, x: f64) -> Result<Vec<Action>, RatingError> {
        let next = rating::rating_from_position(x, &self.config)?;
        if !changed(next, self.rating) {
            return Ok(Vec::new());
        }
        let from = self.rating;
        self.rating = next;
        log::debug!("rating changed from {from} to {next} by interaction");
        Ok(vec![Action::RatingChanged { from, to: next }, Action::RenderNeeded])
    }
}

/// The full widget. Wraps `RatingCore` and owns the browser canvas element
/// plus the optional single rating-changed subscriber.
pub struct RatingView {
    canvas: HtmlCanvasElement,
    pub core: RatingCore,
    on_rating_changed: Option<Box<dyn FnMut(f64, f64)>>,
}

impl RatingView {
    /// Create a view bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a zero star count or non-positive
    /// star dimensions.
    pub fn new(
        canvas: HtmlCanvasElement,
        star_size: StarSize,
        number_of_stars: u32,
        rating: f64,
        fill_color: &str,
        unfilled_color: &str,
        stroke_color: &str,
    ) -> Result<Self, RatingError> {
        let core = RatingCore::new(
            star_size,
            number_of_stars,
            rating,
            fill_color,
            unfilled_color,
            stroke_color,
        )?;
        Ok(Self { canvas, core, on_rating_changed: None })
    }

    /// Register the rating-changed subscriber, replacing any previous one.
    /// The subscriber receives `(from, to)` for interaction-driven changes
    /// only.
    pub fn set_on_rating_changed(&mut self, callback: impl FnMut(f64, f64) + 'static) {
        self.on_rating_changed = Some(Box::new(callback));
    }

    // --- Delegated mutations; each processes the resulting actions ---

    /// Set the rating programmatically and redraw. The subscriber is not
    /// notified.
    ///
    /// # Errors
    ///
    /// Returns `Err` if redrawing fails.
    pub fn set_rating(&mut self, value: f64) -> Result<(), JsValue> {
        let actions = self.core.set_rating(value);
        self.process(&actions)
    }

    /// Apply a sparse configuration update and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the patched configuration is invalid or redrawing
    /// fails.
    pub fn apply(&mut self, patch: &ConfigPatch) -> Result<(), JsValue> {
        let actions = self.core.apply(patch).map_err(to_js)?;
        self.process(&actions)
    }

    /// Update viewport dimensions and device pixel ratio, then redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if redrawing fails.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        self.process(&actions)
    }

    /// Forward a pointer-down event.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a non-finite coordinate or a failed redraw.
    pub fn on_pointer_down(&mut self, x: f64) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_down(x).map_err(to_js)?;
        self.process(&actions)
    }

    /// Forward a pointer-move event.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a non-finite coordinate or a failed redraw.
    pub fn on_pointer_move(&mut self, x: f64) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_move(x).map_err(to_js)?;
        self.process(&actions)
    }

    /// Forward a pointer-up event.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a non-finite coordinate or a failed redraw.
    pub fn on_pointer_up(&mut self, x: f64) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_up(x).map_err(to_js)?;
        self.process(&actions)
    }

    /// Notify the subscriber, then redraw. Batch order guarantees the
    /// notification lands before the redraw.
    fn process(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        for action in actions {
            match *action {
                Action::RatingChanged { from, to } => {
                    if let Some(callback) = self.on_rating_changed.as_mut() {
                        callback(from, to);
                    }
                }
                Action::RenderNeeded => self.render()?,
            }
        }
        Ok(())
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context_2d()?;
        render::draw(
            &ctx,
            self.core.config(),
            &self.core.fill_fractions(),
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    fn context_2d(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let context = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?;
        context
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))
    }
}

fn to_js(err: RatingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
