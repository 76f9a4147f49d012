//! Pointer input: the tap/swipe gesture state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up. A press that never moves beyond the tap slop resolves to a
//! tap on release; once movement exceeds the slop the gesture becomes a
//! swipe and the rating tracks the pointer until release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::TAP_SLOP_PX;

/// State of the gesture recognizer between pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is down but has not moved beyond the tap slop.
    Pressed {
        /// Horizontal position at pointer-down, used to measure movement.
        start_x: f64,
    },
    /// Movement exceeded the slop; the rating tracks the pointer.
    Swiping,
}

impl InputState {
    /// Whether `x` is far enough from the press origin to count as a swipe.
    #[must_use]
    pub fn exceeds_slop(self, x: f64) -> bool {
        match self {
            Self::Idle => false,
            Self::Pressed { start_x } => (x - start_x).abs() > TAP_SLOP_PX,
            Self::Swiping => true,
        }
    }
}
