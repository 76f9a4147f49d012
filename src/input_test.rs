use super::*;

#[test]
fn default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn idle_never_exceeds_slop() {
    assert!(!InputState::Idle.exceeds_slop(1e9));
}

#[test]
fn pressed_within_slop_is_not_a_swipe() {
    let state = InputState::Pressed { start_x: 100.0 };
    assert!(!state.exceeds_slop(100.0));
    assert!(!state.exceeds_slop(100.0 + TAP_SLOP_PX));
    assert!(!state.exceeds_slop(100.0 - TAP_SLOP_PX));
}

#[test]
fn pressed_beyond_slop_is_a_swipe() {
    let state = InputState::Pressed { start_x: 100.0 };
    assert!(state.exceeds_slop(100.0 + TAP_SLOP_PX + 0.1));
    assert!(state.exceeds_slop(100.0 - TAP_SLOP_PX - 0.1));
}

#[test]
fn swiping_always_exceeds_slop() {
    assert!(InputState::Swiping.exceeds_slop(0.0));
}

#[test]
fn pressed_stores_start_position() {
    let state = InputState::Pressed { start_x: 42.0 };
    assert_eq!(state, InputState::Pressed { start_x: 42.0 });
}
