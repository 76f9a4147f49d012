#![allow(clippy::float_cmp)]

use super::*;
use crate::config::Granularity;

// =============================================================
// Helpers
// =============================================================

/// 5 stars of width 20 with padding 5 — slot width 25 — rating 0.
fn make_core() -> RatingCore {
    RatingCore::new(StarSize::new(20.0, 20.0), 5, 0.0, "#D94B4B", "#E8E4DF", "#1F1A17").unwrap()
}

/// A `make_core` that is editable with explicit padding 5.
fn editable_core() -> RatingCore {
    let mut core = make_core();
    let patch = ConfigPatch {
        padding: Some(5.0),
        editable: Some(true),
        ..Default::default()
    };
    core.apply(&patch).unwrap();
    core
}

fn patch(f: impl FnOnce(&mut ConfigPatch)) -> ConfigPatch {
    let mut patch = ConfigPatch { padding: Some(5.0), editable: Some(true), ..Default::default() };
    f(&mut patch);
    patch
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn rating_changed(actions: &[Action]) -> Option<(f64, f64)> {
    actions.iter().find_map(|a| match a {
        Action::RatingChanged { from, to } => Some((*from, *to)),
        Action::RenderNeeded => None,
    })
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_starts_idle_with_zero_viewport() {
    let core = make_core();
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn new_quantizes_initial_rating() {
    let core =
        RatingCore::new(StarSize::new(20.0, 20.0), 5, 2.3, "#fff", "#eee", "#000").unwrap();
    // quarter granularity by default
    assert_eq!(core.rating(), 2.25);
}

#[test]
fn new_clamps_initial_rating_into_the_row() {
    let core =
        RatingCore::new(StarSize::new(20.0, 20.0), 5, 9.0, "#fff", "#eee", "#000").unwrap();
    assert_eq!(core.rating(), 5.0);
}

#[test]
fn new_rejects_zero_stars() {
    let result = RatingCore::new(StarSize::new(20.0, 20.0), 0, 0.0, "#fff", "#eee", "#000");
    assert!(matches!(result, Err(RatingError::InvalidConfiguration { .. })));
}

#[test]
fn new_rejects_non_positive_star_size() {
    let result = RatingCore::new(StarSize::new(0.0, 20.0), 5, 0.0, "#fff", "#eee", "#000");
    assert!(result.is_err());
}

// =============================================================
// Programmatic rating changes
// =============================================================

#[test]
fn set_rating_requests_render_without_notification() {
    let mut core = make_core();
    let actions = core.set_rating(4.0);
    assert!(has_render_needed(&actions));
    assert!(rating_changed(&actions).is_none());
    assert_eq!(core.rating(), 4.0);
}

#[test]
fn set_rating_from_two_to_four_redraws_only() {
    let mut core = make_core();
    core.set_rating(2.0);
    let actions = core.set_rating(4.0);
    assert_eq!(actions, vec![Action::RenderNeeded]);
}

#[test]
fn set_rating_same_value_is_a_no_op() {
    let mut core = make_core();
    core.set_rating(3.0);
    assert!(core.set_rating(3.0).is_empty());
}

#[test]
fn set_rating_clamps() {
    let mut core = make_core();
    core.set_rating(12.0);
    assert_eq!(core.rating(), 5.0);
    core.set_rating(-3.0);
    assert_eq!(core.rating(), 0.0);
}

#[test]
fn set_rating_quantizes_to_granularity() {
    let mut core = editable_core();
    core.apply(&patch(|p| p.granularity = Some(Granularity::Half))).unwrap();
    core.set_rating(2.3);
    assert_eq!(core.rating(), 2.5);
}

#[test]
fn set_rating_ignores_non_finite_values() {
    let mut core = make_core();
    core.set_rating(2.0);
    assert!(core.set_rating(f64::NAN).is_empty());
    assert_eq!(core.rating(), 2.0);
}

// =============================================================
// Configuration changes
// =============================================================

#[test]
fn set_viewport_requests_render() {
    let mut core = make_core();
    let actions = core.set_viewport(300.0, 60.0, 2.0);
    assert!(has_render_needed(&actions));
    assert_eq!(core.viewport_width, 300.0);
    assert_eq!(core.viewport_height, 60.0);
    assert_eq!(core.dpr, 2.0);
}

#[test]
fn apply_patch_requests_render() {
    let mut core = make_core();
    let actions = core
        .apply(&ConfigPatch { line_width: Some(2.0), ..Default::default() })
        .unwrap();
    assert!(has_render_needed(&actions));
    assert_eq!(core.config().line_width, 2.0);
}

#[test]
fn apply_invalid_patch_errors_and_preserves_config() {
    let mut core = make_core();
    let before = core.config().clone();
    let result = core.apply(&ConfigPatch { number_of_stars: Some(0), ..Default::default() });
    assert!(matches!(result, Err(RatingError::InvalidConfiguration { .. })));
    assert_eq!(core.config(), &before);
}

#[test]
fn apply_requantizes_rating_under_new_granularity() {
    let mut core = make_core();
    core.set_rating(2.25);
    core.apply(&ConfigPatch { granularity: Some(Granularity::Half), ..Default::default() })
        .unwrap();
    assert_eq!(core.rating(), 2.5);
}

#[test]
fn apply_reclamps_rating_under_new_star_count() {
    let mut core = make_core();
    core.set_rating(4.0);
    core.apply(&ConfigPatch { number_of_stars: Some(2), ..Default::default() }).unwrap();
    assert_eq!(core.rating(), 2.0);
}

// =============================================================
// Taps
// =============================================================

#[test]
fn tap_sets_rating_at_release_position() {
    let mut core = editable_core();
    core.on_pointer_down(77.5).unwrap();
    let actions = core.on_pointer_up(77.5).unwrap();
    // x 77.5 / slot 25 = raw 3.1 -> quarter steps -> 3.0
    assert_eq!(core.rating(), 3.0);
    assert_eq!(rating_changed(&actions), Some((0.0, 3.0)));
    assert!(has_render_needed(&actions));
}

#[test]
fn tap_notification_precedes_render_request() {
    let mut core = editable_core();
    core.on_pointer_down(77.5).unwrap();
    let actions = core.on_pointer_up(77.5).unwrap();
    let changed_at = actions
        .iter()
        .position(|a| matches!(a, Action::RatingChanged { .. }))
        .unwrap();
    let render_at = actions
        .iter()
        .position(|a| matches!(a, Action::RenderNeeded))
        .unwrap();
    assert!(changed_at < render_at);
}

#[test]
fn tap_when_not_editable_changes_nothing() {
    let mut core = make_core();
    core.set_rating(2.0);
    assert!(core.on_pointer_down(100.0).unwrap().is_empty());
    assert!(core.on_pointer_up(100.0).unwrap().is_empty());
    assert_eq!(core.rating(), 2.0);
}

#[test]
fn tap_when_taps_disallowed_changes_nothing() {
    let mut core = editable_core();
    core.apply(&patch(|p| p.allows_tap_when_editable = Some(false))).unwrap();
    core.on_pointer_down(100.0).unwrap();
    let actions = core.on_pointer_up(100.0).unwrap();
    assert!(actions.is_empty());
    assert_eq!(core.rating(), 0.0);
}

#[test]
fn tap_at_current_rating_emits_nothing() {
    let mut core = editable_core();
    core.set_rating(4.0);
    core.on_pointer_down(100.0).unwrap();
    // x 100 resolves to exactly 4.0 again
    let actions = core.on_pointer_up(100.0).unwrap();
    assert!(actions.is_empty());
}

#[test]
fn successive_taps_chain_from_and_to() {
    let mut core = editable_core();
    core.on_pointer_down(50.0).unwrap();
    let first = core.on_pointer_up(50.0).unwrap();
    assert_eq!(rating_changed(&first), Some((0.0, 2.0)));

    core.on_pointer_down(100.0).unwrap();
    let second = core.on_pointer_up(100.0).unwrap();
    assert_eq!(rating_changed(&second), Some((2.0, 4.0)));
}

// =============================================================
// Swipes
// =============================================================

#[test]
fn swipe_tracks_the_pointer_continuously() {
    let mut core = editable_core();
    core.on_pointer_down(10.0).unwrap();

    let first = core.on_pointer_move(50.0).unwrap();
    assert_eq!(rating_changed(&first), Some((0.0, 2.0)));

    let second = core.on_pointer_move(100.0).unwrap();
    assert_eq!(rating_changed(&second), Some((2.0, 4.0)));

    // Release at the same position adds nothing further.
    let release = core.on_pointer_up(100.0).unwrap();
    assert!(release.is_empty());
    assert_eq!(core.rating(), 4.0);
}

#[test]
fn movement_within_slop_stays_a_tap() {
    let mut core = editable_core();
    core.on_pointer_down(100.0).unwrap();
    assert!(core.on_pointer_move(102.0).unwrap().is_empty());
    let actions = core.on_pointer_up(103.0).unwrap();
    assert!(rating_changed(&actions).is_some());
    assert_eq!(core.rating(), 4.0);
}

#[test]
fn swipe_when_swipes_disallowed_resolves_as_tap() {
    let mut core = editable_core();
    core.apply(&patch(|p| p.allows_swipe_when_editable = Some(false))).unwrap();
    core.on_pointer_down(10.0).unwrap();
    assert!(core.on_pointer_move(120.0).unwrap().is_empty());
    let actions = core.on_pointer_up(120.0).unwrap();
    assert_eq!(rating_changed(&actions), Some((0.0, 4.75)));
}

#[test]
fn swipe_ratings_never_regress_on_forward_movement() {
    let mut core = editable_core();
    core.on_pointer_down(0.0).unwrap();
    let mut previous = core.rating();
    for step in 1..=60 {
        core.on_pointer_move(f64::from(step) * 3.0).unwrap();
        assert!(core.rating() >= previous);
        previous = core.rating();
    }
}

#[test]
fn swipe_left_of_the_row_clamps_to_zero() {
    let mut core = editable_core();
    core.set_rating(3.0);
    core.on_pointer_down(50.0).unwrap();
    core.on_pointer_move(-40.0).unwrap();
    assert_eq!(core.rating(), 0.0);
}

#[test]
fn swipe_past_the_row_clamps_to_star_count() {
    let mut core = editable_core();
    core.on_pointer_down(10.0).unwrap();
    core.on_pointer_move(5000.0).unwrap();
    assert_eq!(core.rating(), 5.0);
}

#[test]
fn move_without_press_is_ignored() {
    let mut core = editable_core();
    assert!(core.on_pointer_move(80.0).unwrap().is_empty());
    assert_eq!(core.rating(), 0.0);
}

#[test]
fn release_resets_the_gesture() {
    let mut core = editable_core();
    core.on_pointer_down(10.0).unwrap();
    core.on_pointer_move(60.0).unwrap();
    core.on_pointer_up(60.0).unwrap();
    // The gesture ended; a stray move must not keep rating the pointer.
    assert!(core.on_pointer_move(140.0).unwrap().is_empty());
}

// =============================================================
// Non-finite input
// =============================================================

#[test]
fn pointer_events_reject_non_finite_coordinates() {
    let mut core = editable_core();
    assert!(matches!(
        core.on_pointer_down(f64::NAN),
        Err(RatingError::OutOfBounds { .. })
    ));
    assert!(core.on_pointer_move(f64::INFINITY).is_err());
    assert!(core.on_pointer_up(f64::NEG_INFINITY).is_err());
}

#[test]
fn rejected_event_leaves_rating_untouched() {
    let mut core = editable_core();
    core.set_rating(3.0);
    core.on_pointer_down(10.0).unwrap();
    assert!(core.on_pointer_move(f64::NAN).is_err());
    assert_eq!(core.rating(), 3.0);
}

// =============================================================
// Queries
// =============================================================

#[test]
fn fill_fractions_reflect_current_rating() {
    let mut core = make_core();
    core.set_rating(3.5);
    assert_eq!(core.fill_fractions(), vec![1.0, 1.0, 1.0, 0.5, 0.0]);
}

#[test]
fn fill_fractions_track_star_count_changes() {
    let mut core = make_core();
    core.set_rating(2.0);
    core.apply(&ConfigPatch { number_of_stars: Some(3), ..Default::default() }).unwrap();
    assert_eq!(core.fill_fractions(), vec![1.0, 1.0, 0.0]);
}
