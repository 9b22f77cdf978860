use super::*;

fn loaded(liked: bool, count: u64) -> LikeState {
    let mut state = LikeState::loading();
    state.load(LikeSnapshot::new(liked, count));
    state
}

// =============================================================
// Single click
// =============================================================

#[test]
fn click_applies_before_network_returns() {
    let mut state = loaded(false, 5);
    let before = state.displayed();
    let _ticket = state.begin();
    assert_eq!(before, LikeSnapshot::new(false, 5));
    assert_eq!(state.displayed(), LikeSnapshot::new(true, 6));
}

#[test]
fn confirmed_click_keeps_new_state() {
    let mut state = loaded(false, 5);
    let ticket = state.begin();
    assert!(state.confirm(ticket));
    assert_eq!(state.displayed(), LikeSnapshot::new(true, 6));
    assert!(!state.revert(ticket));
}

#[test]
fn failed_click_restores_exact_prior_state() {
    let mut state = loaded(false, 5);
    let before = state.displayed();
    let ticket = state.begin();
    assert!(state.revert(ticket));
    assert_eq!(state.displayed(), before);
}

#[test]
fn failed_unlike_restores_like() {
    let mut state = loaded(true, 3);
    let ticket = state.begin();
    assert_eq!(state.displayed(), LikeSnapshot::new(false, 2));
    state.revert(ticket);
    assert_eq!(state.displayed(), LikeSnapshot::new(true, 3));
}

// =============================================================
// Rapid clicks
// =============================================================

#[test]
fn first_of_two_clicks_failing_does_not_double_correct() {
    let mut state = loaded(false, 5);
    let first = state.begin();
    let second = state.begin();
    assert_eq!(state.displayed(), LikeSnapshot::new(false, 5));

    state.revert(first);
    // Only the second click remains in flight.
    assert_eq!(state.displayed(), LikeSnapshot::new(true, 6));

    state.confirm(second);
    assert_eq!(state.displayed(), LikeSnapshot::new(true, 6));
}

#[test]
fn both_clicks_failing_returns_to_start() {
    let mut state = loaded(false, 5);
    let first = state.begin();
    let second = state.begin();
    state.revert(second);
    state.revert(first);
    assert_eq!(state.displayed(), LikeSnapshot::new(false, 5));
}

#[test]
fn out_of_order_confirmations_settle_consistently() {
    let mut state = loaded(false, 5);
    let first = state.begin();
    let second = state.begin();
    state.confirm(second);
    state.confirm(first);
    assert_eq!(state.displayed(), LikeSnapshot::new(false, 5));
}

#[test]
fn stale_ticket_is_ignored() {
    let mut state = loaded(false, 5);
    let ticket = state.begin();
    state.load(LikeSnapshot::new(true, 9));
    assert!(!state.revert(ticket));
    assert!(!state.confirm(ticket));
    assert_eq!(state.displayed(), LikeSnapshot::new(true, 9));
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loading_flag_clears_on_load_or_failure() {
    let mut state = LikeState::loading();
    assert!(state.loading);
    state.load_failed();
    assert!(!state.loading);
    assert_eq!(state.displayed(), LikeSnapshot::default());
}

#[test]
fn unlike_never_goes_below_zero() {
    assert_eq!(LikeSnapshot::new(true, 0).toggled(), LikeSnapshot::new(false, 0));
}
