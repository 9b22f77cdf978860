use super::*;

fn user(id: &str, name: &str) -> UserSummary {
    UserSummary { id: id.to_owned(), username: name.to_owned(), email: None, profile_pic: None }
}

fn ticket(action: SearchAction) -> SearchTicket {
    match action {
        SearchAction::Fetch(ticket) => ticket,
        SearchAction::Cleared => panic!("expected a fetch"),
    }
}

// =============================================================
// Empty queries
// =============================================================

#[test]
fn empty_query_clears_without_fetch() {
    let mut state = SearchState::default();
    assert_eq!(state.set_query(""), SearchAction::Cleared);
    assert_eq!(state.set_query("   "), SearchAction::Cleared);
    assert!(state.results.is_empty());
    assert!(!state.loading);
}

#[test]
fn clearing_query_discards_previous_results() {
    let mut state = SearchState::default();
    let t = ticket(state.set_query("al"));
    state.start(&t);
    state.finish(&t, Ok(vec![user("1", "alice")]));
    assert_eq!(state.set_query(""), SearchAction::Cleared);
    assert!(state.results.is_empty());
}

#[test]
fn clearing_query_invalidates_in_flight_request() {
    let mut state = SearchState::default();
    let t = ticket(state.set_query("al"));
    state.start(&t);
    state.set_query("");
    assert!(!state.finish(&t, Ok(vec![user("1", "alice")])));
    assert!(state.results.is_empty());
    assert!(!state.loading);
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn late_response_for_superseded_query_is_dropped() {
    let mut state = SearchState::default();
    let a = ticket(state.set_query("a"));
    assert!(state.start(&a));
    let ab = ticket(state.set_query("ab"));
    assert!(state.start(&ab));

    assert!(state.finish(&ab, Ok(vec![user("2", "abby")])));
    assert!(!state.finish(&a, Ok(vec![user("1", "al"), user("2", "abby")])));

    assert_eq!(state.results, vec![user("2", "abby")]);
    assert!(!state.loading);
}

#[test]
fn superseded_query_keeps_loading_for_current_one() {
    let mut state = SearchState::default();
    let a = ticket(state.set_query("a"));
    state.start(&a);
    let ab = ticket(state.set_query("ab"));
    state.start(&ab);
    state.finish(&a, Ok(vec![user("1", "al")]));
    assert!(state.loading);
    assert!(state.results.is_empty());
}

#[test]
fn ticket_stale_during_debounce_is_not_sent() {
    let mut state = SearchState::default();
    let a = ticket(state.set_query("a"));
    let _ab = state.set_query("ab");
    assert!(!state.start(&a));
}

#[test]
fn ticket_query_is_trimmed() {
    let mut state = SearchState::default();
    assert_eq!(ticket(state.set_query("  bob ")).query, "bob");
    assert_eq!(state.query, "  bob ");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn error_is_recorded_for_current_query() {
    let mut state = SearchState::default();
    let t = ticket(state.set_query("zed"));
    state.start(&t);
    state.finish(&t, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.error, Some(ApiError::Network("offline".to_owned())));
    assert!(!state.loading);
}

#[test]
fn new_query_clears_error() {
    let mut state = SearchState::default();
    let t = ticket(state.set_query("zed"));
    state.finish(&t, Err(ApiError::Network("offline".to_owned())));
    state.set_query("zeb");
    assert_eq!(state.error, None);
}

#[test]
fn failed_query_does_not_show_previous_results() {
    let mut state = SearchState::default();
    let a = ticket(state.set_query("a"));
    state.start(&a);
    state.finish(&a, Ok(vec![user("1", "al")]));

    let ab = ticket(state.set_query("ab"));
    state.start(&ab);
    assert!(state.finish(&ab, Err(ApiError::Network("offline".to_owned()))));
    assert!(state.results.is_empty());
    assert!(state.error.is_some());
}
