//! Tests for AppState transitions.

use super::*;
use crate::model::{BookKey, NetworkError, Page, SearchResponse};
use crate::view_state::PagingStatus;
use crate::view_state::ColumnBreakpoints;
use std::time::Duration;

fn books(prefix: &str, n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| {
            Book::new(
                BookKey::new(format!("/works/{prefix}{i}")).unwrap(),
                format!("{prefix} {i}"),
            )
        })
        .collect()
}

fn page(request: &FetchRequest, n: usize) -> FetchOutcome {
    FetchOutcome::success(
        request.ticket,
        Page::new(request.page(), books(&request.query, n)),
    )
}

fn grid_config() -> GridConfig {
    GridConfig {
        row_height_estimate: 5,
        row_gap: 1,
        overscan_rows: 1,
        breakpoints: ColumnBreakpoints::web(),
    }
}

fn state() -> (AppState, FetchRequest) {
    let (mut state, request) = AppState::new(QueryConfig::default(), &grid_config());
    state.set_viewport(ViewportDimensions::new(1300, 40));
    (state, request)
}

fn fixed(_: &[Book]) -> usize {
    5
}

#[test]
fn new_requests_first_page_of_initial_query() {
    let (state, request) = state();
    assert_eq!(request.query, "science");
    assert_eq!(request.page().get(), 1);
    assert!(state.collection().is_pending());
    assert_eq!(state.focus, Focus::Grid);
}

#[test]
fn pending_collection_never_triggers_fetch() {
    let (mut state, _request) = state();
    let (window, request) = state.refresh_window(fixed);
    assert!(window.is_empty());
    assert_eq!(request, None);
}

#[test]
fn visible_last_row_requests_next_page_once() {
    let (mut state, first) = state();
    state.apply_outcome(page(&first, 20));

    let (window, request) = state.refresh_window(fixed);
    assert_eq!(state.grid().row_count(), 5);
    assert_eq!(window.last_row(), Some(4));
    let request = request.expect("last row visible");
    assert_eq!(request.page().get(), 2);

    for _ in 0..3 {
        let (_, again) = state.refresh_window(fixed);
        assert_eq!(again, None);
    }
}

#[test]
fn far_from_end_does_not_fetch() {
    let (mut state, first) = state();
    state.set_viewport(ViewportDimensions::new(1300, 6));
    state.apply_outcome(page(&first, 40));

    let (window, request) = state.refresh_window(fixed);
    assert!(window.last_row() < Some(9));
    assert_eq!(request, None);
}

#[test]
fn exhausted_collection_stops_requesting() {
    let (mut state, first) = state();
    state.apply_outcome(page(&first, 20));
    let (_, second) = state.refresh_window(fixed);
    let second = second.unwrap();

    assert_eq!(state.apply_outcome(page(&second, 0)), ApplyResult::Exhausted);
    for _ in 0..3 {
        assert_eq!(state.refresh_window(fixed).1, None);
    }
    assert_eq!(state.collection().len(), 20);
}

#[test]
fn measurements_replace_estimates() {
    let (mut state, first) = state();
    state.apply_outcome(page(&first, 8));

    let (window, _) = state.refresh_window(|_| 9);
    assert_eq!(window.rows[0].height, 9);
    assert_eq!(window.rows[1].top, 10);
    assert_eq!(window.total_height, 19);
}

#[test]
fn committed_query_restarts_with_new_generation() {
    let (mut state, first) = state();
    state.apply_outcome(page(&first, 20));
    state.refresh_window(fixed);
    state.grid_mut().scroll_by(10);

    let t0 = Instant::now();
    state.edit_query(QueryInput::new("history"), t0);
    assert_eq!(state.tick(t0 + Duration::from_millis(100)), None);
    let restart = state
        .tick(t0 + Duration::from_millis(400))
        .expect("debounce elapsed");

    assert_eq!(restart.query, "history");
    assert_eq!(restart.page().get(), 1);
    assert!(restart.ticket.generation > first.ticket.generation);
    assert!(state.collection().is_empty());
    assert_eq!(state.grid().scroll_offset(), 0);
    assert_eq!(state.grid().row_count(), 0);
}

#[test]
fn outcome_for_previous_query_is_ignored() {
    let (mut state, first) = state();
    let restart = state.select_quick(2).unwrap();

    assert_eq!(state.apply_outcome(page(&first, 20)), ApplyResult::Stale);
    assert!(state.collection().is_empty());

    state.apply_outcome(page(&restart, 3));
    assert_eq!(state.collection().flat_items()[0].title(), "history 0");
}

#[test]
fn selecting_active_chip_does_not_restart() {
    let (mut state, _first) = state();
    assert_eq!(state.select_quick(0), None);
    assert!(state.collection().is_pending());
}

#[test]
fn blank_query_uses_fallback() {
    let (mut state, _first) = state();
    state.edit_query(QueryInput::new("  "), Instant::now());
    let restart = state.commit_query().unwrap();
    assert_eq!(restart.query, "book");
}

#[test]
fn resize_keeps_items_and_changes_rows() {
    let (mut state, first) = state();
    state.apply_outcome(page(&first, 20));
    state.refresh_window(fixed);
    assert_eq!(state.grid().columns().get(), 4);
    assert_eq!(state.grid().row_count(), 5);

    state.set_viewport(ViewportDimensions::new(900, 40));
    state.refresh_window(fixed);
    assert_eq!(state.grid().columns().get(), 3);
    assert_eq!(state.grid().row_count(), 7);
    assert_eq!(state.collection().len(), 20);
}

#[test]
fn retry_recovers_later_page_failure() {
    let (mut state, first) = state();
    state.apply_outcome(page(&first, 20));
    let second = state.refresh_window(fixed).1.unwrap();
    state.apply_outcome(FetchOutcome::failure(
        second.ticket,
        NetworkError::new("timeout"),
    ));

    assert_eq!(state.refresh_window(fixed).1, None, "failures are not auto-retried");
    let retried = state.retry().unwrap();
    assert_eq!(retried.page().get(), 2);
}

#[test]
fn page_of_dropped_docs_requests_the_next_page() {
    let (mut state, first) = state();
    let response: SearchResponse =
        serde_json::from_str(r#"{"docs": [{"title": "a"}, {"title": "b"}]}"#).unwrap();
    state.apply_outcome(FetchOutcome::success(
        first.ticket,
        Page::from_response(first.page(), response),
    ));
    assert_eq!(state.collection().len(), 0);
    assert!(state.collection().has_more());

    let (_, request) = state.refresh_window(fixed);
    let request = request.expect("empty page is not the end of results");
    assert_eq!(request.page().get(), 2);

    // Only one request while it is in flight.
    assert_eq!(state.refresh_window(fixed).1, None);

    state.apply_outcome(page(&request, 4));
    assert_eq!(state.collection().len(), 4);
}
