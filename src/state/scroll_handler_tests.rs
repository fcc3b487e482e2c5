//! Tests for the scroll handler.

use super::*;
use crate::model::{Book, BookKey, FetchOutcome, Page};
use crate::state::QueryConfig;
use crate::view_state::{ColumnBreakpoints, GridConfig, ViewportDimensions};

/// 40 books in 4 columns: 10 rows of 5 lines plus a 1-line gap (59 lines).
fn loaded_state(viewport_height: u16) -> AppState {
    let config = GridConfig {
        row_height_estimate: 5,
        row_gap: 1,
        overscan_rows: 1,
        breakpoints: ColumnBreakpoints::web(),
    };
    let (mut state, request) = AppState::new(QueryConfig::default(), &config);
    state.set_viewport(ViewportDimensions::new(1300, viewport_height));
    let books = (0..40)
        .map(|i| Book::new(BookKey::new(format!("/works/OL{i}W")).unwrap(), "t"))
        .collect();
    state.apply_outcome(FetchOutcome::success(
        request.ticket,
        Page::new(request.page(), books),
    ));
    state
}

#[test]
fn line_scroll_moves_one_line() {
    let mut state = loaded_state(10);
    handle_scroll_action(&mut state, KeyAction::ScrollDown);
    assert_eq!(state.grid().scroll_offset(), 1);
    handle_scroll_action(&mut state, KeyAction::ScrollUp);
    assert_eq!(state.grid().scroll_offset(), 0);
}

#[test]
fn scroll_up_at_top_stays_at_top() {
    let mut state = loaded_state(10);
    handle_scroll_action(&mut state, KeyAction::ScrollUp);
    assert_eq!(state.grid().scroll_offset(), 0);
}

#[test]
fn page_scroll_keeps_one_line_of_context() {
    let mut state = loaded_state(10);
    handle_scroll_action(&mut state, KeyAction::PageDown);
    assert_eq!(state.grid().scroll_offset(), 9);
    handle_scroll_action(&mut state, KeyAction::PageUp);
    assert_eq!(state.grid().scroll_offset(), 0);
}

#[test]
fn top_and_bottom_jump_to_ends() {
    let mut state = loaded_state(10);
    handle_scroll_action(&mut state, KeyAction::ScrollToBottom);
    assert_eq!(state.grid().scroll_offset(), 59 - 10);
    handle_scroll_action(&mut state, KeyAction::ScrollDown);
    assert_eq!(state.grid().scroll_offset(), 59 - 10);
    handle_scroll_action(&mut state, KeyAction::ScrollToTop);
    assert_eq!(state.grid().scroll_offset(), 0);
}

#[test]
fn non_scroll_action_is_ignored() {
    let mut state = loaded_state(10);
    handle_scroll_action(&mut state, KeyAction::Help);
    assert_eq!(state.grid().scroll_offset(), 0);
    assert!(!state.help_visible);
}
