//! Vertical scrolling keyboard action handler.
//!
//! Transforms AppState in response to scroll actions.
//! Offsets are clamped by the grid, so scrolling past either end is a no-op.

use crate::model::KeyAction;
use crate::state::AppState;

/// Lines moved by a single-step scroll.
pub const LINE_STEP: isize = 1;

/// Handle a scroll keyboard action against the card grid.
///
/// Page actions move by the viewport height minus one line, keeping one line
/// of context. Non-scroll actions leave the state unchanged.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) {
    let viewport_height = state.grid().viewport().height as isize;
    let page = (viewport_height - 1).max(1);
    let grid = state.grid_mut();

    match action {
        KeyAction::ScrollUp => grid.scroll_by(-LINE_STEP),
        KeyAction::ScrollDown => grid.scroll_by(LINE_STEP),
        KeyAction::PageUp => grid.scroll_by(-page),
        KeyAction::PageDown => grid.scroll_by(page),
        KeyAction::ScrollToTop => grid.scroll_to_top(),
        KeyAction::ScrollToBottom => grid.scroll_to_bottom(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
