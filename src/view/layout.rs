//! Screen layout and top-level rendering.
//!
//! ```text
//! ┌ Search books ──────────────┐  query box
//! └────────────────────────────┘
//!  1 science  2 mathematics …     chips
//! ┌──────┐ ┌──────┐ ┌──────┐      card grid (windowed)
//! …
//!  science · 40 books · …         status bar
//! ```

use super::constants::{
    CHIP_BAR_HEIGHT, QUERY_INPUT_HEIGHT, SKELETON_CARDS, STATUS_BAR_HEIGHT,
};
use super::grid::{CardGrid, SkeletonGrid};
use super::help::render_help_overlay;
use super::query_input::{ChipBar, QueryBox};
use super::status_bar::StatusBar;
use super::styles::Theme;
use crate::state::{AppState, Focus};
use crate::view_state::{PagingStatus, VisibleWindow};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Shown in place of the grid when the first page fails.
pub const FIRST_PAGE_ERROR: &str = "Error fetching books.";

/// Shown when the first page is empty.
pub const NO_RESULTS: &str = "No books found";

/// Rectangles of the four screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Query input box.
    pub query: Rect,
    /// Quick-select chips.
    pub chips: Rect,
    /// Card grid viewport.
    pub grid: Rect,
    /// Status line.
    pub status: Rect,
}

/// Split the terminal into query box, chips, grid and status bar.
pub fn compute_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(QUERY_INPUT_HEIGHT),
            Constraint::Length(CHIP_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        query: chunks[0],
        chips: chunks[1],
        grid: chunks[2],
        status: chunks[3],
    }
}

/// Render every region for `state`, with `window` as the grid's rows.
pub fn render_layout(
    frame: &mut Frame,
    areas: &ScreenAreas,
    state: &AppState,
    window: &VisibleWindow,
    theme: &Theme,
) {
    let query = state.query();
    frame.render_widget(
        QueryBox::new(query.input(), theme)
            .focused(state.focus == Focus::Query)
            .pending(query.pending_deadline().is_some()),
        areas.query,
    );
    frame.render_widget(
        ChipBar::new(query.quick_queries(), query.selected_quick(), theme),
        areas.chips,
    );

    render_grid(frame, areas.grid, state, window, theme);

    frame.render_widget(StatusBar::new(state.collection(), theme), areas.status);

    if state.help_visible {
        render_help_overlay(frame, theme);
    }
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    window: &VisibleWindow,
    theme: &Theme,
) {
    let collection = state.collection();
    let grid = state.grid();

    if collection.is_first_page_error() {
        let message = collection.error().map(|e| e.message()).unwrap_or_default();
        render_error_panel(frame, area, message, theme);
    } else if collection.is_pending() || (collection.is_empty() && collection.is_fetching()) {
        let heights = grid.heights();
        frame.render_widget(
            SkeletonGrid::new(
                grid.columns(),
                SKELETON_CARDS,
                heights.estimate() as u16,
                heights.gap() as u16,
                theme,
            ),
            area,
        );
    } else if collection.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(NO_RESULTS, theme.muted)))
                .alignment(Alignment::Center),
            centered_line(area),
        );
    } else {
        frame.render_widget(
            CardGrid::new(collection.flat_items(), grid.columns(), window, theme),
            area,
        );
    }
}

fn render_error_panel(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(FIRST_PAGE_ERROR, theme.error)),
        Line::from(Span::styled(message.to_string(), theme.muted)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", theme.muted),
            Span::styled("r", theme.key),
            Span::styled(" to retry", theme.muted),
        ]),
    ];
    let height = (lines.len() as u16).min(area.height);
    let panel = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height,
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), panel);
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
