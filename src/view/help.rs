//! Keyboard shortcut overlay, toggled with `?` and closed with `Esc`.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const KEY_COLUMN: usize = 14;
const TITLE: &str = " Keyboard Shortcuts ";
const DISMISS_HINT: &str = " Press Esc or ? to close ";

/// Draw the shortcut list in a popup over the middle of the screen.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let popup = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    let block = Block::default()
        .title(TITLE)
        .title_bottom(
            Line::from(Span::styled(
                DISMISS_HINT,
                theme.muted.add_modifier(Modifier::DIM),
            ))
            .centered(),
        )
        .borders(Borders::ALL)
        .border_style(theme.focused_border);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(build_help_content(theme))
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}

/// The `percent_x` by `percent_y` part of `area` around its center.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [band] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(band);
    popup
}

fn shortcut(keys: &str, description: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<KEY_COLUMN$}"), theme.key),
        Span::styled(description, Style::default()),
    ])
}

fn header(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(title, theme.section_header)])
}

fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        header("Scrolling", theme),
        shortcut("j/↓", "Scroll down one line", theme),
        shortcut("k/↑", "Scroll up one line", theme),
        shortcut("Ctrl+d/PgDn", "Page down", theme),
        shortcut("Ctrl+u/PgUp", "Page up", theme),
        shortcut("g/Home", "Go to top", theme),
        shortcut("G/End", "Go to bottom (loads more)", theme),
        shortcut("Mouse wheel", "Scroll", theme),
        Line::from(""),
        header("Search", theme),
        shortcut("/ or Tab", "Edit the query", theme),
        shortcut("Enter", "Search now", theme),
        shortcut("Esc", "Back to the grid", theme),
        shortcut("Ctrl+u", "Clear the query (while editing)", theme),
        shortcut("1-9", "Quick query chip", theme),
        Line::from(""),
        header("Application", theme),
        shortcut("r", "Retry a failed page", theme),
        shortcut("?", "Toggle this help", theme),
        shortcut("q/Ctrl+c", "Quit", theme),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
