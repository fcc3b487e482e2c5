//! Card and chrome styling.
//!
//! Colors can be switched off with `--no-color` or the `NO_COLOR` environment
//! variable; emphasis (bold, italic, reversed) is kept either way.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Styles for every element the TUI draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Book title.
    pub title: Style,
    /// Author line.
    pub author: Style,
    /// "Unknown Author" placeholder.
    pub unknown_author: Style,
    /// Publication year.
    pub year: Style,
    /// Cover reference.
    pub cover: Style,
    /// Subject tags.
    pub subject: Style,
    /// Card border.
    pub card_border: Style,
    /// Loading placeholder blocks.
    pub skeleton: Style,
    /// Secondary text (hints, counters).
    pub muted: Style,
    /// Errors.
    pub error: Style,
    /// Unselected quick chip.
    pub chip: Style,
    /// Quick chip matching the current input.
    pub chip_selected: Style,
    /// Border of the focused widget.
    pub focused_border: Style,
    /// Cursor cell in the query input.
    pub cursor: Style,
    /// Help overlay section headers.
    pub section_header: Style,
    /// Help overlay key column.
    pub key: Style,
}

impl Theme {
    /// Theme honoring `config`.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let color = |c: Color| {
            if config.colors_enabled() {
                Style::default().fg(c)
            } else {
                Style::default()
            }
        };
        let bold = Modifier::BOLD;

        Self {
            title: color(Color::White).add_modifier(bold),
            author: color(Color::Cyan),
            unknown_author: color(Color::Gray).add_modifier(Modifier::ITALIC),
            year: color(Color::Yellow),
            cover: color(Color::DarkGray),
            subject: color(Color::Green),
            card_border: color(Color::DarkGray),
            skeleton: color(Color::DarkGray).add_modifier(Modifier::DIM),
            muted: color(Color::DarkGray),
            error: color(Color::Red).add_modifier(bold),
            chip: color(Color::Gray),
            chip_selected: color(Color::Black).bg_if(config, Color::Cyan).add_modifier(bold),
            focused_border: color(Color::Cyan),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            section_header: color(Color::Cyan).add_modifier(bold | Modifier::UNDERLINED),
            key: color(Color::Yellow).add_modifier(bold),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

trait StyleExt {
    fn bg_if(self, config: ColorConfig, bg: Color) -> Style;
}

impl StyleExt for Style {
    /// Background when colors are on, reverse video otherwise.
    fn bg_if(self, config: ColorConfig, bg: Color) -> Style {
        if config.colors_enabled() {
            self.bg(bg)
        } else {
            self.add_modifier(Modifier::REVERSED)
        }
    }
}

// ===== Tests =====
