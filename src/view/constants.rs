//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the query input box (border + content).
pub const QUERY_INPUT_HEIGHT: u16 = 3;

/// Height of the quick-select chip bar.
pub const CHIP_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Blank cells between grid columns.
pub const COLUMN_GAP: u16 = 1;

/// Maximum wrapped title lines on a card.
pub const MAX_TITLE_LINES: usize = 2;

/// Maximum subject tags on a card.
pub const MAX_SUBJECTS: usize = 3;

/// Placeholder cards shown while the first page loads.
pub const SKELETON_CARDS: usize = 8;

/// Lines scrolled per mouse wheel notch.
pub const MOUSE_SCROLL_LINES: isize = 3;

/// Longest the event loop waits for input before polling fetches.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
