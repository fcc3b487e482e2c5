//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the grid up one line. Default: k/↑
    ScrollUp,
    /// Scroll the grid down one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first row. Default: g/Home
    ScrollToTop,
    /// Jump to the last loaded row. Default: G/End
    ScrollToBottom,

    // Query
    /// Move focus into the query input. Default: / or Tab
    FocusQuery,
    /// Select a quick-select chip by index (key 1 is index 0). Default: 1-9
    QuickQuery(usize),

    // Paging
    /// Re-issue the page request that failed. Default: r
    Retry,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}

impl KeyAction {
    /// True for actions that move the grid's scroll offset.
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
