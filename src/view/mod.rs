//! TUI rendering and terminal management (impure shell)

pub mod card;
pub mod constants;
pub mod grid;
mod help;
pub mod layout;
pub mod query_input;
pub mod status_bar;
mod styles;

pub use card::{card_height, BookCard, SkeletonCard};
pub use grid::{column_width, row_height, CardGrid, SkeletonGrid};
pub use help::render_help_overlay;
pub use layout::{compute_areas, render_layout, ScreenAreas};
pub use styles::{ColorConfig, Theme};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, FetchRequest, KeyAction};
use crate::source::{FetchWorker, OpenLibraryFetcher, PageFetcher};
use crate::state::{handle_scroll_action, query_input_handler, AppState, ApplyResult, Focus};
use crate::view_state::ViewportDimensions;
use constants::{MOUSE_SCROLL_LINES, TICK_INTERVAL};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    worker: FetchWorker,
    key_bindings: KeyBindings,
    theme: Theme,
    /// Regions of the last drawn frame, for mouse hit testing.
    areas: Option<ScreenAreas>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and requests the
    /// first page of the initial query.
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        config: &ResolvedConfig,
        theme: Theme,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, fetcher, config, theme))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Waits for input at most
    /// until the next tick or the pending debounce deadline, whichever is
    /// sooner, and redraws only when something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let mut dirty = false;
            if event::poll(self.poll_timeout(Instant::now()))? {
                let event = event::read()?;
                if self.handle_event(event, Instant::now()) {
                    return Ok(());
                }
                dirty = true;
            }

            dirty |= self.tick(Instant::now());
            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the application on an existing terminal and dispatch the first
    /// page request.
    pub fn with_terminal(
        terminal: Terminal<B>,
        fetcher: Arc<dyn PageFetcher>,
        config: &ResolvedConfig,
        theme: Theme,
    ) -> Self {
        let (state, request) = AppState::new(config.query_config(), &config.grid);
        let mut worker = FetchWorker::new(fetcher);
        info!(query = %request.query, "Starting initial search");
        worker.dispatch(request);

        Self {
            terminal,
            state,
            worker,
            key_bindings: KeyBindings::default(),
            theme,
            areas: None,
        }
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Fetches dispatched whose outcome has not been applied yet.
    pub fn fetches_in_flight(&self) -> usize {
        self.worker.in_flight()
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        match self.state.query().pending_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(TICK_INTERVAL),
            None => TICK_INTERVAL,
        }
    }

    fn dispatch(&mut self, request: Option<FetchRequest>) {
        if let Some(request) = request {
            self.worker.dispatch(request);
        }
    }

    /// Advance time: commit a settled query edit and apply fetch outcomes.
    ///
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(request) = self.state.tick(now) {
            self.worker.dispatch(request);
            changed = true;
        }
        for outcome in self.worker.poll() {
            changed |= self.state.apply_outcome(outcome) != ApplyResult::Stale;
        }
        changed
    }

    /// Handle one terminal event.
    ///
    /// Returns true if app should quit
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            Event::Resize(width, height) => {
                // Layout is recomputed from the terminal size on the next draw.
                debug!("Handling resize to {}x{}", width, height);
                false
            }
            _ => false,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Special case: Ctrl+C should always quit, even while editing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.state.help_visible {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.state.help_visible = false;
            }
            return false;
        }

        match self.state.focus {
            Focus::Query => {
                self.handle_query_key(key, now);
                false
            }
            Focus::Grid => self.handle_grid_key(key),
        }
    }

    /// Keys while the query box has focus edit the raw query.
    fn handle_query_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let input = self.state.query().input().clone();

        let edited = match key.code {
            KeyCode::Esc | KeyCode::Tab => {
                self.state.focus = Focus::Grid;
                return;
            }
            KeyCode::Enter => {
                self.state.focus = Focus::Grid;
                let request = self.state.commit_query();
                self.dispatch(request);
                return;
            }
            KeyCode::Char('u') if ctrl => query_input_handler::handle_clear(input),
            KeyCode::Char(ch) if !ctrl => query_input_handler::handle_char_input(input, ch),
            KeyCode::Backspace => query_input_handler::handle_backspace(input),
            KeyCode::Delete => query_input_handler::handle_delete(input),
            KeyCode::Left => query_input_handler::handle_cursor_left(input),
            KeyCode::Right => query_input_handler::handle_cursor_right(input),
            KeyCode::Home => query_input_handler::handle_home(input),
            KeyCode::End => query_input_handler::handle_end(input),
            _ => return,
        };
        self.state.edit_query(edited, now);
    }

    /// Keys while the grid has focus go through the key bindings.
    fn handle_grid_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.state.help_visible = !self.state.help_visible,
            KeyAction::FocusQuery => self.state.focus = Focus::Query,
            KeyAction::QuickQuery(index) => {
                let request = self.state.select_quick(index);
                self.dispatch(request);
            }
            KeyAction::Retry => {
                let request = self.state.retry();
                self.dispatch(request);
            }
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => handle_scroll_action(&mut self.state, action),
        }
        false
    }

    /// Handle a single mouse event
    ///
    /// The wheel scrolls the grid. A left click selects a chip, focuses the
    /// query box or the grid, or closes the help overlay.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp if !self.state.help_visible => {
                self.state.grid_mut().scroll_by(-MOUSE_SCROLL_LINES);
            }
            MouseEventKind::ScrollDown if !self.state.help_visible => {
                self.state.grid_mut().scroll_by(MOUSE_SCROLL_LINES);
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        if self.state.help_visible {
            self.state.help_visible = false;
            return;
        }
        let Some(areas) = self.areas else {
            return;
        };

        let position = Position::new(x, y);
        if areas.chips.contains(position) {
            let chips = self.state.query().quick_queries();
            if let Some(index) = query_input::chip_at(chips, areas.chips, x, y) {
                self.state.focus = Focus::Grid;
                let request = self.state.select_quick(index);
                self.dispatch(request);
            }
        } else if areas.query.contains(position) {
            self.state.focus = Focus::Query;
        } else if areas.grid.contains(position) {
            self.state.focus = Focus::Grid;
        }
    }

    /// Render the current frame
    ///
    /// Lays out the screen, feeds the grid size and measured row heights
    /// into the state, dispatches a next-page request if the window reached
    /// the end, then draws.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let areas = compute_areas(Rect::new(0, 0, size.width, size.height));

        self.state.set_viewport(ViewportDimensions::new(
            areas.grid.width,
            areas.grid.height,
        ));
        let width = column_width(areas.grid.width, self.state.grid().columns());
        let (window, request) = self
            .state
            .refresh_window(|books| row_height(books, width));
        self.dispatch(request);
        self.areas = Some(areas);

        let state = &self.state;
        let theme = &self.theme;
        self.terminal
            .draw(|frame| render_layout(frame, &areas, state, &window, theme))?;

        Ok(())
    }
}

/// Initialize and run the TUI application against Open Library.
pub fn run(config: &ResolvedConfig, no_color: bool) -> Result<(), TuiError> {
    let fetcher = OpenLibraryFetcher::new(config.fetcher_config())
        .map_err(|e| AppError::Client(e.to_string()))?;
    let theme = Theme::with_color_config(ColorConfig::from_env_and_args(no_color));
    let mut app = TuiApp::new(Arc::new(fetcher), config, theme)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
