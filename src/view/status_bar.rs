//! Single-line status bar below the grid.

use super::styles::Theme;
use crate::state::{CollectionStatus, IncrementalCollection};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEPARATOR: &str = " · ";
const HELP_HINT: &str = "? help";

/// Whether the state segment reports a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Normal progress.
    Info,
    /// A page request failed.
    Error,
}

/// The segments of the status line, without styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText {
    /// `"science"`.
    pub query: String,
    /// `"40 of 1234 books · 2 pages"`.
    pub progress: String,
    /// What the collection is doing now.
    pub state: String,
    /// Style class of `state`.
    pub kind: StatusKind,
}

/// Describe `collection` for the status bar.
pub fn status_text(collection: &IncrementalCollection) -> StatusText {
    let loaded = collection.len();
    let pages = collection.pages().len();
    let books = match collection.num_found() {
        Some(found) => format!("{loaded} of {found} books"),
        None => format!("{loaded} books"),
    };
    let page_word = if pages == 1 { "page" } else { "pages" };
    let progress = format!("{books}{SEPARATOR}{pages} {page_word}");

    let (state, kind) = match collection.status() {
        CollectionStatus::Pending { .. } => ("searching…".to_string(), StatusKind::Info),
        CollectionStatus::FetchingMore { ticket } => (
            format!("loading page {}…", ticket.page.get()),
            StatusKind::Info,
        ),
        CollectionStatus::Ready => ("scroll for more".to_string(), StatusKind::Info),
        CollectionStatus::Exhausted => ("end of results".to_string(), StatusKind::Info),
        CollectionStatus::Failed { error, page } => (
            format!("page {} failed: {}{SEPARATOR}r to retry", page.get(), error.message()),
            StatusKind::Error,
        ),
    };

    StatusText {
        query: collection.query().to_string(),
        progress,
        state,
        kind,
    }
}

/// Status bar widget.
pub struct StatusBar<'a> {
    collection: &'a IncrementalCollection,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create the status bar for `collection`.
    pub fn new(collection: &'a IncrementalCollection, theme: &'a Theme) -> Self {
        Self { collection, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = status_text(self.collection);
        let state_style = match text.kind {
            StatusKind::Info => Style::default(),
            StatusKind::Error => self.theme.error,
        };

        let line = Line::from(vec![
            Span::styled(format!(" {}", text.query), self.theme.key),
            Span::styled(SEPARATOR, self.theme.muted),
            Span::styled(text.progress, self.theme.muted),
            Span::styled(SEPARATOR, self.theme.muted),
            Span::styled(text.state, state_style),
            Span::styled(SEPARATOR, self.theme.muted),
            Span::styled(HELP_HINT, self.theme.muted),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
