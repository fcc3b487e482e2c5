//! Book card widget and its height measurement.
//!
//! A card is a bordered block:
//!
//! ```text
//! ┌────────────────────────┐
//! │The Lord of the Rings   │  title, bold, at most 2 wrapped lines
//! │J.R.R. Tolkien          │  first author, or "Unknown Author"
//! │1954 · cover #14625765  │  year (if known) and cover reference
//! │Fantasy · Fiction · Mi… │  up to 3 subjects (line omitted if none)
//! └────────────────────────┘
//! ```
//!
//! [`card_height`] must agree with what [`BookCard`] draws: it is the
//! measurement fed back into the grid's row height index.

use super::constants::{MAX_SUBJECTS, MAX_TITLE_LINES};
use super::styles::Theme;
use crate::model::Book;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown when a book has no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Shown when a book has no cover image.
pub const NO_COVER: &str = "no cover";

const ELLIPSIS: char = '…';
const SEPARATOR: &str = " · ";

/// Cells taken by the left and right borders.
const BORDER_WIDTH: u16 = 2;
/// Lines taken by the top and bottom borders.
const BORDER_HEIGHT: usize = 2;

/// Cut `text` to at most `width` cells, ending in `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` cells.
///
/// Words wider than a line are split. If the text does not fit, the last
/// line ends in `…`.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }
    if current_width > 0 {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let mut cut = truncate(last, width.saturating_sub(1));
            if !cut.ends_with(ELLIPSIS) {
                cut.push(ELLIPSIS);
            }
            *last = cut;
        }
    }
    lines
}

fn title_lines(book: &Book, inner_width: usize) -> Vec<String> {
    let lines = wrap(book.title(), inner_width, MAX_TITLE_LINES);
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn subject_text(book: &Book) -> Option<String> {
    let subjects = book.subjects();
    if subjects.is_empty() {
        return None;
    }
    let shown: Vec<&str> = subjects
        .iter()
        .take(MAX_SUBJECTS)
        .map(String::as_str)
        .collect();
    Some(shown.join(SEPARATOR))
}

fn cover_text(book: &Book) -> String {
    match book.cover_id() {
        Some(id) => format!("cover #{id}"),
        None => NO_COVER.to_string(),
    }
}

/// Content lines of a card whose inner (borderless) width is `inner_width`.
pub fn card_lines(book: &Book, inner_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = title_lines(book, inner_width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, theme.title)))
        .collect();

    lines.push(match book.primary_author() {
        Some(author) => Line::from(Span::styled(truncate(author, inner_width), theme.author)),
        None => Line::from(Span::styled(
            truncate(UNKNOWN_AUTHOR, inner_width),
            theme.unknown_author,
        )),
    });

    let cover = cover_text(book);
    lines.push(match book.first_publish_year() {
        Some(year) => {
            let year = year.to_string();
            let rest = inner_width.saturating_sub(year.width() + SEPARATOR.width());
            Line::from(vec![
                Span::styled(year, theme.year),
                Span::styled(SEPARATOR, theme.muted),
                Span::styled(truncate(&cover, rest), theme.cover),
            ])
        }
        None => Line::from(Span::styled(truncate(&cover, inner_width), theme.cover)),
    });

    if let Some(subjects) = subject_text(book) {
        lines.push(Line::from(Span::styled(
            truncate(&subjects, inner_width),
            theme.subject,
        )));
    }

    lines
}

/// Height in lines of the card for `book` drawn `width` cells wide.
pub fn card_height(book: &Book, width: u16) -> usize {
    let inner_width = width.saturating_sub(BORDER_WIDTH) as usize;
    let title = title_lines(book, inner_width).len();
    let subjects = usize::from(subject_text(book).is_some());
    BORDER_HEIGHT + title + 2 + subjects
}

/// Card widget for one book.
pub struct BookCard<'a> {
    book: &'a Book,
    theme: &'a Theme,
}

impl<'a> BookCard<'a> {
    /// Create a card for `book`.
    pub fn new(book: &'a Book, theme: &'a Theme) -> Self {
        Self { book, theme }
    }
}

impl Widget for BookCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(BORDER_WIDTH) as usize;
        let lines = card_lines(self.book, inner_width, self.theme);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.card_border),
            )
            .render(area, buf);
    }
}

/// Placeholder card drawn while the first page is loading.
pub struct SkeletonCard<'a> {
    theme: &'a Theme,
}

impl<'a> SkeletonCard<'a> {
    /// Create a placeholder card.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for SkeletonCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = area.width.saturating_sub(BORDER_WIDTH) as usize;
        // Title, author, year: progressively shorter bars.
        let lines: Vec<Line> = [inner * 3 / 4, inner / 2, inner / 4]
            .into_iter()
            .map(|w| Line::from(Span::styled("░".repeat(w.max(1)), self.theme.skeleton)))
            .collect();
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.skeleton),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
