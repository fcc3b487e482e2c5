//! Windowed card grid rendering.
//!
//! Only rows in the [`VisibleWindow`] are materialized. Each card is drawn
//! into a scratch buffer at full row height and the part inside the viewport
//! is copied out, so rows cut by the top or bottom edge render partially.

use super::card::{card_height, BookCard, SkeletonCard};
use super::constants::COLUMN_GAP;
use super::styles::Theme;
use crate::model::Book;
use crate::view_state::{project, ColumnCount, VisibleWindow};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Width of one column when `total_width` cells are split into `columns`.
pub fn column_width(total_width: u16, columns: ColumnCount) -> u16 {
    let cols = columns.get() as u16;
    let gaps = COLUMN_GAP.saturating_mul(cols.saturating_sub(1));
    (total_width.saturating_sub(gaps) / cols.max(1)).max(1)
}

/// Height of a row: its tallest card.
pub fn row_height(books: &[Book], column_width: u16) -> usize {
    books
        .iter()
        .map(|book| card_height(book, column_width))
        .max()
        .unwrap_or(0)
}

fn column_x(area: Rect, column: usize, width: u16) -> u16 {
    area.x + column as u16 * (width + COLUMN_GAP)
}

/// Copy rows `skip..skip + height` of `src` to `dst` at `(x, y)`.
fn blit(src: &Buffer, skip: u16, height: u16, dst: &mut Buffer, x: u16, y: u16) {
    for dy in 0..height {
        for dx in 0..src.area.width {
            if let (Some(from), Some(to)) = (src.cell((dx, skip + dy)), dst.cell_mut((x + dx, y + dy)))
            {
                *to = from.clone();
            }
        }
    }
}

/// The card grid for the loaded books.
pub struct CardGrid<'a> {
    books: &'a [Book],
    columns: ColumnCount,
    window: &'a VisibleWindow,
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    /// Grid over `books`, drawing the rows of `window`.
    pub fn new(
        books: &'a [Book],
        columns: ColumnCount,
        window: &'a VisibleWindow,
        theme: &'a Theme,
    ) -> Self {
        Self {
            books,
            columns,
            window,
            theme,
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = project(self.books, self.columns);
        let width = column_width(area.width, self.columns);
        let scroll = self.window.scroll_offset as isize;

        for row in &self.window.rows {
            let Some(books) = rows.get(row.index) else {
                continue;
            };
            let top = row.top as isize - scroll;
            let bottom = top + row.height as isize;
            let visible_top = top.max(0);
            let visible_bottom = bottom.min(area.height as isize);
            if visible_top >= visible_bottom {
                continue;
            }

            let card_area = Rect::new(0, 0, width, row.height as u16);
            for (column, book) in books.iter().enumerate() {
                let mut scratch = Buffer::empty(card_area);
                BookCard::new(book, self.theme).render(card_area, &mut scratch);
                blit(
                    &scratch,
                    (visible_top - top) as u16,
                    (visible_bottom - visible_top) as u16,
                    buf,
                    column_x(area, column, width),
                    area.y + visible_top as u16,
                );
            }
        }
    }
}

/// Placeholder grid shown while the first page is in flight.
pub struct SkeletonGrid<'a> {
    columns: ColumnCount,
    count: usize,
    card_height: u16,
    gap: u16,
    theme: &'a Theme,
}

impl<'a> SkeletonGrid<'a> {
    /// `count` placeholder cards of `card_height` lines, rows separated by `gap`.
    pub fn new(columns: ColumnCount, count: usize, card_height: u16, gap: u16, theme: &'a Theme) -> Self {
        Self {
            columns,
            count,
            card_height,
            gap,
            theme,
        }
    }
}

impl Widget for SkeletonGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = column_width(area.width, self.columns);
        let placeholders: Vec<usize> = (0..self.count).collect();

        let mut y = area.y;
        for row in project(&placeholders, self.columns).iter() {
            let bottom = area.y + area.height;
            if y >= bottom {
                break;
            }
            let height = self.card_height.min(bottom - y);
            for column in 0..row.len() {
                let card = Rect::new(column_x(area, column, width), y, width, height);
                SkeletonCard::new(self.theme).render(card.intersection(area), buf);
            }
            y = y.saturating_add(self.card_height + self.gap);
        }
    }
}
