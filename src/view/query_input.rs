//! Query input box and quick-select chip bar.

use super::styles::Theme;
use crate::state::QueryInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const TITLE: &str = " Search books ";
const PENDING_TITLE: &str = " … ";

/// Editable query box.
///
/// Shows the raw input. When focused the border is highlighted and the
/// cursor cell is drawn reversed.
pub struct QueryBox<'a> {
    input: &'a QueryInput,
    focused: bool,
    pending: bool,
    theme: &'a Theme,
}

impl<'a> QueryBox<'a> {
    /// Create the query box widget.
    pub fn new(input: &'a QueryInput, theme: &'a Theme) -> Self {
        Self {
            input,
            focused: false,
            pending: false,
            theme,
        }
    }

    /// Draw with focus decoration.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark an edit as waiting for the debounce to commit.
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    fn content(&self) -> Line<'static> {
        if !self.focused {
            return Line::from(self.input.text.clone());
        }

        let before: String = self.input.text.chars().take(self.input.cursor).collect();
        let mut rest = self.input.text.chars().skip(self.input.cursor);
        let cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(cursor, self.theme.cursor),
            Span::raw(after),
        ])
    }
}

impl Widget for QueryBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.focused_border
        } else {
            self.theme.card_border
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(TITLE);
        if self.pending {
            block = block.title(Line::from(Span::styled(PENDING_TITLE, self.theme.muted)).right_aligned());
        }

        Paragraph::new(self.content()).block(block).render(area, buf);
    }
}

fn chip_label(index: usize, chip: &str) -> String {
    format!(" {} {} ", index + 1, chip)
}

/// Horizontal spans `(x, width)` of each chip label, relative to the bar.
fn chip_spans(chips: &[String]) -> Vec<(u16, u16)> {
    let mut x = 0u16;
    chips
        .iter()
        .enumerate()
        .map(|(i, chip)| {
            let width = chip_label(i, chip).width() as u16;
            let span = (x, width);
            x = x.saturating_add(width + 1);
            span
        })
        .collect()
}

/// Index of the chip drawn at `(x, y)` when the bar occupies `area`.
pub fn chip_at(chips: &[String], area: Rect, x: u16, y: u16) -> Option<usize> {
    if y != area.y || x < area.x {
        return None;
    }
    let column = x - area.x;
    chip_spans(chips)
        .iter()
        .position(|&(start, width)| column >= start && column < start + width && start + width <= area.width)
}

/// Quick-select chips: `1 science  2 mathematics …`.
pub struct ChipBar<'a> {
    chips: &'a [String],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> ChipBar<'a> {
    /// Create the chip bar; `selected` is highlighted.
    pub fn new(chips: &'a [String], selected: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            chips,
            selected,
            theme,
        }
    }
}

impl Widget for ChipBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.chips.len() * 2);
        for (i, chip) in self.chips.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if self.selected == Some(i) {
                self.theme.chip_selected
            } else {
                self.theme.chip
            };
            spans.push(Span::styled(chip_label(i, chip), style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
