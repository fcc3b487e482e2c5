//! Query input editing (pure state transitions).
//!
//! All functions take the current [`QueryInput`] by value and return the
//! edited one. The cursor counts chars, not bytes, so multi-byte input is safe.

use crate::state::query::QueryInput;

fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map_or(text.len(), |(idx, _)| idx)
}

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(input: QueryInput, ch: char) -> QueryInput {
    let QueryInput { mut text, cursor } = input;
    let at = byte_index(&text, cursor);
    text.insert(at, ch);
    QueryInput {
        text,
        cursor: cursor + 1,
    }
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(input: QueryInput) -> QueryInput {
    let QueryInput { mut text, cursor } = input;
    if cursor == 0 {
        return QueryInput { text, cursor };
    }
    let at = byte_index(&text, cursor - 1);
    text.remove(at);
    QueryInput {
        text,
        cursor: cursor - 1,
    }
}

/// Delete the character under the cursor, if any.
pub fn handle_delete(input: QueryInput) -> QueryInput {
    let QueryInput { mut text, cursor } = input;
    if cursor < text.chars().count() {
        let at = byte_index(&text, cursor);
        text.remove(at);
    }
    QueryInput { text, cursor }
}

/// Move cursor left by one position, saturating at 0.
pub fn handle_cursor_left(input: QueryInput) -> QueryInput {
    QueryInput {
        cursor: input.cursor.saturating_sub(1),
        ..input
    }
}

/// Move cursor right by one position, saturating at the end of the text.
pub fn handle_cursor_right(input: QueryInput) -> QueryInput {
    let max_cursor = input.text.chars().count();
    QueryInput {
        cursor: (input.cursor + 1).min(max_cursor),
        ..input
    }
}

/// Move cursor to the start of the text.
pub fn handle_home(input: QueryInput) -> QueryInput {
    QueryInput { cursor: 0, ..input }
}

/// Move cursor past the last character.
pub fn handle_end(input: QueryInput) -> QueryInput {
    let cursor = input.text.chars().count();
    QueryInput { cursor, ..input }
}

/// Clear the text (Ctrl+U).
pub fn handle_clear(_input: QueryInput) -> QueryInput {
    QueryInput::default()
}

#[cfg(test)]
#[path = "query_input_handler_tests.rs"]
mod tests;
