//! Tests for query input editing.

use super::*;

fn input(text: &str, cursor: usize) -> QueryInput {
    QueryInput {
        text: text.to_string(),
        cursor,
    }
}

// ===== Character input =====

#[test]
fn char_input_appends_at_end() {
    let result = handle_char_input(input("scienc", 6), 'e');
    assert_eq!(result, input("science", 7));
}

#[test]
fn char_input_inserts_mid_text() {
    let result = handle_char_input(input("hstory", 1), 'i');
    assert_eq!(result, input("history", 2));
}

#[test]
fn char_input_handles_multibyte_text() {
    let result = handle_char_input(input("café", 4), 's');
    assert_eq!(result, input("cafés", 5));

    let result = handle_char_input(input("éa", 1), 'x');
    assert_eq!(result, input("éxa", 2));
}

// ===== Deletion =====

#[test]
fn backspace_removes_previous_char() {
    assert_eq!(handle_backspace(input("books", 5)), input("book", 4));
}

#[test]
fn backspace_at_start_is_noop() {
    assert_eq!(handle_backspace(input("books", 0)), input("books", 0));
}

#[test]
fn backspace_removes_multibyte_char() {
    assert_eq!(handle_backspace(input("naïve", 3)), input("nave", 2));
}

#[test]
fn delete_removes_char_under_cursor() {
    assert_eq!(handle_delete(input("books", 0)), input("ooks", 0));
}

#[test]
fn delete_at_end_is_noop() {
    assert_eq!(handle_delete(input("books", 5)), input("books", 5));
}

#[test]
fn clear_empties_input() {
    assert_eq!(handle_clear(input("biology", 3)), input("", 0));
}

// ===== Cursor movement =====

#[test]
fn cursor_left_saturates_at_zero() {
    assert_eq!(handle_cursor_left(input("ab", 0)).cursor, 0);
    assert_eq!(handle_cursor_left(input("ab", 2)).cursor, 1);
}

#[test]
fn cursor_right_saturates_at_char_count() {
    assert_eq!(handle_cursor_right(input("añb", 3)).cursor, 3);
    assert_eq!(handle_cursor_right(input("añb", 1)).cursor, 2);
}

#[test]
fn home_and_end_jump() {
    assert_eq!(handle_home(input("astronomy", 4)).cursor, 0);
    assert_eq!(handle_end(input("astronomy", 0)).cursor, 9);
}
