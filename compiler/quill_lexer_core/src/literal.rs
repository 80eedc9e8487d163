//! String-literal skipping inside script tags.
//!
//! The scanner never interprets script code, but it must not mistake an
//! end tag written inside a string literal for the real end of the tag.
//! Three literal forms are recognized:
//!
//! - single-quoted: `'...'`
//! - double-quoted: `"..."`
//! - long bracket: `[[...]]`, `[==[...]==]` (any number of `=`)
//!
//! Inside quoted literals a backslash escapes the byte that follows it.
//! Long brackets have no escapes. An unterminated literal consumes the rest
//! of the template.

use crate::Cursor;

/// Skip a quoted literal. The cursor must be on the opening `quote`.
///
/// Leaves the cursor just past the closing quote, or at EOF when the
/// literal is unterminated.
pub fn skip_quoted(cursor: &mut Cursor<'_>, quote: u8) {
    debug_assert_eq!(cursor.current(), quote, "cursor must start on the opening quote");
    cursor.advance();
    loop {
        match cursor.eat_until_quote(quote) {
            b'\\' => cursor.advance_n(2),
            0 if cursor.is_eof() => return,
            _ => {
                cursor.advance();
                return;
            }
        }
    }
}

/// If the cursor is on a long bracket opener (`[`, N×`=`, `[`), return N.
pub fn long_bracket_level(cursor: &Cursor<'_>) -> Option<usize> {
    if cursor.current() != b'[' {
        return None;
    }
    let mut level = 0;
    while cursor.peek_n(level + 1) == b'=' {
        level += 1;
    }
    (cursor.peek_n(level + 1) == b'[').then_some(level)
}

/// Skip a long bracket literal of the given level. The cursor must be on
/// the opening `[`.
///
/// Returns `false` (cursor at EOF) when the closing bracket is missing.
pub fn skip_long_bracket(cursor: &mut Cursor<'_>, level: usize) -> bool {
    cursor.advance_n(level + 2);
    let mut close = Vec::with_capacity(level + 2);
    close.push(b']');
    close.resize(level + 1, b'=');
    close.push(b']');
    cursor.eat_past(&close)
}

/// Skip any literal starting at the cursor.
///
/// Returns `true` if a literal was skipped, `false` if the cursor is not on
/// a literal opener (in which case it does not move).
pub fn skip_literal(cursor: &mut Cursor<'_>) -> bool {
    match cursor.current() {
        quote @ (b'\'' | b'"') => {
            skip_quoted(cursor, quote);
            true
        }
        b'[' => match long_bracket_level(cursor) {
            Some(level) => {
                skip_long_bracket(cursor, level);
                true
            }
            None => false,
        },
        _ => false,
    }
}
