//! Lua string literal escaping.
//!
//! Literal text is emitted as a double-quoted Lua string. Escapes used:
//! `\\`, `\"`, `\n`, `\r`, `\t`, `\a`, `\b`, `\f`, `\v`; any other byte
//! below `0x20` and `0x7F` become a three-digit decimal escape (`\ddd`),
//! which every Lua version accepts. Bytes `0x80` and above pass through
//! untouched (Lua strings are byte strings).

use std::fmt::Write;

/// Append `text` to `out` as a double-quoted Lua string literal.
pub fn push_lua_string(out: &mut String, text: &str) {
    out.reserve(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\u{0B}' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                // Infallible: writing to a String.
                let _ = write!(out, "\\{:03}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// `text` as a double-quoted Lua string literal.
pub fn lua_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    push_lua_string(&mut out, text);
    out
}

#[cfg(test)]
mod tests;
