//! Program emission.
//!
//! Walks a chomped [`TokenList`] and writes a Lua program that alternates
//! output calls for literal text with the script code of the template:
//!
//! | Token        | Emitted                               |
//! |--------------|---------------------------------------|
//! | `Plain`      | value verbatim                        |
//! | `Code`       | value verbatim                        |
//! | `Text`       | `out("<escaped value>");`             |
//! | `Whitespace` | `out("<value>");`                     |
//! | `Newline`    | `out("\n");` and a source newline     |
//! | `Expr`       | `out(<value>);`                       |
//! | `Comment`    | nothing                               |
//!
//! The source newline after each template newline keeps program line
//! numbers close to template line numbers.

use quill_lexer_core::{TokenKind, TokenList};

use crate::escape::push_lua_string;

/// Emit the program for `tokens`, calling `output_fn` for output.
///
/// The list is only read.
pub fn emit(tokens: &TokenList, output_fn: &str) -> String {
    let mut emitter = Emitter::new(output_fn, tokens.len());
    for token in tokens.tokens() {
        emitter.token(token.kind, &token.value);
    }
    emitter.finish()
}

struct Emitter<'a> {
    out: String,
    output_fn: &'a str,
}

impl<'a> Emitter<'a> {
    fn new(output_fn: &'a str, token_count: usize) -> Self {
        Emitter {
            out: String::with_capacity(token_count * (output_fn.len() + 8)),
            output_fn,
        }
    }

    fn token(&mut self, kind: TokenKind, value: &str) {
        match kind {
            TokenKind::Plain | TokenKind::Code => self.out.push_str(value),
            TokenKind::Text | TokenKind::Whitespace => {
                self.open_call();
                push_lua_string(&mut self.out, value);
                self.close_call();
            }
            TokenKind::Newline => {
                self.open_call();
                self.out.push_str("\"\\n\"");
                self.close_call();
                self.out.push('\n');
            }
            TokenKind::Expr => {
                self.open_call();
                self.out.push_str(value);
                self.close_call();
            }
            TokenKind::Comment => {}
        }
    }

    fn open_call(&mut self) {
        self.out.push_str(self.output_fn);
        self.out.push('(');
    }

    fn close_call(&mut self) {
        self.out.push_str(");");
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests;
