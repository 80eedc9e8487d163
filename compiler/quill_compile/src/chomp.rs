//! Whitespace chomping around script tags.
//!
//! A script tag may start and/or end with a sigil that controls what
//! happens to the whitespace and newline tokens next to it:
//!
//! | Sigil | Chomp      | Effect on the adjacent blank run                |
//! |-------|------------|-------------------------------------------------|
//! | `+`   | `None`     | kept                                            |
//! | `-`   | `OneLine`  | removed up to and including the first newline   |
//! | `:`   | `Collapse` | removed entirely, replaced by a single space    |
//! | `~`   | `Greedy`   | removed entirely                                |
//!
//! A leading sigil acts on the run before the tag, a trailing sigil on the
//! run after it. Removed tokens are downgraded to [`TokenKind::Plain`] so
//! they still reach the program as inert source text. Chomping never
//! crosses a token that is not whitespace or newline.
//!
//! Chomping runs as a second pass over the finished sequence so every tag
//! sees its final neighbours. In single-tag syntax the `=` that marks an
//! expression sits behind the leading sigil, so [`classify_expressions`]
//! runs after it.

use std::fmt;

use quill_lexer_core::{Token, TokenId, TokenKind, TokenList};

/// What to do with the blank run on one side of a script tag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Chomp {
    #[default]
    None,
    OneLine,
    Collapse,
    Greedy,
}

impl Chomp {
    /// The chomp a sigil byte selects, if it is a sigil at all.
    pub fn from_sigil(byte: u8) -> Option<Chomp> {
        match byte {
            b'+' => Some(Chomp::None),
            b'-' => Some(Chomp::OneLine),
            b':' => Some(Chomp::Collapse),
            b'~' => Some(Chomp::Greedy),
            _ => None,
        }
    }

    pub fn sigil(self) -> char {
        match self {
            Chomp::None => '+',
            Chomp::OneLine => '-',
            Chomp::Collapse => ':',
            Chomp::Greedy => '~',
        }
    }
}

impl fmt::Display for Chomp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Chomp::None => "none",
            Chomp::OneLine => "one-line",
            Chomp::Collapse => "collapse",
            Chomp::Greedy => "greedy",
        })
    }
}

/// Chomps requested by one script tag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Directives {
    pub pre: Chomp,
    pub post: Chomp,
}

/// Read and strip the sigils of a script token's value.
///
/// The leading sigil is stripped first; the trailing sigil is read from
/// what remains, so a value consisting of a single sigil is a leading one.
pub fn take_directives(value: &mut String) -> Directives {
    let pre = match value.bytes().next().and_then(Chomp::from_sigil) {
        Some(chomp) => {
            value.remove(0);
            chomp
        }
        None => Chomp::None,
    };
    let post = match value.bytes().next_back().and_then(Chomp::from_sigil) {
        Some(chomp) => {
            value.pop();
            chomp
        }
        None => Chomp::None,
    };
    Directives { pre, post }
}

#[derive(Clone, Copy)]
enum Side {
    Before,
    After,
}

/// Apply every script token's chomp sigils, in place.
///
/// Tokens already processed are skipped, so a second pass is a no-op.
pub fn apply_chomp(tokens: &mut TokenList) {
    for id in tokens.ids() {
        let token = tokens.get_mut(id);
        if !token.kind.is_script() || token.chomp_applied {
            continue;
        }
        let directives = take_directives(&mut token.value);
        token.chomp_applied = true;

        chomp_side(tokens, id, directives.pre, Side::Before);
        chomp_side(tokens, id, directives.post, Side::After);
    }
}

/// Turn single-tag code tokens whose value starts with `=` into expression
/// tokens, dropping the `=`.
///
/// Only tokens whose sigils have already been stripped by [`apply_chomp`]
/// are looked at: `#{-= x }#` is an expression with a one-line chomp, while
/// in `#{=-1}#` the `-` belongs to the expression.
pub fn classify_expressions(tokens: &mut TokenList) {
    for id in tokens.ids() {
        let token = tokens.get_mut(id);
        if token.kind == TokenKind::Code && token.chomp_applied && token.value.starts_with('=') {
            token.value.remove(0);
            token.kind = TokenKind::Expr;
        }
    }
}

fn chomp_side(tokens: &mut TokenList, script: TokenId, chomp: Chomp, side: Side) {
    if chomp == Chomp::None {
        return;
    }

    let step = |tokens: &TokenList, id| match side {
        Side::Before => tokens.prev(id),
        Side::After => tokens.next(id),
    };

    let mut next = step(tokens, script);
    while let Some(id) = next {
        let token = tokens.get_mut(id);
        if !token.kind.is_blank() {
            break;
        }
        let was_newline = token.kind == TokenKind::Newline;
        token.kind = TokenKind::Plain;
        if chomp == Chomp::OneLine && was_newline {
            break;
        }
        next = step(tokens, id);
    }

    if chomp == Chomp::Collapse {
        match side {
            Side::Before => tokens.insert_before(script, Token::space()),
            Side::After => tokens.insert_after(script, Token::space()),
        };
    }
}
