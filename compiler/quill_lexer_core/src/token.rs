//! Template tokens.

use std::fmt;

/// Classification of a stretch of template input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Passed through verbatim into the program; neither literal output nor
    /// script. Chomped whitespace ends up here.
    Plain,
    /// Literal text without whitespace or newlines.
    Text,
    /// A maximal run of spaces and tabs.
    Whitespace,
    /// A single `\n`.
    Newline,
    /// Script code, injected into the program as-is.
    Code,
    /// Script expression whose value is output.
    Expr,
    /// Discarded.
    Comment,
}

impl TokenKind {
    /// Code, expression and comment tokens: the ones that carry chomp sigils.
    #[inline]
    pub fn is_script(self) -> bool {
        matches!(self, TokenKind::Code | TokenKind::Expr | TokenKind::Comment)
    }

    /// Whitespace and newline tokens: the ones chomping may remove.
    #[inline]
    pub fn is_blank(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Plain => "plain",
            TokenKind::Text => "text",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Code => "code",
            TokenKind::Expr => "expr",
            TokenKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its owned payload.
///
/// Script tokens hold the interior of the tag, without delimiters.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Set once chomp sigils have been read and stripped from `value`.
    pub chomp_applied: bool,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
            chomp_applied: false,
        }
    }

    pub fn newline() -> Self {
        Token::new(TokenKind::Newline, "\n")
    }

    /// The single space inserted by a collapse chomp.
    pub fn space() -> Self {
        Token::new(TokenKind::Whitespace, " ")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
