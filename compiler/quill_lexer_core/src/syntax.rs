//! Tag delimiters recognized by the scanner.

use std::fmt;

use thiserror::Error;

/// An empty delimiter would make the scanner match at every position.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum DelimiterError {
    #[error("start tag must not be empty")]
    EmptyStart,
    #[error("end tag must not be empty")]
    EmptyEnd,
}

/// A start/end delimiter pair, e.g. `{{` and `}}`.
///
/// Both sides are guaranteed non-empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TagPair {
    start: String,
    end: String,
}

impl TagPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, DelimiterError> {
        let start = start.into();
        let end = end.into();
        if start.is_empty() {
            return Err(DelimiterError::EmptyStart);
        }
        if end.is_empty() {
            return Err(DelimiterError::EmptyEnd);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Built-in pairs are known non-empty.
    fn fixed(start: &str, end: &str) -> Self {
        Self {
            start: start.to_owned(),
            end: end.to_owned(),
        }
    }
}

impl fmt::Display for TagPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// What a tag is used for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TagRole {
    Code,
    Expr,
    Comment,
}

impl fmt::Display for TagRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TagRole::Code => "code",
            TagRole::Expr => "expression",
            TagRole::Comment => "comment",
        })
    }
}

/// The set of tags a template is written with.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TagSyntax {
    /// One pair per role. On overlapping starts the comment tag wins, then
    /// the expression tag, then the code tag.
    Roles {
        code: TagPair,
        expr: TagPair,
        comment: TagPair,
    },
    /// A single generic tag. The scanner reads it as code; a `=` right after
    /// the start delimiter and any leading chomp sigil later makes it an
    /// expression tag.
    Single(TagPair),
}

impl TagSyntax {
    /// `{% code %}`, `{{ expr }}`, `{# comment #}`.
    pub fn default_roles() -> Self {
        TagSyntax::Roles {
            code: TagPair::fixed("{%", "%}"),
            expr: TagPair::fixed("{{", "}}"),
            comment: TagPair::fixed("{#", "#}"),
        }
    }

    /// `#{ code }#` and `#{= expr }#`.
    pub fn default_single() -> Self {
        TagSyntax::Single(TagPair::fixed("#{", "}#"))
    }

    /// Start delimiters in match order, paired with their role.
    pub fn openers(&self) -> Vec<(TagRole, &TagPair)> {
        match self {
            TagSyntax::Roles {
                code,
                expr,
                comment,
            } => vec![
                (TagRole::Comment, comment),
                (TagRole::Expr, expr),
                (TagRole::Code, code),
            ],
            TagSyntax::Single(pair) => vec![(TagRole::Code, pair)],
        }
    }

    /// Returns `true` for the single-tag variant.
    pub fn is_single(&self) -> bool {
        matches!(self, TagSyntax::Single(_))
    }
}

impl Default for TagSyntax {
    fn default() -> Self {
        Self::default_roles()
    }
}
