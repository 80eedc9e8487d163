//! Hand-written tag scanner producing a [`TokenList`].
//!
//! # Modes
//!
//! Outside tags the scanner splits input into newlines, runs of horizontal
//! whitespace and text runs. A text run ends at a newline, a space or tab,
//! or the start of any tag. Inside a tag it looks only for the end
//! delimiter, skipping string literals (see [`crate::literal`]) so that an
//! end delimiter written inside a string does not close the tag. Newlines
//! inside a tag stay part of the tag's value.
//!
//! An unterminated tag or string is not an error: the tag's value is the
//! rest of the template.

use crate::literal::skip_literal;
use crate::{Cursor, SourceBuffer, TagPair, TagRole, TagSyntax, Token, TokenKind, TokenList};

/// Scan `template` into a token sequence.
///
/// An empty template yields an empty list.
pub fn scan(template: &str, syntax: &TagSyntax) -> TokenList {
    let buf = SourceBuffer::new(template);
    TagScanner::new(buf.cursor(), syntax).finish()
}

/// Single-pass scanner over one template.
pub struct TagScanner<'a> {
    cursor: Cursor<'a>,
    /// Start delimiters in match order.
    openers: Vec<(TagRole, &'a TagPair)>,
    /// First byte of every start delimiter, to skip `starts_with` checks on
    /// ordinary text bytes.
    opener_firsts: Vec<u8>,
    tokens: TokenList,
}

impl<'a> TagScanner<'a> {
    pub fn new(cursor: Cursor<'a>, syntax: &'a TagSyntax) -> Self {
        let openers = syntax.openers();
        let mut opener_firsts: Vec<u8> = openers
            .iter()
            .filter_map(|(_, pair)| pair.start().as_bytes().first().copied())
            .collect();
        opener_firsts.sort_unstable();
        opener_firsts.dedup();
        Self {
            cursor,
            openers,
            opener_firsts,
            tokens: TokenList::with_capacity(cursor.source_len() / 8),
        }
    }

    /// Scan to EOF and return the tokens.
    pub fn finish(mut self) -> TokenList {
        while !self.cursor.is_eof() {
            self.next_token();
        }
        self.tokens
    }

    /// Scan one token. Always consumes at least one byte.
    fn next_token(&mut self) {
        let start = self.cursor.pos();
        match self.cursor.current() {
            b'\n' => self.newline(),
            b' ' | b'\t' => self.whitespace(start),
            _ => match self.opener_at_cursor() {
                Some((role, pair)) => self.tag(role, pair),
                None => self.text(start),
            },
        }
    }

    // ─── Text mode ─────────────────────────────────────────────────────

    fn newline(&mut self) {
        self.cursor.advance();
        self.tokens.push(Token::newline());
    }

    fn whitespace(&mut self, start: usize) {
        self.cursor.eat_whitespace();
        self.push(TokenKind::Whitespace, start, self.cursor.pos());
    }

    fn text(&mut self, start: usize) {
        // The first byte is known not to start anything else.
        self.cursor.advance();
        while !self.cursor.is_eof() {
            match self.cursor.current() {
                b'\n' | b' ' | b'\t' => break,
                _ if self.opener_at_cursor().is_some() => break,
                _ => self.cursor.advance(),
            }
        }
        self.push(TokenKind::Text, start, self.cursor.pos());
    }

    /// The tag whose start delimiter begins at the cursor, if any.
    fn opener_at_cursor(&self) -> Option<(TagRole, &'a TagPair)> {
        if self.opener_firsts.binary_search(&self.cursor.current()).is_err() {
            return None;
        }
        self.openers
            .iter()
            .find(|(_, pair)| self.cursor.starts_with(pair.start().as_bytes()))
            .copied()
    }

    // ─── Tag mode ──────────────────────────────────────────────────────

    fn tag(&mut self, role: TagRole, pair: &TagPair) {
        self.cursor.advance_n(pair.start().len());

        // A single tag's leading `=` stays in the value: it can only be told
        // apart from a chomp sigil once the sigils are stripped.
        let kind = match role {
            TagRole::Code => TokenKind::Code,
            TagRole::Expr => TokenKind::Expr,
            TagRole::Comment => TokenKind::Comment,
        };

        let start = self.cursor.pos();
        let end_tag = pair.end().as_bytes();
        loop {
            if self.cursor.is_eof() {
                self.push(kind, start, self.cursor.pos());
                return;
            }
            if skip_literal(&mut self.cursor) {
                continue;
            }
            if self.cursor.starts_with(end_tag) {
                self.push(kind, start, self.cursor.pos());
                self.cursor.advance_n(end_tag.len());
                return;
            }
            self.cursor.advance();
        }
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        let value = self.cursor.slice(start, end);
        self.tokens.push(Token::new(kind, value));
    }
}
