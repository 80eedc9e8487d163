//! Low-level tag scanner for quill templates.
//!
//! Splits a template into an ordered [`TokenList`] of literal text,
//! whitespace, newlines and script regions (code, expression, comment).
//! Script regions are scanned with just enough knowledge of the embedded
//! language (quoted and long-bracket strings) to find the real end tag.
//!
//! ```text
//! &str ──► SourceBuffer ──► Cursor ──► TagScanner ──► TokenList
//! ```
//!
//! Chomping and program emission live in `quill_compile`.

mod cursor;
pub mod literal;
mod scanner;
mod source_buffer;
mod syntax;
mod token;
mod token_list;

pub use cursor::Cursor;
pub use scanner::{scan, TagScanner};
pub use source_buffer::SourceBuffer;
pub use syntax::{DelimiterError, TagPair, TagRole, TagSyntax};
pub use token::{Token, TokenKind};
pub use token_list::{Iter, TokenId, TokenList};
