//! Template compiler for quill.
//!
//! Turns template text into a Lua program:
//!
//! ```text
//! template ──► scan ──► apply_chomp ──► emit ──► Program
//! ```
//!
//! Running the program is the job of an evaluator (see `quill_render`).

mod chomp;
mod compile;
mod config;
mod emit;
pub mod escape;

pub use chomp::{apply_chomp, classify_expressions, take_directives, Chomp, Directives};
pub use compile::{
    compile, compile_file, compile_reader, read_template, read_template_file, CompileError,
    Program,
};
pub use config::{Config, ConfigError, DEFAULT_MAX_INCLUDE_DEPTH, DEFAULT_OUTPUT_FUNCTION};
pub use emit::emit;

pub use quill_lexer_core::{TagPair, TagRole, TagSyntax};
