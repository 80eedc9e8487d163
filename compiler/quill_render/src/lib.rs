//! Rendering for quill templates.
//!
//! A [`Template`] compiles its source with `quill_compile` and renders the
//! resulting program through an [`Evaluator`], the embedder-supplied Lua
//! runtime. Parameters live in a [`Stash`] of [`Value`]s; `Io.include`
//! resolves other templates along the configured include path.

mod error;
mod eval;
mod include;
mod stash;
mod template;
mod value;

#[cfg(test)]
mod test_helpers;

pub use error::RenderError;
pub use eval::{Chunk, EvalError, Evaluator, Host};
pub use include::find_include;
pub use stash::Stash;
pub use template::Template;
pub use value::{NativeFn, NativeFunction, Table, Value};

pub use quill_compile::{Config, ConfigError, Program};
