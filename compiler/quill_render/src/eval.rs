//! The contract between rendering and a script evaluator.
//!
//! quill does not run Lua itself. An [`Evaluator`] executes a compiled
//! [`Chunk`] with the stash entries as globals and binds two host calls:
//!
//! - `Io.output(...)` forwards each argument to [`Host::output`], converted
//!   with [`Value::output_text`](crate::Value::output_text) rules.
//! - `Io.include(name[, env])` calls [`Host::include`] and outputs the text
//!   it returns. A table passed as `env` is handed over as the include's
//!   stash; without one the include sees the caller's stash.

use thiserror::Error;

use crate::{RenderError, Stash};

/// A compiled program ready for evaluation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Chunk<'a> {
    /// Label for diagnostics: the template file or include name.
    pub name: &'a str,
    pub source: &'a str,
}

/// Callbacks a running program makes into the renderer.
pub trait Host {
    /// Append text to the render output.
    fn output(&mut self, text: &str);

    /// Render the template `name` from the include path and return its
    /// output. The include runs with `env` when given, otherwise with the
    /// current stash.
    fn include(&mut self, name: &str, env: Option<&Stash>) -> Result<String, RenderError>;
}

/// Executes compiled programs.
pub trait Evaluator {
    fn evaluate(
        &self,
        chunk: Chunk<'_>,
        stash: &Stash,
        host: &mut dyn Host,
    ) -> Result<(), EvalError>;
}

/// A program failed to load or run.
#[derive(Debug, Error)]
#[error("{chunk}: {message}")]
pub struct EvalError {
    pub chunk: String,
    pub message: String,
    /// Set when the failure was an include the host could not render.
    #[source]
    pub include: Option<Box<RenderError>>,
}

impl EvalError {
    pub fn new(chunk: impl Into<String>, message: impl Into<String>) -> Self {
        EvalError {
            chunk: chunk.into(),
            message: message.into(),
            include: None,
        }
    }

    /// Wrap an error returned by [`Host::include`].
    pub fn include(chunk: impl Into<String>, err: RenderError) -> Self {
        EvalError {
            chunk: chunk.into(),
            message: err.to_string(),
            include: Some(Box::new(err)),
        }
    }
}
