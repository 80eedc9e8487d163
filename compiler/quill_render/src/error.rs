//! Render errors.

use std::path::PathBuf;

use quill_compile::CompileError;
use thiserror::Error;

use crate::EvalError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no template set")]
    NoTemplate,
    #[error("compile failed: {0}")]
    Compile(#[from] CompileError),
    #[error("render failed: {0}")]
    Eval(#[from] EvalError),
    #[error("include `{name}` not found in {}", display_dirs(.dirs))]
    IncludeNotFound { name: String, dirs: Vec<PathBuf> },
    #[error("include `{name}` exceeds the nesting limit of {limit}")]
    IncludeDepth { name: String, limit: usize },
}

fn display_dirs(dirs: &[PathBuf]) -> String {
    let dirs: Vec<_> = dirs.iter().map(|d| d.display().to_string()).collect();
    format!("[{}]", dirs.join(", "))
}
