//! Template compilation: scan, chomp, emit.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use quill_lexer_core::scan;
use thiserror::Error;

use crate::{apply_chomp, classify_expressions, emit, Config};

/// Errors from reading a template before compilation.
///
/// Compilation itself cannot fail: any text is a valid template.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("cannot read template `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read template: {0}")]
    Read(#[source] io::Error),
    #[error("template is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// A compiled template: Lua source that renders the template when run.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Program {
    source: String,
}

impl Program {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.source
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl AsRef<str> for Program {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

/// Compile template text into a program.
#[tracing::instrument(level = "debug", skip_all, fields(len = template.len()))]
pub fn compile(template: &str, config: &Config) -> Program {
    let mut tokens = scan(template, config.syntax());
    apply_chomp(&mut tokens);
    if config.syntax().is_single() {
        classify_expressions(&mut tokens);
    }
    let source = emit(&tokens, config.output_function());
    tracing::debug!(tokens = tokens.len(), program = source.len(), "template compiled");
    Program { source }
}

/// Read a whole template from `reader`.
pub fn read_template(mut reader: impl Read) -> Result<String, CompileError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(CompileError::Read)?;
    Ok(String::from_utf8(bytes)?)
}

/// Read the template file at `path`.
pub fn read_template_file(path: impl AsRef<Path>) -> Result<String, CompileError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CompileError::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(String::from_utf8(bytes)?)
}

/// Read a template from `reader` and compile it.
pub fn compile_reader(reader: impl Read, config: &Config) -> Result<Program, CompileError> {
    let template = read_template(reader)?;
    Ok(compile(&template, config))
}

/// Read the template file at `path` and compile it.
pub fn compile_file(path: impl AsRef<Path>, config: &Config) -> Result<Program, CompileError> {
    let template = read_template_file(path)?;
    Ok(compile(&template, config))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
