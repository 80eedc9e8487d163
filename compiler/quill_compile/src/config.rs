//! Compiler and renderer configuration.
//!
//! Delimiters are validated when the configuration is built, so scanning
//! never sees an empty tag.

use std::path::{Path, PathBuf};

use quill_lexer_core::{DelimiterError, TagPair, TagRole, TagSyntax};
use thiserror::Error;

/// Name of the host function the program calls to output text.
pub const DEFAULT_OUTPUT_FUNCTION: &str = "Io.output";

/// Nesting limit for `Io.include`.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 16;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("invalid {role} tag: {source}")]
    Delimiter {
        role: TagRole,
        #[source]
        source: DelimiterError,
    },
    #[error("output function name must not be empty")]
    EmptyOutputFunction,
}

/// Tags, include search path and runtime names for one template engine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    syntax: TagSyntax,
    include_dirs: Vec<PathBuf>,
    output_function: String,
    max_include_depth: usize,
}

impl Default for Config {
    /// Role tags (`{% %}`, `{{ }}`, `{# #}`), includes searched in `.`.
    fn default() -> Self {
        Config {
            syntax: TagSyntax::default_roles(),
            include_dirs: vec![PathBuf::from(".")],
            output_function: DEFAULT_OUTPUT_FUNCTION.to_owned(),
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }
}

impl Config {
    /// Configuration with one delimiter pair per role, given as
    /// `(start, end)` strings.
    pub fn roles(
        code: (&str, &str),
        expr: (&str, &str),
        comment: (&str, &str),
    ) -> Result<Self, ConfigError> {
        let syntax = TagSyntax::Roles {
            code: pair(TagRole::Code, code)?,
            expr: pair(TagRole::Expr, expr)?,
            comment: pair(TagRole::Comment, comment)?,
        };
        Ok(Config::default().with_syntax(syntax))
    }

    /// Configuration with a single generic tag; `=` after the start
    /// delimiter (and after a leading chomp sigil, if any) marks an
    /// expression.
    pub fn single(start: &str, end: &str) -> Result<Self, ConfigError> {
        let syntax = TagSyntax::Single(pair(TagRole::Code, (start, end))?);
        Ok(Config::default().with_syntax(syntax))
    }

    #[must_use]
    pub fn with_syntax(mut self, syntax: TagSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Append a directory to the include search path.
    #[must_use]
    pub fn with_include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dirs.push(dir.into());
        self
    }

    /// Put a directory at the front of the include search path.
    #[must_use]
    pub fn prepend_include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dirs.insert(0, dir.into());
        self
    }

    /// Replace the include search path.
    #[must_use]
    pub fn with_include_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.include_dirs = dirs.into_iter().collect();
        self
    }

    pub fn with_output_function(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyOutputFunction);
        }
        self.output_function = name;
        Ok(self)
    }

    #[must_use]
    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    pub fn syntax(&self) -> &TagSyntax {
        &self.syntax
    }

    pub fn include_dirs(&self) -> impl Iterator<Item = &Path> {
        self.include_dirs.iter().map(PathBuf::as_path)
    }

    pub fn output_function(&self) -> &str {
        &self.output_function
    }

    pub fn max_include_depth(&self) -> usize {
        self.max_include_depth
    }
}

fn pair(role: TagRole, (start, end): (&str, &str)) -> Result<TagPair, ConfigError> {
    TagPair::new(start, end).map_err(|source| ConfigError::Delimiter { role, source })
}
