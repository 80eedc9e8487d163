//! Command-line options shared by every command.

use std::path::PathBuf;

use quill_compile::{Config, ConfigError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown option `{0}`")]
    Unknown(String),
    #[error("`{option}` expects START,END, got `{value}`")]
    BadPair { option: String, value: String },
    #[error("missing template path")]
    MissingPath,
    #[error("unexpected argument `{0}`")]
    Extra(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parsed options for `compile` and `tokens`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Template path; `None` reads standard input.
    pub path: Option<PathBuf>,
    pub config: Config,
}

/// Delimiter options, collected before the config is built.
struct Tags {
    single: Option<(String, String)>,
    code: (String, String),
    expr: (String, String),
    comment: (String, String),
}

impl Default for Tags {
    fn default() -> Self {
        Tags {
            single: None,
            code: pair("{%", "%}"),
            expr: pair("{{", "}}"),
            comment: pair("{#", "#}"),
        }
    }
}

impl Options {
    /// Parse the arguments that follow the command name.
    pub fn parse(args: &[String]) -> Result<Self, OptionsError> {
        let mut tags = Tags::default();
        let mut output_fn = None;
        let mut path: Option<String> = None;

        for arg in args {
            if arg == "--single" {
                tags.single.get_or_insert_with(|| pair("#{", "}#"));
            } else if let Some(value) = arg.strip_prefix("--tag=") {
                tags.single = Some(split_pair("--tag", value)?);
            } else if let Some(value) = arg.strip_prefix("--code=") {
                tags.code = split_pair("--code", value)?;
            } else if let Some(value) = arg.strip_prefix("--expr=") {
                tags.expr = split_pair("--expr", value)?;
            } else if let Some(value) = arg.strip_prefix("--comment=") {
                tags.comment = split_pair("--comment", value)?;
            } else if let Some(value) = arg.strip_prefix("--output-fn=") {
                output_fn = Some(value.to_owned());
            } else if arg.starts_with("--") {
                return Err(OptionsError::Unknown(arg.clone()));
            } else if path.is_some() {
                return Err(OptionsError::Extra(arg.clone()));
            } else {
                path = Some(arg.clone());
            }
        }

        let path = path.ok_or(OptionsError::MissingPath)?;
        let mut config = tags.into_config()?;
        if let Some(name) = output_fn {
            config = config.with_output_function(name)?;
        }

        Ok(Options {
            path: (path != "-").then(|| PathBuf::from(path)),
            config,
        })
    }
}

impl Tags {
    /// `--tag`/`--single` win over the per-role options.
    fn into_config(self) -> Result<Config, ConfigError> {
        match self.single {
            Some((start, end)) => Config::single(&start, &end),
            None => Config::roles(
                (&self.code.0, &self.code.1),
                (&self.expr.0, &self.expr.1),
                (&self.comment.0, &self.comment.1),
            ),
        }
    }
}

fn pair(start: &str, end: &str) -> (String, String) {
    (start.to_owned(), end.to_owned())
}

fn split_pair(option: &str, value: &str) -> Result<(String, String), OptionsError> {
    match value.split_once(',') {
        Some((start, end)) => Ok(pair(start, end)),
        None => Err(OptionsError::BadPair {
            option: option.to_owned(),
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests;
