//! Template orchestration: compile once, render with parameters.

use std::path::Path;

use quill_compile::{compile, compile_file, Config, Program};

use crate::{find_include, Chunk, EvalError, Evaluator, Host, RenderError, Stash, Value};

/// Chunk name of templates set from a string.
const STRING_CHUNK: &str = "template";

/// A template, its configuration and its parameters.
///
/// Setting a template compiles it immediately; rendering runs the compiled
/// program through an [`Evaluator`].
#[derive(Clone, Debug)]
pub struct Template {
    config: Config,
    name: String,
    program: Option<Program>,
    stash: Stash,
}

impl Default for Template {
    fn default() -> Self {
        Template::new(Config::default())
    }
}

impl Template {
    pub fn new(config: Config) -> Self {
        Template {
            config,
            name: STRING_CHUNK.to_owned(),
            program: None,
            stash: Stash::new(),
        }
    }

    pub fn set_template_string(&mut self, template: &str) {
        self.name = STRING_CHUNK.to_owned();
        self.program = Some(compile(template, &self.config));
    }

    /// Compile the template file at `path`. On error the previous template,
    /// if any, is kept.
    pub fn set_template_file(&mut self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let program = compile_file(path, &self.config)?;
        self.name = path.display().to_string();
        self.program = Some(program);
        Ok(())
    }

    /// Set a parameter visible to the template as a global.
    pub fn param(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.stash.set(name, value);
    }

    pub fn stash(&self) -> &Stash {
        &self.stash
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    /// Run the compiled program and return its output.
    #[tracing::instrument(level = "debug", skip_all, fields(template = %self.name))]
    pub fn render(&self, evaluator: &dyn Evaluator) -> Result<String, RenderError> {
        let program = self.program.as_ref().ok_or(RenderError::NoTemplate)?;
        let host = RenderHost {
            config: &self.config,
            stash: &self.stash,
            evaluator,
            depth: 0,
            out: String::new(),
        };
        let out = host.run(Chunk {
            name: &self.name,
            source: program.as_str(),
        })?;
        tracing::debug!(len = out.len(), "template rendered");
        Ok(out)
    }
}

/// Output buffer and include resolver for one program run.
struct RenderHost<'a> {
    config: &'a Config,
    stash: &'a Stash,
    evaluator: &'a dyn Evaluator,
    /// Include nesting of the program being run; 0 for the top template.
    depth: usize,
    out: String,
}

impl RenderHost<'_> {
    fn run(mut self, chunk: Chunk<'_>) -> Result<String, RenderError> {
        let (evaluator, stash) = (self.evaluator, self.stash);
        match evaluator.evaluate(chunk, stash, &mut self) {
            Ok(()) => Ok(self.out),
            // Surface the include failure itself rather than the evaluator's
            // wrapper around it.
            Err(EvalError {
                include: Some(err), ..
            }) => Err(*err),
            Err(err) => Err(err.into()),
        }
    }
}

impl Host for RenderHost<'_> {
    fn output(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn include(&mut self, name: &str, env: Option<&Stash>) -> Result<String, RenderError> {
        let limit = self.config.max_include_depth();
        if self.depth >= limit {
            return Err(RenderError::IncludeDepth {
                name: name.to_owned(),
                limit,
            });
        }

        let path = find_include(self.config.include_dirs(), name).ok_or_else(|| {
            RenderError::IncludeNotFound {
                name: name.to_owned(),
                dirs: self.config.include_dirs().map(Path::to_path_buf).collect(),
            }
        })?;
        let program = compile_file(&path, self.config)?;
        tracing::debug!(
            name,
            path = %path.display(),
            depth = self.depth + 1,
            own_env = env.is_some(),
            "including template"
        );

        let child = RenderHost {
            config: self.config,
            stash: env.unwrap_or(self.stash),
            evaluator: self.evaluator,
            depth: self.depth + 1,
            out: String::new(),
        };
        child.run(Chunk {
            name,
            source: program.as_str(),
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
