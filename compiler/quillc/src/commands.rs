//! Command handlers.

use std::io::{self, Write};

use quill_compile::{compile, read_template, read_template_file, CompileError, Program};
use quill_lexer_core::scan;
use thiserror::Error;

use crate::options::Options;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Print the compiled program.
pub fn compile_command(options: &Options) -> Result<(), CommandError> {
    let program = load_program(options)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(program.as_str().as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print one line per scanned token: kind and quoted value.
pub fn tokens_command(options: &Options) -> Result<(), CommandError> {
    let template = load_template(options)?;
    let tokens = scan(&template, options.config.syntax());
    let mut stdout = io::stdout().lock();
    for token in tokens.tokens() {
        writeln!(stdout, "{:<10} {:?}", token.kind.name(), token.value)?;
    }
    stdout.flush()?;
    Ok(())
}

fn load_program(options: &Options) -> Result<Program, CompileError> {
    let template = load_template(options)?;
    Ok(compile(&template, &options.config))
}

fn load_template(options: &Options) -> Result<String, CompileError> {
    match &options.path {
        Some(path) => read_template_file(path),
        None => read_template(io::stdin().lock()),
    }
}
