//! Test helpers for rendering without a Lua runtime.
//!
//! Provides `MockEvaluator`, which understands just the statements the
//! compiler emits for output plus a few calls tests write by hand.

use crate::{Chunk, EvalError, Evaluator, Host, Stash, Value};

/// Evaluator for a tiny statement language:
///
/// - `Io.output(<arg>, ...)`: outputs each argument, a string literal or the
///   stash value at a dotted path (`nil` when missing).
/// - `Io.include(<string>[, <path>])`: outputs the rendered include. The
///   optional second argument names a stash table used as the include's
///   environment.
/// - `error(<string>)`: fails with that message.
///
/// Strings may be `"..."`, `'...'` (with the escapes the compiler emits) or
/// long brackets (`[[...]]`, `[==[...]==]`). Statements may end with `;`.
/// Anything else is an evaluation error.
pub struct MockEvaluator;

enum Arg<'a> {
    Str(String),
    Name(&'a str),
}

impl Evaluator for MockEvaluator {
    fn evaluate(
        &self,
        chunk: Chunk<'_>,
        stash: &Stash,
        host: &mut dyn Host,
    ) -> Result<(), EvalError> {
        let fail = |message: String| EvalError::new(chunk.name, message);
        let mut rest = chunk.source;
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                return Ok(());
            }
            if let Some(after) = rest.strip_prefix("Io.output(") {
                let (args, after) =
                    call_args(after).ok_or_else(|| fail(format!("bad call: {rest}")))?;
                for arg in args {
                    let text = match arg {
                        Arg::Str(s) => s,
                        Arg::Name(path) => stash
                            .lookup(path)
                            .map_or_else(|| "nil".to_owned(), Value::output_text),
                    };
                    host.output(&text);
                }
                rest = after;
            } else if let Some(after) = rest.strip_prefix("Io.include(") {
                let (args, after) =
                    call_args(after).ok_or_else(|| fail(format!("bad call: {rest}")))?;
                let mut args = args.into_iter();
                let Some(Arg::Str(name)) = args.next() else {
                    return Err(fail("include name must be a string".to_owned()));
                };
                let env = match args.next() {
                    None => None,
                    Some(Arg::Name(path)) => match stash.lookup(path) {
                        Some(Value::Table(table)) => Some(Stash::from(table.clone())),
                        _ => {
                            let message = format!("include environment `{path}` is not a table");
                            return Err(fail(message));
                        }
                    },
                    Some(Arg::Str(_)) => {
                        return Err(fail("include environment must be a table".to_owned()));
                    }
                };
                if args.next().is_some() {
                    return Err(fail("include takes at most two arguments".to_owned()));
                }
                let text = host
                    .include(&name, env.as_ref())
                    .map_err(|err| EvalError::include(chunk.name, err))?;
                host.output(&text);
                rest = after;
            } else if let Some(after) = rest.strip_prefix("error(") {
                let message = match call_args(after).map(|(args, _)| args.into_iter().next()) {
                    Some(Some(Arg::Str(s))) => s,
                    _ => "error".to_owned(),
                };
                return Err(fail(message));
            } else {
                let line = rest.lines().next().unwrap_or(rest);
                return Err(fail(format!("unsupported statement `{line}`")));
            }
        }
    }
}

/// Parse `<arg>, <arg>...)` and an optional `;`, returning the arguments and
/// the rest.
fn call_args(mut src: &str) -> Option<(Vec<Arg<'_>>, &str)> {
    let mut args = Vec::new();
    loop {
        let (arg, rest) = parse_arg(src)?;
        args.push(arg);
        let rest = rest.trim_start();
        if let Some(rest) = rest.strip_prefix(',') {
            src = rest;
            continue;
        }
        let rest = rest.strip_prefix(')')?;
        return Some((args, rest.strip_prefix(';').unwrap_or(rest)));
    }
}

fn parse_arg(src: &str) -> Option<(Arg<'_>, &str)> {
    let src = src.trim_start();
    match src.chars().next()? {
        quote @ ('"' | '\'') => {
            let (s, rest) = quoted(&src[1..], quote)?;
            Some((Arg::Str(s), rest))
        }
        '[' => {
            let level = src[1..].bytes().take_while(|&b| b == b'=').count();
            let body = src[1 + level..].strip_prefix('[')?;
            let close = format!("]{}]", "=".repeat(level));
            let end = body.find(&close)?;
            Some((Arg::Str(body[..end].to_owned()), &body[end + close.len()..]))
        }
        _ => {
            let end = src.find([',', ')'])?;
            Some((Arg::Name(src[..end].trim()), &src[end..]))
        }
    }
}

/// Decode a quoted string body up to the closing `quote`.
fn quoted(src: &str, quote: char) -> Option<(String, &str)> {
    let mut out = String::new();
    let mut chars = src.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            c if c == quote => return Some((out, &src[i + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                out.push(match escaped {
                    'a' => '\u{7}',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'v' => '\u{b}',
                    // `\ddd`: up to three decimal digits
                    digit @ '0'..='9' => {
                        let mut code = digit.to_digit(10)?;
                        for _ in 0..2 {
                            let Some(d) = chars.peek().and_then(|&(_, d)| d.to_digit(10)) else {
                                break;
                            };
                            code = code * 10 + d;
                            chars.next();
                        }
                        char::from(u8::try_from(code).ok()?)
                    }
                    other => other,
                });
            }
            c => out.push(c),
        }
    }
    None
}
