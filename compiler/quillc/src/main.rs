//! quill template compiler CLI.
//!
//! Prints the Lua program a template compiles to, or the raw token stream.

mod commands;
mod options;

use commands::{compile_command, tokens_command};
use options::Options;

const USAGE_OPTIONS: &str = "\
Options:
  --single              Use a single `#{ }#` tag; `#{= }#` outputs an expression
  --tag=START,END       Use a single tag with the given delimiters
  --code=START,END      Code tag (default `{% %}`)
  --expr=START,END      Expression tag (default `{{ }}`)
  --comment=START,END   Comment tag (default `{# #}`)
  --output-fn=NAME      Output function called by the program (default `Io.output`)

Use `-` as the path to read the template from standard input.";

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let run = match command {
        "compile" => compile_command,
        "tokens" => tokens_command,
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let options = match Options::parse(&args[2..]) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: quill {command} <template> [options]");
            eprintln!();
            eprintln!("{USAGE_OPTIONS}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("quill template compiler");
    println!();
    println!("Usage: quill <command> <template> [options]");
    println!();
    println!("Commands:");
    println!("  compile    Print the Lua program for a template");
    println!("  tokens     Print the tokens of a template, before chomping");
    println!("  help       Show this message");
    println!();
    println!("{USAGE_OPTIONS}");
}

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=quill_compile=debug` or `RUST_LOG=debug`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
