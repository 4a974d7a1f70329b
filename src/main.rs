use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use interpreter::{display_error, errors::errors::Error, parser::parser::parse};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Parses source text and prints the reconstructed program or its diagnostics.
#[derive(Debug, Parser)]
#[command(name = "interpreter", about = "Lexer and parser front end")]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Prompt shown by the interactive loop
    #[arg(long, default_value = ">> ")]
    prompt: String,

    /// Parse this file once instead of starting the interactive loop
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.file {
        Some(path) => run_file(path),
        None => run_repl(&cli.prompt),
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "interpreter=info",
        1 => "interpreter=debug",
        _ => "interpreter=trace",
    }
}

fn run_file(path: &Path) -> ExitCode {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %path.display(), "failed to read source: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = path.file_name().map(|name| name.to_string_lossy().into_owned());
    let (parser, program) = parse(source.clone(), file_name);

    if parser.errors().is_empty() {
        println!("{}", program);
        ExitCode::SUCCESS
    } else {
        for error in parser.errors() {
            print!("{}", display_error(error, &source));
        }
        ExitCode::FAILURE
    }
}

fn run_repl(prompt: &str) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            error!("failed to start line editor: {}", err);
            return ExitCode::FAILURE;
        }
    };

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(err) = rl.add_history_entry(line.as_str()) {
                    debug!("failed to record history entry: {}", err);
                }

                let (parser, program) = parse(line, None);
                if parser.errors().is_empty() {
                    println!("{}", program);
                } else {
                    print_parse_errors(parser.errors());
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("leaving repl");
                return ExitCode::SUCCESS;
            }
            Err(err) => {
                error!("failed to read line: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }
}

fn print_parse_errors(errors: &[Error]) {
    println!("parser errors:");
    for error in errors {
        println!("\t{}", error);
    }
}
