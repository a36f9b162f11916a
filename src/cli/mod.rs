//! The Strand Command-Line Interface.
//!
//! Reads a source text, parses it with one of the demonstration grammars, and
//! prints either the parsed value or the highlighted diagnostic.

use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::{fs, process};

use clap::Parser;
use termcolor::ColorChoice;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{ColorMode, GrammarKind, OutputFormat, StrandArgs};
use crate::error::ParseError;
use crate::grammars::{terms, tree_document};
use crate::parser::run as run_parser;

pub mod args;
pub mod diagnostics;
pub mod output;

/// Everything that can make the CLI exit unsuccessfully.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Parse(ParseError),
}

impl CliError {
    /// 1 for input that does not parse, 2 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) => 1,
            _ => 2,
        }
    }
}

/// The main entry point for the CLI.
pub fn run() {
    let args = StrandArgs::parse();
    init_tracing(args.verbose);

    let Err(error) = execute(&args) else {
        return;
    };
    report_failure(&error, &args);
    process::exit(error.exit_code());
}

/// Parses the requested input and prints the outcome.
pub fn execute(args: &StrandArgs) -> Result<(), CliError> {
    let source = read_source(args.file.as_deref())?;
    tracing::debug!(grammar = ?args.grammar, bytes = source.len(), "parsing");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = match args.grammar {
        GrammarKind::Tree => run_parser(tree_document, &source)
            .map(|tree| output::print_value(&mut out, &tree, &tree.to_string(), args.format)),
        GrammarKind::Term => run_parser(terms, &source).map(|terms| {
            let text = terms
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            output::print_value(&mut out, &terms, &text, args.format)
        }),
    };

    match outcome {
        Ok(printed) => printed,
        Err(error) => {
            if args.format == OutputFormat::Json {
                output::print_error_json(&mut out, &error)?;
            }
            Err(CliError::Parse(error))
        }
    }
}

fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| CliError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(source)
        }
    }
}

fn report_failure(error: &CliError, args: &StrandArgs) {
    match error {
        // JSON mode already reported the failure on stdout.
        CliError::Parse(_) if args.format == OutputFormat::Json => {}
        CliError::Parse(parse_error) if args.fancy => diagnostics::print_fancy_to_stderr(parse_error),
        CliError::Parse(parse_error) => diagnostics::print_diagnostic_to_stderr(
            parse_error,
            color_choice(args.color),
            args.context_lines,
        ),
        other => eprintln!("Error: {}", other),
    }
}

fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if io::stderr().is_terminal() => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "strand=warn",
        1 => "strand=debug",
        _ => "strand=trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
