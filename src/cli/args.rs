//! Defines the command-line arguments for the Strand CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::highlight::DEFAULT_CONTEXT_LINES;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "strand",
    version,
    about = "Parse text with a demonstration grammar and report highlighted diagnostics."
)]
pub struct StrandArgs {
    /// The file to parse; omit it or pass `-` to read standard input.
    pub file: Option<PathBuf>,

    /// The grammar to parse with.
    #[arg(long, value_enum, default_value_t = GrammarKind::Tree)]
    pub grammar: GrammarKind,

    /// How to print the parsed value or the failure.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to color diagnostics.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Lines of source shown around a diagnostic's span.
    #[arg(long, default_value_t = DEFAULT_CONTEXT_LINES)]
    pub context_lines: usize,

    /// Render failures with miette's graphical reporter instead.
    #[arg(long)]
    pub fancy: bool,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The demonstration grammars available to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GrammarKind {
    /// One binary tree of names: `(a (b c))`.
    Tree,
    /// A sequence of call-expression terms: `f(a, [1 2])`.
    Term,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
