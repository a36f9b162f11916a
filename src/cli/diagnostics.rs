//! Diagnostic presentation for parse failures.
//!
//! Prints a [`ParseError`] to a terminal: the message in bold red, then the
//! highlighted source window. Whether the span is colored or bracketed with
//! markers follows the writer's color support.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::ParseError;
use crate::highlight::write_highlight;

/// Prints a diagnostic to standard error.
///
/// Falls back to the uncolored report if the colored write fails.
pub fn print_diagnostic_to_stderr(error: &ParseError, choice: ColorChoice, context_lines: usize) {
    let mut stderr = StandardStream::stderr(choice);
    if print_diagnostic_colored(&mut stderr, error, context_lines).is_err() {
        eprintln!("error: {}", error);
    }
}

/// Prints a diagnostic through miette's graphical report handler.
pub fn print_fancy_to_stderr(error: &ParseError) {
    let report = miette::Report::new(error.clone());
    eprintln!("{report:?}");
}

/// Prints a diagnostic to any `WriteColor` implementation.
pub fn print_diagnostic_colored(
    writer: &mut impl WriteColor,
    error: &ParseError,
    context_lines: usize,
) -> io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(writer, "error")?;
    writer.reset()?;
    writeln!(writer, ": {}", error)?;
    write_highlight(writer, error.source_text(), error.span(), context_lines)
}
