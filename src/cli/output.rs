//! Handles all user-facing output for the CLI.
//!
//! Parsed values print as text or JSON on stdout; failures in JSON mode print
//! a small error object on stdout as well, so scripted callers read one stream.

use std::io::Write;

use serde::Serialize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::cli::CliError;
use crate::error::ParseError;

/// Prints a parsed value: `text` verbatim, or the value as pretty JSON.
pub fn print_value<T: Serialize>(
    out: &mut impl Write,
    value: &T,
    text: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", text)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(value)?)?,
    }
    Ok(())
}

/// Prints a parse failure as a JSON object with its message and span.
pub fn print_error_json(out: &mut impl Write, error: &ParseError) -> Result<(), CliError> {
    let body = json!({
        "error": error.to_string(),
        "span": error.span(),
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    Ok(())
}
