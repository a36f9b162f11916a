//! Source-span highlighter used by parse diagnostics.
//!
//! Renders a window of the source around a span: each retained line is
//! prefixed with a right-aligned line number, and the text inside the span is
//! emphasized. On a color-capable writer the emphasis is ANSI underline + red;
//! otherwise the span is bracketed with the visible markers `«` and `»`.

use std::io;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::state::Span;

// === Constants ===

/// Lines of context shown before the first and after the last span line.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Width of the right-aligned line number column.
const LINE_NUMBER_WIDTH: usize = 4;

pub const OPEN_MARKER: &str = "«";
pub const CLOSE_MARKER: &str = "»";

// === Options ===

/// Controls how much source is shown and whether it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightOptions {
    pub context_lines: usize,
    pub color: bool,
}

impl HighlightOptions {
    /// Uncolored output with the visible span markers.
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            color: true,
        }
    }
}

// === Public API ===

/// Renders `span` of `text` into a string.
pub fn highlight(text: &str, span: Span, options: &HighlightOptions) -> String {
    let mut buffer = if options.color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    // An in-memory buffer never reports a write failure.
    let _ = write_highlight(&mut buffer, text, span, options.context_lines);
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

/// Writes the highlighted window to any `WriteColor` sink.
///
/// Whether the span is colored or bracketed with markers follows
/// `writer.supports_color()`.
pub fn write_highlight(
    writer: &mut impl WriteColor,
    text: &str,
    span: Span,
    context_lines: usize,
) -> io::Result<()> {
    let (padded, start, end) = normalize(text, span);

    let first_line = line_of(&padded, start);
    let last_line = first_line + newlines_within(&padded[start..end]);
    let window_start = first_line.saturating_sub(context_lines);
    let window_end = last_line.saturating_add(context_lines);

    let mut line_start = 0;
    for (index, line) in padded.split('\n').enumerate() {
        let line_end = line_start + line.len();
        if index >= window_start && index <= window_end {
            write!(writer, "{:>width$} | ", index + 1, width = LINE_NUMBER_WIDTH)?;
            if index >= first_line && index <= last_line {
                let from = start.max(line_start) - line_start;
                let to = end.min(line_end).max(start.max(line_start)) - line_start;
                write!(writer, "{}", &line[..from])?;
                open_emphasis(writer)?;
                write!(writer, "{}", &line[from..to])?;
                close_emphasis(writer)?;
                write!(writer, "{}", &line[to..])?;
            } else {
                write!(writer, "{}", line)?;
            }
            writeln!(writer)?;
        }
        if index > window_end {
            break;
        }
        line_start = line_end + 1;
    }
    writer.reset()
}

// === Helpers ===

/// Pads the text so an end-of-text span has something to sit on, and clamps
/// the span onto char boundaries of the padded text.
fn normalize(text: &str, span: Span) -> (String, usize, usize) {
    let mut padded = text.to_string();
    if span.end > text.len() || span.start >= text.len() {
        padded.push(' ');
    }
    let start = floor_boundary(&padded, span.start);
    let end = floor_boundary(&padded, span.end).max(start);
    (padded, start, end)
}

fn floor_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count()
}

/// Line breaks strictly inside the span; a trailing newline does not pull the
/// following line into the shaded region.
fn newlines_within(segment: &str) -> usize {
    let count = segment.matches('\n').count();
    if segment.ends_with('\n') {
        count - 1
    } else {
        count
    }
}

fn open_emphasis(writer: &mut impl WriteColor) -> io::Result<()> {
    if writer.supports_color() {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_underline(true))
    } else {
        write!(writer, "{}", OPEN_MARKER)
    }
}

fn close_emphasis(writer: &mut impl WriteColor) -> io::Result<()> {
    if writer.supports_color() {
        writer.reset()
    } else {
        write!(writer, "{}", CLOSE_MARKER)
    }
}
