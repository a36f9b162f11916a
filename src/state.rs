//! Cursor state threaded through every parser.
//!
//! A `State` is a cheap `Copy` snapshot: the borrowed source text plus a byte
//! offset into it. Advancing never mutates a state in place; it produces a new
//! one, so backtracking is just keeping hold of an older value.

use serde::Serialize;

// ============================================================================
// SPANS
// ============================================================================

/// Represents a byte range in the source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::from(span.start..span.end)
    }
}

// ============================================================================
// STATE
// ============================================================================

/// An immutable position in a source text.
///
/// Invariant: `offset <= text.len()` and `offset` sits on a char boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct State<'src> {
    text: &'src str,
    offset: usize,
}

impl<'src> State<'src> {
    /// A state at the start of `text`.
    pub fn new(text: &'src str) -> Self {
        Self { text, offset: 0 }
    }

    /// The whole source text, independent of the offset.
    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed remainder of the text.
    pub fn rest(&self) -> &'src str {
        &self.text[self.offset..]
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// The character under the cursor, if any.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// A new state `len` bytes further on.
    ///
    /// Callers only ever advance by lengths measured off the remaining text,
    /// so the result stays on a char boundary; the offset is clamped to the
    /// end of the text regardless.
    pub fn advance(self, len: usize) -> Self {
        Self {
            text: self.text,
            offset: (self.offset + len).min(self.text.len()),
        }
    }

    /// A span of `len` bytes starting at the cursor.
    ///
    /// The end may point past the text; the highlighter renders such spans
    /// against the end of the input.
    pub fn span(&self, len: usize) -> Span {
        Span::new(self.offset, self.offset + len)
    }
}
