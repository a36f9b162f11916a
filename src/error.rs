//! Strand Error Handling
//!
//! Every fatal parse failure is a [`ParseError`]: what was expected, where,
//! and the source it was expected in. Soft mismatches never become errors; they
//! are plain `false` / `None` results threaded through the combinators.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceCode};
use thiserror::Error;

use crate::highlight::{highlight, HighlightOptions};
use crate::state::{Span, State};

// ============================================================================
// ERROR KINDS
// ============================================================================

/// What the parser expected to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required literal was missing (`consume`).
    ExpectedLiteral(String),
    /// No alternative of a named construct applied, or a required name was empty.
    ExpectedConstruct(String),
}

impl ErrorKind {
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::ExpectedLiteral(_) => "expected_literal",
            Self::ExpectedConstruct(_) => "expected_construct",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ExpectedLiteral(literal) => write!(f, "expected '{}'", literal),
            ErrorKind::ExpectedConstruct(name) => write!(f, "expected {}", name),
        }
    }
}

// ============================================================================
// PARSE ERROR
// ============================================================================

/// A fatal parse failure. Aborts the whole parse; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    kind: ErrorKind,
    span: Span,
    text: String,
}

impl ParseError {
    /// A required literal is absent at `state`.
    pub fn expected_literal(state: State<'_>, literal: &str) -> Self {
        Self::at(state, ErrorKind::ExpectedLiteral(literal.to_string()), literal.len())
    }

    /// A named construct could not be parsed at `state`.
    pub fn expected_construct(state: State<'_>, name: &str) -> Self {
        Self::at(state, ErrorKind::ExpectedConstruct(name.to_string()), 1)
    }

    fn at(state: State<'_>, kind: ErrorKind, len: usize) -> Self {
        let span = state.span(len);
        tracing::debug!(%kind, start = span.start, end = span.end, "parse aborted");
        Self {
            kind,
            span,
            text: state.text().to_string(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The offending byte range; its end may lie one past the text.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The full text that was being parsed.
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// The formatted diagnostic: message plus highlighted source, colored.
    pub fn report(&self) -> String {
        self.report_with(&HighlightOptions::default())
    }

    pub fn report_with(&self, options: &HighlightOptions) -> String {
        format!(
            "{}:\n{}",
            self.kind,
            highlight(&self.text, self.span, options)
        )
    }

    /// The span clamped to the text, for consumers that cannot point past it.
    fn clamped_span(&self) -> Span {
        let end = self.span.end.min(self.text.len());
        Span::new(self.span.start.min(end), end)
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("strand::parse::{}", self.kind.code_suffix())))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match &self.kind {
            ErrorKind::ExpectedLiteral(_) => "missing here",
            ErrorKind::ExpectedConstruct(_) => "not recognized here",
        };
        let labels = vec![LabeledSpan::new_with_span(
            Some(label.to_string()),
            self.clamped_span(),
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_literal_span_covers_literal() {
        let state = State::new("abc").advance(1);
        let error = ParseError::expected_literal(state, "xyz");
        assert_eq!(error.span(), Span::new(1, 4));
        assert_eq!(error.to_string(), "expected 'xyz'");
    }

    #[test]
    fn test_expected_construct_span_is_one_wide() {
        let state = State::new("abc");
        let error = ParseError::expected_construct(state, "name");
        assert_eq!(error.span(), Span::new(0, 1));
        assert_eq!(error.to_string(), "expected name");
    }

    #[test]
    fn test_report_contains_message_and_snippet() {
        let state = State::new("(a").advance(2);
        let error = ParseError::expected_literal(state, ")");
        let report = error.report_with(&HighlightOptions::plain());
        assert_eq!(report, "expected ')':\n   1 | (a« »\n");
    }

    #[test]
    fn test_diagnostic_code_and_label() {
        let state = State::new("(a").advance(2);
        let error = ParseError::expected_literal(state, ")");
        let code = error.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("strand::parse::expected_literal"));
        let labels: Vec<_> = error.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 2);
        assert_eq!(labels[0].len(), 0);
    }
}
