//! Golden master tests for diagnostic output.
//!
//! These tests capture the exact formatted output of `ParseError` reports and
//! the highlighter to keep error presentation stable across changes.

use miette::Diagnostic;
use strand::grammars::{terms, tree_document};
use strand::highlight::{highlight, HighlightOptions};
use strand::{run, ParseError, Span};

/// Test helper to capture a plain report as a string.
fn plain_report(error: &ParseError) -> String {
    error.report_with(&HighlightOptions::plain())
}

#[test]
fn test_unclosed_tree_report() {
    let error = run(tree_document, "(a").unwrap_err();

    // Golden master snapshot
    let expected = "expected ')':
   1 | (a« »
";

    assert_eq!(plain_report(&error), expected);
}

#[test]
fn test_report_keeps_three_lines_of_context() {
    let source = "// one\n// two\n// three\n// four\n(left\n right\n extra)\n// after\n";
    let error = run(tree_document, source).unwrap_err();
    assert_eq!(error.span(), Span::new(45, 46));

    let expected = concat!(
        "expected ')':\n",
        "   4 | // four\n",
        "   5 | (left\n",
        "   6 |  right\n",
        "   7 |  «e»xtra)\n",
        "   8 | // after\n",
        "   9 | \n",
    );

    assert_eq!(plain_report(&error), expected);
}

#[test]
fn test_unrecognized_term_report() {
    let error = run(terms, "f(1, ?)").unwrap_err();
    assert_eq!(error.to_string(), "expected term");

    let expected = "expected term:
   1 | f(1, «?»)
";

    assert_eq!(plain_report(&error), expected);
}

#[test]
fn test_multi_line_span_highlight() {
    let source = "first\nsecond\nthird";
    let output = highlight(source, Span::new(3, 15), &HighlightOptions::plain());

    let expected = "   1 | fir«st»
   2 | «second»
   3 | «th»ird
";

    assert_eq!(output, expected);
}

#[test]
fn test_zero_context_shows_only_span_lines() {
    let source = "a\nb\nc\nd";
    let options = HighlightOptions::plain().with_context_lines(0);
    assert_eq!(highlight(source, Span::new(4, 5), &options), "   3 | «c»\n");
}

#[test]
fn test_colored_report_has_no_markers() {
    let error = run(tree_document, "(a").unwrap_err();
    let report = error.report();
    assert!(report.starts_with("expected ')':\n"));
    assert!(report.contains("\x1b["));
    assert!(!report.contains('«'));
}

#[test]
fn test_miette_rendering_includes_code() {
    let error = run(tree_document, "(a").unwrap_err();
    assert_eq!(
        error.code().map(|code| code.to_string()).as_deref(),
        Some("strand::parse::expected_literal")
    );

    let report = miette::Report::new(error);
    let rendered = format!("{report:?}");
    assert!(rendered.contains("expected ')'"));
}
