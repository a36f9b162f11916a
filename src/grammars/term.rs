//! Call-expression terms.
//!
//! ```text
//! term   := call | list | number | symbol
//! call   := name "(" (term ","?)* ")"
//! list   := "[" (term ","?)* "]"
//! number := -?[0-9]+(\.[0-9]+)?
//! symbol := name
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::combinators::{call, caller, guard, list, until};
use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::grammars::check_depth;
use crate::matchers::{consume, done, match_literal, match_regex, regex_token, Pattern};
use crate::name::{name, name1};
use crate::parser::{map, Parsed, Parser};
use crate::state::State;

static NUMBER: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(r"-?[0-9]+(?:\.[0-9]+)?\b").expect("number pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Term {
    Symbol { name: String },
    Number { value: f64 },
    List { items: Vec<Term> },
    Call { callee: String, args: Vec<Term> },
}

impl Term {
    pub fn symbol(name: impl Into<String>) -> Self {
        Term::Symbol { name: name.into() }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Symbol { name } => write!(f, "{}", name),
            Term::Number { value } => write!(f, "{}", value),
            Term::List { items } => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Term::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                write_joined(f, args)?;
                write!(f, ")")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (index, term) in terms.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", term)?;
    }
    Ok(())
}

pub fn term(state: State<'_>) -> Parsed<'_, Term> {
    term_at(state, 0)
}

/// Terms up to the end of the input.
pub fn terms(state: State<'_>) -> Parsed<'_, Vec<Term>> {
    until(done, term)(state)
}

fn term_at<'src>(state: State<'src>, depth: usize) -> Parsed<'src, Term> {
    // Built per call; each alternative is boxed.
    Grammar::new("term")
        .or(guard(caller("("), move |state: State<'src>| call_term(state, depth)))
        .or(guard(match_literal("["), move |state: State<'src>| list_term(state, depth)))
        .or(guard(match_regex(&NUMBER), number))
        .or(guard(has_name, symbol))
        .parse(state)
}

fn call_term<'src>(state: State<'src>, depth: usize) -> Parsed<'src, Term> {
    check_depth(state, depth)?;
    call(
        consume("("),
        match_literal(","),
        match_literal(")"),
        move |state: State<'src>| term_at(state, depth + 1),
        |callee, args| Term::Call { callee, args },
    )(state)
}

fn list_term<'src>(state: State<'src>, depth: usize) -> Parsed<'src, Term> {
    check_depth(state, depth)?;
    list(
        consume("["),
        match_literal(","),
        match_literal("]"),
        move |state: State<'src>| term_at(state, depth + 1),
        |items| Term::List { items },
    )(state)
}

fn number(state: State<'_>) -> Parsed<'_, Term> {
    let (next, lexeme) = regex_token(&NUMBER)(state)?;
    match lexeme.and_then(|text| text.parse::<f64>().ok()) {
        Some(value) => Ok((next, Term::Number { value })),
        None => Err(ParseError::expected_construct(state, "number")),
    }
}

fn has_name(state: State<'_>) -> Parsed<'_, bool> {
    let (state, found) = name(state)?;
    Ok((state, !found.is_empty()))
}

fn symbol(state: State<'_>) -> Parsed<'_, Term> {
    map(name1, |name| Term::Symbol { name })(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::grammars::MAX_DEPTH;
    use crate::parser::run;

    #[test]
    fn test_symbol_and_number() {
        assert_eq!(run(term, " foo").unwrap(), Term::symbol("foo"));
        assert_eq!(run(term, "-2.5").unwrap(), Term::Number { value: -2.5 });
    }

    #[test]
    fn test_digits_followed_by_letters_are_a_symbol() {
        assert_eq!(run(term, "1st").unwrap(), Term::symbol("1st"));
    }

    #[test]
    fn test_call_with_nested_list() {
        let parsed = run(term, "max(a, [1 2], f())").unwrap();
        let expected = Term::Call {
            callee: "max".into(),
            args: vec![
                Term::symbol("a"),
                Term::List {
                    items: vec![Term::Number { value: 1.0 }, Term::Number { value: 2.0 }],
                },
                Term::Call {
                    callee: "f".into(),
                    args: vec![],
                },
            ],
        };
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_name_with_space_before_paren_is_not_a_call() {
        let parsed = run(terms, "f (x)").unwrap_err();
        assert_eq!(parsed.kind(), &ErrorKind::ExpectedConstruct("term".into()));
        assert_eq!(parsed.span().start, 2);
    }

    #[test]
    fn test_terms_until_end() {
        let parsed = run(terms, "a b(c) // done\n").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_unclosed_list() {
        let error = run(term, "[a, b").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::ExpectedConstruct("term".into()));
        assert_eq!(error.span().start, 5);
    }

    #[test]
    fn test_display_normalizes_separators() {
        let parsed = run(term, "g( [1 2.5] ,x )").unwrap();
        assert_eq!(parsed.to_string(), "g([1, 2.5], x)");
    }

    #[test]
    fn test_deeply_nested_lists_are_a_parse_error() {
        let error = run(terms, &"[".repeat(100_000)).unwrap_err();
        assert_eq!(
            error.kind(),
            &ErrorKind::ExpectedConstruct(format!("nesting depth of at most {}", MAX_DEPTH))
        );
        assert_eq!(error.span().start, MAX_DEPTH);
    }

    #[test]
    fn test_nested_calls_within_limit() {
        let source = format!("{}x{}", "f(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        let parsed = run(term, &source).unwrap();
        assert!(matches!(parsed, Term::Call { .. }));
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(Term::symbol("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "symbol", "name": "x" }));
    }
}
