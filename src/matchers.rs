//! Primitive matchers anchored at the cursor.
//!
//! The `*_here` matchers look exactly at the cursor; the others skip trivia
//! first. All of them are soft except [`consume`], which aborts the parse when
//! its literal is missing.

use regex_automata::meta::{BuildError, Regex};
use regex_automata::{Anchored, Input};
use regex_syntax::hir::Look;
use thiserror::Error;

use crate::error::ParseError;
use crate::parser::Parsed;
use crate::skip::skip;
use crate::state::State;

// ============================================================================
// PATTERNS
// ============================================================================

/// Failure to turn a regex source into a [`Pattern`].
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Syntax {
        pattern: String,
        source: regex_syntax::Error,
    },
    /// `^` (outside multi-line mode) or `\A` could only ever match at offset 0.
    #[error("pattern `{0}` is anchored to the start of the text; matches are always anchored at the cursor")]
    StartAnchored(String),
    #[error("failed to compile pattern `{pattern}`: {source}")]
    Build { pattern: String, source: BuildError },
}

/// A regex that only ever matches starting exactly at the cursor.
///
/// Searches run over the whole text with the start pinned to the cursor, so
/// word boundaries and line anchors see the preceding character. Patterns
/// anchored to the start of the text are rejected: see
/// [`PatternError::StartAnchored`].
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let hir = regex_syntax::parse(pattern).map_err(|source| PatternError::Syntax {
            pattern: pattern.to_string(),
            source,
        })?;
        if hir.properties().look_set().contains(Look::Start) {
            return Err(PatternError::StartAnchored(pattern.to_string()));
        }
        let regex = Regex::new(pattern).map_err(|source| PatternError::Build {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Length of the match starting exactly at the cursor, if any.
    pub fn match_len(&self, state: State<'_>) -> Option<usize> {
        let text = state.text();
        let input = Input::new(text)
            .span(state.offset()..text.len())
            .anchored(Anchored::Yes);
        self.regex.search(&input).map(|m| m.end() - m.start())
    }
}

// ============================================================================
// ANCHORED MATCHERS
// ============================================================================

/// Matches `literal` exactly at the cursor, without skipping trivia.
pub fn match_here<'l, 'src>(literal: &'l str) -> impl Fn(State<'src>) -> Parsed<'src, bool> + 'l {
    move |state| {
        if state.rest().starts_with(literal) {
            Ok((state.advance(literal.len()), true))
        } else {
            Ok((state, false))
        }
    }
}

/// Matches `pattern` exactly at the cursor, without skipping trivia.
pub fn match_here_regex<'p, 'src>(
    pattern: &'p Pattern,
) -> impl Fn(State<'src>) -> Parsed<'src, bool> + 'p {
    move |state| match pattern.match_len(state) {
        Some(len) => Ok((state.advance(len), true)),
        None => Ok((state, false)),
    }
}

// ============================================================================
// TRIVIA-SKIPPING MATCHERS
// ============================================================================

/// Skips trivia, then matches `literal`.
pub fn match_literal<'l, 'src>(
    literal: &'l str,
) -> impl Fn(State<'src>) -> Parsed<'src, bool> + 'l {
    move |state| {
        let (state, _) = skip(state)?;
        match_here(literal)(state)
    }
}

/// Skips trivia, then matches `pattern`.
pub fn match_regex<'p, 'src>(pattern: &'p Pattern) -> impl Fn(State<'src>) -> Parsed<'src, bool> + 'p {
    move |state| {
        let (state, _) = skip(state)?;
        match_here_regex(pattern)(state)
    }
}

/// Skips trivia, then returns the text matched by `pattern`, if any.
pub fn regex_token<'p, 'src>(
    pattern: &'p Pattern,
) -> impl Fn(State<'src>) -> Parsed<'src, Option<&'src str>> + 'p {
    move |state| {
        let (state, _) = skip(state)?;
        match pattern.match_len(state) {
            Some(len) => Ok((state.advance(len), Some(&state.rest()[..len]))),
            None => Ok((state, None)),
        }
    }
}

/// Skips trivia, then requires `literal`; aborts the parse when it is absent.
pub fn consume<'l, 'src>(literal: &'l str) -> impl Fn(State<'src>) -> Parsed<'src, ()> + 'l {
    move |state| {
        let (state, _) = skip(state)?;
        let (next, matched) = match_here(literal)(state)?;
        if !matched {
            return Err(ParseError::expected_literal(state, literal));
        }
        Ok((next, ()))
    }
}

/// Skips trivia, then takes one character; `None` at end of text.
pub fn get_char(state: State<'_>) -> Parsed<'_, Option<char>> {
    let (state, _) = skip(state)?;
    match state.peek() {
        Some(c) => Ok((state.advance(c.len_utf8()), Some(c))),
        None => Ok((state, None)),
    }
}

/// Skips trivia, then reports whether the text is exhausted.
pub fn done(state: State<'_>) -> Parsed<'_, bool> {
    let (state, _) = skip(state)?;
    Ok((state, state.at_end()))
}
