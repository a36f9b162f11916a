//! The parser abstraction and its monadic core.
//!
//! A parser is anything that maps a [`State`] to a new state and a value, or
//! aborts the whole parse with a [`ParseError`]. Every plain function or
//! closure of shape `Fn(State) -> Parsed<T>` is a parser, so grammars are
//! written as ordinary Rust functions and composed with [`bind`], [`pure`],
//! [`map`] or the do-notation style [`sequence`].

use crate::error::ParseError;
use crate::state::State;

/// The outcome of applying a parser: the advanced state and the value.
pub type Parsed<'src, T> = Result<(State<'src>, T), ParseError>;

/// A function from state to (new state, value).
pub trait Parser<'src, T> {
    fn parse(&self, state: State<'src>) -> Parsed<'src, T>;
}

impl<'src, T, F> Parser<'src, T> for F
where
    F: Fn(State<'src>) -> Parsed<'src, T>,
{
    fn parse(&self, state: State<'src>) -> Parsed<'src, T> {
        self(state)
    }
}

/// A type-erased parser, for collections of heterogeneous alternatives.
pub type BoxedParser<'p, 'src, T> = Box<dyn Fn(State<'src>) -> Parsed<'src, T> + 'p>;

/// Boxes a parser.
pub fn boxed<'p, 'src, T, P>(parser: P) -> BoxedParser<'p, 'src, T>
where
    P: Parser<'src, T> + 'p,
{
    Box::new(move |state| parser.parse(state))
}

// ============================================================================
// MONADIC CORE
// ============================================================================

/// Returns `value` without touching the state.
pub fn pure<'src, T: Clone>(value: T) -> impl Fn(State<'src>) -> Parsed<'src, T> {
    move |state| Ok((state, value.clone()))
}

/// Runs `parser`, feeds its value to `next`, and runs the resulting parser
/// from where the first one stopped.
pub fn bind<'src, A, B, P, Q, F>(parser: P, next: F) -> impl Fn(State<'src>) -> Parsed<'src, B>
where
    P: Parser<'src, A>,
    Q: Parser<'src, B>,
    F: Fn(A) -> Q,
{
    move |state| {
        let (state, value) = parser.parse(state)?;
        next(value).parse(state)
    }
}

/// Transforms the value of `parser`.
pub fn map<'src, A, B, P, F>(parser: P, f: F) -> impl Fn(State<'src>) -> Parsed<'src, B>
where
    P: Parser<'src, A>,
    F: Fn(A) -> B,
{
    move |state| {
        let (state, value) = parser.parse(state)?;
        Ok((state, f(value)))
    }
}

// ============================================================================
// SEQUENCING SUGAR
// ============================================================================

/// The cursor handed to a [`sequence`] body.
///
/// Each [`Sequence::run`] applies one sub-parser at the current position and
/// moves past it; `?` on the result aborts the body the way a failed `bind`
/// would.
#[derive(Debug)]
pub struct Sequence<'src> {
    state: State<'src>,
}

impl<'src> Sequence<'src> {
    pub fn run<T, P>(&mut self, parser: P) -> Result<T, ParseError>
    where
        P: Parser<'src, T>,
    {
        let (state, value) = parser.parse(self.state)?;
        self.state = state;
        Ok(value)
    }
}

/// Builds a parser from a straight-line body, equivalent to a chain of binds.
///
/// ```
/// use strand::{consume, name1, run, sequence};
///
/// let pair = sequence(|seq| {
///     seq.run(consume("("))?;
///     let left = seq.run(name1)?;
///     let right = seq.run(name1)?;
///     seq.run(consume(")"))?;
///     Ok((left, right))
/// });
/// assert_eq!(run(pair, "(a b)").unwrap(), ("a".to_string(), "b".to_string()));
/// ```
pub fn sequence<'src, T, F>(body: F) -> impl Fn(State<'src>) -> Parsed<'src, T>
where
    F: Fn(&mut Sequence<'src>) -> Result<T, ParseError>,
{
    move |state| {
        let mut seq = Sequence { state };
        let value = body(&mut seq)?;
        Ok((seq.state, value))
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Applies `parser` to the start of `text` and returns its value.
pub fn run<'src, T, P>(parser: P, text: &'src str) -> Result<T, ParseError>
where
    P: Parser<'src, T>,
{
    let (_, value) = parser.parse(State::new(text))?;
    Ok(value)
}
