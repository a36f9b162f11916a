//! Lookahead, guarded dispatch, repetition and delimited sequences.

use crate::error::ParseError;
use crate::matchers::match_here;
use crate::name::{name, name1};
use crate::parser::{Parsed, Parser};
use crate::skip::skip;
use crate::state::State;

// ============================================================================
// LOOKAHEAD & GUARDS
// ============================================================================

/// Runs `parser` but hands back the original state with its result.
///
/// Fatal errors inside `parser` still abort the parse.
pub fn dry<'src, T, P>(parser: P) -> impl Fn(State<'src>) -> Parsed<'src, T>
where
    P: Parser<'src, T>,
{
    move |state| {
        let (_, value) = parser.parse(state)?;
        Ok((state, value))
    }
}

/// Commits to `body` only when `head` matches here.
///
/// `head` runs as a [`dry`] lookahead after skipping trivia. On a hit, trivia
/// is skipped again and `body` runs; its failures are not caught. On a miss
/// the result is `None` and `body` never runs.
pub fn guard<'src, T, H, B>(head: H, body: B) -> impl Fn(State<'src>) -> Parsed<'src, Option<T>>
where
    H: Parser<'src, bool>,
    B: Parser<'src, T>,
{
    move |state| {
        let (state, _) = skip(state)?;
        let (_, applies) = head.parse(state)?;
        if !applies {
            tracing::trace!(offset = state.offset(), "guard missed");
            return Ok((state, None));
        }
        let (state, _) = skip(state)?;
        let (state, value) = body.parse(state)?;
        Ok((state, Some(value)))
    }
}

// ============================================================================
// REPETITION
// ============================================================================

/// Runs `element` until `delimiter` matches, collecting the results in order.
///
/// The delimiter's own consumption is kept when it matches. An element that
/// consumes nothing while the delimiter is still missing could only repeat
/// forever, so that aborts with "expected delimiter".
pub fn until<'src, T, D, E>(delimiter: D, element: E) -> impl Fn(State<'src>) -> Parsed<'src, Vec<T>>
where
    D: Parser<'src, bool>,
    E: Parser<'src, T>,
{
    move |state| {
        let mut state = state;
        let mut items = Vec::new();
        loop {
            let (next, closed) = delimiter.parse(state)?;
            if closed {
                return Ok((next, items));
            }
            let (after, item) = element.parse(next)?;
            if after.offset() == next.offset() {
                return Err(ParseError::expected_construct(next, "delimiter"));
            }
            items.push(item);
            state = after;
        }
    }
}

/// Parses `open`, then elements each followed by an optional `sep`, up to
/// `close`, and folds them with `build`.
pub fn list<'src, O, T, R, Open, Sep, Close, Elem, Build>(
    open: Open,
    sep: Sep,
    close: Close,
    element: Elem,
    build: Build,
) -> impl Fn(State<'src>) -> Parsed<'src, R>
where
    Open: Parser<'src, O>,
    Sep: Parser<'src, bool>,
    Close: Parser<'src, bool>,
    Elem: Parser<'src, T>,
    Build: Fn(Vec<T>) -> R,
{
    let items = delimited(sep, close, element);
    move |state| {
        let (state, _) = open.parse(state)?;
        let (state, items) = items(state)?;
        Ok((state, build(items)))
    }
}

/// Like [`list`], preceded by a required name: `name(a, b, ...)`.
pub fn call<'src, O, T, R, Open, Sep, Close, Elem, Build>(
    open: Open,
    sep: Sep,
    close: Close,
    element: Elem,
    build: Build,
) -> impl Fn(State<'src>) -> Parsed<'src, R>
where
    Open: Parser<'src, O>,
    Sep: Parser<'src, bool>,
    Close: Parser<'src, bool>,
    Elem: Parser<'src, T>,
    Build: Fn(String, Vec<T>) -> R,
{
    let items = delimited(sep, close, element);
    move |state| {
        let (state, callee) = name1(state)?;
        let (state, _) = open.parse(state)?;
        let (state, items) = items(state)?;
        Ok((state, build(callee, items)))
    }
}

/// Probes for a name immediately followed by `open`, without consuming.
pub fn caller<'l, 'src>(open: &'l str) -> impl Fn(State<'src>) -> Parsed<'src, bool> + 'l {
    move |state| {
        let (next, callee) = name(state)?;
        let (_, opened) = match_here(open)(next)?;
        Ok((state, !callee.is_empty() && opened))
    }
}

/// Elements separated by an optional `sep`, terminated by `close`.
fn delimited<'src, T, Sep, Close, Elem>(
    sep: Sep,
    close: Close,
    element: Elem,
) -> impl Fn(State<'src>) -> Parsed<'src, Vec<T>>
where
    Sep: Parser<'src, bool>,
    Close: Parser<'src, bool>,
    Elem: Parser<'src, T>,
{
    until(close, move |state: State<'src>| -> Parsed<'src, T> {
        let (state, item) = element.parse(state)?;
        let (state, _) = sep.parse(state)?;
        Ok((state, item))
    })
}
