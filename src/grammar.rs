//! Ordered choice between guarded alternatives.
//!
//! A [`Grammar`] tries its alternatives in order on the same state and takes
//! the first one that applies. Alternatives report "does not apply" with
//! `None` (usually via [`guard`](crate::combinators::guard)); once one commits,
//! its failures are fatal and no later alternative is tried.

use crate::error::ParseError;
use crate::parser::{boxed, BoxedParser, Parsed, Parser};
use crate::skip::skip;
use crate::state::State;

/// A named ordered choice.
pub struct Grammar<'p, 'src, T> {
    name: String,
    alternatives: Vec<BoxedParser<'p, 'src, Option<T>>>,
}

impl<'p, 'src, T> Grammar<'p, 'src, T> {
    /// A choice with no alternatives yet; add them with [`Grammar::or`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alternatives: Vec::new(),
        }
    }

    /// Appends an alternative, tried after all earlier ones.
    pub fn or<P>(mut self, alternative: P) -> Self
    where
        P: Parser<'src, Option<T>> + 'p,
    {
        self.alternatives.push(boxed(alternative));
        self
    }
}

impl<'p, 'src, T> Parser<'src, T> for Grammar<'p, 'src, T> {
    fn parse(&self, state: State<'src>) -> Parsed<'src, T> {
        for (index, alternative) in self.alternatives.iter().enumerate() {
            let (next, value) = alternative(state)?;
            if let Some(value) = value {
                tracing::trace!(grammar = %self.name, alternative = index, offset = state.offset(), "alternative selected");
                return Ok((next, value));
            }
        }
        let (state, _) = skip(state)?;
        Err(ParseError::expected_construct(state, &self.name))
    }
}

impl<'p, 'src, T> std::fmt::Debug for Grammar<'p, 'src, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("alternatives", &self.alternatives.len())
            .finish()
    }
}

/// Builds a [`Grammar`] from a name and an ordered list of boxed alternatives.
pub fn grammar<'p, 'src, T>(
    name: impl Into<String>,
    alternatives: Vec<BoxedParser<'p, 'src, Option<T>>>,
) -> Grammar<'p, 'src, T> {
    Grammar {
        name: name.into(),
        alternatives,
    }
}

/// Builds a [`Grammar`] from a name and its alternatives, boxing each.
///
/// ```
/// use strand::{consume, grammar, guard, map, match_literal, name1, pure, run};
///
/// let word = grammar!(
///     "word",
///     guard(match_literal("!"), map(consume("!"), |_| String::from("bang"))),
///     guard(pure(true), name1),
/// );
/// assert_eq!(run(word, "  hello").unwrap(), "hello");
/// ```
#[macro_export]
macro_rules! grammar {
    ($name:expr, $($alternative:expr),+ $(,)?) => {
        $crate::grammar::grammar($name, vec![$($crate::parser::boxed($alternative)),+])
    };
}
