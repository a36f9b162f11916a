//! Strand: a small combinator parsing engine.
//!
//! Parsers are functions from an immutable [`State`] (source text plus byte
//! offset) to a new state and a value. Grammars are written as ordinary Rust
//! functions composed from the combinators here; ordered choice is decided by
//! committed lookahead ([`guard`] inside a [`Grammar`]), and every fatal
//! failure is a [`ParseError`] that renders as a highlighted source snippet.
//!
//! ```
//! use strand::{consume, done, list, match_literal, name1, run, sequence};
//!
//! let names = sequence(|seq| {
//!     let items = seq.run(list(consume("("), match_literal(","), match_literal(")"), name1, |v| v))?;
//!     let finished = seq.run(done)?;
//!     Ok((items, finished))
//! });
//! let (items, finished) = run(names, "(a, b, c) // trailing").unwrap();
//! assert_eq!(items, ["a", "b", "c"]);
//! assert!(finished);
//! ```

pub mod combinators;
pub mod error;
pub mod grammar;
pub mod grammars;
pub mod highlight;
pub mod matchers;
pub mod name;
pub mod parser;
pub mod skip;
pub mod state;

pub mod cli;

pub use crate::combinators::{call, caller, dry, guard, list, until};
pub use crate::error::{ErrorKind, ParseError};
pub use crate::grammar::{grammar, Grammar};
pub use crate::highlight::{highlight, HighlightOptions};
pub use crate::matchers::{
    consume, done, get_char, match_here, match_here_regex, match_literal, match_regex,
    regex_token, Pattern, PatternError,
};
pub use crate::name::{is_name_char, name, name1, name_here};
pub use crate::parser::{bind, boxed, map, pure, run, sequence, BoxedParser, Parsed, Parser, Sequence};
pub use crate::skip::{skip, skip_comment, skip_spaces};
pub use crate::state::{Span, State};
