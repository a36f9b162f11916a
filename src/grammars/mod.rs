//! Demonstration grammars built on the engine.
//!
//! Nothing in the engine depends on these; they show how grammars are written
//! and back the `strand` command-line tool.

use crate::error::ParseError;
use crate::state::State;

pub mod term;
pub mod tree;

pub use term::{term, terms, Term};
pub use tree::{tree, tree_document, Tree};

/// Deepest nesting the recursive demo grammars descend into.
///
/// Deeper input fails with a diagnostic instead of exhausting the stack.
pub const MAX_DEPTH: usize = 128;

/// Fails at `state` when `depth` is past [`MAX_DEPTH`].
fn check_depth(state: State<'_>, depth: usize) -> Result<(), ParseError> {
    if depth < MAX_DEPTH {
        return Ok(());
    }
    tracing::debug!(depth, offset = state.offset(), "nesting limit reached");
    Err(ParseError::expected_construct(
        state,
        &format!("nesting depth of at most {}", MAX_DEPTH),
    ))
}
