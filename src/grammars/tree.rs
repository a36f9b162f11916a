//! Binary trees of names: `(left right)` nodes and name leaves.
//!
//! ```text
//! tree := "(" tree tree ")" | name
//! ```
//!
//! A leaf is a possibly empty name, so a node missing its right subtree fails
//! on the closing parenthesis rather than on the leaf.

use std::fmt;

use serde::Serialize;

use crate::combinators::guard;
use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::grammars::check_depth;
use crate::matchers::{consume, done, match_literal};
use crate::name::name;
use crate::parser::{map, pure, sequence, Parsed, Parser};
use crate::state::State;

/// Serializes as nested two-element arrays of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tree {
    Leaf(String),
    Node(Box<Tree>, Box<Tree>),
}

impl Tree {
    pub fn leaf(name: impl Into<String>) -> Self {
        Tree::Leaf(name.into())
    }

    pub fn node(left: Tree, right: Tree) -> Self {
        Tree::Node(Box::new(left), Box::new(right))
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(name) => write!(f, "{}", name),
            Tree::Node(left, right) => write!(f, "({} {})", left, right),
        }
    }
}

pub fn tree(state: State<'_>) -> Parsed<'_, Tree> {
    tree_at(state, 0)
}

fn tree_at<'src>(state: State<'src>, depth: usize) -> Parsed<'src, Tree> {
    // Built per call; each alternative is boxed.
    Grammar::new("tree")
        .or(guard(match_literal("("), move |state: State<'src>| node(state, depth)))
        .or(guard(pure(true), leaf))
        .parse(state)
}

fn node<'src>(state: State<'src>, depth: usize) -> Parsed<'src, Tree> {
    check_depth(state, depth)?;
    let subtree = move |state: State<'src>| tree_at(state, depth + 1);
    let parsed = sequence(|seq| {
        seq.run(consume("("))?;
        let left = seq.run(subtree)?;
        let right = seq.run(subtree)?;
        seq.run(consume(")"))?;
        Ok(Tree::node(left, right))
    })(state);
    parsed
}

fn leaf(state: State<'_>) -> Parsed<'_, Tree> {
    map(name, Tree::Leaf)(state)
}

/// A single tree spanning the whole input.
pub fn tree_document(state: State<'_>) -> Parsed<'_, Tree> {
    let (state, value) = tree(state)?;
    let (state, finished) = done(state)?;
    if !finished {
        return Err(ParseError::expected_construct(state, "end of input"));
    }
    Ok((state, value))
}
