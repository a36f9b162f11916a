//! Trivia skipping: whitespace and `//` line comments.
//!
//! Every token-level matcher calls [`skip`] first. The skippers are soft:
//! they report whether they consumed anything and never fail.

use crate::parser::Parsed;
use crate::state::State;

/// Opens a comment that runs to the end of the line.
pub const COMMENT_OPENER: &str = "//";

/// Skips one `//` comment up to (not including) the line break.
pub fn skip_comment(state: State<'_>) -> Parsed<'_, bool> {
    let rest = state.rest();
    if !rest.starts_with(COMMENT_OPENER) {
        return Ok((state, false));
    }
    let len = rest.find('\n').unwrap_or(rest.len());
    Ok((state.advance(len), true))
}

/// Skips a maximal run of whitespace.
pub fn skip_spaces(state: State<'_>) -> Parsed<'_, bool> {
    let rest = state.rest();
    let trimmed = rest.trim_start_matches(char::is_whitespace);
    let len = rest.len() - trimmed.len();
    Ok((state.advance(len), len > 0))
}

/// Alternates comment and space skipping until neither makes progress.
pub fn skip(state: State<'_>) -> Parsed<'_, bool> {
    let mut state = state;
    let mut skipped = false;
    loop {
        let (next, comment) = skip_comment(state)?;
        let (next, spaces) = skip_spaces(next)?;
        state = next;
        if !(comment || spaces) {
            return Ok((state, skipped));
        }
        skipped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_after(text: &str) -> (usize, bool) {
        let (state, skipped) = skip(State::new(text)).unwrap();
        (state.offset(), skipped)
    }

    #[test]
    fn test_skip_nothing() {
        assert_eq!(offset_after("abc"), (0, false));
    }

    #[test]
    fn test_skip_spaces_and_comments() {
        let text = "  // one\n\t// two\n  x";
        let (offset, skipped) = offset_after(text);
        assert!(skipped);
        assert_eq!(&text[offset..], "x");
    }

    #[test]
    fn test_comment_at_end_of_text() {
        assert_eq!(offset_after("// trailing"), (11, true));
    }

    #[test]
    fn test_spaces_at_end_of_text() {
        let (state, skipped) = skip_spaces(State::new("")).unwrap();
        assert!(!skipped);
        assert!(state.at_end());
    }

    #[test]
    fn test_single_slash_is_not_a_comment() {
        let (state, skipped) = skip_comment(State::new("/ x")).unwrap();
        assert!(!skipped);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_skip_comment_leaves_newline() {
        let (state, _) = skip_comment(State::new("// c\nx")).unwrap();
        assert_eq!(state.rest(), "\nx");
    }

    #[test]
    fn test_skip_is_idempotent() {
        let (once, _) = skip(State::new(" // c\n  y ")).unwrap();
        let (twice, again) = skip(once).unwrap();
        assert_eq!(once, twice);
        assert!(!again);
    }
}
