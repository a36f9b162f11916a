//! Identifier lexing.

use crate::error::ParseError;
use crate::parser::Parsed;
use crate::skip::skip;
use crate::state::State;

/// Letters, digits, `_` and `.` make up a name.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Reads a maximal run of name characters exactly at the cursor. May be empty.
pub fn name_here(state: State<'_>) -> Parsed<'_, String> {
    let rest = state.rest();
    let len = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
    Ok((state.advance(len), rest[..len].to_string()))
}

/// Skips trivia, then reads a possibly empty name.
pub fn name(state: State<'_>) -> Parsed<'_, String> {
    let (state, _) = skip(state)?;
    name_here(state)
}

/// Skips trivia, then reads a name that must not be empty.
pub fn name1(state: State<'_>) -> Parsed<'_, String> {
    let (state, _) = skip(state)?;
    let (next, name) = name_here(state)?;
    if name.is_empty() {
        return Err(ParseError::expected_construct(state, "name"));
    }
    Ok((next, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_name_here_does_not_skip() {
        let (state, name) = name_here(State::new(" abc")).unwrap();
        assert_eq!(name, "");
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_name_accepts_dots_and_underscores() {
        let (state, name) = name(State::new("  std.io_2(x)")).unwrap();
        assert_eq!(name, "std.io_2");
        assert_eq!(state.rest(), "(x)");
    }

    #[test]
    fn test_name_stops_at_non_ascii() {
        let (_, name) = name(State::new("abé")).unwrap();
        assert_eq!(name, "ab");
    }

    #[test]
    fn test_name1_rejects_whitespace_only_input() {
        let error = name1(State::new("   ")).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::ExpectedConstruct("name".into()));
        assert_eq!(error.span().start, 3);
    }

    #[test]
    fn test_name1_reads_name() {
        let (_, name) = name1(State::new("// c\nfoo")).unwrap();
        assert_eq!(name, "foo");
    }
}
