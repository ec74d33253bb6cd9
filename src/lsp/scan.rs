//! Line-local lexical scanning around the cursor.
//!
//! Columns are LSP characters, i.e. UTF-16 code units, so every scan works on
//! the UTF-16 encoding of the line. A column past the end of the line is
//! treated as the end of the line.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that bound tokens and `var(` contexts.
pub const DELIMITERS: &[char] = &['(', ')', ',', ' ', '\t'];

/// Optional indentation, a property name, optional whitespace, then a colon.
static PROPERTY_COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[a-zA-Z0-9\-_]*\s*:").expect("property pattern is a valid regex")
});

const VAR_OPEN: [u16; 4] = [b'v' as u16, b'a' as u16, b'r' as u16, b'(' as u16];

/// A token found under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Start column (UTF-16, inclusive).
    pub start: u32,
    /// End column (UTF-16, exclusive).
    pub end: u32,
}

fn is_delimiter(unit: u16) -> bool {
    DELIMITERS.iter().any(|&d| d as u32 == unit as u32)
}

fn is_whitespace(unit: u16) -> bool {
    char::from_u32(unit as u32).is_some_and(char::is_whitespace)
}

/// Encode the line and clamp the cursor to it.
fn units_and_cursor(line: &str, character: u32) -> (Vec<u16>, usize) {
    let units: Vec<u16> = line.encode_utf16().collect();
    let cursor = (character as usize).min(units.len());
    (units, cursor)
}

/// Start of the run of non-delimiter units that ends at `cursor`.
fn word_start(units: &[u16], cursor: usize) -> usize {
    units[..cursor]
        .iter()
        .rposition(|&u| is_delimiter(u))
        .map_or(0, |i| i + 1)
}

/// End of the run of non-delimiter units that starts at `cursor`.
fn word_end(units: &[u16], cursor: usize) -> usize {
    units[cursor..]
        .iter()
        .position(|&u| is_delimiter(u))
        .map_or(units.len(), |i| cursor + i)
}

/// Whether the text before the cursor starts with a property declaration,
/// so the cursor sits in a value position.
pub fn is_value_position(line: &str, character: u32) -> bool {
    let (units, cursor) = units_and_cursor(line, character);
    let before = String::from_utf16_lossy(&units[..cursor]);
    PROPERTY_COLON.is_match(&before)
}

/// Whether the cursor is inside an already-open `var(` call.
///
/// Skips back over the partially typed name, then requires the literal
/// `var(` to end right there. Any other delimiter in between (a space, a
/// comma, a closing paren) means the cursor is not inside `var()`.
pub fn is_inside_var(line: &str, character: u32) -> bool {
    let (units, cursor) = units_and_cursor(line, character);
    let start = word_start(&units, cursor);
    units[..start].ends_with(&VAR_OPEN)
}

/// Declaration and block terminators that may follow a value on one line.
fn is_terminator(unit: u16) -> bool {
    unit == b';' as u16 || unit == b'}' as u16
}

/// Extract the token under the cursor.
///
/// Expands left and right independently until a delimiter or the line
/// boundary, then trims whitespace and trailing `;` or `}` terminators. Returns None
/// if nothing is left.
pub fn token_at(line: &str, character: u32) -> Option<Token> {
    let (units, cursor) = units_and_cursor(line, character);
    let mut start = word_start(&units, cursor);
    let mut end = word_end(&units, cursor);

    while start < end && is_whitespace(units[start]) {
        start += 1;
    }
    while end > start && (is_whitespace(units[end - 1]) || is_terminator(units[end - 1])) {
        end -= 1;
    }
    if start == end {
        return None;
    }

    Some(Token {
        text: String::from_utf16_lossy(&units[start..end]),
        start: start as u32,
        end: end as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_position_after_property_colon() {
        assert!(is_value_position("color: ", 7));
        assert!(is_value_position("  background-color:", 19));
        assert!(is_value_position("\t--my_prop : var(", 17));
        assert!(is_value_position("color: red", 99));
    }

    #[test]
    fn value_position_requires_colon_before_cursor() {
        assert!(!is_value_position("color", 5));
        assert!(!is_value_position("color: red", 3));
        assert!(!is_value_position("", 0));
        assert!(!is_value_position(".card > a {", 11));
        assert!(!is_value_position("font family: x", 14));
    }

    #[test]
    fn empty_property_name_still_matches() {
        assert!(is_value_position(": ", 2));
    }

    #[test]
    fn inside_var_right_after_open_paren() {
        assert!(is_inside_var("color: var()", 11));
        assert!(is_inside_var("color: var(", 11));
    }

    #[test]
    fn inside_var_with_partial_name() {
        assert!(is_inside_var("color: var(--gr", 15));
        assert!(is_inside_var("color: var(--gray-1)", 14));
    }

    #[test]
    fn bare_value_is_not_inside_var() {
        assert!(!is_inside_var("color: ", 7));
        assert!(!is_inside_var("color: --gr", 11));
        assert!(!is_inside_var("color: var", 10));
    }

    #[test]
    fn delimiter_between_var_and_cursor_breaks_context() {
        assert!(!is_inside_var("color: var( --gr", 16));
        assert!(!is_inside_var("color: var(--a, ", 16));
        assert!(!is_inside_var("color: var(--a) ", 16));
        assert!(!is_inside_var("color: var(--a)", 15));
    }

    #[test]
    fn unbalanced_parens_are_judged_by_the_innermost_open() {
        assert!(is_inside_var("color: var(var(", 15));
        assert!(!is_inside_var("color: calc(", 12));
        assert!(!is_inside_var("color: var((", 12));
    }

    #[test]
    fn var_match_is_case_sensitive() {
        assert!(!is_inside_var("color: VAR(", 11));
    }

    #[test]
    fn inside_var_at_line_start() {
        assert!(is_inside_var("var(", 4));
    }

    #[test]
    fn token_in_plain_declaration() {
        let token = token_at("color: --gray-1;", 10).unwrap();
        assert_eq!(token.text, "--gray-1");
        assert_eq!((token.start, token.end), (7, 15));
    }

    #[test]
    fn token_inside_var_call() {
        let line = "  color: var(--gray-1);";
        for character in 13..=21 {
            let token = token_at(line, character).unwrap();
            assert_eq!(token.text, "--gray-1", "cursor at {}", character);
            assert_eq!((token.start, token.end), (13, 21));
        }
    }

    #[test]
    fn token_at_line_start_keeps_first_char() {
        let token = token_at("--gray-1", 0).unwrap();
        assert_eq!(token.text, "--gray-1");
        assert_eq!(token.start, 0);
    }

    #[test]
    fn token_trims_closing_brace() {
        let token = token_at("a{color: --gray-1;}", 12).unwrap();
        assert_eq!(token.text, "--gray-1");
        assert_eq!((token.start, token.end), (9, 17));

        let token = token_at("a { color: --gray-1 }", 14).unwrap();
        assert_eq!(token.text, "--gray-1");
        assert!(token_at("}", 0).is_none());
    }

    #[test]
    fn token_stops_at_commas() {
        let token = token_at("margin: var(--size-1,--size-2)", 24).unwrap();
        assert_eq!(token.text, "--size-2");
        assert_eq!((token.start, token.end), (21, 29));
    }

    #[test]
    fn no_token_between_delimiters() {
        assert_eq!(token_at("a ( ) b", 3), None);
        assert_eq!(token_at("", 0), None);
        assert_eq!(token_at("  ;", 2), None);
    }

    #[test]
    fn cursor_past_end_uses_rest_of_line() {
        let token = token_at("color: --gray-1", 500).unwrap();
        assert_eq!(token.text, "--gray-1");
    }

    #[test]
    fn utf16_columns() {
        // '😀' is two UTF-16 code units
        let token = token_at("/*😀*/ --red-1", 9).unwrap();
        assert_eq!(token.text, "--red-1");
        assert_eq!((token.start, token.end), (7, 14));
    }
}
