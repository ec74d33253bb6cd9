//! Hover information for Open Props variables.

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position, Range};

use crate::variables::VariableTable;

use super::scan;

/// Show the value of the variable under the cursor on `line`.
///
/// The returned range covers exactly the variable name so the editor can
/// highlight it. Returns None if the token is not a known variable.
pub fn hover_at_position(table: &VariableTable, line: &str, position: Position) -> Option<Hover> {
    let token = scan::token_at(line, position.character)?;
    let value = table.get(&token.text)?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::PlainText,
            value: value.to_string(),
        }),
        range: Some(Range::new(
            Position::new(position.line, token.start),
            Position::new(position.line, token.end),
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hover(line: &str, character: u32) -> Option<Hover> {
        hover_at_position(&VariableTable::open_props(), line, Position::new(3, character))
    }

    fn contents(hover: &Hover) -> &str {
        match &hover.contents {
            HoverContents::Markup(markup) => &markup.value,
            other => panic!("unexpected hover contents: {:?}", other),
        }
    }

    #[test]
    fn hover_on_known_variable() {
        let hover = hover("color: --gray-1;", 9).unwrap();
        assert_eq!(contents(&hover), "#f1f3f5");
        assert_eq!(
            hover.range,
            Some(Range::new(Position::new(3, 7), Position::new(3, 15)))
        );
    }

    #[test]
    fn hover_inside_var_call() {
        let hover = hover("  padding: var(--size-3) var(--size-5);", 30).unwrap();
        assert_eq!(contents(&hover), "1.5rem");
        assert_eq!(
            hover.range,
            Some(Range::new(Position::new(3, 29), Position::new(3, 37)))
        );
    }

    #[test]
    fn hover_in_single_line_rule() {
        let hover = hover("a{color: --gray-1;}", 12).unwrap();
        assert_eq!(contents(&hover), "#f1f3f5");
        assert_eq!(
            hover.range,
            Some(Range::new(Position::new(3, 9), Position::new(3, 17)))
        );
    }

    #[test]
    fn hover_on_unknown_token() {
        assert!(hover("color: --not-a-token;", 10).is_none());
        assert!(hover("color: red;", 8).is_none());
        assert!(hover("color: var(--gray-1);", 8).is_none());
    }

    #[test]
    fn hover_on_delimiter_gap() {
        assert!(hover("color:  ", 7).is_none());
    }

    #[test]
    fn hover_is_idempotent() {
        assert_eq!(hover("color: --red-5;", 10), hover("color: --red-5;", 10));
    }
}
