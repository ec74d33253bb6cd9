//! Completion support for Open Props variables.
//!
//! Suggestions are offered only in a property value position. When the cursor
//! is already inside `var(`, items insert the bare variable name; otherwise
//! they insert the whole `var(<name>)` call.

use log::debug;
use tower_lsp::lsp_types::*;

use crate::variables::VariableTable;

use super::scan;

/// Build completion items for the cursor position on `line`.
///
/// Returns None when the cursor is not after a property colon.
pub fn completion_at_position(
    table: &VariableTable,
    line: &str,
    position: Position,
) -> Option<CompletionResponse> {
    if !scan::is_value_position(line, position.character) {
        return None;
    }

    let in_var = scan::is_inside_var(line, position.character);
    debug!(
        "completion at {}:{} in_var={}",
        position.line, position.character, in_var
    );

    let items = table
        .iter()
        .enumerate()
        .map(|(i, (name, value))| variable_item(i, name, value, in_var))
        .collect();

    Some(CompletionResponse::Array(items))
}

fn variable_item(index: usize, name: &str, value: &str, in_var: bool) -> CompletionItem {
    let insert_text = if in_var {
        name.to_string()
    } else {
        format!("var({})", name)
    };

    CompletionItem {
        label: name.to_string(),
        kind: Some(CompletionItemKind::VARIABLE),
        detail: Some(value.to_string()),
        documentation: Some(Documentation::String(value.to_string())),
        insert_text: Some(insert_text),
        // Keep table order instead of the client's alphabetical sort
        sort_text: Some(format!("{:05}", index)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(line: &str, character: u32) -> Option<Vec<CompletionItem>> {
        let table = VariableTable::open_props();
        match completion_at_position(&table, line, Position::new(0, character))? {
            CompletionResponse::Array(items) => Some(items),
            CompletionResponse::List(list) => Some(list.items),
        }
    }

    #[test]
    fn one_item_per_variable() {
        let table = VariableTable::open_props();
        let items = items("color: ", 7).unwrap();
        assert_eq!(items.len(), table.len());
        for (item, (name, value)) in items.iter().zip(table.iter()) {
            assert_eq!(item.label, name);
            assert_eq!(
                item.documentation,
                Some(Documentation::String(value.to_string()))
            );
        }
    }

    #[test]
    fn no_items_outside_value_position() {
        assert!(items("color", 5).is_none());
        assert!(items("a {", 3).is_none());
        assert!(items("", 0).is_none());
    }

    #[test]
    fn bare_value_inserts_var_call() {
        for item in items("  color: ", 9).unwrap() {
            assert_eq!(item.insert_text, Some(format!("var({})", item.label)));
        }
    }

    #[test]
    fn inside_var_inserts_bare_name() {
        for item in items("  color: var()", 13).unwrap() {
            assert_eq!(item.insert_text.as_deref(), Some(item.label.as_str()));
        }
    }

    #[test]
    fn partial_name_inside_var_inserts_bare_name() {
        let items = items("color: var(--gr", 15).unwrap();
        let gray = items.iter().find(|i| i.label == "--gray-1").unwrap();
        assert_eq!(gray.insert_text.as_deref(), Some("--gray-1"));
        assert_eq!(gray.kind, Some(CompletionItemKind::VARIABLE));
        assert_eq!(gray.detail.as_deref(), Some("#f1f3f5"));
    }

    #[test]
    fn sort_text_follows_table_order() {
        let items = items("color: ", 7).unwrap();
        let sort_texts: Vec<_> = items.iter().filter_map(|i| i.sort_text.clone()).collect();
        let mut sorted = sort_texts.clone();
        sorted.sort();
        assert_eq!(sort_texts, sorted);
    }

    #[test]
    fn repeated_requests_are_identical() {
        assert_eq!(items("color: var(", 11), items("color: var(", 11));
    }
}
