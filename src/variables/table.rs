//! The variable table offered to completion and hover.

use std::collections::HashMap;

use crate::settings::Settings;

use super::open_props::OPEN_PROPS;

/// Immutable mapping from CSS custom property name to its resolved value.
///
/// Entries keep a stable order (built-ins first, then workspace extras sorted
/// by name) so completion results are deterministic.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl VariableTable {
    /// Build the table from the built-in Open Props variables.
    pub fn open_props() -> Self {
        Self::from_entries(
            OPEN_PROPS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        )
    }

    /// Build the Open Props table with workspace settings applied.
    ///
    /// Variables from settings override built-ins of the same name and are
    /// otherwise appended; excluded names are dropped last.
    pub fn with_settings(settings: &Settings) -> Self {
        let mut entries: Vec<(String, String)> = OPEN_PROPS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        // BTreeMap keeps extras in name order
        for (name, value) in &settings.variables {
            let name = normalize_name(name);
            match entries.iter_mut().find(|(existing, _)| *existing == name) {
                Some(entry) => entry.1 = value.clone(),
                None => entries.push((name, value.clone())),
            }
        }

        if !settings.exclude.is_empty() {
            let excluded: Vec<String> =
                settings.exclude.iter().map(|n| normalize_name(n)).collect();
            entries.retain(|(name, _)| !excluded.contains(name));
        }

        Self::from_entries(entries)
    }

    fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let entries: Vec<(String, String)> = entries.into_iter().collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Look up the value documented for a variable name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].1.as_str())
    }

    /// Iterate `(name, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Custom property names always start with `--`; settings may omit it.
fn normalize_name(name: &str) -> String {
    let name = name.trim();
    if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{}", name)
    }
}
