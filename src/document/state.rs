//! Document state management for the Open Props LSP.

use dashmap::DashMap;
use log::trace;
use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent, Url};

use super::text::LineIndex;

/// Errors raised while updating open documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document {0} is not open")]
    UnknownDocument(Url),
}

/// State for a single open document.
#[derive(Debug, Clone)]
pub struct TextDocument {
    /// Pre-computed line index over the current text.
    pub line_index: LineIndex,
    /// Document version from the client.
    pub version: i32,
}

impl TextDocument {
    pub fn new(source: String, version: i32) -> Self {
        Self {
            line_index: LineIndex::new(source),
            version,
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        self.line_index.source()
    }

    /// Apply content changes in order.
    ///
    /// A change with a range replaces that range; a change without one
    /// replaces the whole document.
    pub fn apply_changes(&mut self, changes: Vec<TextDocumentContentChangeEvent>, version: i32) {
        for change in changes {
            match change.range {
                Some(range) => {
                    let start = self.line_index.offset_at(range.start);
                    let end = self.line_index.offset_at(range.end).max(start);
                    let mut source = self.line_index.source().to_string();
                    source.replace_range(start..end, &change.text);
                    self.line_index = LineIndex::new(source);
                }
                None => self.line_index = LineIndex::new(change.text),
            }
        }
        self.version = version;
    }
}

/// Thread-safe storage for open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, TextDocument>,
}

impl DocumentStore {
    /// Create a new empty document store.
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Open or replace a document with the given source text.
    pub fn open(&self, uri: Url, source: String, version: i32) {
        self.documents.insert(uri, TextDocument::new(source, version));
    }

    /// Apply incremental or full changes to an open document.
    pub fn apply_changes(
        &self,
        uri: &Url,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) -> Result<(), DocumentError> {
        let mut doc = self
            .documents
            .get_mut(uri)
            .ok_or_else(|| DocumentError::UnknownDocument(uri.clone()))?;
        trace!("applying {} change(s) to {} v{}", changes.len(), uri, version);
        doc.apply_changes(changes, version);
        Ok(())
    }

    /// Close a document.
    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    #[cfg(test)]
    pub fn is_open(&self, uri: &Url) -> bool {
        self.documents.contains_key(uri)
    }

    /// Get the text of the line under `position`.
    ///
    /// Returns None if the document is not open or the line does not exist.
    pub fn line(&self, uri: &Url, position: Position) -> Option<String> {
        let doc = self.documents.get(uri)?;
        doc.line_index.line(position.line).map(str::to_string)
    }
}
