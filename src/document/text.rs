//! Text utilities for position conversion.
//!
//! Provides LSP position <-> byte offset conversion with proper UTF-16 handling.

use tower_lsp::lsp_types::Position;

/// Pre-computed line index for efficient position lookups.
///
/// LSP positions use line/column where column is in UTF-16 code units.
/// This struct pre-computes line start offsets so a line can be sliced
/// without rescanning the whole text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
    /// Source text.
    source: String,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(source: String) -> Self {
        let mut line_starts = vec![0];

        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }

        Self {
            line_starts,
            source,
        }
    }

    /// Get the source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    #[cfg(test)]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a line without its `\n` or `\r\n` terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        let (start, end) = self.line_bounds(line as usize)?;
        Some(&self.source[start..end])
    }

    /// Byte range of a line's content, excluding the line terminator.
    fn line_bounds(&self, line: usize) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(line)?;
        let mut end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - 1) // Exclude newline
            .unwrap_or(self.source.len());
        if end > start && self.source.as_bytes()[end - 1] == b'\r' {
            end -= 1;
        }
        Some((start, end))
    }

    /// Convert an LSP position to a byte offset, clamping to the document.
    ///
    /// A line past the end maps to the end of the text; a column past the end
    /// of its line maps to the end of that line's content.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some((line_start, line_end)) = self.line_bounds(position.line as usize) else {
            return self.source.len();
        };

        let line_slice = &self.source[line_start..line_end];

        // Walk UTF-16 code units to find byte offset
        let mut utf16_col = 0u32;
        for (i, c) in line_slice.char_indices() {
            if utf16_col >= position.character {
                return line_start + i;
            }
            utf16_col += c.len_utf16() as u32;
        }

        line_end
    }
}
