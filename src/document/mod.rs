//! Document state management and text utilities.
//!
//! This module provides:
//! - `LineIndex` for line extraction and LSP position -> byte offset conversion
//! - `TextDocument` and `DocumentStore` for document lifecycle management

mod state;
mod text;

pub use state::{DocumentError, DocumentStore, TextDocument};
pub use text::LineIndex;
