//! LSP protocol feature implementations.
//!
//! This module provides implementations for LSP features:
//! - Completion of Open Props variables in property values
//! - Hover information for variables under the cursor
//! - The line scanner both features share

mod completion;
mod hover;
pub mod scan;

pub use completion::completion_at_position;
pub use hover::hover_at_position;
