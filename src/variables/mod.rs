//! Design-token variables known to the server.
//!
//! This module provides:
//! - `OPEN_PROPS`, the built-in Open Props custom properties
//! - `VariableTable`, the immutable lookup used by completion and hover

mod open_props;
mod table;

pub use open_props::OPEN_PROPS;
pub use table::VariableTable;
