//! Logger setup for the server binary.
//!
//! stdout carries the LSP transport, so log records go to stderr. The default
//! filter is `info`; `RUST_LOG` overrides it.

use env_logger::{Builder, Env, Target};
use log::SetLoggerError;

/// Install the global logger.
pub fn init_logger() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init()
}
