//! Logging utilities.
//!
//! Centralizes logger initialization; the rest of the crate uses the
//! standard `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
