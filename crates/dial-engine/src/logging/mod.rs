//! Logging utilities.
//!
//! Centralizes logger initialization for hosts. Library code only uses the
//! `log` facade; `env_logger` is wired up here and nowhere else.

mod init;

pub use init::{LoggingConfig, init_logging};
