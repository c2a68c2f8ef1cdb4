//! Logging utilities.
//!
//! Installs `env_logger` behind the `log` facade once per process.

mod init;

pub use init::{init_logging, LoggingConfig};
