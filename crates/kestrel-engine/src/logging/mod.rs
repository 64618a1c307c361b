//! Logging utilities.
//!
//! This module centralizes logger initialization. Engine code logs through the
//! standard `log` facade; `env_logger` is the backend installed here.

mod init;

pub use init::{init_logging, LoggingConfig};
