//! my_python_project - My Python Project
//!
//! A minimal command-line skeleton with a greeting command, a
//! configuration display command, environment-driven settings and
//! structured logging.

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use error::{ProjectError, Result};
