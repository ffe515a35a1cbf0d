//! Configuration management module
//!
//! This module resolves the process-wide settings from environment
//! variables and default values.

pub mod settings;

pub use settings::*;
