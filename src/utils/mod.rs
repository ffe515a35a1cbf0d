//! Utility functions module
//!
//! This module contains logging setup shared by the binary.

pub mod logging;

pub use logging::*;
