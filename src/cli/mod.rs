// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for analyzing photos.
//!
//! This module contains the command-line interface logic, including argument parsing,
//! console logging and the `analyze` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Console output macros and verbosity.
pub mod logging;

/// Analysis command.
pub mod analyze;
