//! Logging for the dataset splitter
//!
//! This module provides:
//! - Custom log formatting with bracketed output
//! - Logging to stdout, optionally mirrored to a timestamped file

mod formatter;
mod setup;

pub use formatter::BracketedFormatter;
pub use setup::setup_logging;
