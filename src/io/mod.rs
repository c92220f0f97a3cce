//! Input/output operations, configuration and error handling

/// Command-line parsing and session runners
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image loading and PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Terminal progress display
pub mod progress;
/// Pointer event scripts
pub mod script;
/// Session animation export
pub mod visualization;
