//! Input/output operations and error handling

/// Command-line front end over every generator
pub mod cli;
/// Crate constants and command-line defaults
pub mod configuration;
/// Error types and context attribution
pub mod error;
/// Progress display for long enumerations
pub mod progress;
