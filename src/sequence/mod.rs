//! Standalone sequence utilities

/// Endless repetition over a fixed collection
pub mod cycle;
/// Arithmetic ranges over generic numeric types
pub mod range;

pub use cycle::Cycle;
pub use range::{Range, range, range_step};
