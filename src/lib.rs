//! Lazy combinatorial sequence generators
//!
//! Arithmetic ranges, endless cycles, cartesian products, permutations,
//! combinations and combinations with replacement. Every generator copies its
//! input once and yields `Vec<T>` tuples on demand in a fixed, documented order.

#![forbid(unsafe_code)]

/// Index-driven generators: product, permutations and combinations
pub mod algorithm;
/// Command-line front end, configuration and error handling
pub mod io;
/// Standalone ranges and cycles
pub mod sequence;

pub use algorithm::{
    Combinations, CombinationsWithReplacement, Length, Permutations, Product, combination_count,
    combinations, combinations_with_replacement, expand_product, permutation_count,
    permutations, product, product_count, replacement_count,
};
pub use io::error::{GeneratorError, Result};
pub use sequence::{Cycle, Range, range, range_step};
