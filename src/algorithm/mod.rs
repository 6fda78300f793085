//! Combinatorial generators driven by in-place index state
//!
//! Each generator copies its input once and advances a small index buffer per
//! produced tuple, so enumeration is lazy and order is fully deterministic.

/// Subsets of distinct positions in lexicographic order
pub mod combinations;
/// Checked result-size formulas
pub mod counting;
/// Requested tuple length and its validation
pub mod length;
/// Ordered selections of distinct positions
pub mod permutations;
/// Cartesian product across collections
pub mod product;
/// Non-decreasing selections with repeated positions
pub mod replacement;

pub use combinations::{Combinations, combinations};
pub use counting::{combination_count, permutation_count, product_count, replacement_count};
pub use length::Length;
pub use permutations::{Permutations, permutations};
pub use product::{Product, expand_product, product};
pub use replacement::{CombinationsWithReplacement, combinations_with_replacement};
