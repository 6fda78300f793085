pub mod permutations;
pub mod replacement;
