use crate::algorithm::counting::replacement_count;
use crate::algorithm::length::Length;
use std::iter::FusedIterator;

/// Multisets of a fixed size, as non-decreasing position tuples in lexicographic order
///
/// Advancing bumps the rightmost index still below `n - 1` and levels every
/// index to its right up to the same value.
#[derive(Clone, Debug)]
pub struct CombinationsWithReplacement<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
    remaining: Option<usize>,
}

impl<T: Clone> CombinationsWithReplacement<T> {
    fn new(pool: Vec<T>, catch_len: usize) -> Self {
        // Nothing to draw from, but an empty selection still exists
        let done = pool.is_empty() && catch_len > 0;

        Self {
            remaining: replacement_count(pool.len(), catch_len),
            indices: vec![0; catch_len],
            pool,
            started: false,
            done,
        }
    }

    fn emit(&mut self) -> Option<Vec<T>> {
        let tuple = self
            .indices
            .iter()
            .map(|&index| self.pool.get(index).cloned())
            .collect::<Option<Vec<T>>>();

        if tuple.is_none() {
            self.done = true;
        } else if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        tuple
    }

    fn advance(&mut self) -> Option<()> {
        let last = self.pool.len().checked_sub(1)?;

        let pivot = self.indices.iter().rposition(|&index| index != last)?;
        let level = self.indices.get(pivot)? + 1;
        self.indices.get_mut(pivot..)?.fill(level);
        Some(())
    }
}

impl<T: Clone> Iterator for CombinationsWithReplacement<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return self.emit();
        }

        if self.advance().is_none() {
            self.done = true;
            self.remaining = Some(0);
            return None;
        }
        self.emit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.remaining.map_or((0, None), |remaining| (remaining, Some(remaining)))
    }
}

impl<T: Clone> FusedIterator for CombinationsWithReplacement<T> {}

/// Every non-decreasing selection of `length` positions of `data`, repeats allowed
///
/// Produces `C(n + k - 1, k)` tuples. Unlike [`combinations`](crate::combinations),
/// the length may exceed `data.len()`, so there is nothing to reject.
pub fn combinations_with_replacement<T: Clone>(
    data: &[T],
    length: Length,
) -> CombinationsWithReplacement<T> {
    let catch_len = length.resolve(data.len());
    CombinationsWithReplacement::new(data.to_vec(), catch_len)
}
