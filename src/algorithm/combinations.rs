use crate::algorithm::counting::combination_count;
use crate::algorithm::length::Length;
use crate::io::error::{Result, WithContext};
use crate::sequence::range::range;
use std::iter::FusedIterator;

/// Subsets of a fixed size, in lexicographic order of their positions
///
/// Position `i` of a `k`-subset of `n` elements can rise at most to
/// `i + n - k`. Advancing bumps the rightmost index below its ceiling and
/// packs every index to its right directly above it.
#[derive(Clone, Debug)]
pub struct Combinations<T> {
    pool: Vec<T>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
    remaining: Option<usize>,
}

impl<T: Clone> Combinations<T> {
    fn new(pool: Vec<T>, catch_len: usize) -> Self {
        Self {
            remaining: combination_count(pool.len(), catch_len),
            indices: range(catch_len).collect(),
            pool,
            started: false,
            done: false,
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
        let n = self.pool.len();
        let k = self.indices.len();

        let pivot = (0..k).rev().find(|&i| {
            self.indices
                .get(i)
                .is_some_and(|&index| index != i + n - k)
        })?;

        let mut next_index = self.indices.get(pivot)? + 1;
        for slot in self.indices.get_mut(pivot..)? {
            *slot = next_index;
            next_index += 1;
        }
        Some(())
    }
}

impl<T: Clone> Iterator for Combinations<T> {
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

impl<T: Clone> FusedIterator for Combinations<T> {}

/// Every subset of `length` positions of `data`, elements kept in source order
///
/// Produces `C(n, k)` tuples; `Length::Exactly(0)` yields one empty tuple.
///
/// # Errors
///
/// Returns an error if the requested length exceeds `data.len()`
pub fn combinations<T: Clone>(data: &[T], length: Length) -> Result<Combinations<T>> {
    let catch_len = length
        .resolve_distinct(data.len())
        .with_operation("combinations")?;

    Ok(Combinations::new(data.to_vec(), catch_len))
}
