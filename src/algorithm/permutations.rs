use crate::algorithm::counting::permutation_count;
use crate::algorithm::length::Length;
use crate::io::error::{Result, WithContext};
use crate::sequence::range::{range, range_step};
use std::iter::FusedIterator;

/// Ordered selections of distinct positions, in cycle-counter order
///
/// Starts from the identity order. Each position `i` carries a counter seeded
/// from `n - i`; a step sweeps positions right to left, decrementing the
/// counter. A counter reaching zero rotates the tail `indices[i..]` left by one
/// and resets, moving the sweep one position left. Otherwise `indices[i]` is
/// swapped with the index `counter` places from the end and a tuple is
/// emitted. A sweep that resets every counter ends the enumeration.
#[derive(Clone, Debug)]
pub struct Permutations<T> {
    pool: Vec<T>,
    catch_len: usize,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    started: bool,
    done: bool,
    remaining: Option<usize>,
}

impl<T: Clone> Permutations<T> {
    fn new(pool: Vec<T>, catch_len: usize) -> Self {
        let n = pool.len();
        let indices = range(n).collect();
        // Counters run n, n - 1, ..., n - catch_len + 1
        let cycles = range_step(n as isize, (n - catch_len) as isize, -1)
            .map(|counter| counter as usize)
            .collect();

        Self {
            remaining: permutation_count(n, catch_len),
            pool,
            catch_len,
            indices,
            cycles,
            started: false,
            done: false,
        }
    }

    fn emit(&mut self) -> Option<Vec<T>> {
        let tuple = self
            .indices
            .iter()
            .take(self.catch_len)
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

        for i in (0..self.catch_len).rev() {
            let counter = self.cycles.get_mut(i)?;
            *counter -= 1;

            if *counter == 0 {
                self.indices.get_mut(i..)?.rotate_left(1);
                *counter = n - i;
            } else {
                let j = n - *counter;
                if j >= self.indices.len() {
                    return None;
                }
                self.indices.swap(i, j);
                return Some(());
            }
        }

        None
    }
}

impl<T: Clone> Iterator for Permutations<T> {
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

impl<T: Clone> FusedIterator for Permutations<T> {}

/// Every ordering of `length` distinct positions of `data`
///
/// Produces `n! / (n - k)!` tuples; `Length::Exactly(0)` yields one empty tuple.
///
/// # Errors
///
/// Returns an error if the requested length exceeds `data.len()`
pub fn permutations<T: Clone>(data: &[T], length: Length) -> Result<Permutations<T>> {
    let catch_len = length
        .resolve_distinct(data.len())
        .with_operation("permutations")?;

    Ok(Permutations::new(data.to_vec(), catch_len))
}
