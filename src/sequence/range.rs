use num_traits::{CheckedAdd, Num};
use std::iter::FusedIterator;

/// Lazy arithmetic progression between a start and an exclusive end
///
/// Ascends while values stay in `[start, end)` when `start <= end`, and
/// descends while values stay in `(end, start]` otherwise. A step pointing
/// away from `end` (or a zero step) yields nothing rather than failing. A
/// step that would leave the range of `T` ends the sequence.
#[derive(Clone, Debug)]
pub struct Range<T> {
    current: T,
    end: T,
    step: T,
    ascending: bool,
    exhausted: bool,
}

impl<T> Range<T>
where
    T: Num + CheckedAdd + PartialOrd + Copy,
{
    fn new(start: T, end: T, step: T) -> Self {
        let zero = T::zero();
        let ascending = start <= end;
        let exhausted = if ascending { step <= zero } else { step >= zero };

        Self {
            current: start,
            end,
            step,
            ascending,
            exhausted,
        }
    }
}

impl<T> Iterator for Range<T>
where
    T: Num + CheckedAdd + PartialOrd + Copy,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }

        let within = if self.ascending {
            self.current < self.end
        } else {
            self.current > self.end
        };

        if !within {
            self.exhausted = true;
            return None;
        }

        let value = self.current;
        // A step past the numeric bounds ends the range rather than wrapping
        match value.checked_add(&self.step) {
            Some(next) => self.current = next,
            None => self.exhausted = true,
        }
        Some(value)
    }
}

impl<T> FusedIterator for Range<T> where T: Num + CheckedAdd + PartialOrd + Copy {}

/// Produce `0, 1, ..., end - 1`
///
/// Empty when `end <= 0`.
pub fn range<T>(end: T) -> Range<T>
where
    T: Num + CheckedAdd + PartialOrd + Copy,
{
    Range::new(T::zero(), end, T::one())
}

/// Produce `start, start + step, start + 2 * step, ...` up to but excluding `end`
///
/// The step must be positive to move forward and negative to move backward;
/// otherwise the range is empty.
pub fn range_step<T>(start: T, end: T, step: T) -> Range<T>
where
    T: Num + CheckedAdd + PartialOrd + Copy,
{
    Range::new(start, end, step)
}
