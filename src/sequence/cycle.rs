use crate::io::error::{Result, WithContext, invalid_parameter};

/// Endless repetition of a fixed collection in order
///
/// Owns a copy of its items and a single cursor. Advancing needs `&mut self`,
/// so sharing one cycle between threads requires external synchronization.
#[derive(Clone, Debug)]
pub struct Cycle<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Cycle<T> {
    /// Create a cycle over the given items
    ///
    /// # Errors
    ///
    /// Returns an error if `items` is empty, since there is no element to wrap to
    pub fn new(items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(invalid_parameter(
                "items",
                &"[]",
                &"cycle requires at least one item",
            ))
            .with_operation("cycle");
        }

        Ok(Self { items, cursor: 0 })
    }

    /// Create a cycle from any iterable, collecting it first
    ///
    /// # Errors
    ///
    /// Returns an error if the iterable yields no items
    pub fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(items.into_iter().collect())
    }

    /// Number of items before the sequence repeats
    pub const fn period(&self) -> usize {
        self.items.len()
    }

    /// Index of the item the next call will return
    pub const fn position(&self) -> usize {
        self.cursor
    }
}

impl<T: Clone> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.cursor).cloned();
        self.cursor = (self.cursor + 1) % self.items.len();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
