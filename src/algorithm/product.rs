use crate::algorithm::counting::product_count;
use std::iter::FusedIterator;

/// Cartesian product of a sequence of collections, last collection varying fastest
///
/// Walks an odometer of one index per collection: the rightmost wheel that
/// can still turn is advanced and every wheel to its right rolls back to zero.
#[derive(Clone, Debug)]
pub struct Product<T> {
    pools: Vec<Vec<T>>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
    remaining: Option<usize>,
}

impl<T: Clone> Product<T> {
    fn new(pools: Vec<Vec<T>>) -> Self {
        let lengths: Vec<usize> = pools.iter().map(Vec::len).collect();
        let done = lengths.contains(&0);

        Self {
            remaining: product_count(&lengths),
            indices: vec![0; pools.len()],
            pools,
            started: false,
            done,
        }
    }

    fn emit(&mut self) -> Option<Vec<T>> {
        let tuple = self
            .pools
            .iter()
            .zip(&self.indices)
            .map(|(pool, &index)| pool.get(index).cloned())
            .collect::<Option<Vec<T>>>();

        if tuple.is_none() {
            self.done = true;
        } else if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        tuple
    }

    fn advance(&mut self) -> Option<()> {
        let wheel = self
            .pools
            .iter()
            .zip(&self.indices)
            .rposition(|(pool, &index)| index + 1 < pool.len())?;

        *self.indices.get_mut(wheel)? += 1;
        self.indices.get_mut(wheel + 1..)?.fill(0);
        Some(())
    }
}

impl<T: Clone> Iterator for Product<T> {
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

impl<T: Clone> FusedIterator for Product<T> {}

/// Every tuple formed by picking one element from each collection, lazily
///
/// No collections yields a single empty tuple; any empty collection yields nothing.
pub fn product<T, C>(collections: &[C]) -> Product<T>
where
    T: Clone,
    C: AsRef<[T]>,
{
    Product::new(
        collections
            .iter()
            .map(|collection| collection.as_ref().to_vec())
            .collect(),
    )
}

/// Materialize the cartesian product by expanding partial tuples one collection at a time
///
/// Produces the same tuples in the same order as [`product`], building each
/// layer from the previous one instead of recursing.
pub fn expand_product<T, C>(collections: &[C]) -> Vec<Vec<T>>
where
    T: Clone,
    C: AsRef<[T]>,
{
    let mut partials: Vec<Vec<T>> = vec![Vec::new()];

    for collection in collections {
        let items = collection.as_ref();
        let mut expanded = Vec::with_capacity(partials.len().saturating_mul(items.len()));

        for partial in &partials {
            for item in items {
                let mut tuple = Vec::with_capacity(partial.len() + 1);
                tuple.extend_from_slice(partial);
                tuple.push(item.clone());
                expanded.push(tuple);
            }
        }

        partials = expanded;
    }

    partials
}
