use core::fmt;

use super::Sequence;

/// A running fold over a sequence.
///
/// This `struct` is created by the [`accumulate`] method on [`Sequence`]. See
/// its documentation for more.
///
/// [`accumulate`]: Sequence::accumulate
pub struct Accumulate<S, B, F> {
    source: S,
    acc: Option<B>,
    combine: F,
}

impl<S, B, F> Accumulate<S, B, F> {
    pub(crate) fn new(source: S, init: B, combine: F) -> Self {
        Self {
            source,
            acc: Some(init),
            combine,
        }
    }
}

impl<S, B, F> Sequence for Accumulate<S, B, F>
where
    S: Sequence,
    B: Clone,
    F: FnMut(B, S::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        // The accumulator is dropped once the source is exhausted.
        let acc = self.acc.take()?;
        let item = self.source.next()?;
        let acc = (self.combine)(acc, item);
        self.acc = Some(acc.clone());
        Some(acc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.acc.is_none() {
            return (0, Some(0));
        }
        self.source.size_hint()
    }
}

impl<S: fmt::Debug, B: fmt::Debug, F> fmt::Debug for Accumulate<S, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulate")
            .field("source", &self.source)
            .field("acc", &self.acc)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn running_sum() {
        let out: Vec<_> = crate::from_iter([1, 2, 3, 4])
            .accumulate(0, |a, b| a + b)
            .collect();
        assert_eq!(out, vec![1, 3, 6, 10]);
    }

    #[test]
    fn running_product() {
        let out: Vec<_> = crate::from_iter([1, 2, 3, 4])
            .accumulate(1, |a, b| a * b)
            .collect();
        assert_eq!(out, vec![1, 2, 6, 24]);
    }

    #[test]
    fn seed_is_never_emitted_alone() {
        let empty: [i32; 0] = [];
        let mut seq = crate::from_iter(empty).accumulate(1, |a, b| a + b);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn accumulator_may_differ_from_element_type() {
        let out: Vec<usize> = crate::from_iter(["a", "bb", "ccc"])
            .accumulate(0, |len, s| len + s.len())
            .collect();
        assert_eq!(out, vec![1, 3, 6]);
    }

    #[test]
    fn accumulate_is_lazy_over_infinite() {
        let mut seq = crate::count(1, 1).accumulate(0, |a, b| a + b);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(3));
        assert_eq!(seq.next(), Some(6));
    }
}
