use core::fmt;

use crate::Sequence;

use super::Chain as ChainTrait;

/// A sequence that chains a fixed number of sequences one after another.
///
/// This `struct` is created by the [`chain`] method on the [`Chain`] trait. See
/// its documentation for more.
///
/// [`chain`]: crate::Chain::chain
/// [`Chain`]: crate::Chain
pub struct Chain<S, const N: usize> {
    sources: [S; N],
    index: usize,
}

impl<S: Sequence, const N: usize> Sequence for Chain<S, N> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(source) = self.sources.get_mut(self.index) {
            match source.next() {
                Some(item) => return Some(item),
                None => self.index += 1,
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sources.get(self.index..).unwrap_or_default();
        remaining.iter().fold((0, Some(0)), |(lower, upper), source| {
            let (l, u) = source.size_hint();
            let upper = match (upper, u) {
                (Some(a), Some(b)) => a.checked_add(b),
                _ => None,
            };
            (lower.saturating_add(l), upper)
        })
    }
}

impl<S, const N: usize> fmt::Debug for Chain<S, N>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sources.iter()).finish()
    }
}

impl<S: Sequence, const N: usize> ChainTrait for [S; N] {
    type Item = S::Item;

    type Sequence = Chain<S, N>;

    fn chain(self) -> Self::Sequence {
        Chain {
            sources: self,
            index: 0,
        }
    }
}
