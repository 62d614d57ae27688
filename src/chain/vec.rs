use alloc::vec::Vec;
use core::fmt;

use crate::Sequence;

use super::Chain as ChainTrait;

/// A sequence that chains multiple sequences one after another.
///
/// This `struct` is created by the [`chain`] method on the [`Chain`] trait. See
/// its documentation for more.
///
/// [`chain`]: crate::Chain::chain
/// [`Chain`]: crate::Chain
pub struct Chain<S> {
    sources: Vec<S>,
    index: usize,
}

impl<S: Sequence> Sequence for Chain<S> {
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
        remaining
            .iter()
            .map(Sequence::size_hint)
            .fold((0, Some(0)), |(lower, upper), (l, u)| {
                let upper = match (upper, u) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (lower.saturating_add(l), upper)
            })
    }
}

impl<S> fmt::Debug for Chain<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.sources.iter()).finish()
    }
}

impl<S: Sequence> ChainTrait for Vec<S> {
    type Item = S::Item;

    type Sequence = Chain<S>;

    fn chain(self) -> Self::Sequence {
        Chain {
            sources: self,
            index: 0,
        }
    }
}
