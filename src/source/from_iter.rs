use core::iter::Fuse;

use crate::Sequence;

/// A sequence over the elements of an ordered collection.
///
/// This `struct` is created by the [`from_iter`] function. See its
/// documentation for more.
#[derive(Clone, Debug)]
pub struct FromIter<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> FromIter<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

/// Converts a collection into a sequence over its elements.
///
/// Elements are produced by position, each exactly once. The resulting
/// sequence never resumes after returning `None`, even if the underlying
/// iterator would.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut seq = lazyseq::from_iter(vec!["chashu", "nori"]);
/// assert_eq!(seq.next(), Some("chashu"));
/// assert_eq!(seq.next(), Some("nori"));
/// assert_eq!(seq.next(), None);
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter::new(iter.into_iter())
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn round_trip() {
        let input = vec![4, 8, 15, 16, 23, 42];
        let out: Vec<_> = from_iter(input.clone()).collect();
        assert_eq!(out, input);
    }

    #[test]
    fn borrowed_collection() {
        let input = [1, 2];
        let mut seq = from_iter(&input);
        assert_eq!(seq.next(), Some(&1));
        assert_eq!(seq.next(), Some(&2));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn never_resumes() {
        // An iterator that alternates between `Some` and `None`.
        let mut flip = false;
        let flaky = core::iter::from_fn(move || {
            flip = !flip;
            flip.then_some(1)
        });
        let mut seq = from_iter(flaky);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }
}
