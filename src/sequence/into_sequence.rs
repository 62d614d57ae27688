use alloc::vec::Vec;

use super::Sequence;
use crate::source::FromIter;

/// Conversion into a [`Sequence`].
///
/// Every sequence converts into itself. Owned vectors, arrays and slices
/// convert into a [`FromIter`] over their elements.
pub trait IntoSequence {
    /// The type of the elements being produced.
    type Item;
    /// Which kind of sequence are we turning this into?
    type IntoSeq: Sequence<Item = Self::Item>;

    /// Convert `self` into a sequence.
    fn into_seq(self) -> Self::IntoSeq;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type IntoSeq = S;

    fn into_seq(self) -> Self::IntoSeq {
        self
    }
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type IntoSeq = FromIter<alloc::vec::IntoIter<T>>;

    fn into_seq(self) -> Self::IntoSeq {
        FromIter::new(self.into_iter())
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type IntoSeq = FromIter<core::array::IntoIter<T, N>>;

    fn into_seq(self) -> Self::IntoSeq {
        FromIter::new(self.into_iter())
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Item = &'a T;
    type IntoSeq = FromIter<core::slice::Iter<'a, T>>;

    fn into_seq(self) -> Self::IntoSeq {
        FromIter::new(self.iter())
    }
}
