//! The pull-based sequence abstraction and its combinators.
//!
//! # Examples
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let evens: Vec<_> = lazyseq::range(10)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .collect();
//!
//! assert_eq!(evens, vec![0, 20, 40, 60, 80]);
//! ```

mod accumulate;
mod drop_while;
mod enumerate;
mod filter;
mod from_sequence;
mod into_sequence;
mod iter;
mod map;
mod stream;
mod take;
mod take_while;
mod zip;

use alloc::boxed::Box;

pub use accumulate::Accumulate;
pub use drop_while::DropWhile;
pub use enumerate::Enumerate;
pub use filter::{Filter, FilterFalse};
pub use from_sequence::FromSequence;
pub use into_sequence::IntoSequence;
pub use iter::IntoIter;
pub use map::Map;
pub use stream::IntoStream;
pub use take::Take;
pub use take_while::TakeWhile;
pub use zip::{zip, Zip};

use crate::chain::tuple::Chain2;
use crate::chain::Chain;
use crate::generate::Cycle;

/// A lazy producer of elements, advanced one element at a time.
///
/// `next` returns `Some(item)` while elements remain and `None` once the
/// sequence is exhausted. Every adapter in this crate keeps returning `None`
/// after its first `None`, even if the sequence it wraps would resume.
pub trait Sequence {
    /// The type of the elements being produced.
    type Item;

    /// Advance the sequence and return the next element.
    fn next(&mut self) -> Option<Self::Item>;

    /// Bounds on the remaining length of the sequence.
    ///
    /// Returns `(lower, upper)`, where `upper` is `None` if the bound is
    /// unknown or larger than `usize`. The default is `(0, None)`, which is
    /// correct for every sequence.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Borrow the sequence so an adapter can advance it without consuming it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Creates a sequence which only yields elements matching `predicate`.
    ///
    /// The predicate is called at most once per source element.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Creates a sequence which only yields elements *not* matching `predicate`.
    fn filter_false<P>(self, predicate: P) -> FilterFalse<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        FilterFalse::new(self, predicate)
    }

    /// Convert elements from one type into another.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Creates a sequence which gives the current position as well as the
    /// next element.
    ///
    /// Positions start at zero and only advance when an element is produced.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// ‘Zips up’ two sequences into a single sequence of pairs.
    ///
    /// The resulting sequence ends as soon as either input ends. An element
    /// already pulled from `self` on that final call is dropped.
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoSeq>
    where
        Self: Sized,
        U: IntoSequence,
    {
        Zip::new(self, other.into_seq())
    }

    /// Creates a sequence that yields the first `n` elements, or fewer if the
    /// underlying sequence ends sooner.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Repeats the sequence endlessly.
    ///
    /// Elements are buffered during the first pass and replayed afterwards.
    ///
    /// # Panics
    ///
    /// Calling `next` on the returned sequence panics if `self` is exhausted
    /// before yielding a single element. Use [`Cycle::try_next`] to observe
    /// this as an [`Error::EmptySource`](crate::Error::EmptySource) instead.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Cycle::new(self)
    }

    /// A running fold: yields the accumulator after each element is
    /// combined into it.
    ///
    /// The initial value is never yielded on its own.
    fn accumulate<B, F>(self, init: B, combine: F) -> Accumulate<Self, B, F>
    where
        Self: Sized,
        B: Clone,
        F: FnMut(B, Self::Item) -> B,
    {
        Accumulate::new(self, init, combine)
    }

    /// Drains the sequence, folding every element into `init` from left to
    /// right.
    ///
    /// Returns `init` unchanged if the sequence is empty. Never returns if the
    /// sequence is infinite.
    fn reduce<B, F>(mut self, init: B, mut combine: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(item) = self.next() {
            acc = combine(acc, item);
        }
        acc
    }

    /// Takes two sequences and creates a new sequence over both in order.
    fn chain<U>(self, other: U) -> Chain2<Self, U::IntoSeq>
    where
        Self: Sized,
        U: IntoSequence<Item = Self::Item>,
    {
        Chain::chain((self, other.into_seq()))
    }

    /// Skips elements while `predicate` holds, then yields every remaining
    /// element.
    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    /// Yields elements while `predicate` holds.
    ///
    /// The first element failing the predicate is dropped and the sequence
    /// ends for good.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Transforms a sequence into a collection.
    ///
    /// Never returns if the sequence is infinite.
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromSequence<Self::Item>,
    {
        B::from_seq(self)
    }

    /// Convert the sequence into a [`Iterator`].
    fn into_iterator(self) -> IntoIter<Self>
    where
        Self: Sized,
    {
        IntoIter::new(self)
    }

    /// Convert the sequence into a [`Stream`](futures_core::Stream) which is
    /// always ready.
    fn into_stream(self) -> IntoStream<Self>
    where
        Self: Sized,
    {
        IntoStream::new(self)
    }

    /// Drain the sequence on a background thread into an unbuffered channel.
    ///
    /// See [`into_channel`](crate::channel::into_channel).
    #[cfg(feature = "std")]
    fn into_channel(self) -> Result<crate::channel::Channel<Self::Item>, crate::Error>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        crate::channel::into_channel(self)
    }

    /// Drain the sequence on a background thread into a channel holding up
    /// to `capacity` elements.
    ///
    /// See [`into_channel_buffered`](crate::channel::into_channel_buffered).
    #[cfg(feature = "std")]
    fn into_channel_buffered(
        self,
        capacity: usize,
    ) -> Result<crate::channel::Channel<Self::Item>, crate::Error>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        crate::channel::into_channel_buffered(self, capacity)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}
