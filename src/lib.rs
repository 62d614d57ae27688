//! Lazy, pull-based sequences and composable combinators.
//!
//! A [`Sequence`] produces one element each time `next` is called, and
//! returns `None` once it is exhausted. Combinators wrap one or more
//! sequences and are themselves sequences, so pipelines are built up without
//! materializing any intermediate collection. Nothing runs until the consumer
//! asks for the next element.
//!
//! # Operations
//!
//! **Sources**
//! - [`from_iter`]: the elements of an ordered collection.
//! - [`from_map`], [`keys`], [`values`]: the entries of a key/value mapping.
//!
//! **Transformations**
//! - [`Sequence::filter`], [`Sequence::filter_false`]: keep elements by predicate.
//! - [`Sequence::map`]: convert each element.
//! - [`Sequence::enumerate`]: pair each element with its position.
//! - [`Sequence::zip`]: pair elements of two sequences, shortest wins.
//! - [`Sequence::take`]: the first `n` elements.
//!
//! **Generators**
//! - [`count`]: an endless arithmetic progression.
//! - [`Sequence::cycle`]: replay a sequence forever.
//! - [`repeat`]: the same value, a fixed number of times or forever.
//! - [`range`], [`range_between`], [`range_step`]: a bounded progression.
//!
//! **Aggregation**
//! - [`Sequence::accumulate`]: a lazy running fold.
//! - [`Sequence::reduce`]: an eager fold to a single value.
//! - [`Chain`], [`Sequence::chain`]: concatenate sequences in order.
//! - [`Sequence::drop_while`], [`Sequence::take_while`]: window by predicate.
//!
//! **Boundaries**
//! - [`Sequence::collect`]: drain into a collection.
//! - [`Sequence::into_iterator`]: use as a [`Iterator`].
//! - [`Sequence::into_stream`]: use as a [`futures_core::Stream`].
//! - `into_channel`, `into_channel_buffered`: drain on a background thread
//!   into a channel (requires the `std` feature).
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let squares_of_odds: Vec<_> = lazyseq::count(1, 1)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .take_while(|n| *n < 50)
//!     .collect();
//! assert_eq!(squares_of_odds, vec![1, 9, 25, 49]);
//!
//! let total = lazyseq::range_step(10, 0, -3).reduce(0, |acc, n| acc + n);
//! assert_eq!(total, 10 + 7 + 4 + 1);
//! ```
//!
//! # Features
//!
//! - `std` (default): the channel adapter, `HashMap` support and logging
//!   through `tracing`. Without it the crate is `no_std` and only needs
//!   `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

extern crate alloc;

/// The lazyseq prelude.
pub mod prelude {
    pub use super::chain::Chain as _;
    pub use super::sequence::FromSequence;
    pub use super::sequence::IntoSequence;
    pub use super::sequence::Sequence;
}

#[cfg(feature = "std")]
pub mod channel;
pub mod chain;
pub mod generate;
pub mod sequence;
pub mod source;

mod error;

pub use chain::Chain;
pub use error::Error;
pub use generate::{
    count, range, range_between, range_step, repeat, repeat_forever, repeat_n, Count, Cycle,
    Range, Repeat,
};
pub use sequence::{zip, FromSequence, IntoSequence, Sequence};
pub use source::{from_iter, from_map, keys, values, FromIter, FromMap, MapEntry};

#[cfg(feature = "std")]
pub use channel::{into_channel, into_channel_buffered, Channel};

/// Helper functions and types for tuples.
pub mod tuple {
    pub use crate::chain::tuple::{
        Chain1, Chain10, Chain11, Chain12, Chain2, Chain3, Chain4, Chain5, Chain6, Chain7, Chain8,
        Chain9,
    };
}

/// Helper functions and types for fixed-length arrays.
pub mod array {
    pub use crate::chain::array::Chain;
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::chain::vec::Chain;
}
