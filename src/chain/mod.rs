//! Concatenation of multiple sequences.
//!
//! # Examples
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let a = lazyseq::from_iter([1, 2]);
//! let b = lazyseq::range_between(3, 5);
//! let c = lazyseq::repeat(5, 1);
//! let all: Vec<_> = (a, b, c).chain().collect();
//! assert_eq!(all, vec![1, 2, 3, 4, 5]);
//! ```

use crate::Sequence;

pub(crate) mod array;
pub(crate) mod tuple;
pub(crate) mod vec;

/// Takes multiple sequences and creates a new sequence over all in order.
///
/// Sources are drained strictly left to right and never interleaved. The
/// chained sequence ends once the last source ends. Chaining zero sources
/// yields an empty sequence.
pub trait Chain {
    /// What's the element type of our sequence?
    type Item;

    /// What sequence do we return?
    type Sequence: Sequence<Item = Self::Item>;

    /// Combine multiple sequences into a single sequence.
    fn chain(self) -> Self::Sequence;
}
