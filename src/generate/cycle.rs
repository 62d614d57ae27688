use alloc::vec::Vec;
use core::fmt;

use crate::{Error, Sequence};

/// A sequence that repeats endlessly.
///
/// The first pass forwards the elements of the source while buffering them.
/// Once the source is exhausted the buffer is replayed in order, forever.
///
/// This `struct` is created by the [`cycle`] method on [`Sequence`]. See its
/// documentation for more.
///
/// [`cycle`]: Sequence::cycle
pub struct Cycle<S: Sequence> {
    // Dropped once exhausted.
    source: Option<S>,
    buffer: Vec<S::Item>,
    index: usize,
}

impl<S> Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    pub(crate) fn new(source: S) -> Self {
        Self {
            source: Some(source),
            buffer: Vec::new(),
            index: 0,
        }
    }

    /// Advance the sequence and return the next element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySource`] if the source was exhausted before
    /// yielding a single element. Every later call returns the same error.
    pub fn try_next(&mut self) -> Result<Option<S::Item>, Error> {
        if let Some(source) = self.source.as_mut() {
            match source.next() {
                Some(item) => {
                    self.buffer.push(item.clone());
                    return Ok(Some(item));
                }
                None => self.source = None,
            }
        }

        let item = self
            .buffer
            .get(self.index)
            .cloned()
            .ok_or(Error::EmptySource)?;
        self.index = (self.index + 1) % self.buffer.len();
        Ok(Some(item))
    }
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<S> fmt::Debug for Cycle<S>
where
    S: Sequence + fmt::Debug,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cycle")
            .field("source", &self.source)
            .field("buffer", &self.buffer)
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::Error;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn replays_in_order() {
        let out: Vec<_> = crate::from_iter([1, 2]).cycle().take(5).collect();
        assert_eq!(out, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn single_element() {
        let out: Vec<_> = crate::from_iter(["x"]).cycle().take(3).collect();
        assert_eq!(out, vec!["x", "x", "x"]);
    }

    #[test]
    fn first_pass_is_lazy() {
        let pulled = Cell::new(0);
        let mut seq = crate::range(3)
            .map(|n| {
                pulled.set(pulled.get() + 1);
                n
            })
            .cycle();
        assert_eq!(seq.next(), Some(0));
        assert_eq!(pulled.get(), 1);
        let rest: Vec<_> = seq.by_ref().take(5).collect();
        assert_eq!(rest, vec![1, 2, 0, 1, 2]);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn empty_source_is_an_error() {
        let empty: [u8; 0] = [];
        let mut seq = crate::from_iter(empty).cycle();
        assert!(matches!(seq.try_next(), Err(Error::EmptySource)));
        assert!(matches!(seq.try_next(), Err(Error::EmptySource)));
    }

    #[test]
    #[should_panic(expected = "cannot cycle a sequence that yielded no elements")]
    fn empty_source_panics() {
        let empty: [u8; 0] = [];
        let _ = crate::from_iter(empty).cycle().next();
    }
}
