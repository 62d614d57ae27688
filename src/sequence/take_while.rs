use core::fmt;

use super::Sequence;

/// A sequence that yields elements while a predicate holds.
///
/// This `struct` is created by the [`take_while`] method on [`Sequence`]. See
/// its documentation for more.
///
/// [`take_while`]: Sequence::take_while
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
    done: bool,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            // The first rejected element is dropped, not buffered.
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        (0, self.source.size_hint().1)
    }
}

impl<S: fmt::Debug, P> fmt::Debug for TakeWhile<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish()
    }
}
