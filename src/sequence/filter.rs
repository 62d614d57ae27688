use core::fmt;

use super::Sequence;

/// A sequence that only yields the elements matching a predicate.
///
/// This `struct` is created by the [`filter`] method on [`Sequence`]. See its
/// documentation for more.
///
/// [`filter`]: Sequence::filter
pub struct Filter<S, P> {
    source: S,
    predicate: P,
    done: bool,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.source.next() {
                Some(item) if (self.predicate)(&item) => return Some(item),
                Some(_) => continue,
                None => {
                    self.done = true;
                    return None;
                }
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

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish()
    }
}

/// A sequence that only yields the elements *not* matching a predicate.
///
/// This `struct` is created by the [`filter_false`] method on [`Sequence`].
/// See its documentation for more.
///
/// [`filter_false`]: Sequence::filter_false
pub struct FilterFalse<S, P> {
    source: S,
    predicate: P,
    done: bool,
}

impl<S, P> FilterFalse<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Sequence for FilterFalse<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.source.next() {
                Some(item) if !(self.predicate)(&item) => return Some(item),
                Some(_) => continue,
                None => {
                    self.done = true;
                    return None;
                }
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

impl<S: fmt::Debug, P> fmt::Debug for FilterFalse<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterFalse")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish()
    }
}
