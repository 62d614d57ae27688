use core::fmt;

use super::Sequence;

/// A sequence that skips elements while a predicate holds.
///
/// This `struct` is created by the [`drop_while`] method on [`Sequence`]. See
/// its documentation for more.
///
/// [`drop_while`]: Sequence::drop_while
pub struct DropWhile<S, P> {
    source: S,
    predicate: P,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Dropping,
    Passing,
    Done,
}

impl<S, P> DropWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            state: State::Dropping,
        }
    }
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = match self.state {
                State::Done => return None,
                _ => self.source.next(),
            };
            match item {
                None => {
                    self.state = State::Done;
                    return None;
                }
                Some(item) if self.state == State::Passing => return Some(item),
                Some(item) if (self.predicate)(&item) => continue,
                Some(item) => {
                    self.state = State::Passing;
                    return Some(item);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Done => (0, Some(0)),
            State::Passing => self.source.size_hint(),
            State::Dropping => (0, self.source.size_hint().1),
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for DropWhile<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropWhile")
            .field("source", &self.source)
            .field("state", &self.state)
            .finish()
    }
}
