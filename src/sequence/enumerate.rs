use super::Sequence;

/// A sequence that yields the current position and the element.
///
/// This `struct` is created by the [`enumerate`] method on [`Sequence`]. See
/// its documentation for more.
///
/// [`enumerate`]: Sequence::enumerate
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    source: S,
    count: usize,
    done: bool,
}

impl<S> Enumerate<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            count: 0,
            done: false,
        }
    }
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next() {
            Some(item) => {
                let count = self.count;
                self.count += 1;
                Some((count, item))
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.source.size_hint()
    }
}
