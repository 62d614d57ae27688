use super::Sequence;

/// A sequence that only yields the first `n` elements of its source.
///
/// This `struct` is created by the [`take`] method on [`Sequence`]. See its
/// documentation for more.
///
/// [`take`]: Sequence::take
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, limit: usize) -> Self {
        Self {
            source,
            remaining: limit,
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.source.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        let upper = match upper {
            Some(upper) => upper.min(self.remaining),
            None => self.remaining,
        };
        (lower.min(self.remaining), Some(upper))
    }
}
