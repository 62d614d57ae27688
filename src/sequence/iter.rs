use super::Sequence;

/// An [`Iterator`] over the elements of a sequence.
///
/// This `struct` is created by the [`into_iterator`] method on [`Sequence`].
/// See its documentation for more.
///
/// [`into_iterator`]: Sequence::into_iterator
#[derive(Debug, Clone)]
pub struct IntoIter<S> {
    seq: S,
}

impl<S> IntoIter<S> {
    pub(crate) fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Consumes the iterator, returning the underlying sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }
}
