use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::Stream;
use pin_project::pin_project;

use super::Sequence;

/// A [`Stream`] over the elements of a sequence.
///
/// Every poll pulls one element and is immediately ready.
///
/// This `struct` is created by the [`into_stream`] method on [`Sequence`].
/// See its documentation for more.
///
/// [`into_stream`]: Sequence::into_stream
#[pin_project]
#[derive(Debug, Clone)]
pub struct IntoStream<S> {
    seq: S,
}

impl<S> IntoStream<S> {
    pub(crate) fn new(seq: S) -> Self {
        Self { seq }
    }
}

impl<S: Sequence> Stream for IntoStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.project().seq.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.seq.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use futures_lite::future::block_on;
    use futures_lite::StreamExt;

    #[test]
    fn stream_yields_in_order() {
        block_on(async {
            let mut s = crate::from_iter([1, 2, 3]).map(|n| n * 2).into_stream();
            assert_eq!(s.next().await, Some(2));
            assert_eq!(s.next().await, Some(4));
            assert_eq!(s.next().await, Some(6));
            assert_eq!(s.next().await, None);
            assert_eq!(s.next().await, None);
        })
    }

    #[test]
    fn stream_of_infinite_sequence() {
        block_on(async {
            let out: Vec<_> = crate::count(0, 3).into_stream().take(4).collect().await;
            assert_eq!(out, vec![0, 3, 6, 9]);
        })
    }
}
