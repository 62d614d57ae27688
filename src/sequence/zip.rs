use super::Sequence;

/// A sequence that ‘zips up’ two sequences into a single sequence of pairs.
///
/// This `struct` is created by the [`zip`] method on [`Sequence`]. See its
/// documentation for more.
///
/// [`zip`]: Sequence::zip
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b, done: false }
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // If either side returns `None` we can no longer return pairs, and
        // whatever `a` yielded on this call is dropped.
        let pair = match self.a.next() {
            Some(first) => self.b.next().map(|second| (first, second)),
            None => None,
        };
        if pair.is_none() {
            self.done = true;
        }
        pair
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (a_lower.min(b_lower), upper)
    }
}

/// ‘Zips up’ two sequences into a single sequence of pairs.
///
/// Equivalent to `a.into_seq().zip(b)`.
pub fn zip<A, B>(a: A, b: B) -> Zip<A::IntoSeq, B::IntoSeq>
where
    A: super::IntoSequence,
    B: super::IntoSequence,
{
    Zip::new(a.into_seq(), b.into_seq())
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn zip_stops_at_shortest() {
        let out: Vec<_> = crate::from_iter([1, 2, 3]).zip(["a", "b"]).collect();
        assert_eq!(out, vec![(1, "a"), (2, "b")]);

        let out: Vec<_> = crate::from_iter([1, 2]).zip(["a", "b", "c"]).collect();
        assert_eq!(out, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn zip_with_empty() {
        let empty: Vec<i32> = Vec::new();
        let out: Vec<_> = crate::from_iter(empty).zip(["a", "b", "c"]).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn zip_drops_the_element_pulled_on_the_final_call() {
        let mut left = crate::from_iter([1, 2, 3]);
        let mut pairs = left.by_ref().zip(["a"]);
        assert_eq!(pairs.next(), Some((1, "a")));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
        // `2` was pulled and discarded by the terminating call.
        assert_eq!(left.next(), Some(3));
    }

    #[test]
    fn zip_infinite_with_finite() {
        let out: Vec<_> = crate::count(0, 1).zip(vec!['x', 'y']).collect();
        assert_eq!(out, vec![(0, 'x'), (1, 'y')]);
        assert_eq!(crate::zip([1, 2], [3, 4]).size_hint(), (2, Some(2)));
    }
}
