use crate::Sequence;

/// A sequence that yields the same value over and over.
///
/// This `struct` is created by the [`repeat`], [`repeat_n`] and
/// [`repeat_forever`] functions. See their documentation for more.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    // `None` repeats forever.
    remaining: Option<usize>,
}

/// Yields `value` exactly `times` times, or forever if `times` is negative.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// assert_eq!(lazyseq::repeat('a', 2).collect::<String>(), "aa");
/// assert_eq!(lazyseq::repeat('a', 0).collect::<String>(), "");
/// assert_eq!(lazyseq::repeat('a', -1).take(5).collect::<String>(), "aaaaa");
/// ```
pub fn repeat<T: Clone>(value: T, times: isize) -> Repeat<T> {
    Repeat {
        value,
        remaining: usize::try_from(times).ok(),
    }
}

/// Yields `value` exactly `n` times.
pub fn repeat_n<T: Clone>(value: T, n: usize) -> Repeat<T> {
    Repeat {
        value,
        remaining: Some(n),
    }
}

/// Yields `value` forever.
pub fn repeat_forever<T: Clone>(value: T) -> Repeat<T> {
    Repeat {
        value,
        remaining: None,
    }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.remaining {
            None => Some(self.value.clone()),
            Some(0) => None,
            Some(n) => {
                *n -= 1;
                Some(self.value.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}
