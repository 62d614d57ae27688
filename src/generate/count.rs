use num_traits::{PrimInt, WrappingAdd};

use crate::Sequence;

/// An endless arithmetic progression.
///
/// This `struct` is created by the [`count`] function. See its documentation
/// for more.
#[derive(Debug, Clone)]
pub struct Count<T> {
    current: T,
    step: T,
}

/// Counts from `start` in increments of `step`, forever.
///
/// The sequence never ends; arithmetic wraps around on overflow.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let odd: Vec<u32> = lazyseq::count(1, 2).take(4).collect();
/// assert_eq!(odd, vec![1, 3, 5, 7]);
/// ```
pub fn count<T>(start: T, step: T) -> Count<T>
where
    T: PrimInt + WrappingAdd,
{
    Count {
        current: start,
        step,
    }
}

impl<T> Sequence for Count<T>
where
    T: PrimInt + WrappingAdd,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current;
        self.current = current.wrapping_add(&self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
