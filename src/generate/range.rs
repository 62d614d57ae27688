use num_traits::PrimInt;

use crate::{Error, Sequence};

/// A bounded arithmetic progression.
///
/// This `struct` is created by the [`range`], [`range_between`] and
/// [`range_step`] functions, or by [`Range::try_new`]. See their
/// documentation for more.
#[derive(Debug, Clone)]
pub struct Range<T> {
    // `None` once the range is exhausted or the next value would overflow.
    current: Option<T>,
    stop: T,
    step: T,
}

impl<T: PrimInt> Range<T> {
    /// Creates a range from `start` towards `stop` (exclusive) in increments
    /// of `step`.
    ///
    /// A positive step counts up and ends once the value reaches or passes
    /// `stop`; a negative step counts down and ends once the value reaches or
    /// drops below `stop`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroStep`] if `step` is zero.
    pub fn try_new(start: T, stop: T, step: T) -> Result<Self, Error> {
        if step.is_zero() {
            return Err(Error::ZeroStep);
        }
        Ok(Self {
            current: Some(start),
            stop,
            step,
        })
    }

    fn ascending(&self) -> bool {
        self.step > T::zero()
    }
}

/// Counts from `0` up to `stop` (exclusive).
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// assert_eq!(lazyseq::range(3).collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert!(lazyseq::range(-3).collect::<Vec<i32>>().is_empty());
/// ```
pub fn range<T: PrimInt>(stop: T) -> Range<T> {
    range_between(T::zero(), stop)
}

/// Counts from `start` up to `stop` (exclusive).
pub fn range_between<T: PrimInt>(start: T, stop: T) -> Range<T> {
    range_step(start, stop, T::one())
}

/// Counts from `start` towards `stop` (exclusive) in increments of `step`.
///
/// # Panics
///
/// Panics if `step` is zero. See [`Range::try_new`] for a fallible version.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// assert_eq!(lazyseq::range_step(0, 10, 3).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
/// assert_eq!(lazyseq::range_step(10, 0, -3).collect::<Vec<_>>(), vec![10, 7, 4, 1]);
/// ```
pub fn range_step<T: PrimInt>(start: T, stop: T, step: T) -> Range<T> {
    match Range::try_new(start, stop, step) {
        Ok(range) => range,
        Err(err) => panic!("{err}"),
    }
}

impl<T: PrimInt> Sequence for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let in_bounds = if self.ascending() {
            current < self.stop
        } else {
            current > self.stop
        };
        if !in_bounds {
            self.current = None;
            return None;
        }
        self.current = current.checked_add(&self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(current) = self.current else {
            return (0, Some(0));
        };
        let (distance, stride) = if self.ascending() {
            if current >= self.stop {
                return (0, Some(0));
            }
            (self.stop.checked_sub(&current), Some(self.step))
        } else {
            if current <= self.stop {
                return (0, Some(0));
            }
            (
                current.checked_sub(&self.stop),
                T::zero().checked_sub(&self.step),
            )
        };
        match (distance, stride) {
            (Some(distance), Some(stride)) => {
                let len = (distance - T::one()) / stride + T::one();
                match len.to_usize() {
                    Some(len) => (len, Some(len)),
                    None => (usize::MAX, None),
                }
            }
            _ => (0, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn collect<T: PrimInt>(range: Range<T>) -> Vec<T> {
        let hint = range.size_hint();
        let out: Vec<T> = range.collect();
        assert_eq!(hint, (out.len(), Some(out.len())));
        out
    }

    #[test]
    fn up_to_stop() {
        assert_eq!(collect(range(3)), vec![0, 1, 2]);
        assert_eq!(collect(range(0)), Vec::<i32>::new());
        assert_eq!(collect(range(-3)), Vec::<i32>::new());
    }

    #[test]
    fn between() {
        assert_eq!(collect(range_between(1, 4)), vec![1, 2, 3]);
        assert_eq!(collect(range_between(4, 1)), Vec::<i32>::new());
        assert_eq!(collect(range_between(-2, 2)), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn with_step() {
        assert_eq!(collect(range_step(0, 10, 3)), vec![0, 3, 6, 9]);
        assert_eq!(collect(range_step(1, 10, 3)), vec![1, 4, 7]);
        assert_eq!(collect(range_step(10, 0, -3)), vec![10, 7, 4, 1]);
        assert_eq!(collect(range_step(10, 1, -3)), vec![10, 7, 4]);
        assert_eq!(collect(range_step(5, 5, 1)), Vec::<i32>::new());
        assert_eq!(collect(range_step(5, 5, -1)), Vec::<i32>::new());
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(matches!(Range::try_new(0, 10, 0), Err(Error::ZeroStep)));
    }

    #[test]
    #[should_panic(expected = "range step cannot be zero")]
    fn zero_step_panics() {
        let _ = range_step(0, 10, 0);
    }

    #[test]
    fn overflowing_step_ends_the_range() {
        assert_eq!(collect(range_step(0i8, 127, 100)), vec![0, 100]);
        assert_eq!(collect(range_step(250u8, 255, 10)), vec![250]);
        assert_eq!(collect(range_step(-100i8, -128, -100)), vec![-100]);
    }

    #[test]
    fn stays_exhausted() {
        let mut seq = range(1u64);
        assert_eq!(seq.next(), Some(0));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }
}
