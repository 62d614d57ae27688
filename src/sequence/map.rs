use core::fmt;

use super::Sequence;

/// Converts elements from one type into another via a closure.
///
/// This `struct` is created by the [`map`] method on [`Sequence`]. See its
/// documentation for more.
///
/// [`map`]: Sequence::map
pub struct Map<S, F> {
    source: S,
    f: F,
    done: bool,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self {
            source,
            f,
            done: false,
        }
    }
}

impl<B, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next() {
            Some(item) => Some((self.f)(item)),
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

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .field("done", &self.done)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn map_changes_type() {
        let out: Vec<String> = crate::from_iter(["chashu", "nori"])
            .map(|name| format!("hello {name}"))
            .collect();
        assert_eq!(out, vec!["hello chashu", "hello nori"]);
    }

    #[test]
    fn exhaustion_does_not_call_f() {
        let calls = Cell::new(0);
        let mut seq = crate::from_iter([1]).map(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(calls.get(), 1);
    }
}
