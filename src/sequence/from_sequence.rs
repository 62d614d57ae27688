use alloc::collections::{BTreeMap, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;

use super::{IntoSequence, Sequence};

/// Conversion from a [`Sequence`].
///
/// This is the target of [`Sequence::collect`]. Collecting drains the
/// sequence completely, so it never returns for an infinite sequence.
pub trait FromSequence<A>: Sized {
    /// Creates a value from a sequence.
    fn from_seq<S>(seq: S) -> Self
    where
        S: IntoSequence<Item = A>;
}

impl<T> FromSequence<T> for Vec<T> {
    fn from_seq<S>(seq: S) -> Self
    where
        S: IntoSequence<Item = T>,
    {
        let mut seq = seq.into_seq();
        let mut output = Vec::with_capacity(seq.size_hint().0);
        while let Some(item) = seq.next() {
            output.push(item);
        }
        output
    }
}

impl<T> FromSequence<T> for VecDeque<T> {
    fn from_seq<S>(seq: S) -> Self
    where
        S: IntoSequence<Item = T>,
    {
        Vec::<T>::from_seq(seq).into()
    }
}

impl FromSequence<char> for String {
    fn from_seq<S>(seq: S) -> Self
    where
        S: IntoSequence<Item = char>,
    {
        let mut seq = seq.into_seq();
        let mut output = String::with_capacity(seq.size_hint().0);
        while let Some(c) = seq.next() {
            output.push(c);
        }
        output
    }
}

impl<K: Ord, V> FromSequence<(K, V)> for BTreeMap<K, V> {
    fn from_seq<S>(seq: S) -> Self
    where
        S: IntoSequence<Item = (K, V)>,
    {
        seq.into_seq().into_iterator().collect()
    }
}

#[cfg(feature = "std")]
impl<K, V, H> FromSequence<(K, V)> for std::collections::HashMap<K, V, H>
where
    K: Eq + core::hash::Hash,
    H: core::hash::BuildHasher + Default,
{
    fn from_seq<S>(seq: S) -> Self
    where
        S: IntoSequence<Item = (K, V)>,
    {
        seq.into_seq().into_iterator().collect()
    }
}
