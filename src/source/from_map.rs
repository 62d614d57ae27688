use crate::sequence::Map;
use crate::Sequence;

use super::FromIter;

/// A key/value pair produced by [`from_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MapEntry<K, V> {
    /// The entry's key.
    pub key: K,
    /// The value stored under `key`.
    pub value: V,
}

impl<K, V> From<(K, V)> for MapEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> MapEntry<K, V> {
    /// Splits the entry into a `(key, value)` tuple.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// A sequence over the entries of a key/value mapping.
///
/// This `struct` is created by the [`from_map`] function. See its
/// documentation for more.
#[derive(Clone, Debug)]
pub struct FromMap<I> {
    entries: FromIter<I>,
}

impl<I, K, V> Sequence for FromMap<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = MapEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(MapEntry::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

/// Converts a key/value mapping into a sequence of [`MapEntry`].
///
/// Every entry is produced exactly once. The order is whatever order the
/// mapping iterates in: sorted for a `BTreeMap`, unspecified for a `HashMap`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use lazyseq::prelude::*;
/// use lazyseq::MapEntry;
///
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// let mut seq = lazyseq::from_map(&map);
/// assert_eq!(seq.next(), Some(MapEntry { key: &"a", value: &1 }));
/// assert_eq!(seq.next(), Some(MapEntry { key: &"b", value: &2 }));
/// assert_eq!(seq.next(), None);
/// ```
pub fn from_map<M, K, V>(map: M) -> FromMap<M::IntoIter>
where
    M: IntoIterator<Item = (K, V)>,
{
    FromMap {
        entries: FromIter::new(map.into_iter()),
    }
}

/// A sequence over the keys of a mapping.
pub type Keys<I, K, V> = Map<FromMap<I>, fn(MapEntry<K, V>) -> K>;

/// A sequence over the values of a mapping.
pub type Values<I, K, V> = Map<FromMap<I>, fn(MapEntry<K, V>) -> V>;

/// Converts a key/value mapping into a sequence of its keys.
pub fn keys<M, K, V>(map: M) -> Keys<M::IntoIter, K, V>
where
    M: IntoIterator<Item = (K, V)>,
{
    from_map(map).map((|entry: MapEntry<K, V>| entry.key) as fn(_) -> K)
}

/// Converts a key/value mapping into a sequence of its values.
pub fn values<M, K, V>(map: M) -> Values<M::IntoIter, K, V>
where
    M: IntoIterator<Item = (K, V)>,
{
    from_map(map).map((|entry: MapEntry<K, V>| entry.value) as fn(_) -> V)
}
