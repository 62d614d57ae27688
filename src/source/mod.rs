//! Sequences over existing in-memory collections.

mod from_iter;
mod from_map;

pub use from_iter::{from_iter, FromIter};
pub use from_map::{from_map, keys, values, FromMap, Keys, MapEntry, Values};
