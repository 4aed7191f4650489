//! Folding of per-chunk results into a single value.

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use serde_json::{Map, Value};

/// A result type whose per-chunk parts can be folded into one value.
///
/// Parts are folded left to right. For keyed collections a key repeated in
/// a later part replaces the earlier value.
pub trait Merge: Sized {
    fn merge_all<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>;
}

/// Union of keyed objects, last write wins on collisions.
pub fn merge_objects<I>(results: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    results.into_iter().fold(Map::new(), |mut acc, part| {
        acc.extend(part);
        acc
    })
}

/// Concatenation of ordered lists, chunk order first then order within a chunk.
pub fn concat_lists<T, I>(results: I) -> Vec<T>
where
    I: IntoIterator<Item = Vec<T>>,
{
    results.into_iter().flatten().collect()
}

impl Merge for Map<String, Value> {
    fn merge_all<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        merge_objects(parts)
    }
}

impl<T> Merge for Vec<T> {
    fn merge_all<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        concat_lists(parts)
    }
}

impl<K, V, S> Merge for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn merge_all<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        parts.into_iter().fold(HashMap::default(), |mut acc, part| {
            acc.extend(part);
            acc
        })
    }
}

impl<K: Ord, V> Merge for BTreeMap<K, V> {
    fn merge_all<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        parts.into_iter().fold(BTreeMap::new(), |mut acc, part| {
            acc.extend(part);
            acc
        })
    }
}

/// Raw JSON parts: objects are unioned and arrays concatenated. A part of
/// another shape replaces whatever was accumulated. No part at all yields
/// an empty object.
impl Merge for Value {
    fn merge_all<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        parts
            .into_iter()
            .fold(Value::Object(Map::new()), |acc, part| match (acc, part) {
                (Value::Object(mut acc), Value::Object(part)) => {
                    acc.extend(part);
                    Value::Object(acc)
                }
                (Value::Array(mut acc), Value::Array(part)) => {
                    acc.extend(part);
                    Value::Array(acc)
                }
                (_, part) => part,
            })
    }
}
