//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// A storage backend for the DP cache.
///
/// Implementations pick the data structure (Vec, HashMap, nothing at all)
/// that suits the index type of the problem.
///
/// # Contract
///
/// - `get` returns `None` for an index that was never inserted
/// - `insert` on an existing index overwrites it; the cache only ever
///   inserts a value it has not seen, so this never happens in practice
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Stores `value` for `index`.
    fn insert(&mut self, index: I, value: K);

    /// Number of cached values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached value.
    fn clear(&mut self);
}

/// A Vec-based backend for `usize` indices.
///
/// Efficient for dense indices starting at 0, such as offsets into a single
/// target string. The Vec grows on demand.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
    filled: usize,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            filled: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            filled: 0,
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn insert(&mut self, index: usize, value: K) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        if self.data[index].replace(value).is_none() {
            self.filled += 1;
        }
    }

    fn len(&self) -> usize {
        self.filled
    }

    fn clear(&mut self) {
        self.data.clear();
        self.filled = 0;
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Used for sparse or non-integer keys, e.g. remaining-suffix strings shared
/// between several targets.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: K) {
        self.data.insert(index, value);
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

/// A backend that stores nothing.
///
/// Turns [`DpCache`](super::DpCache) into plain recursion. Handy as a
/// brute-force reference and for measuring what memoization buys.
#[derive(Debug)]
pub struct NoCacheBackend<I, K> {
    _phantom: PhantomData<fn(I) -> K>,
}

impl<I, K> NoCacheBackend<I, K> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<I, K> Default for NoCacheBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, K> Backend<I, K> for NoCacheBackend<I, K> {
    fn get(&self, _index: &I) -> Option<&K> {
        None
    }

    fn insert(&mut self, _index: I, _value: K) {}

    fn len(&self) -> usize {
        0
    }

    fn clear(&mut self) {}
}
