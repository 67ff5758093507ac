//! Hash tables keyed by values under an [`Equality`].
//!
//! Comparisons can fail, so these tables cannot sit behind `Hash` and
//! `Eq`. Entries are bucketed by `hash_of` and probed with a fallible
//! `equals`; an incomparable probe surfaces as an error. Both tables keep
//! insertion order.
use ahash::{HashMap, HashMapExt};

use dynseq_comparer::{Equality, Value};

use crate::error::Result;

/// A map from values to `V`.
#[derive(Debug, Clone)]
pub struct ValueMap<V> {
    equality: Equality,
    buckets: HashMap<u64, Vec<usize>>,
    entries: Vec<(Value, V)>,
}

impl<V> ValueMap<V> {
    pub fn new(equality: Equality) -> Self {
        Self {
            equality,
            buckets: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn equality(&self) -> &Equality {
        &self.equality
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &Value) -> Result<Option<&V>> {
        let hash = self.equality.hash_of(key);
        Ok(self.find(hash, key)?.map(|index| &self.entries[index].1))
    }

    pub fn contains_key(&self, key: &Value) -> Result<bool> {
        let hash = self.equality.hash_of(key);
        Ok(self.find(hash, key)?.is_some())
    }

    /// Insert a value, returning the one it replaced.
    ///
    /// A replaced entry keeps its original key and position.
    pub fn insert(&mut self, key: Value, value: V) -> Result<Option<V>> {
        let hash = self.equality.hash_of(&key);
        match self.find(hash, &key)? {
            Some(index) => Ok(Some(std::mem::replace(&mut self.entries[index].1, value))),
            None => {
                self.push(hash, key, value);
                Ok(None)
            }
        }
    }

    /// Insert a value only if the key is new. Returns whether it was
    /// inserted.
    pub fn insert_new(&mut self, key: Value, value: V) -> Result<bool> {
        let hash = self.equality.hash_of(&key);
        if self.find(hash, &key)?.is_some() {
            return Ok(false);
        }
        self.push(hash, key, value);
        Ok(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    fn find(&self, hash: u64, key: &Value) -> Result<Option<usize>> {
        if let Some(bucket) = self.buckets.get(&hash) {
            for &index in bucket {
                if self.equality.equals(&self.entries[index].0, key)? {
                    return Ok(Some(index));
                }
            }
        }
        Ok(None)
    }

    fn push(&mut self, hash: u64, key: Value, value: V) {
        self.buckets.entry(hash).or_default().push(self.entries.len());
        self.entries.push((key, value));
    }
}

impl<V> IntoIterator for ValueMap<V> {
    type Item = (Value, V);
    type IntoIter = std::vec::IntoIter<(Value, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A set of distinct values.
#[derive(Debug, Clone)]
pub struct ValueSet {
    map: ValueMap<()>,
}

impl ValueSet {
    pub fn new(equality: Equality) -> Self {
        Self {
            map: ValueMap::new(equality),
        }
    }

    /// Collect values into a set, keeping the first of each run of equal
    /// values.
    pub fn from_values(equality: Equality, values: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut set = Self::new(equality);
        for value in values {
            set.insert(value)?;
        }
        Ok(set)
    }

    pub fn equality(&self) -> &Equality {
        self.map.equality()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Add a value. Returns whether it was new.
    pub fn insert(&mut self, value: Value) -> Result<bool> {
        self.map.insert_new(value, ())
    }

    pub fn contains(&self, value: &Value) -> Result<bool> {
        self.map.contains_key(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.map.keys()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.into_iter().collect()
    }
}

impl IntoIterator for ValueSet {
    type Item = Value;
    type IntoIter = std::iter::Map<std::vec::IntoIter<(Value, ())>, fn((Value, ())) -> Value>;

    fn into_iter(self) -> Self::IntoIter {
        let key: fn((Value, ())) -> Value = |(value, _)| value;
        self.map.into_iter().map(key)
    }
}
