use std::rc::Rc;

use crate::string::fold_case;

use super::Value;

/// A record: an ordered set of named attributes.
///
/// Attribute names are unique within a record, compared case-insensitively
/// by full case fold as the host object model does. Inserting an attribute whose name is
/// already present replaces its value and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    attributes: Vec<(Rc<str>, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attributes: Vec::with_capacity(capacity),
        }
    }

    /// Set an attribute, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<Rc<str>>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.attributes[index].1, value)),
            None => {
                self.attributes.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|index| &self.attributes[index].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.position(name)
            .map(|index| self.attributes.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(name, _)| name.as_ref())
    }

    /// The attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_ref(), value))
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = fold_case(name);
        self.attributes
            .iter()
            .position(|(existing, _)| fold_case(existing) == name)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<Rc<str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut record = Record::with_capacity(iter.size_hint().0);
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}
