use std::hash::BuildHasher;

use crate::comparer::ValueComparer;
use crate::error::Result;
use crate::value::Value;

/// Which notion of equality an operator uses.
///
/// Operators that accept an optional `ignore_case` setting distinguish
/// "no comparer requested" from "explicitly case-sensitive": the first
/// uses the strict default equality of [`Value`]'s `PartialEq`, the second
/// a [`ValueComparer`].
#[derive(Debug, Clone)]
pub enum Equality {
    Default(ahash::RandomState),
    Comparer(ValueComparer),
}

impl Default for Equality {
    fn default() -> Self {
        Equality::Default(ahash::RandomState::new())
    }
}

impl From<ValueComparer> for Equality {
    fn from(comparer: ValueComparer) -> Self {
        Equality::Comparer(comparer)
    }
}

impl Equality {
    /// `None` selects default equality; `Some(ignore_case)` a comparer in
    /// the current locale with that case rule.
    pub fn from_ignore_case(ignore_case: Option<bool>) -> Self {
        match ignore_case {
            Some(ignore_case) => Equality::Comparer(ValueComparer::ignore_case(ignore_case)),
            None => Equality::default(),
        }
    }

    pub fn equals(&self, x: &Value, y: &Value) -> Result<bool> {
        match self {
            Equality::Default(_) => Ok(x == y),
            Equality::Comparer(comparer) => comparer.equals(x, y),
        }
    }

    pub fn hash_of(&self, value: &Value) -> u64 {
        match self {
            Equality::Default(state) => BuildHasher::hash_one(state, value),
            Equality::Comparer(comparer) => comparer.hash_of(value),
        }
    }

    pub fn comparer(&self) -> Option<&ValueComparer> {
        match self {
            Equality::Default(_) => None,
            Equality::Comparer(comparer) => Some(comparer),
        }
    }
}
