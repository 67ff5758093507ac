use dynseq_comparer::Value;

use crate::callable::{test, Predicate};

/// Whether every element satisfies the predicate.
///
/// Stops at the first element that fails. True for an empty sequence.
pub fn all(items: impl IntoIterator<Item = Value>, predicate: Option<Predicate>) -> bool {
    items.into_iter().all(|item| test(predicate, &item))
}

/// Whether any element satisfies the predicate.
///
/// Stops at the first element that passes. False for an empty sequence.
pub fn any(items: impl IntoIterator<Item = Value>, predicate: Option<Predicate>) -> bool {
    items.into_iter().any(|item| test(predicate, &item))
}
