use dynseq_comparer::Value;

use crate::callable::{test, Predicate};
use crate::error::{Error, Result};

/// The first element satisfying the predicate, if any.
pub fn first(items: impl IntoIterator<Item = Value>, predicate: Option<Predicate>) -> Option<Value> {
    items.into_iter().find(|item| test(predicate, item))
}

/// The last element satisfying the predicate, if any.
pub fn last(items: impl IntoIterator<Item = Value>, predicate: Option<Predicate>) -> Option<Value> {
    items.into_iter().filter(|item| test(predicate, item)).last()
}

/// The only element satisfying the predicate.
///
/// `None` when nothing matches, [`Error::CardinalityViolation`] when more
/// than one element does. Stops at the second match.
pub fn single(
    items: impl IntoIterator<Item = Value>,
    predicate: Option<Predicate>,
) -> Result<Option<Value>> {
    let mut matches = items.into_iter().filter(|item| test(predicate, item));
    let found = matches.next();
    if matches.next().is_some() {
        return Err(Error::CardinalityViolation);
    }
    Ok(found)
}
