//! Predicates and selectors.
//!
//! Operators take them as optional borrowed closures. A missing predicate
//! accepts every element; a missing selector is the identity.
use dynseq_comparer::Value;

/// A pure test over one element.
pub type Predicate<'a> = &'a dyn Fn(&Value) -> bool;

/// A pure projection of one element.
pub type Selector<'a> = &'a dyn Fn(&Value) -> Value;

pub(crate) fn test(predicate: Option<Predicate>, value: &Value) -> bool {
    predicate.map_or(true, |predicate| predicate(value))
}

pub(crate) fn select(selector: Option<Selector>, value: &Value) -> Value {
    selector.map_or_else(|| value.clone(), |selector| selector(value))
}

/// Package the results an expression produced for one element.
///
/// A single result is returned as is. Zero or several results become one
/// list value, so an element never turns into several output elements.
pub fn pack_results(results: impl IntoIterator<Item = Value>) -> Value {
    let mut results = results.into_iter().collect::<Vec<_>>();
    if results.len() == 1 {
        results.pop().unwrap_or_default()
    } else {
        Value::List(results.into())
    }
}
