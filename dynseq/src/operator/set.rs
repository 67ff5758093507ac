//! Set algebra.
//!
//! Every operator takes an optional `ignore_case`. `None` selects default
//! equality; `Some(ignore_case)` builds a comparer with that case rule in
//! the current locale for the duration of the call. Results keep the
//! order in which elements first appear.
//!
//! `union`, `intersect`, `except` and `set_equals` go through hash tables
//! and only compare elements whose hashes match. Elements of incomparable
//! types practically never share a hash, so they are treated as distinct
//! rather than raising an error: `union(["1"], [1], Some(true))` gives both
//! elements. `sequence_equals` compares every pair of positions and does
//! fail with an incomparable-types error on the same input.
use dynseq_comparer::{Equality, Value};

use crate::error::Result;
use crate::table::ValueSet;

/// Distinct elements of `items` followed by distinct new elements of
/// `other`.
pub fn union(
    items: impl IntoIterator<Item = Value>,
    other: impl IntoIterator<Item = Value>,
    ignore_case: Option<bool>,
) -> Result<Vec<Value>> {
    let equality = Equality::from_ignore_case(ignore_case);
    tracing::trace!(?ignore_case, "union");
    let set = ValueSet::from_values(equality, items.into_iter().chain(other))?;
    Ok(set.into_vec())
}

/// Distinct elements of `items` that also occur in `other`.
pub fn intersect(
    items: impl IntoIterator<Item = Value>,
    other: impl IntoIterator<Item = Value>,
    ignore_case: Option<bool>,
) -> Result<Vec<Value>> {
    let equality = Equality::from_ignore_case(ignore_case);
    tracing::trace!(?ignore_case, "intersect");
    let other = ValueSet::from_values(equality.clone(), other)?;
    let mut seen = ValueSet::new(equality);
    let mut result = Vec::new();
    for item in items {
        if other.contains(&item)? && seen.insert(item.clone())? {
            result.push(item);
        }
    }
    Ok(result)
}

/// Distinct elements of `items` that do not occur in `other`.
pub fn except(
    items: impl IntoIterator<Item = Value>,
    other: impl IntoIterator<Item = Value>,
    ignore_case: Option<bool>,
) -> Result<Vec<Value>> {
    let equality = Equality::from_ignore_case(ignore_case);
    tracing::trace!(?ignore_case, "except");
    // elements of `other` and everything already emitted are excluded
    let mut excluded = ValueSet::from_values(equality, other)?;
    let mut result = Vec::new();
    for item in items {
        if excluded.insert(item.clone())? {
            result.push(item);
        }
    }
    Ok(result)
}

/// Whether both sequences have equal elements in the same order.
pub fn sequence_equals(
    items: impl IntoIterator<Item = Value>,
    other: impl IntoIterator<Item = Value>,
    ignore_case: Option<bool>,
) -> Result<bool> {
    let equality = Equality::from_ignore_case(ignore_case);
    let mut items = items.into_iter();
    let mut other = other.into_iter();
    loop {
        match (items.next(), other.next()) {
            (Some(x), Some(y)) => {
                if !equality.equals(&x, &y)? {
                    return Ok(false);
                }
            }
            (None, None) => return Ok(true),
            _ => return Ok(false),
        }
    }
}

/// Whether both sequences contain the same distinct elements, ignoring
/// order and multiplicity.
pub fn set_equals(
    items: impl IntoIterator<Item = Value>,
    other: impl IntoIterator<Item = Value>,
    ignore_case: Option<bool>,
) -> Result<bool> {
    let equality = Equality::from_ignore_case(ignore_case);
    let items = ValueSet::from_values(equality.clone(), items)?;
    let mut seen = ValueSet::new(equality);
    for item in other {
        if !items.contains(&item)? {
            return Ok(false);
        }
        seen.insert(item)?;
    }
    Ok(seen.len() == items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(values: &[&str]) -> Vec<Value> {
        values.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_union() {
        let a = words(&["a", "B", "a"]);
        let b = words(&["b", "c"]);
        assert_eq!(union(a.clone(), b.clone(), None), Ok(words(&["a", "B", "b", "c"])));
        assert_eq!(union(a.clone(), b.clone(), Some(false)), Ok(words(&["a", "B", "b", "c"])));
        assert_eq!(union(a, b, Some(true)), Ok(words(&["a", "B", "c"])));
    }

    #[test]
    fn test_intersect() {
        let a = words(&["a", "B", "c", "b"]);
        let b = words(&["b", "A"]);
        assert_eq!(intersect(a.clone(), b.clone(), None), Ok(words(&["b"])));
        assert_eq!(intersect(a, b, Some(true)), Ok(words(&["a", "B"])));
    }

    #[test]
    fn test_except() {
        let a = words(&["a", "B", "c", "c"]);
        let b = words(&["b"]);
        assert_eq!(except(a.clone(), b.clone(), None), Ok(words(&["a", "B", "c"])));
        assert_eq!(except(a, b, Some(true)), Ok(words(&["a", "c"])));
    }

    #[test]
    fn test_sequence_equals() {
        assert_eq!(sequence_equals(words(&["a", "b"]), words(&["A", "B"]), None), Ok(false));
        assert_eq!(sequence_equals(words(&["a", "b"]), words(&["A", "B"]), Some(true)), Ok(true));
        assert_eq!(sequence_equals(words(&["a", "b"]), words(&["b", "a"]), Some(true)), Ok(false));
        assert_eq!(sequence_equals(words(&["a"]), words(&["a", "a"]), None), Ok(false));
        assert_eq!(sequence_equals(Vec::new(), Vec::new(), None), Ok(true));
    }

    #[test]
    fn test_set_equals() {
        assert_eq!(set_equals(words(&["a", "b", "a"]), words(&["b", "a"]), None), Ok(true));
        assert_eq!(set_equals(words(&["a", "b"]), words(&["B", "A"]), None), Ok(false));
        assert_eq!(set_equals(words(&["a", "b"]), words(&["B", "A"]), Some(true)), Ok(true));
        assert_eq!(set_equals(words(&["a", "b"]), words(&["a"]), None), Ok(false));
        assert_eq!(set_equals(words(&["a"]), words(&["a", "c"]), None), Ok(false));
    }

    #[test]
    fn test_default_equality_keeps_numeric_types_apart() {
        let ints = vec![Value::from(1i64)];
        let doubles = vec![Value::from(1.0f64)];
        assert_eq!(sequence_equals(ints.clone(), doubles.clone(), None), Ok(false));
        assert_eq!(sequence_equals(ints, doubles, Some(false)), Ok(true));
    }

    #[test]
    fn test_hashed_operators_keep_incomparable_elements_apart() {
        let strings = vec![Value::from("1")];
        let numbers = vec![Value::from(1i64)];
        assert_eq!(
            union(strings.clone(), numbers.clone(), Some(true)),
            Ok(vec![Value::from("1"), Value::from(1i64)])
        );
        assert_eq!(intersect(strings.clone(), numbers.clone(), Some(true)), Ok(vec![]));
        assert_eq!(set_equals(strings.clone(), numbers.clone(), Some(true)), Ok(false));
        assert!(sequence_equals(strings, numbers, Some(true)).is_err());
    }

    #[test]
    fn test_incomparable_elements() {
        let result = sequence_equals(vec![Value::from("1")], vec![Value::from(1i64)], Some(true));
        assert!(result.is_err());
    }
}
