use dynseq_comparer::{Equality, Value};

use crate::callable::{select, Selector};
use crate::error::{Error, Result};
use crate::table::{ValueMap, ValueSet};

/// Build a dictionary keyed by `key` over the elements.
///
/// The value stored for an element is its projection through `value`, or
/// the element itself. A repeated key fails with [`Error::DuplicateKey`]
/// unless `force` is set, in which case the last value wins and the entry
/// keeps its first position. `ignore_case` selects key equality as in the
/// set operators.
pub fn to_dictionary(
    items: impl IntoIterator<Item = Value>,
    key: Selector,
    value: Option<Selector>,
    force: bool,
    ignore_case: Option<bool>,
) -> Result<ValueMap<Value>> {
    let mut map = ValueMap::new(Equality::from_ignore_case(ignore_case));
    for item in items {
        let k = key(&item);
        let v = select(value, &item);
        if force {
            if map.insert(k, v)?.is_some() {
                tracing::trace!("replaced value of a repeated key");
            }
        } else if !map.contains_key(&k)? {
            map.insert(k, v)?;
        } else {
            return Err(Error::DuplicateKey { key: k });
        }
    }
    Ok(map)
}

/// Collect the distinct projections of the elements.
pub fn to_set(
    items: impl IntoIterator<Item = Value>,
    selector: Option<Selector>,
    ignore_case: Option<bool>,
) -> Result<ValueSet> {
    ValueSet::from_values(
        Equality::from_ignore_case(ignore_case),
        items.into_iter().map(|item| select(selector, &item)),
    )
}
