//! Aggregates over projected numbers.
//!
//! Each element is projected through the selector and coerced to a
//! decimal. Projections that are null are skipped.
use rust_decimal::Decimal;

use dynseq_comparer::Value;

use crate::callable::{select, Selector};
use crate::coerce::to_decimal;
use crate::error::{Error, Result};

fn numbers<'a>(
    items: impl IntoIterator<Item = Value> + 'a,
    selector: Option<Selector<'a>>,
) -> impl Iterator<Item = Result<Decimal>> + 'a {
    items
        .into_iter()
        .filter_map(move |item| to_decimal(&select(selector, &item)).transpose())
}

/// The sum of the projected numbers. Zero for an empty sequence.
pub fn sum<'a>(
    items: impl IntoIterator<Item = Value> + 'a,
    selector: Option<Selector<'a>>,
) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for number in numbers(items, selector) {
        total = total
            .checked_add(number?)
            .ok_or(Error::ArithmeticOverflow)?;
    }
    Ok(total)
}

/// The mean of the projected numbers, or `None` if there are none.
pub fn average<'a>(
    items: impl IntoIterator<Item = Value> + 'a,
    selector: Option<Selector<'a>>,
) -> Result<Option<Decimal>> {
    let mut total = Decimal::ZERO;
    let mut count = 0u64;
    for number in numbers(items, selector) {
        total = total
            .checked_add(number?)
            .ok_or(Error::ArithmeticOverflow)?;
        count += 1;
    }
    if count == 0 {
        return Ok(None);
    }
    total
        .checked_div(Decimal::from(count))
        .map(Some)
        .ok_or(Error::ArithmeticOverflow)
}

/// The smallest projected number, or `None` if there are none.
pub fn min<'a>(
    items: impl IntoIterator<Item = Value> + 'a,
    selector: Option<Selector<'a>>,
) -> Result<Option<Decimal>> {
    extreme(items, selector, Decimal::min)
}

/// The largest projected number, or `None` if there are none.
pub fn max<'a>(
    items: impl IntoIterator<Item = Value> + 'a,
    selector: Option<Selector<'a>>,
) -> Result<Option<Decimal>> {
    extreme(items, selector, Decimal::max)
}

fn extreme<'a>(
    items: impl IntoIterator<Item = Value> + 'a,
    selector: Option<Selector<'a>>,
    pick: fn(Decimal, Decimal) -> Decimal,
) -> Result<Option<Decimal>> {
    let mut best = None;
    for number in numbers(items, selector) {
        let number = number?;
        best = Some(match best {
            Some(current) => pick(current, number),
            None => number,
        });
    }
    Ok(best)
}
