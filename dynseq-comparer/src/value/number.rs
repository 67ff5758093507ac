use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;

use super::Scalar;

// Integers, decimals and doubles are compared and hashed through one
// canonical key, so `1`, `1.0m` and `1.0f64` are the same number. Doubles
// that a decimal can represent become exact; the rest (NaN, the
// infinities, magnitudes beyond the decimal range) stay doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum NumericKey {
    Exact(Decimal),
    Inexact(OrderedFloat<f64>),
}

impl NumericKey {
    pub(crate) fn new(scalar: &Scalar) -> Option<NumericKey> {
        match scalar {
            Scalar::Integer(i) => Some(NumericKey::Exact(Decimal::from(*i))),
            Scalar::Decimal(d) => Some(NumericKey::Exact(d.normalize())),
            Scalar::Double(OrderedFloat(f)) => Some(Self::from_f64(*f)),
            _ => None,
        }
    }

    fn from_f64(f: f64) -> NumericKey {
        if f.is_finite() {
            if let Ok(d) = Decimal::try_from(f) {
                return NumericKey::Exact(d.normalize());
            }
        }
        NumericKey::Inexact(OrderedFloat(f))
    }
}

// where an inexact double sits relative to all exact numbers. it can never
// be zero, and NaN sorts above everything as with OrderedFloat
fn inexact_position(f: OrderedFloat<f64>) -> Ordering {
    if f.0.is_nan() || f.0 > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NumericKey::Exact(a), NumericKey::Exact(b)) => a.cmp(b),
            (NumericKey::Inexact(a), NumericKey::Inexact(b)) => a.cmp(b),
            (NumericKey::Inexact(a), NumericKey::Exact(_)) => inexact_position(*a),
            (NumericKey::Exact(_), NumericKey::Inexact(b)) => inexact_position(*b).reverse(),
        }
    }
}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
