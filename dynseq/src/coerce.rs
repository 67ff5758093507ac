//! Numeric coercion for aggregation.
use std::str::FromStr;

use rust_decimal::Decimal;

use dynseq_comparer::{Scalar, Value};

use crate::error::{Error, Result};

/// Convert a value to a decimal.
///
/// Null is no number at all and gives `None`. Integers and decimals pass
/// through, finite doubles convert, booleans count as 1 and 0, and strings
/// are parsed in plain or scientific notation after trimming. Anything
/// else fails with [`Error::ConversionFailed`].
pub fn to_decimal(value: &Value) -> Result<Option<Decimal>> {
    let failed = || Error::ConversionFailed {
        value: value.clone(),
    };
    let scalar = match value.base() {
        Value::Null => return Ok(None),
        Value::Scalar(scalar) => scalar,
        _ => return Err(failed()),
    };
    let decimal = match scalar {
        Scalar::Integer(i) => Decimal::from(*i),
        Scalar::Decimal(d) => *d,
        Scalar::Double(f) => Decimal::try_from(f.0).map_err(|_| failed())?,
        Scalar::Boolean(b) => Decimal::from(u8::from(*b)),
        Scalar::String(s) => parse_decimal(s.trim()).ok_or_else(failed)?,
        _ => return Err(failed()),
    };
    Ok(Some(decimal))
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    #[test]
    fn test_null_is_absent() {
        assert_eq!(to_decimal(&Value::Null), Ok(None));
        assert_eq!(to_decimal(&Value::boxed(Value::Null)), Ok(None));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(to_decimal(&3i64.into()), Ok(Some(dec!(3))));
        assert_eq!(to_decimal(&dec!(2.5).into()), Ok(Some(dec!(2.5))));
        assert_eq!(to_decimal(&0.25f64.into()), Ok(Some(dec!(0.25))));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(to_decimal(&true.into()), Ok(Some(dec!(1))));
        assert_eq!(to_decimal(&false.into()), Ok(Some(dec!(0))));
    }

    #[test]
    fn test_strings() {
        assert_eq!(to_decimal(&" 12.5 ".into()), Ok(Some(dec!(12.5))));
        assert_eq!(to_decimal(&"1e3".into()), Ok(Some(dec!(1000))));
    }

    #[test]
    fn test_failures() {
        let value = Value::from("twelve");
        assert_eq!(
            to_decimal(&value),
            Err(Error::ConversionFailed { value: value.clone() })
        );
        assert!(to_decimal(&f64::NAN.into()).is_err());
        assert!(to_decimal(&Value::list([])).is_err());
    }
}
