use std::rc::Rc;

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;

use super::{Value, ValueType};

/// A primitive value with a runtime type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    String(Rc<str>),
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    Double(OrderedFloat<f64>),
    DateTime(chrono::DateTime<chrono::FixedOffset>),
    Date(chrono::NaiveDate),
    Duration(chrono::TimeDelta),
}

impl Scalar {
    pub fn value_type(&self) -> ValueType {
        match self {
            Scalar::String(_) => ValueType::String,
            Scalar::Boolean(_) => ValueType::Boolean,
            Scalar::Integer(_) => ValueType::Integer,
            Scalar::Decimal(_) => ValueType::Decimal,
            Scalar::Double(_) => ValueType::Double,
            Scalar::DateTime(_) => ValueType::DateTime,
            Scalar::Date(_) => ValueType::Date,
            Scalar::Duration(_) => ValueType::Duration,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Scalar::Integer(_) | Scalar::Decimal(_) | Scalar::Double(_)
        )
    }
}

// every conversion into a scalar is also a conversion into a value
macro_rules! scalar_from {
    ($($t:ty => |$v:ident| $e:expr),* $(,)?) => {
        $(
            impl From<$t> for Scalar {
                fn from($v: $t) -> Self {
                    $e
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Scalar(v.into())
                }
            }
        )*
    };
}

scalar_from! {
    &str => |s| Scalar::String(s.into()),
    String => |s| Scalar::String(s.into()),
    Rc<str> => |s| Scalar::String(s),
    bool => |b| Scalar::Boolean(b),
    i8 => |i| Scalar::Integer(i.into()),
    i16 => |i| Scalar::Integer(i.into()),
    i32 => |i| Scalar::Integer(i.into()),
    i64 => |i| Scalar::Integer(i),
    u8 => |i| Scalar::Integer(i.into()),
    u16 => |i| Scalar::Integer(i.into()),
    u32 => |i| Scalar::Integer(i.into()),
    Decimal => |d| Scalar::Decimal(d),
    f32 => |f| Scalar::Double(OrderedFloat(f.into())),
    f64 => |f| Scalar::Double(OrderedFloat(f)),
    chrono::DateTime<chrono::FixedOffset> => |d| Scalar::DateTime(d),
    chrono::NaiveDate => |d| Scalar::Date(d),
    chrono::TimeDelta => |d| Scalar::Duration(d),
}
