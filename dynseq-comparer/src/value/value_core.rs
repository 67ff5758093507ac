use std::rc::Rc;

use strum_macros::Display;

use super::{Record, Scalar};

/// The runtime type tag of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValueType {
    Null,
    Record,
    List,
    String,
    Boolean,
    Integer,
    Decimal,
    Double,
    DateTime,
    Date,
    Duration,
}

/// A loosely typed value.
///
/// The `PartialEq` and `Hash` implementations are the strict, type-exact
/// default equality: strings are compared ordinally, numbers of different
/// types are never equal and record attributes must appear in the same
/// order. Use a [`ValueComparer`](crate::ValueComparer) for the
/// dynamic-language semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Value {
    #[default]
    Null,
    Scalar(Scalar),
    Record(Rc<Record>),
    /// The composite value produced when one element projects to several
    /// results.
    List(Rc<[Value]>),
    /// A transparent wrapper placed around a value by a host object model.
    Boxed(Rc<Value>),
}

impl Value {
    /// Wrap a value in a transparent host wrapper.
    pub fn boxed(value: Value) -> Self {
        Value::Boxed(Rc::new(value))
    }

    /// Build a list value.
    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        Value::List(values.into_iter().collect())
    }

    /// The value underneath any transparent wrappers.
    pub fn base(&self) -> &Value {
        let mut value = self;
        while let Value::Boxed(inner) = value {
            value = inner;
        }
        value
    }

    pub fn is_null(&self) -> bool {
        matches!(self.base(), Value::Null)
    }

    pub fn value_type(&self) -> ValueType {
        match self.base() {
            Value::Null => ValueType::Null,
            Value::Scalar(scalar) => scalar.value_type(),
            Value::Record(_) => ValueType::Record,
            Value::List(_) => ValueType::List,
            Value::Boxed(_) => unreachable!("base() never returns a wrapper"),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self.base() {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self.base() {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self.base() {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    /// Whether both values are the same reference, either the very same
    /// `Value` or two handles to one shared allocation.
    pub(crate) fn is_same(&self, other: &Value) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self, other) {
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Boxed(a), Value::Boxed(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(Rc::new(record))
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values.into())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
