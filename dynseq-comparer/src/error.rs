use thiserror::Error;

use crate::value::ValueType;

/// An error raised while comparing values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two non-null values have kinds that cannot be brought to a common
    /// representation, so neither equality nor order is defined.
    #[error("cannot compare a value of type {left} with a value of type {right}")]
    IncomparableTypes { left: ValueType, right: ValueType },
}

pub type Result<T> = std::result::Result<T, Error>;
