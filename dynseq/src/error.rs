use thiserror::Error;

use dynseq_comparer::Value;

/// An error raised by a sequence operator.
///
/// These are data or programming errors, never transient: operators do
/// not retry and never substitute a default.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Two values could not be compared.
    #[error(transparent)]
    Comparer(#[from] dynseq_comparer::Error),
    /// More than one element qualified where at most one was expected.
    #[error("sequence contains more than one matching element")]
    CardinalityViolation,
    /// A key occurred twice while building a dictionary without `force`.
    #[error("an item with the same key has already been added: {key:?}")]
    DuplicateKey { key: Value },
    /// A projected value could not be interpreted as a number.
    #[error("cannot convert {value:?} to a number")]
    ConversionFailed { value: Value },
    /// A decimal aggregate went out of range.
    #[error("arithmetic overflow in aggregate")]
    ArithmeticOverflow,
}

pub type Result<T> = std::result::Result<T, Error>;
