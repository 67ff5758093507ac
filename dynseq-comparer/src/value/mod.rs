/// The value domain.
///
/// Values are built by the layers around the comparer (record conversion,
/// selector evaluation) and handed to it by reference. The comparer never
/// mutates or retains them.
mod number;
mod record;
mod scalar;
mod value_core;

pub(crate) use number::NumericKey;
pub use record::Record;
pub use scalar::Scalar;
pub use value_core::{Value, ValueType};
