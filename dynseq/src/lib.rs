//! Sequence operators over loosely typed values.
//!
//! Filtering, projection, aggregation and set algebra over sequences of
//! [`Value`]s, in the manner of a dynamic scripting language. Equality for
//! the set algebra and key/value operators comes from
//! [`dynseq_comparer`]: pass `ignore_case: Some(..)` to compare values the
//! way the scripting language does, or `None` for strict default
//! equality.
//!
//! ```
//! use dynseq::{union, Value};
//!
//! let a = vec![Value::from("apple"), Value::from("Banana")];
//! let b = vec![Value::from("banana"), Value::from("cherry")];
//! let merged = union(a, b, Some(true)).unwrap();
//! assert_eq!(merged.len(), 3);
//! ```
mod callable;
mod coerce;
pub mod error;
mod operator;
mod row;
mod table;

pub use callable::{pack_results, Predicate, Selector};
pub use coerce::to_decimal;
pub use dynseq_comparer::{
    CollationSpec, ComparerConfig, Equality, Record, Scalar, Value, ValueComparer, ValueType,
};
pub use error::{Error, Result};
pub use operator::*;
pub use row::{record_from_row, record_from_row_trimmed, DataRow};
pub use table::{ValueMap, ValueSet};
