//! Equality, ordering and hashing for dynamically typed values.
//!
//! A [`Value`] is either null, a scalar, a record with named attributes
//! or a list of values. A [`ValueComparer`] compares, equates and hashes
//! values under one [`ComparerConfig`] (case sensitivity and collation),
//! and guarantees that the three operations agree with each other:
//! values that compare equal are equal, and equal values hash the same.
//!
//! Records are compared structurally. Attribute order does not matter, but
//! attribute presence does: two records are only equal when they expose
//! the same attribute names with equal values.
mod comparer;
mod config;
mod equality;
pub mod error;
mod string;
mod value;

pub use comparer::ValueComparer;
pub use config::{CollationSpec, ComparerConfig, ComparerConfigBuilder};
pub use equality::Equality;
pub use error::{Error, Result};
pub use value::{Record, Scalar, Value, ValueType};
