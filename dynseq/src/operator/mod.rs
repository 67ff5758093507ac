//! The sequence operators.
//!
//! Operators are free functions over anything that iterates [`Value`]s.
//! Eager operators consume their input and return a result; lazy ones
//! return an iterator that pulls from the source on demand.
//!
//! [`Value`]: dynseq_comparer::Value
mod aggregate;
mod element;
mod materialize;
mod positional;
mod quantifier;
mod set;

pub use aggregate::{average, max, min, sum};
pub use element::{first, last, single};
pub use materialize::{to_dictionary, to_set};
pub use positional::{
    concat, count, count_by, index_of, index_of_value, reverse, skip, skip_while, take,
    take_while, Reverse,
};
pub use quantifier::{all, any};
pub use set::{except, intersect, sequence_equals, set_equals, union};
