//! Building records out of tabular rows.
use std::rc::Rc;

use dynseq_comparer::{Record, Scalar, Value};

/// One row of a tabular result, such as the current row of a database
/// cursor.
pub trait DataRow {
    fn field_count(&self) -> usize;

    /// The column name of field `index`.
    fn name(&self, index: usize) -> &str;

    /// The value of field `index`; `None` for a database null.
    fn value(&self, index: usize) -> Option<Value>;
}

/// Build a record with one attribute per column of the row.
///
/// Missing values become [`Value::Null`]. With `trim_spaces`, leading and
/// trailing whitespace is removed from string values.
pub fn record_from_row<R: DataRow + ?Sized>(row: &R, trim_spaces: bool) -> Record {
    let mut record = Record::with_capacity(row.field_count());
    for index in 0..row.field_count() {
        let value = match row.value(index) {
            Some(value) if trim_spaces => trim(value),
            Some(value) => value,
            None => Value::Null,
        };
        record.insert(row.name(index), value);
    }
    record
}

/// [`record_from_row`] with string values trimmed.
pub fn record_from_row_trimmed<R: DataRow + ?Sized>(row: &R) -> Record {
    record_from_row(row, true)
}

fn trim(value: Value) -> Value {
    match &value {
        Value::Scalar(Scalar::String(s)) => {
            let trimmed = s.trim();
            if trimmed.len() == s.len() {
                value
            } else {
                Value::Scalar(Scalar::String(Rc::from(trimmed)))
            }
        }
        _ => value,
    }
}

impl<N: AsRef<str>> DataRow for [(N, Option<Value>)] {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn name(&self, index: usize) -> &str {
        self[index].0.as_ref()
    }

    fn value(&self, index: usize) -> Option<Value> {
        self[index].1.clone()
    }
}
