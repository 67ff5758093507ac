use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

use crate::config::ComparerConfig;
use crate::error::{Error, Result};
use crate::string::StringComparer;
use crate::value::{NumericKey, Record, Scalar, Value};

// fixed seeds: hashes must be stable for the life of the process, across
// every comparer instance
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

const RECORD_SEED: u64 = 13;
const LIST_SEED: u64 = 17;

/// Compares, equates and hashes values under one configuration.
///
/// The three operations agree: `equals(x, y)` is `compare(x, y) == Equal`,
/// and equal values have equal hashes. The order is total for a fixed
/// configuration.
///
/// Cloning is cheap; clones share the collator.
#[derive(Debug, Clone)]
pub struct ValueComparer {
    config: ComparerConfig,
    strings: Rc<StringComparer>,
    hasher: ahash::RandomState,
}

impl Default for ValueComparer {
    /// A comparer for the shared default configuration.
    fn default() -> Self {
        Self::new(ComparerConfig::shared().clone())
    }
}

impl ValueComparer {
    pub fn new(config: ComparerConfig) -> Self {
        tracing::debug!(?config, "building value comparer");
        let strings = StringComparer::new(config.collation(), config.case_sensitive());
        Self {
            config,
            strings: Rc::new(strings),
            hasher: ahash::RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]),
        }
    }

    /// A comparer in the current locale with the given case rule.
    pub fn ignore_case(ignore_case: bool) -> Self {
        Self::new(ComparerConfig::ignore_case(ignore_case))
    }

    pub fn config(&self) -> &ComparerConfig {
        &self.config
    }

    /// Compare two values.
    ///
    /// Null sorts before everything else. Records compare attribute by
    /// attribute in canonical name order, a missing attribute sorting
    /// before a present one. Numbers of different types compare by value.
    ///
    /// Fails with [`Error::IncomparableTypes`] when two non-null values
    /// have no common representation, such as a string and a number or a
    /// record and a scalar.
    pub fn compare(&self, x: &Value, y: &Value) -> Result<Ordering> {
        if x.is_same(y) {
            return Ok(Ordering::Equal);
        }
        let (x, y) = (x.base(), y.base());
        match (x, y) {
            (Value::Null, Value::Null) => Ok(Ordering::Equal),
            (Value::Null, _) => Ok(Ordering::Less),
            (_, Value::Null) => Ok(Ordering::Greater),
            (Value::Record(a), Value::Record(b)) => self.compare_records(a, b),
            (Value::List(a), Value::List(b)) => self.compare_lists(a, b),
            (Value::Scalar(a), Value::Scalar(b)) => self.compare_scalars(a, b),
            _ => Err(Error::IncomparableTypes {
                left: x.value_type(),
                right: y.value_type(),
            }),
        }
    }

    pub fn equals(&self, x: &Value, y: &Value) -> Result<bool> {
        Ok(self.compare(x, y)?.is_eq())
    }

    /// Hash a value consistently with [`equals`](Self::equals).
    pub fn hash_of(&self, value: &Value) -> u64 {
        match value.base() {
            Value::Null => 0,
            Value::Scalar(scalar) => self.hash_scalar(scalar),
            Value::Record(record) => self.hash_record(record),
            Value::List(values) => values.iter().fold(LIST_SEED, |hash, value| {
                combine(hash, self.hash_of(value))
            }),
            Value::Boxed(_) => unreachable!("base() never returns a wrapper"),
        }
    }

    /// Compare two strings under this comparer's collation and case rule.
    pub fn compare_str(&self, a: &str, b: &str) -> Ordering {
        self.strings.compare(a, b)
    }

    fn compare_scalars(&self, a: &Scalar, b: &Scalar) -> Result<Ordering> {
        match (a, b) {
            (Scalar::String(a), Scalar::String(b)) => Ok(self.strings.compare(a, b)),
            (Scalar::Boolean(a), Scalar::Boolean(b)) => Ok(a.cmp(b)),
            (Scalar::DateTime(a), Scalar::DateTime(b)) => Ok(a.cmp(b)),
            (Scalar::Date(a), Scalar::Date(b)) => Ok(a.cmp(b)),
            (Scalar::Duration(a), Scalar::Duration(b)) => Ok(a.cmp(b)),
            _ => match (NumericKey::new(a), NumericKey::new(b)) {
                (Some(a), Some(b)) => Ok(a.cmp(&b)),
                _ => Err(Error::IncomparableTypes {
                    left: a.value_type(),
                    right: b.value_type(),
                }),
            },
        }
    }

    fn compare_lists(&self, a: &[Value], b: &[Value]) -> Result<Ordering> {
        for (a, b) in a.iter().zip(b) {
            let ordering = self.compare(a, b)?;
            if ordering.is_ne() {
                return Ok(ordering);
            }
        }
        Ok(a.len().cmp(&b.len()))
    }

    // walk the union of both name sets in canonical order; a record that
    // lacks the next name is the lesser one
    fn compare_records(&self, a: &Record, b: &Record) -> Result<Ordering> {
        let a = self.canonical_attributes(a);
        let b = self.canonical_attributes(b);
        let mut a_iter = a.iter().peekable();
        let mut b_iter = b.iter().peekable();
        loop {
            match (a_iter.peek(), b_iter.peek()) {
                (None, None) => return Ok(Ordering::Equal),
                (None, Some(_)) => return Ok(Ordering::Less),
                (Some(_), None) => return Ok(Ordering::Greater),
                (Some((a_name, a_value)), Some((b_name, b_value))) => {
                    match a_name.cmp(b_name) {
                        Ordering::Less => return Ok(Ordering::Greater),
                        Ordering::Greater => return Ok(Ordering::Less),
                        Ordering::Equal => {
                            let ordering = self.compare(a_value, b_value)?;
                            if ordering.is_ne() {
                                return Ok(ordering);
                            }
                        }
                    }
                }
            }
            a_iter.next();
            b_iter.next();
        }
    }

    // the attributes sorted by canonical name. comparison and hashing
    // both traverse records in this order
    fn canonical_attributes<'a>(&self, record: &'a Record) -> Vec<(Cow<'a, str>, &'a Value)> {
        let mut attributes = record
            .iter()
            .map(|(name, value)| (self.strings.canonical(name), value))
            .collect::<Vec<_>>();
        attributes.sort_by(|(a, _), (b, _)| a.cmp(b));
        attributes
    }

    fn hash_scalar(&self, scalar: &Scalar) -> u64 {
        match scalar {
            Scalar::String(s) => self.hash_str(s),
            Scalar::Integer(_) | Scalar::Decimal(_) | Scalar::Double(_) => {
                // numeric scalars always have a key
                NumericKey::new(scalar).map_or(0, |key| self.hash_one(&key))
            }
            _ => self.hash_one(scalar),
        }
    }

    fn hash_record(&self, record: &Record) -> u64 {
        self.canonical_attributes(record)
            .iter()
            .fold(RECORD_SEED, |hash, (name, value)| {
                let hash = combine(hash, self.hash_one(name.as_ref()));
                combine(hash, self.hash_of(value))
            })
    }

    fn hash_str(&self, s: &str) -> u64 {
        self.hash_one(self.strings.canonical(s).as_ref())
    }

    fn hash_one<T: Hash + ?Sized>(&self, value: &T) -> u64 {
        BuildHasher::hash_one(&self.hasher, value)
    }
}

fn combine(hash: u64, part: u64) -> u64 {
    hash.wrapping_mul(7).wrapping_add(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use rust_decimal_macros::dec;

    use crate::config::CollationSpec;
    use crate::value::ValueType;

    fn insensitive() -> ValueComparer {
        ValueComparer::new(ComparerConfig::new(false, CollationSpec::locale("en")))
    }

    fn sensitive() -> ValueComparer {
        ValueComparer::new(ComparerConfig::new(true, CollationSpec::locale("en")))
    }

    fn record<const N: usize>(attributes: [(&str, Value); N]) -> Value {
        Record::from_iter(attributes).into()
    }

    #[test]
    fn test_same_reference_is_equal() {
        let value = Value::list([Value::from("a"), Value::from(1i64)]);
        let copy = value.clone();
        assert_eq!(insensitive().compare(&value, &copy), Ok(Ordering::Equal));
    }

    #[test]
    fn test_null_sorts_first() {
        let comparer = insensitive();
        assert_eq!(
            comparer.compare(&Value::Null, &Value::from(i64::MIN)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            comparer.compare(&Value::from(""), &Value::Null),
            Ok(Ordering::Greater)
        );
        assert_eq!(comparer.compare(&Value::Null, &Value::Null), Ok(Ordering::Equal));
    }

    #[test]
    fn test_null_is_less_than_record() {
        let comparer = insensitive();
        let r = record([("a", Value::from(1i64))]);
        assert_eq!(comparer.compare(&Value::Null, &r), Ok(Ordering::Less));
    }

    #[test]
    fn test_boxed_values_are_unwrapped() {
        let comparer = insensitive();
        let boxed = Value::boxed(Value::from("Foo"));
        assert_eq!(comparer.equals(&boxed, &Value::from("foo")), Ok(true));
        assert_eq!(
            comparer.hash_of(&boxed),
            comparer.hash_of(&Value::from("foo"))
        );
    }

    #[test]
    fn test_case_rules() {
        let a = Value::from("Foo");
        let b = Value::from("foo");
        assert_eq!(insensitive().equals(&a, &b), Ok(true));
        assert_eq!(sensitive().equals(&a, &b), Ok(false));
        assert_eq!(insensitive().hash_of(&a), insensitive().hash_of(&b));
    }

    #[rstest]
    #[case(Value::from(1i64), Value::from(dec!(1.00)), Ordering::Equal)]
    #[case(Value::from(1i64), Value::from(1.0f64), Ordering::Equal)]
    #[case(Value::from(2i64), Value::from(1.5f64), Ordering::Greater)]
    #[case(Value::from(dec!(0.1)), Value::from(0.1f64), Ordering::Equal)]
    #[case(Value::from(false), Value::from(true), Ordering::Less)]
    #[case(Value::from("apple"), Value::from("Banana"), Ordering::Less)]
    #[case(Value::from(f64::NAN), Value::from(f64::NAN), Ordering::Equal)]
    #[case(Value::from(f64::NAN), Value::from(i64::MAX), Ordering::Greater)]
    fn test_compare_scalars(#[case] a: Value, #[case] b: Value, #[case] expected: Ordering) {
        let comparer = insensitive();
        assert_eq!(comparer.compare(&a, &b), Ok(expected));
        assert_eq!(comparer.compare(&b, &a), Ok(expected.reverse()));
        if expected.is_eq() {
            assert_eq!(comparer.hash_of(&a), comparer.hash_of(&b));
        }
    }

    #[rstest]
    #[case(Value::from("1"), Value::from(1i64), ValueType::String, ValueType::Integer)]
    #[case(Value::from(true), Value::from(1i64), ValueType::Boolean, ValueType::Integer)]
    #[case(
        Value::from(chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
        Value::from("2020-01-01"),
        ValueType::Date,
        ValueType::String
    )]
    fn test_incomparable_scalars(
        #[case] a: Value,
        #[case] b: Value,
        #[case] left: ValueType,
        #[case] right: ValueType,
    ) {
        assert_eq!(
            insensitive().compare(&a, &b),
            Err(Error::IncomparableTypes { left, right })
        );
    }

    #[test]
    fn test_record_and_scalar_are_incomparable() {
        let r = record([("a", Value::from(1i64))]);
        assert_eq!(
            insensitive().equals(&r, &Value::from(1i64)),
            Err(Error::IncomparableTypes {
                left: ValueType::Record,
                right: ValueType::Integer
            })
        );
    }

    #[test]
    fn test_record_attribute_order_does_not_matter() {
        let comparer = insensitive();
        let a = record([("a", Value::from(1i64)), ("b", Value::from(2i64))]);
        let b = record([("b", Value::from(2i64)), ("a", Value::from(1i64))]);
        assert_eq!(comparer.equals(&a, &b), Ok(true));
        assert_eq!(comparer.hash_of(&a), comparer.hash_of(&b));
    }

    #[test]
    fn test_record_order_with_case_fold_names() {
        let forward = record([
            ("ς", Value::from(1i64)),
            ("STRASSE", Value::from(2i64)),
            ("Ärger", Value::from(3i64)),
        ]);
        let backward = record([
            ("Ärger", Value::from(3i64)),
            ("STRASSE", Value::from(2i64)),
            ("ς", Value::from(1i64)),
        ]);
        for comparer in [insensitive(), sensitive()] {
            assert_eq!(comparer.equals(&forward, &backward), Ok(true));
            assert_eq!(comparer.hash_of(&forward), comparer.hash_of(&backward));
        }
    }

    #[test]
    fn test_fold_colliding_names_are_one_attribute() {
        // the later insert replaces the value under the first spelling
        let a = record([("ς", Value::from(1i64)), ("σ", Value::from(2i64))]);
        let b = record([("σ", Value::from(2i64))]);
        assert_eq!(insensitive().equals(&a, &b), Ok(true));
        assert_eq!(insensitive().hash_of(&a), insensitive().hash_of(&b));
        let c = record([("straße", Value::from(1i64)), ("STRASSE", Value::from(1i64))]);
        assert_eq!(c.as_record().map(Record::len), Some(1));
    }

    #[test]
    fn test_record_attribute_presence_matters() {
        let comparer = insensitive();
        let ab = record([("a", Value::from(1i64)), ("b", Value::from(2i64))]);
        let a = record([("a", Value::from(1i64))]);
        let abc = record([
            ("a", Value::from(1i64)),
            ("b", Value::from(2i64)),
            ("c", Value::from(3i64)),
        ]);
        assert_eq!(comparer.compare(&a, &ab), Ok(Ordering::Less));
        assert_eq!(comparer.compare(&ab, &a), Ok(Ordering::Greater));
        assert_eq!(comparer.compare(&ab, &abc), Ok(Ordering::Less));
    }

    #[test]
    fn test_record_missing_earlier_name_sorts_first() {
        let comparer = insensitive();
        // union is [a, b]; the first record lacks "a"
        let b_only = record([("b", Value::from(0i64))]);
        let a_only = record([("a", Value::from(100i64))]);
        assert_eq!(comparer.compare(&b_only, &a_only), Ok(Ordering::Less));
    }

    #[test]
    fn test_record_names_follow_case_rule() {
        let upper = record([("Name", Value::from("x"))]);
        let lower = record([("name", Value::from("x"))]);
        assert_eq!(insensitive().equals(&upper, &lower), Ok(true));
        assert_eq!(sensitive().equals(&upper, &lower), Ok(false));
        assert_eq!(insensitive().hash_of(&upper), insensitive().hash_of(&lower));
    }

    #[test]
    fn test_record_values_compare_recursively() {
        let comparer = insensitive();
        let inner_a = record([("x", Value::from(1i64))]);
        let inner_b = record([("x", Value::from(1.0f64))]);
        let a = record([("inner", inner_a), ("name", Value::from("A"))]);
        let b = record([("name", Value::from("a")), ("inner", inner_b)]);
        assert_eq!(comparer.equals(&a, &b), Ok(true));
        assert_eq!(comparer.hash_of(&a), comparer.hash_of(&b));
    }

    #[test]
    fn test_record_value_type_mismatch_propagates() {
        let a = record([("a", Value::from("1"))]);
        let b = record([("a", Value::from(1i64))]);
        assert!(insensitive().compare(&a, &b).is_err());
    }

    #[test]
    fn test_lists_compare_lexicographically() {
        let comparer = insensitive();
        let short = Value::list([Value::from(1i64)]);
        let long = Value::list([Value::from(1i64), Value::from(2i64)]);
        let other = Value::list([Value::from(0i64), Value::from(9i64)]);
        assert_eq!(comparer.compare(&short, &long), Ok(Ordering::Less));
        assert_eq!(comparer.compare(&other, &short), Ok(Ordering::Less));
    }

    #[test]
    fn test_null_hashes_to_zero() {
        assert_eq!(insensitive().hash_of(&Value::Null), 0);
    }

    #[test]
    fn test_hash_is_stable_across_instances() {
        let value = record([("a", Value::from("x")), ("b", Value::from(2i64))]);
        assert_eq!(insensitive().hash_of(&value), insensitive().hash_of(&value));
    }

    #[test]
    fn test_datetime_compares_by_instant() {
        let utc = chrono::DateTime::parse_from_rfc3339("2020-01-02T01:00:00Z").unwrap();
        let plus_one = chrono::DateTime::parse_from_rfc3339("2020-01-02T02:00:00+01:00").unwrap();
        let comparer = insensitive();
        assert_eq!(
            comparer.equals(&Value::from(utc), &Value::from(plus_one)),
            Ok(true)
        );
        assert_eq!(
            comparer.hash_of(&Value::from(utc)),
            comparer.hash_of(&Value::from(plus_one))
        );
    }
}
