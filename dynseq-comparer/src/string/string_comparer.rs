use std::borrow::Cow;
use std::cmp::Ordering;

use crate::config::CollationSpec;

use super::{fold_case, Collation};

/// Compares strings under a collation and a case rule.
///
/// Each string has a canonical form: its full case fold when comparing
/// case-insensitively, the string itself otherwise. Two strings are equal
/// exactly when their canonical forms are equal, and the order is the
/// collation order of the canonical forms with ties broken by code point.
/// Hashing the canonical form therefore agrees with equality.
#[derive(Debug)]
pub(crate) struct StringComparer {
    collation: Collation,
    case_sensitive: bool,
}

impl StringComparer {
    pub(crate) fn new(spec: &CollationSpec, case_sensitive: bool) -> Self {
        Self {
            collation: Collation::new(spec, case_sensitive),
            case_sensitive,
        }
    }

    pub(crate) fn canonical<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(s)
        } else {
            fold_case(s)
        }
    }

    pub(crate) fn compare(&self, a: &str, b: &str) -> Ordering {
        let a = self.canonical(a);
        let b = self.canonical(b);
        if a == b {
            return Ordering::Equal;
        }
        self.collation
            .compare(&a, &b)
            .then_with(|| a.as_ref().cmp(b.as_ref()))
    }
}
