use std::borrow::Cow;

use icu::casemap::CaseMapper;

/// The full Unicode case fold of a string.
///
/// Record attribute names and case-insensitive string comparison both go
/// through this, so two names are the same attribute exactly when a
/// case-insensitive comparer considers them equal.
pub(crate) fn fold_case(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(s.to_ascii_lowercase())
        } else {
            Cow::Borrowed(s)
        }
    } else {
        Cow::Owned(CaseMapper::new().fold_string(s))
    }
}
