use std::cmp::Ordering;

use icu::collator::{Collator, CollatorOptions, Strength};
use icu::locid::Locale;

use crate::config::CollationSpec;

pub(crate) enum Collation {
    CodePoint,
    Uca(Box<Collator>),
}

impl std::fmt::Debug for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collation::CodePoint => f.write_str("CodePoint"),
            Collation::Uca(_) => f.write_str("Uca"),
        }
    }
}

impl Collation {
    pub(crate) fn new(spec: &CollationSpec, case_sensitive: bool) -> Self {
        match spec {
            CollationSpec::Ordinal => Collation::CodePoint,
            CollationSpec::Locale(tag) => match Self::uca_collator(tag, case_sensitive) {
                Ok(collator) => Collation::Uca(Box::new(collator)),
                Err(e) => {
                    tracing::warn!(locale = %tag, error = ?e, "no collator for locale, using code point order");
                    Collation::CodePoint
                }
            },
        }
    }

    fn uca_collator(tag: &str, case_sensitive: bool) -> Result<Collator, impl std::fmt::Debug> {
        let locale = match Locale::try_from_bytes(tag.as_bytes()) {
            Ok(locale) => locale,
            Err(_) => {
                tracing::warn!(locale = %tag, "unparsable locale, using the root locale");
                Locale::UND
            }
        };
        let mut options = CollatorOptions::new();
        // case differences live at the tertiary level, so secondary
        // strength ignores them
        options.strength = Some(if case_sensitive {
            Strength::Tertiary
        } else {
            Strength::Secondary
        });
        tracing::debug!(%locale, case_sensitive, "building collator");
        Collator::try_new(&locale.into(), options)
    }

    pub(crate) fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::CodePoint => a.cmp(b),
            Collation::Uca(collator) => collator.compare(a, b),
        }
    }
}
