use std::sync::OnceLock;

/// How strings are ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollationSpec {
    /// Unicode code point order.
    Ordinal,
    /// The Unicode collation algorithm tailored for a BCP-47 language tag.
    /// `und` is the root locale.
    Locale(String),
}

impl CollationSpec {
    pub fn locale(tag: impl Into<String>) -> Self {
        CollationSpec::Locale(tag.into())
    }

    /// The collation of the locale of the current process.
    ///
    /// The locale is taken from `LC_ALL`, `LC_COLLATE` or `LANG`, in that
    /// order. A POSIX name such as `en_US.UTF-8` becomes `en-US`. Without
    /// a usable locale the root locale is used.
    pub fn current() -> Self {
        let tag = ["LC_ALL", "LC_COLLATE", "LANG"]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find_map(|value| posix_to_bcp47(&value));
        CollationSpec::Locale(tag.unwrap_or_else(|| "und".to_string()))
    }
}

fn posix_to_bcp47(value: &str) -> Option<String> {
    let language = value.split(['.', '@']).next()?.trim();
    if language.is_empty() || language == "C" || language == "POSIX" {
        return None;
    }
    Some(language.replace('_', "-"))
}

/// Immutable comparison settings: case sensitivity and collation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparerConfig {
    case_sensitive: bool,
    collation: CollationSpec,
}

static SHARED: OnceLock<ComparerConfig> = OnceLock::new();

impl Default for ComparerConfig {
    /// Case-insensitive, in the collation of the current locale.
    fn default() -> Self {
        Self::new(false, CollationSpec::current())
    }
}

impl ComparerConfig {
    pub fn new(case_sensitive: bool, collation: CollationSpec) -> Self {
        Self {
            case_sensitive,
            collation,
        }
    }

    pub fn builder() -> ComparerConfigBuilder {
        ComparerConfigBuilder::default()
    }

    /// The current locale's collation with the given case rule.
    pub fn ignore_case(ignore_case: bool) -> Self {
        Self::new(!ignore_case, CollationSpec::current())
    }

    /// The process-wide default configuration.
    ///
    /// It is built on first use, from the environment at that moment, and
    /// never changes afterwards.
    pub fn shared() -> &'static ComparerConfig {
        SHARED.get_or_init(|| {
            let config = ComparerConfig::default();
            tracing::debug!(?config, "initialized shared comparer configuration");
            config
        })
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn collation(&self) -> &CollationSpec {
        &self.collation
    }
}

/// Build a [`ComparerConfig`].
///
/// Unset settings take the defaults: case-insensitive, current locale.
#[derive(Debug, Clone, Default)]
pub struct ComparerConfigBuilder {
    case_sensitive: bool,
    collation: Option<CollationSpec>,
}

impl ComparerConfigBuilder {
    pub fn case_sensitive(&mut self, case_sensitive: bool) -> &mut Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn collation(&mut self, collation: CollationSpec) -> &mut Self {
        self.collation = Some(collation);
        self
    }

    /// Collate with the given BCP-47 language tag.
    pub fn locale(&mut self, tag: impl Into<String>) -> &mut Self {
        self.collation(CollationSpec::locale(tag))
    }

    /// Collate by code point.
    pub fn ordinal(&mut self) -> &mut Self {
        self.collation(CollationSpec::Ordinal)
    }

    pub fn build(&self) -> ComparerConfig {
        ComparerConfig::new(
            self.case_sensitive,
            self.collation.clone().unwrap_or_else(CollationSpec::current),
        )
    }
}
