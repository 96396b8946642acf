//! String comparison policies
//!
//! Case-insensitive comparison of natural-language text depends on the
//! language: in Turkish and Azerbaijani the lower case of `I` is `ı` and the
//! upper case of `i` is `İ`. There is therefore no default policy; every
//! containment, prefix and suffix check names one explicitly.

use std::borrow::Cow;
use std::fmt;

/// Language rules used for case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseLocale {
    /// Language-neutral Unicode lower-casing.
    #[default]
    Invariant,
    /// Turkish / Azerbaijani rules: `I` folds to `ı`, `İ` folds to `i`.
    Turkic,
}

/// How two strings are compared by the string conditions.
///
/// ```
/// use conditions::{CaseLocale, StringComparison};
///
/// assert!(StringComparison::Ordinal.ends_with("hello and hi", "hi"));
/// assert!(!StringComparison::Ordinal.ends_with("hello and hi", "HI"));
/// assert!(StringComparison::AsciiIgnoreCase.ends_with("hello and hi", "HI"));
///
/// // The Turkish-I: "Hİ" folds to "hi" only under Turkic rules.
/// assert!(StringComparison::IgnoreCase(CaseLocale::Turkic).ends_with("hello and hi", "Hİ"));
/// assert!(!StringComparison::IgnoreCase(CaseLocale::Invariant).ends_with("hello and hi", "Hİ"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringComparison {
    /// Byte-wise, case-sensitive.
    Ordinal,
    /// Case-insensitive for ASCII letters only; other characters compare
    /// byte-wise.
    AsciiIgnoreCase,
    /// Case-insensitive using full Unicode lower-casing with the given
    /// language rules.
    IgnoreCase(CaseLocale),
}

impl StringComparison {
    /// Returns true if `haystack` contains `needle`.
    #[must_use]
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        self.fold(haystack).contains(self.fold(needle).as_ref())
    }

    /// Returns true if `haystack` starts with `prefix`.
    #[must_use]
    pub fn starts_with(self, haystack: &str, prefix: &str) -> bool {
        self.fold(haystack).starts_with(self.fold(prefix).as_ref())
    }

    /// Returns true if `haystack` ends with `suffix`.
    #[must_use]
    pub fn ends_with(self, haystack: &str, suffix: &str) -> bool {
        self.fold(haystack).ends_with(self.fold(suffix).as_ref())
    }

    fn fold(self, s: &str) -> Cow<'_, str> {
        match self {
            Self::Ordinal => Cow::Borrowed(s),
            Self::AsciiIgnoreCase => Cow::Owned(s.to_ascii_lowercase()),
            Self::IgnoreCase(CaseLocale::Invariant) => Cow::Owned(s.to_lowercase()),
            Self::IgnoreCase(CaseLocale::Turkic) => Cow::Owned(
                s.chars()
                    .flat_map(|c| {
                        let folded = match c {
                            'I' => 'ı',
                            'İ' => 'i',
                            other => other,
                        };
                        folded.to_lowercase()
                    })
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for StringComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinal => f.write_str("ordinal"),
            Self::AsciiIgnoreCase => f.write_str("ASCII case-insensitive"),
            Self::IgnoreCase(CaseLocale::Invariant) => f.write_str("case-insensitive"),
            Self::IgnoreCase(CaseLocale::Turkic) => f.write_str("Turkic case-insensitive"),
        }
    }
}
