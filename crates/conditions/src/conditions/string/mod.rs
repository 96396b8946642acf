//! String conditions
//!
//! Work on anything implementing [`StrValue`]: `str`, `String`, `Cow<str>`,
//! `Box<str>`, references to those, and `Option`s of those where `None` is the
//! null string.
//!
//! Null rules:
//!
//! - length is measured in Unicode scalar values; null has length 0;
//! - a null string contains, starts with and ends with nothing, so the
//!   positive checks fail and the negated checks pass;
//! - [`is_empty`](StringConditions::is_empty) fails on null,
//!   [`is_not_empty`](StringConditions::is_not_empty) passes on null.
//!
//! A failing check on a null value reports
//! [`ArgumentNull`](crate::ConditionError::ArgumentNull).

mod comparison;

pub use comparison::{CaseLocale, StringComparison};

use std::borrow::Cow;

use crate::foundation::{ConditionError, ConditionFailure, Validator};

// ============================================================================
// STRING VALUE
// ============================================================================

/// A possibly-null string.
pub trait StrValue {
    /// Returns the string, or `None` for the null string.
    fn as_str_value(&self) -> Option<&str>;
}

impl StrValue for str {
    fn as_str_value(&self) -> Option<&str> {
        Some(self)
    }
}

impl StrValue for String {
    fn as_str_value(&self) -> Option<&str> {
        Some(self)
    }
}

impl StrValue for Cow<'_, str> {
    fn as_str_value(&self) -> Option<&str> {
        Some(self)
    }
}

impl StrValue for Box<str> {
    fn as_str_value(&self) -> Option<&str> {
        Some(self)
    }
}

impl<S: StrValue + ?Sized> StrValue for &S {
    fn as_str_value(&self) -> Option<&str> {
        (**self).as_str_value()
    }
}

impl<S: StrValue> StrValue for Option<S> {
    fn as_str_value(&self) -> Option<&str> {
        self.as_ref().and_then(StrValue::as_str_value)
    }
}

fn char_len(s: Option<&str>) -> usize {
    s.map_or(0, |s| s.chars().count())
}

fn actual_length(s: Option<&str>) -> String {
    format!("The actual length is {}.", char_len(s))
}

// ============================================================================
// STRING CONDITIONS
// ============================================================================

/// Condition methods for string values.
///
/// ```
/// use conditions::prelude::*;
///
/// fn greet(name: &str) -> Result<String, ConditionError> {
///     requires(name, "name")
///         .is_not_null_or_whitespace()?
///         .is_shorter_or_equal(32)?
///         .does_not_contain("<", StringComparison::Ordinal)?;
///     Ok(format!("hello {name}"))
/// }
///
/// assert!(greet("ada").is_ok());
/// assert!(greet("   ").is_err());
/// ```
pub trait StringConditions: Sized {
    /// Checks that the string is `""`. Fails on null.
    fn is_empty(self) -> Result<Self, ConditionError>;

    /// Checks that the string is not `""`. Passes on null.
    fn is_not_empty(self) -> Result<Self, ConditionError>;

    /// Checks that the string is null or `""`.
    fn is_null_or_empty(self) -> Result<Self, ConditionError>;

    /// Checks that the string is neither null nor `""`.
    fn is_not_null_or_empty(self) -> Result<Self, ConditionError>;

    /// Checks that the string is null, empty or whitespace only.
    fn is_null_or_whitespace(self) -> Result<Self, ConditionError>;

    /// Checks that the string has at least one non-whitespace character.
    fn is_not_null_or_whitespace(self) -> Result<Self, ConditionError>;

    /// Checks that the string has exactly `length` characters.
    fn has_length(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the string does not have exactly `length` characters.
    fn does_not_have_length(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the string has fewer than `length` characters.
    fn is_shorter_than(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the string has at most `length` characters.
    fn is_shorter_or_equal(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the string has more than `length` characters.
    fn is_longer_than(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the string has at least `length` characters.
    fn is_longer_or_equal(self, length: usize) -> Result<Self, ConditionError>;

    /// Checks that the string contains `pattern`.
    fn contains(self, pattern: &str, comparison: StringComparison) -> Result<Self, ConditionError>;

    /// Checks that the string does not contain `pattern`.
    fn does_not_contain(
        self,
        pattern: &str,
        comparison: StringComparison,
    ) -> Result<Self, ConditionError>;

    /// Checks that the string starts with `prefix`.
    fn starts_with(self, prefix: &str, comparison: StringComparison) -> Result<Self, ConditionError>;

    /// Checks that the string does not start with `prefix`.
    fn does_not_start_with(
        self,
        prefix: &str,
        comparison: StringComparison,
    ) -> Result<Self, ConditionError>;

    /// Checks that the string ends with `suffix`.
    fn ends_with(self, suffix: &str, comparison: StringComparison) -> Result<Self, ConditionError>;

    /// Checks that the string does not end with `suffix`.
    fn does_not_end_with(
        self,
        suffix: &str,
        comparison: StringComparison,
    ) -> Result<Self, ConditionError>;
}

impl<S: StrValue> Validator<S> {
    fn check_str<P, D>(self, predicate: P, describe: D) -> Result<Self, ConditionError>
    where
        P: FnOnce(Option<&str>) -> bool,
        D: FnOnce(&str) -> String,
    {
        let value = self.value().as_str_value();
        let holds = predicate(value);
        let is_null = value.is_none();
        self.verify(holds, |name| {
            ConditionFailure::new(describe(name)).with_null_value(is_null)
        })
    }

    fn check_len<P, D>(self, predicate: P, describe: D) -> Result<Self, ConditionError>
    where
        P: FnOnce(usize) -> bool,
        D: FnOnce(&str) -> String,
    {
        let value = self.value().as_str_value();
        let holds = predicate(char_len(value));
        let is_null = value.is_none();
        let additional = actual_length(value);
        self.verify(holds, |name| {
            ConditionFailure::new(describe(name))
                .with_additional(additional)
                .with_null_value(is_null)
        })
    }
}

impl<S: StrValue> StringConditions for Validator<S> {
    fn is_empty(self) -> Result<Self, ConditionError> {
        self.check_str(|s| s == Some(""), |name| format!("{name} should be empty"))
    }

    fn is_not_empty(self) -> Result<Self, ConditionError> {
        self.check_str(|s| s != Some(""), |name| format!("{name} should not be empty"))
    }

    fn is_null_or_empty(self) -> Result<Self, ConditionError> {
        self.check_str(
            |s| s.is_none_or(str::is_empty),
            |name| format!("{name} should be null or empty"),
        )
    }

    fn is_not_null_or_empty(self) -> Result<Self, ConditionError> {
        self.check_str(
            |s| s.is_some_and(|s| !s.is_empty()),
            |name| format!("{name} should not be null or empty"),
        )
    }

    fn is_null_or_whitespace(self) -> Result<Self, ConditionError> {
        self.check_str(
            |s| s.is_none_or(|s| s.chars().all(char::is_whitespace)),
            |name| format!("{name} should be null or whitespace"),
        )
    }

    fn is_not_null_or_whitespace(self) -> Result<Self, ConditionError> {
        self.check_str(
            |s| s.is_some_and(|s| !s.chars().all(char::is_whitespace)),
            |name| format!("{name} should not be null or whitespace"),
        )
    }

    fn has_length(self, length: usize) -> Result<Self, ConditionError> {
        self.check_len(
            |len| len == length,
            |name| format!("{name} should have a length of {length}"),
        )
    }

    fn does_not_have_length(self, length: usize) -> Result<Self, ConditionError> {
        self.check_len(
            |len| len != length,
            |name| format!("{name} should not have a length of {length}"),
        )
    }

    fn is_shorter_than(self, length: usize) -> Result<Self, ConditionError> {
        self.check_len(
            |len| len < length,
            |name| format!("{name} should be shorter than {length} characters"),
        )
    }

    fn is_shorter_or_equal(self, length: usize) -> Result<Self, ConditionError> {
        self.check_len(
            |len| len <= length,
            |name| format!("{name} should be shorter than or equal to {length} characters"),
        )
    }

    fn is_longer_than(self, length: usize) -> Result<Self, ConditionError> {
        self.check_len(
            |len| len > length,
            |name| format!("{name} should be longer than {length} characters"),
        )
    }

    fn is_longer_or_equal(self, length: usize) -> Result<Self, ConditionError> {
        self.check_len(
            |len| len >= length,
            |name| format!("{name} should be longer than or equal to {length} characters"),
        )
    }

    fn contains(self, pattern: &str, comparison: StringComparison) -> Result<Self, ConditionError> {
        self.check_str(
            |s| s.is_some_and(|s| comparison.contains(s, pattern)),
            |name| format!("{name} should contain '{pattern}'"),
        )
    }

    fn does_not_contain(
        self,
        pattern: &str,
        comparison: StringComparison,
    ) -> Result<Self, ConditionError> {
        self.check_str(
            |s| !s.is_some_and(|s| comparison.contains(s, pattern)),
            |name| format!("{name} should not contain '{pattern}'"),
        )
    }

    fn starts_with(self, prefix: &str, comparison: StringComparison) -> Result<Self, ConditionError> {
        self.check_str(
            |s| s.is_some_and(|s| comparison.starts_with(s, prefix)),
            |name| format!("{name} should start with '{prefix}'"),
        )
    }

    fn does_not_start_with(
        self,
        prefix: &str,
        comparison: StringComparison,
    ) -> Result<Self, ConditionError> {
        self.check_str(
            |s| !s.is_some_and(|s| comparison.starts_with(s, prefix)),
            |name| format!("{name} should not start with '{prefix}'"),
        )
    }

    fn ends_with(self, suffix: &str, comparison: StringComparison) -> Result<Self, ConditionError> {
        self.check_str(
            |s| s.is_some_and(|s| comparison.ends_with(s, suffix)),
            |name| format!("{name} should end with '{suffix}'"),
        )
    }

    fn does_not_end_with(
        self,
        suffix: &str,
        comparison: StringComparison,
    ) -> Result<Self, ConditionError> {
        self.check_str(
            |s| !s.is_some_and(|s| comparison.ends_with(s, suffix)),
            |name| format!("{name} should not end with '{suffix}'"),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
