//! The `Validator<T>` wrapper and its entry points

use std::borrow::Cow;

use crate::foundation::error::{ConditionError, ConditionFailure};
use crate::foundation::message::format_description;
use crate::foundation::mode::Mode;
use crate::foundation::nullable::Nullable;

/// Argument name used by [`requires_that`] and [`ensures_that`].
pub const DEFAULT_ARGUMENT_NAME: &str = "value";

// ============================================================================
// VALIDATOR
// ============================================================================

/// A value under validation, together with its argument name and the error
/// strategy chosen at creation.
///
/// Every condition method consumes the validator and returns it again on
/// success, so checks chain with `?`:
///
/// ```
/// use conditions::prelude::*;
///
/// fn set_port(port: u16) -> Result<u16, ConditionError> {
///     let port = requires(port, "port")
///         .is_greater_than(0)?
///         .is_not_equal_to(22)?
///         .into_value();
///     Ok(port)
/// }
///
/// assert_eq!(set_port(8080), Ok(8080));
/// assert!(set_port(22).is_err());
/// ```
///
/// The first failing check ends the chain; no later check runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator<T> {
    value: T,
    argument_name: Cow<'static, str>,
    mode: Mode,
    description: Option<Cow<'static, str>>,
}

/// Starts a precondition chain for an argument.
///
/// Failures produce the argument variants of [`ConditionError`].
pub fn requires<T>(value: T, argument_name: impl Into<Cow<'static, str>>) -> Validator<T> {
    Validator::new(value, argument_name, Mode::Precondition)
}

/// Starts a postcondition chain for a result.
///
/// Failures produce [`ConditionError::PostconditionFailed`].
pub fn ensures<T>(value: T, argument_name: impl Into<Cow<'static, str>>) -> Validator<T> {
    Validator::new(value, argument_name, Mode::Postcondition)
}

/// Checks a free-standing precondition.
///
/// ```
/// use conditions::requires_that;
///
/// let items = [1, 2, 3];
/// assert!(requires_that(items.len() < 10, "at most ten items are allowed").is_ok());
/// assert!(requires_that(items.is_empty(), "the list should be empty").is_err());
/// ```
pub fn requires_that(
    condition: bool,
    description: impl Into<Cow<'static, str>>,
) -> Result<(), ConditionError> {
    check_that(Mode::Precondition, condition, description)
}

/// Checks a free-standing postcondition.
pub fn ensures_that(
    condition: bool,
    description: impl Into<Cow<'static, str>>,
) -> Result<(), ConditionError> {
    check_that(Mode::Postcondition, condition, description)
}

fn check_that(
    mode: Mode,
    condition: bool,
    description: impl Into<Cow<'static, str>>,
) -> Result<(), ConditionError> {
    Validator::new(condition, DEFAULT_ARGUMENT_NAME, mode)
        .described_as(description)
        .verify(condition, |name| {
            ConditionFailure::new(format!("{name} should be true"))
        })
        .map(drop)
}

impl<T> Validator<T> {
    /// Creates a validator with an explicit mode.
    ///
    /// Prefer [`requires`] and [`ensures`].
    pub fn new(value: T, argument_name: impl Into<Cow<'static, str>>, mode: Mode) -> Self {
        Self {
            value,
            argument_name: argument_name.into(),
            mode,
            description: None,
        }
    }

    /// The value being validated.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the validated value, ending the chain.
    pub fn into_value(self) -> T {
        self.value
    }

    /// The argument name used in messages.
    pub fn argument_name(&self) -> &str {
        &self.argument_name
    }

    /// The error strategy of this validator.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Replaces the description of the next check with a custom template.
    ///
    /// `{0}` in the template is replaced with the argument name. The template
    /// only applies to the next check; an empty template is ignored.
    ///
    /// ```
    /// use conditions::requires;
    ///
    /// let err = requires(7, "a")
    ///     .described_as("{0} must be a weekday number")
    ///     .is_in_range(1, 5)
    ///     .unwrap_err();
    /// assert_eq!(err.condition(), "a must be a weekday number");
    /// ```
    pub fn described_as(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        let template = template.into();
        self.description = (!template.is_empty()).then_some(template);
        self
    }

    /// Core of every condition method.
    ///
    /// Returns the validator unchanged when `holds` is true. Otherwise calls
    /// `failure` with the argument name and converts its result to an error
    /// with [`violation`](Self::violation). Custom condition methods are
    /// written on top of this:
    ///
    /// ```
    /// use conditions::{ConditionError, ConditionFailure, Validator, requires};
    ///
    /// trait EvenCondition: Sized {
    ///     fn is_even(self) -> Result<Self, ConditionError>;
    /// }
    ///
    /// impl EvenCondition for Validator<i64> {
    ///     fn is_even(self) -> Result<Self, ConditionError> {
    ///         let holds = self.value() % 2 == 0;
    ///         self.verify(holds, |name| ConditionFailure::new(format!("{name} should be even")))
    ///     }
    /// }
    ///
    /// assert!(requires(4_i64, "n").is_even().is_ok());
    /// assert_eq!(requires(3_i64, "n").is_even().unwrap_err().condition(), "n should be even");
    /// ```
    pub fn verify<F>(mut self, holds: bool, failure: F) -> Result<Self, ConditionError>
    where
        F: FnOnce(&str) -> ConditionFailure,
    {
        if holds {
            self.description = None;
            Ok(self)
        } else {
            Err(self.violation(failure(&self.argument_name)))
        }
    }

    /// Builds the error for a failed check.
    ///
    /// A pending [`described_as`](Self::described_as) template replaces the
    /// failure's own description; the mode then picks the error variant.
    pub fn violation(&self, mut failure: ConditionFailure) -> ConditionError {
        if let Some(template) = &self.description {
            failure.condition = format_description(template, &self.argument_name);
        }
        self.mode.build_error(self.argument_name.clone(), failure)
    }
}

impl<T: Nullable> Validator<T> {
    /// Like [`verify`](Self::verify), but marks the failure as a null value
    /// when the wrapped value is null.
    ///
    /// A failing precondition on `None` then reports
    /// [`ArgumentNull`](ConditionError::ArgumentNull) instead of
    /// [`InvalidArgument`](ConditionError::InvalidArgument).
    pub fn verify_nullable<F>(self, holds: bool, failure: F) -> Result<Self, ConditionError>
    where
        F: FnOnce(&str) -> ConditionFailure,
    {
        let is_null = self.value.is_null_value();
        self.verify(holds, |name| failure(name).with_null_value(is_null))
    }

    /// Checks an arbitrary predicate over the value.
    ///
    /// ```
    /// use conditions::requires;
    ///
    /// let ok = requires("a,b", "csv").evaluate(|s| s.contains(','));
    /// assert!(ok.is_ok());
    /// ```
    pub fn evaluate<P>(self, predicate: P) -> Result<Self, ConditionError>
    where
        P: FnOnce(&T) -> bool,
    {
        let holds = predicate(&self.value);
        self.verify_nullable(holds, |name| {
            ConditionFailure::new(format!("{name} should pass the specified condition"))
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ConditionError;

    #[test]
    fn test_requires_sets_mode_and_name() {
        let v = requires(3, "count");
        assert_eq!(v.mode(), Mode::Precondition);
        assert_eq!(v.argument_name(), "count");
        assert_eq!(*v.value(), 3);
        assert_eq!(v.into_value(), 3);
    }

    #[test]
    fn test_ensures_sets_mode() {
        let v = ensures("x", "result");
        assert_eq!(v.mode(), Mode::Postcondition);
    }

    #[test]
    fn test_owned_argument_name() {
        let name = format!("item[{}]", 2);
        let v = requires(1, name);
        assert_eq!(v.argument_name(), "item[2]");
    }

    #[test]
    fn test_verify_passes_through() {
        let v = requires(1, "a").verify(true, |_| unreachable!()).unwrap();
        assert_eq!(*v.value(), 1);
    }

    #[test]
    fn test_description_applies_once() {
        let v = requires(5, "a")
            .described_as("{0} custom")
            .evaluate(|_| true)
            .unwrap();
        let err = v.evaluate(|_| false).unwrap_err();
        assert_eq!(err.condition(), "a should pass the specified condition");
    }

    #[test]
    fn test_empty_description_is_ignored() {
        let err = requires(5, "a")
            .described_as("")
            .evaluate(|_| false)
            .unwrap_err();
        assert_eq!(err.condition(), "a should pass the specified condition");
    }

    #[test]
    fn test_evaluate_fails_with_invalid_argument() {
        let err = requires(5, "a").evaluate(|v| *v > 10).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidArgument(_)));
    }

    #[test]
    fn test_evaluate_on_none_is_argument_null() {
        let err = requires(None::<u8>, "a").evaluate(Option::is_some).unwrap_err();
        assert!(matches!(err, ConditionError::ArgumentNull(_)));
        let err = requires(Some(1_u8), "a").evaluate(Option::is_none).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidArgument(_)));
    }

    #[test]
    fn test_verify_nullable_keeps_out_of_range_kind() {
        let err = requires(None::<u8>, "a")
            .verify_nullable(false, |name| ConditionFailure::out_of_range(name.to_string()))
            .unwrap_err();
        assert!(matches!(err, ConditionError::ArgumentOutOfRange(_)));
    }

    #[test]
    fn test_requires_that() {
        assert!(requires_that(true, "never shown").is_ok());
        let err = requires_that(false, "the cache must be warm").unwrap_err();
        assert!(matches!(err, ConditionError::InvalidArgument(_)));
        assert_eq!(err.condition(), "the cache must be warm");
        assert_eq!(err.argument_name(), DEFAULT_ARGUMENT_NAME);
    }

    #[test]
    fn test_ensures_that() {
        let err = ensures_that(false, "").unwrap_err();
        assert!(err.is_postcondition());
        assert_eq!(err.condition(), "value should be true");
    }
}
