//! Error types for condition failures
//!
//! A failing check first produces a transient [`ConditionFailure`]. The
//! validator's [`Mode`](crate::foundation::Mode) then turns it into the
//! [`ConditionError`] returned to the caller.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VIOLATION KIND
// ============================================================================

/// What kind of constraint a failing check violated.
///
/// Precondition validators map this to a concrete [`ConditionError`] variant.
/// Postcondition validators ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViolationKind {
    /// Generic violation: invalid argument, or null argument when the value
    /// was null.
    #[default]
    Default,
    /// The value lies outside an allowed range.
    OutOfRange,
    /// The value is not a defined variant of an enumeration.
    InvalidEnum,
}

// ============================================================================
// CONDITION FAILURE
// ============================================================================

/// Description of a single failed check.
///
/// Built only on the failure path and consumed immediately by
/// [`Validator::violation`](crate::foundation::Validator::violation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionFailure {
    /// Human-readable description of the condition, e.g.
    /// `"a should be between 1 and 3"`.
    pub condition: String,

    /// The kind of violation.
    pub kind: ViolationKind,

    /// Optional extra sentence appended to the message.
    pub additional: Option<String>,

    /// Whether the checked value was null (`None`).
    pub value_is_null: bool,
}

impl ConditionFailure {
    /// Creates a failure of the [`ViolationKind::Default`] kind.
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            kind: ViolationKind::Default,
            additional: None,
            value_is_null: false,
        }
    }

    /// Creates an out-of-range failure.
    pub fn out_of_range(condition: impl Into<String>) -> Self {
        Self::new(condition).with_kind(ViolationKind::OutOfRange)
    }

    /// Sets the violation kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kind(mut self, kind: ViolationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Adds an extra sentence to the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_additional(mut self, additional: impl Into<String>) -> Self {
        self.additional = Some(additional.into());
        self
    }

    /// Marks whether the checked value was null.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_null_value(mut self, value_is_null: bool) -> Self {
        self.value_is_null = value_is_null;
        self
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// The payload shared by every [`ConditionError`] variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the argument that was checked.
    pub argument: Cow<'static, str>,

    /// Description of the violated condition.
    pub condition: String,

    /// Optional extra sentence.
    pub additional: Option<String>,
}

impl Violation {
    /// Full message: the condition terminated by a period, followed by the
    /// additional sentence if there is one.
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = self.condition.clone();
        if !message.ends_with(['.', '!', '?']) {
            message.push('.');
        }
        if let Some(additional) = &self.additional {
            message.push(' ');
            message.push_str(additional);
        }
        message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (parameter '{}')", self.message(), self.argument)
    }
}

// ============================================================================
// CONDITION ERROR
// ============================================================================

/// Error returned by a failing condition method.
///
/// The four argument variants come from [`requires`](crate::requires)
/// validators, [`PostconditionFailed`](Self::PostconditionFailed) from
/// [`ensures`](crate::ensures) validators.
///
/// ```
/// use conditions::{ConditionError, requires};
///
/// let err = requires(5, "count").is_in_range(1, 3).unwrap_err();
/// assert!(matches!(err, ConditionError::ArgumentOutOfRange(_)));
/// assert_eq!(err.to_string(), "count should be between 1 and 3. (parameter 'count')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConditionError {
    /// A precondition failed on a null (`None`) value.
    #[error("{0}")]
    ArgumentNull(Violation),

    /// A precondition range check failed.
    #[error("{0}")]
    ArgumentOutOfRange(Violation),

    /// A raw value did not map to a defined enumeration variant.
    #[error("{0}")]
    InvalidEnumArgument(Violation),

    /// Any other precondition failure.
    #[error("{0}")]
    InvalidArgument(Violation),

    /// A postcondition failed.
    #[error("Postcondition '{}' failed.", .0.message())]
    PostconditionFailed(Violation),
}

impl ConditionError {
    /// Returns the violation payload.
    #[must_use]
    pub fn violation(&self) -> &Violation {
        match self {
            Self::ArgumentNull(v)
            | Self::ArgumentOutOfRange(v)
            | Self::InvalidEnumArgument(v)
            | Self::InvalidArgument(v)
            | Self::PostconditionFailed(v) => v,
        }
    }

    /// Name of the argument that failed.
    #[must_use]
    pub fn argument_name(&self) -> &str {
        &self.violation().argument
    }

    /// Description of the violated condition.
    #[must_use]
    pub fn condition(&self) -> &str {
        &self.violation().condition
    }

    /// Full message without the argument name.
    #[must_use]
    pub fn message(&self) -> String {
        self.violation().message()
    }

    /// Returns true for errors raised by precondition validators.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        !self.is_postcondition()
    }

    /// Returns true for errors raised by postcondition validators.
    #[must_use]
    pub fn is_postcondition(&self) -> bool {
        matches!(self, Self::PostconditionFailed(_))
    }
}

// ============================================================================
// TESTS
// ============================================================================
