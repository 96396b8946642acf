//! Comparison conditions
//!
//! One generic implementation for every type with a natural ordering. The
//! checks use the type's own `PartialOrd` / `PartialEq`: exact `<`, `<=` and
//! `==`, no epsilon for floats. A `NaN` compares false with everything, so it
//! fails every positive ordering check and passes every negated one.
//!
//! `Option<T>` is ordered with `None` below every `Some`, which gives
//! nullable comparisons for free:
//!
//! ```
//! use conditions::requires;
//!
//! assert!(requires(Some(3), "x").is_in_range(Some(1), Some(5)).is_ok());
//! assert!(requires(None::<i32>, "x").is_greater_than(Some(0)).is_err());
//! ```
//!
//! The bounds have the validator's own type, so an `Option` validator takes
//! `Option` bounds: `Some(1)`, not `1`. A `None` bound is the lowest possible
//! bound.
//!
//! Ordering failures are always
//! [`ArgumentOutOfRange`](crate::ConditionError::ArgumentOutOfRange). The
//! equality checks and [`is_not_in_range`](crate::Validator::is_not_in_range)
//! report [`ArgumentNull`](crate::ConditionError::ArgumentNull) when a
//! precondition fails on `None`; their value type implements
//! [`Nullable`](crate::Nullable).

use std::fmt::Debug;

use crate::foundation::{ConditionError, ConditionFailure, Nullable, Validator};

// negated comparisons keep `NaN` on the passing side
#[allow(clippy::neg_cmp_op_on_partial_ord, clippy::nonminimal_bool)]
impl<T: PartialOrd + Debug> Validator<T> {
    crate::condition_methods! {
        /// Checks that `min <= value <= max`.
        ///
        /// Fails with [`ArgumentOutOfRange`](crate::ConditionError::ArgumentOutOfRange).
        fn is_in_range(min: T, max: T);
        rule(|value| *value >= min && *value <= max)
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should be between {min:?} and {max:?}"
        )))

        /// Checks that `value > bound`.
        fn is_greater_than(bound: T);
        rule(|value| *value > bound)
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should be greater than {bound:?}"
        )))

        /// Checks that `value > bound` does not hold.
        fn is_not_greater_than(bound: T);
        rule(|value| !(*value > bound))
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should not be greater than {bound:?}"
        )))

        /// Checks that `value >= bound`.
        fn is_greater_or_equal(bound: T);
        rule(|value| *value >= bound)
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should be greater than or equal to {bound:?}"
        )))

        /// Checks that `value >= bound` does not hold.
        fn is_not_greater_or_equal(bound: T);
        rule(|value| !(*value >= bound))
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should not be greater than or equal to {bound:?}"
        )))

        /// Checks that `value < bound`.
        fn is_less_than(bound: T);
        rule(|value| *value < bound)
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should be less than {bound:?}"
        )))

        /// Checks that `value < bound` does not hold.
        fn is_not_less_than(bound: T);
        rule(|value| !(*value < bound))
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should not be less than {bound:?}"
        )))

        /// Checks that `value <= bound`.
        fn is_less_or_equal(bound: T);
        rule(|value| *value <= bound)
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should be less than or equal to {bound:?}"
        )))

        /// Checks that `value <= bound` does not hold.
        fn is_not_less_or_equal(bound: T);
        rule(|value| !(*value <= bound))
        fail(|name| ConditionFailure::out_of_range(format!(
            "{name} should not be less than or equal to {bound:?}"
        )))
    }
}

// negated range keeps `NaN` on the passing side
#[allow(clippy::neg_cmp_op_on_partial_ord, clippy::nonminimal_bool)]
impl<T: PartialOrd + Debug + Nullable> Validator<T> {
    /// Checks that the value lies outside `[min, max]`.
    ///
    /// The exact negation of [`is_in_range`](Self::is_in_range). Fails with
    /// [`InvalidArgument`](crate::ConditionError::InvalidArgument), or
    /// [`ArgumentNull`](crate::ConditionError::ArgumentNull) for `None`.
    pub fn is_not_in_range(self, min: T, max: T) -> Result<Self, ConditionError> {
        let holds = !(*self.value() >= min && *self.value() <= max);
        self.verify_nullable(holds, |name| {
            ConditionFailure::new(format!("{name} should not be between {min:?} and {max:?}"))
        })
    }
}

impl<T: PartialEq + Debug + Nullable> Validator<T> {
    /// Checks that `value == expected`.
    pub fn is_equal_to(self, expected: T) -> Result<Self, ConditionError> {
        let holds = *self.value() == expected;
        self.verify_nullable(holds, |name| {
            ConditionFailure::new(format!("{name} should be equal to {expected:?}"))
        })
    }

    /// Checks that `value != unexpected`.
    pub fn is_not_equal_to(self, unexpected: T) -> Result<Self, ConditionError> {
        let holds = *self.value() != unexpected;
        self.verify_nullable(holds, |name| {
            ConditionFailure::new(format!("{name} should not be equal to {unexpected:?}"))
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
