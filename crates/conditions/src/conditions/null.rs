//! Null conditions for `Option` values

use crate::foundation::{ConditionFailure, Validator};

impl<T> Validator<Option<T>> {
    crate::condition_methods! {
        /// Checks that the value is `None`.
        fn is_null();
        rule(|value| value.is_none())
        fail(|name| ConditionFailure::new(format!("{name} should be null")))

        /// Checks that the value is `Some`.
        ///
        /// Fails with [`ArgumentNull`](crate::ConditionError::ArgumentNull)
        /// in precondition mode.
        fn is_not_null();
        rule(|value| value.is_some())
        fail(|name| ConditionFailure::new(format!("{name} should not be null"))
            .with_null_value(true))
    }
}
