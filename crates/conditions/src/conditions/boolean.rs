//! Boolean conditions
//!
//! `Option<bool>` is a nullable boolean: `None` is neither true nor false and
//! fails both checks as a null argument.

use crate::foundation::{ConditionError, ConditionFailure, Validator};

impl Validator<bool> {
    crate::condition_methods! {
        /// Checks that the value is `true`.
        fn is_true();
        rule(|value| *value)
        fail(|name| ConditionFailure::new(format!("{name} should be true")))

        /// Checks that the value is `false`.
        fn is_false();
        rule(|value| !*value)
        fail(|name| ConditionFailure::new(format!("{name} should be false")))
    }
}

impl Validator<Option<bool>> {
    /// Checks that the value is `Some(true)`.
    pub fn is_true(self) -> Result<Self, ConditionError> {
        self.expect_flag(true)
    }

    /// Checks that the value is `Some(false)`.
    pub fn is_false(self) -> Result<Self, ConditionError> {
        self.expect_flag(false)
    }

    fn expect_flag(self, expected: bool) -> Result<Self, ConditionError> {
        let value = *self.value();
        self.verify(value == Some(expected), |name| {
            ConditionFailure::new(format!("{name} should be {expected}"))
                .with_null_value(value.is_none())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::foundation::{ConditionError, requires};

    #[test]
    fn test_is_true() {
        assert!(requires(true, "a").is_true().is_ok());
        let err = requires(false, "a").is_true().unwrap_err();
        assert_eq!(err.condition(), "a should be true");
    }

    #[test]
    fn test_is_false() {
        assert!(requires(false, "a").is_false().is_ok());
        assert!(requires(true, "a").is_false().is_err());
    }

    #[test]
    fn test_nullable_boolean() {
        assert!(requires(Some(true), "a").is_true().is_ok());
        assert!(requires(Some(false), "a").is_false().is_ok());

        let err = requires(Some(true), "a").is_false().unwrap_err();
        assert!(matches!(err, ConditionError::InvalidArgument(_)));
        assert_eq!(err.condition(), "a should be false");

        let err = requires(None::<bool>, "a").is_true().unwrap_err();
        assert!(matches!(err, ConditionError::ArgumentNull(_)));
    }
}
