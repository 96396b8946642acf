//! Enumeration conditions
//!
//! A raw value (an integer read from a file, a string from a request) is a
//! defined enumeration value when it converts to the enum through `TryFrom`.

use std::fmt::Debug;

use crate::conditions::types::short_type_name;
use crate::foundation::{ConditionError, ConditionFailure, Validator, ViolationKind};

impl<T: Clone + Debug> Validator<T> {
    /// Checks that the value converts to a variant of `E`.
    ///
    /// Fails with
    /// [`InvalidEnumArgument`](crate::ConditionError::InvalidEnumArgument).
    ///
    /// ```
    /// use conditions::{ConditionError, requires};
    ///
    /// #[derive(Debug)]
    /// enum Level { Low, High }
    ///
    /// impl TryFrom<u8> for Level {
    ///     type Error = ();
    ///     fn try_from(raw: u8) -> Result<Self, ()> {
    ///         match raw {
    ///             0 => Ok(Level::Low),
    ///             1 => Ok(Level::High),
    ///             _ => Err(()),
    ///         }
    ///     }
    /// }
    ///
    /// assert!(requires(1_u8, "level").is_defined_as::<Level>().is_ok());
    /// let err = requires(7_u8, "level").is_defined_as::<Level>().unwrap_err();
    /// assert!(matches!(err, ConditionError::InvalidEnumArgument(_)));
    /// assert_eq!(
    ///     err.message(),
    ///     "level should be a defined Level value. The actual value is 7."
    /// );
    /// ```
    pub fn is_defined_as<E: TryFrom<T>>(self) -> Result<Self, ConditionError> {
        let holds = E::try_from(self.value().clone()).is_ok();
        let actual = (!holds).then(|| format!("The actual value is {:?}.", self.value()));
        self.verify(holds, |name| {
            let failure = ConditionFailure::new(format!(
                "{name} should be a defined {} value",
                short_type_name::<E>()
            ))
            .with_kind(ViolationKind::InvalidEnum);
            match actual {
                Some(actual) => failure.with_additional(actual),
                None => failure,
            }
        })
    }
}
