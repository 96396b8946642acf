//! Precondition / postcondition error strategy

use std::borrow::Cow;
use std::fmt;

use crate::foundation::error::{ConditionError, ConditionFailure, Violation, ViolationKind};

/// Which error strategy a [`Validator`](crate::foundation::Validator) uses.
///
/// Chosen once by [`requires`](crate::requires) or [`ensures`](crate::ensures)
/// and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Checks on arguments at method entry. Failures map to argument errors.
    Precondition,
    /// Checks on results at method exit. Failures map to
    /// [`ConditionError::PostconditionFailed`].
    Postcondition,
}

impl Mode {
    /// Maps a failed check to the error this mode reports.
    ///
    /// | mode          | kind          | null value | variant               |
    /// |---------------|---------------|------------|-----------------------|
    /// | precondition  | `OutOfRange`  | any        | `ArgumentOutOfRange`  |
    /// | precondition  | `InvalidEnum` | any        | `InvalidEnumArgument` |
    /// | precondition  | `Default`     | yes        | `ArgumentNull`        |
    /// | precondition  | `Default`     | no         | `InvalidArgument`     |
    /// | postcondition | any           | any        | `PostconditionFailed` |
    pub fn build_error(
        self,
        argument: impl Into<Cow<'static, str>>,
        failure: ConditionFailure,
    ) -> ConditionError {
        let violation = Violation {
            argument: argument.into(),
            condition: failure.condition,
            additional: failure.additional,
        };

        let error = match self {
            Self::Precondition => match failure.kind {
                ViolationKind::OutOfRange => ConditionError::ArgumentOutOfRange(violation),
                ViolationKind::InvalidEnum => ConditionError::InvalidEnumArgument(violation),
                ViolationKind::Default if failure.value_is_null => {
                    ConditionError::ArgumentNull(violation)
                }
                ViolationKind::Default => ConditionError::InvalidArgument(violation),
            },
            Self::Postcondition => ConditionError::PostconditionFailed(violation),
        };

        tracing::debug!(
            target: "conditions",
            argument = %error.argument_name(),
            mode = %self,
            kind = ?failure.kind,
            "condition violated: {}",
            error.condition()
        );

        error
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precondition => f.write_str("precondition"),
            Self::Postcondition => f.write_str("postcondition"),
        }
    }
}
