//! # conditions
//!
//! Fluent precondition and postcondition checks.
//!
//! ## Quick Start
//!
//! ```
//! use conditions::prelude::*;
//!
//! fn withdraw(balance: u64, amount: u64) -> Result<u64, ConditionError> {
//!     requires(amount, "amount")
//!         .is_greater_than(0)?
//!         .is_less_or_equal(balance)?;
//!
//!     let remaining = balance - amount;
//!     ensures(remaining, "remaining").is_less_than(balance)?;
//!     Ok(remaining)
//! }
//!
//! assert_eq!(withdraw(100, 30), Ok(70));
//!
//! let err = withdraw(100, 130).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "amount should be less than or equal to 100. (parameter 'amount')"
//! );
//! ```
//!
//! ## Modes
//!
//! [`requires`] starts a precondition chain: failures are argument errors
//! ([`ConditionError::ArgumentNull`], [`ConditionError::ArgumentOutOfRange`],
//! [`ConditionError::InvalidEnumArgument`], [`ConditionError::InvalidArgument`]).
//! [`ensures`] starts a postcondition chain: every failure is
//! [`ConditionError::PostconditionFailed`].
//!
//! ## Custom messages
//!
//! [`Validator::described_as`] replaces the description of the next check.
//! `{0}` stands for the argument name, `{{` and `}}` for literal braces:
//!
//! ```
//! use conditions::requires;
//!
//! let err = requires(0, "retries")
//!     .described_as("{0} must be {{positive}}")
//!     .is_greater_than(0)
//!     .unwrap_err();
//! assert_eq!(err.condition(), "retries must be {positive}");
//! ```
//!
//! [`MessageFormat`] controls how a whole error is rendered and can be loaded
//! from JSON configuration.
//!
//! ## Custom conditions
//!
//! Write new condition methods on top of [`Validator::verify`], or inside an
//! `impl` block with [`condition_methods!`].

// ConditionError is returned by value on every check; the failure path is rare.
#![allow(clippy::result_large_err)]

pub mod conditions;
pub mod foundation;
mod macros;
pub mod prelude;

pub use conditions::{
    CaseLocale, Collection, CollectionConditions, RuntimeType, StrValue, StringComparison,
    StringConditions,
};
pub use foundation::{
    ConditionError, ConditionFailure, MessageFormat, Mode, Nullable, Validator, Violation,
    ViolationKind, ensures, ensures_that, requires, requires_that,
};
