//! Core types of the condition system
//!
//! - **[`Validator`]**: the value under validation, created by [`requires`]
//!   or [`ensures`]
//! - **[`Mode`]**: precondition or postcondition error strategy
//! - **[`Nullable`]**: which values count as null
//! - **Errors**: [`ConditionFailure`] (transient) and [`ConditionError`]
//! - **Messages**: description templates and [`MessageFormat`]
//!
//! # Architecture
//!
//! Every condition method follows the same three steps:
//!
//! 1. evaluate a predicate over the wrapped value;
//! 2. on failure, describe the condition (`"a should be between 1 and 3"`),
//!    or use the caller's [`Validator::described_as`] template instead;
//! 3. hand a [`ConditionFailure`] to [`Mode::build_error`], which picks the
//!    concrete [`ConditionError`] variant.
//!
//! Condition families themselves live in [`crate::conditions`].

pub mod error;
pub mod message;
pub mod mode;
pub mod nullable;
pub mod validator;

pub use error::{ConditionError, ConditionFailure, Violation, ViolationKind};
pub use message::{ARGUMENT_PLACEHOLDER, MessageFormat, format_description};
pub use mode::Mode;
pub use nullable::Nullable;
pub use validator::{
    DEFAULT_ARGUMENT_NAME, Validator, ensures, ensures_that, requires, requires_that,
};
