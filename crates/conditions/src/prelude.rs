//! Prelude module for convenient imports.
//!
//! ```
//! use conditions::prelude::*;
//!
//! fn rename(id: u32, name: &str) -> Result<(), ConditionError> {
//!     requires(id, "id").is_greater_than(0)?;
//!     requires(name, "name")
//!         .is_not_null_or_empty()?
//!         .starts_with("user-", StringComparison::Ordinal)?;
//!     Ok(())
//! }
//!
//! assert!(rename(1, "user-ada").is_ok());
//! assert!(rename(1, "ada").is_err());
//! ```

pub use crate::foundation::{
    ConditionError, ConditionFailure, MessageFormat, Mode, Nullable, Validator, Violation,
    ViolationKind, ensures, ensures_that, requires, requires_that,
};

pub use crate::conditions::{
    CaseLocale, Collection, CollectionConditions, RuntimeType, StrValue, StringComparison,
    StringConditions,
};
