//! Condition families
//!
//! Each family adds chainable methods to [`Validator`](crate::Validator):
//!
//! - **compare**: ordering and equality for any `PartialOrd` / `PartialEq`
//!   type, `Option` included
//! - **null**: `is_null` / `is_not_null` on `Option`
//! - **boolean**: `is_true` / `is_false`
//! - **enums**: `is_defined_as::<E>()`
//! - **types**: runtime type checks on `dyn Any`
//! - **string**: [`StringConditions`] with an explicit [`StringComparison`]
//! - **collection**: [`CollectionConditions`]
//!
//! String and collection checks share method names (`is_empty`,
//! `has_length`, `contains`) and are therefore extension traits; import them
//! with [`prelude`](crate::prelude).

pub mod boolean;
pub mod collection;
pub mod compare;
pub mod enums;
pub mod null;
pub mod string;
pub mod types;

pub use collection::{Collection, CollectionConditions};
pub use string::{CaseLocale, StrValue, StringComparison, StringConditions};
pub use types::RuntimeType;
