//! Runtime type conditions for type-erased values
//!
//! ```
//! use std::any::Any;
//! use conditions::requires;
//!
//! let boxed: Box<dyn Any> = Box::new(42_u32);
//! assert!(requires(boxed, "payload").is_of_type::<u32>().is_ok());
//!
//! let missing: Option<Box<dyn Any>> = None;
//! assert!(requires(missing, "payload").is_not_of_type::<u32>().is_ok());
//! ```

use std::any::{Any, TypeId, type_name};

use crate::foundation::{ConditionError, ConditionFailure, Validator};

/// A possibly-null value whose concrete type is known only at runtime.
pub trait RuntimeType {
    /// The concrete type of the value, or `None` for null.
    fn runtime_type(&self) -> Option<TypeId>;
}

impl RuntimeType for &dyn Any {
    fn runtime_type(&self) -> Option<TypeId> {
        Some((**self).type_id())
    }
}

impl RuntimeType for &(dyn Any + Send) {
    fn runtime_type(&self) -> Option<TypeId> {
        Some((**self).type_id())
    }
}

impl RuntimeType for Box<dyn Any> {
    fn runtime_type(&self) -> Option<TypeId> {
        Some((**self).type_id())
    }
}

impl RuntimeType for Box<dyn Any + Send> {
    fn runtime_type(&self) -> Option<TypeId> {
        Some((**self).type_id())
    }
}

impl<R: RuntimeType> RuntimeType for Option<R> {
    fn runtime_type(&self) -> Option<TypeId> {
        self.as_ref().and_then(RuntimeType::runtime_type)
    }
}

/// Last path segment of a type name, or the full name for generic types.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}

impl<R: RuntimeType> Validator<R> {
    /// Checks that the value's concrete type is `U`. Null fails.
    pub fn is_of_type<U: Any>(self) -> Result<Self, ConditionError> {
        let actual = self.value().runtime_type();
        self.verify(actual == Some(TypeId::of::<U>()), |name| {
            ConditionFailure::new(format!(
                "{name} should be of type {}",
                short_type_name::<U>()
            ))
            .with_null_value(actual.is_none())
        })
    }

    /// Checks that the value's concrete type is not `U`. Null passes.
    pub fn is_not_of_type<U: Any>(self) -> Result<Self, ConditionError> {
        let actual = self.value().runtime_type();
        self.verify(actual != Some(TypeId::of::<U>()), |name| {
            ConditionFailure::new(format!(
                "{name} should not be of type {}",
                short_type_name::<U>()
            ))
        })
    }
}
