//! Macros for declaring condition methods with minimal boilerplate.

/// Declares chainable condition methods inside an `impl Validator<T>` block.
///
/// Each entry expands to a method that evaluates `rule` against a reference
/// to the wrapped value and, when the rule is false, builds the failure with
/// `fail`. The closure-like `fail(|name| ...)` receives the argument name.
///
/// ```rust,ignore
/// impl<T: PartialOrd + Debug> Validator<T> {
///     conditions::condition_methods! {
///         /// Checks that the value is positive.
///         fn is_above(bound: T);
///         rule(|value| *value > bound)
///         fail(|name| ConditionFailure::out_of_range(format!("{name} should be above {bound:?}")))
///     }
/// }
/// ```
#[macro_export]
macro_rules! condition_methods {
    (
        $(
            $(#[$meta:meta])*
            fn $method:ident($($arg:ident: $aty:ty),* $(,)?);
            rule(|$value:ident| $rule:expr)
            fail(|$name:ident| $failure:expr)
        )+
    ) => {
        $(
            $(#[$meta])*
            pub fn $method(self, $($arg: $aty),*) -> Result<Self, $crate::foundation::ConditionError> {
                let holds = {
                    let $value = self.value();
                    $rule
                };
                self.verify(holds, |$name| $failure)
            }
        )+
    };
}
