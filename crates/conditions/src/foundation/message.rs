//! Message templates and rendering
//!
//! Two kinds of templates live here:
//!
//! - **condition descriptions** attached with
//!   [`Validator::described_as`](crate::foundation::Validator::described_as),
//!   where `{0}` stands for the argument name;
//! - **[`MessageFormat`]**, the configurable layout used to turn a
//!   [`ConditionError`] into a final string.

use serde::{Deserialize, Serialize};

use crate::foundation::error::ConditionError;

/// Placeholder for the argument name in a condition description.
pub const ARGUMENT_PLACEHOLDER: &str = "{0}";

/// Substitutes the argument name into a condition description.
///
/// `{0}` is replaced with `argument_name`; `{{` and `}}` produce literal
/// braces. Any other brace sequence is copied unchanged.
///
/// ```
/// use conditions::foundation::format_description;
///
/// assert_eq!(format_description("abc {0} xyz", "a"), "abc a xyz");
/// assert_eq!(format_description("{{0}} is {0}", "a"), "{0} is a");
/// ```
pub fn format_description(template: &str, argument_name: &str) -> String {
    let mut out = String::with_capacity(template.len() + argument_name.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix(ARGUMENT_PLACEHOLDER) {
            out.push_str(argument_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else {
            // lone brace, both are single-byte
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// MESSAGE FORMAT
// ============================================================================

/// Layout of rendered error messages.
///
/// Templates may use `{message}` (condition plus additional sentence),
/// `{condition}` (condition only) and `{argument}` (argument name).
/// Missing fields fall back to [`MessageFormat::default`], which matches the
/// `Display` implementation of [`ConditionError`].
///
/// ```
/// use conditions::{MessageFormat, requires};
///
/// let format = MessageFormat::from_json_str(
///     r#"{ "precondition": "{argument}: {message}" }"#,
/// ).unwrap();
///
/// let err = requires(0, "count").is_greater_than(0).unwrap_err();
/// assert_eq!(format.render(&err), "count: count should be greater than 0.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageFormat {
    /// Template for errors from precondition validators.
    pub precondition: String,

    /// Template for errors from postcondition validators.
    pub postcondition: String,
}

impl Default for MessageFormat {
    fn default() -> Self {
        Self {
            precondition: "{message} (parameter '{argument}')".to_string(),
            postcondition: "Postcondition '{message}' failed.".to_string(),
        }
    }
}

impl MessageFormat {
    /// Two-line layout with the argument name on its own line:
    ///
    /// ```text
    /// a should end with 'test me'.
    /// Parameter name: a
    /// ```
    #[must_use]
    pub fn multiline() -> Self {
        Self {
            precondition: "{message}\nParameter name: {argument}".to_string(),
            ..Self::default()
        }
    }

    /// Loads a format from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a format from an already parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Renders an error with this layout.
    #[must_use]
    pub fn render(&self, error: &ConditionError) -> String {
        let template = if error.is_postcondition() {
            &self.postcondition
        } else {
            &self.precondition
        };

        let violation = error.violation();
        template
            .replace("{message}", &violation.message())
            .replace("{condition}", &violation.condition)
            .replace("{argument}", &violation.argument)
    }
}

// ============================================================================
// TESTS
// ============================================================================
