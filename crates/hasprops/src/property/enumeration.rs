//! Enumerated string property.

use serde_json::Value;

use super::{type_name, Property};

/// A string property restricted to a fixed, ordered set of values.
///
/// The default is the first allowed value unless overridden with
/// [`Enum::with_default`]. An overridden default does not have to be one of
/// the allowed values: it is what an unset instance reads, but assigning it
/// explicitly is rejected like any other non-member.
///
/// # Example
///
/// ```rust
/// use hasprops::{Enum, Property};
/// use serde_json::json;
///
/// let size = Enum::new(["small", "medium", "large"]).with_default("tiny");
/// assert_eq!(size.default_value(), json!("tiny"));
/// assert!(size.validate(&json!("small")).is_ok());
/// assert!(size.validate(&json!("tiny")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    allowed: Vec<String>,
    default: Option<String>,
}

impl Enum {
    /// Creates an enum over `allowed`, in the order given.
    pub fn new<S: Into<String>>(allowed: impl IntoIterator<Item = S>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Overrides the default. The value bypasses membership validation.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Returns `true` if `value` is exactly one of the allowed values.
    pub fn contains(&self, value: &str) -> bool {
        self.allowed.iter().any(|a| a == value)
    }
}

impl Property for Enum {
    fn kind(&self) -> &'static str {
        "Enum"
    }

    fn default_value(&self) -> Value {
        self.default
            .as_ref()
            .or_else(|| self.allowed.first())
            .map_or(Value::Null, |s| Value::String(s.clone()))
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::String(s) if self.contains(s) => Ok(()),
            Value::String(_) => Err(format!("expected one of {}", self.allowed.join(", "))),
            _ => Err(format!(
                "expected one of {}, got {}",
                self.allowed.join(", "),
                type_name(value)
            )),
        }
    }
}
