//! Nullable primitive properties.
//!
//! Every primitive accepts `null` in addition to its own type, so a
//! property declared without a default (`Int::default()`) reads as `null`
//! and `null` can always be assigned back.

use serde_json::Value;

use super::{type_name, Property};

fn expect(kind: &str, value: &Value) -> Result<(), String> {
    Err(format!("expected {}, got {}", kind, type_name(value)))
}

/// Integer property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Int {
    default: Option<i64>,
}

impl Int {
    pub fn new(default: i64) -> Self {
        Self {
            default: Some(default),
        }
    }
}

impl Property for Int {
    fn kind(&self) -> &'static str {
        "Int"
    }

    fn default_value(&self) -> Value {
        self.default.map_or(Value::Null, Value::from)
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null => Ok(()),
            Value::Number(n) if n.is_i64() => Ok(()),
            Value::Number(n) if n.is_u64() => Err(format!("integer {} is out of range", n)),
            _ => expect("integer", value),
        }
    }
}

/// Floating point property. Integers are accepted as given.
///
/// JSON has no NaN or infinity: assigning a non-finite `f64` through
/// `HasProps::set` converts it to `null`, which reads back as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Float {
    default: Option<f64>,
}

impl Float {
    pub fn new(default: f64) -> Self {
        Self {
            default: Some(default),
        }
    }
}

impl Property for Float {
    fn kind(&self) -> &'static str {
        "Float"
    }

    fn default_value(&self) -> Value {
        self.default.map_or(Value::Null, Value::from)
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null | Value::Number(_) => Ok(()),
            _ => expect("number", value),
        }
    }
}

/// Float restricted to the closed range `0.0..=1.0`.
///
/// Like [`Float`], a non-finite `f64` is assigned as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Percent {
    default: Option<f64>,
}

impl Percent {
    /// Creates a percent property; the default is clamped into range.
    pub fn new(default: f64) -> Self {
        Self {
            default: Some(default.clamp(0.0, 1.0)),
        }
    }
}

impl Property for Percent {
    fn kind(&self) -> &'static str {
        "Percent"
    }

    fn default_value(&self) -> Value {
        self.default.map_or(Value::Null, Value::from)
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null => Ok(()),
            Value::Number(n) => match n.as_f64() {
                Some(f) if (0.0..=1.0).contains(&f) => Ok(()),
                _ => Err(format!("expected a number between 0 and 1, got {}", n)),
            },
            _ => expect("number", value),
        }
    }
}

/// Boolean property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bool {
    default: Option<bool>,
}

impl Bool {
    pub fn new(default: bool) -> Self {
        Self {
            default: Some(default),
        }
    }
}

impl Property for Bool {
    fn kind(&self) -> &'static str {
        "Bool"
    }

    fn default_value(&self) -> Value {
        self.default.map_or(Value::Null, Value::Bool)
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null | Value::Bool(_) => Ok(()),
            _ => expect("boolean", value),
        }
    }
}

/// String property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Str {
    default: Option<String>,
}

impl Str {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: Some(default.into()),
        }
    }
}

impl Property for Str {
    fn kind(&self) -> &'static str {
        "String"
    }

    fn default_value(&self) -> Value {
        self.default.clone().map_or(Value::Null, Value::String)
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null | Value::String(_) => Ok(()),
            _ => expect("string", value),
        }
    }
}

/// Array-valued property. Elements are not constrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    default: Option<Vec<Value>>,
}

impl Array {
    pub fn new<T: Into<Value>>(default: impl IntoIterator<Item = T>) -> Self {
        Self {
            default: Some(default.into_iter().map(Into::into).collect()),
        }
    }
}

impl Property for Array {
    fn kind(&self) -> &'static str {
        "Array"
    }

    fn default_value(&self) -> Value {
        self.default.clone().map_or(Value::Null, Value::Array)
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null | Value::Array(_) => Ok(()),
            _ => expect("array", value),
        }
    }
}
