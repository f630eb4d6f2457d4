//! Data and color specs.
//!
//! A spec property holds one of several representations, chosen by the
//! shape of the assigned value:
//!
//! | Assigned | Meaning |
//! |----------|---------|
//! | number, bool, `null` | fixed value |
//! | string | field reference |
//! | `[field, default]` | field reference with an inline default |
//! | object with `field`/`value`/`default`/`units` | structured, full replace |
//!
//! Instances store exactly what was assigned. The representation is
//! resolved on demand against the property's construction-time settings,
//! which is what makes an object assignment a full replace: any key the
//! object leaves out falls back to the construction-time setting, never to
//! an earlier assignment.
//!
//! [`ColorSpec`] reorders this dispatch so that color literals win over
//! field references.

mod color;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::property::{type_name, Property};

pub use color::ColorSpec;

/// Coordinate space a spec value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Data,
    Screen,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Data => "data",
            Units::Screen => "screen",
        }
    }

    pub fn parse(s: &str) -> Option<Units> {
        match s {
            "data" => Some(Units::Data),
            "screen" => Some(Units::Screen),
            _ => None,
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keys recognized in an object assignment.
pub const SPEC_KEYS: &[&str] = &["field", "value", "default", "units"];

/// Construction-time settings shared by data and color specs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SpecConfig {
    pub(crate) field: String,
    pub(crate) default: Option<Value>,
    pub(crate) units: Units,
}

impl SpecConfig {
    fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            default: None,
            units: Units::default(),
        }
    }

    /// `{"field": field, "default": default}`, the read form of a field
    /// reference with a default.
    fn field_with_default(&self, field: &str, default: &Value) -> Value {
        let mut map = Map::new();
        map.insert("field".into(), Value::String(field.to_string()));
        map.insert("default".into(), default.clone());
        Value::Object(map)
    }
}

/// A spec's representation after resolving the stored value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SpecState {
    pub(crate) field: Option<String>,
    pub(crate) value: Option<Value>,
    pub(crate) default: Option<Value>,
    pub(crate) units: Units,
}

impl SpecState {
    fn field(config: &SpecConfig, field: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            value: None,
            default: config.default.clone(),
            units: config.units,
        }
    }

    fn literal(config: &SpecConfig, value: Value) -> Self {
        Self {
            field: None,
            value: Some(value),
            default: config.default.clone(),
            units: config.units,
        }
    }

    /// Builds the state for an object assignment.
    ///
    /// Keys left out revert to `config`, not to any earlier state.
    fn structured(config: &SpecConfig, obj: &Map<String, Value>) -> Result<Self, String> {
        if let Some(key) = obj.keys().find(|k| !SPEC_KEYS.contains(&k.as_str())) {
            return Err(format!(
                "unknown key '{}', expected {}",
                key,
                SPEC_KEYS.join(", ")
            ));
        }
        let field = match obj.get("field") {
            None => Some(config.field.clone()),
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => return Err(format!("'field' must be a string, got {}", type_name(other))),
        };
        let units = match obj.get("units") {
            None => config.units,
            Some(Value::String(s)) => Units::parse(s)
                .ok_or_else(|| format!("'units' must be data or screen, got '{}'", s))?,
            Some(other) => return Err(format!("'units' must be a string, got {}", type_name(other))),
        };
        Ok(Self {
            field,
            value: obj.get("value").cloned(),
            default: obj.get("default").cloned().or_else(|| config.default.clone()),
            units,
        })
    }

    /// Writes the canonical dictionary. A present value wins over the
    /// field; `render` maps value and default onto their wire form.
    fn to_dict(&self, with_units: bool, render: impl Fn(&Value) -> Value) -> Map<String, Value> {
        let mut map = Map::new();
        match &self.value {
            Some(value) => {
                map.insert("value".into(), render(value));
            }
            None => {
                if let Some(field) = &self.field {
                    map.insert("field".into(), Value::String(field.clone()));
                }
                if let Some(default) = &self.default {
                    map.insert("default".into(), render(default));
                }
            }
        }
        if with_units {
            map.insert("units".into(), Value::String(self.units.as_str().to_string()));
        }
        map
    }
}

/// `[field, default]` with a string first element.
pub(crate) fn field_default_pair(items: &[Value]) -> Option<(&str, &Value)> {
    match items {
        [Value::String(field), default] => Some((field.as_str(), default)),
        _ => None,
    }
}

/// A property that is either a fixed value or a reference to a data field.
///
/// # Example
///
/// ```rust
/// use hasprops::{DataSpec, Property};
/// use serde_json::json;
///
/// let x = DataSpec::new("xfield").with_default(12);
/// assert_eq!(x.resolve(None), json!({"field": "xfield", "default": 12}));
///
/// let dict = x.to_dict(Some(&json!(32))).unwrap();
/// assert_eq!(serde_json::Value::Object(dict), json!({"value": 32, "units": "data"}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataSpec {
    config: SpecConfig,
}

impl DataSpec {
    /// A spec that reads the data field `field` until assigned.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            config: SpecConfig::new(field),
        }
    }

    /// Sets the fallback used when the referenced field has no value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.config.default = Some(default.into());
        self
    }

    /// Sets the construction-time units (`data` unless overridden).
    pub fn with_units(mut self, units: Units) -> Self {
        self.config.units = units;
        self
    }

    pub fn field(&self) -> &str {
        &self.config.field
    }

    pub fn default(&self) -> Option<&Value> {
        self.config.default.as_ref()
    }

    pub fn units(&self) -> Units {
        self.config.units
    }

    pub(crate) fn state(&self, stored: Option<&Value>) -> SpecState {
        let config = &self.config;
        match stored {
            None => SpecState::field(config, &config.field),
            Some(Value::String(field)) => SpecState::field(config, field),
            Some(Value::Array(items)) => match field_default_pair(items) {
                Some((field, default)) => SpecState {
                    default: Some(default.clone()),
                    ..SpecState::field(config, field)
                },
                None => SpecState::literal(config, Value::Array(items.clone())),
            },
            // Validation only lets well-formed objects through.
            Some(Value::Object(obj)) => SpecState::structured(config, obj)
                .unwrap_or_else(|_| SpecState::literal(config, Value::Object(obj.clone()))),
            Some(literal) => SpecState::literal(config, literal.clone()),
        }
    }
}

impl Property for DataSpec {
    fn kind(&self) -> &'static str {
        "DataSpec"
    }

    fn default_value(&self) -> Value {
        match &self.config.default {
            None => Value::String(self.config.field.clone()),
            Some(default) => self.config.field_with_default(&self.config.field, default),
        }
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
            Value::Array(items) => field_default_pair(items).map(|_| ()).ok_or_else(|| {
                format!(
                    "expected a [field, default] pair, got an array of {} items",
                    items.len()
                )
            }),
            Value::Object(obj) => SpecState::structured(&self.config, obj).map(|_| ()),
        }
    }

    fn resolve(&self, stored: Option<&Value>) -> Value {
        match stored {
            None => self.default_value(),
            Some(Value::Array(items)) => match field_default_pair(items) {
                Some((field, default)) => {
                    let mut map = Map::new();
                    map.insert("field".into(), Value::String(field.to_string()));
                    map.insert("default".into(), default.clone());
                    map.insert(
                        "units".into(),
                        Value::String(self.config.units.as_str().to_string()),
                    );
                    Value::Object(map)
                }
                None => Value::Array(items.clone()),
            },
            Some(value) => value.clone(),
        }
    }

    fn to_dict(&self, stored: Option<&Value>) -> Option<Map<String, Value>> {
        Some(self.state(stored).to_dict(true, Value::clone))
    }
}
