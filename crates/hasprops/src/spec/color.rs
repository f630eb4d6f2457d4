//! Color spec: a data spec that recognizes color literals first.

use serde_json::{Map, Value};

use super::{field_default_pair, SpecConfig, SpecState};
use crate::colors::{color_channels, is_color_string, render_color};
use crate::property::{type_name, Property};

/// A data spec whose literals are colors.
///
/// Assigned values are classified in this order:
///
/// 1. `null`: fixed value
/// 2. a named color such as `"forestgreen"`: fixed value
/// 3. a `#RRGGBB` hex string: fixed value
/// 4. three numbers: fixed value, serialized as `rgb(r, g, b)`
/// 5. four numbers: fixed value, serialized as `rgba(r, g, b, a)`
/// 6. any other string: field reference
///
/// Named colors and field names are both strings, so the named color table
/// decides between them. The canonical dictionary never has a `units` key.
///
/// # Example
///
/// ```rust
/// use hasprops::{ColorSpec, Property};
/// use serde_json::{json, Value};
///
/// let col = ColorSpec::new("colorfield");
/// let dict = |v: Value| Value::Object(col.to_dict(Some(&v)).unwrap());
///
/// assert_eq!(dict(json!("red")), json!({"value": "red"}));
/// assert_eq!(dict(json!([128, 200, 255])), json!({"value": "rgb(128, 200, 255)"}));
/// assert_eq!(dict(json!("myfield")), json!({"field": "myfield"}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpec {
    config: SpecConfig,
}

impl ColorSpec {
    /// A color spec reading `field`, or fixed to it if `field` is itself a color.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            config: SpecConfig::new(field),
        }
    }

    /// Sets the fallback color. An RGB(A) array stays an array when read
    /// and is rendered as a CSS color string when serialized.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.config.default = Some(default.into());
        self
    }

    pub fn field(&self) -> &str {
        &self.config.field
    }

    pub fn default(&self) -> Option<&Value> {
        self.config.default.as_ref()
    }

    fn state(&self, stored: Option<&Value>) -> SpecState {
        let config = &self.config;
        match stored {
            None if is_color_string(&config.field) => {
                SpecState::literal(config, Value::String(config.field.clone()))
            }
            None => SpecState::field(config, &config.field),
            Some(Value::Null) => SpecState::literal(config, Value::Null),
            Some(Value::String(s)) if is_color_string(s) => {
                SpecState::literal(config, Value::String(s.clone()))
            }
            Some(Value::String(field)) => SpecState::field(config, field),
            Some(Value::Array(items)) => match field_default_pair(items) {
                Some((field, default)) => SpecState {
                    default: Some(default.clone()),
                    ..SpecState::field(config, field)
                },
                None => SpecState::literal(config, Value::Array(items.clone())),
            },
            Some(Value::Object(obj)) => SpecState::structured(config, obj)
                .unwrap_or_else(|_| SpecState::literal(config, Value::Object(obj.clone()))),
            Some(other) => SpecState::literal(config, other.clone()),
        }
    }
}

impl Property for ColorSpec {
    fn kind(&self) -> &'static str {
        "ColorSpec"
    }

    fn default_value(&self) -> Value {
        match &self.config.default {
            Some(default) if !is_color_string(&self.config.field) => {
                self.config.field_with_default(&self.config.field, default)
            }
            _ => Value::String(self.config.field.clone()),
        }
    }

    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Null | Value::String(_) => Ok(()),
            Value::Array(items) => {
                if color_channels(value).is_some() || field_default_pair(items).is_some() {
                    Ok(())
                } else {
                    Err(format!(
                        "expected 3 or 4 numeric channels or a [field, default] pair, got an array of {} items",
                        items.len()
                    ))
                }
            }
            Value::Object(obj) => SpecState::structured(&self.config, obj).map(|_| ()),
            _ => Err(format!(
                "expected a color or a field name, got {}",
                type_name(value)
            )),
        }
    }

    fn resolve(&self, stored: Option<&Value>) -> Value {
        let default = self.config.default.as_ref();
        match stored {
            None => self.default_value(),
            Some(Value::String(field)) if !is_color_string(field) => match default {
                Some(default) => self.config.field_with_default(field, default),
                None => Value::String(field.clone()),
            },
            Some(Value::Array(items)) => match field_default_pair(items) {
                Some((field, default)) => self.config.field_with_default(field, default),
                None => Value::Array(items.clone()),
            },
            Some(value) => value.clone(),
        }
    }

    fn to_dict(&self, stored: Option<&Value>) -> Option<Map<String, Value>> {
        Some(self.state(stored).to_dict(false, render_color))
    }
}
