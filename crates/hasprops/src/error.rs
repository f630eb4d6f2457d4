//! Property and theme errors.

use serde_json::Value;
use thiserror::Error;

/// Error returned when reading or assigning a property fails.
///
/// A failed assignment never touches the instance: the stored value for
/// the property is the same as before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// The candidate value failed the property's type or shape validation.
    #[error("invalid value {value} for property '{property}': {reason}")]
    InvalidValue {
        property: String,
        value: Value,
        reason: String,
    },
    /// The name is not declared on the type or any of its ancestors.
    #[error("unknown property '{property}' on {class}. Available: {}", available.join(", "))]
    UnknownProperty {
        class: String,
        property: String,
        available: Vec<String>,
    },
    /// A typed read could not convert the current value.
    #[error("cannot convert property '{property}': {reason}")]
    Conversion { property: String, reason: String },
}

impl PropertyError {
    pub(crate) fn invalid(property: &str, value: &Value, reason: impl Into<String>) -> Self {
        PropertyError::InvalidValue {
            property: property.to_string(),
            value: value.clone(),
            reason: reason.into(),
        }
    }
}

/// Result type for property operations.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Error returned when a theme document cannot be loaded.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document parsed but does not have the `attrs` layout.
    #[error("malformed theme: {0}")]
    Shape(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_value_display() {
        let err = PropertyError::invalid("y", &json!("tiny"), "expected one of small, medium");
        let msg = err.to_string();
        assert!(msg.contains("\"tiny\""));
        assert!(msg.contains("'y'"));
        assert!(msg.contains("small, medium"));
    }

    #[test]
    fn test_unknown_property_display() {
        let err = PropertyError::UnknownProperty {
            class: "Foo".to_string(),
            property: "q".to_string(),
            available: vec!["x".to_string(), "y".to_string()],
        };
        assert_eq!(err.to_string(), "unknown property 'q' on Foo. Available: x, y");
    }

    #[test]
    fn test_theme_shape_display() {
        let err = ThemeError::Shape("'attrs' must be a mapping".to_string());
        assert!(err.to_string().contains("attrs"));
    }
}
