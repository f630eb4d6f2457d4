//! Themes: property values loaded from documents and applied by type name.
//!
//! A theme document maps type names to property values:
//!
//! ```yaml
//! attrs:
//!   Glyph:
//!     line_color: forestgreen
//!   Circle:
//!     radius: 4
//! ```
//!
//! Applying a theme walks the instance's lineage from the root ancestor
//! down to its own type, so a section for a subtype overrides a section for
//! its parent.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{PropertyResult, ThemeError};
use crate::has_props::HasProps;

/// A named collection of per-type property values.
///
/// # Example
///
/// ```rust
/// use hasprops::prelude::*;
/// use hasprops::Theme;
///
/// #[derive(HasProps, Default)]
/// #[props(x = Int::new(12), label = Str::new("hello"))]
/// struct Foo {
///     store: PropertyStore,
/// }
///
/// let theme = Theme::from_yaml("attrs:\n  Foo:\n    x: 20\n").unwrap();
/// let mut f = Foo::default();
/// theme.apply_to(&mut f).unwrap();
/// assert_eq!(f.get_as::<i64>("x").unwrap(), 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    attrs: BTreeMap<String, Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeDocument {
    #[serde(default)]
    attrs: BTreeMap<String, Map<String, Value>>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value for `property` on `class`, returning the theme for chaining.
    pub fn add(mut self, class: &str, property: &str, value: impl Into<Value>) -> Self {
        self.attrs
            .entry(class.to_string())
            .or_default()
            .insert(property.to_string(), value.into());
        self
    }

    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let doc: ThemeDocument = serde_yaml::from_str(source)?;
        Ok(Self { attrs: doc.attrs })
    }

    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ThemeError> {
        if !value.is_object() {
            return Err(ThemeError::Shape(
                "a theme document must be a mapping".to_string(),
            ));
        }
        let doc: ThemeDocument = serde_json::from_value(value)?;
        Ok(Self { attrs: doc.attrs })
    }

    /// The values set for exactly `class` (ancestors not included).
    pub fn attrs_for(&self, class: &str) -> Option<&Map<String, Value>> {
        self.attrs.get(class)
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Assigns the theme's values to `obj`, root ancestor first.
    ///
    /// Assignments are eager: on the first invalid value the error is
    /// returned and earlier assignments stay in place.
    pub fn apply_to(&self, obj: &mut dyn HasProps) -> PropertyResult<()> {
        let table = obj.table();
        for class in table.lineage() {
            if let Some(values) = self.attrs.get(class) {
                log::debug!(
                    "applying {} theme values for {} to {}",
                    values.len(),
                    class,
                    table.class_name()
                );
                obj.update(values)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Int, Str};
    use crate::store::PropertyStore;
    use crate::table::PropertyTable;
    use crate::PropertyError;
    use once_cell::sync::Lazy;
    use serde_json::json;

    static BASE: Lazy<PropertyTable> = Lazy::new(|| {
        PropertyTable::builder("Base")
            .property("x", Int::new(1))
            .property("label", Str::new("base"))
            .build()
    });

    static LEAF: Lazy<PropertyTable> =
        Lazy::new(|| PropertyTable::builder("Leaf").extends(&BASE).build());

    #[derive(Default)]
    struct Leaf {
        store: PropertyStore,
    }

    impl HasProps for Leaf {
        fn property_table() -> &'static PropertyTable {
            &LEAF
        }
        fn table(&self) -> &'static PropertyTable {
            &LEAF
        }
        fn store(&self) -> &PropertyStore {
            &self.store
        }
        fn store_mut(&mut self) -> &mut PropertyStore {
            &mut self.store
        }
    }

    #[test]
    fn test_theme_add() {
        let theme = Theme::new().add("Base", "x", 3).add("Base", "label", "themed");
        assert_eq!(theme.attrs_for("Base").unwrap().len(), 2);
        assert!(theme.attrs_for("Leaf").is_none());
    }

    #[test]
    fn test_theme_default_is_empty() {
        assert!(Theme::default().is_empty());
        assert!(Theme::from_yaml("{}").unwrap().is_empty());
    }

    #[test]
    fn test_subtype_section_wins() {
        let theme = Theme::from_yaml(
            "attrs:\n  Leaf:\n    x: 30\n  Base:\n    x: 10\n    label: from-base\n",
        )
        .unwrap();
        let mut leaf = Leaf::default();
        theme.apply_to(&mut leaf).unwrap();
        assert_eq!(leaf.get("x").unwrap(), json!(30));
        assert_eq!(leaf.get("label").unwrap(), json!("from-base"));
    }

    #[test]
    fn test_from_json() {
        let theme = Theme::from_json(r#"{"attrs": {"Base": {"x": 5}}}"#).unwrap();
        assert_eq!(theme.attrs_for("Base").unwrap()["x"], json!(5));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            Theme::from_value(json!([1, 2])),
            Err(ThemeError::Shape(_))
        ));
        assert!(matches!(
            Theme::from_json(r#"{"styles": {}}"#),
            Err(ThemeError::Json(_))
        ));
        assert!(matches!(
            Theme::from_yaml("attrs: [1, 2]"),
            Err(ThemeError::Yaml(_))
        ));
    }

    #[test]
    fn test_apply_stops_on_invalid_value() {
        let theme = Theme::new().add("Base", "x", "not a number");
        let mut leaf = Leaf::default();
        let err = theme.apply_to(&mut leaf).unwrap_err();
        assert!(matches!(err, PropertyError::InvalidValue { .. }));
        assert!(!leaf.is_set("x"));
    }
}
