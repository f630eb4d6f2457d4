//! # hasprops - declarative typed properties
//!
//! `hasprops` gives plain structs a table of typed, validated, defaulted
//! attributes, the way plotting object models describe glyphs, axes and
//! ranges. Values are `serde_json::Value`s, so anything serde can serialize
//! can be assigned and every instance serializes to JSON.
//!
//! ## Core concepts
//!
//! - [`Property`]: immutable configuration of one attribute (kind, default, validation)
//! - [`PropertyTable`]: a type's resolved descriptors, inherited ones included
//! - [`PropertyStore`]: the per-instance values; descriptors never hold any
//! - [`HasProps`]: get/set/enumerate/serialize, usually via `#[derive(HasProps)]`
//! - [`DataSpec`] and [`ColorSpec`]: a fixed value or a reference to a data field
//! - [`Theme`]: per-type property values loaded from YAML or JSON
//!
//! ## Quick start
//!
//! ```rust
//! use hasprops::prelude::*;
//! use serde_json::json;
//!
//! #[derive(HasProps, Default)]
//! #[props(x = Int::new(12), size = Enum::new(["small", "medium", "large"]).with_default("tiny"))]
//! struct Base {
//!     store: PropertyStore,
//! }
//!
//! #[derive(HasProps, Default)]
//! #[extends(Base)]
//! #[props(fill = ColorSpec::new("fill_field"), radius = DataSpec::new("r"))]
//! struct Circle {
//!     store: PropertyStore,
//! }
//!
//! let mut c = Circle::default();
//! assert_eq!(c.get("size").unwrap(), json!("tiny"));
//! assert!(c.set("size", "tiny").is_err());
//!
//! c.set("fill", (128, 200, 255)).unwrap();
//! c.set("radius", 4).unwrap();
//!
//! let fill = Circle::descriptor(Circle::FILL).unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(fill.to_dict(&c).unwrap()),
//!     json!({"value": "rgb(128, 200, 255)"})
//! );
//! assert_eq!(c.to_json()["radius"], json!({"value": 4, "units": "data"}));
//! ```

pub mod colors;
mod error;
mod has_props;
mod property;
mod spec;
mod store;
mod table;
mod theme;

pub use error::{PropertyError, PropertyResult, ThemeError};
pub use has_props::HasProps;
pub use property::{
    Array, Bool, Enum, Float, Int, Percent, Property, PropertyDescriptor, Str,
};
pub use spec::{ColorSpec, DataSpec, Units, SPEC_KEYS};
pub use store::PropertyStore;
pub use table::{PropertyTable, TableBuilder};
pub use theme::Theme;

/// Derives [`HasProps`] from `#[props(...)]` declarations.
pub use hasprops_macros::HasProps;

/// Everything needed to declare and use property-bearing types.
pub mod prelude {
    pub use crate::{
        Array, Bool, ColorSpec, DataSpec, Enum, Float, HasProps, Int, Percent, Property,
        PropertyStore, Str, Units,
    };
}

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
