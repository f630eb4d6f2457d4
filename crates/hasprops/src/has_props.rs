//! The [`HasProps`] trait: typed, validated attributes on plain structs.
//!
//! A type implements `HasProps` by exposing two things: its static
//! [`PropertyTable`] and a [`PropertyStore`] it owns. Everything else (reads,
//! validated writes, bulk assignment, enumeration and serialization) is
//! provided. The usual way to implement it is `#[derive(HasProps)]`.
//!
//! # Example
//!
//! ```rust
//! use hasprops::prelude::*;
//! use serde_json::json;
//!
//! #[derive(HasProps, Default)]
//! #[props(x = Int::new(12), y = Str::new("hello"))]
//! struct Foo {
//!     store: PropertyStore,
//! }
//!
//! let mut f = Foo::default();
//! assert_eq!(f.get("x").unwrap(), json!(12));
//! f.set("x", 18).unwrap();
//! assert_eq!(f.get_as::<i64>("x").unwrap(), 18);
//! assert!(f.set("x", "eighteen").is_err());
//! ```

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PropertyError, PropertyResult};
use crate::property::PropertyDescriptor;
use crate::store::PropertyStore;
use crate::table::PropertyTable;

/// An object whose attributes are described by a [`PropertyTable`].
pub trait HasProps {
    /// The resolved table shared by every instance of the type.
    fn property_table() -> &'static PropertyTable
    where
        Self: Sized;

    /// The same table, reachable through a trait object.
    fn table(&self) -> &'static PropertyTable;

    fn store(&self) -> &PropertyStore;

    fn store_mut(&mut self) -> &mut PropertyStore;

    /// The shared descriptor for `name`, if the type declares it.
    fn descriptor(name: &str) -> Option<&'static PropertyDescriptor>
    where
        Self: Sized,
    {
        Self::property_table().get(name)
    }

    fn class_name(&self) -> &'static str {
        self.table().class_name()
    }

    /// Names of every property, own and inherited.
    fn properties(&self) -> BTreeSet<&'static str> {
        self.table().names().collect()
    }

    /// Current value of `name`: the assigned value, or the default.
    fn get(&self, name: &str) -> PropertyResult<Value> {
        Ok(self.table().lookup(name)?.read(self.store()))
    }

    /// Reads `name` and deserializes it into `T`.
    fn get_as<T: DeserializeOwned>(&self, name: &str) -> PropertyResult<T>
    where
        Self: Sized,
    {
        let value = self.get(name)?;
        serde_json::from_value(value).map_err(|e| PropertyError::Conversion {
            property: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Validates and assigns an already converted value.
    fn set_value(&mut self, name: &str, value: Value) -> PropertyResult<()> {
        let table = self.table();
        table
            .lookup(name)?
            .write(table.class_name(), self.store_mut(), value)
    }

    /// Converts `value` with serde and assigns it.
    ///
    /// Tuples become arrays and maps become objects, so
    /// `set("color", (128, 200, 255))` assigns an RGB triple. Non-finite
    /// floats have no JSON form and are assigned as `null`.
    fn set<V: Serialize>(&mut self, name: &str, value: V) -> PropertyResult<()>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| PropertyError::InvalidValue {
            property: name.to_string(),
            value: Value::Null,
            reason: e.to_string(),
        })?;
        self.set_value(name, value)
    }

    /// Assigns several properties in order.
    ///
    /// This is an eager loop, not a transaction: it stops at the first
    /// failure and everything assigned before it stays assigned.
    fn set_many<I, K, V>(&mut self, values: I) -> PropertyResult<()>
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Serialize,
    {
        for (name, value) in values {
            self.set(name.as_ref(), value)?;
        }
        Ok(())
    }

    /// Assigns every entry of a JSON object, with the same eager semantics
    /// as [`set_many`](Self::set_many).
    fn update(&mut self, values: &Map<String, Value>) -> PropertyResult<()> {
        for (name, value) in values {
            self.set_value(name, value.clone())?;
        }
        Ok(())
    }

    /// Returns `true` once `name` has been explicitly assigned.
    fn is_set(&self, name: &str) -> bool {
        self.store().contains(name)
    }

    /// Names of the properties that have been explicitly assigned.
    fn changed_properties(&self) -> BTreeSet<&'static str> {
        let store = self.store();
        self.table().names().filter(|n| store.contains(n)).collect()
    }

    /// Every property with its current value.
    fn properties_with_values(&self) -> Map<String, Value> {
        let store = self.store();
        self.table()
            .descriptors()
            .iter()
            .map(|d| (d.name().to_string(), d.read(store)))
            .collect()
    }

    /// Serializes the whole instance.
    ///
    /// Data and color specs are written in their canonical dictionary form,
    /// other properties as their current value.
    fn to_json(&self) -> Value {
        let store = self.store();
        let props: Map<String, Value> = self
            .table()
            .descriptors()
            .iter()
            .map(|d| (d.name().to_string(), d.serialize(store)))
            .collect();
        Value::Object(props)
    }
}
