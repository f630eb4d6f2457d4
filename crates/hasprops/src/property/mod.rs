//! Typed property kinds and the descriptor that binds them to a name.
//!
//! A [`Property`] is immutable configuration: a kind, a default and a
//! validator. It never holds instance data. Values live in each instance's
//! [`PropertyStore`](crate::PropertyStore) and are handed to the property
//! only to be resolved or serialized.
//!
//! - [`Int`], [`Float`], [`Bool`], [`Str`], [`Array`], [`Percent`]: nullable primitives
//! - [`Enum`]: a fixed set of allowed strings

mod enumeration;
mod primitive;

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{PropertyError, PropertyResult};
use crate::has_props::HasProps;
use crate::store::PropertyStore;

pub use enumeration::Enum;
pub use primitive::{Array, Bool, Float, Int, Percent, Str};

/// Configuration of one typed attribute, shared by every instance.
pub trait Property: fmt::Debug + Send + Sync {
    /// Short kind name used in messages, e.g. `"Int"`.
    fn kind(&self) -> &'static str;

    /// The value an instance reads before anything is assigned.
    fn default_value(&self) -> Value;

    /// Checks a candidate for assignment, returning the rejection reason.
    fn validate(&self, value: &Value) -> Result<(), String>;

    /// Resolves the instance-facing value from what the instance stores.
    fn resolve(&self, stored: Option<&Value>) -> Value {
        stored.cloned().unwrap_or_else(|| self.default_value())
    }

    /// Canonical wire dictionary for spec properties; `None` for plain kinds.
    fn to_dict(&self, _stored: Option<&Value>) -> Option<Map<String, Value>> {
        None
    }

    /// The value written by whole-instance serialization.
    fn serialize(&self, stored: Option<&Value>) -> Value {
        match self.to_dict(stored) {
            Some(dict) => Value::Object(dict),
            None => self.resolve(stored),
        }
    }
}

/// A property bound to its name inside a [`PropertyTable`](crate::PropertyTable).
///
/// Descriptors are shared (by `Arc`) between a type's table and the tables
/// of every type that extends it.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    name: String,
    property: Arc<dyn Property>,
}

impl PropertyDescriptor {
    pub(crate) fn new(name: impl Into<String>, property: Arc<dyn Property>) -> Self {
        Self {
            name: name.into(),
            property,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property(&self) -> &dyn Property {
        self.property.as_ref()
    }

    /// Reads the property on `obj`. Never writes to the instance.
    pub fn get(&self, obj: &dyn HasProps) -> Value {
        self.read(obj.store())
    }

    /// Validates and assigns `value` on `obj`.
    ///
    /// On failure the instance is left untouched.
    pub fn set(&self, obj: &mut dyn HasProps, value: Value) -> PropertyResult<()> {
        let class_name = obj.class_name();
        self.write(class_name, obj.store_mut(), value)
    }

    /// Canonical dictionary of the property's state on `obj`.
    ///
    /// Returns `None` for properties that are not data or color specs.
    pub fn to_dict(&self, obj: &dyn HasProps) -> Option<Map<String, Value>> {
        self.property.to_dict(obj.store().get(&self.name))
    }

    pub(crate) fn read(&self, store: &PropertyStore) -> Value {
        self.property.resolve(store.get(&self.name))
    }

    pub(crate) fn write(
        &self,
        class_name: &str,
        store: &mut PropertyStore,
        value: Value,
    ) -> PropertyResult<()> {
        self.property
            .validate(&value)
            .map_err(|reason| PropertyError::invalid(&self.name, &value, reason))?;
        log::debug!(
            "{}.{} = {} ({})",
            class_name,
            self.name,
            value,
            self.property.kind()
        );
        store.insert(&self.name, value);
        Ok(())
    }

    pub(crate) fn serialize(&self, store: &PropertyStore) -> Value {
        self.property.serialize(store.get(&self.name))
    }
}

/// Describes a JSON value's type for rejection messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
