//! Resolved property tables.
//!
//! Inheritance is resolved once, when a type's table is built: the parent's
//! descriptors are copied in (sharing the same `Arc`ed properties) and the
//! type's own declarations are added on top, replacing any inherited
//! declaration of the same name. Lookups afterwards are a single hash probe.
//!
//! # Example
//!
//! ```rust
//! use hasprops::{Float, Int, PropertyTable, Str};
//!
//! let base = PropertyTable::builder("Base")
//!     .property("x", Int::new(12))
//!     .property("y", Str::new("hello"))
//!     .build();
//!
//! let child = PropertyTable::builder("Child")
//!     .extends(&base)
//!     .property("z", Float::new(2.5))
//!     .build();
//!
//! let mut names: Vec<&str> = child.names().collect();
//! names.sort_unstable();
//! assert_eq!(names, ["x", "y", "z"]);
//! assert_eq!(child.lineage(), ["Base", "Child"]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{PropertyError, PropertyResult};
use crate::property::{Property, PropertyDescriptor};

/// The complete descriptor table of one type, own and inherited.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    class_name: String,
    lineage: Vec<String>,
    descriptors: Vec<PropertyDescriptor>,
    index: HashMap<String, usize>,
}

impl PropertyTable {
    /// Starts a table for the type named `class_name`.
    pub fn builder(class_name: impl Into<String>) -> TableBuilder {
        let class_name = class_name.into();
        TableBuilder {
            lineage: Vec::new(),
            class_name,
            descriptors: Vec::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Type names from the root ancestor down to this type.
    pub fn lineage(&self) -> &[String] {
        &self.lineage
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.index.get(name).map(|&i| &self.descriptors[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Descriptors in declaration order, inherited ones first.
    pub fn descriptors(&self) -> &[PropertyDescriptor] {
        &self.descriptors
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(PropertyDescriptor::name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Like [`get`](Self::get), but reports the available names on a miss.
    pub fn lookup(&self, name: &str) -> PropertyResult<&PropertyDescriptor> {
        self.get(name).ok_or_else(|| {
            let mut available: Vec<String> = self.names().map(str::to_string).collect();
            available.sort();
            PropertyError::UnknownProperty {
                class: self.class_name.clone(),
                property: name.to_string(),
                available,
            }
        })
    }
}

/// Builder for [`PropertyTable`].
#[derive(Debug)]
pub struct TableBuilder {
    class_name: String,
    lineage: Vec<String>,
    descriptors: Vec<PropertyDescriptor>,
}

impl TableBuilder {
    /// Inherits every descriptor of `parent`.
    ///
    /// Declarations already made on this builder keep precedence over the
    /// inherited ones, so the call order does not matter.
    pub fn extends(mut self, parent: &PropertyTable) -> Self {
        let mut merged: Vec<PropertyDescriptor> = parent
            .descriptors
            .iter()
            .filter(|d| !self.descriptors.iter().any(|own| own.name() == d.name()))
            .cloned()
            .collect();
        merged.append(&mut self.descriptors);
        self.descriptors = merged;
        self.lineage = parent.lineage.clone();
        self
    }

    /// Declares (or overrides) the property `name`.
    pub fn property(mut self, name: impl Into<String>, property: impl Property + 'static) -> Self {
        let descriptor = PropertyDescriptor::new(name, Arc::new(property));
        match self
            .descriptors
            .iter_mut()
            .find(|d| d.name() == descriptor.name())
        {
            Some(existing) => *existing = descriptor,
            None => self.descriptors.push(descriptor),
        }
        self
    }

    /// Declares `name` with the zero-argument form of `P`.
    ///
    /// `property_of::<Int>("x")` is the same declaration as
    /// `property("x", Int::default())`.
    pub fn property_of<P: Property + Default + 'static>(self, name: impl Into<String>) -> Self {
        self.property(name, P::default())
    }

    pub fn build(mut self) -> PropertyTable {
        self.lineage.push(self.class_name.clone());
        let index = self
            .descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name().to_string(), i))
            .collect();
        log::trace!(
            "built property table for {} with {} properties",
            self.class_name,
            self.descriptors.len()
        );
        PropertyTable {
            class_name: self.class_name,
            lineage: self.lineage,
            descriptors: self.descriptors,
            index,
        }
    }
}
