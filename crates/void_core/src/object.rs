//! Serializable objects
//!
//! An ordered set of named [`Value`]s tagged with a type name. Objects nest
//! through [`Value::Object`], and fields are addressed by a path of names
//! from the root object.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::value::Value;

/// An inspected object shared between its owner and the editor.
///
/// Editors only ever hold a `Weak` to it; see [`crate::SerializableProperty`].
pub type SharedObject = Arc<RwLock<SerializableObject>>;

/// A reflected object: type name plus fields in declaration order
#[derive(Clone, Debug, PartialEq)]
pub struct SerializableObject {
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl SerializableObject {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Insert a field, or replace the value of an existing one in place.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.iter_mut().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Follow a path of field names through nested objects.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let value = self.field(first.as_ref())?;
        if rest.is_empty() {
            Some(value)
        } else {
            value.as_object()?.resolve(rest)
        }
    }

    pub fn resolve_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut Value> {
        let (first, rest) = path.split_first()?;
        let value = self.field_mut(first.as_ref())?;
        if rest.is_empty() {
            Some(value)
        } else {
            value.as_object_mut()?.resolve_mut(rest)
        }
    }

    /// Wrap in a [`SharedObject`] so editors can reference it
    pub fn into_shared(self) -> SharedObject {
        Arc::new(RwLock::new(self))
    }
}
