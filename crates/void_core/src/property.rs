//! Serializable property accessors
//!
//! A [`SerializableProperty`] names one field inside a [`SharedObject`] by
//! path and carries the field's declared [`FieldInfo`]. It holds the target
//! weakly: when the inspected object goes away, reads return `None` and
//! writes fail with [`Error::TargetExpired`].

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::object::{SerializableObject, SharedObject};
use crate::type_registry::FieldInfo;
use crate::value::{FieldType, FromValue, Value};

/// `/`-separated path of field names from the root object
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyPath(Vec<String>);

impl PropertyPath {
    /// Parse a `/`-separated path. Empty segments are dropped.
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a field nested under this one
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Last segment, the field's own name
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

/// Typed accessor for one field of an inspected object
#[derive(Clone)]
pub struct SerializableProperty {
    target: Weak<RwLock<SerializableObject>>,
    path: PropertyPath,
    info: FieldInfo,
}

impl SerializableProperty {
    pub fn new(target: &SharedObject, path: impl Into<PropertyPath>, info: FieldInfo) -> Self {
        Self {
            target: Arc::downgrade(target),
            path: path.into(),
            info,
        }
    }

    /// Property for a top-level field, with its info inferred from the current value
    pub fn for_field(target: &SharedObject, name: &str) -> Option<Self> {
        let info = FieldInfo::infer(name, target.read().field(name)?);
        Some(Self::new(target, PropertyPath::root().join(name), info))
    }

    /// Property for a field nested inside this (object-typed) property
    pub fn child(&self, info: FieldInfo) -> Self {
        Self {
            target: self.target.clone(),
            path: self.path.join(&info.name),
            info,
        }
    }

    pub fn info(&self) -> &FieldInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn field_type(&self) -> FieldType {
        self.info.field_type
    }

    pub fn type_name(&self) -> &str {
        &self.info.type_name
    }

    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// The inspected object, if it still exists
    pub fn target(&self) -> Option<SharedObject> {
        self.target.upgrade()
    }

    /// Whether the target still exists and the path still resolves
    pub fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    /// Current value, or `None` if the target is gone or the path no longer resolves
    pub fn value(&self) -> Option<Value> {
        let target = self.target.upgrade()?;
        let guard = target.read();
        guard.resolve(self.path.segments()).cloned()
    }

    /// Current value converted to `T`
    pub fn get<T: FromValue>(&self) -> Option<T> {
        self.value().as_ref().and_then(T::from_value)
    }

    /// Current value converted to `T`, reporting why it is unavailable
    pub fn try_get<T: FromValue>(&self) -> Result<T> {
        let target = self
            .target
            .upgrade()
            .ok_or_else(|| Error::TargetExpired(self.path.to_string()))?;
        let guard = target.read();
        let value = guard
            .resolve(self.path.segments())
            .ok_or_else(|| Error::PathNotFound(self.path.to_string()))?;
        T::from_value(value).ok_or_else(|| Error::TypeMismatch {
            path: self.path.to_string(),
            expected: self.info.field_type,
            found: value.field_type(),
        })
    }

    /// Write a new value. The value must have the same shape as the one stored.
    pub fn set(&self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let target = self
            .target
            .upgrade()
            .ok_or_else(|| Error::TargetExpired(self.path.to_string()))?;
        let mut guard = target.write();
        let slot = guard
            .resolve_mut(self.path.segments())
            .ok_or_else(|| Error::PathNotFound(self.path.to_string()))?;
        if !slot.same_shape(&value) {
            return Err(Error::TypeMismatch {
                path: self.path.to_string(),
                expected: slot.field_type(),
                found: value.field_type(),
            });
        }
        log::trace!("Set property '{}'", self.path);
        *slot = value;
        Ok(())
    }
}

impl fmt::Debug for SerializableProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializableProperty")
            .field("path", &self.path.to_string())
            .field("field_type", &self.info.field_type)
            .field("alive", &(self.target.strong_count() > 0))
            .finish()
    }
}
