//! # void_core - Editor Reflection Core
//!
//! The data model every editor inspector works against:
//! - **Values**: typed payloads tagged with a [`FieldType`]
//! - **Objects**: ordered, nestable [`SerializableObject`]s shared as [`SharedObject`]
//! - **Properties**: path-addressed, weakly-held accessors ([`SerializableProperty`])
//! - **Types**: a [`TypeRegistry`] describing declared fields, styles and base types
//! - **Resources**: weak [`ResourceRef`]s resolved through a [`ResourceLoader`]
//!
//! A property never keeps its target alive. Once the inspected object is
//! dropped every read returns `None` and every write fails with
//! [`Error::TargetExpired`], which callers in the per-frame GUI path treat as
//! a no-op.

pub mod error;
pub mod id;
pub mod value;
pub mod distribution;
pub mod object;
pub mod type_registry;
pub mod property;
pub mod resource;

pub use error::*;
pub use id::*;
pub use value::*;
pub use distribution::*;
pub use object::*;
pub use type_registry::*;
pub use property::*;
pub use resource::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::id::{Id, IdGenerator};
    pub use crate::value::{FieldType, FromValue, Value};
    pub use crate::distribution::{DistributionKind, RangeComponent, Vector3Distribution};
    pub use crate::object::{SerializableObject, SharedObject};
    pub use crate::type_registry::{FieldInfo, FieldStyle, TypeInfo, TypeRegistry};
    pub use crate::property::{PropertyPath, SerializableProperty};
    pub use crate::resource::{ResourceCache, ResourceHandle, ResourceLoader, ResourceRef};
}
