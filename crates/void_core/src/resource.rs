//! Resource references
//!
//! Fields hold resources as loaded [`ResourceHandle`]s. Editor widgets deal in
//! weak [`ResourceRef`]s (a UUID) that must be resolved through a
//! [`ResourceLoader`] before they can be written into a field.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A weak, unresolved reference to a resource by UUID.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    uuid: String,
}

impl ResourceRef {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }

    /// A reference to nothing
    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.uuid.is_empty()
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "None")
        } else {
            write!(f, "{}", self.uuid)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ResourceData {
    uuid: String,
    name: String,
    type_name: String,
}

/// A loaded resource. Cheap to clone; equality is by identity fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceHandle(Arc<ResourceData>);

impl ResourceHandle {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self(Arc::new(ResourceData {
            uuid: uuid.into(),
            name: name.into(),
            type_name: type_name.into(),
        }))
    }

    pub fn uuid(&self) -> &str {
        &self.0.uuid
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn type_name(&self) -> &str {
        &self.0.type_name
    }

    /// Downgrade to a weak reference
    pub fn to_ref(&self) -> ResourceRef {
        ResourceRef::new(self.uuid())
    }
}

/// Resolves weak references into loaded resources
pub trait ResourceLoader: Send + Sync {
    /// Load the referenced resource. Returns `None` for null references and
    /// for UUIDs the loader does not know.
    fn load(&self, reference: &ResourceRef) -> Option<ResourceHandle>;
}

/// In-memory resource loader keyed by UUID
#[derive(Default)]
pub struct ResourceCache {
    resources: RwLock<HashMap<String, ResourceHandle>>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, handle: ResourceHandle) {
        self.resources.write().insert(handle.uuid().to_string(), handle);
    }

    pub fn remove(&self, uuid: &str) -> Option<ResourceHandle> {
        self.resources.write().remove(uuid)
    }

    pub fn len(&self) -> usize {
        self.resources.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.read().is_empty()
    }
}

impl ResourceLoader for ResourceCache {
    fn load(&self, reference: &ResourceRef) -> Option<ResourceHandle> {
        if reference.is_null() {
            return None;
        }
        let handle = self.resources.read().get(reference.uuid()).cloned();
        if handle.is_none() {
            log::warn!("Unable to load resource {}", reference);
        }
        handle
    }
}

impl fmt::Debug for ResourceCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCache")
            .field("resources", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_load() {
        let cache = ResourceCache::new();
        let tex = ResourceHandle::new("a1", "Bricks", "Texture");
        cache.insert(tex.clone());

        assert_eq!(cache.load(&ResourceRef::new("a1")), Some(tex.clone()));
        assert_eq!(cache.load(&tex.to_ref()), Some(tex));
        assert_eq!(cache.load(&ResourceRef::new("missing")), None);
        assert_eq!(cache.load(&ResourceRef::null()), None);
    }
}
