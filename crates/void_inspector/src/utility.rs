//! Resolution of custom inspectors and inspectables.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use void_core::{FieldInfo, TypeRegistry};

use crate::inspectable::{FieldBase, InspectableField, RadianInspectable};
use crate::inspector::{GenericInspector, Inspector, PlainTextInspector, PLAIN_TEXT_TYPE};

/// Creates a custom inspector
pub type InspectorFactory = Arc<dyn Fn() -> Box<dyn Inspector> + Send + Sync>;

/// Creates a custom inspectable field from its field data
pub type InspectableFactory = Arc<dyn Fn(FieldBase) -> Box<dyn InspectableField> + Send + Sync>;

/// Registry deciding which inspector shows a type and which inspectable
/// shows a field.
///
/// Lookups walk the type's base chain, most specific type first, so a custom
/// registration for a base type also covers its subtypes. Anything without
/// a custom registration falls back to [`GenericInspector`] or to the
/// built-in field for its [`FieldType`](void_core::FieldType).
#[derive(Default)]
pub struct InspectorUtility {
    inspectors: HashMap<String, InspectorFactory>,
    inspectables: HashMap<String, InspectableFactory>,
    attribute_inspectables: HashMap<String, InspectableFactory>,
}

impl InspectorUtility {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the editor's built-in custom inspectors: degrees
    /// editing for `Radian` and the preview for `PlainText`.
    pub fn with_defaults() -> Self {
        let mut utility = Self::new();
        utility
            .register_inspectable("Radian", |base| Box::new(RadianInspectable::new(base)))
            .register_inspector(PLAIN_TEXT_TYPE, || Box::new(PlainTextInspector::new()));
        utility
    }

    /// Use `factory` to inspect objects of `type_name` and its subtypes.
    pub fn register_inspector<F>(&mut self, type_name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Inspector> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        if self.inspectors.insert(type_name.clone(), Arc::new(factory)).is_some() {
            log::warn!("Replacing custom inspector for '{}'", type_name);
        }
        self
    }

    /// Use `factory` for fields whose type is `type_name` or a subtype.
    pub fn register_inspectable<F>(&mut self, type_name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(FieldBase) -> Box<dyn InspectableField> + Send + Sync + 'static,
    {
        let type_name = type_name.into();
        if self.inspectables.insert(type_name.clone(), Arc::new(factory)).is_some() {
            log::warn!("Replacing custom inspectable for '{}'", type_name);
        }
        self
    }

    /// Use `factory` for fields carrying `attribute`, whatever their type.
    pub fn register_attribute_inspectable<F>(&mut self, attribute: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(FieldBase) -> Box<dyn InspectableField> + Send + Sync + 'static,
    {
        let attribute = attribute.into();
        if self.attribute_inspectables.insert(attribute.clone(), Arc::new(factory)).is_some() {
            log::warn!("Replacing custom inspectable for attribute '{}'", attribute);
        }
        self
    }

    /// The custom inspector for `type_name`, if one applies
    pub fn custom_inspector(&self, type_name: &str, types: &TypeRegistry) -> Option<Box<dyn Inspector>> {
        types
            .base_chain(type_name)
            .into_iter()
            .find_map(|name| self.inspectors.get(name))
            .map(|factory| factory())
    }

    /// Inspector for objects of `type_name`: the most specific custom
    /// inspector if any is registered, a [`GenericInspector`] otherwise.
    pub fn get_inspector(&self, type_name: &str, types: &TypeRegistry) -> Box<dyn Inspector> {
        match self.custom_inspector(type_name, types) {
            Some(inspector) => {
                log::debug!("Using {} for '{}'", inspector.name(), type_name);
                inspector
            }
            None => Box::new(GenericInspector::new()),
        }
    }

    pub fn has_custom_inspector(&self, type_name: &str, types: &TypeRegistry) -> bool {
        types
            .base_chain(type_name)
            .into_iter()
            .any(|name| self.inspectors.contains_key(name))
    }

    /// Custom inspectable factory for a field. Attributes on the field win
    /// over its type.
    pub fn custom_inspectable(&self, info: &FieldInfo, types: &TypeRegistry) -> Option<InspectableFactory> {
        info.attributes
            .iter()
            .find_map(|a| self.attribute_inspectables.get(a))
            .or_else(|| {
                types
                    .base_chain(&info.type_name)
                    .into_iter()
                    .find_map(|name| self.inspectables.get(name))
            })
            .cloned()
    }
}

impl fmt::Debug for InspectorUtility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectorUtility")
            .field("inspectors", &self.inspectors.keys().collect::<Vec<_>>())
            .field("inspectables", &self.inspectables.keys().collect::<Vec<_>>())
            .field("attribute_inspectables", &self.attribute_inspectables.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use void_core::{FieldType, TypeInfo};

    #[test]
    fn test_generic_fallback() {
        let utility = InspectorUtility::new();
        let types = TypeRegistry::new();
        assert_eq!(utility.get_inspector("Light", &types).name(), "GenericInspector");
        assert!(!utility.has_custom_inspector("Light", &types));
    }

    #[test]
    fn test_custom_inspector_covers_subtypes() {
        let mut types = TypeRegistry::new();
        types
            .register(TypeInfo::new("Resource"))
            .unwrap()
            .register(TypeInfo::new(PLAIN_TEXT_TYPE).with_base("Resource"))
            .unwrap()
            .register(TypeInfo::new("ShaderSource").with_base(PLAIN_TEXT_TYPE))
            .unwrap();

        let utility = InspectorUtility::with_defaults();
        assert_eq!(utility.get_inspector("ShaderSource", &types).name(), "PlainTextInspector");
        assert_eq!(utility.get_inspector("Resource", &types).name(), "GenericInspector");
    }

    #[test]
    fn test_exact_type_beats_base() {
        let mut types = TypeRegistry::new();
        types
            .register(TypeInfo::new("ShaderSource").with_base(PLAIN_TEXT_TYPE))
            .unwrap();

        let mut utility = InspectorUtility::with_defaults();
        utility.register_inspector("ShaderSource", || Box::new(GenericInspector::new()));
        assert_eq!(utility.get_inspector("ShaderSource", &types).name(), "GenericInspector");
    }

    #[test]
    fn test_attribute_wins_over_type() {
        let mut utility = InspectorUtility::with_defaults();
        utility.register_attribute_inspectable("degrees", |base| Box::new(RadianInspectable::new(base)));
        let types = TypeRegistry::new();

        let tagged = FieldInfo::new("pitch", FieldType::Float).with_attribute("degrees");
        assert!(utility.custom_inspectable(&tagged, &types).is_some());

        let plain = FieldInfo::new("pitch", FieldType::Float);
        assert!(utility.custom_inspectable(&plain, &types).is_none());

        let radian = FieldInfo::new("yaw", FieldType::Object).with_type_name("Radian");
        assert!(utility.custom_inspectable(&radian, &types).is_some());
    }
}
