//! Registry of reflected types
//!
//! Describes, per type name, the declared fields of a serializable type
//! together with their editor styling, and the type's base type. Inspectors
//! use it to enumerate fields in declaration order and to resolve custom
//! inspectors along the base-type chain, most specific type first.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Error, Result};
use crate::value::{FieldType, Value};

/// Numeric range a field is limited to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeStyle {
    pub min: f32,
    pub max: f32,
    /// Render as a slider instead of a number box
    pub slider: bool,
}

/// Increment applied when dragging or stepping a numeric field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepStyle {
    pub step: f32,
}

/// Editor styling declared on a field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldStyle {
    pub range: Option<RangeStyle>,
    pub step: Option<StepStyle>,
    /// Colors may exceed the `[0, 1]` range
    pub hdr: bool,
}

impl FieldStyle {
    pub fn is_default(&self) -> bool {
        *self == FieldStyle::default()
    }
}

/// A named enum value
#[derive(Clone, Debug, PartialEq)]
pub struct EnumVariant {
    pub name: String,
    pub value: u64,
}

/// Information about a declared field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldInfo {
    pub name: String,
    pub field_type: FieldType,
    /// Concrete type name; equals `field_type.name()` for built-in shapes
    pub type_name: String,
    pub style: FieldStyle,
    /// Attribute names applied to the field
    pub attributes: Vec<String>,
    pub enum_variants: Vec<EnumVariant>,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            type_name: field_type.name().to_string(),
            style: FieldStyle::default(),
            attributes: Vec::new(),
            enum_variants: Vec::new(),
        }
    }

    /// Describe a field from the value it currently holds
    pub fn infer(name: impl Into<String>, value: &Value) -> Self {
        Self::new(name, value.field_type()).with_type_name(value.type_name())
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_range(mut self, min: f32, max: f32, slider: bool) -> Self {
        self.style.range = Some(RangeStyle { min, max, slider });
        self
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.style.step = Some(StepStyle { step });
        self
    }

    pub fn hdr(mut self) -> Self {
        self.style.hdr = true;
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn with_variant(mut self, name: impl Into<String>, value: u64) -> Self {
        self.enum_variants.push(EnumVariant { name: name.into(), value });
        self
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }
}

/// Information about a registered type
#[derive(Clone, Debug, PartialEq)]
pub struct TypeInfo {
    pub name: String,
    pub base: Option<String>,
    pub fields: Vec<FieldInfo>,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            fields: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Central registry of reflected types
#[derive(Clone, Default)]
pub struct TypeRegistry {
    by_name: BTreeMap<String, TypeInfo>,
}

impl TypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type. Registering the same name twice is an error.
    pub fn register(&mut self, info: TypeInfo) -> Result<&mut Self> {
        if self.by_name.contains_key(&info.name) {
            return Err(Error::TypeAlreadyRegistered(info.name));
        }
        log::debug!("Registered type '{}' ({} fields)", info.name, info.fields.len());
        self.by_name.insert(info.name.clone(), info);
        Ok(self)
    }

    /// Get type info by name
    pub fn get(&self, name: &str) -> Option<&TypeInfo> {
        self.by_name.get(name)
    }

    /// Check if a type is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The type followed by each of its registered ancestors, most specific
    /// first. Unregistered names yield a chain of just themselves.
    pub fn base_chain<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
        let mut chain = vec![name];
        let mut seen = BTreeSet::from([name]);
        let mut current = name;
        while let Some(base) = self.by_name.get(current).and_then(|t| t.base.as_deref()) {
            if !seen.insert(base) {
                log::warn!("Cyclic base type chain at '{}'", base);
                break;
            }
            chain.push(base);
            current = base;
        }
        chain
    }

    /// Whether `name` is `base` or derives from it
    pub fn is_subtype_of(&self, name: &str, base: &str) -> bool {
        self.base_chain(name).contains(&base)
    }

    /// All fields of a type including inherited ones, base fields first.
    /// A derived field with the same name as a base field replaces it in place.
    pub fn all_fields(&self, name: &str) -> Result<Vec<FieldInfo>> {
        if !self.contains(name) {
            return Err(Error::TypeNotRegistered(name.to_string()));
        }
        let mut fields: Vec<FieldInfo> = Vec::new();
        for type_name in self.base_chain(name).into_iter().rev() {
            let Some(info) = self.by_name.get(type_name) else { continue };
            for field in &info.fields {
                match fields.iter_mut().find(|f| f.name == field.name) {
                    Some(existing) => *existing = field.clone(),
                    None => fields.push(field.clone()),
                }
            }
        }
        Ok(fields)
    }

    /// Iterate over all registered types
    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.by_name.values()
    }

    /// Get the number of registered types
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.by_name.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                TypeInfo::new("Component")
                    .with_field(FieldInfo::new("enabled", FieldType::Bool))
                    .with_field(FieldInfo::new("name", FieldType::String)),
            )
            .unwrap()
            .register(
                TypeInfo::new("Light")
                    .with_base("Component")
                    .with_field(FieldInfo::new("intensity", FieldType::Float).with_range(0.0, 10.0, true))
                    .with_field(FieldInfo::new("name", FieldType::String).with_attribute("ReadOnly")),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = registry();
        let err = registry.register(TypeInfo::new("Light")).unwrap_err();
        assert_eq!(err, Error::TypeAlreadyRegistered("Light".into()));
    }

    #[test]
    fn test_base_chain() {
        let registry = registry();
        assert_eq!(registry.base_chain("Light"), ["Light", "Component"]);
        assert_eq!(registry.base_chain("Unknown"), ["Unknown"]);
        assert!(registry.is_subtype_of("Light", "Component"));
        assert!(!registry.is_subtype_of("Component", "Light"));
    }

    #[test]
    fn test_inherited_fields() {
        let registry = registry();
        let fields = registry.all_fields("Light").unwrap();
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["enabled", "name", "intensity"]);
        assert!(fields[1].has_attribute("ReadOnly"));
        assert!(registry.all_fields("Unknown").is_err());
    }

    #[test]
    fn test_cyclic_chain_terminates() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeInfo::new("A").with_base("B")).unwrap();
        registry.register(TypeInfo::new("B").with_base("A")).unwrap();
        assert_eq!(registry.base_chain("A"), ["A", "B"]);
    }
}
