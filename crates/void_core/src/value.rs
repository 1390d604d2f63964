//! Typed field values

use void_math::{Color, Radian};

use crate::distribution::Vector3Distribution;
use crate::object::SerializableObject;
use crate::resource::ResourceHandle;

/// Category of a serialized field's value shape.
///
/// Decides which inspectable field variant displays the field when no
/// custom inspectable is registered for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Float,
    Bool,
    String,
    Color,
    Enum,
    Resource,
    Object,
    Vector3Distribution,
}

impl FieldType {
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Int => "Int",
            FieldType::Float => "Float",
            FieldType::Bool => "Bool",
            FieldType::String => "String",
            FieldType::Color => "Color",
            FieldType::Enum => "Enum",
            FieldType::Resource => "Resource",
            FieldType::Object => "Object",
            FieldType::Vector3Distribution => "Vector3Distribution",
        }
    }
}

/// A serialized field value.
///
/// `Radian` is a struct-shaped value: its [`FieldType`] is `Object` and it is
/// told apart from plain objects by [`Value::type_name`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Bool(bool),
    String(String),
    Color(Color),
    /// Enum ordinal, stored losslessly as an unsigned 64-bit value
    Enum(u64),
    Resource(Option<ResourceHandle>),
    Radian(Radian),
    Vector3Distribution(Vector3Distribution),
    Object(SerializableObject),
}

impl Value {
    /// The field category this value belongs to
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Int(_) => FieldType::Int,
            Value::Float(_) => FieldType::Float,
            Value::Bool(_) => FieldType::Bool,
            Value::String(_) => FieldType::String,
            Value::Color(_) => FieldType::Color,
            Value::Enum(_) => FieldType::Enum,
            Value::Resource(_) => FieldType::Resource,
            Value::Radian(_) | Value::Object(_) => FieldType::Object,
            Value::Vector3Distribution(_) => FieldType::Vector3Distribution,
        }
    }

    /// Concrete type name, used to look up custom inspectables
    pub fn type_name(&self) -> &str {
        match self {
            Value::Radian(_) => "Radian",
            Value::Object(obj) => obj.type_name(),
            other => other.field_type().name(),
        }
    }

    /// Whether `other` can be stored where `self` currently lives.
    pub fn same_shape(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => a.type_name() == b.type_name(),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }

    pub fn as_object(&self) -> Option<&SerializableObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut SerializableObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Conversion out of a [`Value`]
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_value_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_value_conversions! {
    i32 => Int,
    f32 => Float,
    bool => Bool,
    String => String,
    Color => Color,
    u64 => Enum,
    Option<ResourceHandle> => Resource,
    Radian => Radian,
    Vector3Distribution => Vector3Distribution,
    SerializableObject => Object,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<ResourceHandle> for Value {
    fn from(v: ResourceHandle) -> Self {
        Value::Resource(Some(v))
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_ordinal_is_lossless() {
        for v in [0u64, 1, 42, u32::MAX as u64 + 7, u64::MAX] {
            let value = Value::from(v);
            assert_eq!(u64::from_value(&value), Some(v));
        }
    }

    #[test]
    fn test_radian_shape() {
        let v = Value::from(Radian(1.0));
        assert_eq!(v.field_type(), FieldType::Object);
        assert_eq!(v.type_name(), "Radian");
        assert!(v.same_shape(&Value::Radian(Radian(2.0))));
        assert!(!v.same_shape(&Value::Float(1.0)));
    }

    #[test]
    fn test_wrong_type_read() {
        assert_eq!(i32::from_value(&Value::Float(1.0)), None);
    }
}
