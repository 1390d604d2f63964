//! User input delivered to inspectable fields.

use void_core::{ResourceRef, Vector3Distribution};
use void_math::Color;

/// A value entered into a widget
#[derive(Clone, Debug, PartialEq)]
pub enum GuiValue {
    Int(i32),
    Float(f32),
    Bool(bool),
    Text(String),
    Color(Color),
    Enum(u64),
    Resource(ResourceRef),
    Distribution(Vector3Distribution),
}

impl GuiValue {
    /// Numeric payload, for widgets that accept either number kind.
    /// Every `i32` and `f32` is exact as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GuiValue::Int(v) => Some(f64::from(*v)),
            GuiValue::Float(v) => Some(f64::from(*v)),
            _ => None,
        }
    }
}

/// Input event routed to a field.
///
/// `sub_field` addresses one part of a compound widget, such as `min.X` on a
/// distribution field. Simple widgets ignore it.
#[derive(Clone, Debug, PartialEq)]
pub enum GuiEvent {
    /// The widget gained input focus
    FocusGained { sub_field: Option<String> },
    /// The widget lost input focus
    FocusLost { sub_field: Option<String> },
    /// The user changed the value (keystroke, drag tick, pick)
    Changed { sub_field: Option<String>, value: GuiValue },
    /// The user confirmed the value (Enter, drag release)
    Confirmed { sub_field: Option<String> },
    /// A foldout was expanded or collapsed
    Toggled(bool),
}

impl GuiEvent {
    pub fn focus_gained() -> Self {
        GuiEvent::FocusGained { sub_field: None }
    }

    pub fn focus_lost() -> Self {
        GuiEvent::FocusLost { sub_field: None }
    }

    pub fn changed(value: impl Into<GuiValue>) -> Self {
        GuiEvent::Changed { sub_field: None, value: value.into() }
    }

    pub fn confirmed() -> Self {
        GuiEvent::Confirmed { sub_field: None }
    }

    pub fn sub_focus_gained(sub_field: impl Into<String>) -> Self {
        GuiEvent::FocusGained { sub_field: Some(sub_field.into()) }
    }

    pub fn sub_focus_lost(sub_field: impl Into<String>) -> Self {
        GuiEvent::FocusLost { sub_field: Some(sub_field.into()) }
    }

    pub fn sub_changed(sub_field: impl Into<String>, value: impl Into<GuiValue>) -> Self {
        GuiEvent::Changed { sub_field: Some(sub_field.into()), value: value.into() }
    }

    pub fn sub_confirmed(sub_field: impl Into<String>) -> Self {
        GuiEvent::Confirmed { sub_field: Some(sub_field.into()) }
    }
}

macro_rules! impl_gui_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for GuiValue {
                fn from(v: $ty) -> Self {
                    GuiValue::$variant(v)
                }
            }
        )*
    };
}

impl_gui_value_from! {
    i32 => Int,
    f32 => Float,
    bool => Bool,
    String => Text,
    Color => Color,
    u64 => Enum,
    ResourceRef => Resource,
    Vector3Distribution => Distribution,
}

impl From<&str> for GuiValue {
    fn from(v: &str) -> Self {
        GuiValue::Text(v.to_string())
    }
}
