//! Headless GUI widget model.
//!
//! Inspectable fields build their widgets here instead of talking to a real
//! GUI toolkit. A [`GuiLayout`] records which elements exist and in what
//! order; widget state (value, focus, clamping) lives in the widget structs
//! owned by each field. User input is delivered as [`GuiEvent`]s.

mod layout;
mod event;
mod widgets;

pub use layout::{ElementInfo, GuiLayout, WidgetKind};
pub use event::{GuiEvent, GuiValue};
pub use widgets::{
    ColorField, FloatField, Foldout, GuiWidget, IntField, Label, ListBox, ResourceField,
    SliderField, TextBox, Toggle, Vector3DistributionField,
};

/// Whether `path` names a field nested somewhere below `parent`.
pub fn is_descendant_path(path: &str, parent: &str) -> bool {
    path.len() > parent.len() + 1
        && path.starts_with(parent)
        && path.as_bytes()[parent.len()] == b'/'
}
