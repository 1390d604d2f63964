//! Inspectable fields.
//!
//! An inspectable field binds one serialized property to one GUI widget (or
//! a few, for compound values). It pushes the property value into the widget
//! on every refresh, writes user edits straight back through the property,
//! and groups each edit gesture into a single undo entry:
//!
//! ```text
//! focus gained  → start_undo
//! value changed → property.set, ModifyInProgress
//! confirmed     → Modified, end_undo (one command for the whole gesture)
//! ```
//!
//! Refresh never overwrites a widget that holds input focus unless forced.

mod state;
mod numeric;
mod bool_field;
mod string_field;
mod color;
mod enum_field;
mod resource;
mod distribution;
mod object;

pub use state::InspectableState;
pub use numeric::{
    FloatInspectable, FloatUnit, IntInspectable, IntUnit, NumericInspectable, NumericUnit,
    NumericWidget, RadianInspectable, RadianUnit,
};
pub use bool_field::BoolInspectable;
pub use string_field::StringInspectable;
pub use color::ColorInspectable;
pub use enum_field::EnumInspectable;
pub use resource::ResourceInspectable;
pub use distribution::Vector3DistributionInspectable;
pub use object::ObjectInspectable;

use void_core::{FieldStyle, FieldType, RangeStyle, SerializableProperty, StepStyle, Value};

use crate::context::InspectableContext;
use crate::gui::{is_descendant_path, ElementInfo, GuiEvent, GuiLayout, GuiValue, WidgetKind};

/// Label width lost per nesting level
pub const INDENT_WIDTH: u32 = 5;

/// Styling applied to a field's widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InspectableFieldStyleInfo {
    pub range: Option<RangeStyle>,
    pub step: Option<StepStyle>,
    pub hdr: bool,
}

impl InspectableFieldStyleInfo {
    /// Whether a numeric field should be a slider rather than a number box
    pub fn is_slider(&self) -> bool {
        self.range.is_some_and(|r| r.slider)
    }

    /// Step increment, ignoring a zero step
    pub fn step(&self) -> Option<f32> {
        self.step.map(|s| s.step).filter(|s| *s != 0.0)
    }
}

impl From<&FieldStyle> for InspectableFieldStyleInfo {
    fn from(style: &FieldStyle) -> Self {
        Self {
            range: style.range,
            step: style.step,
            hdr: style.hdr,
        }
    }
}

/// Editor for one serialized property.
pub trait InspectableField: Send {
    /// Shared field data
    fn base(&self) -> &FieldBase;

    fn base_mut(&mut self) -> &mut FieldBase;

    /// The category of value this field edits
    fn field_type(&self) -> FieldType;

    /// Build the field's widgets at `layout_index`. Does nothing when the
    /// property is missing.
    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize);

    /// Pull the property value into the widgets, unless they hold input
    /// focus and `force` is false. Returns the state accumulated since the
    /// last refresh; a `Modified` state is reported once and then cleared.
    fn refresh(&mut self, layout: &mut GuiLayout, layout_index: usize, force: bool) -> InspectableState;

    /// Handle user input on this field's widgets.
    fn on_gui_event(&mut self, event: GuiEvent);

    /// Move input focus into the field, optionally into a named sub-widget.
    fn set_has_focus(&mut self, _sub_field: Option<&str>) {}

    /// Whether any of the field's widgets holds input focus
    fn has_input_focus(&self) -> bool {
        false
    }

    /// The value the field's widget currently shows
    fn widget_value(&self) -> Option<GuiValue> {
        None
    }

    /// Number of layout elements the field currently occupies
    fn element_count(&self) -> usize {
        usize::from(self.base().is_initialized())
    }

    /// Nested fields, for compound fields that own some
    fn children(&self) -> Option<&[Box<dyn InspectableField>]> {
        None
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Box<dyn InspectableField>>> {
        None
    }

    fn title(&self) -> &str {
        self.base().title()
    }

    fn path(&self) -> &str {
        self.base().path()
    }

    fn depth(&self) -> usize {
        self.base().depth()
    }

    fn property(&self) -> Option<&SerializableProperty> {
        self.base().property()
    }
}

/// Data and undo plumbing shared by every field.
#[derive(Debug)]
pub struct FieldBase {
    context: InspectableContext,
    title: String,
    path: String,
    depth: usize,
    property: Option<SerializableProperty>,
    style: InspectableFieldStyleInfo,
    state: InspectableState,
    initialized: bool,
}

impl FieldBase {
    /// Field data for `property`. The style comes from the property's
    /// declared field info.
    pub fn new(
        context: InspectableContext,
        title: impl Into<String>,
        path: impl Into<String>,
        depth: usize,
        property: Option<SerializableProperty>,
    ) -> Self {
        let style = property
            .as_ref()
            .map(|p| InspectableFieldStyleInfo::from(&p.info().style))
            .unwrap_or_default();
        Self {
            context,
            title: title.into(),
            path: path.into(),
            depth,
            property,
            style,
            state: InspectableState::NotModified,
            initialized: false,
        }
    }

    pub fn context(&self) -> &InspectableContext {
        &self.context
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn property(&self) -> Option<&SerializableProperty> {
        self.property.as_ref()
    }

    /// The property, if its target is still alive and resolvable
    pub fn live_property(&self) -> Option<&SerializableProperty> {
        self.property.as_ref().filter(|p| p.is_valid())
    }

    pub fn style(&self) -> &InspectableFieldStyleInfo {
        &self.style
    }

    pub fn state(&self) -> InspectableState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current property value converted to `T`
    pub fn get<T: void_core::FromValue>(&self) -> Option<T> {
        self.property.as_ref()?.get()
    }

    /// Add an element for this field to the layout and mark the field as built.
    pub fn add_element(&mut self, layout: &mut GuiLayout, index: usize, kind: WidgetKind) {
        let title_width = self
            .context
            .settings()
            .default_title_width
            .saturating_sub(u32::try_from(self.depth).unwrap_or(u32::MAX).saturating_mul(INDENT_WIDTH));
        layout.add_element(
            index,
            ElementInfo {
                owner: self.path.clone(),
                label: self.title.clone(),
                kind,
                depth: self.depth,
                title_width,
            },
        );
        self.initialized = true;
        log::debug!("Initialized field '{}' as {:?}", self.path, kind);
    }

    /// Report and clear the accumulated state
    pub fn take_state(&mut self) -> InspectableState {
        self.state.take()
    }

    pub fn start_undo(&self, sub_field: Option<&str>) {
        if let Some(property) = &self.property {
            self.context.start_undo(property, sub_field);
        }
    }

    pub fn end_undo(&self) {
        self.context.end_undo();
    }

    /// Write a live edit. The gesture stays open.
    pub fn write_live(&mut self, value: impl Into<Value>) {
        if self.write(value) {
            self.state |= InspectableState::ModifyInProgress;
        }
    }

    /// Confirm the open gesture: promote an in-progress edit and close the
    /// undo transaction.
    pub fn confirm(&mut self) {
        self.state = self.state.confirmed();
        self.end_undo();
    }

    /// Record a complete edit as its own gesture.
    pub fn write_immediate(&mut self, value: impl Into<Value>) {
        self.start_undo(None);
        if self.write(value) {
            self.state = InspectableState::Modified;
        }
        self.end_undo();
    }

    fn write(&self, value: impl Into<Value>) -> bool {
        let Some(property) = &self.property else {
            return false;
        };
        match property.set(value) {
            Ok(()) => true,
            Err(e) => {
                log::trace!("Ignoring edit of '{}': {}", self.path, e);
                false
            }
        }
    }
}

/// Create the field that edits `property`.
///
/// Custom inspectables registered with the context's
/// [`InspectorUtility`](crate::InspectorUtility) win, by field attribute and
/// then by type along its base chain. Otherwise the field type decides.
pub fn create_inspectable(
    context: &InspectableContext,
    title: impl Into<String>,
    path: impl Into<String>,
    depth: usize,
    property: SerializableProperty,
) -> Box<dyn InspectableField> {
    let custom = context.utility().custom_inspectable(property.info(), context.types());
    let field_type = property.field_type();
    let base = FieldBase::new(context.clone(), title, path, depth, Some(property));

    if let Some(factory) = custom {
        return factory(base);
    }

    match field_type {
        FieldType::Int => Box::new(IntInspectable::new(base)),
        FieldType::Float => Box::new(FloatInspectable::new(base)),
        FieldType::Bool => Box::new(BoolInspectable::new(base)),
        FieldType::String => Box::new(StringInspectable::new(base)),
        FieldType::Color => Box::new(ColorInspectable::new(base)),
        FieldType::Enum => Box::new(EnumInspectable::new(base)),
        FieldType::Resource => Box::new(ResourceInspectable::new(base)),
        FieldType::Vector3Distribution => Box::new(Vector3DistributionInspectable::new(base)),
        FieldType::Object => Box::new(ObjectInspectable::new(base)),
    }
}

/// Find the field at `path` among `fields` and their nested fields.
pub fn find_field<'a>(
    fields: &'a [Box<dyn InspectableField>],
    path: &str,
) -> Option<&'a dyn InspectableField> {
    for field in fields {
        if field.path() == path {
            return Some(field.as_ref());
        }
        if is_descendant_path(path, field.path()) {
            return field.children().and_then(|children| find_field(children, path));
        }
    }
    None
}

/// Mutable counterpart of [`find_field`].
pub fn find_field_mut<'a>(
    fields: &'a mut [Box<dyn InspectableField>],
    path: &str,
) -> Option<&'a mut Box<dyn InspectableField>> {
    for field in fields.iter_mut() {
        if field.path() == path {
            return Some(field);
        }
        if is_descendant_path(path, field.path()) {
            return field.children_mut().and_then(|children| find_field_mut(children, path));
        }
    }
    None
}

/// Split a focus address into the field path and an optional sub-field,
/// e.g. `particles/velocity.min.X` → (`particles/velocity`, `min.X`).
pub fn split_focus_path(path: &str) -> (&str, Option<&str>) {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].find('.') {
        Some(dot) => (&path[..name_start + dot], Some(&path[name_start + dot + 1..])),
        None => (path, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_focus_path() {
        assert_eq!(split_focus_path("speed"), ("speed", None));
        assert_eq!(split_focus_path("velocity.min.X"), ("velocity", Some("min.X")));
        assert_eq!(
            split_focus_path("emitter/velocity.max.Z"),
            ("emitter/velocity", Some("max.Z"))
        );
    }

    #[test]
    fn test_title_width_shrinks_with_depth() {
        let mut layout = GuiLayout::new();
        let context = InspectableContext::new();
        FieldBase::new(context.clone(), "a", "a", 2, None).add_element(&mut layout, 0, WidgetKind::Label);
        FieldBase::new(context, "b", "b", usize::MAX, None).add_element(&mut layout, 1, WidgetKind::Label);

        assert_eq!(layout.get(0).map(|e| e.title_width), Some(90));
        assert_eq!(layout.get(1).map(|e| e.title_width), Some(0));
    }

    #[test]
    fn test_style_info() {
        let style = FieldStyle {
            range: Some(RangeStyle { min: 0.0, max: 1.0, slider: true }),
            step: Some(StepStyle { step: 0.0 }),
            hdr: false,
        };
        let info = InspectableFieldStyleInfo::from(&style);
        assert!(info.is_slider());
        assert_eq!(info.step(), None);
        assert!(!InspectableFieldStyleInfo::default().is_slider());
    }
}
