//! Widget state.
//!
//! Each widget holds the value it currently displays. Fields push property
//! values into widgets on refresh and read user input back out of them.

use void_core::{DistributionKind, EnumVariant, RangeComponent, ResourceRef, Vector3Distribution};
use void_math::{Color, VectorComponent};

use super::WidgetKind;

/// Behaviour shared by every widget.
pub trait GuiWidget {
    fn kind(&self) -> WidgetKind;

    /// Whether the widget currently holds keyboard focus
    fn has_input_focus(&self) -> bool {
        false
    }

    /// Move keyboard focus into or out of the widget. Widgets that never take
    /// focus ignore this.
    fn set_input_focus(&mut self, _focus: bool) {}
}

/// Integer number box.
#[derive(Clone, Debug)]
pub struct IntField {
    value: i32,
    step: i32,
    range: Option<(i32, i32)>,
    focused: bool,
}

impl Default for IntField {
    fn default() -> Self {
        Self::new()
    }
}

impl IntField {
    pub fn new() -> Self {
        Self {
            value: 0,
            step: 1,
            range: None,
            focused: false,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the displayed value, clamped to the range if one is set
    pub fn set_value(&mut self, value: i32) {
        self.value = match self.range {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        };
    }

    pub fn set_range(&mut self, min: i32, max: i32) {
        self.range = Some((min.min(max), min.max(max)));
        self.set_value(self.value);
    }

    pub fn range(&self) -> Option<(i32, i32)> {
        self.range
    }

    /// Drag increment. Zero is ignored.
    pub fn set_step(&mut self, step: i32) {
        if step != 0 {
            self.step = step;
        }
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Apply `ticks` drag increments
    pub fn nudge(&mut self, ticks: i32) {
        self.set_value(self.value.saturating_add(self.step.saturating_mul(ticks)));
    }
}

impl GuiWidget for IntField {
    fn kind(&self) -> WidgetKind {
        WidgetKind::IntField
    }

    fn has_input_focus(&self) -> bool {
        self.focused
    }

    fn set_input_focus(&mut self, focus: bool) {
        self.focused = focus;
    }
}

/// Floating point number box.
#[derive(Clone, Debug, Default)]
pub struct FloatField {
    value: f32,
    step: Option<f32>,
    range: Option<(f32, f32)>,
    focused: bool,
}

impl FloatField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = match self.range {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        };
    }

    pub fn set_range(&mut self, min: f32, max: f32) {
        self.range = Some((min.min(max), min.max(max)));
        self.set_value(self.value);
    }

    pub fn range(&self) -> Option<(f32, f32)> {
        self.range
    }

    pub fn set_step(&mut self, step: f32) {
        if step != 0.0 {
            self.step = Some(step);
        }
    }

    pub fn step(&self) -> Option<f32> {
        self.step
    }
}

impl GuiWidget for FloatField {
    fn kind(&self) -> WidgetKind {
        WidgetKind::FloatField
    }

    fn has_input_focus(&self) -> bool {
        self.focused
    }

    fn set_input_focus(&mut self, focus: bool) {
        self.focused = focus;
    }
}

/// Slider between two bounds, optionally snapping to a step.
#[derive(Clone, Debug)]
pub struct SliderField {
    value: f32,
    min: f32,
    max: f32,
    step: Option<f32>,
    focused: bool,
}

impl SliderField {
    pub fn new(min: f32, max: f32) -> Self {
        let (min, max) = (min.min(max), min.max(max));
        Self {
            value: min,
            min,
            max,
            step: None,
            focused: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the slider position, clamped to the bounds and snapped to the step
    pub fn set_value(&mut self, value: f32) {
        let mut value = value.clamp(self.min, self.max);
        if let Some(step) = self.step {
            value = (self.min + ((value - self.min) / step).round() * step).min(self.max);
        }
        self.value = value;
    }

    pub fn set_step(&mut self, step: f32) {
        if step > 0.0 {
            self.step = Some(step);
            self.set_value(self.value);
        }
    }

    pub fn step(&self) -> Option<f32> {
        self.step
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }
}

impl GuiWidget for SliderField {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Slider
    }

    fn has_input_focus(&self) -> bool {
        self.focused
    }

    fn set_input_focus(&mut self, focus: bool) {
        self.focused = focus;
    }
}

/// Checkbox.
#[derive(Clone, Debug, Default)]
pub struct Toggle {
    pub value: bool,
}

impl GuiWidget for Toggle {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Toggle
    }
}

/// Single line text input.
#[derive(Clone, Debug, Default)]
pub struct TextBox {
    text: String,
    focused: bool,
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl GuiWidget for TextBox {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TextBox
    }

    fn has_input_focus(&self) -> bool {
        self.focused
    }

    fn set_input_focus(&mut self, focus: bool) {
        self.focused = focus;
    }
}

/// Color swatch with picker.
#[derive(Clone, Debug, Default)]
pub struct ColorField {
    value: Color,
    hdr: bool,
}

impl ColorField {
    pub fn new(hdr: bool) -> Self {
        Self {
            value: Color::WHITE,
            hdr,
        }
    }

    pub fn value(&self) -> Color {
        self.value
    }

    /// Non-HDR pickers clamp every channel to `[0, 1]`
    pub fn set_value(&mut self, value: Color) {
        self.value = if self.hdr { value } else { value.clamped() };
    }

    pub fn is_hdr(&self) -> bool {
        self.hdr
    }
}

impl GuiWidget for ColorField {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ColorField
    }
}

/// Drop-down list of named enum values.
///
/// The selected ordinal is kept as-is even when no entry matches it.
#[derive(Clone, Debug, Default)]
pub struct ListBox {
    entries: Vec<EnumVariant>,
    value: u64,
}

impl ListBox {
    pub fn new(entries: Vec<EnumVariant>) -> Self {
        Self { entries, value: 0 }
    }

    pub fn entries(&self) -> &[EnumVariant] {
        &self.entries
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn set_value(&mut self, value: u64) {
        self.value = value;
    }

    /// Index of the entry matching the current ordinal
    pub fn selected_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.value == self.value)
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected_index().map(|i| self.entries[i].name.as_str())
    }
}

impl GuiWidget for ListBox {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ListBox
    }
}

/// Drop target showing a resource reference.
#[derive(Clone, Debug, Default)]
pub struct ResourceField {
    type_name: String,
    value: ResourceRef,
}

impl ResourceField {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: ResourceRef::null(),
        }
    }

    /// Resource type the field accepts
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn value(&self) -> &ResourceRef {
        &self.value
    }

    pub fn set_value(&mut self, value: ResourceRef) {
        self.value = value;
    }
}

impl GuiWidget for ResourceField {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ResourceField
    }
}

/// Editor for a [`Vector3Distribution`].
///
/// Constant and random-range distributions show one or two rows of X/Y/Z
/// number boxes; curve distributions show a curve editor instead. At most one
/// number box holds focus at a time.
#[derive(Clone, Debug, Default)]
pub struct Vector3DistributionField {
    value: Vector3Distribution,
    focus: Option<(RangeComponent, VectorComponent)>,
}

impl Vector3DistributionField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &Vector3Distribution {
        &self.value
    }

    pub fn set_value(&mut self, value: Vector3Distribution) {
        if value.kind() != self.value.kind() {
            self.focus = None;
        }
        self.value = value;
    }

    pub fn distribution_kind(&self) -> DistributionKind {
        self.value.kind()
    }

    /// Whether the curve editor is shown instead of number boxes
    pub fn shows_curves(&self) -> bool {
        self.value.kind().is_curve()
    }

    /// Write one number box. Returns `false` if the box is not shown.
    pub fn set_constant(&mut self, range: RangeComponent, component: VectorComponent, value: f32) -> bool {
        self.value.set_constant(range, component, value)
    }

    /// The number box holding focus, if any
    pub fn focused(&self) -> Option<(RangeComponent, VectorComponent)> {
        self.focus
    }

    /// Focus or unfocus one number box. Focusing a box that is not shown does
    /// nothing.
    pub fn set_box_focus(&mut self, range: RangeComponent, component: VectorComponent, focus: bool) {
        if focus {
            if self.value.constant(range).is_some() {
                self.focus = Some((range, component));
            }
        } else if self.focus == Some((range, component)) {
            self.focus = None;
        }
    }

    /// Sub-field address of a number box, e.g. `min.X`
    pub fn sub_field_name(range: RangeComponent, component: VectorComponent) -> String {
        format!("{}.{}", range.prefix(), component.name())
    }

    /// Parse a sub-field address. An unknown component after a valid
    /// `min.`/`max.` prefix falls back to X.
    pub fn parse_sub_field(name: &str) -> Option<(RangeComponent, VectorComponent)> {
        let (range, component) = if let Some(rest) = name.strip_prefix("min.") {
            (RangeComponent::Min, rest)
        } else if let Some(rest) = name.strip_prefix("max.") {
            (RangeComponent::Max, rest)
        } else {
            return None;
        };
        Some((range, VectorComponent::from_name(component).unwrap_or(VectorComponent::X)))
    }
}

impl GuiWidget for Vector3DistributionField {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Vector3DistributionField
    }

    fn has_input_focus(&self) -> bool {
        self.focus.is_some()
    }

    fn set_input_focus(&mut self, focus: bool) {
        if focus {
            self.set_box_focus(RangeComponent::Min, VectorComponent::X, true);
        } else {
            self.focus = None;
        }
    }
}

/// Read-only text.
#[derive(Clone, Debug, Default)]
pub struct Label {
    pub text: String,
}

impl GuiWidget for Label {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Label
    }
}

/// Expandable section header.
#[derive(Clone, Debug, Default)]
pub struct Foldout {
    pub expanded: bool,
}

impl GuiWidget for Foldout {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Foldout
    }
}
