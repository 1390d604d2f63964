//! Int, float and radian fields.
//!
//! All three share one editing flow and differ only in how the property
//! value maps to the number shown. Each is a number box, or a slider when
//! the field's range style asks for one.

use std::marker::PhantomData;

use void_core::{FieldType, SerializableProperty, Value};
use void_math::{Degree, Radian};

use super::{FieldBase, InspectableField, InspectableFieldStyleInfo, InspectableState};
use crate::gui::{FloatField, GuiEvent, GuiLayout, GuiValue, GuiWidget, IntField, SliderField, WidgetKind};

/// Maps a property value to and from the number a widget displays.
pub trait NumericUnit: Send + 'static {
    const FIELD_TYPE: FieldType;
    /// Number boxes edit whole numbers
    const INTEGER: bool;

    fn read(property: &SerializableProperty) -> Option<f64>;

    fn to_value(displayed: f64) -> Value;
}

pub struct IntUnit;

impl NumericUnit for IntUnit {
    const FIELD_TYPE: FieldType = FieldType::Int;
    const INTEGER: bool = true;

    fn read(property: &SerializableProperty) -> Option<f64> {
        property.get::<i32>().map(f64::from)
    }

    fn to_value(displayed: f64) -> Value {
        Value::Int(displayed.round() as i32)
    }
}

pub struct FloatUnit;

impl NumericUnit for FloatUnit {
    const FIELD_TYPE: FieldType = FieldType::Float;
    const INTEGER: bool = false;

    fn read(property: &SerializableProperty) -> Option<f64> {
        property.get::<f32>().map(f64::from)
    }

    fn to_value(displayed: f64) -> Value {
        Value::Float(displayed as f32)
    }
}

/// Stored as [`Radian`], displayed and edited in degrees.
pub struct RadianUnit;

impl NumericUnit for RadianUnit {
    const FIELD_TYPE: FieldType = FieldType::Object;
    const INTEGER: bool = false;

    fn read(property: &SerializableProperty) -> Option<f64> {
        property.get::<Radian>().map(|r| f64::from(r.degrees()))
    }

    fn to_value(displayed: f64) -> Value {
        Value::Radian(Radian::from(Degree(displayed as f32)))
    }
}

/// The widget a numeric field edits through.
#[derive(Clone, Debug)]
pub enum NumericWidget {
    Int(IntField),
    Float(FloatField),
    Slider(SliderField),
}

impl NumericWidget {
    /// Pick and configure the widget for a style.
    pub fn build(integer: bool, style: &InspectableFieldStyleInfo) -> Self {
        if let Some(range) = style.range.filter(|r| r.slider) {
            let mut slider = SliderField::new(range.min, range.max);
            match style.step() {
                Some(step) => slider.set_step(step),
                None if integer => slider.set_step(1.0),
                None => {}
            }
            return NumericWidget::Slider(slider);
        }

        if integer {
            let mut field = IntField::new();
            if let Some(step) = style.step() {
                field.set_step(step as i32);
            }
            if let Some(range) = style.range {
                // Only whole numbers inside the declared bounds are reachable
                field.set_range(range.min.ceil() as i32, range.max.floor() as i32);
            }
            NumericWidget::Int(field)
        } else {
            let mut field = FloatField::new();
            if let Some(step) = style.step() {
                field.set_step(step);
            }
            if let Some(range) = style.range {
                field.set_range(range.min, range.max);
            }
            NumericWidget::Float(field)
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            NumericWidget::Int(w) => f64::from(w.value()),
            NumericWidget::Float(w) => f64::from(w.value()),
            NumericWidget::Slider(w) => f64::from(w.value()),
        }
    }

    pub fn set_value(&mut self, value: f64) {
        match self {
            NumericWidget::Int(w) => w.set_value(value.round() as i32),
            NumericWidget::Float(w) => w.set_value(value as f32),
            NumericWidget::Slider(w) => w.set_value(value as f32),
        }
    }
}

impl GuiWidget for NumericWidget {
    fn kind(&self) -> WidgetKind {
        match self {
            NumericWidget::Int(w) => w.kind(),
            NumericWidget::Float(w) => w.kind(),
            NumericWidget::Slider(w) => w.kind(),
        }
    }

    fn has_input_focus(&self) -> bool {
        match self {
            NumericWidget::Int(w) => w.has_input_focus(),
            NumericWidget::Float(w) => w.has_input_focus(),
            NumericWidget::Slider(w) => w.has_input_focus(),
        }
    }

    fn set_input_focus(&mut self, focus: bool) {
        match self {
            NumericWidget::Int(w) => w.set_input_focus(focus),
            NumericWidget::Float(w) => w.set_input_focus(focus),
            NumericWidget::Slider(w) => w.set_input_focus(focus),
        }
    }
}

/// Numeric field generic over the value/display mapping.
pub struct NumericInspectable<U: NumericUnit> {
    base: FieldBase,
    widget: Option<NumericWidget>,
    _unit: PhantomData<U>,
}

pub type IntInspectable = NumericInspectable<IntUnit>;
pub type FloatInspectable = NumericInspectable<FloatUnit>;
pub type RadianInspectable = NumericInspectable<RadianUnit>;

impl<U: NumericUnit> NumericInspectable<U> {
    pub fn new(base: FieldBase) -> Self {
        Self {
            base,
            widget: None,
            _unit: PhantomData,
        }
    }

    pub fn widget(&self) -> Option<&NumericWidget> {
        self.widget.as_ref()
    }

    /// The number currently shown
    pub fn displayed_value(&self) -> Option<f64> {
        self.widget.as_ref().map(NumericWidget::value)
    }
}

impl<U: NumericUnit> InspectableField for NumericInspectable<U> {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }

    fn field_type(&self) -> FieldType {
        U::FIELD_TYPE
    }

    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        if self.base.live_property().is_none() {
            return;
        }
        let widget = NumericWidget::build(U::INTEGER, self.base.style());
        self.base.add_element(layout, layout_index, widget.kind());
        self.widget = Some(widget);
    }

    fn refresh(&mut self, _layout: &mut GuiLayout, _layout_index: usize, force: bool) -> InspectableState {
        if let (Some(widget), Some(property)) = (self.widget.as_mut(), self.base.property()) {
            if !widget.has_input_focus() || force {
                if let Some(value) = U::read(property) {
                    widget.set_value(value);
                }
            }
        }
        self.base.take_state()
    }

    fn on_gui_event(&mut self, event: GuiEvent) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };

        match event {
            GuiEvent::FocusGained { .. } => {
                widget.set_input_focus(true);
                self.base.start_undo(None);
            }
            GuiEvent::FocusLost { .. } => {
                widget.set_input_focus(false);
                self.base.confirm();
            }
            GuiEvent::Changed { value, .. } => {
                let Some(value) = value.as_f64() else {
                    log::trace!("Ignoring non-numeric input for '{}'", self.base.path());
                    return;
                };
                widget.set_value(value);
                self.base.write_live(U::to_value(widget.value()));
            }
            GuiEvent::Confirmed { .. } => {
                // Focus stays in the widget, so the next edit needs a fresh transaction
                self.base.confirm();
                if widget.has_input_focus() {
                    self.base.start_undo(None);
                }
            }
            GuiEvent::Toggled(_) => {}
        }
    }

    fn set_has_focus(&mut self, _sub_field: Option<&str>) {
        self.on_gui_event(GuiEvent::focus_gained());
    }

    fn has_input_focus(&self) -> bool {
        self.widget.as_ref().is_some_and(GuiWidget::has_input_focus)
    }

    fn widget_value(&self) -> Option<GuiValue> {
        self.widget.as_ref().map(|w| match w {
            NumericWidget::Int(field) => GuiValue::Int(field.value()),
            NumericWidget::Float(field) => GuiValue::Float(field.value()),
            NumericWidget::Slider(slider) => GuiValue::Float(slider.value()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use void_core::{FieldInfo, SerializableObject, SharedObject};

    use crate::context::InspectableContext;

    fn field<U: NumericUnit>(obj: &SharedObject, info: FieldInfo) -> NumericInspectable<U> {
        let property = SerializableProperty::new(obj, info.name.as_str(), info.clone());
        let base = FieldBase::new(InspectableContext::new(), info.name.clone(), info.name, 0, Some(property));
        NumericInspectable::new(base)
    }

    #[test]
    fn test_radian_displays_degrees() {
        let obj = SerializableObject::new("Joint")
            .with_field("angle", Radian(std::f32::consts::FRAC_PI_2))
            .into_shared();
        let mut layout = GuiLayout::new();
        let mut angle = field::<RadianUnit>(&obj, FieldInfo::new("angle", FieldType::Object).with_type_name("Radian"));
        angle.initialize(&mut layout, 0);
        angle.refresh(&mut layout, 0, false);
        assert_relative_eq!(angle.displayed_value().unwrap(), 90.0, epsilon = 1e-3);

        angle.on_gui_event(GuiEvent::focus_gained());
        angle.on_gui_event(GuiEvent::changed(45.0f32));
        let stored = obj.read().field("angle").cloned();
        match stored {
            Some(Value::Radian(r)) => assert_relative_eq!(r.0, std::f32::consts::FRAC_PI_4, epsilon = 1e-6),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_int_slider_rounds() {
        let obj = SerializableObject::new("Light").with_field("samples", 4i32).into_shared();
        let mut layout = GuiLayout::new();
        let mut samples = field::<IntUnit>(&obj, FieldInfo::new("samples", FieldType::Int).with_range(0.0, 16.0, true));
        samples.initialize(&mut layout, 0);
        assert_eq!(layout.get(0).map(|e| e.kind), Some(WidgetKind::Slider));

        samples.on_gui_event(GuiEvent::changed(6.6f32));
        assert_eq!(obj.read().field("samples"), Some(&Value::Int(7)));

        samples.on_gui_event(GuiEvent::changed(100i32));
        assert_eq!(obj.read().field("samples"), Some(&Value::Int(16)));
    }

    #[test]
    fn test_int_box_range_stays_inside_fractional_bounds() {
        let widget = NumericWidget::build(
            true,
            &InspectableFieldStyleInfo::from(&FieldInfo::new("n", FieldType::Int).with_range(0.5, 9.5, false).style),
        );
        match widget {
            NumericWidget::Int(field) => assert_eq!(field.range(), Some((1, 9))),
            other => panic!("unexpected widget {:?}", other),
        }
    }

    #[test]
    fn test_int_box_is_lossless() {
        let obj = SerializableObject::new("Counter").with_field("count", i32::MAX - 1).into_shared();
        let mut layout = GuiLayout::new();
        let mut count = field::<IntUnit>(&obj, FieldInfo::new("count", FieldType::Int));
        count.initialize(&mut layout, 0);
        count.refresh(&mut layout, 0, false);
        assert_eq!(count.displayed_value(), Some(f64::from(i32::MAX - 1)));
    }

    #[test]
    fn test_missing_property_is_noop() {
        let mut layout = GuiLayout::new();
        let base = FieldBase::new(InspectableContext::new(), "ghost", "ghost", 0, None);
        let mut ghost = FloatInspectable::new(base);

        ghost.initialize(&mut layout, 0);
        assert!(layout.is_empty());
        assert_eq!(ghost.refresh(&mut layout, 0, true), InspectableState::NotModified);
        ghost.on_gui_event(GuiEvent::changed(1.0f32));
        assert_eq!(ghost.element_count(), 0);
    }
}
