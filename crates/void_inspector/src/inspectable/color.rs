//! Color field.

use void_core::FieldType;
use void_math::Color;

use super::{FieldBase, InspectableField, InspectableState};
use crate::gui::{ColorField, GuiEvent, GuiLayout, GuiValue, GuiWidget};

/// Edits a color through a picker, in HDR mode when the field style asks
/// for it. Every pick is its own undo entry.
pub struct ColorInspectable {
    base: FieldBase,
    picker: Option<ColorField>,
}

impl ColorInspectable {
    pub fn new(base: FieldBase) -> Self {
        Self { base, picker: None }
    }

    pub fn picker(&self) -> Option<&ColorField> {
        self.picker.as_ref()
    }
}

impl InspectableField for ColorInspectable {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }

    fn field_type(&self) -> FieldType {
        FieldType::Color
    }

    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        if self.base.live_property().is_none() {
            return;
        }
        let picker = ColorField::new(self.base.style().hdr);
        self.base.add_element(layout, layout_index, picker.kind());
        self.picker = Some(picker);
    }

    fn refresh(&mut self, _layout: &mut GuiLayout, _layout_index: usize, _force: bool) -> InspectableState {
        if let Some(picker) = self.picker.as_mut() {
            if let Some(color) = self.base.get::<Color>() {
                picker.set_value(color);
            }
        }
        self.base.take_state()
    }

    fn on_gui_event(&mut self, event: GuiEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        if let GuiEvent::Changed { value: GuiValue::Color(color), .. } = event {
            picker.set_value(color);
            self.base.write_immediate(picker.value());
        }
    }

    fn widget_value(&self) -> Option<GuiValue> {
        self.picker.as_ref().map(|p| GuiValue::Color(p.value()))
    }
}
