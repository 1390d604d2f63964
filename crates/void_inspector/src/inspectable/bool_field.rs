//! Checkbox field.

use void_core::FieldType;

use super::{FieldBase, InspectableField, InspectableState};
use crate::gui::{GuiEvent, GuiLayout, GuiValue, GuiWidget, Toggle};

/// Edits a bool through a toggle. Each click is its own undo entry.
pub struct BoolInspectable {
    base: FieldBase,
    toggle: Option<Toggle>,
}

impl BoolInspectable {
    pub fn new(base: FieldBase) -> Self {
        Self { base, toggle: None }
    }

    pub fn displayed_value(&self) -> Option<bool> {
        self.toggle.as_ref().map(|t| t.value)
    }
}

impl InspectableField for BoolInspectable {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }

    fn field_type(&self) -> FieldType {
        FieldType::Bool
    }

    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        if self.base.live_property().is_none() {
            return;
        }
        let toggle = Toggle::default();
        self.base.add_element(layout, layout_index, toggle.kind());
        self.toggle = Some(toggle);
    }

    fn refresh(&mut self, _layout: &mut GuiLayout, _layout_index: usize, _force: bool) -> InspectableState {
        if let Some(toggle) = self.toggle.as_mut() {
            if let Some(value) = self.base.get::<bool>() {
                toggle.value = value;
            }
        }
        self.base.take_state()
    }

    fn on_gui_event(&mut self, event: GuiEvent) {
        let Some(toggle) = self.toggle.as_mut() else {
            return;
        };
        if let GuiEvent::Changed { value: GuiValue::Bool(value), .. } = event {
            toggle.value = value;
            self.base.write_immediate(value);
        }
    }

    fn widget_value(&self) -> Option<GuiValue> {
        self.displayed_value().map(GuiValue::Bool)
    }
}
