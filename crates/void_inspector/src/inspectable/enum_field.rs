//! Enum field.

use void_core::FieldType;

use super::{FieldBase, InspectableField, InspectableState};
use crate::gui::{GuiEvent, GuiLayout, GuiValue, GuiWidget, ListBox};

/// Edits an enum ordinal through a list box. The ordinal is carried as an
/// unsigned 64-bit value end to end.
pub struct EnumInspectable {
    base: FieldBase,
    list: Option<ListBox>,
}

impl EnumInspectable {
    pub fn new(base: FieldBase) -> Self {
        Self { base, list: None }
    }

    pub fn list(&self) -> Option<&ListBox> {
        self.list.as_ref()
    }
}

impl InspectableField for EnumInspectable {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }

    fn field_type(&self) -> FieldType {
        FieldType::Enum
    }

    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        let Some(property) = self.base.live_property() else {
            return;
        };
        let list = ListBox::new(property.info().enum_variants.clone());
        self.base.add_element(layout, layout_index, list.kind());
        self.list = Some(list);
    }

    fn refresh(&mut self, _layout: &mut GuiLayout, _layout_index: usize, _force: bool) -> InspectableState {
        if let Some(list) = self.list.as_mut() {
            if let Some(value) = self.base.get::<u64>() {
                list.set_value(value);
            }
        }
        self.base.take_state()
    }

    fn on_gui_event(&mut self, event: GuiEvent) {
        let Some(list) = self.list.as_mut() else {
            return;
        };
        if let GuiEvent::Changed { value: GuiValue::Enum(value), .. } = event {
            list.set_value(value);
            self.base.write_immediate(value);
        }
    }

    fn widget_value(&self) -> Option<GuiValue> {
        self.list.as_ref().map(|l| GuiValue::Enum(l.value()))
    }
}
