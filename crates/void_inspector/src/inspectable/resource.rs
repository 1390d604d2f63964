//! Resource reference field.

use void_core::{FieldType, ResourceHandle};

use super::{FieldBase, InspectableField, InspectableState};
use crate::gui::{GuiEvent, GuiLayout, GuiValue, GuiWidget, ResourceField};

/// Edits a resource slot through a drop target.
///
/// The widget deals in weak references; a dropped reference is resolved
/// through the context's resource loader before it is written. A reference
/// that fails to resolve clears the slot. A slot declared with a concrete
/// resource type only accepts that type and its registered subtypes.
pub struct ResourceInspectable {
    base: FieldBase,
    field: Option<ResourceField>,
}

impl ResourceInspectable {
    pub fn new(base: FieldBase) -> Self {
        Self { base, field: None }
    }

    pub fn widget(&self) -> Option<&ResourceField> {
        self.field.as_ref()
    }

    fn accepts(&self, accepted: &str, handle: &ResourceHandle) -> bool {
        accepted == FieldType::Resource.name()
            || self.base.context().types().is_subtype_of(handle.type_name(), accepted)
    }
}

impl InspectableField for ResourceInspectable {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }

    fn field_type(&self) -> FieldType {
        FieldType::Resource
    }

    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        let Some(property) = self.base.live_property() else {
            return;
        };
        if property.field_type() != FieldType::Resource {
            return;
        }
        let field = ResourceField::new(property.type_name());
        self.base.add_element(layout, layout_index, field.kind());
        self.field = Some(field);
    }

    fn refresh(&mut self, _layout: &mut GuiLayout, _layout_index: usize, _force: bool) -> InspectableState {
        if let Some(field) = self.field.as_mut() {
            if let Some(handle) = self.base.get::<Option<ResourceHandle>>() {
                field.set_value(handle.map(|h| h.to_ref()).unwrap_or_default());
            }
        }
        self.base.take_state()
    }

    fn on_gui_event(&mut self, event: GuiEvent) {
        let Some(field) = self.field.as_ref() else {
            return;
        };
        let GuiEvent::Changed { value: GuiValue::Resource(reference), .. } = event else {
            return;
        };
        let accepted = field.type_name().to_string();
        let handle = self.base.context().resources().load(&reference);
        if let Some(handle) = &handle {
            if !self.accepts(&accepted, handle) {
                log::debug!(
                    "Rejected '{}' ({}) for '{}', expects {}",
                    handle.name(),
                    handle.type_name(),
                    self.base.path(),
                    accepted
                );
                return;
            }
        }
        if let Some(field) = self.field.as_mut() {
            field.set_value(reference);
        }
        self.base.write_immediate(handle);
    }

    fn widget_value(&self) -> Option<GuiValue> {
        self.field.as_ref().map(|f| GuiValue::Resource(f.value().clone()))
    }
}
