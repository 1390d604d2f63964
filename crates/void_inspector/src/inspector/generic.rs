//! Fallback inspector that reflects every serialized member.

use void_core::{FieldInfo, PropertyPath, SerializableProperty, SharedObject};

use super::{Inspector, InspectorBase, InspectorLifecycle};
use crate::context::InspectableContext;
use crate::gui::{GuiEvent, GuiLayout, GuiValue};
use crate::inspectable::{create_inspectable, find_field, find_field_mut, split_focus_path, InspectableField, InspectableState};

const NAME: &str = "GenericInspector";

/// Builds one inspectable field per member of the inspected object.
///
/// Members come from the type registry, base type members first, when the
/// object's type is registered, and from the object's own fields otherwise.
#[derive(Default)]
pub struct GenericInspector {
    base: InspectorBase,
    fields: Vec<Box<dyn InspectableField>>,
}

impl GenericInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Box<dyn InspectableField>] {
        &self.fields
    }

    /// Field at `path`, searching nested object fields too
    pub fn field(&self, path: &str) -> Option<&dyn InspectableField> {
        find_field(&self.fields, path)
    }

    pub fn field_mut(&mut self, path: &str) -> Option<&mut Box<dyn InspectableField>> {
        find_field_mut(&mut self.fields, path)
    }
}

impl Inspector for GenericInspector {
    fn name(&self) -> &str {
        NAME
    }

    fn lifecycle(&self) -> InspectorLifecycle {
        self.base.lifecycle()
    }

    fn initialize(&mut self, target: &SharedObject, context: &InspectableContext) {
        if !self.base.begin_initialize(NAME, target, context) {
            return;
        }

        let object = target.read();
        let members: Vec<FieldInfo> = match context.types().all_fields(object.type_name()) {
            Ok(fields) => fields,
            Err(_) => object.fields().map(|(name, value)| FieldInfo::infer(name, value)).collect(),
        };
        drop(object);

        let mut index = 0;
        for info in members {
            let path = PropertyPath::root().join(&info.name);
            let title = info.name.clone();
            let property = SerializableProperty::new(target, path.clone(), info);
            if !property.is_valid() {
                log::trace!("Skipping missing member '{}'", path);
                continue;
            }
            let mut field = create_inspectable(context, title, path.to_string(), 0, property);
            field.initialize(self.base.layout_mut(), index);
            index += field.element_count();
            self.fields.push(field);
        }
    }

    fn refresh(&mut self, force: bool) -> InspectableState {
        if !self.base.is_initialized() {
            return InspectableState::NotModified;
        }

        let mut state = InspectableState::NotModified;
        let mut index = 0;
        for field in &mut self.fields {
            state |= field.refresh(self.base.layout_mut(), index, force);
            index += field.element_count();
        }
        state
    }

    fn destroy(&mut self) {
        self.fields.clear();
        self.base.destroy();
    }

    fn layout(&self) -> &GuiLayout {
        self.base.layout()
    }

    fn set_focus(&mut self, path: &str) -> bool {
        let (field_path, sub_field) = split_focus_path(path);
        match find_field_mut(&mut self.fields, field_path) {
            Some(field) => {
                field.set_has_focus(sub_field);
                true
            }
            None => false,
        }
    }

    fn widget_value(&self, path: &str) -> Option<GuiValue> {
        self.field(path)?.widget_value()
    }

    fn handle_event(&mut self, path: &str, event: GuiEvent) -> bool {
        match find_field_mut(&mut self.fields, path) {
            Some(field) => {
                field.on_gui_event(event);
                true
            }
            None => false,
        }
    }
}
