//! Nested object field.

use void_core::{FieldInfo, FieldType};

use super::{create_inspectable, FieldBase, InspectableField, InspectableState};
use crate::gui::{Foldout, GuiEvent, GuiLayout, GuiWidget};

/// Shows a nested object as a foldout with one child field per member.
///
/// Children are built the first time the foldout is refreshed expanded and
/// dropped again when it collapses. The expanded flag is kept in the
/// context's persistent data so it survives inspector rebuilds.
pub struct ObjectInspectable {
    base: FieldBase,
    foldout: Option<Foldout>,
    children: Vec<Box<dyn InspectableField>>,
    built: bool,
}

impl ObjectInspectable {
    pub fn new(base: FieldBase) -> Self {
        Self {
            base,
            foldout: None,
            children: Vec::new(),
            built: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.foldout.as_ref().is_some_and(|f| f.expanded)
    }

    fn build_children(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        self.built = true;
        let Some(property) = self.base.live_property().cloned() else {
            return;
        };
        let Some(value) = property.value() else {
            return;
        };
        let Some(object) = value.as_object() else {
            log::trace!("'{}' holds no object, nothing to expand", self.base.path());
            return;
        };

        let context = self.base.context().clone();
        let fields = match context.types().all_fields(object.type_name()) {
            Ok(fields) => fields,
            Err(_) => object.fields().map(|(name, value)| FieldInfo::infer(name, value)).collect(),
        };

        let mut index = layout_index;
        for info in fields {
            if object.field(&info.name).is_none() {
                log::trace!("'{}' has no member '{}'", object.type_name(), info.name);
                continue;
            }
            let title = info.name.clone();
            let path = format!("{}/{}", self.base.path(), info.name);
            let mut child = create_inspectable(&context, title, path, self.base.depth() + 1, property.child(info));
            child.initialize(layout, index);
            index += child.element_count();
            self.children.push(child);
        }
        log::debug!("Expanded '{}' with {} fields", self.base.path(), self.children.len());
    }
}

impl InspectableField for ObjectInspectable {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }

    fn field_type(&self) -> FieldType {
        FieldType::Object
    }

    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        if self.base.live_property().is_none() {
            return;
        }
        let foldout = Foldout {
            expanded: self.base.context().is_expanded(self.base.path()),
        };
        self.base.add_element(layout, layout_index, foldout.kind());
        self.foldout = Some(foldout);
    }

    fn refresh(&mut self, layout: &mut GuiLayout, layout_index: usize, force: bool) -> InspectableState {
        let Some(expanded) = self.foldout.as_ref().map(|f| f.expanded) else {
            return self.base.take_state();
        };

        if expanded && !self.built {
            self.build_children(layout, layout_index + 1);
        } else if !expanded && self.built {
            self.children.clear();
            layout.remove_descendants_of(self.base.path());
            self.built = false;
        }

        let mut state = self.base.take_state();
        let mut index = layout_index + 1;
        for child in &mut self.children {
            state |= child.refresh(layout, index, force);
            index += child.element_count();
        }
        state
    }

    fn on_gui_event(&mut self, event: GuiEvent) {
        let Some(foldout) = self.foldout.as_mut() else {
            return;
        };
        if let GuiEvent::Toggled(expanded) = event {
            foldout.expanded = expanded;
            self.base.context().set_expanded(self.base.path(), expanded);
        }
    }

    fn has_input_focus(&self) -> bool {
        self.children.iter().any(|c| c.has_input_focus())
    }

    fn element_count(&self) -> usize {
        if self.foldout.is_none() {
            return 0;
        }
        1 + self.children.iter().map(|c| c.element_count()).sum::<usize>()
    }

    fn children(&self) -> Option<&[Box<dyn InspectableField>]> {
        Some(&self.children)
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Box<dyn InspectableField>>> {
        Some(&mut self.children)
    }
}
