//! Vector3 distribution field.

use void_core::{FieldType, Vector3Distribution};

use super::{FieldBase, InspectableField, InspectableState};
use crate::gui::{GuiEvent, GuiLayout, GuiValue, GuiWidget, Vector3DistributionField};

/// Edits a [`Vector3Distribution`].
///
/// Constant and random-range distributions are edited through up to six
/// number boxes addressed as `min.X` … `max.Z`. Typing into a box writes
/// live; each box's edit is one undo entry, opened when the box gains focus.
/// Switching the distribution kind or editing a curve is an immediate entry.
pub struct Vector3DistributionInspectable {
    base: FieldBase,
    field: Option<Vector3DistributionField>,
}

impl Vector3DistributionInspectable {
    pub fn new(base: FieldBase) -> Self {
        Self { base, field: None }
    }

    pub fn widget(&self) -> Option<&Vector3DistributionField> {
        self.field.as_ref()
    }

    /// Normalized sub-field name of a box address, if it names a box.
    fn sub_field(name: Option<&str>) -> Option<String> {
        let (range, component) = Vector3DistributionField::parse_sub_field(name?)?;
        Some(Vector3DistributionField::sub_field_name(range, component))
    }
}

impl InspectableField for Vector3DistributionInspectable {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }

    fn field_type(&self) -> FieldType {
        FieldType::Vector3Distribution
    }

    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        if self.base.live_property().is_none() {
            return;
        }
        let field = Vector3DistributionField::new();
        self.base.add_element(layout, layout_index, field.kind());
        self.field = Some(field);
    }

    fn refresh(&mut self, _layout: &mut GuiLayout, _layout_index: usize, force: bool) -> InspectableState {
        if let Some(field) = self.field.as_mut() {
            if !field.has_input_focus() || force {
                if let Some(value) = self.base.get::<Vector3Distribution>() {
                    field.set_value(value);
                }
            }
        }
        self.base.take_state()
    }

    fn on_gui_event(&mut self, event: GuiEvent) {
        let Some(field) = self.field.as_mut() else {
            return;
        };

        match event {
            GuiEvent::Changed { sub_field: None, value: GuiValue::Distribution(value) } => {
                field.set_value(value.clone());
                self.base.write_immediate(value);
            }
            GuiEvent::Changed { sub_field: Some(name), value } => {
                let (Some((range, component)), Some(number)) =
                    (Vector3DistributionField::parse_sub_field(&name), value.as_f64())
                else {
                    return;
                };
                if field.set_constant(range, component, number as f32) {
                    self.base.write_live(field.value().clone());
                }
            }
            GuiEvent::Confirmed { sub_field } => {
                self.base.confirm();
                if let Some(name) = Self::sub_field(sub_field.as_deref()) {
                    self.base.start_undo(Some(&name));
                }
            }
            GuiEvent::FocusGained { sub_field } => {
                let Some(name) = Self::sub_field(sub_field.as_deref()) else {
                    return;
                };
                if let Some((range, component)) = Vector3DistributionField::parse_sub_field(&name) {
                    field.set_box_focus(range, component, true);
                }
                self.base.start_undo(Some(&name));
            }
            GuiEvent::FocusLost { sub_field } => {
                match Vector3DistributionField::parse_sub_field(sub_field.as_deref().unwrap_or_default()) {
                    Some((range, component)) => field.set_box_focus(range, component, false),
                    None => field.set_input_focus(false),
                }
                self.base.confirm();
            }
            _ => {}
        }
    }

    /// Focus one number box. `min.`/`max.` with an unknown component focuses
    /// that row's X box; anything else focuses `min.X`.
    fn set_has_focus(&mut self, sub_field: Option<&str>) {
        let name = Self::sub_field(sub_field).unwrap_or_else(|| "min.X".to_string());
        self.on_gui_event(GuiEvent::sub_focus_gained(name));
    }

    fn has_input_focus(&self) -> bool {
        self.field.as_ref().is_some_and(GuiWidget::has_input_focus)
    }

    fn widget_value(&self) -> Option<GuiValue> {
        self.field.as_ref().map(|f| GuiValue::Distribution(f.value().clone()))
    }
}
