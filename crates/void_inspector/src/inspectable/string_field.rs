//! Text field.

use void_core::FieldType;

use super::{FieldBase, InspectableField, InspectableState};
use crate::gui::{GuiEvent, GuiLayout, GuiValue, GuiWidget, TextBox};

/// Edits a string through a text box. Typing writes live; the whole edit
/// becomes one undo entry once confirmed or focus leaves the box.
pub struct StringInspectable {
    base: FieldBase,
    text_box: Option<TextBox>,
}

impl StringInspectable {
    pub fn new(base: FieldBase) -> Self {
        Self { base, text_box: None }
    }

    pub fn displayed_text(&self) -> Option<&str> {
        self.text_box.as_ref().map(TextBox::text)
    }
}

impl InspectableField for StringInspectable {
    fn base(&self) -> &FieldBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FieldBase {
        &mut self.base
    }

    fn field_type(&self) -> FieldType {
        FieldType::String
    }

    fn initialize(&mut self, layout: &mut GuiLayout, layout_index: usize) {
        if self.base.live_property().is_none() {
            return;
        }
        let text_box = TextBox::new();
        self.base.add_element(layout, layout_index, text_box.kind());
        self.text_box = Some(text_box);
    }

    fn refresh(&mut self, _layout: &mut GuiLayout, _layout_index: usize, force: bool) -> InspectableState {
        if let Some(text_box) = self.text_box.as_mut() {
            if !text_box.has_input_focus() || force {
                if let Some(text) = self.base.get::<String>() {
                    text_box.set_text(text);
                }
            }
        }
        self.base.take_state()
    }

    fn on_gui_event(&mut self, event: GuiEvent) {
        let Some(text_box) = self.text_box.as_mut() else {
            return;
        };

        match event {
            GuiEvent::FocusGained { .. } => {
                text_box.set_input_focus(true);
                self.base.start_undo(None);
            }
            GuiEvent::FocusLost { .. } => {
                text_box.set_input_focus(false);
                self.base.confirm();
            }
            GuiEvent::Changed { value: GuiValue::Text(text), .. } => {
                text_box.set_text(text.as_str());
                self.base.write_live(text);
            }
            GuiEvent::Confirmed { .. } => {
                self.base.confirm();
                if text_box.has_input_focus() {
                    self.base.start_undo(None);
                }
            }
            _ => {}
        }
    }

    fn set_has_focus(&mut self, _sub_field: Option<&str>) {
        self.on_gui_event(GuiEvent::focus_gained());
    }

    fn has_input_focus(&self) -> bool {
        self.text_box.as_ref().is_some_and(GuiWidget::has_input_focus)
    }

    fn widget_value(&self) -> Option<GuiValue> {
        self.displayed_text().map(GuiValue::from)
    }
}
