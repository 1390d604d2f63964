//! Inspector for plain text resources.

use void_core::SharedObject;

use super::{Inspector, InspectorBase, InspectorLifecycle};
use crate::context::InspectableContext;
use crate::gui::{ElementInfo, GuiLayout, GuiWidget, Label};
use crate::inspectable::InspectableState;

const NAME: &str = "PlainTextInspector";

/// Type name of plain text resources
pub const PLAIN_TEXT_TYPE: &str = "PlainText";

/// Member holding the text
const TEXT_FIELD: &str = "text";

/// Read-only preview of a text resource, truncated to
/// [`InspectorSettings::plain_text_preview_chars`](crate::InspectorSettings::plain_text_preview_chars).
#[derive(Default)]
pub struct PlainTextInspector {
    base: InspectorBase,
    label: Label,
}

impl PlainTextInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently displayed
    pub fn shown_text(&self) -> &str {
        &self.label.text
    }
}

impl Inspector for PlainTextInspector {
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
        let title_width = context.settings().default_title_width;
        self.base.layout_mut().add_element(
            0,
            ElementInfo {
                owner: TEXT_FIELD.to_string(),
                label: String::new(),
                kind: self.label.kind(),
                depth: 0,
                title_width,
            },
        );
    }

    fn refresh(&mut self, _force: bool) -> InspectableState {
        let (Some(target), Some(context)) = (self.base.target(), self.base.context()) else {
            return InspectableState::NotModified;
        };
        if !self.base.is_initialized() {
            return InspectableState::NotModified;
        }

        let limit = context.settings().plain_text_preview_chars;
        let object = target.read();
        let Some(void_core::Value::String(text)) = object.field(TEXT_FIELD) else {
            return InspectableState::NotModified;
        };

        let shown: String = text.chars().take(limit).collect();
        if shown != self.label.text {
            log::trace!("Plain text preview updated ({} chars)", shown.chars().count());
            self.label.text = shown;
        }
        InspectableState::NotModified
    }

    fn destroy(&mut self) {
        self.label.text.clear();
        self.base.destroy();
    }

    fn layout(&self) -> &GuiLayout {
        self.base.layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use void_core::SerializableObject;

    use crate::settings::InspectorSettings;

    #[test]
    fn test_preview_is_truncated() {
        let settings = InspectorSettings {
            plain_text_preview_chars: 5,
            ..Default::default()
        };
        let ctx = InspectableContext::with_settings(settings);
        let text = SerializableObject::new(PLAIN_TEXT_TYPE)
            .with_field(TEXT_FIELD, "héllo wörld")
            .into_shared();

        let mut inspector = PlainTextInspector::new();
        inspector.initialize(&text, &ctx);
        assert_eq!(inspector.refresh(false), InspectableState::NotModified);
        assert_eq!(inspector.shown_text(), "héllo");
        assert_eq!(inspector.layout().len(), 1);

        text.write().set_field(TEXT_FIELD, "bye");
        inspector.refresh(false);
        assert_eq!(inspector.shown_text(), "bye");
    }

    #[test]
    fn test_destroyed_inspector_does_nothing() {
        let ctx = InspectableContext::new();
        let text = SerializableObject::new(PLAIN_TEXT_TYPE).with_field(TEXT_FIELD, "abc").into_shared();

        let mut inspector = PlainTextInspector::new();
        inspector.initialize(&text, &ctx);
        inspector.destroy();
        assert_eq!(inspector.lifecycle(), InspectorLifecycle::Destroyed);

        inspector.refresh(true);
        assert_eq!(inspector.shown_text(), "");
        inspector.initialize(&text, &ctx);
        assert_eq!(inspector.lifecycle(), InspectorLifecycle::Destroyed);
    }
}
