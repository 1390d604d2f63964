//! Inspectors.
//!
//! An inspector shows one inspected object. It is created by
//! [`InspectorUtility::get_inspector`](crate::InspectorUtility::get_inspector)
//! when the selection changes, initialized once, refreshed every frame and
//! destroyed when the selection moves on:
//!
//! ```text
//! Uninitialized → Initialized → [refresh]* → Destroyed
//! ```

mod generic;
mod plain_text;

pub use generic::GenericInspector;
pub use plain_text::{PlainTextInspector, PLAIN_TEXT_TYPE};

use std::sync::Weak;

use parking_lot::RwLock;
use void_core::{SerializableObject, SharedObject};

use crate::context::InspectableContext;
use crate::gui::{GuiEvent, GuiLayout, GuiValue};
use crate::inspectable::InspectableState;

/// Where an inspector is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InspectorLifecycle {
    #[default]
    Uninitialized,
    Initialized,
    Destroyed,
}

/// Editor for one inspected object.
pub trait Inspector: Send {
    /// Name used in logs
    fn name(&self) -> &str;

    fn lifecycle(&self) -> InspectorLifecycle;

    /// Build the inspector's GUI for `target`. Only the first call has any
    /// effect.
    fn initialize(&mut self, target: &SharedObject, context: &InspectableContext);

    /// Refresh every field in construction order and return the most severe
    /// state any of them reported. Does nothing unless initialized.
    fn refresh(&mut self, force: bool) -> InspectableState;

    /// Tear down the GUI. The inspector cannot be used afterwards.
    fn destroy(&mut self);

    fn layout(&self) -> &GuiLayout;

    /// Move input focus to the field at `path`, optionally followed by a
    /// `.`-separated sub-field (`emitter/velocity.min.X`). Returns whether a
    /// field took it.
    fn set_focus(&mut self, _path: &str) -> bool {
        false
    }

    /// The value shown by the field at `path`
    fn widget_value(&self, _path: &str) -> Option<GuiValue> {
        None
    }

    /// Deliver user input to the field at `path`. Returns whether a field
    /// received it.
    fn handle_event(&mut self, _path: &str, _event: GuiEvent) -> bool {
        false
    }
}

/// State shared by inspector implementations.
#[derive(Debug, Default)]
pub struct InspectorBase {
    lifecycle: InspectorLifecycle,
    target: Weak<RwLock<SerializableObject>>,
    context: Option<InspectableContext>,
    layout: GuiLayout,
}

impl InspectorBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lifecycle(&self) -> InspectorLifecycle {
        self.lifecycle
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == InspectorLifecycle::Initialized
    }

    /// Move to `Initialized`. Returns `false`, leaving everything as it was,
    /// unless the inspector is still uninitialized.
    pub fn begin_initialize(&mut self, name: &str, target: &SharedObject, context: &InspectableContext) -> bool {
        if self.lifecycle != InspectorLifecycle::Uninitialized {
            log::warn!("Inspector '{}' initialized while {:?}", name, self.lifecycle);
            return false;
        }
        self.target = std::sync::Arc::downgrade(target);
        self.context = Some(context.clone());
        self.lifecycle = InspectorLifecycle::Initialized;
        log::debug!("Initialized inspector '{}'", name);
        true
    }

    pub fn destroy(&mut self) {
        self.layout.clear();
        self.context = None;
        self.target = Weak::new();
        self.lifecycle = InspectorLifecycle::Destroyed;
    }

    /// The inspected object, if it is still alive
    pub fn target(&self) -> Option<SharedObject> {
        self.target.upgrade()
    }

    pub fn context(&self) -> Option<&InspectableContext> {
        self.context.as_ref()
    }

    pub fn layout(&self) -> &GuiLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut GuiLayout {
        &mut self.layout
    }
}
