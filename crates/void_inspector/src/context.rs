//! Shared state handed to every inspectable field.
//!
//! Holds the undo stack, the single open undo transaction, the resource
//! loader, the type registry and per-path persistent UI flags. Cloning a
//! context shares all of it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use void_core::{Id, ResourceCache, ResourceLoader, SerializableProperty, TypeRegistry, Value};

use crate::settings::InspectorSettings;
use crate::undo::{CommandResult, SetPropertyCommand, UndoRedo};
use crate::utility::InspectorUtility;

/// An open undo recording window for one property.
struct UndoTransaction {
    property: SerializableProperty,
    sub_field: Option<String>,
    original: Value,
}

/// Context shared by the fields of one or more inspectors.
#[derive(Clone)]
pub struct InspectableContext {
    undo: Arc<Mutex<UndoRedo>>,
    transaction: Arc<Mutex<Option<UndoTransaction>>>,
    resources: Arc<dyn ResourceLoader>,
    types: Arc<TypeRegistry>,
    utility: Arc<InspectorUtility>,
    persistent: Arc<Mutex<HashMap<String, bool>>>,
    settings: Arc<InspectorSettings>,
}

impl Default for InspectableContext {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectableContext {
    /// Context with default settings, an empty resource cache, an empty type
    /// registry and the default custom inspectors.
    pub fn new() -> Self {
        Self::with_settings(InspectorSettings::default())
    }

    pub fn with_settings(settings: InspectorSettings) -> Self {
        Self {
            undo: Arc::new(Mutex::new(UndoRedo::with_capacity(settings.undo_capacity))),
            transaction: Arc::new(Mutex::new(None)),
            resources: Arc::new(ResourceCache::new()),
            types: Arc::new(TypeRegistry::new()),
            utility: Arc::new(InspectorUtility::with_defaults()),
            persistent: Arc::new(Mutex::new(HashMap::new())),
            settings: Arc::new(settings),
        }
    }

    pub fn with_resources(mut self, resources: Arc<dyn ResourceLoader>) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_types(mut self, types: TypeRegistry) -> Self {
        self.types = Arc::new(types);
        self
    }

    pub fn with_utility(mut self, utility: InspectorUtility) -> Self {
        self.utility = Arc::new(utility);
        self
    }

    pub fn resources(&self) -> &dyn ResourceLoader {
        self.resources.as_ref()
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn utility(&self) -> &InspectorUtility {
        &self.utility
    }

    pub fn settings(&self) -> &InspectorSettings {
        &self.settings
    }

    /// Lock the undo stack.
    pub fn undo_redo(&self) -> MutexGuard<'_, UndoRedo> {
        self.undo.lock()
    }

    /// Open the undo transaction for `property`, snapshotting its current value.
    ///
    /// Only one transaction is open at a time; one that is still open is
    /// closed first, committing it if its value changed.
    pub fn start_undo(&self, property: &SerializableProperty, sub_field: Option<&str>) {
        let mut transaction = self.transaction.lock();
        if let Some(previous) = transaction.take() {
            self.commit(previous);
        }

        let Some(original) = property.value() else {
            log::trace!("Not recording undo for unresolvable '{}'", property.path());
            return;
        };

        log::debug!(
            "Start undo '{}'{}",
            property.path(),
            sub_field.map(|s| format!(" ({})", s)).unwrap_or_default()
        );
        *transaction = Some(UndoTransaction {
            property: property.clone(),
            sub_field: sub_field.map(str::to_string),
            original,
        });
    }

    /// Close the open transaction. Registers one command if the value differs
    /// from the snapshot and returns its id.
    pub fn end_undo(&self) -> Option<Id> {
        let previous = self.transaction.lock().take()?;
        self.commit(previous)
    }

    fn commit(&self, transaction: UndoTransaction) -> Option<Id> {
        let UndoTransaction { property, sub_field, original } = transaction;
        let current = property.value()?;
        if current == original {
            log::trace!("End undo '{}': unchanged", property.path());
            return None;
        }

        let id = self
            .undo
            .lock()
            .register_command(Box::new(SetPropertyCommand::new(property, original, current)));
        log::debug!(
            "End undo: registered command {}{}",
            id,
            sub_field.map(|s| format!(" ({})", s)).unwrap_or_default()
        );
        Some(id)
    }

    /// Whether an undo transaction is open
    pub fn has_open_transaction(&self) -> bool {
        self.transaction.lock().is_some()
    }

    /// Path and sub-field of the open transaction
    pub fn open_transaction(&self) -> Option<(String, Option<String>)> {
        self.transaction
            .lock()
            .as_ref()
            .map(|t| (t.property.path().to_string(), t.sub_field.clone()))
    }

    /// Close any open transaction, then undo the last command.
    pub fn undo(&self) -> CommandResult {
        self.end_undo();
        self.undo.lock().undo()
    }

    /// Close any open transaction, then redo the last undone command.
    pub fn redo(&self) -> CommandResult {
        self.end_undo();
        self.undo.lock().redo()
    }

    /// Persistent expanded flag of a foldout. Defaults to collapsed.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.persistent.lock().get(path).copied().unwrap_or(false)
    }

    pub fn set_expanded(&self, path: &str, expanded: bool) {
        self.persistent.lock().insert(path.to_string(), expanded);
    }
}

impl fmt::Debug for InspectableContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open_transaction = self.open_transaction();
        f.debug_struct("InspectableContext")
            .field("undo", &*self.undo.lock())
            .field("open_transaction", &open_transaction)
            .field("types", &self.types.len())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use void_core::SerializableObject;

    fn property() -> (void_core::SharedObject, SerializableProperty) {
        let obj = SerializableObject::new("Light").with_field("range", 10.0f32).into_shared();
        let prop = SerializableProperty::for_field(&obj, "range").unwrap();
        (obj, prop)
    }

    #[test]
    fn test_unchanged_transaction_registers_nothing() {
        let ctx = InspectableContext::new();
        let (_obj, prop) = property();

        ctx.start_undo(&prop, None);
        assert!(ctx.has_open_transaction());
        assert_eq!(ctx.end_undo(), None);
        assert!(!ctx.has_open_transaction());
        assert_eq!(ctx.undo_redo().undo_count(), 0);
    }

    #[test]
    fn test_changed_transaction_registers_one_command() {
        let ctx = InspectableContext::new();
        let (_obj, prop) = property();

        ctx.start_undo(&prop, None);
        prop.set(11.0f32).unwrap();
        prop.set(12.0f32).unwrap();
        let id = ctx.end_undo();

        assert!(id.is_some());
        assert_eq!(ctx.undo_redo().top_command_id(), id);
        assert_eq!(ctx.undo_redo().undo_count(), 1);

        ctx.undo().unwrap();
        assert_eq!(prop.get::<f32>(), Some(10.0));
        ctx.redo().unwrap();
        assert_eq!(prop.get::<f32>(), Some(12.0));
    }

    #[test]
    fn test_start_resolves_previous_transaction() {
        let ctx = InspectableContext::new();
        let (_obj, prop) = property();

        ctx.start_undo(&prop, Some("min.X"));
        assert_eq!(ctx.open_transaction(), Some(("range".to_string(), Some("min.X".to_string()))));
        prop.set(3.0f32).unwrap();

        ctx.start_undo(&prop, None);
        assert_eq!(ctx.undo_redo().undo_count(), 1);
        assert_eq!(ctx.end_undo(), None);
    }

    #[test]
    fn test_expired_target_opens_nothing() {
        let ctx = InspectableContext::new();
        let (obj, prop) = property();
        drop(obj);

        ctx.start_undo(&prop, None);
        assert!(!ctx.has_open_transaction());
    }

    #[test]
    fn test_undo_skips_deleted_target() {
        let ctx = InspectableContext::new();
        let (kept, kept_prop) = property();
        let (deleted, deleted_prop) = property();

        ctx.start_undo(&kept_prop, None);
        kept_prop.set(2.0f32).unwrap();
        ctx.end_undo();
        ctx.start_undo(&deleted_prop, None);
        deleted_prop.set(5.0f32).unwrap();
        ctx.end_undo();
        drop(deleted);

        assert!(ctx.undo().is_err());
        assert_eq!(ctx.undo_redo().undo_count(), 1);
        ctx.undo().unwrap();
        assert_eq!(kept.read().field("range"), Some(&Value::Float(10.0)));
        assert_eq!(ctx.undo_redo().undo_count(), 0);
    }

    #[test]
    fn test_persistent_expanded_flags() {
        let ctx = InspectableContext::new();
        let shared = ctx.clone();
        assert!(!ctx.is_expanded("transform"));
        shared.set_expanded("transform", true);
        assert!(ctx.is_expanded("transform"));
    }
}
