//! Void Engine Inspector
//!
//! Property inspectors for the editor: every serialized field of the
//! selected object is shown through an inspectable field that keeps its
//! widget in sync with the property and records edits on a shared undo
//! stack.
//!
//! ## Features
//!
//! - **Inspectable fields**: int, float, bool, string, color, enum,
//!   resource, vector distribution, nested object and radian (edited in degrees)
//! - **Gesture undo**: all keystrokes between focus-in and confirm become one
//!   undo entry
//! - **Focus safety**: refresh never overwrites a widget the user is typing in
//! - **Custom inspectors**: per type (along its base chain) or per attribute
//! - **Settings**: TOML persisted undo capacity and display limits
//!
//! ## Architecture
//!
//! ```text
//! Selection → InspectorUtility → Inspector → InspectableField → SerializableProperty
//!                                                   ↓
//!                                     InspectableContext (undo stack)
//! ```

pub mod undo;
pub mod gui;
pub mod inspectable;
pub mod inspector;
pub mod context;
pub mod utility;
pub mod settings;
pub mod error;

pub use undo::{CommandError, CommandResult, SetPropertyCommand, UndoRedo, UndoableCommand};
pub use inspectable::{
    create_inspectable, FieldBase, InspectableField, InspectableFieldStyleInfo, InspectableState,
};
pub use inspector::{GenericInspector, Inspector, InspectorLifecycle, PlainTextInspector};
pub use context::InspectableContext;
pub use utility::{InspectableFactory, InspectorFactory, InspectorUtility};
pub use settings::InspectorSettings;
pub use error::{InspectorError, Result};

/// Inspector version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Void Inspector";
