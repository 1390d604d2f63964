//! Command trait and result types.

use void_core::{SerializableProperty, Value};

/// Result type for command execution.
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// The property the command targets could not be written
    #[error("Property error: {0}")]
    Property(#[from] void_core::Error),
    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    /// Generic error
    #[error("Error: {0}")]
    Other(String),
}

/// A command that can be executed, undone, and redone.
///
/// Commands registered with [`UndoRedo`](super::UndoRedo) have already been
/// applied; `execute` is only called again on redo.
///
/// # Example
///
/// ```ignore
/// struct RenameCommand {
///     property: SerializableProperty,
///     old_name: String,
///     new_name: String,
/// }
///
/// impl UndoableCommand for RenameCommand {
///     fn description(&self) -> &str { "Rename" }
///
///     fn execute(&mut self) -> CommandResult {
///         self.property.set(self.new_name.clone())?;
///         Ok(())
///     }
///
///     fn undo(&mut self) -> CommandResult {
///         self.property.set(self.old_name.clone())?;
///         Ok(())
///     }
/// }
/// ```
pub trait UndoableCommand: Send {
    /// Human-readable description for the undo/redo menu.
    fn description(&self) -> &str;

    /// Apply the command (redo direction).
    fn execute(&mut self) -> CommandResult;

    /// Restore the state from before the command.
    fn undo(&mut self) -> CommandResult;
}

/// Records one property change: the value before and after a gesture.
pub struct SetPropertyCommand {
    property: SerializableProperty,
    old_value: Value,
    new_value: Value,
    description: String,
}

impl SetPropertyCommand {
    pub fn new(property: SerializableProperty, old_value: Value, new_value: Value) -> Self {
        let description = format!("Change {}", property.path());
        Self {
            property,
            old_value,
            new_value,
            description,
        }
    }

    pub fn property(&self) -> &SerializableProperty {
        &self.property
    }

    pub fn old_value(&self) -> &Value {
        &self.old_value
    }

    pub fn new_value(&self) -> &Value {
        &self.new_value
    }
}

impl UndoableCommand for SetPropertyCommand {
    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&mut self) -> CommandResult {
        self.property.set(self.new_value.clone())?;
        Ok(())
    }

    fn undo(&mut self) -> CommandResult {
        self.property.set(self.old_value.clone())?;
        Ok(())
    }
}

impl std::fmt::Debug for SetPropertyCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetPropertyCommand")
            .field("path", &self.property.path().to_string())
            .field("old_value", &self.old_value)
            .field("new_value", &self.new_value)
            .finish()
    }
}
