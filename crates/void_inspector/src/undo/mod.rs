//! Undo/redo support for inspector edits.
//!
//! Property edits are written live, then recorded after the fact as a single
//! already-applied command per gesture. The stack only ever executes commands
//! when undoing or redoing.

mod command;
mod history;

pub use command::{UndoableCommand, CommandResult, CommandError, SetPropertyCommand};
pub use history::UndoRedo;
