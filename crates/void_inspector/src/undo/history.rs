//! Undo/redo stack with command ids and named groups.
//!
//! Every registered command gets a unique id so a caller can later remove
//! exactly that command. Groups mark a position in the undo stack; popping a
//! group discards everything registered since it was pushed.

use void_core::{Id, IdGenerator};

use super::{UndoableCommand, CommandResult, CommandError};

struct CommandEntry {
    id: Id,
    command: Box<dyn UndoableCommand>,
}

struct Group {
    name: String,
    /// Undo stack length when the group was pushed
    start: usize,
}

/// Undo/redo history stack.
pub struct UndoRedo {
    /// Commands that can be undone
    undo_stack: Vec<CommandEntry>,
    /// Commands that can be redone
    redo_stack: Vec<CommandEntry>,
    /// Open groups, innermost last
    groups: Vec<Group>,
    ids: IdGenerator,
    /// Maximum history size
    max_size: usize,
    /// Whether history has been modified since last save
    dirty: bool,
}

impl Default for UndoRedo {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoRedo {
    /// Default maximum history size.
    pub const DEFAULT_MAX_SIZE: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_SIZE)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            groups: Vec::new(),
            ids: IdGenerator::new(),
            max_size: max_size.max(1),
            dirty: false,
        }
    }

    /// Check if there are commands to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the description of the next undo command.
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|e| e.command.description())
    }

    /// Get the description of the next redo command.
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.command.description())
    }

    /// Undo descriptions, most recent first.
    pub fn undo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.undo_stack.iter().rev().map(|e| e.command.description())
    }

    /// Redo descriptions, next-to-redo first.
    pub fn redo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.redo_stack.iter().rev().map(|e| e.command.description())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark as saved (clears dirty flag).
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Register a command that has already been applied.
    ///
    /// Clears the redo stack. Returns the id assigned to the command.
    pub fn register_command(&mut self, command: Box<dyn UndoableCommand>) -> Id {
        let id = self.ids.next();
        log::debug!("Registered undo command {} '{}'", id, command.description());

        self.undo_stack.push(CommandEntry { id, command });
        self.redo_stack.clear();
        self.dirty = true;

        // Trim if over limit
        let overflow = self.undo_stack.len().saturating_sub(self.max_size);
        if overflow > 0 {
            self.undo_stack.drain(..overflow);
            for group in &mut self.groups {
                group.start = group.start.saturating_sub(overflow);
            }
        }

        id
    }

    /// Undo the most recent command. Does nothing if the stack is empty.
    ///
    /// A command that fails to undo is discarded, so older commands stay
    /// reachable.
    pub fn undo(&mut self) -> CommandResult {
        let Some(mut entry) = self.undo_stack.pop() else {
            return Ok(());
        };

        let len = self.undo_stack.len();
        for group in &mut self.groups {
            group.start = group.start.min(len);
        }

        if let Err(e) = entry.command.undo() {
            log::warn!("Undo of '{}' failed, discarding it: {}", entry.command.description(), e);
            self.dirty = true;
            return Err(e);
        }

        self.redo_stack.push(entry);
        self.dirty = true;
        Ok(())
    }

    /// Re-apply the most recently undone command. Does nothing if the stack is empty.
    ///
    /// A command that fails to redo is discarded.
    pub fn redo(&mut self) -> CommandResult {
        let Some(mut entry) = self.redo_stack.pop() else {
            return Ok(());
        };

        if let Err(e) = entry.command.execute() {
            log::warn!("Redo of '{}' failed, discarding it: {}", entry.command.description(), e);
            return Err(e);
        }

        self.undo_stack.push(entry);
        self.dirty = true;
        Ok(())
    }

    /// Open a named group. Commands registered from now on belong to it.
    pub fn push_group(&mut self, name: impl Into<String>) {
        let name = name.into();
        log::debug!("Push undo group '{}'", name);
        self.groups.push(Group {
            name,
            start: self.undo_stack.len(),
        });
    }

    /// Close the innermost group and discard, without executing, every
    /// command registered since it was pushed.
    ///
    /// The name must match the innermost open group.
    pub fn pop_group(&mut self, name: &str) -> CommandResult {
        match self.groups.last() {
            Some(group) if group.name == name => {}
            Some(group) => {
                log::warn!("Popping undo group '{}' but innermost group is '{}'", name, group.name);
                return Err(CommandError::InvalidOperation(format!(
                    "undo group '{}' is not the innermost group",
                    name
                )));
            }
            None => {
                log::warn!("Popping undo group '{}' but no group is open", name);
                return Err(CommandError::InvalidOperation(format!("no undo group '{}'", name)));
            }
        }

        if let Some(group) = self.groups.pop() {
            let removed = self.undo_stack.len().saturating_sub(group.start);
            self.undo_stack.truncate(group.start);
            if removed > 0 {
                self.dirty = true;
            }
            log::debug!("Popped undo group '{}' ({} commands)", group.name, removed);
        }
        Ok(())
    }

    /// Remove a command from either stack without executing it.
    ///
    /// Returns `false` if no command has that id.
    pub fn pop_command(&mut self, id: Id) -> bool {
        if let Some(index) = self.undo_stack.iter().position(|e| e.id == id) {
            self.undo_stack.remove(index);
            for group in &mut self.groups {
                if group.start > index {
                    group.start -= 1;
                }
            }
            self.dirty = true;
            return true;
        }

        if let Some(index) = self.redo_stack.iter().position(|e| e.id == id) {
            self.redo_stack.remove(index);
            self.dirty = true;
            return true;
        }

        false
    }

    /// Id of the command at the top of the undo stack.
    pub fn top_command_id(&self) -> Option<Id> {
        self.undo_stack.last().map(|e| e.id)
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.groups.clear();
        self.dirty = false;
    }

    /// Get the number of commands in the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl std::fmt::Debug for UndoRedo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoRedo")
            .field("undo", &self.undo_stack.len())
            .field("redo", &self.redo_stack.len())
            .field("groups", &self.groups.len())
            .field("max_size", &self.max_size)
            .finish()
    }
}
