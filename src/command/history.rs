use super::{Command, CommandId};
use crate::error::MapResult;
use crate::id_generator;
use crate::map::{Brush, MapGrid};

#[derive(Debug)]
struct HistoryEntry<B> {
    id: CommandId,
    command: Command<B>,
}

/// Undo/redo stacks plus the modified-since-save state machine.
///
/// The flag tracks the *position* in history that was last saved: undoing
/// or redoing back to that exact command (compared by id, not payload)
/// clears it again without another save.
#[derive(Debug)]
pub struct CommandHistory<B> {
    undo_stack: Vec<HistoryEntry<B>>,
    redo_stack: Vec<HistoryEntry<B>>,
    last_saved: Option<CommandId>,
    saved_with_empty_history: bool,
    modified: bool,
}

impl<B: Brush> CommandHistory<B> {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            last_saved: None,
            saved_with_empty_history: false,
            modified: true,
        }
    }

    /// Executes `command` against `grid` and pushes it onto the undo
    /// stack. Any redoable commands are discarded.
    pub fn invoke(&mut self, mut command: Command<B>, grid: &mut MapGrid<B>) -> MapResult<CommandId> {
        command.execute(grid)?;
        let id = id_generator::next_command_id();
        self.undo_stack.push(HistoryEntry { id, command });
        self.redo_stack.clear();
        self.modified = true;
        Ok(id)
    }

    /// Reverts the most recent command. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self, grid: &mut MapGrid<B>) -> MapResult<bool> {
        let Some(entry) = self.undo_stack.pop() else {
            return Ok(false);
        };
        if let Err(error) = entry.command.undo(grid) {
            self.undo_stack.push(entry);
            return Err(error);
        }
        self.redo_stack.push(entry);
        self.modified = match self.undo_stack.last() {
            Some(top) => Some(top.id) != self.last_saved,
            None => !self.saved_with_empty_history,
        };
        Ok(true)
    }

    /// Re-executes the most recently undone command. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self, grid: &mut MapGrid<B>) -> MapResult<bool> {
        let Some(mut entry) = self.redo_stack.pop() else {
            return Ok(false);
        };
        if let Err(error) = entry.command.execute(grid) {
            self.redo_stack.push(entry);
            return Err(error);
        }
        self.modified = Some(entry.id) != self.last_saved;
        self.undo_stack.push(entry);
        Ok(true)
    }

    /// Records the current history position as saved and clears the
    /// modified flag.
    pub fn mark_saved(&mut self) {
        self.last_saved = self.undo_stack.last().map(|entry| entry.id);
        self.saved_with_empty_history = self.undo_stack.is_empty();
        self.modified = false;
    }

    /// Drops all history, as on new-file or open-file. The modified flag
    /// is left for the caller to set.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.last_saved = None;
        self.saved_with_empty_history = true;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// The command that the next `undo` would revert.
    pub fn peek_undo(&self) -> Option<&Command<B>> {
        self.undo_stack.last().map(|entry| &entry.command)
    }

    /// The command that the next `redo` would re-execute.
    pub fn peek_redo(&self) -> Option<&Command<B>> {
        self.redo_stack.last().map(|entry| &entry.command)
    }
}

impl<B: Brush> Default for CommandHistory<B> {
    fn default() -> Self {
        Self::new()
    }
}
