mod commands;
mod history;

pub use commands::Command;
pub use history::CommandHistory;

/// Process-unique identity of one invoked command. The "command at last
/// save" reference compares these ids, never command payloads.
pub type CommandId = usize;
