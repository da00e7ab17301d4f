use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all invoked commands
static NEXT_COMMAND_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a process-unique id, used to track command identity across
/// the undo/redo stacks and the "command at last save" reference.
pub fn next_command_id() -> usize {
    NEXT_COMMAND_ID.fetch_add(1, Ordering::SeqCst)
}
