use std::path::PathBuf;

use crate::map::Cell;
use crate::tool::Tool;

/// Change notifications delivered to the presentation layer.
///
/// Each variant carries only the payload needed to redraw the affected
/// region; only `Resized` and the screen events warrant a full repaint.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent<B> {
    /// The map changed dimensions. Sizes are `(width, height)`.
    Resized {
        old_size: (i32, i32),
        new_size: (i32, i32),
    },
    /// Cells were written, whether by a tool, undo, redo, or load.
    CellsWritten { cells: Vec<Cell<B>> },
    PaletteChanged { palette: Vec<B> },
    ToolbarChanged { tools: Vec<Tool> },
    /// The active tool changed (an index into the toolbar).
    ToolChanged { tool: Option<usize> },
    /// The active brush changed (an index into the palette).
    BrushChanged { brush: Option<usize> },
    ScreenEnabled { enabled: bool },
    ScreenDimensionsChanged { width: i32, height: i32 },
    SelectedScreenChanged { x: i32, y: i32 },
    /// The preview-highlight cell set changed.
    CellIndicatorsChanged { cells: Vec<Cell<B>> },
    SaveFilenameChanged { filename: Option<PathBuf> },
    ModifiedChanged { modified: bool },
    SaveEnabledChanged { enabled: bool },
    UndoAvailabilityChanged { available: bool },
    RedoAvailabilityChanged { available: bool },
    StatusChanged { status: String },
}
