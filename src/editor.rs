use std::path::{Path, PathBuf};

use crate::codec::{self, Compression};
use crate::command::{Command, CommandHistory};
use crate::draw;
use crate::error::MapResult;
use crate::event::{EventBus, MapEvent, MapEventHandler};
use crate::map::{Brush, Cell, Coord, CoordSet, MapGrid};
use crate::tool::Tool;

const DEFAULT_SCREEN_SIZE: (i32, i32) = (10, 10);

/// An editing session over one map: palette, toolbar, screen paging
/// state, undo/redo history, and the save-file bookkeeping.
///
/// Every state transition is announced on the event bus so a presentation
/// layer can redraw the affected region. All coordinates passed in are
/// absolute map coordinates; callers working in screen space convert
/// through the grid's coordinate-conversion methods first.
pub struct MapEditor<B> {
    grid: MapGrid<B>,
    history: CommandHistory<B>,
    bus: EventBus<B>,

    palette: Vec<B>,
    toolbar: Vec<Tool>,
    current_brush_index: Option<usize>,
    previous_brush_index: Option<usize>,
    current_tool_index: Option<usize>,
    previous_tool_index: Option<usize>,

    screen_width: i32,
    screen_height: i32,
    screen_x: i32,
    screen_y: i32,
    screen_enabled: bool,

    cell_indicators: Vec<Cell<B>>,
    status: String,
    save_filename: Option<PathBuf>,
    save_enabled: bool,
}

impl<B: Brush> MapEditor<B> {
    pub fn new(grid: MapGrid<B>, palette: Vec<B>) -> Self {
        let current_brush_index = if palette.is_empty() { None } else { Some(0) };
        Self {
            grid,
            history: CommandHistory::new(),
            bus: EventBus::new(),
            palette,
            toolbar: Tool::DEFAULT_TOOLBAR.to_vec(),
            current_brush_index,
            previous_brush_index: None,
            current_tool_index: Some(0),
            previous_tool_index: None,
            screen_width: DEFAULT_SCREEN_SIZE.0,
            screen_height: DEFAULT_SCREEN_SIZE.1,
            screen_x: 0,
            screen_y: 0,
            screen_enabled: false,
            cell_indicators: Vec::new(),
            status: String::new(),
            save_filename: None,
            save_enabled: false,
        }
    }

    pub fn grid(&self) -> &MapGrid<B> {
        &self.grid
    }

    pub fn subscribe(&self, handler: Box<dyn MapEventHandler<B>>) {
        self.bus.subscribe(handler);
    }

    pub fn modified(&self) -> bool {
        self.history.modified()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn save_filename(&self) -> Option<&Path> {
        self.save_filename.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn palette(&self) -> &[B] {
        &self.palette
    }

    pub fn toolbar(&self) -> &[Tool] {
        &self.toolbar
    }

    pub fn current_tool(&self) -> Option<Tool> {
        self.current_tool_index
            .and_then(|index| self.toolbar.get(index))
            .copied()
    }

    pub fn current_brush(&self) -> Option<&B> {
        self.current_brush_index
            .and_then(|index| self.palette.get(index))
    }

    pub fn screen_enabled(&self) -> bool {
        self.screen_enabled
    }

    pub fn selected_screen(&self) -> Coord {
        (self.screen_x, self.screen_y)
    }

    pub fn screen_dimensions(&self) -> (i32, i32) {
        (self.screen_width, self.screen_height)
    }

    /// Re-announces the whole session state, so a freshly subscribed
    /// presentation layer can draw itself without poking at accessors.
    pub fn announce(&self) {
        let size = (self.grid.width(), self.grid.height());
        self.bus.emit(MapEvent::PaletteChanged {
            palette: self.palette.clone(),
        });
        self.bus.emit(MapEvent::ToolbarChanged {
            tools: self.toolbar.clone(),
        });
        self.bus.emit(MapEvent::BrushChanged {
            brush: self.current_brush_index,
        });
        self.bus.emit(MapEvent::ToolChanged {
            tool: self.current_tool_index,
        });
        self.bus.emit(MapEvent::ScreenDimensionsChanged {
            width: self.screen_width,
            height: self.screen_height,
        });
        self.bus.emit(MapEvent::SelectedScreenChanged {
            x: self.screen_x,
            y: self.screen_y,
        });
        self.bus.emit(MapEvent::ScreenEnabled {
            enabled: self.screen_enabled,
        });
        self.bus.emit(MapEvent::ModifiedChanged {
            modified: self.history.modified(),
        });
        self.bus.emit(MapEvent::SaveEnabledChanged {
            enabled: self.save_enabled,
        });
        self.bus.emit(MapEvent::UndoAvailabilityChanged {
            available: self.history.can_undo(),
        });
        self.bus.emit(MapEvent::RedoAvailabilityChanged {
            available: self.history.can_redo(),
        });
        self.bus.emit(MapEvent::Resized {
            old_size: size,
            new_size: size,
        });
    }

    pub fn set_palette(&mut self, palette: Vec<B>) {
        self.palette = palette;
        self.bus.emit(MapEvent::PaletteChanged {
            palette: self.palette.clone(),
        });
    }

    pub fn set_brush(&mut self, index: usize) {
        if self.current_brush_index != Some(index) {
            self.previous_brush_index = self.current_brush_index;
        }
        self.current_brush_index = Some(index);
        self.bus.emit(MapEvent::BrushChanged {
            brush: self.current_brush_index,
        });
    }

    /// Reselects the brush that was active before the current one.
    pub fn previous_brush(&mut self) {
        if let Some(index) = self.previous_brush_index {
            self.set_brush(index);
        }
    }

    /// Cycles through a hotkey's list of palette indices, starting over
    /// when the current brush is not in the list (or ends it).
    pub fn cycle_brush(&mut self, indices: &[usize]) {
        if let Some(index) = next_cycled(indices, self.current_brush_index) {
            self.set_brush(index);
        }
    }

    pub fn set_tool(&mut self, index: usize) {
        if self.current_tool_index != Some(index) {
            self.previous_tool_index = self.current_tool_index;
        }
        self.current_tool_index = Some(index);
        self.bus.emit(MapEvent::ToolChanged {
            tool: self.current_tool_index,
        });
    }

    pub fn previous_tool(&mut self) {
        if let Some(index) = self.previous_tool_index {
            self.set_tool(index);
        }
    }

    pub fn cycle_tool(&mut self, indices: &[usize]) {
        if let Some(index) = next_cycled(indices, self.current_tool_index) {
            self.set_tool(index);
        }
    }

    /// Resizes the map in place. Not undoable, mirrors a menu action.
    pub fn resize_map(&mut self, width: i32, height: i32, fill: B) -> MapResult<()> {
        let old_size = (self.grid.width(), self.grid.height());
        self.grid.resize(width, height, fill)?;
        self.bus.emit(MapEvent::Resized {
            old_size,
            new_size: (width, height),
        });
        Ok(())
    }

    /// Wraps `cells` in a write command, executes it, and records it on
    /// the undo stack.
    pub fn apply_cells(&mut self, cells: Vec<Cell<B>>) -> MapResult<()> {
        self.history
            .invoke(Command::write_cells(cells), &mut self.grid)?;
        let written = self
            .history
            .peek_undo()
            .map(|command| command.cells().to_vec())
            .unwrap_or_default();
        self.bus.emit(MapEvent::CellsWritten { cells: written });
        self.sync_modified();
        self.bus.emit(MapEvent::UndoAvailabilityChanged { available: true });
        self.bus
            .emit(MapEvent::RedoAvailabilityChanged { available: false });
        Ok(())
    }

    /// Paints one cell with the active brush. A no-op without one.
    pub fn paint(&mut self, coordinate: Coord) -> MapResult<()> {
        let Some(brush) = self.current_brush().cloned() else {
            return Ok(());
        };
        self.apply_cells(vec![Cell::new(coordinate.0, coordinate.1, brush)])
    }

    /// Computes the current tool's cells for a gesture from `start` to
    /// `end` and publishes them as preview indicators. Nothing is written.
    pub fn preview(&mut self, start: Coord, end: Coord) -> MapResult<Vec<Cell<B>>> {
        let cells = self.tool_cells(start, end)?;
        self.set_cell_indicators(cells.clone());
        Ok(cells)
    }

    /// Commits a gesture: computes the current tool's cells and applies
    /// them as one undoable command, dropping any preview indicators.
    pub fn commit(&mut self, start: Coord, end: Coord) -> MapResult<()> {
        let cells = self.tool_cells(start, end)?;
        self.clear_cell_indicators();
        if self.current_brush_index.is_none() || self.current_tool_index.is_none() {
            return Ok(());
        }
        self.apply_cells(cells)
    }

    /// Abandons an in-flight gesture without touching history.
    pub fn cancel(&mut self) {
        self.clear_cell_indicators();
        self.set_status(" ");
    }

    pub fn undo(&mut self) -> MapResult<bool> {
        if !self.history.undo(&mut self.grid)? {
            return Ok(false);
        }
        let restored = self
            .history
            .peek_redo()
            .and_then(|command| command.previous_cells())
            .map(<[Cell<B>]>::to_vec)
            .unwrap_or_default();
        self.bus.emit(MapEvent::CellsWritten { cells: restored });
        self.sync_modified();
        self.bus.emit(MapEvent::RedoAvailabilityChanged { available: true });
        self.bus.emit(MapEvent::UndoAvailabilityChanged {
            available: self.history.can_undo(),
        });
        Ok(true)
    }

    pub fn redo(&mut self) -> MapResult<bool> {
        if !self.history.redo(&mut self.grid)? {
            return Ok(false);
        }
        let written = self
            .history
            .peek_undo()
            .map(|command| command.cells().to_vec())
            .unwrap_or_default();
        self.bus.emit(MapEvent::CellsWritten { cells: written });
        self.sync_modified();
        self.bus.emit(MapEvent::UndoAvailabilityChanged { available: true });
        self.bus.emit(MapEvent::RedoAvailabilityChanged {
            available: self.history.can_redo(),
        });
        Ok(true)
    }

    /// Saves to the remembered filename. Returns `false` when no filename
    /// has been set yet (callers should fall back to `save_as`).
    pub fn save(&mut self, compression: Option<Compression>) -> MapResult<bool> {
        let Some(path) = self.save_filename.clone() else {
            return Ok(false);
        };
        codec::save_to_path(&self.grid, &path, compression)?;
        self.history.mark_saved();
        self.sync_modified();
        Ok(true)
    }

    pub fn save_as(&mut self, path: &Path, compression: Option<Compression>) -> MapResult<()> {
        codec::save_to_path(&self.grid, path, compression)?;
        self.set_save_filename(Some(path.to_path_buf()));
        self.history.mark_saved();
        self.sync_modified();
        Ok(())
    }

    /// Opens a document, replacing the map and dropping all history. A
    /// failed load leaves the previous map and history untouched.
    pub fn open(&mut self, path: &Path, default_brush: B) -> MapResult<()> {
        self.disable_screen();
        self.select_screen(0, 0);
        let old_size = (self.grid.width(), self.grid.height());
        codec::load_from_path(&mut self.grid, path, default_brush)?;
        self.set_save_filename(Some(path.to_path_buf()));
        self.history.clear();
        self.history.set_modified(false);
        self.sync_modified();
        self.bus.emit(MapEvent::Resized {
            old_size,
            new_size: (self.grid.width(), self.grid.height()),
        });
        self.announce_history_cleared();
        Ok(())
    }

    /// Starts over with a fresh map, dropping all history.
    pub fn new_map(&mut self, width: i32, height: i32, fill: B) -> MapResult<()> {
        let new_grid = MapGrid::new(width, height, fill)?;
        let old_size = (self.grid.width(), self.grid.height());
        self.grid = new_grid;
        self.set_save_filename(None);
        self.history.clear();
        self.history.set_modified(true);
        self.sync_modified();
        self.bus.emit(MapEvent::Resized {
            old_size,
            new_size: (width, height),
        });
        self.announce_history_cleared();
        Ok(())
    }

    pub fn enable_screen(&mut self) {
        self.screen_enabled = true;
        self.bus.emit(MapEvent::ScreenEnabled { enabled: true });
        self.set_status(format!("Screen: ({}, {})", self.screen_x, self.screen_y));
    }

    pub fn disable_screen(&mut self) {
        self.screen_enabled = false;
        self.bus.emit(MapEvent::ScreenEnabled { enabled: false });
        self.set_status("");
    }

    pub fn toggle_screen(&mut self) {
        if self.screen_enabled {
            self.disable_screen();
        } else {
            self.enable_screen();
        }
    }

    pub fn set_screen_dimensions(&mut self, width: i32, height: i32) {
        self.screen_width = width;
        self.screen_height = height;
        self.bus
            .emit(MapEvent::ScreenDimensionsChanged { width, height });
    }

    pub fn select_screen(&mut self, x: i32, y: i32) {
        self.screen_x = x;
        self.screen_y = y;
        self.bus.emit(MapEvent::SelectedScreenChanged { x, y });
    }

    pub fn screen_up(&mut self) -> MapResult<()> {
        if self.screen_enabled && self.screen_y > 0 {
            self.select_screen(self.screen_x, self.screen_y - 1);
            self.announce_screen();
        }
        Ok(())
    }

    pub fn screen_down(&mut self) -> MapResult<()> {
        if self.screen_enabled && self.screen_y + 1 < self.grid.screens_high(self.screen_height)? {
            self.select_screen(self.screen_x, self.screen_y + 1);
            self.announce_screen();
        }
        Ok(())
    }

    pub fn screen_left(&mut self) -> MapResult<()> {
        if self.screen_enabled && self.screen_x > 0 {
            self.select_screen(self.screen_x - 1, self.screen_y);
            self.announce_screen();
        }
        Ok(())
    }

    pub fn screen_right(&mut self) -> MapResult<()> {
        if self.screen_enabled && self.screen_x + 1 < self.grid.screens_wide(self.screen_width)? {
            self.select_screen(self.screen_x + 1, self.screen_y);
            self.announce_screen();
        }
        Ok(())
    }

    pub fn set_cell_indicators(&mut self, cells: Vec<Cell<B>>) {
        self.cell_indicators = cells;
        self.bus.emit(MapEvent::CellIndicatorsChanged {
            cells: self.cell_indicators.clone(),
        });
    }

    pub fn clear_cell_indicators(&mut self) {
        self.set_cell_indicators(Vec::new());
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.bus.emit(MapEvent::StatusChanged {
            status: self.status.clone(),
        });
    }

    fn set_save_filename(&mut self, filename: Option<PathBuf>) {
        self.save_filename = filename;
        self.bus.emit(MapEvent::SaveFilenameChanged {
            filename: self.save_filename.clone(),
        });
    }

    /// The coordinate restriction in force: the selected screen's cells
    /// when paging is enabled, otherwise none.
    fn consider_set(&self) -> MapResult<Option<CoordSet>> {
        if !self.screen_enabled {
            return Ok(None);
        }
        let coordinates = self.grid.screen_as_map_coordinates(
            self.screen_width,
            self.screen_height,
            self.screen_x,
            self.screen_y,
        )?;
        Ok(Some(coordinates.into_iter().collect()))
    }

    fn tool_cells(&self, start: Coord, end: Coord) -> MapResult<Vec<Cell<B>>> {
        let (Some(tool), Some(brush)) = (self.current_tool(), self.current_brush().cloned())
        else {
            return Ok(Vec::new());
        };
        let consider = self.consider_set()?;
        let consider = consider.as_ref();
        match tool {
            Tool::Paint => Ok(vec![Cell::new(end.0, end.1, brush)]),
            Tool::Line => draw::line(start, end, &brush, consider),
            Tool::Square => draw::rectangle(&self.grid, start, end, &brush, false, consider),
            Tool::Box => draw::rectangle(&self.grid, start, end, &brush, true, consider),
            Tool::FillFour => draw::flood_fill(&self.grid, end, &brush, false, consider),
            Tool::FillEight => draw::flood_fill(&self.grid, end, &brush, true, consider),
        }
    }

    // The modified flag lives in the history; mirror it out to the bus
    // together with the derived save-enabled flag.
    fn sync_modified(&mut self) {
        let modified = self.history.modified();
        self.bus.emit(MapEvent::ModifiedChanged { modified });
        self.save_enabled = modified && self.save_filename.is_some();
        self.bus.emit(MapEvent::SaveEnabledChanged {
            enabled: self.save_enabled,
        });
    }

    fn announce_history_cleared(&self) {
        self.bus
            .emit(MapEvent::UndoAvailabilityChanged { available: false });
        self.bus
            .emit(MapEvent::RedoAvailabilityChanged { available: false });
    }

    fn announce_screen(&mut self) {
        self.set_status(format!("Screen: ({}, {})", self.screen_x, self.screen_y));
    }
}

fn next_cycled(indices: &[usize], current: Option<usize>) -> Option<usize> {
    if indices.is_empty() {
        return None;
    }
    let mut next = 0;
    if let Some(current) = current {
        if let Some(position) = indices.iter().position(|&index| index == current) {
            next = position + 1;
            if next >= indices.len() {
                next = 0;
            }
        }
    }
    Some(indices[next])
}
