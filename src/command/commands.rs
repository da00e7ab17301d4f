use crate::error::MapResult;
use crate::map::{Brush, Cell, Coord, MapGrid};

/// A reversible unit of map mutation.
#[derive(Debug, Clone)]
pub enum Command<B> {
    /// Write a list of cells, remembering the brushes they replace.
    WriteCells {
        cells: Vec<Cell<B>>,
        /// Prior brush values at the target coordinates, captured on the
        /// first execution so undo can restore them exactly.
        previous: Option<Vec<Cell<B>>>,
    },
}

impl<B: Brush> Command<B> {
    pub fn write_cells(cells: Vec<Cell<B>>) -> Self {
        Command::WriteCells {
            cells,
            previous: None,
        }
    }

    /// Captures the brushes currently under the target cells, then applies
    /// the forward writes.
    pub fn execute(&mut self, grid: &mut MapGrid<B>) -> MapResult<()> {
        match self {
            Command::WriteCells { cells, previous } => {
                let coordinates: Vec<Coord> = cells.iter().map(Cell::coord).collect();
                *previous = Some(grid.cells(&coordinates)?);
                grid.write_many(cells)
            }
        }
    }

    /// Replays the captured prior values, restoring the exact previous
    /// state. A no-op if the command was never executed.
    pub fn undo(&self, grid: &mut MapGrid<B>) -> MapResult<()> {
        match self {
            Command::WriteCells { previous, .. } => match previous {
                Some(cells) => grid.write_many(cells),
                None => Ok(()),
            },
        }
    }

    /// The cells this command writes going forward.
    pub fn cells(&self) -> &[Cell<B>] {
        match self {
            Command::WriteCells { cells, .. } => cells,
        }
    }

    /// The captured prior cells, if this command has executed.
    pub fn previous_cells(&self) -> Option<&[Cell<B>]> {
        match self {
            Command::WriteCells { previous, .. } => previous.as_deref(),
        }
    }
}
