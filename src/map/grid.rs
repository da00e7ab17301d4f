use std::collections::HashSet;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};

/// A paintable cell value. Any plain value type qualifies: brushes are
/// compared by value and stored by copy, never by shared reference.
pub trait Brush: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned {}

impl<T> Brush for T where T: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned {}

/// An absolute or screen-relative map coordinate.
pub type Coord = (i32, i32);

/// A set of coordinates used to restrict drawing output (e.g. to one screen).
pub type CoordSet = HashSet<Coord>;

/// One addressed cell: a coordinate plus the brush painted there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell<B> {
    pub x: i32,
    pub y: i32,
    pub brush: B,
}

impl<B> Cell<B> {
    pub fn new(x: i32, y: i32, brush: B) -> Self {
        Self { x, y, brush }
    }

    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }
}

/// The 2D array of brushes at the heart of the editor.
///
/// Invariant: at least one row, every row exactly `width` cells.
/// Coordinates are `(x, y)` with the origin at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct MapGrid<B> {
    rows: Vec<Vec<B>>,
}

impl<B: Brush> MapGrid<B> {
    /// Creates a `width` x `height` grid filled with copies of `brush`.
    pub fn new(width: i32, height: i32, brush: B) -> MapResult<Self> {
        check_size(width, height)?;
        let row = vec![brush; width as usize];
        Ok(Self {
            rows: vec![row; height as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.rows[0].len() as i32
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }

    /// Fails with `OutsideOfMapBounds` unless `(x, y)` is inside the grid,
    /// naming the offending axis.
    pub fn ensure_inside(&self, x: i32, y: i32) -> MapResult<()> {
        if x < 0 || x >= self.width() {
            return Err(MapError::OutsideOfMapBounds(
                "x coordinate outside of map bounds".into(),
            ));
        }
        if y < 0 || y >= self.height() {
            return Err(MapError::OutsideOfMapBounds(
                "y coordinate outside of map bounds".into(),
            ));
        }
        Ok(())
    }

    /// Grows or shrinks each axis independently. New cells are filled with
    /// copies of `brush`; the surviving top-left region is untouched.
    pub fn resize(&mut self, width: i32, height: i32, brush: B) -> MapResult<()> {
        check_size(width, height)?;

        let old_width = self.width();
        if old_width < width {
            let missing = (width - old_width) as usize;
            for row in &mut self.rows {
                row.extend(std::iter::repeat_with(|| brush.clone()).take(missing));
            }
        } else if old_width > width {
            for row in &mut self.rows {
                row.truncate(width as usize);
            }
        }

        let old_height = self.height();
        if old_height < height {
            for _ in old_height..height {
                self.rows.push(vec![brush.clone(); width as usize]);
            }
        } else if old_height > height {
            self.rows.truncate(height as usize);
        }

        Ok(())
    }

    /// Borrow the brush at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<&B> {
        if !self.contains(x, y) {
            return None;
        }
        Some(&self.rows[y as usize][x as usize])
    }

    /// Bounds-checked read of one cell.
    pub fn cell(&self, x: i32, y: i32) -> MapResult<Cell<B>> {
        self.ensure_inside(x, y)?;
        Ok(Cell::new(x, y, self.rows[y as usize][x as usize].clone()))
    }

    /// Bounds-checked read of many cells, in the given order.
    pub fn cells(&self, coordinates: &[Coord]) -> MapResult<Vec<Cell<B>>> {
        coordinates.iter().map(|&(x, y)| self.cell(x, y)).collect()
    }

    /// Bounds-checked write of one cell. Stores a copy of `brush`.
    pub fn write(&mut self, x: i32, y: i32, brush: &B) -> MapResult<()> {
        self.ensure_inside(x, y)?;
        self.rows[y as usize][x as usize] = brush.clone();
        Ok(())
    }

    /// Applies writes in order. A bounds violation partway through aborts
    /// the call but does not roll back writes already applied; callers
    /// needing atomicity must validate coordinates first.
    pub fn write_many(&mut self, cells: &[Cell<B>]) -> MapResult<()> {
        for cell in cells {
            self.write(cell.x, cell.y, &cell.brush)?;
        }
        Ok(())
    }

    pub fn row(&self, y: i32) -> MapResult<Vec<Cell<B>>> {
        if y < 0 || y >= self.height() {
            return Err(MapError::OutsideOfMapBounds(
                "y coordinate outside of map bounds".into(),
            ));
        }
        Ok(self.rows[y as usize]
            .iter()
            .enumerate()
            .map(|(x, brush)| Cell::new(x as i32, y, brush.clone()))
            .collect())
    }

    pub fn column(&self, x: i32) -> MapResult<Vec<Cell<B>>> {
        if x < 0 || x >= self.width() {
            return Err(MapError::OutsideOfMapBounds(
                "x coordinate outside of map bounds".into(),
            ));
        }
        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(y, row)| Cell::new(x, y as i32, row[x as usize].clone()))
            .collect())
    }

    /// Immutable row-major view of the whole grid.
    pub fn as_rows(&self) -> &[Vec<B>] {
        &self.rows
    }

    /// The whole grid flattened to cells, row-major.
    pub fn as_cells(&self) -> Vec<Cell<B>> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(x, brush)| Cell::new(x as i32, y as i32, brush.clone()))
            })
            .collect()
    }
}

impl MapGrid<char> {
    pub fn row_text(&self, y: i32) -> MapResult<String> {
        if y < 0 || y >= self.height() {
            return Err(MapError::OutsideOfMapBounds(
                "y coordinate outside of map bounds".into(),
            ));
        }
        Ok(self.rows[y as usize].iter().collect())
    }

    pub fn column_text(&self, x: i32) -> MapResult<String> {
        if x < 0 || x >= self.width() {
            return Err(MapError::OutsideOfMapBounds(
                "x coordinate outside of map bounds".into(),
            ));
        }
        Ok(self.rows.iter().map(|row| row[x as usize]).collect())
    }

    /// Textual dump, one line per row (trailing newline included).
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.width() as usize + 1) * self.height() as usize);
        for row in &self.rows {
            text.extend(row.iter());
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for MapGrid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn check_size(width: i32, height: i32) -> MapResult<()> {
    if width < 1 {
        return Err(MapError::InvalidMapSize("width must be at least 1".into()));
    }
    if height < 1 {
        return Err(MapError::InvalidMapSize("height must be at least 1".into()));
    }
    Ok(())
}
