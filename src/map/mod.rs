mod grid;
mod screen;

pub use grid::{Brush, Cell, Coord, CoordSet, MapGrid};
pub use screen::ScreenBounds;
