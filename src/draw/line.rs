use crate::error::{MapError, MapResult};
use crate::map::{Brush, Cell, Coord, CoordSet};

/// Cells along the line from `start` to `end`, endpoints included.
///
/// Axis-aligned lines enumerate every coordinate along the shared axis.
/// Everything else is integer Bresenham: one cell per major-axis step,
/// no duplicate rows or columns. Cells outside `consider` are dropped.
pub fn line<B: Brush>(
    start: Coord,
    end: Coord,
    brush: &B,
    consider: Option<&CoordSet>,
) -> MapResult<Vec<Cell<B>>> {
    if start == end {
        return Err(MapError::LineEndpoint);
    }

    let (x_one, y_one) = start;
    let (x_two, y_two) = end;
    let mut cells = Vec::new();

    if x_one == x_two {
        let (small_y, big_y) = if y_one <= y_two {
            (y_one, y_two)
        } else {
            (y_two, y_one)
        };
        for y in small_y..=big_y {
            cells.push(Cell::new(x_one, y, brush.clone()));
        }
    } else if y_one == y_two {
        let (small_x, big_x) = if x_one <= x_two {
            (x_one, x_two)
        } else {
            (x_two, x_one)
        };
        for x in small_x..=big_x {
            cells.push(Cell::new(x, y_one, brush.clone()));
        }
    } else if (y_two - y_one).abs() < (x_two - x_one).abs() {
        // x is the major axis: iterate left to right
        let ((start_x, start_y), (end_x, end_y)) = if x_one > x_two {
            ((x_two, y_two), (x_one, y_one))
        } else {
            ((x_one, y_one), (x_two, y_two))
        };

        let change_in_x = end_x - start_x;
        let mut change_in_y = end_y - start_y;
        let mut y_increment = 1;
        if change_in_y < 0 {
            y_increment = -1;
            change_in_y = -change_in_y;
        }

        let mut decision = 2 * change_in_y - change_in_x;
        let mut y = start_y;
        for x in start_x..=end_x {
            cells.push(Cell::new(x, y, brush.clone()));
            if decision > 0 {
                y += y_increment;
                decision += 2 * (change_in_y - change_in_x);
            } else {
                decision += 2 * change_in_y;
            }
        }
    } else {
        // y is the major axis: iterate top to bottom
        let ((start_x, start_y), (end_x, end_y)) = if y_one > y_two {
            ((x_two, y_two), (x_one, y_one))
        } else {
            ((x_one, y_one), (x_two, y_two))
        };

        let mut change_in_x = end_x - start_x;
        let change_in_y = end_y - start_y;
        let mut x_increment = 1;
        if change_in_x < 0 {
            x_increment = -1;
            change_in_x = -change_in_x;
        }

        let mut decision = 2 * change_in_x - change_in_y;
        let mut x = start_x;
        for y in start_y..=end_y {
            cells.push(Cell::new(x, y, brush.clone()));
            if decision > 0 {
                x += x_increment;
                decision += 2 * (change_in_x - change_in_y);
            } else {
                decision += 2 * change_in_x;
            }
        }
    }

    if let Some(consider) = consider {
        cells.retain(|cell| consider.contains(&cell.coord()));
    }

    Ok(cells)
}
