use crate::draw::line;
use crate::error::{MapError, MapResult};
use crate::map::{Brush, Cell, Coord, CoordSet, MapGrid};

/// Cells of the axis-aligned rectangle spanned by two corners.
///
/// `filled` emits every cell in the bounding box. An unfilled rectangle
/// whose corners share a row or column degenerates to a single line;
/// otherwise the four edges are emitted as four lines, so corner cells
/// appear twice (harmless, writes are idempotent). Both corners must be
/// inside the grid. Cells outside `consider` are dropped.
pub fn rectangle<B: Brush>(
    grid: &MapGrid<B>,
    corner_one: Coord,
    corner_two: Coord,
    brush: &B,
    filled: bool,
    consider: Option<&CoordSet>,
) -> MapResult<Vec<Cell<B>>> {
    if corner_one == corner_two {
        return Err(MapError::RectangleEndpoint);
    }
    grid.ensure_inside(corner_one.0, corner_one.1)?;
    grid.ensure_inside(corner_two.0, corner_two.1)?;

    let (small_x, big_x) = if corner_one.0 <= corner_two.0 {
        (corner_one.0, corner_two.0)
    } else {
        (corner_two.0, corner_one.0)
    };
    let (small_y, big_y) = if corner_one.1 <= corner_two.1 {
        (corner_one.1, corner_two.1)
    } else {
        (corner_two.1, corner_one.1)
    };

    let mut cells = Vec::new();
    if filled {
        for y in small_y..=big_y {
            for x in small_x..=big_x {
                cells.push(Cell::new(x, y, brush.clone()));
            }
        }
    } else if small_x == big_x || small_y == big_y {
        cells.extend(line((small_x, small_y), (big_x, big_y), brush, None)?);
    } else {
        cells.extend(line((small_x, small_y), (big_x, small_y), brush, None)?);
        cells.extend(line((big_x, small_y), (big_x, big_y), brush, None)?);
        cells.extend(line((big_x, big_y), (small_x, big_y), brush, None)?);
        cells.extend(line((small_x, big_y), (small_x, small_y), brush, None)?);
    }

    if let Some(consider) = consider {
        cells.retain(|cell| consider.contains(&cell.coord()));
    }

    Ok(cells)
}
