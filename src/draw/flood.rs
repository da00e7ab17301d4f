use crate::error::MapResult;
use crate::map::{Brush, Cell, Coord, CoordSet, MapGrid};

/// Scanline flood fill from `seed`, replacing the connected region that
/// shares the seed's current brush.
///
/// Pops a seed, extends its row left then right while cells qualify,
/// records every extended cell, then reseeds each individual qualifying
/// cell in the two adjacent rows within the span. With `eight_way`, the
/// four diagonal neighbors of the span ends are seeded as well. A cell
/// qualifies when it is in bounds, equal to the target brush, unvisited,
/// and (if given) a member of `consider`.
pub fn flood_fill<B: Brush>(
    grid: &MapGrid<B>,
    seed: Coord,
    brush: &B,
    eight_way: bool,
    consider: Option<&CoordSet>,
) -> MapResult<Vec<Cell<B>>> {
    grid.ensure_inside(seed.0, seed.1)?;
    let target = grid.cell(seed.0, seed.1)?.brush;

    let mut cells = Vec::new();
    let mut seen = CoordSet::new();
    let mut seeds: Vec<Coord> = Vec::new();

    match consider {
        Some(consider) if !consider.contains(&seed) => {}
        _ => seeds.push(seed),
    }

    while let Some((seed_x, seed_y)) = seeds.pop() {
        let mut left_x = seed_x;
        let mut right_x = seed_x;
        let y = seed_y;

        while qualifies(grid, &target, consider, &seen, left_x - 1, y) {
            left_x -= 1;
            cells.push(Cell::new(left_x, y, brush.clone()));
            seen.insert((left_x, y));
        }

        while qualifies(grid, &target, consider, &seen, right_x, y) {
            cells.push(Cell::new(right_x, y, brush.clone()));
            seen.insert((right_x, y));
            right_x += 1;
        }
        right_x -= 1;

        // one seed per qualifying cell, not one per contiguous run
        for adjacent_y in [y + 1, y - 1] {
            for x in left_x..=right_x {
                if qualifies(grid, &target, consider, &seen, x, adjacent_y) {
                    seeds.push((x, adjacent_y));
                }
            }
        }

        if eight_way {
            for corner in [
                (left_x - 1, y - 1),
                (left_x - 1, y + 1),
                (right_x + 1, y - 1),
                (right_x + 1, y + 1),
            ] {
                if qualifies(grid, &target, consider, &seen, corner.0, corner.1) {
                    seeds.push(corner);
                }
            }
        }
    }

    Ok(cells)
}

fn qualifies<B: Brush>(
    grid: &MapGrid<B>,
    target: &B,
    consider: Option<&CoordSet>,
    seen: &CoordSet,
    x: i32,
    y: i32,
) -> bool {
    if seen.contains(&(x, y)) {
        return false;
    }
    if let Some(consider) = consider {
        if !consider.contains(&(x, y)) {
            return false;
        }
    }
    grid.get(x, y).is_some_and(|brush| brush == target)
}
