//! Screen paging: fixed-size virtual pages addressed by integer index,
//! used to view and edit sub-regions of a large map.
//!
//! All coordinate conversion shifts by the *unclipped* left/top bound of
//! the addressed screen, so a screen index beyond the map edge still
//! yields a consistent (if empty) mapping.

use crate::error::{MapError, MapResult};
use crate::map::grid::{Brush, Cell, Coord, CoordSet, MapGrid};

/// Inclusive bounds of one screen, in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl<B: Brush> MapGrid<B> {
    /// Map-coordinate bounds of the screen at index `(screen_x, screen_y)`.
    /// With `clipped`, the bounds are clamped to the map rectangle.
    pub fn screen_bounds(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
        clipped: bool,
    ) -> MapResult<ScreenBounds> {
        check_screen_size(screen_width, screen_height)?;

        let mut left = screen_x * screen_width;
        let mut top = screen_y * screen_height;
        let mut right = left + screen_width - 1;
        let mut bottom = top + screen_height - 1;

        if clipped {
            left = left.max(0);
            right = right.min(self.width() - 1);
            top = top.max(0);
            bottom = bottom.min(self.height() - 1);
        }

        Ok(ScreenBounds {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Number of screens needed to cover the map width (ceiling division).
    pub fn screens_wide(&self, screen_width: i32) -> MapResult<i32> {
        check_screen_divisor(screen_width, "screen_width")?;
        Ok(screen_count(self.width(), screen_width))
    }

    /// Number of screens needed to cover the map height (ceiling division).
    pub fn screens_high(&self, screen_height: i32) -> MapResult<i32> {
        check_screen_divisor(screen_height, "screen_height")?;
        Ok(screen_count(self.height(), screen_height))
    }

    /// Horizontal span of the screen at `screen_x`, clipped or not.
    pub fn screen_width(&self, screen_width: i32, screen_x: i32, clipped: bool) -> MapResult<i32> {
        let bounds = self.screen_bounds(screen_width, 1, screen_x, 0, clipped)?;
        Ok(bounds.right - bounds.left + 1)
    }

    /// Vertical span of the screen at `screen_y`, clipped or not.
    pub fn screen_height(
        &self,
        screen_height: i32,
        screen_y: i32,
        clipped: bool,
    ) -> MapResult<i32> {
        let bounds = self.screen_bounds(1, screen_height, 0, screen_y, clipped)?;
        Ok(bounds.bottom - bounds.top + 1)
    }

    /// Index of the screen containing a map coordinate.
    pub fn screen_containing(
        &self,
        screen_width: i32,
        screen_height: i32,
        coordinate: Coord,
    ) -> MapResult<Coord> {
        check_screen_divisor(screen_width, "screen_width")?;
        check_screen_divisor(screen_height, "screen_height")?;
        Ok((
            coordinate.0.div_euclid(screen_width),
            coordinate.1.div_euclid(screen_height),
        ))
    }

    pub fn convert_cells_from_map_to_screen(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
        cells: &[Cell<B>],
    ) -> MapResult<Vec<Cell<B>>> {
        self.shift_cells(screen_width, screen_height, screen_x, screen_y, cells, -1)
    }

    pub fn convert_cells_from_screen_to_map(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
        cells: &[Cell<B>],
    ) -> MapResult<Vec<Cell<B>>> {
        self.shift_cells(screen_width, screen_height, screen_x, screen_y, cells, 1)
    }

    pub fn convert_coordinates_from_map_to_screen(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
        coordinates: &[Coord],
    ) -> MapResult<Vec<Coord>> {
        self.shift_coordinates(
            screen_width,
            screen_height,
            screen_x,
            screen_y,
            coordinates,
            -1,
        )
    }

    pub fn convert_coordinates_from_screen_to_map(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
        coordinates: &[Coord],
    ) -> MapResult<Vec<Coord>> {
        self.shift_coordinates(
            screen_width,
            screen_height,
            screen_x,
            screen_y,
            coordinates,
            1,
        )
    }

    /// Coordinates inside the rectangle spanned by two corners (any order).
    /// With `consider`, returns its members inside the rectangle; otherwise
    /// enumerates the rectangle clamped to map bounds, row-major.
    pub fn coordinates_inside_quadrate(
        &self,
        corner_one: Coord,
        corner_two: Coord,
        consider: Option<&CoordSet>,
    ) -> Vec<Coord> {
        let (mut small_x, mut big_x) = minmax(corner_one.0, corner_two.0);
        let (mut small_y, mut big_y) = minmax(corner_one.1, corner_two.1);

        let mut inside = Vec::new();
        if let Some(consider) = consider {
            for &(x, y) in consider {
                if small_x <= x && x <= big_x && small_y <= y && y <= big_y {
                    inside.push((x, y));
                }
            }
        } else {
            small_x = small_x.max(0);
            big_x = big_x.min(self.width() - 1);
            small_y = small_y.max(0);
            big_y = big_y.min(self.height() - 1);
            for y in small_y..=big_y {
                for x in small_x..=big_x {
                    inside.push((x, y));
                }
            }
        }

        inside
    }

    /// Filters `coordinates` down to those inside the map, first intersecting
    /// with `consider` when one is supplied.
    pub fn extract_valid_coordinates(
        &self,
        coordinates: &[Coord],
        consider: Option<&CoordSet>,
    ) -> Vec<Coord> {
        let candidates: CoordSet = match consider {
            Some(consider) => coordinates
                .iter()
                .filter(|coordinate| consider.contains(coordinate))
                .copied()
                .collect(),
            None => coordinates.iter().copied().collect(),
        };
        self.coordinates_inside_quadrate(
            (0, 0),
            (self.width() - 1, self.height() - 1),
            Some(&candidates),
        )
    }

    /// Map coordinates covered by one screen, clamped to the map.
    pub fn screen_as_map_coordinates(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
    ) -> MapResult<Vec<Coord>> {
        let bounds = self.screen_bounds(screen_width, screen_height, screen_x, screen_y, false)?;
        Ok(self.coordinates_inside_quadrate(
            (bounds.left, bounds.top),
            (bounds.right, bounds.bottom),
            None,
        ))
    }

    /// One screen's cells, addressed in map coordinates.
    pub fn screen_as_map_cells(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
    ) -> MapResult<Vec<Cell<B>>> {
        let coordinates =
            self.screen_as_map_coordinates(screen_width, screen_height, screen_x, screen_y)?;
        self.cells(&coordinates)
    }

    /// Map coordinates covered by one screen, shifted into screen space.
    pub fn screen_as_screen_coordinates(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
    ) -> MapResult<Vec<Coord>> {
        let coordinates =
            self.screen_as_map_coordinates(screen_width, screen_height, screen_x, screen_y)?;
        self.convert_coordinates_from_map_to_screen(
            screen_width,
            screen_height,
            screen_x,
            screen_y,
            &coordinates,
        )
    }

    /// One screen's cells, addressed in screen coordinates.
    pub fn screen_as_screen_cells(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
    ) -> MapResult<Vec<Cell<B>>> {
        let cells = self.screen_as_map_cells(screen_width, screen_height, screen_x, screen_y)?;
        self.convert_cells_from_map_to_screen(
            screen_width,
            screen_height,
            screen_x,
            screen_y,
            &cells,
        )
    }

    fn shift_cells(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
        cells: &[Cell<B>],
        sign: i32,
    ) -> MapResult<Vec<Cell<B>>> {
        let bounds = self.screen_bounds(screen_width, screen_height, screen_x, screen_y, false)?;
        Ok(cells
            .iter()
            .map(|cell| {
                Cell::new(
                    cell.x + sign * bounds.left,
                    cell.y + sign * bounds.top,
                    cell.brush.clone(),
                )
            })
            .collect())
    }

    fn shift_coordinates(
        &self,
        screen_width: i32,
        screen_height: i32,
        screen_x: i32,
        screen_y: i32,
        coordinates: &[Coord],
        sign: i32,
    ) -> MapResult<Vec<Coord>> {
        let bounds = self.screen_bounds(screen_width, screen_height, screen_x, screen_y, false)?;
        Ok(coordinates
            .iter()
            .map(|&(x, y)| (x + sign * bounds.left, y + sign * bounds.top))
            .collect())
    }
}

fn minmax(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

fn screen_count(map_dimension: i32, screen_dimension: i32) -> i32 {
    let full_screens = map_dimension / screen_dimension;
    if map_dimension % screen_dimension != 0 {
        full_screens + 1
    } else {
        full_screens
    }
}

fn check_screen_size(screen_width: i32, screen_height: i32) -> MapResult<()> {
    if screen_width < 0 {
        return Err(MapError::InvalidScreenSize(
            "screen_width must not be negative".into(),
        ));
    }
    if screen_height < 0 {
        return Err(MapError::InvalidScreenSize(
            "screen_height must not be negative".into(),
        ));
    }
    Ok(())
}

// Screen counts divide by the screen dimension, so zero is rejected here
// even though `screen_bounds` tolerates it.
fn check_screen_divisor(dimension: i32, name: &str) -> MapResult<()> {
    if dimension < 1 {
        return Err(MapError::InvalidScreenSize(format!(
            "{name} must be positive"
        )));
    }
    Ok(())
}
