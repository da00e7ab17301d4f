use asciimap::{Cell, CoordSet, MapError, MapGrid, ScreenBounds};

fn grid_25x15() -> MapGrid<char> {
    MapGrid::new(25, 15, '.').unwrap()
}

#[test]
fn test_screen_bounds_unclipped() {
    let grid = grid_25x15();
    let bounds = grid.screen_bounds(10, 10, 2, 1, false).unwrap();
    assert_eq!(
        bounds,
        ScreenBounds {
            left: 20,
            top: 10,
            right: 29,
            bottom: 19
        }
    );
}

#[test]
fn test_screen_bounds_clipped_to_map() {
    let grid = grid_25x15();
    let bounds = grid.screen_bounds(10, 10, 2, 1, true).unwrap();
    assert_eq!(
        bounds,
        ScreenBounds {
            left: 20,
            top: 10,
            right: 24,
            bottom: 14
        }
    );
}

#[test]
fn test_screen_bounds_rejects_negative_dimension() {
    let grid = grid_25x15();
    assert!(matches!(
        grid.screen_bounds(-1, 10, 0, 0, false),
        Err(MapError::InvalidScreenSize(_))
    ));
    assert!(matches!(
        grid.screen_bounds(10, -1, 0, 0, false),
        Err(MapError::InvalidScreenSize(_))
    ));
}

#[test]
fn test_screen_counts_use_ceiling_division() {
    let grid = grid_25x15();
    assert_eq!(grid.screens_wide(10).unwrap(), 3);
    assert_eq!(grid.screens_wide(25).unwrap(), 1);
    assert_eq!(grid.screens_high(10).unwrap(), 2);
    assert_eq!(grid.screens_high(5).unwrap(), 3);
}

#[test]
fn test_screen_counts_reject_zero_dimension() {
    let grid = grid_25x15();
    assert!(matches!(
        grid.screens_wide(0),
        Err(MapError::InvalidScreenSize(_))
    ));
    assert!(matches!(
        grid.screens_high(0),
        Err(MapError::InvalidScreenSize(_))
    ));
}

#[test]
fn test_screen_spans() {
    let grid = grid_25x15();
    // the last screen column only partially overlaps the map
    assert_eq!(grid.screen_width(10, 2, true).unwrap(), 5);
    assert_eq!(grid.screen_width(10, 2, false).unwrap(), 10);
    assert_eq!(grid.screen_height(10, 1, true).unwrap(), 5);
    assert_eq!(grid.screen_height(10, 1, false).unwrap(), 10);
}

#[test]
fn test_screen_containing_coordinate() {
    let grid = grid_25x15();
    assert_eq!(grid.screen_containing(10, 10, (0, 0)).unwrap(), (0, 0));
    assert_eq!(grid.screen_containing(10, 10, (24, 14)).unwrap(), (2, 1));
    assert_eq!(grid.screen_containing(10, 10, (10, 9)).unwrap(), (1, 0));
}

#[test]
fn test_coordinate_conversion_round_trip() {
    let grid = grid_25x15();
    let map_coordinates = vec![(20, 10), (24, 14)];

    let screen_coordinates = grid
        .convert_coordinates_from_map_to_screen(10, 10, 2, 1, &map_coordinates)
        .unwrap();
    assert_eq!(screen_coordinates, vec![(0, 0), (4, 4)]);

    let back = grid
        .convert_coordinates_from_screen_to_map(10, 10, 2, 1, &screen_coordinates)
        .unwrap();
    assert_eq!(back, map_coordinates);
}

#[test]
fn test_conversion_uses_unclipped_bounds_beyond_map_edge() {
    let grid = grid_25x15();
    // screen (4, 0) lies wholly outside the 25-wide map
    let converted = grid
        .convert_coordinates_from_screen_to_map(10, 10, 4, 0, &[(0, 0)])
        .unwrap();
    assert_eq!(converted, vec![(40, 0)]);
}

#[test]
fn test_cell_conversion_shifts_coordinates_only() {
    let grid = grid_25x15();
    let cells = vec![Cell::new(22, 12, 'x')];
    let screen_cells = grid
        .convert_cells_from_map_to_screen(10, 10, 2, 1, &cells)
        .unwrap();
    assert_eq!(screen_cells, vec![Cell::new(2, 2, 'x')]);
}

#[test]
fn test_quadrate_enumerates_clamped_rectangle() {
    let grid = MapGrid::new(3, 3, '.').unwrap();
    let coordinates = grid.coordinates_inside_quadrate((-2, -2), (1, 1), None);
    assert_eq!(coordinates, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn test_quadrate_normalizes_corner_order() {
    let grid = MapGrid::new(5, 5, '.').unwrap();
    let forward = grid.coordinates_inside_quadrate((1, 1), (3, 2), None);
    let reversed = grid.coordinates_inside_quadrate((3, 2), (1, 1), None);
    assert_eq!(forward, reversed);
    assert_eq!(forward.len(), 6);
}

#[test]
fn test_quadrate_intersects_consider_set() {
    let grid = MapGrid::new(5, 5, '.').unwrap();
    let consider: CoordSet = [(0, 0), (2, 2), (4, 4)].into_iter().collect();
    let mut inside = grid.coordinates_inside_quadrate((0, 0), (3, 3), Some(&consider));
    inside.sort();
    assert_eq!(inside, vec![(0, 0), (2, 2)]);
}

#[test]
fn test_extract_valid_coordinates_filters_against_map_and_consider() {
    let grid = MapGrid::new(4, 4, '.').unwrap();
    let coordinates = vec![(-1, 0), (1, 1), (2, 2), (9, 9)];

    let mut valid = grid.extract_valid_coordinates(&coordinates, None);
    valid.sort();
    assert_eq!(valid, vec![(1, 1), (2, 2)]);

    let consider: CoordSet = [(2, 2), (9, 9)].into_iter().collect();
    let valid = grid.extract_valid_coordinates(&coordinates, Some(&consider));
    assert_eq!(valid, vec![(2, 2)]);
}

#[test]
fn test_screen_as_map_and_screen_cells() {
    let mut grid = MapGrid::new(25, 15, '.').unwrap();
    grid.write(20, 10, &'S').unwrap();

    let map_cells = grid.screen_as_map_cells(10, 10, 2, 1).unwrap();
    // clamped to the 5x5 overlap with the map
    assert_eq!(map_cells.len(), 25);
    assert_eq!(map_cells[0], Cell::new(20, 10, 'S'));

    let screen_cells = grid.screen_as_screen_cells(10, 10, 2, 1).unwrap();
    assert_eq!(screen_cells.len(), 25);
    assert_eq!(screen_cells[0], Cell::new(0, 0, 'S'));

    let screen_coordinates = grid.screen_as_screen_coordinates(10, 10, 2, 1).unwrap();
    assert_eq!(screen_coordinates[0], (0, 0));
    assert_eq!(*screen_coordinates.last().unwrap(), (4, 4));
}
