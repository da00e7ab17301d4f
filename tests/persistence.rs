use asciimap::codec::{self, Compression, SAVE_VERSION};
use asciimap::{MapError, MapGrid};
use serde_json::{Value, json};

fn grid_from_rows(rows: &[&str]) -> MapGrid<char> {
    let mut grid = MapGrid::new(rows[0].len() as i32, rows.len() as i32, ' ').unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, brush) in row.chars().enumerate() {
            grid.write(x as i32, y as i32, &brush).unwrap();
        }
    }
    grid
}

fn save_to_value(grid: &MapGrid<char>, compression: Option<Compression>) -> Value {
    let mut buffer = Vec::new();
    codec::save_to_writer(grid, &mut buffer, compression).unwrap();
    serde_json::from_slice(&buffer).unwrap()
}

#[test]
fn test_save_emits_all_document_fields() {
    let grid = grid_from_rows(&["ab", "cd"]);
    let document = save_to_value(&grid, None);

    assert_eq!(document["version"], SAVE_VERSION);
    assert_eq!(document["width"], 2);
    assert_eq!(document["height"], 2);
    assert_eq!(document["compression"], Value::Null);
    assert_eq!(document["cells"], json!([["a", "b"], ["c", "d"]]));
}

#[test]
fn test_row_rle_merges_consecutive_runs() {
    let grid = grid_from_rows(&["aaabbbbc"]);
    let document = save_to_value(&grid, Some(Compression::RowRle));

    assert_eq!(document["compression"], "RowRLE");
    assert_eq!(document["cells"], json!([[["a", 3], ["b", 4], ["c", 1]]]));
}

#[test]
fn test_row_rle_round_trip() {
    let original = grid_from_rows(&["aaabbbbc", "zzzzzzzz", "abababab"]);

    let mut buffer = Vec::new();
    codec::save_to_writer(&original, &mut buffer, Some(Compression::RowRle)).unwrap();

    let mut loaded = MapGrid::new(1, 1, ' ').unwrap();
    codec::load_from_reader(&mut loaded, buffer.as_slice(), ' ').unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loaded.row_text(0).unwrap(), "aaabbbbc");
}

#[test]
fn test_uncompressed_round_trip() {
    let original = grid_from_rows(&["ab", "cd", "ef"]);

    let mut buffer = Vec::new();
    codec::save_to_writer(&original, &mut buffer, None).unwrap();

    let mut loaded = MapGrid::new(5, 5, '.').unwrap();
    codec::load_from_reader(&mut loaded, buffer.as_slice(), ' ').unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_load_reports_first_missing_field() {
    let cases = [
        (json!({}), "Missing Version Number"),
        (json!({"version": SAVE_VERSION}), "Missing Height"),
        (json!({"version": SAVE_VERSION, "height": 1}), "Missing Width"),
        (
            json!({"version": SAVE_VERSION, "height": 1, "width": 1}),
            "Missing Cells",
        ),
        (
            json!({"version": SAVE_VERSION, "height": 1, "width": 1, "cells": [[" "]]}),
            "Missing Compression",
        ),
    ];

    for (document, expected) in cases {
        let mut grid = MapGrid::new(1, 1, 'x').unwrap();
        let result = codec::load_from_reader(&mut grid, document.to_string().as_bytes(), ' ');
        match result {
            Err(MapError::MapValidation(message)) => assert_eq!(message, expected),
            other => panic!("expected MapValidation({expected}), got {other:?}"),
        }
    }
}

#[test]
fn test_load_rejects_version_mismatch() {
    let document = json!({
        "version": "9.9.9",
        "height": 1,
        "width": 1,
        "cells": [[" "]],
        "compression": null,
    });
    let mut grid = MapGrid::new(1, 1, 'x').unwrap();
    let result = codec::load_from_reader(&mut grid, document.to_string().as_bytes(), ' ');
    assert!(matches!(
        result,
        Err(MapError::MapValidation(message)) if message == "Incompatible Version Number"
    ));
}

#[test]
fn test_load_rejects_unknown_compression() {
    let document = json!({
        "version": SAVE_VERSION,
        "height": 1,
        "width": 1,
        "cells": [[[" ", 1]]],
        "compression": "ColumnRLE",
    });
    let mut grid = MapGrid::new(1, 1, 'x').unwrap();
    let result = codec::load_from_reader(&mut grid, document.to_string().as_bytes(), ' ');
    assert!(matches!(result, Err(MapError::InvalidCompressionType(_))));
}

#[test]
fn test_failed_load_leaves_grid_untouched() {
    let mut grid = grid_from_rows(&["zz", "zz"]);
    let snapshot = grid.clone();

    let document = json!({"version": SAVE_VERSION, "height": 4, "width": 4});
    let result = codec::load_from_reader(&mut grid, document.to_string().as_bytes(), ' ');

    assert!(matches!(result, Err(MapError::MapValidation(_))));
    assert_eq!(grid, snapshot);
}

#[test]
fn test_load_fills_area_beyond_decoded_cells_with_default_brush() {
    // a declared size larger than the decoded cells leaves the remainder
    // at the caller's default brush
    let document = json!({
        "version": SAVE_VERSION,
        "height": 2,
        "width": 2,
        "cells": [["a", "b"]],
        "compression": null,
    });
    let mut grid = MapGrid::new(1, 1, 'x').unwrap();
    codec::load_from_reader(&mut grid, document.to_string().as_bytes(), '-').unwrap();

    assert_eq!(grid.row_text(0).unwrap(), "ab");
    assert_eq!(grid.row_text(1).unwrap(), "--");
}

#[test]
fn test_save_and_load_through_files() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("dungeon.json");

    let original = grid_from_rows(&["##..", "#..#"]);
    codec::save_to_path(&original, &path, Some(Compression::RowRle)).unwrap();

    let mut loaded = MapGrid::new(1, 1, ' ').unwrap();
    codec::load_from_path(&mut loaded, &path, ' ').unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_load_missing_file_is_an_io_error() {
    let mut grid = MapGrid::new(1, 1, ' ').unwrap();
    let result = codec::load_from_path(&mut grid, std::path::Path::new("/nonexistent/map"), ' ');
    assert!(matches!(result, Err(MapError::Io(_))));
}
