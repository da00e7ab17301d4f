//! The versioned map document format.
//!
//! A document is a JSON object with `version`, `width`, `height`,
//! `compression` (`null` or `"RowRLE"`), and `cells`. Uncompressed cells
//! are the full row-major array of brushes; `RowRLE` stores each row as
//! `[brush, run_length]` pairs whose lengths sum to the row width.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::{MapError, MapResult};
use crate::map::{Brush, Cell, MapGrid};

/// The single supported document version.
pub const SAVE_VERSION: &str = "0.0.2";

/// Supported compression schemes for the `cells` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    RowRle,
}

impl Compression {
    pub const ALL: [Compression; 1] = [Compression::RowRle];

    pub fn name(self) -> &'static str {
        match self {
            Compression::RowRle => "RowRLE",
        }
    }

    /// Parses the document string form of a compression scheme. Unknown
    /// names fail with `InvalidCompressionType`.
    pub fn from_name(name: &str) -> MapResult<Self> {
        match name {
            "RowRLE" => Ok(Compression::RowRle),
            _ => Err(invalid_compression_error()),
        }
    }
}

/// Serializes `grid` as a document to `writer`. Never mutates the grid.
pub fn save_to_writer<B: Brush, W: Write>(
    grid: &MapGrid<B>,
    writer: W,
    compression: Option<Compression>,
) -> MapResult<()> {
    let cells = match compression {
        Some(Compression::RowRle) => serde_json::to_value(encode_row_rle(grid))?,
        None => serde_json::to_value(grid.as_rows())?,
    };
    let document = serde_json::json!({
        "version": SAVE_VERSION,
        "width": grid.width(),
        "height": grid.height(),
        "compression": compression.map(Compression::name),
        "cells": cells,
    });
    serde_json::to_writer(writer, &document)?;
    Ok(())
}

pub fn save_to_path<B: Brush>(
    grid: &MapGrid<B>,
    path: &Path,
    compression: Option<Compression>,
) -> MapResult<()> {
    log::debug!(
        "saving {}x{} map to {} (compression: {:?})",
        grid.width(),
        grid.height(),
        path.display(),
        compression
    );
    let file = File::create(path)?;
    save_to_writer(grid, BufWriter::new(file), compression)
}

/// Replaces the contents of `grid` with the document read from `reader`.
///
/// The document is validated and decoded in full before the grid is
/// touched, so validation and decode failures leave the grid exactly as
/// it was. The grid is resized to the declared dimensions (new area
/// filled with `default_brush`) and then bulk-written with the decoded
/// cells; cells outside the declared dimensions fail the write at that
/// point.
pub fn load_from_reader<B: Brush, R: Read>(
    grid: &mut MapGrid<B>,
    reader: R,
    default_brush: B,
) -> MapResult<()> {
    let document: Value = serde_json::from_reader(reader)?;
    let decoded = decode_document(&document)?;
    grid.resize(decoded.width, decoded.height, default_brush)?;
    grid.write_many(&decoded.cells)?;
    Ok(())
}

pub fn load_from_path<B: Brush>(
    grid: &mut MapGrid<B>,
    path: &Path,
    default_brush: B,
) -> MapResult<()> {
    log::debug!("loading map from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(grid, BufReader::new(file), default_brush)
}

struct DecodedMap<B> {
    width: i32,
    height: i32,
    cells: Vec<Cell<B>>,
}

fn decode_document<B: Brush>(document: &Value) -> MapResult<DecodedMap<B>> {
    // Required fields are checked in a fixed order so the first missing
    // one is the one reported.
    let version = document
        .get("version")
        .ok_or_else(|| MapError::MapValidation("Missing Version Number".into()))?;
    let height = document
        .get("height")
        .ok_or_else(|| MapError::MapValidation("Missing Height".into()))?;
    let width = document
        .get("width")
        .ok_or_else(|| MapError::MapValidation("Missing Width".into()))?;
    let cells = document
        .get("cells")
        .ok_or_else(|| MapError::MapValidation("Missing Cells".into()))?;
    let compression = document
        .get("compression")
        .ok_or_else(|| MapError::MapValidation("Missing Compression".into()))?;
    if *version != SAVE_VERSION {
        return Err(MapError::MapValidation("Incompatible Version Number".into()));
    }

    let width: i32 = serde_json::from_value(width.clone())?;
    let height: i32 = serde_json::from_value(height.clone())?;

    let cells = match compression_from_value(compression)? {
        None => {
            let rows: Vec<Vec<B>> = serde_json::from_value(cells.clone())?;
            rows.into_iter()
                .enumerate()
                .flat_map(|(y, row)| {
                    row.into_iter()
                        .enumerate()
                        .map(move |(x, brush)| Cell::new(x as i32, y as i32, brush))
                })
                .collect()
        }
        Some(Compression::RowRle) => {
            let rows: Vec<Vec<(B, u32)>> = serde_json::from_value(cells.clone())?;
            let mut expanded = Vec::new();
            for (y, row) in rows.into_iter().enumerate() {
                let mut x = 0;
                for (brush, run_length) in row {
                    for _ in 0..run_length {
                        expanded.push(Cell::new(x, y as i32, brush.clone()));
                        x += 1;
                    }
                }
            }
            expanded
        }
    };

    Ok(DecodedMap {
        width,
        height,
        cells,
    })
}

fn compression_from_value(value: &Value) -> MapResult<Option<Compression>> {
    match value {
        Value::Null => Ok(None),
        Value::String(name) => Compression::from_name(name).map(Some),
        _ => Err(invalid_compression_error()),
    }
}

fn invalid_compression_error() -> MapError {
    let names: Vec<String> = Compression::ALL
        .iter()
        .map(|compression| format!("\"{}\"", compression.name()))
        .collect();
    MapError::InvalidCompressionType(format!(
        "compression type must be null or one of the following: {}",
        names.join(", ")
    ))
}

fn encode_row_rle<B: Brush>(grid: &MapGrid<B>) -> Vec<Vec<(B, u32)>> {
    grid.as_rows()
        .iter()
        .map(|row| {
            let mut runs: Vec<(B, u32)> = Vec::new();
            for brush in row {
                match runs.last_mut() {
                    Some((current, run_length)) if current == brush => *run_length += 1,
                    _ => runs.push((brush.clone(), 1)),
                }
            }
            runs
        })
        .collect()
}
