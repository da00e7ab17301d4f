use thiserror::Error;

/// Errors that can occur while editing, paging, drawing on, or persisting a map
#[derive(Debug, Error)]
pub enum MapError {
    /// A map dimension was smaller than one cell
    #[error("invalid map size: {0}")]
    InvalidMapSize(String),

    /// A screen dimension was negative (or zero where a screen count is needed)
    #[error("invalid screen size: {0}")]
    InvalidScreenSize(String),

    /// A coordinate fell outside the current map bounds
    #[error("outside of map bounds: {0}")]
    OutsideOfMapBounds(String),

    /// Both line endpoints were the same point
    #[error("line endpoints can not be the same point")]
    LineEndpoint,

    /// Both rectangle endpoints were the same point
    #[error("rectangle endpoints can not be the same point")]
    RectangleEndpoint,

    /// An unknown compression scheme was requested or found in a document
    #[error("invalid compression type: {0}")]
    InvalidCompressionType(String),

    /// A document failed validation before any decoding or mutation
    #[error("map validation failed: {0}")]
    MapValidation(String),

    /// Failed to read or write a map file
    #[error("map file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A map file was not valid JSON, or a field had the wrong shape
    #[error("map file is not a valid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for map operations
pub type MapResult<T> = Result<T, MapError>;
