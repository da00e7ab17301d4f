#![warn(clippy::all, rust_2018_idioms)]

//! The editing engine behind a grid-based ASCII map editor: a resizable
//! 2D array of brushes, paged into fixed-size screens, drawn on with
//! paint/line/rectangle/flood-fill tools, persisted in a versioned
//! (optionally run-length-compressed) JSON document, and wrapped in an
//! undo/redo command layer that keeps the modified-since-save flag
//! consistent with history state.

pub mod codec;
pub mod command;
pub mod draw;
pub mod editor;
pub mod error;
pub mod event;
pub mod id_generator;
pub mod map;
pub mod tool;

pub use codec::{Compression, SAVE_VERSION};
pub use command::{Command, CommandHistory, CommandId};
pub use editor::MapEditor;
pub use error::{MapError, MapResult};
pub use event::{EventBus, MapEvent, MapEventHandler};
pub use map::{Brush, Cell, Coord, CoordSet, MapGrid, ScreenBounds};
pub use tool::Tool;
