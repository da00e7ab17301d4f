//! Drawing algorithms. None of these mutate the grid: each returns the set
//! of cells to write, for the caller to apply through a command.

mod flood;
mod line;
mod rectangle;

pub use flood::flood_fill;
pub use line::line;
pub use rectangle::rectangle;
