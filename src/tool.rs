use std::fmt;

/// Editing tools the session can drive. `Square` draws an outline,
/// `Box` a filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Paint,
    Line,
    FillFour,
    FillEight,
    Square,
    Box,
}

impl Tool {
    /// The default toolbar, in display order.
    pub const DEFAULT_TOOLBAR: [Tool; 6] = [
        Tool::Paint,
        Tool::Line,
        Tool::FillFour,
        Tool::FillEight,
        Tool::Square,
        Tool::Box,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Paint => "Paint",
            Tool::Line => "Line",
            Tool::FillFour => "Fill (4-way)",
            Tool::FillEight => "Fill (8-way)",
            Tool::Square => "Square",
            Tool::Box => "Box",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
