use serde::{Deserialize, Serialize};

pub mod brush;
pub mod fill;
pub mod shape;

pub use brush::{apply_brush, brush_footprint};
pub use fill::flood_fill;
pub use shape::{ShapeKind, line, outline};

/// Enum representing all tools the editor can have selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Pen,
    Eraser,
    Fill,
    Shape,
    Pan,
}

impl ToolType {
    pub const ALL: [ToolType; 5] = [
        ToolType::Pen,
        ToolType::Eraser,
        ToolType::Fill,
        ToolType::Shape,
        ToolType::Pan,
    ];

    /// Return the name of the tool
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen => "pen",
            Self::Eraser => "eraser",
            Self::Fill => "fill",
            Self::Shape => "shape",
            Self::Pan => "pan",
        }
    }

    /// Whether pointer input with this tool edits cells
    pub fn edits_cells(&self) -> bool {
        !matches!(self, Self::Pan)
    }

    /// Tools that stamp continuously while the pointer is held
    pub fn is_brush(&self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }
}
