use serde::{Deserialize, Serialize};

use super::CommandResult;
use crate::color::Color;
use crate::state::EditorSession;
use crate::tools::{ShapeKind, ToolType};

/// Requests the UI layer makes of an editing session outside of pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Change the active tool
    SelectTool(ToolType),
    /// Pick a color for painting, filling and shapes
    SelectColor(Color),
    /// Add a color to the palette (if new) and select it
    AddCustomColor(Color),
    SetBrushSize(usize),
    SetShapeKind(ShapeKind),
    Undo,
    Redo,
    /// Reset every cell to transparent as an undoable step
    Clear,
    /// Change grid dimensions; discards history
    Resize { width: usize, height: usize },
}

impl Command {
    /// Apply this command to `session`
    pub fn execute(&self, session: &mut EditorSession) -> CommandResult {
        match *self {
            Command::SelectTool(tool) => session.select_tool(tool),
            Command::SelectColor(color) => session.select_color(color),
            Command::AddCustomColor(color) => session.add_custom_color(color),
            Command::SetBrushSize(size) => session.set_brush_size(size)?,
            Command::SetShapeKind(kind) => session.set_shape_kind(kind),
            Command::Undo => {
                session.undo();
            }
            Command::Redo => {
                session.redo();
            }
            Command::Clear => {
                session.clear();
            }
            Command::Resize { width, height } => session.resize(width, height),
        }
        Ok(())
    }
}
