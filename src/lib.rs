#![warn(clippy::all, rust_2018_idioms)]

pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod input;
pub mod palette;
pub mod renderer;
pub mod state;
pub mod tools;

pub use color::{Cell, Color, NamedColor};
pub use command::{Command, CommandError, CommandResult, EditKind, History};
pub use config::{EditorConfig, ExportSettings, SizeLimits};
pub use error::{ExportError, GridError};
pub use export::{PixelBuffer, rasterize};
pub use grid::{CellPos, Grid};
pub use input::InputEvent;
pub use palette::Palette;
pub use state::{EditorSession, GestureEnd, GestureState};
pub use tools::{ShapeKind, ToolType};
