mod commands;
pub mod history;

use thiserror::Error;

use crate::config::ConfigError;
use crate::error::{ExportError, GridError};

pub use commands::Command;
pub use history::{EditKind, History, HistoryEntry};

/// Result type for command operations
pub type CommandResult<T = ()> = Result<T, CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Brush size {0} is not available")]
    UnsupportedBrushSize(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
