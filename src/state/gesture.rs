//! Pointer gesture state machine for an editing session.
//!
//! ```text
//!            pointer down (pen/eraser)          any end event
//!   Idle ─────────────────────────────► Brushing ─────────────► Idle
//!     │                                                  (grouped commit if changed)
//!     │      pointer down (shape)                release
//!     └────────────────────────────────► Shaping ───────────► Idle (shape commit)
//!                                           │      leave
//!                                           └───────────────► Idle (cancelled)
//! ```
//!
//! Pointer-up, leaving the canvas and a release seen outside the canvas all
//! funnel into one `end_gesture` transition on the session.

use crate::command::history::EditKind;
use crate::grid::{CellPos, Grid};
use crate::tools::ShapeKind;

/// A brush or eraser drag in progress
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Grid as it was when the pointer went down
    pub start_grid: Grid,
    pub kind: EditKind,
}

/// A shape drag in progress; drives the live preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGesture {
    pub start: CellPos,
    pub end: CellPos,
    pub kind: ShapeKind,
}

/// How a gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// Pointer released, on the canvas or anywhere else in the window
    Release,
    /// Pointer left the canvas while held
    Leave,
}

#[derive(Debug, Clone, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Brushing(DragSession),
    Shaping(ShapeGesture),
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_brushing(&self) -> bool {
        matches!(self, Self::Brushing(_))
    }

    pub fn is_shaping(&self) -> bool {
        matches!(self, Self::Shaping(_))
    }

    pub fn shape(&self) -> Option<&ShapeGesture> {
        match self {
            Self::Shaping(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Brushing(_) => "Brushing",
            Self::Shaping(_) => "Shaping",
        }
    }
}
