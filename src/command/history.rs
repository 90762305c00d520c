use std::collections::VecDeque;
use std::mem;

use log::debug;

use crate::grid::Grid;
use crate::tools::ShapeKind;

/// What kind of edit produced a history step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Brush,
    Erase,
    Fill,
    Shape(ShapeKind),
    Clear,
}

impl EditKind {
    /// Human readable label, e.g. for an "Undo Fill" menu entry
    pub fn description(&self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Erase => "Erase",
            Self::Fill => "Fill",
            Self::Shape(ShapeKind::Rectangle) => "Rectangle",
            Self::Shape(ShapeKind::Square) => "Square",
            Self::Shape(ShapeKind::Circle) => "Circle",
            Self::Shape(ShapeKind::Rhombus) => "Rhombus",
            Self::Clear => "Clear",
        }
    }
}

/// A grid snapshot plus the edit that moves away from it
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub grid: Grid,
    pub kind: EditKind,
}

/// Snapshot based undo/redo manager.
///
/// The undo stack holds the grid as it was before each edit. The redo stack
/// is ordered front to back from the next redo to the oldest. Every commit
/// clears the redo stack, and commits that change nothing are refused.
#[derive(Debug, Default)]
pub struct History {
    /// Stack of grids that can be restored by undo
    undo_stack: Vec<HistoryEntry>,
    /// Grids that can be restored by redo, next one at the front
    redo_stack: VecDeque<HistoryEntry>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `current` with `next` as a single undoable step.
    ///
    /// Returns `false` without touching anything if `next` equals `current`.
    pub fn commit(&mut self, current: &mut Grid, next: Grid, kind: EditKind) -> bool {
        if !current.differs_from(&next) {
            return false;
        }
        let previous = mem::replace(current, next);
        self.push_undo(previous, kind);
        true
    }

    /// Collapse a whole gesture into one step that undoes back to `start`.
    ///
    /// `current` becomes `end` either way; no step is recorded when the
    /// gesture left the grid as it found it.
    pub fn commit_group(
        &mut self,
        current: &mut Grid,
        start: Grid,
        end: Grid,
        kind: EditKind,
    ) -> bool {
        let changed = start.differs_from(&end);
        *current = end;
        if changed {
            self.push_undo(start, kind);
        }
        changed
    }

    fn push_undo(&mut self, grid: Grid, kind: EditKind) {
        self.undo_stack.push(HistoryEntry { grid, kind });
        self.redo_stack.clear();
        debug!(
            "Recorded {} step (undo depth {})",
            kind.description(),
            self.undo_stack.len()
        );
    }

    /// Undo the last step. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self, current: &mut Grid) -> bool {
        let Some(entry) = self.undo_stack.pop() else {
            return false;
        };
        let redone = mem::replace(current, entry.grid);
        self.redo_stack.push_front(HistoryEntry {
            grid: redone,
            kind: entry.kind,
        });
        true
    }

    /// Redo the most recently undone step. Returns `false` if there was none.
    pub fn redo(&mut self, current: &mut Grid) -> bool {
        let Some(entry) = self.redo_stack.pop_front() else {
            return false;
        };
        let undone = mem::replace(current, entry.grid);
        self.undo_stack.push(HistoryEntry {
            grid: undone,
            kind: entry.kind,
        });
        true
    }

    /// Drop every step; used when the grid changes shape
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<&'static str> {
        self.undo_stack.last().map(|entry| entry.kind.description())
    }

    pub fn redo_description(&self) -> Option<&'static str> {
        self.redo_stack.front().map(|entry| entry.kind.description())
    }

    /// Edit kinds on the undo stack, most recent first
    pub fn undo_history(&self) -> impl Iterator<Item = EditKind> + '_ {
        self.undo_stack.iter().rev().map(|entry| entry.kind)
    }
}
