use egui::{Key, Modifiers, PointerButton};

use crate::command::Command;
use crate::grid::CellPos;

/// Input the UI layer forwards to an editing session, already mapped from
/// screen space to cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed over a cell
    PointerDown { cell: CellPos, button: PointerButton },
    /// Pointer entered a cell while a button may be held
    PointerMove { cell: CellPos },
    /// Mouse button was released over the canvas
    PointerUp { cell: Option<CellPos> },
    /// Pointer left the canvas
    PointerLeave,
    /// Mouse button was released somewhere outside the canvas
    GlobalPointerRelease,
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
    /// Key was released
    KeyUp { key: Key, modifiers: Modifiers },
}

impl InputEvent {
    /// The cell this event refers to, if any
    pub fn cell(&self) -> Option<CellPos> {
        match self {
            InputEvent::PointerDown { cell, .. } | InputEvent::PointerMove { cell } => Some(*cell),
            InputEvent::PointerUp { cell } => *cell,
            _ => None,
        }
    }

    /// Whether this event ends a gesture in progress
    pub fn ends_gesture(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerUp { .. }
                | InputEvent::PointerLeave
                | InputEvent::GlobalPointerRelease
        )
    }
}

/// Map a key press to the history command it triggers.
///
/// Ctrl/Cmd+Z undoes; Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z redo.
pub fn shortcut_command(key: Key, modifiers: Modifiers) -> Option<Command> {
    if !(modifiers.command || modifiers.ctrl || modifiers.mac_cmd) {
        return None;
    }
    match key {
        Key::Z if modifiers.shift => Some(Command::Redo),
        Key::Z => Some(Command::Undo),
        Key::Y => Some(Command::Redo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_shortcuts() {
        assert_eq!(shortcut_command(Key::Z, Modifiers::COMMAND), Some(Command::Undo));
        assert_eq!(shortcut_command(Key::Z, Modifiers::CTRL), Some(Command::Undo));
        assert_eq!(shortcut_command(Key::Y, Modifiers::COMMAND), Some(Command::Redo));
        assert_eq!(
            shortcut_command(Key::Z, Modifiers::COMMAND | Modifiers::SHIFT),
            Some(Command::Redo)
        );
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert_eq!(shortcut_command(Key::Z, Modifiers::NONE), None);
        assert_eq!(shortcut_command(Key::Y, Modifiers::SHIFT), None);
        assert_eq!(shortcut_command(Key::A, Modifiers::COMMAND), None);
    }

    #[test]
    fn test_end_events() {
        assert!(InputEvent::PointerLeave.ends_gesture());
        assert!(InputEvent::GlobalPointerRelease.ends_gesture());
        assert!(InputEvent::PointerUp { cell: None }.ends_gesture());
        assert!(!InputEvent::PointerMove { cell: CellPos::new(0, 0) }.ends_gesture());
    }
}
