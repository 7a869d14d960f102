//! Translation of terminal events into game commands.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::game_view::column_at;
use crate::game::COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// Drop into the selected column.
    Drop,
    /// Select a column and drop into it.
    DropAt(usize),
    Restart,
    Quit,
}

pub fn from_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => Some(Command::Drop),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char(digit @ '1'..='9') => {
            let col = digit as usize - '1' as usize;
            (col < COLS).then_some(Command::DropAt(col))
        }
        _ => None,
    }
}

/// A left click on a board column drops a piece there.
pub fn from_mouse(event: MouseEvent, board_area: Rect) -> Option<Command> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            column_at(board_area, event.column, event.row).map(Command::DropAt)
        }
        _ => None,
    }
}
