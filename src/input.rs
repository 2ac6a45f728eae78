use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Quit,
    None,
}

/// Arrow keys steer, Esc pauses, CTRL+C quits. Everything else is ignored.
pub fn map_key(ev: &KeyEvent) -> Command {
    if is_ctrl_c(ev) {
        return Command::Quit;
    }

    match ev.code {
        KeyCode::Up => Command::Turn(Up),
        KeyCode::Down => Command::Turn(Down),
        KeyCode::Left => Command::Turn(Left),
        KeyCode::Right => Command::Turn(Right),
        KeyCode::Esc => Command::TogglePause,
        _ => Command::None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers } if modifiers.contains(KeyModifiers::CONTROL))
}
