//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game command.
///
/// Down rotates clockwise and Up counter-clockwise; dropping has its own keys.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    if key.kind == KeyEventKind::Release || key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameCommand::MoveLeft),
        KeyCode::Right => Some(GameCommand::MoveRight),
        KeyCode::Down => Some(GameCommand::RotateCw),
        KeyCode::Up => Some(GameCommand::RotateCcw),

        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameCommand::SoftDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::Pause),

        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => Some(GameCommand::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key shows or hides the score share text.
pub fn should_toggle_share(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && !key.modifiers.contains(KeyModifiers::CONTROL)
}
