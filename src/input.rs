use macroquad::input::KeyCode;

use crate::model::Heading;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// One of the four arrow keys
    Steer(Heading),
    /// Dismisses the game-over dialog
    Acknowledge,
    /// Anything else. Still starts the game from the title prompt.
    Other,
}

impl From<KeyCode> for KeyAction {
    fn from(key: KeyCode) -> Self {
        match key {
            KeyCode::Left => KeyAction::Steer(Heading::Left),
            KeyCode::Up => KeyAction::Steer(Heading::Up),
            KeyCode::Right => KeyAction::Steer(Heading::Right),
            KeyCode::Down => KeyAction::Steer(Heading::Down),
            KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space => KeyAction::Acknowledge,
            _ => KeyAction::Other,
        }
    }
}
