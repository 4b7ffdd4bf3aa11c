//! Input handling - convert key events to badge buttons
//!
//! A terminal reports key presses (and auto-repeats) but no releases, so
//! direction keys count as held for the tick they arrive in. B is a fresh
//! press, which is what the session waits for between levels.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mz_core::{Buttons, Direction};
use strum::IntoEnumIterator;

/// What a key means to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Direction button, held down
    Hold(Buttons),
    /// Newly pressed button
    Press(Buttons),
    Quit,
}

/// Convert a key event to a button action.
pub fn key_to_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(KeyAction::Hold(button_for(Direction::West)))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(KeyAction::Hold(button_for(Direction::East)))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(KeyAction::Hold(button_for(Direction::North)))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(KeyAction::Hold(button_for(Direction::South)))
        }

        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('b') => {
            Some(KeyAction::Press(Buttons::B))
        }

        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),

        _ => None,
    }
}

/// The badge button that moves the player in `direction`
pub fn button_for(direction: Direction) -> Buttons {
    Buttons::MOVES
        .iter()
        .find(|(_, dir)| *dir == direction)
        .map(|(button, _)| *button)
        .unwrap_or_default()
}

/// One-line key reference for the status bar
pub fn key_help() -> String {
    let moves: Vec<String> = Direction::iter()
        .map(|dir| format!("{}:{}", arrow(dir), dir))
        .collect();
    format!("{}  B/space: start  q: quit", moves.join(" "))
}

/// Arrow glyph pointing in `direction`
pub fn arrow(direction: Direction) -> char {
    match direction {
        Direction::North => '▲',
        Direction::South => '▼',
        Direction::East => '▶',
        Direction::West => '◀',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_vi_keys_agree() {
        for (arrow_key, vi_key, button) in [
            (KeyCode::Left, 'h', Buttons::A),
            (KeyCode::Right, 'l', Buttons::C),
            (KeyCode::Up, 'k', Buttons::UP),
            (KeyCode::Down, 'j', Buttons::DOWN),
        ] {
            assert_eq!(key_to_action(press(arrow_key)), Some(KeyAction::Hold(button)));
            assert_eq!(
                key_to_action(press(KeyCode::Char(vi_key))),
                Some(KeyAction::Hold(button))
            );
        }
    }

    #[test]
    fn test_b_is_a_press() {
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('b')] {
            assert_eq!(key_to_action(press(code)), Some(KeyAction::Press(Buttons::B)));
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_action(press(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(key_to_action(press(KeyCode::Esc)), Some(KeyAction::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Some(KeyAction::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Left);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(key), None);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(key_to_action(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_button_for_every_direction() {
        let all = Direction::iter().fold(Buttons::empty(), |acc, d| acc | button_for(d));
        assert_eq!(all, Buttons::A | Buttons::C | Buttons::UP | Buttons::DOWN);
    }
}
