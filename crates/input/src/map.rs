//! Key mapping from terminal events to session commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to commands.
///
/// Digits follow the menu numbering; letters are mnemonics.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Play),
        KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reserve),
        KeyCode::Char('3') | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(Command::UseReserved)
        }
        KeyCode::Char('4') | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SwapTop),
        KeyCode::Char('5') | KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::SwapBulk),
        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_menu_digits() {
        for cmd in Command::ALL {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(cmd.menu_key()))),
                Some(cmd)
            );
        }
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('6'))), None);
    }

    #[test]
    fn test_mnemonic_letters() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(Command::Play)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(Command::Reserve)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(Command::UseReserved)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(Command::SwapTop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('b'))),
            Some(Command::SwapBulk)
        );
    }

    #[test]
    fn test_control_chords_are_not_commands() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('0'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('1'))));
    }
}
