//! Keybindings: type to filter, Tab/arrows select, Enter launch, Esc quit.

use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn key_to_action(event: &KeyEvent) -> Option<Action> {
    // Accept Press and Repeat; ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);
    let ctrl = mods.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearQuery),
            KeyCode::Char('w') | KeyCode::Backspace => Some(Action::DeleteWord),
            KeyCode::Char('n') => Some(Action::SelectNext),
            KeyCode::Char('p') => Some(Action::SelectPrev),
            KeyCode::Char('r') => Some(Action::ReloadCatalog),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Launch),
        KeyCode::Backspace if mods.contains(KeyModifiers::ALT) => Some(Action::DeleteWord),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::Down => Some(Action::SelectNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::SelectPrev),
        // Allow Alt/Shift for accented chars; Ctrl was handled above.
        KeyCode::Char(c) if !mods.contains(KeyModifiers::SUPER) => Some(Action::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, mods: KeyModifiers) -> Option<Action> {
        key_to_action(&KeyEvent::new(code, mods))
    }

    #[test]
    fn test_typing() {
        assert_eq!(press(KeyCode::Char('g'), KeyModifiers::NONE), Some(Action::Char('g')));
        assert_eq!(press(KeyCode::Char('G'), KeyModifiers::SHIFT), Some(Action::Char('G')));
        assert_eq!(press(KeyCode::Backspace, KeyModifiers::NONE), Some(Action::Backspace));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(press(KeyCode::Char('d'), KeyModifiers::CONTROL), Some(Action::Quit));
        assert_eq!(press(KeyCode::Char('u'), KeyModifiers::CONTROL), Some(Action::ClearQuery));
        assert_eq!(press(KeyCode::Char('r'), KeyModifiers::CONTROL), Some(Action::ReloadCatalog));
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::CONTROL), None);
        assert_eq!(press(KeyCode::Backspace, KeyModifiers::ALT), Some(Action::DeleteWord));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(press(KeyCode::Tab, KeyModifiers::NONE), Some(Action::SelectNext));
        assert_eq!(press(KeyCode::BackTab, KeyModifiers::SHIFT), Some(Action::SelectPrev));
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Some(Action::Launch));
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Some(Action::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&event), None);
    }
}
