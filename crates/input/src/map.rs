//! Key mapping from terminal events to host actions.

use crate::types::{HostAction, Screen, ADMIN_JUMP_SLOTS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the key map needs to know about the game to resolve a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub screen: Screen,
    pub admin_enabled: bool,
}

impl KeyContext {
    pub fn new(screen: Screen, admin_enabled: bool) -> Self {
        Self {
            screen,
            admin_enabled,
        }
    }
}

/// Reserved admin chord: Ctrl+Shift+A.
///
/// Legacy terminals report Ctrl+Shift+A as Ctrl+A, so a lowercase `a` with
/// Ctrl is accepted as well.
pub fn is_admin_chord(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('a') | KeyCode::Char('A'))
}

/// Map keyboard input to host actions.
pub fn handle_key_event(key: KeyEvent, ctx: KeyContext) -> Option<HostAction> {
    if is_admin_chord(key) {
        return Some(HostAction::ToggleAdmin);
    }
    // Other control chords are reserved for the terminal (and quitting).
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match ctx.screen {
        Screen::Home => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(HostAction::StartGame),
            _ => None,
        },
        Screen::Finished => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(HostAction::ResetGame)
            }
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => Some(HostAction::ReturnHome),
            _ => None,
        },
        Screen::Playing => playing_key(key.code, ctx.admin_enabled),
    }
}

fn playing_key(code: KeyCode, admin_enabled: bool) -> Option<HostAction> {
    match code {
        // Judging
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('C') => Some(HostAction::Correct),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(HostAction::Wrong),

        // Hints
        KeyCode::Char('h') | KeyCode::Char('H') => Some(HostAction::Hint),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(HostAction::ContentHint),

        // Navigation
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => Some(HostAction::NextLevel),
        KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(HostAction::PreviousLevel)
        }
        KeyCode::Esc => Some(HostAction::CloseReveal),

        // Session
        KeyCode::Char('r') | KeyCode::Char('R') => Some(HostAction::ResetGame),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(HostAction::ReturnHome),

        // Admin
        _ if !admin_enabled => None,
        KeyCode::Char(d @ '1'..='9') => {
            let slot = (d as usize) - ('1' as usize);
            (slot < ADMIN_JUMP_SLOTS).then_some(HostAction::JumpToLevel(slot))
        }
        KeyCode::Char('v') | KeyCode::Char('V') => Some(HostAction::ToggleShowAnswers),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(HostAction::ResetScore),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
