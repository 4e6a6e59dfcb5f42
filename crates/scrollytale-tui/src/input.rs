use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use scrollytale_core::NavKey;

/// Input action that can be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleAudio,
    /// Navigation key, forwarded to the section controller.
    Nav(NavKey),
    None,
}

/// Map a key event to an action.
///
/// Arrow/page/space/home/end and digit keys mirror the navigation contract;
/// everything the terminal would normally do with them (nothing, here) is
/// suppressed simply by raw mode, the host's equivalent of preventDefault.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        // Audio toggle
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleAudio,

        // Section navigation
        (KeyCode::Down, KeyModifiers::NONE) => Action::Nav(NavKey::ArrowDown),
        (KeyCode::Up, KeyModifiers::NONE) => Action::Nav(NavKey::ArrowUp),
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::Nav(NavKey::PageDown),
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::Nav(NavKey::PageUp),
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Nav(NavKey::Space),
        (KeyCode::Home, KeyModifiers::NONE) => Action::Nav(NavKey::Home),
        (KeyCode::End, KeyModifiers::NONE) => Action::Nav(NavKey::End),

        // Digit keys for direct navigation
        (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
            Action::Nav(NavKey::Digit(c as u8 - b'0'))
        }

        _ => Action::None,
    }
}
