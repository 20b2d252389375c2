use crate::controllers::interactive::ports::display_surface::KeyInput;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates a terminal event into a keystroke for the render loop.
///
/// Returns `None` for events that are not key presses (releases, resizes,
/// mouse, focus and paste), which the surface skips while waiting.
#[must_use]
pub fn key_input_from_event(event: &Event) -> Option<KeyInput> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key_input_from_key(key)),
        _ => None,
    }
}

fn key_input_from_key(key: &KeyEvent) -> KeyInput {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Interrupt,
        KeyCode::Char(c) => KeyInput::Char(c),
        KeyCode::Enter => KeyInput::Char('\n'),
        KeyCode::Tab => KeyInput::Char('\t'),
        KeyCode::Backspace => KeyInput::Char('\u{8}'),
        KeyCode::Esc => KeyInput::Char('\u{1b}'),
        _ => KeyInput::Other,
    }
}
