//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::time::Duration;
use threatlens_app::message::Message;
use threatlens_app::InputKey;
use threatlens_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a terminal event into messages.
///
/// A paste stays one message so the app can decide whether the current
/// screen takes text at all.
pub fn event_to_messages(event: Event) -> Vec<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => key_event_to_input(key)
            .map(|input_key| vec![Message::Key(input_key)])
            .unwrap_or_default(),
        Event::Paste(text) => vec![Message::Paste(text)],
        _ => Vec::new(),
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Vec<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(event_to_messages(event::read()?))
    } else {
        // Generate tick on timeout for animations
        Ok(vec![Message::Tick])
    }
}
