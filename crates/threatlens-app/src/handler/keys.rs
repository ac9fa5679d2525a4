//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::Route;
use crate::state::{AppState, Screen};

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Keys that work everywhere, including while typing
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(5) => return Some(Message::CheckHealth),
        _ => {}
    }

    match &state.screen {
        Screen::Landing => handle_key_landing(key),
        Screen::Detector if state.detector.showing_result => handle_key_detector_result(key),
        Screen::Detector => handle_key_detector_form(key),
        Screen::Result(_) => handle_key_result_view(key),
    }
}

fn handle_key_landing(key: InputKey) -> Option<Message> {
    match key {
        // "Get Started"
        InputKey::Enter | InputKey::Char('g') => Some(Message::Navigate(Route::Detector)),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Form view: the URL field has focus, so plain characters are text
fn handle_key_detector_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitUrl),
        InputKey::Esc => Some(Message::Navigate(Route::Landing)),

        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Delete => Some(Message::InputDelete),
        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Home | InputKey::CharCtrl('a') => Some(Message::CursorHome),
        InputKey::End | InputKey::CharCtrl('e') => Some(Message::CursorEnd),
        InputKey::CharCtrl('u') => Some(Message::ClearInput),

        InputKey::Char(c) => Some(Message::InputChar(c)),
        _ => None,
    }
}

/// Inline result panel under the detector
fn handle_key_detector_result(key: InputKey) -> Option<Message> {
    match key {
        // "Back"
        InputKey::Char('b') | InputKey::Esc | InputKey::Backspace => Some(Message::ResetDetector),
        // "Open full result"
        InputKey::Char('o') | InputKey::Enter => Some(Message::OpenResultFromDetector),
        InputKey::Char('h') => Some(Message::Navigate(Route::Landing)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_result_view(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('b') | InputKey::Esc | InputKey::Backspace => {
            Some(Message::Navigate(Route::Detector))
        }
        InputKey::Char('h') => Some(Message::Navigate(Route::Landing)),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
