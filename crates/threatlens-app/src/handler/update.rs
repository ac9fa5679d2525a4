//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, HealthStatus};
use threatlens_core::prelude::*;

use super::{detector, keys::handle_key, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut crate::state::AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::handle_navigate(state, route),
        Message::OpenResultView { verdict } => {
            navigation::handle_open_result_view(state, verdict.map(|v| *v))
        }
        Message::OpenResultFromDetector => navigation::handle_open_result_from_detector(state),

        // ─────────────────────────────────────────────────────────
        // URL Input Editing
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            state.detector.input.insert_char(c);
            UpdateResult::none()
        }
        Message::Paste(text) => detector::handle_paste(state, &text),
        Message::InputBackspace => {
            state.detector.input.backspace();
            UpdateResult::none()
        }
        Message::InputDelete => {
            state.detector.input.delete();
            UpdateResult::none()
        }
        Message::CursorLeft => {
            state.detector.input.move_left();
            UpdateResult::none()
        }
        Message::CursorRight => {
            state.detector.input.move_right();
            UpdateResult::none()
        }
        Message::CursorHome => {
            state.detector.input.move_home();
            UpdateResult::none()
        }
        Message::CursorEnd => {
            state.detector.input.move_end();
            UpdateResult::none()
        }
        Message::ClearInput => {
            state.detector.input.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis Request Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::SubmitUrl => detector::handle_submit(state),
        Message::AnalysisCompleted {
            request_id,
            verdict,
        } => detector::handle_completed(state, request_id, *verdict),
        Message::AnalysisFailed { request_id, error } => {
            detector::handle_failed(state, request_id, error)
        }
        Message::ResetDetector => detector::handle_reset(state),

        // ─────────────────────────────────────────────────────────
        // Service Health
        // ─────────────────────────────────────────────────────────
        Message::CheckHealth => {
            if state.health == HealthStatus::Checking {
                return UpdateResult::none();
            }
            state.health = HealthStatus::Checking;
            UpdateResult::action(UpdateAction::CheckHealth)
        }
        Message::HealthChecked { result } => {
            state.health = match result {
                Ok(message) => {
                    info!("Analysis service is up: {}", message);
                    HealthStatus::Online(message)
                }
                Err(e) => {
                    warn!("Analysis service health probe failed: {}", e);
                    HealthStatus::Offline(e.user_message())
                }
            };
            UpdateResult::none()
        }
    }
}
