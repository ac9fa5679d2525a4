//! Full-screen rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use threatlens_app::message::Message;
use threatlens_app::url_input::UrlInput;
use threatlens_app::{handler, HealthStatus, RequestId, Route};
use threatlens_client::test_utils::example_verdict;
use threatlens_client::ServiceError;

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn detector_state(url: &str) -> AppState {
    let mut state = AppState::with_settings(Default::default(), "http://127.0.0.1:5000/");
    state.navigate(Route::Detector);
    state.detector.input = UrlInput::with_value(url);
    state
}

#[test]
fn test_landing_screen() {
    let state = AppState::with_settings(Default::default(), "http://127.0.0.1:5000/");
    let term = draw(&state);

    assert!(term.buffer_contains("ThreatLens"));
    assert!(term.buffer_contains("Protect Yourself Online with AI"));
    assert!(term.buffer_contains("Get Started"));
    assert!(term.line_contains(23, "[Enter] Get Started"));
}

#[test]
fn test_detector_success_scenario() {
    let mut state = detector_state("https://example.com");
    handler::update(&mut state, Message::SubmitUrl);
    assert!(draw(&state).buffer_contains("Analyzing..."));

    handler::update(
        &mut state,
        Message::AnalysisCompleted {
            request_id: RequestId(1),
            verdict: Box::new(example_verdict()),
        },
    );
    let term = draw(&state);

    assert!(term.buffer_contains("Verdict: safe"));
    assert!(term.buffer_contains("Risk Probability: 0.12"));
    assert!(term.buffer_contains("Features Detected: 1/10"));
    assert!(!term.buffer_contains("Check URL"));
}

#[test]
fn test_detector_error_scenario() {
    let mut state = detector_state("https://example.com");
    handler::update(&mut state, Message::SubmitUrl);
    handler::update(
        &mut state,
        Message::AnalysisFailed {
            request_id: RequestId(1),
            error: ServiceError::request_failed("Failed to fetch"),
        },
    );
    let term = draw(&state);

    assert!(term.buffer_contains("Failed to connect to the server"));
    assert!(term.buffer_contains("https://example.com"));
    assert!(term.buffer_contains("Check URL"));
    assert!(!term.buffer_contains("Verdict:"));
}

#[test]
fn test_detector_cursor_is_shown() {
    let state = detector_state("abc");
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    let position = term.terminal.get_cursor_position().unwrap();
    assert_eq!(term.cell_at(position.x - 1, position.y), Some("c"));
}

#[test]
fn test_result_screen_fallback() {
    let mut state = AppState::new();
    state.open_result_view(None);
    let term = draw(&state);

    assert!(term.buffer_contains("No result available."));
    assert!(term.line_contains(1, "result"));
}

#[test]
fn test_result_screen_with_verdict() {
    let mut state = AppState::new();
    state.open_result_view(Some(example_verdict()));
    let term = draw(&state);

    assert!(term.buffer_contains("Analysis Results"));
    assert!(term.buffer_contains("Verdict: safe"));
}

#[test]
fn test_header_reflects_health() {
    let mut state = AppState::new();
    state.health = HealthStatus::Online("Backend is running".into());
    assert!(draw(&state).buffer_contains("(online)"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = detector_state("https://example.com/a/very/long/path/that/overflows");
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));

    handler::update(&mut state, Message::SubmitUrl);
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("ThreatLens"));
}
