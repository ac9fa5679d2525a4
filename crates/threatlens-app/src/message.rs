//! Message types for the application (TEA pattern)

use threatlens_client::ServiceError;
use threatlens_core::Verdict;

use crate::input_key::InputKey;
use crate::route::Route;
use crate::state::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch to the screen behind a route
    Navigate(Route),

    /// Mount the result screen with the verdict handed over by value.
    /// `None` mounts the "no result" fallback.
    OpenResultView { verdict: Option<Box<Verdict>> },

    /// Move the detector's current verdict (if any) to the result screen
    OpenResultFromDetector,

    // ─────────────────────────────────────────────────────────
    // URL Input Editing
    // ─────────────────────────────────────────────────────────
    InputChar(char),
    /// Bracketed paste; only the detector form accepts it
    Paste(String),
    InputBackspace,
    InputDelete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearInput,

    // ─────────────────────────────────────────────────────────
    // Analysis Request Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Submit the URL currently in the input field
    SubmitUrl,

    /// The service answered with a valid verdict
    AnalysisCompleted {
        request_id: RequestId,
        verdict: Box<Verdict>,
    },

    /// The request failed or the response was malformed
    AnalysisFailed {
        request_id: RequestId,
        error: ServiceError,
    },

    /// Clear verdict, error, and input; return to the form
    ResetDetector,

    // ─────────────────────────────────────────────────────────
    // Service Health
    // ─────────────────────────────────────────────────────────
    /// Probe the service's liveness endpoint
    CheckHealth,

    /// Liveness probe finished
    HealthChecked { result: Result<String, ServiceError> },
}
