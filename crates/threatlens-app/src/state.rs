//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};
use threatlens_core::Verdict;

use crate::config::Settings;
use crate::route::Route;
use crate::url_input::UrlInput;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Identifies one submit. Only the most recent id is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Screen currently shown
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    /// Landing screen (`/`)
    #[default]
    Landing,

    /// Threat detector form and inline result (`/predict`)
    Detector,

    /// Full-screen result view, owning the verdict it was opened with
    Result(ResultViewState),
}

impl Screen {
    /// The route this screen answers to; the result screen has none
    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::Landing => Some(Route::Landing),
            Screen::Detector => Some(Route::Detector),
            Screen::Result(_) => None,
        }
    }
}

/// Threat detector view state.
///
/// Form ⇄ Result, with loading a transient sub-state of the form and the
/// error message a per-attempt sub-state of the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectorState {
    pub input: UrlInput,
    pub verdict: Option<Verdict>,
    pub error: Option<String>,
    pub loading: bool,
    pub showing_result: bool,
    /// Latest submit; completions for any other id are dropped
    pub pending_request: Option<RequestId>,
    /// When the displayed verdict arrived
    pub received_at: Option<DateTime<Local>>,
}

impl DetectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submit: clear prior result/error, mark loading, remember `id`.
    ///
    /// Returns the URL exactly as typed. No validation happens client-side.
    pub fn begin_submit(&mut self, id: RequestId) -> String {
        self.verdict = None;
        self.error = None;
        self.received_at = None;
        self.showing_result = false;
        self.loading = true;
        self.pending_request = Some(id);
        self.input.value().to_string()
    }

    /// Apply a successful response. Returns `false` if `id` is stale.
    pub fn complete(&mut self, id: RequestId, verdict: Verdict) -> bool {
        if self.pending_request != Some(id) {
            return false;
        }
        self.pending_request = None;
        self.loading = false;
        self.error = None;
        self.verdict = Some(verdict);
        self.received_at = Some(Local::now());
        self.showing_result = true;
        true
    }

    /// Apply a failed response. Returns `false` if `id` is stale.
    pub fn fail(&mut self, id: RequestId, message: String) -> bool {
        if self.pending_request != Some(id) {
            return false;
        }
        self.pending_request = None;
        self.loading = false;
        self.verdict = None;
        self.showing_result = false;
        self.error = Some(message);
        true
    }

    /// Back to an empty form. Any in-flight request is forgotten.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move the verdict out for the result screen, leaving an empty form.
    pub fn take_verdict(&mut self) -> Option<Verdict> {
        let verdict = self.verdict.take();
        self.reset();
        verdict
    }
}

/// Result screen state: the verdict handed over at navigation time, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultViewState {
    pub verdict: Option<Verdict>,
}

impl ResultViewState {
    pub fn mount(verdict: Option<Verdict>) -> Self {
        Self { verdict }
    }

    pub fn has_result(&self) -> bool {
        self.verdict.is_some()
    }
}

/// Liveness of the analysis service, as last probed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthStatus {
    /// Not probed yet
    #[default]
    Unknown,
    Checking,
    Online(String),
    Offline(String),
}

impl HealthStatus {
    pub fn label(&self) -> &str {
        match self {
            HealthStatus::Unknown => "not checked",
            HealthStatus::Checking => "checking…",
            HealthStatus::Online(_) => "online",
            HealthStatus::Offline(_) => "offline",
        }
    }
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub screen: Screen,
    pub detector: DetectorState,
    pub settings: Settings,
    /// Where requests go, for display
    pub service_label: String,
    pub health: HealthStatus,
    /// Spinner frame, advanced on every tick while loading
    pub spinner_frame: usize,
    next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), String::new())
    }

    pub fn with_settings(settings: Settings, service_label: impl Into<String>) -> Self {
        Self {
            phase: AppPhase::Running,
            screen: Screen::Landing,
            detector: DetectorState::new(),
            settings,
            service_label: service_label.into(),
            health: HealthStatus::Unknown,
            spinner_frame: 0,
            next_request_id: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Current route, `None` on the result screen
    pub fn route(&self) -> Option<Route> {
        self.screen.route()
    }

    /// Switch screens by route. Leaving the detector discards its state.
    pub fn navigate(&mut self, route: Route) {
        if self.screen != Screen::Detector || route != Route::Detector {
            self.detector.reset();
        }
        self.screen = match route {
            Route::Landing => Screen::Landing,
            Route::Detector => Screen::Detector,
        };
    }

    /// Mount the result screen with the verdict passed at navigation time.
    pub fn open_result_view(&mut self, verdict: Option<Verdict>) {
        self.detector.reset();
        self.screen = Screen::Result(ResultViewState::mount(verdict));
    }

    /// Allocate the id for a new submit
    pub fn next_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        RequestId(self.next_request_id)
    }

    pub fn tick(&mut self) {
        if self.detector.loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
