//! Startup functions for the TUI runner
//!
//! Decides the first screen and whether to probe the service before the
//! first render.

use threatlens_app::state::AppState;
use threatlens_app::Route;
use threatlens_core::prelude::*;

/// Result of startup initialization
#[derive(Debug, PartialEq, Eq)]
pub enum StartupAction {
    /// Nothing to do before the first frame
    Ready,
    /// Probe the service health endpoint once the loop is running
    CheckHealth,
}

/// Put `state` on `route` and decide the startup action from its settings
pub fn startup(state: &mut AppState, route: Route) -> StartupAction {
    state.navigate(route);
    info!("Starting on {} against {}", route.path(), state.service_label);

    if state.settings.service.check_health {
        StartupAction::CheckHealth
    } else {
        StartupAction::Ready
    }
}
