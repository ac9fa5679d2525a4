//! Route changes and the detector → result screen hand-off

use threatlens_core::prelude::*;
use threatlens_core::Verdict;

use crate::message::Message;
use crate::route::Route;
use crate::state::{AppState, Screen};

use super::UpdateResult;

pub fn handle_navigate(state: &mut AppState, route: Route) -> UpdateResult {
    debug!("Navigating to {}", route.path());
    state.navigate(route);
    UpdateResult::none()
}

/// Mount the result screen with whatever verdict the message carried.
pub fn handle_open_result_view(state: &mut AppState, verdict: Option<Verdict>) -> UpdateResult {
    match &verdict {
        Some(v) => debug!("Opening result view for {}", v.url),
        None => debug!("Opening result view without a verdict"),
    }
    state.open_result_view(verdict);
    UpdateResult::none()
}

/// Move the detector's verdict into an `OpenResultView` message.
///
/// The detector is left as an empty form, so the verdict lives in exactly
/// one place at a time.
pub fn handle_open_result_from_detector(state: &mut AppState) -> UpdateResult {
    if state.screen != Screen::Detector {
        return UpdateResult::none();
    }
    let verdict = state.detector.take_verdict();
    UpdateResult::message(Message::OpenResultView {
        verdict: verdict.map(Box::new),
    })
}
