//! Threat detector request lifecycle

use threatlens_client::ServiceError;
use threatlens_core::prelude::*;
use threatlens_core::Verdict;

use crate::state::{AppState, RequestId, Screen};

use super::{UpdateAction, UpdateResult};

/// Submit the current input. A submit while another request is in flight
/// supersedes it; the earlier completion will be dropped.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.screen != Screen::Detector {
        return UpdateResult::none();
    }

    if let Some(previous) = state.detector.pending_request {
        debug!("Request {:?} superseded by a new submit", previous);
    }

    let request_id = state.next_request_id();
    let url = state.detector.begin_submit(request_id);
    UpdateResult::action(UpdateAction::AnalyzeUrl { request_id, url })
}

/// Insert pasted text into the URL field. Ignored unless the form is showing.
pub fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    if state.screen == Screen::Detector && !state.detector.showing_result {
        state.detector.input.insert_str(text);
    } else {
        debug!("Ignoring paste outside the URL form");
    }
    UpdateResult::none()
}

pub fn handle_completed(
    state: &mut AppState,
    request_id: RequestId,
    verdict: Verdict,
) -> UpdateResult {
    if !state.detector.complete(request_id, verdict) {
        debug!("Dropping stale analysis result for {:?}", request_id);
    }
    UpdateResult::none()
}

pub fn handle_failed(
    state: &mut AppState,
    request_id: RequestId,
    error: ServiceError,
) -> UpdateResult {
    if state.detector.fail(request_id, error.user_message()) {
        warn!("Analysis failed: {}", error);
    } else {
        debug!("Dropping stale analysis failure for {:?}: {}", request_id, error);
    }
    UpdateResult::none()
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    state.detector.reset();
    UpdateResult::none()
}
