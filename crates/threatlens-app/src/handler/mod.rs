//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `detector`: Submit/complete/fail/reset for the threat detector
//! - `navigation`: Route changes and the result screen hand-off

pub(crate) mod detector;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;


use crate::message::Message;
use crate::state::RequestId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// POST the URL to the analysis service and report back with
    /// `AnalysisCompleted`/`AnalysisFailed` carrying `request_id`
    AnalyzeUrl { request_id: RequestId, url: String },

    /// Probe the service's liveness endpoint
    CheckHealth,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
