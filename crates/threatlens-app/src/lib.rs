//! threatlens-app - Application state and orchestration for ThreatLens
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! `Message` in, `update()` mutates `AppState`, and an optional `UpdateAction` tells
//! the event loop which background request to start. It also owns routing,
//! configuration loading, and the input abstraction shared by all frontends.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod route;
pub mod state;
pub mod url_input;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use route::Route;
pub use state::{AppState, DetectorState, HealthStatus, RequestId, ResultViewState, Screen};
