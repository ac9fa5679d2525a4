//! # threatlens-core - Core Domain Types
//!
//! Foundation crate for ThreatLens. Provides the verdict domain model, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`verdict`)
//! - [`Verdict`] - Structured risk assessment returned for a submitted URL
//! - [`FieldValue`] - Scalar field that keeps the service's formatting verbatim
//! - [`RiskLevel`] - Display bucket derived from the risk probability
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use threatlens_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod verdict;

pub use error::{Error, Result, ResultExt};
pub use verdict::{FieldValue, RiskLevel, Verdict};
