//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Analysis Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Analysis service error: {message}")]
    Service { message: String },

    #[error("Invalid analysis service URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Routing Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown route: {path} (expected '/' or '/predict')")]
    UnknownRoute { path: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    pub fn invalid_server_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidServerUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute { path: path.into() }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Service { .. } | Error::Json(_))
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. }
                | Error::InvalidServerUrl { .. }
                | Error::UnknownRoute { .. }
                | Error::ConfigNotFound { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::service("connection refused");
        assert_eq!(
            err.to_string(),
            "Analysis service error: connection refused"
        );

        let err = Error::unknown_route("/admin");
        assert!(err.to_string().contains("/admin"));
        assert!(err.to_string().contains("/predict"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::terminal("no tty").is_fatal());
        assert!(Error::unknown_route("/nope").is_fatal());
        assert!(Error::invalid_server_url("ftp:/x", "unsupported scheme").is_fatal());
        assert!(Error::ConfigNotFound {
            path: PathBuf::from("/missing/config.toml")
        }
        .is_fatal());
        assert!(!Error::service("timeout").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::service("500").is_recoverable());
        assert!(Error::Json(serde_json::from_str::<u8>("x").unwrap_err()).is_recoverable());
        assert!(!Error::terminal("no tty").is_recoverable());
        assert!(!Error::unknown_route("/x").is_recoverable());
    }

    #[test]
    fn test_invalid_server_url_message() {
        let err = Error::invalid_server_url("not a url", "relative URL without a base");
        let msg = err.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL without a base"));
    }

    #[test]
    fn test_context_preserves_error_kind() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
