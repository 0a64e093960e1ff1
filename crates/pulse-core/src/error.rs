// ── Core error types ──
//
// Errors from pulse-core. The widget swallows fetch failures on its own
// path; these surface only through `DashboardWidget::refresh()` and the
// view helpers. The `From<pulse_api::Error>` impl translates
// transport-layer errors into domain variants.

use std::time::Duration;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach player count API at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Player count request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    // ── API errors ───────────────────────────────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Malformed player count response: {message}")]
    MalformedResponse { message: String },

    // ── View errors ──────────────────────────────────────────────────
    #[error("Template error: {message}")]
    Template { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<pulse_api::Error> for CoreError {
    fn from(err: pulse_api::Error) -> Self {
        match err {
            // A timeout only lands here when the client was built without a
            // known limit, so there is no duration to report.
            pulse_api::Error::Transport(ref e) => {
                if e.is_connect() || e.is_timeout() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            pulse_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            pulse_api::Error::Timeout { timeout } => CoreError::Timeout { timeout },
            pulse_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            pulse_api::Error::Http { status, message } => CoreError::Api {
                message: format!("HTTP {status}: {message}"),
                status: Some(status),
            },
            pulse_api::Error::Deserialization { message, body: _ } => {
                CoreError::MalformedResponse { message }
            }
        }
    }
}
