//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

use pulse_config::ConfigError;
use pulse_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the player count API at {url}")]
    #[diagnostic(
        code(pulse::connection_failed),
        help(
            "Check that the API server is running and reachable.\n\
             Try: pulse count --api-base <url> -vv"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out after {timeout:?}")]
    #[diagnostic(
        code(pulse::timeout),
        help("Increase timeout with --timeout or check server responsiveness.")
    )]
    Timeout { timeout: Duration },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(pulse::api_error))]
    ApiError { message: String },

    #[error("Unexpected response from get_player_count: {message}")]
    #[diagnostic(
        code(pulse::malformed_response),
        help("The endpoint should answer with {{\"counts\": {{\"online\": <integer>}}}}.")
    )]
    MalformedResponse { message: String },

    // ── Rendering ────────────────────────────────────────────────────
    #[error("Template error: {message}")]
    #[diagnostic(
        code(pulse::template),
        help("Supported placeholders: <% online_users %>, <% addCommas(online_users) %>")
    )]
    Template { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(pulse::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No API base configured")]
    #[diagnostic(
        code(pulse::no_api_base),
        help(
            "Pass --api-base, set PULSE_API_BASE, or create a config with:\n\
             pulse config init --api-base <url>\n\
             Expected at: {path}"
        )
    )]
    NoApiBase { path: String },

    #[error("Config file already exists at {path}")]
    #[diagnostic(code(pulse::config_exists), help("Use --force to overwrite it."))]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(pulse::config))]
    Config(ConfigError),

    #[error("Could not render output: {message}")]
    #[diagnostic(code(pulse::render))]
    Render { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NoApiBase { .. } | Self::ConfigExists { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },
            CoreError::Timeout { timeout } => CliError::Timeout { timeout },
            CoreError::Api { message, .. } => CliError::ApiError { message },
            CoreError::MalformedResponse { message } => CliError::MalformedResponse { message },
            CoreError::Template { message } => CliError::Template { message },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoApiBase => CliError::NoApiBase {
                path: pulse_config::config_path().display().to_string(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config(other),
        }
    }
}
