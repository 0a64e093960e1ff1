//! Configuration for the pulse widget.
//!
//! Layered TOML + environment loading and translation to
//! `pulse_core::WidgetConfig`. The CLI adds flag overrides on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use pulse_core::{DEFAULT_MOUNT, PageLocation, TlsVerification, WidgetConfig};

/// Environment variable prefix; nested keys are split on `__`
/// (`PULSE_DEFAULTS__TIMEOUT=10`).
pub const ENV_PREFIX: &str = "PULSE_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API base configured: set `api_base` or a `[page]` location")]
    NoApiBase,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Page region the widget binds to.
    #[serde(default = "default_mount")]
    pub mount: String,

    /// Explicit API base URL (e.g., "https://osu.example.com/api").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Page location to derive the API base from when `api_base` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageLocation>,

    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount: default_mount(),
            api_base: None,
            page: None,
            defaults: Defaults::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Path to custom CA certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
            ca_cert: None,
        }
    }
}

fn default_mount() -> String {
    DEFAULT_MOUNT.into()
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "pulse", "pulse").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("pulse");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load defaults, then `path` (if it exists), then `PULSE_*` variables.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Resolution ──────────────────────────────────────────────────────

/// Resolve the API base: `api_base` if set, otherwise derived from `page`.
pub fn resolve_api_base(cfg: &Config) -> Result<Url, ConfigError> {
    if let Some(ref raw) = cfg.api_base {
        return parse_api_base("api_base", raw);
    }
    if let Some(ref page) = cfg.page {
        return parse_api_base("page", &page.api_base_url());
    }
    Err(ConfigError::NoApiBase)
}

/// Parse an API base URL, naming `field` in the error.
pub fn parse_api_base(field: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("'{raw}' is not an absolute URL ({e}){}", protocol_hint(raw)),
    })?;
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("'{raw}' has no host"),
        });
    }
    Ok(url)
}

fn protocol_hint(raw: &str) -> &'static str {
    if raw.contains("//") && !raw.contains("://") {
        "; the page protocol must keep its trailing colon, e.g. \"https:\""
    } else {
        ""
    }
}

/// TLS strategy from the defaults section.
pub fn resolve_tls(defaults: &Defaults) -> TlsVerification {
    if defaults.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = defaults.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    }
}

/// Build a `WidgetConfig` from config alone, no flag overrides.
pub fn to_widget_config(cfg: &Config) -> Result<WidgetConfig, ConfigError> {
    Ok(WidgetConfig {
        api_base: resolve_api_base(cfg)?,
        mount: cfg.mount.clone(),
        tls: resolve_tls(&cfg.defaults),
        timeout: Duration::from_secs(cfg.defaults.timeout),
    })
}
