//! CLI configuration — thin wrapper around `pulse_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--api-base, --mount, --timeout, ...).

use std::time::Duration;

use clap::ValueEnum;

use pulse_core::WidgetConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use pulse_config::{Config, config_path, load_config, save_config};

/// Translate config + global flags into a `WidgetConfig`.
///
/// CLI flag overrides take priority over config values.
pub fn resolve_widget_config(cfg: &Config, global: &GlobalOpts) -> Result<WidgetConfig, CliError> {
    // 1. API base (flag/env > config api_base > config page)
    let api_base = match global.api_base.as_deref() {
        Some(raw) => pulse_config::parse_api_base("api-base", raw)?,
        None => pulse_config::resolve_api_base(cfg)?,
    };

    // 2. TLS verification
    let tls = if global.insecure {
        pulse_core::TlsVerification::DangerAcceptInvalid
    } else {
        pulse_config::resolve_tls(&cfg.defaults)
    };

    Ok(WidgetConfig {
        api_base,
        mount: global.mount.clone().unwrap_or_else(|| cfg.mount.clone()),
        tls,
        timeout: Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout)),
    })
}

/// Output format: flag > config > table.
pub fn output_format(cfg: &Config, global: &GlobalOpts) -> OutputFormat {
    global
        .output
        .or_else(|| OutputFormat::from_str(&cfg.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Table)
}

/// Color mode: flag > config > auto.
pub fn color_mode(cfg: &Config, global: &GlobalOpts) -> ColorMode {
    global
        .color
        .or_else(|| ColorMode::from_str(&cfg.defaults.color, true).ok())
        .unwrap_or(ColorMode::Auto)
}
