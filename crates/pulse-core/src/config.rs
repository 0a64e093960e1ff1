// ── Runtime widget configuration ──
//
// These types describe *where* the widget fetches from and how the HTTP
// transport behaves. They never touch disk: the CLI (via pulse-config)
// builds a `WidgetConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use pulse_api::{TlsMode, TransportConfig};

/// Mount point used when none is configured.
pub const DEFAULT_MOUNT: &str = "#dashboard";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development hosts).
    DangerAcceptInvalid,
}

/// Configuration for one widget instance.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// API base URL, e.g. `https://osu.example.com:443/api`.
    pub api_base: Url,
    /// Page region the widget is bound to.
    pub mount: String,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
}

impl WidgetConfig {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            mount: DEFAULT_MOUNT.into(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Translate into the api crate's transport settings.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
