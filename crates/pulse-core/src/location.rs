//! API base URL derivation from a page location.
//!
//! The API lives on the `osu.` subdomain of the page's host, on the same
//! port, under `/api`. The pieces are concatenated verbatim: browsers report
//! the protocol with its trailing colon (`"https:"`), so the separator here
//! is just `//`.

use serde::{Deserialize, Serialize};

pub const API_SUBDOMAIN: &str = "osu";
pub const API_PATH: &str = "/api";

/// Build `<protocol>//osu.<hostname>:<port>/api`.
///
/// ```
/// use pulse_core::compute_api_base_url;
///
/// assert_eq!(
///     compute_api_base_url("https:", "example.com", "443"),
///     "https://osu.example.com:443/api"
/// );
/// ```
pub fn compute_api_base_url(protocol: &str, hostname: &str, port: &str) -> String {
    format!("{protocol}//{API_SUBDOMAIN}.{hostname}:{port}{API_PATH}")
}

/// The page location a widget would otherwise read from its environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocation {
    /// Scheme as a browser reports it, including the colon (`"https:"`).
    pub protocol: String,
    pub hostname: String,
    /// Port as text; empty when the page is served on the default port.
    #[serde(default)]
    pub port: String,
}

impl PageLocation {
    pub fn new(
        protocol: impl Into<String>,
        hostname: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
            port: port.into(),
        }
    }

    pub fn api_base_url(&self) -> String {
        compute_api_base_url(&self.protocol, &self.hostname, &self.port)
    }
}
