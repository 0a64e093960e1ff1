// Player count HTTP client
//
// Wraps `reqwest::Client` with URL construction under the API base and
// typed decoding of the `{ counts: { online } }` body.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{PlayerCountResponse, PlayerCounts};
use crate::transport::TransportConfig;

const PLAYER_COUNT_PATH: &str = "get_player_count";

/// Raw HTTP client for the player count API.
///
/// `base_url` is the API root including its path prefix, e.g.
/// `https://osu.example.com:443/api`. Endpoint paths are appended to it.
pub struct PlayerCountClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl PlayerCountClient {
    /// Create a new client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout: Some(transport.timeout),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            timeout: None,
        }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/{path}`, tolerating a trailing slash on the base and a
    /// leading slash on the path.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET {base}/get_player_count`, returning the decoded counts.
    pub async fn get_player_count(&self) -> Result<PlayerCounts, Error> {
        let url = self.endpoint_url(PLAYER_COUNT_PATH)?;
        let response: PlayerCountResponse = self.get(url).await?;
        Ok(response.counts)
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| self.map_transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                message: preview(&body).to_owned(),
            });
        }

        let body = resp.text().await.map_err(|e| self.map_transport_error(e))?;
        trace!(body = %preview(&body), "response body");

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }

    /// A timeout becomes `Error::Timeout` when the configured limit is known.
    fn map_transport_error(&self, err: reqwest::Error) -> Error {
        match self.timeout {
            Some(timeout) if err.is_timeout() => Error::Timeout { timeout },
            _ => Error::Transport(err),
        }
    }
}

/// First 200 bytes of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> PlayerCountClient {
        PlayerCountClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn endpoint_url_appends_under_base_path() {
        let c = client("https://osu.example.com:443/api");
        assert_eq!(
            c.endpoint_url("get_player_count").unwrap().as_str(),
            "https://osu.example.com/api/get_player_count"
        );
    }

    #[test]
    fn endpoint_url_collapses_duplicate_slashes() {
        let c = client("http://127.0.0.1:8080/api/");
        assert_eq!(
            c.endpoint_url("/get_player_count").unwrap().as_str(),
            "http://127.0.0.1:8080/api/get_player_count"
        );
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "é".repeat(150);
        let cut = preview(&body);
        assert!(cut.len() <= 200);
        assert!(body.starts_with(cut));
    }
}
