//! Wire types for `GET /get_player_count`.

use serde::{Deserialize, Serialize};

/// Full response body: `{ "status": "success", "counts": { "online": N, "total": M } }`.
///
/// Only `counts.online` is required; the server's other fields are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCountResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub counts: PlayerCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCounts {
    /// Players currently online.
    pub online: i64,
    /// Registered players, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}
