// pulse-api: Async Rust client for the player count endpoint

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::PlayerCountClient;
pub use error::Error;
pub use models::{PlayerCountResponse, PlayerCounts};
pub use transport::{TlsMode, TransportConfig};
