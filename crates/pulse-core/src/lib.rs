//! Online player count widget, independent of any UI toolkit.
//!
//! - **[`DashboardWidget`]** — one instance per page region. Built by the
//!   host's bootstrap code with an explicit [`PlayerCountSource`];
//!   [`create()`](DashboardWidget::create) fires a single background fetch
//!   of `get_player_count`. Failures are dropped and the display keeps its
//!   last value; [`refresh()`](DashboardWidget::refresh) exposes the typed
//!   error for callers that want it.
//!
//! - **[`DisplayState`]** — the `online_users` count plus a loaded flag,
//!   published through a `tokio::sync::watch` channel for re-rendering.
//!
//! - **[`add_commas`]** — thousands grouping for display.
//!
//! - **[`compute_api_base_url`]** / **[`PageLocation`]** — derive the API
//!   base from a page's protocol, host and port.
//!
//! - **[`view`]** — the template binding (`online_users`, `addCommas`,
//!   `<% %>` delimiters).

pub mod config;
pub mod error;
pub mod format;
pub mod location;
pub mod source;
pub mod state;
pub mod view;
pub mod widget;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_MOUNT, TlsVerification, WidgetConfig};
pub use error::CoreError;
pub use format::add_commas;
pub use location::{PageLocation, compute_api_base_url};
pub use source::PlayerCountSource;
pub use state::DisplayState;
pub use view::{Delimiters, WidgetView, render_template};
pub use widget::{DashboardWidget, MountPoint};

pub use pulse_api::{PlayerCountClient, PlayerCounts};
