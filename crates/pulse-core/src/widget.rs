// ── Dashboard widget ──
//
// One widget instance bound to one page region. Construction via
// `create()` fires the single background fetch; the hosting view watches
// the display state and re-renders when it changes.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use pulse_api::PlayerCountClient;

use crate::config::WidgetConfig;
use crate::error::CoreError;
use crate::source::PlayerCountSource;
use crate::state::DisplayState;
use crate::view::WidgetView;

// ── MountPoint ───────────────────────────────────────────────────

/// Identifier of the page region a widget renders into (e.g. `#dashboard`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MountPoint(String);

impl MountPoint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MountPoint {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for MountPoint {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── DashboardWidget ──────────────────────────────────────────────

/// Online player count widget.
///
/// Cheaply cloneable via `Arc<WidgetInner>`; clones share the same display
/// state. The state is written only by a successful fetch.
pub struct DashboardWidget<S> {
    inner: Arc<WidgetInner<S>>,
}

struct WidgetInner<S> {
    mount: MountPoint,
    source: S,
    state: watch::Sender<DisplayState>,
    /// `false` while the initial fetch is in flight.
    settled: watch::Sender<bool>,
}

impl<S> Clone for DashboardWidget<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: PlayerCountSource + 'static> DashboardWidget<S> {
    /// Create a widget without fetching. State starts at zero, not loaded.
    pub fn new(mount: impl Into<MountPoint>, source: S) -> Self {
        let (state, _) = watch::channel(DisplayState::default());
        let (settled, _) = watch::channel(true);
        Self {
            inner: Arc::new(WidgetInner {
                mount: mount.into(),
                source,
                state,
                settled,
            }),
        }
    }

    /// Create a widget and fire its one initial fetch in the background.
    ///
    /// Returns immediately; use [`settled()`](Self::settled) to wait for the
    /// fetch. Must be called from within a Tokio runtime.
    pub fn create(mount: impl Into<MountPoint>, source: S) -> Self {
        let widget = Self::new(mount, source);
        widget.inner.settled.send_replace(false);

        let task = widget.clone();
        tokio::spawn(async move {
            task.fetch_online_users().await;
            task.inner.settled.send_replace(true);
        });
        debug!(mount = %widget.inner.mount, "widget created, initial fetch started");
        widget
    }

    pub fn mount(&self) -> &MountPoint {
        &self.inner.mount
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    // ── Fetching ─────────────────────────────────────────────────

    /// Fetch the count and update the display state.
    ///
    /// Any failure is dropped here: the state keeps whatever value it had.
    pub async fn fetch_online_users(&self) {
        if let Err(e) = self.refresh().await {
            debug!(
                mount = %self.inner.mount,
                error = %e,
                "player count fetch failed, keeping previous value"
            );
        }
    }

    /// Fetch the count, returning the typed error instead of dropping it.
    ///
    /// State is only touched on success.
    pub async fn refresh(&self) -> Result<i64, CoreError> {
        let counts = self.inner.source.fetch_counts().await?;
        self.inner
            .state
            .send_replace(DisplayState::with_count(counts.online));
        debug!(mount = %self.inner.mount, online = counts.online, "player count loaded");
        Ok(counts.online)
    }

    /// Wait for the initial background fetch to finish.
    ///
    /// Any number of callers, on any clone, may wait. Returns at once if no
    /// fetch was started or it already finished.
    pub async fn settled(&self) {
        let mut rx = self.inner.settled.subscribe();
        // The sender lives in `inner`, which `self` keeps alive.
        let _ = rx.wait_for(|done| *done).await;
    }

    // ── State observation ────────────────────────────────────────

    pub fn state(&self) -> DisplayState {
        *self.inner.state.borrow()
    }

    pub fn online_users(&self) -> i64 {
        self.state().online_users
    }

    /// Subscribe to display state changes.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.inner.state.subscribe()
    }

    /// Values bound into the hosting template.
    pub fn view(&self) -> WidgetView {
        WidgetView::from(self.state())
    }
}

impl DashboardWidget<PlayerCountClient> {
    /// Build the HTTP client from `config` and create the widget, firing
    /// the initial fetch.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, CoreError> {
        let client = PlayerCountClient::new(config.api_base.clone(), &config.transport())?;
        Ok(Self::create(config.mount.clone(), client))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pulse_api::PlayerCounts;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    /// Replays scripted results in order; fails once the script runs out.
    struct ScriptedSource {
        script: std::sync::Mutex<VecDeque<Result<i64, CoreError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(script: impl IntoIterator<Item = Result<i64, CoreError>>) -> Self {
            Self {
                script: std::sync::Mutex::new(script.into_iter().collect()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PlayerCountSource for ScriptedSource {
        async fn fetch_counts(&self) -> Result<PlayerCounts, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.script.lock().unwrap().pop_front();
            next.unwrap_or_else(|| {
                Err(CoreError::ConnectionFailed {
                    url: "memory".into(),
                    reason: "script exhausted".into(),
                })
            })
            .map(|online| PlayerCounts {
                online,
                total: None,
            })
        }
    }

    fn network_error() -> CoreError {
        CoreError::ConnectionFailed {
            url: "http://osu.example.com/api".into(),
            reason: "connection refused".into(),
        }
    }

    #[tokio::test]
    async fn new_widget_starts_unloaded_at_zero() {
        let widget = DashboardWidget::new("#dashboard", ScriptedSource::new([]));

        assert_eq!(widget.state(), DisplayState::default());
        assert_eq!(widget.online_users(), 0);
        assert!(!widget.state().is_loaded());
        assert_eq!(widget.mount().as_str(), "#dashboard");
        assert_eq!(widget.source().calls(), 0);
    }

    #[tokio::test]
    async fn successful_fetch_sets_count() {
        let widget = DashboardWidget::new("#dashboard", ScriptedSource::new([Ok(42)]));

        widget.fetch_online_users().await;

        assert_eq!(widget.online_users(), 42);
        assert!(widget.state().is_loaded());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_zero_and_does_not_propagate() {
        let widget =
            DashboardWidget::new("#dashboard", ScriptedSource::new([Err(network_error())]));

        widget.fetch_online_users().await;

        assert_eq!(widget.online_users(), 0);
        assert!(!widget.state().is_loaded());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_value() {
        let widget = DashboardWidget::new(
            "#dashboard",
            ScriptedSource::new([
                Ok(17),
                Err(CoreError::MalformedResponse {
                    message: "missing field `online`".into(),
                }),
            ]),
        );

        widget.fetch_online_users().await;
        widget.fetch_online_users().await;

        assert_eq!(widget.online_users(), 17);
        assert!(widget.state().is_loaded());
    }

    #[tokio::test]
    async fn refresh_surfaces_typed_error() {
        let widget = DashboardWidget::new(
            "#dashboard",
            ScriptedSource::new([Err(CoreError::MalformedResponse {
                message: "expected i64".into(),
            })]),
        );

        let err = widget.refresh().await.unwrap_err();

        assert!(matches!(err, CoreError::MalformedResponse { .. }));
        assert_eq!(widget.online_users(), 0);
    }

    #[tokio::test]
    async fn create_fires_exactly_one_fetch() {
        let widget = DashboardWidget::create("#dashboard", ScriptedSource::new([Ok(5), Ok(6)]));

        widget.settled().await;
        widget.settled().await;

        assert_eq!(widget.source().calls(), 1);
        assert_eq!(widget.online_users(), 5);
    }

    /// Answers with a fixed count after a delay.
    struct DelayedSource {
        delay: std::time::Duration,
        online: i64,
    }

    impl PlayerCountSource for DelayedSource {
        async fn fetch_counts(&self) -> Result<PlayerCounts, CoreError> {
            tokio::time::sleep(self.delay).await;
            Ok(PlayerCounts {
                online: self.online,
                total: None,
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_settled_callers_all_wait_for_the_fetch() {
        let widget = DashboardWidget::create(
            "#dashboard",
            DelayedSource {
                delay: std::time::Duration::from_millis(200),
                online: 42,
            },
        );
        let other = widget.clone();
        let waiter = tokio::spawn(async move {
            other.settled().await;
            other.state()
        });
        tokio::task::yield_now().await;

        widget.settled().await;

        assert_eq!(widget.state(), DisplayState::with_count(42));
        assert_eq!(waiter.await.unwrap(), DisplayState::with_count(42));
    }

    #[tokio::test]
    async fn settled_without_initial_fetch_returns() {
        let widget = DashboardWidget::new("#dashboard", ScriptedSource::new([]));
        widget.settled().await;
        assert_eq!(widget.source().calls(), 0);
    }

    #[tokio::test]
    async fn subscribers_observe_the_loaded_state() {
        let widget = DashboardWidget::new("#dashboard", ScriptedSource::new([Ok(1234)]));
        let mut rx = widget.subscribe();

        widget.fetch_online_users().await;

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), DisplayState::with_count(1234));
        assert_eq!(widget.view().online_users, 1234);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let widget = DashboardWidget::new("#dashboard", ScriptedSource::new([Ok(9)]));
        let other = widget.clone();

        other.fetch_online_users().await;

        assert_eq!(widget.online_users(), 9);
    }

    // ── Against a live HTTP server ────────────────────────────────

    fn config_for(server: &MockServer) -> WidgetConfig {
        WidgetConfig::new(Url::parse(&format!("{}/api", server.uri())).unwrap())
    }

    #[tokio::test]
    async fn from_config_loads_count_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get_player_count"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "counts": { "online": 42 } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let widget = DashboardWidget::from_config(&config_for(&server)).unwrap();
        widget.settled().await;

        assert_eq!(widget.online_users(), 42);
        assert_eq!(widget.mount().as_str(), crate::config::DEFAULT_MOUNT);
    }

    #[tokio::test]
    async fn from_config_swallows_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get_player_count"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let widget = DashboardWidget::from_config(&config_for(&server)).unwrap();
        widget.settled().await;

        assert_eq!(widget.state(), DisplayState::default());
    }
}
