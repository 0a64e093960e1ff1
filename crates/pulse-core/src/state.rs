use serde::Serialize;

/// What the widget currently shows.
///
/// Starts as `{ online_users: 0, loaded: false }` and only changes when a
/// fetch completes successfully. There is no way back to "not loaded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub online_users: i64,
    pub loaded: bool,
}

impl DisplayState {
    pub(crate) fn with_count(online_users: i64) -> Self {
        Self {
            online_users,
            loaded: true,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
