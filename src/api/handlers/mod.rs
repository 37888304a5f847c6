use crate::store::players::PlayerStore;
use crate::store::teams::TeamStore;

pub mod players;
pub mod teams;

pub struct AppState {
    pub teams: TeamStore,
    pub players: PlayerStore,
}

pub async fn health() -> &'static str {
    "roster API is running"
}

/// `Some` only when the value is present and not blank after trimming.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
