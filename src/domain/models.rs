use serde::{Deserialize, Serialize};

/// A team record, as stored on disk and served over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// A player record. `team_id` is an advisory reference: it is never checked
/// against the team collection at write time, only resolved on join lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub number: i64,
    pub position: String,
}

/// Partial team update; only present fields overwrite stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub country: Option<String>,
}

/// Partial player update; only present fields overwrite stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    pub team_id: Option<i64>,
    pub name: Option<String>,
    pub number: Option<i64>,
    pub position: Option<String>,
}
