use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use super::{AppState, non_empty};
use crate::api::extract::{ApiJson, ApiPath};
use crate::domain::models::{Player, PlayerUpdate, Team};
use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub team_id: Option<i64>,
    pub name: Option<String>,
    pub number: Option<i64>,
    pub position: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Player>>, ApiError> {
    Ok(Json(state.players.list().await?))
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewPlayer>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let (team_id, name, number, position) = validate_new_player(payload)?;
    let player = state.players.create(team_id, name, number, position).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(update): ApiJson<PlayerUpdate>,
) -> Result<Json<Player>, ApiError> {
    state
        .players
        .update(id, update)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Player"))
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    if state.players.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Player"))
    }
}

/// Players of a team. An unknown team id is not an error; the result is just
/// empty.
pub async fn list_team_players(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<Player>>, ApiError> {
    Ok(Json(state.players.by_team(id).await?))
}

/// Team of a player, resolved lazily through the advisory reference. A
/// dangling reference reports the team as missing, not the player.
pub async fn get_player_team(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Team>, ApiError> {
    let player = state
        .players
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Player"))?;

    state
        .teams
        .get(player.team_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Team"))
}

pub async fn search_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let query = params.name.as_deref().map(str::trim).unwrap_or("");
    if query.is_empty() {
        return Err(ApiError::Validation(
            "name query parameter required".to_string(),
        ));
    }
    Ok(Json(state.players.search(query).await?))
}

fn validate_new_player(payload: NewPlayer) -> Result<(i64, String, i64, String), ApiError> {
    match (
        payload.team_id,
        non_empty(payload.name),
        payload.number,
        non_empty(payload.position),
    ) {
        (Some(team_id), Some(name), Some(number), Some(position)) => {
            Ok((team_id, name, number, position))
        }
        _ => Err(ApiError::Validation(
            "teamId, name, number, position required".to_string(),
        )),
    }
}
