use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use super::{AppState, non_empty};
use crate::api::extract::{ApiJson, ApiPath};
use crate::domain::models::{Team, TeamUpdate};
use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
pub struct NewTeam {
    pub name: Option<String>,
    pub country: Option<String>,
}

pub async fn list_teams(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Team>>, ApiError> {
    Ok(Json(state.teams.list().await?))
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Team>, ApiError> {
    state
        .teams
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Team"))
}

pub async fn create_team(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<NewTeam>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let (name, country) = validate_new_team(payload)?;
    let team = state.teams.create(name, country).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn update_team(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(update): ApiJson<TeamUpdate>,
) -> Result<Json<Team>, ApiError> {
    state
        .teams
        .update(id, update)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Team"))
}

pub async fn delete_team(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    if state.teams.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Team"))
    }
}

fn validate_new_team(payload: NewTeam) -> Result<(String, String), ApiError> {
    match (non_empty(payload.name), non_empty(payload.country)) {
        (Some(name), Some(country)) => Ok((name, country)),
        _ => Err(ApiError::Validation("name and country required".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_team_requires_both_fields() {
        let payload = NewTeam {
            name: Some("Reds".into()),
            country: None,
        };
        assert!(validate_new_team(payload).is_err());
    }

    #[test]
    fn new_team_rejects_blank_values() {
        let payload = NewTeam {
            name: Some("   ".into()),
            country: Some("UK".into()),
        };
        assert!(validate_new_team(payload).is_err());
    }

    #[test]
    fn new_team_accepts_complete_payloads() {
        let payload = NewTeam {
            name: Some("Reds".into()),
            country: Some("UK".into()),
        };
        assert_eq!(
            validate_new_team(payload).unwrap(),
            ("Reds".to_string(), "UK".to_string())
        );
    }
}
