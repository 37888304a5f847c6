use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::api::handlers::players::{
    create_player, delete_player, get_player_team, list_players, list_team_players,
    search_players, update_player,
};
use crate::api::handlers::teams::{create_team, delete_team, get_team, list_teams, update_team};
use crate::api::handlers::{AppState, health};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/:id", get(get_team).put(update_team).delete(delete_team))
        .route("/teams/:id/players", get(list_team_players))
        .route("/players", get(list_players).post(create_player))
        .route("/players/:id", put(update_player).delete(delete_player))
        .route("/players/:id/team", get(get_player_team))
        .route("/players-search", get(search_players))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::store::{PlayerStore, TeamStore};

    fn temp_router(name: &str) -> Router {
        let dir = std::env::temp_dir().join("roster_api_route_tests").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        let state = Arc::new(AppState {
            teams: TeamStore::new(dir.join("teams.json")),
            players: PlayerStore::new(dir.join("players.json")),
        });
        create_router(state)
    }

    async fn error_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn non_numeric_team_id_is_a_json_400() {
        let app = temp_router("bad_team_id");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/teams/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn non_numeric_player_id_is_a_json_400() {
        let app = temp_router("bad_player_id");

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/players/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert!(body.get("error").is_some());
    }
}
