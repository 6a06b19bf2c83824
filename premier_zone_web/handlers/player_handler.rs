use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use premier_zone_app::{
    command_handlers::{
        CreatePlayerCommandHandler, DeletePlayerCommandHandler, UpdatePlayerCommandHandler,
    },
    cqrs::{
        commands::{CreatePlayer, DeletePlayer, UpdatePlayer},
        queries::ListPlayers,
    },
    player_filter::PlayerSearch,
    queries_handlers::ListPlayersHandler,
};
use premier_zone_types::player::PlayerData;

use crate::{handlers::internal_error, http::AppState};

/// GET /api/v1/player?name=&team=&position=&nation=
pub async fn get_players(
    State(state): State<AppState>,
    Query(search): Query<PlayerSearch>,
) -> Response {
    let query = ListPlayers {
        filter: search.into(),
    };

    match state.app_bus.query(query, ListPlayersHandler::new()).await {
        Ok(players) => Json(players).into_response(),
        Err(e) => internal_error("Unable to list players", e),
    }
}

/// POST /api/v1/player
pub async fn add_player(State(state): State<AppState>, Json(data): Json<PlayerData>) -> Response {
    match state
        .app_bus
        .execute(CreatePlayer::new(data), CreatePlayerCommandHandler::new())
        .await
    {
        Ok(player) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(e) => internal_error("Unable to create player", e),
    }
}

/// PUT /api/v1/player: 404 with an empty body when the name is unknown.
pub async fn update_player(
    State(state): State<AppState>,
    Json(data): Json<PlayerData>,
) -> Response {
    match state
        .app_bus
        .execute(UpdatePlayer::new(data), UpdatePlayerCommandHandler::new())
        .await
    {
        Ok(Some(player)) => Json(player).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Unable to update player", e),
    }
}

/// DELETE /api/v1/player/{player_name}: succeeds whether or not anything matched.
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_name): Path<String>,
) -> Response {
    match state
        .app_bus
        .execute(
            DeletePlayer::new(player_name),
            DeletePlayerCommandHandler::new(),
        )
        .await
    {
        Ok(()) => (StatusCode::OK, "Player deleted successfully").into_response(),
        Err(e) => internal_error("Unable to delete player", e),
    }
}
