use axum::{
    Router,
    routing::{delete, get},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use premier_zone_app::app_bus::AppBus;
use premier_zone_types::{Result, errors::ApplicationError};

use crate::handlers::{add_player, delete_player, get_players, update_player};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        AppState { app_bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route(
                "/api/v1/player",
                get(get_players).post(add_player).put(update_player),
            )
            .route("/api/v1/player/{player_name}", delete(delete_player))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        Self::serve_listener(state, listener).await
    }

    /// Serves on an already bound listener (tests bind to port 0).
    pub async fn serve_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{addr}");

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
