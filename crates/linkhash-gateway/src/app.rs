use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{delete_link_handler, health_handler, resolve_link_handler, shorten_link_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten", post(shorten_link_handler))
            .route(
                "/{slug}",
                get(resolve_link_handler).delete(delete_link_handler),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
