use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::Stores;

#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
}

impl AppState {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }
}

pub fn build_router(state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/genres/all", get(crate::catalog::get_genre_list))
        .route("/ratings/:movie_id", get(crate::catalog::get_ratings))
        .route("/movies/all", get(crate::catalog::get_all_movies))
        .route("/movies/genre", get(crate::catalog::get_movies_by_genre))
        .route("/movies/year/:year", get(crate::catalog::get_movies_by_year))
        .route("/movies/:movie_id", get(crate::catalog::get_movie));

    Router::new()
        .route("/", get(root_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .merge(catalog_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Welcome to the movie API!"
}

async fn heartbeat_handler() -> &'static str {
    "Have fun with the project!"
}

async fn fallback_handler() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}
