use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{health::health_check, posts::posts_handler},
    middleware::configure_cors,
    AppState,
};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/posts", posts_handler())
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api_route)
        .layer(Extension(app_state))
        .layer(configure_cors())
        .layer(TraceLayer::new_for_http())
}
