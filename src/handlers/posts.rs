use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use tracing::{debug, warn};

use crate::{
    models::{
        posts::PostPayload,
        query::{ListPostsQuery, Pagination},
        response::MessageResponse,
    },
    AppState, Error, Result,
};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(get_posts).post(create_post))
        .route("/{id}", get(get_post).put(update_post).delete(delete_post))
}

// Non-numeric ids can never match a row.
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| Error::NotFound("Post not found"))
}

async fn get_posts(
    Extension(app_state): Extension<Arc<AppState>>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let query = match query {
        Ok(Query(pairs)) => pairs.into_iter().collect(),
        Err(rejection) => {
            warn!("Ignoring malformed query string: {}", rejection.body_text());
            ListPostsQuery::default()
        }
    };

    let page = app_state
        .post_service
        .list_posts(Pagination::from(query))
        .await?;
    Ok((StatusCode::OK, Json(page)))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    payload: std::result::Result<Json<PostPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    debug!("Received POST body: {payload:?}");

    let post = app_state.post_service.create_post(payload).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn get_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse> {
    let post = app_state.post_service.get_post(parse_id(&post_id)?).await?;
    Ok((StatusCode::OK, Json(post)))
}

async fn update_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<String>,
    payload: std::result::Result<Json<PostPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let payload = payload.map(|Json(payload)| payload).map_err(Error::from);
    debug!("Received PUT body: {payload:?}");

    let updated_post = app_state
        .post_service
        .update_post(parse_id(&post_id)?, payload)
        .await?;
    Ok((StatusCode::OK, Json(updated_post)))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse> {
    app_state
        .post_service
        .delete_post(parse_id(&post_id)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Post deleted successfully".to_string(),
        }),
    ))
}
