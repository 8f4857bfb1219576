use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    NotFound(&'static str),
    BadRequest(String),
    Storage {
        context: &'static str,
        source: sqlx::Error,
    },
}

impl Error {
    pub fn storage(context: &'static str, source: sqlx::Error) -> Self {
        error!("{context}: {source:?}");
        Self::Storage { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Raw storage errors only reach the log.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) => msg,
            Self::BadRequest(msg) => msg.as_str(),
            Self::Storage { context, .. } => context,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage { context, source } => write!(f, "{context}: {source}"),
            other => f.write_str(other.message()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Self::storage("Database error", err)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Error parsing JSON: {}", rejection.body_text());
        Self::BadRequest("Cannot parse JSON".to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(_: validator::ValidationErrors) -> Self {
        Self::BadRequest("Title and content are required".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_message_hides_driver_text() {
        let err = Error::storage("Failed to fetch post", sqlx::Error::PoolClosed);

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to fetch post");
        assert!(err.to_string().contains("Failed to fetch post:"));
    }

    #[test]
    fn maps_taxonomy_to_status_codes() {
        assert_eq!(Error::NotFound("Post not found").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::BadRequest("Cannot parse JSON".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
