//! Axum handlers for the `/activities` routes.
//!
//! Successful mutations answer `{"message": …}`; failures answer
//! `{"detail": …}` with the status picked by [`ApiError`].

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error, info};

use crate::activities::ActivityMap;
use crate::error::DirectoryError;

use super::WebState;

// ── Request types ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct EmailQuery {
    email: String,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Everything a handler can answer with besides success.
#[derive(Debug)]
pub(super) enum ApiError {
    Directory(DirectoryError),
    /// The query string was missing `email` or could not be decoded.
    InvalidQuery(String),
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self::Directory(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Directory(err @ DirectoryError::NotFound) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Directory(
                err @ (DirectoryError::AlreadySignedUp | DirectoryError::NotSignedUp),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Directory(err @ DirectoryError::LockPoisoned) => {
                error!("directory unavailable: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::InvalidQuery(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /activities
pub(super) async fn list_activities(
    State(state): State<WebState>,
) -> Result<Json<ActivityMap>, ApiError> {
    Ok(Json(state.directory.list()?))
}

/// POST /activities/{activity_name}/signup?email=…
pub(super) async fn signup(
    State(state): State<WebState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    let message = state
        .directory
        .signup(&activity_name, &email)
        .inspect_err(|e| debug!(activity = %activity_name, %email, "signup rejected: {e}"))?;

    info!(activity = %activity_name, %email, "participant signed up");
    Ok(Json(json!({ "message": message })))
}

/// POST /activities/{activity_name}/unregister?email=…
pub(super) async fn unregister(
    State(state): State<WebState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(EmailQuery { email }) = query?;

    let message = state
        .directory
        .unregister(&activity_name, &email)
        .inspect_err(|e| debug!(activity = %activity_name, %email, "unregister rejected: {e}"))?;

    info!(activity = %activity_name, %email, "participant unregistered");
    Ok(Json(json!({ "message": message })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn directory_errors_map_to_statuses() {
        assert_eq!(status_of(DirectoryError::NotFound.into()), StatusCode::NOT_FOUND);
        assert_eq!(status_of(DirectoryError::AlreadySignedUp.into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DirectoryError::NotSignedUp.into()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(DirectoryError::LockPoisoned.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_query_is_unprocessable() {
        let err = ApiError::InvalidQuery("missing field `email`".into());
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
