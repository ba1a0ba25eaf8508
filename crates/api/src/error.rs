use atoll_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `atoll_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found: {key}"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (23505, constraint `uq_*`) map to 409 -- handlers
///   normally catch duplicates with an explicit pre-check first, so this is
///   the race-window backstop.
/// - Foreign key violations (23503) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                )
            }
            Some("23503") => (
                StatusCode::CONFLICT,
                "CONFLICT",
                "Operation blocked by an existing reference".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn internal_errors_produce_sanitized_500() {
        let err = AppError::Core(CoreError::Internal(
            "Password hashing error: backend failure".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_of(response).await;
        assert_eq!(json["code"], "INTERNAL_ERROR");
        // The raw message must never leak to the client.
        assert_eq!(json["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn validation_errors_keep_their_message() {
        let err = AppError::Core(CoreError::Validation("Email already registered".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_of(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Email already registered");
    }
}
