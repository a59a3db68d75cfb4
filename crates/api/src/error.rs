use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use innkeeper_core::error::CoreError;
use serde_json::json;

/// Failure modes of the create-or-update hotel operation.
///
/// Every variant is reported as `400 Bad Request` with a stable message;
/// store errors are logged with full detail but never echoed to the client.
#[derive(Debug, thiserror::Error)]
pub enum ManageHotelError {
    /// The payload referenced a city code that does not exist.
    #[error("City not found")]
    CityNotFound,

    /// The payload was malformed or failed field validation.
    #[error("{0}")]
    Validation(String),

    /// The database rejected the write.
    #[error("Could not save hotel")]
    Store(#[source] sqlx::Error),
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `innkeeper_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failed create-or-update of a hotel.
    #[error(transparent)]
    ManageHotel(#[from] ManageHotelError),

    /// The route exists but does not accept the request method.
    #[error("Invalid request method")]
    MethodNotAllowed,

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Create-or-update hotel ---
            AppError::ManageHotel(err) => {
                let code = match err {
                    ManageHotelError::CityNotFound => "CITY_NOT_FOUND",
                    ManageHotelError::Validation(_) => "VALIDATION_ERROR",
                    ManageHotelError::Store(source) => {
                        tracing::error!(error = %source, "Hotel write failed");
                        "STORE_ERROR"
                    }
                };
                (StatusCode::BAD_REQUEST, code, err.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                self.to_string(),
            ),
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
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
/// - Unique constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => (
            StatusCode::CONFLICT,
            "CONFLICT",
            "Duplicate value violates a unique constraint".to_string(),
        ),
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
