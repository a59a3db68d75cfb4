//! Mapping of [`AppError`] variants onto HTTP responses.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::body_json;
use innkeeper_api::error::{AppError, ManageHotelError};
use innkeeper_core::error::CoreError;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn test_not_found_hides_key() {
    let (status, json) = render(AppError::Core(CoreError::not_found("Hotel", 42))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Hotel not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_validation_error() {
    let (status, json) =
        render(AppError::Core(CoreError::Validation("bad code".into()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad code");
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_template_errors_are_sanitized() {
    let err: AppError = askama::Error::from(std::fmt::Error).into();
    let (status, json) = render(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn test_row_not_found_maps_to_404() {
    let (status, json) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_other_database_errors_map_to_500() {
    let (status, json) = render(AppError::Database(sqlx::Error::PoolTimedOut)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn test_manage_hotel_errors_are_bad_requests() {
    let (status, json) = render(ManageHotelError::CityNotFound.into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "City not found");
    assert_eq!(json["code"], "CITY_NOT_FOUND");

    let (status, json) =
        render(ManageHotelError::Validation("name must not be empty".into()).into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "name must not be empty");

    let (status, json) = render(ManageHotelError::Store(sqlx::Error::PoolClosed).into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Could not save hotel");
    assert_eq!(json["code"], "STORE_ERROR");
}

#[tokio::test]
async fn test_method_not_allowed() {
    let (status, json) = render(AppError::MethodNotAllowed).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], "Invalid request method");
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
}
