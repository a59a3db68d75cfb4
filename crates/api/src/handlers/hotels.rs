//! Handlers for the hotel API.
//!
//! Cities are addressed by display name for listings and by code for
//! writes; hotels are addressed by `(city, local_code)` for writes and by
//! surrogate `id` for deletion.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use innkeeper_core::error::CoreError;
use innkeeper_core::inventory;
use innkeeper_core::types::DbId;
use innkeeper_db::models::hotel::{ManageHotel, UpsertHotel};
use innkeeper_db::repositories::{CityRepo, HotelRepo};

use crate::error::{AppError, AppResult, ManageHotelError};
use crate::response::{HotelsResponse, SuccessResponse};
use crate::state::AppState;

/// Message returned when the manage payload cannot be decoded.
const MALFORMED_PAYLOAD: &str =
    "Request body must be a JSON object with string fields name, local_code and city";

/// GET /api/hotels/{city_name}/
///
/// List every hotel of the city with the given display name, in insertion
/// order.
pub async fn list_hotels(
    State(state): State<AppState>,
    Path(city_name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let city = CityRepo::find_by_name(&state.pool, &city_name)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("City", &city_name)))?;

    let hotels = HotelRepo::list_by_city(&state.pool, &city.code).await?;

    tracing::debug!(city = %city.code, count = hotels.len(), "Listed hotels");

    Ok(Json(HotelsResponse { hotels }))
}

/// POST /api/hotels/
///
/// Create a hotel, or rename the hotel that already has the given
/// `(city, local_code)`. `city` is the city code.
pub async fn manage_hotel(
    State(state): State<AppState>,
    payload: Result<Json<ManageHotel>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected hotel payload");
        ManageHotelError::Validation(MALFORMED_PAYLOAD.into())
    })?;

    validate_manage_input(&input)?;

    let city = CityRepo::find_by_code(&state.pool, &input.city)
        .await
        .map_err(ManageHotelError::Store)?
        .ok_or(ManageHotelError::CityNotFound)?;

    let hotel = HotelRepo::upsert(&state.pool, &UpsertHotel::from(input))
        .await
        .map_err(ManageHotelError::Store)?;

    tracing::info!(
        hotel_id = hotel.id,
        city = %city.code,
        global_code = %hotel.global_code(),
        "Hotel saved",
    );

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/hotels/delete/{hotel_id}/
///
/// Delete a hotel by surrogate id. A non-numeric id is treated like an
/// unknown one.
pub async fn delete_hotel(
    State(state): State<AppState>,
    hotel_id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(hotel_id) = hotel_id.map_err(|rejection| {
        AppError::Core(CoreError::not_found("Hotel", rejection.body_text()))
    })?;

    let deleted = HotelRepo::delete(&state.pool, hotel_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Hotel", hotel_id)));
    }

    tracing::info!(hotel_id, "Hotel deleted");

    Ok(Json(SuccessResponse::ok()))
}

/// Fallback for hotel routes hit with an unsupported method.
pub async fn invalid_method() -> AppError {
    AppError::MethodNotAllowed
}

/// Check field shapes before touching the database.
fn validate_manage_input(input: &ManageHotel) -> Result<(), ManageHotelError> {
    inventory::validate_name(&input.name)
        .and_then(|()| inventory::validate_local_code(&input.local_code))
        .and_then(|()| inventory::validate_city_code(&input.city))
        .map_err(|err| match err {
            CoreError::Validation(msg) => ManageHotelError::Validation(msg),
            other => ManageHotelError::Validation(other.to_string()),
        })
}
