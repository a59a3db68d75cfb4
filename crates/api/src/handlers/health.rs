//! Liveness probe that also reports how much inventory is loaded.

use axum::extract::State;
use axum::Json;
use innkeeper_db::repositories::{CityRepo, HotelRepo};
use innkeeper_db::DbPool;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// `cities` and `hotels` are `null` when the store could not be queried,
/// in which case `status` is `"degraded"`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub cities: Option<i64>,
    pub hotels: Option<i64>,
}

/// GET /health
///
/// Always answers 200; `status` carries the verdict.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let version = env!("CARGO_PKG_VERSION");

    match inventory_counts(&state.pool).await {
        Ok((cities, hotels)) => Json(HealthResponse {
            status: "ok",
            version,
            db_healthy: true,
            cities: Some(cities),
            hotels: Some(hotels),
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            Json(HealthResponse {
                status: "degraded",
                version,
                db_healthy: false,
                cities: None,
                hotels: None,
            })
        }
    }
}

async fn inventory_counts(pool: &DbPool) -> Result<(i64, i64), sqlx::Error> {
    let cities = CityRepo::count(pool).await?;
    let hotels = HotelRepo::count(pool).await?;
    Ok((cities, hotels))
}
