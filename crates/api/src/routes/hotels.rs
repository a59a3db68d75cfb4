//! Route definitions for the hotel API, under `/api/hotels`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::hotels;
use crate::state::AppState;

/// Hotel routes, merged into the `/api` tree.
///
/// The write endpoint is the bare `/hotels/` path, trailing slash included.
///
/// ```text
/// POST   /hotels/                      -> manage_hotel
/// GET    /hotels/{city_name}/          -> list_hotels
/// DELETE /hotels/delete/{hotel_id}/    -> delete_hotel
/// ```
///
/// Every route answers any other method with a JSON 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/hotels/",
            post(hotels::manage_hotel).fallback(hotels::invalid_method),
        )
        .route(
            "/hotels/{city_name}/",
            get(hotels::list_hotels).fallback(hotels::invalid_method),
        )
        .route(
            "/hotels/delete/{hotel_id}/",
            delete(hotels::delete_hotel).fallback(hotels::invalid_method),
        )
}
