pub mod hotels;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hotels/                                         create or update (POST)
/// /hotels/{city_name}/                             list hotels of a city (GET)
/// /hotels/delete/{hotel_id}/                       delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(hotels::router())
}

/// Root-level routes (not under `/api`): the index page and `/health`.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health))
}
