#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use innkeeper_db::models::city::UpsertCity;
use innkeeper_db::models::hotel::{Hotel, UpsertHotel};
use innkeeper_db::repositories::{CityRepo, HotelRepo};
use sqlx::SqlitePool;
use tower::ServiceExt;

use innkeeper_api::config::ServerConfig;
use innkeeper_api::router::build_app_router;
use innkeeper_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Seed `ANT` "Antwerpen" with hotels `01` "Hotel 1" and `02` "Hotel 2",
/// plus an empty `BRU` "Brussel". Returns the two Antwerpen hotels.
pub async fn seed_antwerpen(pool: &SqlitePool) -> (Hotel, Hotel) {
    for (code, name) in [("ANT", "Antwerpen"), ("BRU", "Brussel")] {
        CityRepo::upsert(
            pool,
            &UpsertCity {
                code: code.into(),
                name: name.into(),
            },
        )
        .await
        .unwrap();
    }

    let hotel1 = HotelRepo::create(pool, &new_hotel("ANT", "01", "Hotel 1"))
        .await
        .unwrap();
    let hotel2 = HotelRepo::create(pool, &new_hotel("ANT", "02", "Hotel 2"))
        .await
        .unwrap();
    (hotel1, hotel2)
}

pub fn new_hotel(city_code: &str, local_code: &str, name: &str) -> UpsertHotel {
    UpsertHotel {
        city_code: city_code.into(),
        local_code: local_code.into(),
        name: name.into(),
    }
}
