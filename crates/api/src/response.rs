//! Response envelope types for API handlers.
//!
//! The hotel API answers with `{ "hotels": [...] }` for listings and
//! `{ "success": true }` for writes. Errors are rendered by
//! [`AppError`](crate::error::AppError).

use innkeeper_db::models::hotel::Hotel;
use serde::Serialize;

/// `{ "hotels": [...] }` envelope returned by the city listing.
#[derive(Debug, Serialize)]
pub struct HotelsResponse {
    pub hotels: Vec<Hotel>,
}

/// `{ "success": true }` acknowledgment for writes.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
