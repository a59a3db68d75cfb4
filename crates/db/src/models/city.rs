//! City entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `cities` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct City {
    pub code: String,
    pub name: String,
}

/// DTO for inserting or renaming a city, keyed by `code`.
#[derive(Debug, Clone)]
pub struct UpsertCity {
    pub code: String,
    pub name: String,
}
