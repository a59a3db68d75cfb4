//! Repository for the `hotels` table.

use innkeeper_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::hotel::{Hotel, UpsertHotel};

const COLUMNS: &str = "id, local_code, name, city_code";

/// Provides CRUD operations for hotels.
pub struct HotelRepo;

impl HotelRepo {
    /// Insert a new hotel, returning the created row.
    ///
    /// Fails with a unique violation if the city already has a hotel with
    /// the same local code. Use [`HotelRepo::upsert`] to rename instead.
    pub async fn create(pool: &SqlitePool, input: &UpsertHotel) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels (city_code, local_code, name) VALUES (?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(&input.city_code)
            .bind(&input.local_code)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Insert a hotel, or overwrite the name of the hotel with the same
    /// `(city_code, local_code)`.
    ///
    /// This is a single statement, so concurrent upserts of the same key
    /// resolve as last-write-wins. `id`, `local_code` and `city_code` of an
    /// existing row never change.
    pub async fn upsert(pool: &SqlitePool, input: &UpsertHotel) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels (city_code, local_code, name) VALUES (?, ?, ?) \
             ON CONFLICT (city_code, local_code) DO UPDATE SET name = excluded.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(&input.city_code)
            .bind(&input.local_code)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a hotel by its surrogate ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE id = ?");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a hotel by its composite key.
    pub async fn find_by_key(
        pool: &SqlitePool,
        city_code: &str,
        local_code: &str,
    ) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE city_code = ? AND local_code = ?");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(city_code)
            .bind(local_code)
            .fetch_optional(pool)
            .await
    }

    /// List the hotels of a city in insertion order.
    pub async fn list_by_city(pool: &SqlitePool, city_code: &str) -> Result<Vec<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE city_code = ? ORDER BY id");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(city_code)
            .fetch_all(pool)
            .await
    }

    /// Permanently delete a hotel by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of hotels across all cities.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotels")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
