//! Repository for the `cities` table.

use sqlx::SqlitePool;

use crate::models::city::{City, UpsertCity};

const COLUMNS: &str = "code, name";

/// Provides lookup and upsert operations for cities.
///
/// There is intentionally no delete: cities are only ever written by the
/// importer.
pub struct CityRepo;

impl CityRepo {
    /// Insert a city, or overwrite the name of the city with the same code.
    pub async fn upsert(pool: &SqlitePool, input: &UpsertCity) -> Result<City, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities (code, name) VALUES (?, ?) \
             ON CONFLICT (code) DO UPDATE SET name = excluded.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a city by its code.
    pub async fn find_by_code(pool: &SqlitePool, code: &str) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE code = ?");
        sqlx::query_as::<_, City>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Find a city by exact display name.
    ///
    /// Names are not unique; if several cities share a name the one with the
    /// lowest code wins.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE name = ? ORDER BY code LIMIT 1");
        sqlx::query_as::<_, City>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all cities ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities ORDER BY name, code");
        sqlx::query_as::<_, City>(&query).fetch_all(pool).await
    }

    /// Total number of cities.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cities")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
