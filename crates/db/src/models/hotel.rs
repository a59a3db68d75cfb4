//! Hotel entity model and DTOs.

use innkeeper_core::inventory;
use innkeeper_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `hotels` table.
///
/// Serializes as `{id, local_code, name, city}` where `city` is the code of
/// the owning city.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Hotel {
    pub id: DbId,
    pub local_code: String,
    pub name: String,
    #[serde(rename = "city")]
    pub city_code: String,
}

impl Hotel {
    /// City code followed by the local code, as used by the CSV feed.
    pub fn global_code(&self) -> String {
        inventory::global_code(&self.city_code, &self.local_code)
    }
}

/// DTO for inserting or renaming a hotel, keyed by `(city_code, local_code)`.
#[derive(Debug, Clone)]
pub struct UpsertHotel {
    pub city_code: String,
    pub local_code: String,
    pub name: String,
}

/// Request payload for `POST /api/hotels/`.
///
/// `city` holds the city code (the `cities` primary key), not its name.
#[derive(Debug, Clone, Deserialize)]
pub struct ManageHotel {
    pub name: String,
    pub local_code: String,
    pub city: String,
}

impl From<ManageHotel> for UpsertHotel {
    fn from(input: ManageHotel) -> Self {
        Self {
            city_code: input.city,
            local_code: input.local_code,
            name: input.name,
        }
    }
}
