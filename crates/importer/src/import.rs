//! The two import passes: cities first, then hotels.
//!
//! Rows are parsed and upserted one at a time without a surrounding
//! transaction, so a failing or malformed row leaves every earlier row of the
//! pass committed.

use innkeeper_core::csv::{self, CityRow, HotelRow};
use innkeeper_core::error::CoreError;
use innkeeper_core::inventory;
use innkeeper_db::models::city::UpsertCity;
use innkeeper_db::models::hotel::UpsertHotel;
use innkeeper_db::repositories::{CityRepo, HotelRepo};
use innkeeper_db::DbPool;

use crate::config::ImporterConfig;
use crate::error::ImportError;
use crate::fetch::CsvSource;

/// Number of rows upserted by each pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub cities: usize,
    pub hotels: usize,
}

/// Synchronizes the city and hotel tables from the remote feeds.
pub struct Importer {
    pool: DbPool,
    config: ImporterConfig,
    source: CsvSource,
}

impl Importer {
    pub fn new(pool: DbPool, config: ImporterConfig) -> Result<Self, ImportError> {
        let source = CsvSource::new(&config)?;
        Ok(Self {
            pool,
            config,
            source,
        })
    }

    /// Run the city pass and then the hotel pass.
    pub async fn run(&self) -> Result<ImportSummary, ImportError> {
        let cities = self.import_cities().await?;
        let hotels = self.import_hotels().await?;
        Ok(ImportSummary { cities, hotels })
    }

    /// Fetch the city feed and upsert every row keyed by code.
    pub async fn import_cities(&self) -> Result<usize, ImportError> {
        tracing::info!(url = %self.config.city_csv_url, "Importing cities");

        let body = self.source.fetch(&self.config.city_csv_url).await?;

        let mut count = 0;
        for row in csv::city_rows(&body) {
            let input = city_input(&row?)?;
            CityRepo::upsert(&self.pool, &input).await?;
            count += 1;
        }

        tracing::info!(count, "Done importing cities");
        Ok(count)
    }

    /// Fetch the hotel feed and upsert every row keyed by
    /// `(city_code, local_code)`. Cities must already exist.
    pub async fn import_hotels(&self) -> Result<usize, ImportError> {
        tracing::info!(url = %self.config.hotel_csv_url, "Importing hotels");

        let body = self.source.fetch(&self.config.hotel_csv_url).await?;

        let mut count = 0;
        for row in csv::hotel_rows(&body) {
            let row = row?;
            let input = hotel_input(&row)?;

            let city = CityRepo::find_by_code(&self.pool, &input.city_code)
                .await?
                .ok_or_else(|| ImportError::UnknownCity {
                    line: row.line,
                    code: input.city_code.clone(),
                })?;

            if !row.combined_code.starts_with(&city.code) {
                tracing::warn!(
                    line = row.line,
                    city = %city.code,
                    hotel_code = %row.combined_code,
                    "Hotel code does not start with its city code",
                );
            }

            HotelRepo::upsert(&self.pool, &input).await?;
            count += 1;
        }

        tracing::info!(count, "Done importing hotels");
        Ok(count)
    }
}

fn city_input(row: &CityRow) -> Result<UpsertCity, ImportError> {
    let invalid = |source: CoreError| ImportError::InvalidRow {
        line: row.line,
        source,
    };

    inventory::validate_city_code(&row.code).map_err(invalid)?;
    inventory::validate_name(&row.name).map_err(invalid)?;

    Ok(UpsertCity {
        code: row.code.clone(),
        name: row.name.clone(),
    })
}

fn hotel_input(row: &HotelRow) -> Result<UpsertHotel, ImportError> {
    let invalid = |source: CoreError| ImportError::InvalidRow {
        line: row.line,
        source,
    };

    inventory::validate_city_code(&row.city_code).map_err(invalid)?;
    let local_code = inventory::local_code_from_combined(&row.combined_code).map_err(invalid)?;
    inventory::validate_local_code(&local_code).map_err(invalid)?;
    inventory::validate_name(&row.name).map_err(invalid)?;

    Ok(UpsertHotel {
        city_code: row.city_code.clone(),
        local_code,
        name: row.name.clone(),
    })
}
