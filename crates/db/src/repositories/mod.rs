//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod city_repo;
pub mod hotel_repo;

pub use city_repo::CityRepo;
pub use hotel_repo::HotelRepo;
