//! Domain types and pure logic for the city/hotel inventory.
//!
//! Nothing in this crate touches the database, the network or the
//! filesystem; the `db`, `api` and `importer` crates build on it.

pub mod csv;
pub mod error;
pub mod inventory;
pub mod types;
