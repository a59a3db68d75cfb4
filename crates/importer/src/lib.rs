pub mod config;
pub mod error;
pub mod fetch;
pub mod import;

pub use config::ImporterConfig;
pub use error::ImportError;
pub use import::{ImportSummary, Importer};
