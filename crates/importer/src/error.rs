use innkeeper_core::csv::CsvError;
use innkeeper_core::error::CoreError;

/// Error type for a failed import run.
///
/// Any variant aborts the pass that raised it; rows upserted before the
/// failure stay committed.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// A required environment variable is not set.
    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The feed returned a non-2xx status code.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The feed body is not well-formed.
    #[error("Malformed feed: {0}")]
    Csv(#[from] CsvError),

    /// A row carries a code or name that fails validation.
    #[error("line {line}: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: CoreError,
    },

    /// A hotel row references a city that has not been imported.
    #[error("line {line}: unknown city code '{code}'")]
    UnknownCity { line: usize, code: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
