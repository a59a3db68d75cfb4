use crate::error::ImportError;

/// Default timeout for a single feed download, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything the importer needs to reach the two feeds.
#[derive(Debug, Clone)]
pub struct ImporterConfig {
    /// URL of the `code;name` city feed.
    pub city_csv_url: String,
    /// URL of the `city_code;combined_code;name` hotel feed.
    pub hotel_csv_url: String,
    /// Basic-auth user sent with both requests.
    pub auth_username: String,
    /// Basic-auth password sent with both requests.
    pub auth_password: String,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ImporterConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Default    |
    /// |-----------------------|------------|
    /// | `CITY_CSV_URL`        | (required) |
    /// | `HOTEL_CSV_URL`       | (required) |
    /// | `AUTH_USERNAME`       | (required) |
    /// | `AUTH_PASSWORD`       | (required) |
    /// | `IMPORT_TIMEOUT_SECS` | `30`       |
    pub fn from_env() -> Result<Self, ImportError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ImportError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ImportError::MissingEnv(name))
        };

        let request_timeout_secs = match lookup("IMPORT_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|_| ImportError::InvalidEnv {
                name: "IMPORT_TIMEOUT_SECS",
                value,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            city_csv_url: required("CITY_CSV_URL")?,
            hotel_csv_url: required("HOTEL_CSV_URL")?,
            auth_username: required("AUTH_USERNAME")?,
            auth_password: required("AUTH_PASSWORD")?,
            request_timeout_secs,
        })
    }
}
