use chrono::{NaiveDate, NaiveDateTime};

/// Failures while resolving a location or shaping its forecast.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("geocoding API key is not configured")]
    MissingApiKey,
    #[error("no location found for '{0}'")]
    LocationNotFound(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} API returned status {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),
    #[error("forecast has no daily entry for {0}")]
    MissingDailyForecast(NaiveDate),
    #[error("forecast has no hourly entry for {0}")]
    MissingHourlyForecast(NaiveDateTime),
    #[error("unknown weather code {0}")]
    UnknownWeatherCode(u16),
}

impl WeatherError {
    /// Whether the failure originated in an upstream API.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Request { .. } | Self::Status { .. })
    }
}
