mod api;
mod display;
mod error;
mod icons;

use std::future::Future;

use log::{debug, error, info};
use serde::de::DeserializeOwned;
use skyclock_proto::config::WeatherConfig;

pub use api::{CurrentConditions, DailySeries, ForecastResponse, HourlySeries, LocationData};
pub use display::{CurrentForecast, DailyForecast, ForecastLimits, HourlyForecast, WeatherDisplay};
pub use error::WeatherError;
pub use icons::icon_for;

/// Resolves a postal code into a rendered forecast.
pub trait WeatherLookup: Send + Sync + 'static {
    fn lookup(
        &self,
        zipcode: &str,
    ) -> impl Future<Output = Result<WeatherDisplay, WeatherError>> + Send;
}

/// Weather lookups backed by the geocoding and open-meteo HTTP APIs.
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherService {
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(WeatherError::Client)?;

        Ok(Self { client, config })
    }

    /// Resolve `zipcode` to the first matching location.
    pub async fn geocode(&self, zipcode: &str) -> Result<LocationData, WeatherError> {
        let api_key = self
            .config
            .geocoding_api_key
            .as_deref()
            .ok_or(WeatherError::MissingApiKey)?;

        let locations: Vec<LocationData> = self
            .get_json(
                "geocoding",
                &self.config.geocoding_url,
                &[("q", zipcode.to_owned()), ("api_key", api_key.to_owned())],
            )
            .await?;

        locations
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(zipcode.to_owned()))
    }

    /// Fetch the forecast for `location` in the location's own time zone.
    pub async fn forecast(&self, location: &LocationData) -> Result<ForecastResponse, WeatherError> {
        let config = &self.config;
        let query = [
            ("latitude", location.lat.clone()),
            ("longitude", location.lon.clone()),
            ("hourly", String::from("temperature_2m,weather_code,is_day")),
            ("current", String::from("temperature_2m,weather_code")),
            ("daily", String::from("temperature_2m_max,temperature_2m_min,weather_code")),
            ("temperature_unit", config.temperature_unit.query_value().to_owned()),
            ("forecast_days", config.forecast_days.to_string()),
            ("past_days", config.past_days.to_string()),
            ("timezone", String::from("auto")),
            ("timeformat", String::from("unixtime")),
        ];

        self.get_json("forecast", &config.forecast_url, &query).await
    }

    fn limits(&self) -> ForecastLimits {
        ForecastLimits {
            hourly_entries: self.config.hourly_entries,
            daily_entries: self.config.daily_entries,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        debug!("Requesting {service} data from {url}");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| {
                error!("Network error contacting {service} API: {source}");
                WeatherError::Request { service, source }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("{service} API returned {status}");
            return Err(WeatherError::Status { service, status });
        }

        response.json::<T>().await.map_err(|source| {
            error!("Invalid {service} data format: {source}");
            WeatherError::Request { service, source }
        })
    }
}

impl WeatherLookup for WeatherService {
    async fn lookup(&self, zipcode: &str) -> Result<WeatherDisplay, WeatherError> {
        let location = self.geocode(zipcode).await?;
        info!("Resolved '{zipcode}' to {}", location.display_name);

        let forecast = self.forecast(&location).await?;
        WeatherDisplay::from_forecast(&forecast, &location.display_name, self.limits())
    }
}
