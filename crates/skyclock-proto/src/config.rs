use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

use serde::Deserialize;
use serde_with::{DurationMilliSeconds, serde_as};

mod serde_helpers;
mod validation;

pub use validation::ConfigValidationError;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/skyclock/config.toml";

/// Identifier of the page element the clock writes into.
pub const DEFAULT_ELEMENT_ID: &str = "time";

/// How often the clock text is refreshed.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(5_000);

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    #[serde(default = "default_element_id")]
    pub element_id: String,
    #[serde(
        rename = "refresh_interval_ms",
        deserialize_with = "serde_helpers::positive_millis",
        default = "default_refresh_interval"
    )]
    pub refresh_interval: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            element_id: default_element_id(),
            refresh_interval: default_refresh_interval(),
        }
    }
}

fn default_element_id() -> String {
    DEFAULT_ELEMENT_ID.to_string()
}

fn default_refresh_interval() -> Duration {
    DEFAULT_REFRESH_INTERVAL
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000)
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

#[derive(Deserialize, Default, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Value expected by the forecast API's `temperature_unit` parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        }
    }
}

#[serde_as]
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WeatherConfig {
    #[serde(default)]
    pub geocoding_api_key: Option<String>,
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
    #[serde(default = "default_past_days")]
    pub past_days: u8,
    #[serde(default = "default_hourly_entries")]
    pub hourly_entries: usize,
    #[serde(default = "default_daily_entries")]
    pub daily_entries: usize,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "request_timeout_ms", default = "default_request_timeout")]
    pub request_timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_api_key: None,
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            temperature_unit: TemperatureUnit::default(),
            forecast_days: default_forecast_days(),
            past_days: default_past_days(),
            hourly_entries: default_hourly_entries(),
            daily_entries: default_daily_entries(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_geocoding_url() -> String {
    "https://geocode.maps.co/search".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_forecast_days() -> u8 {
    5
}

fn default_past_days() -> u8 {
    1
}

fn default_hourly_entries() -> usize {
    24
}

fn default_daily_entries() -> usize {
    5
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            clock: ClockConfig::default(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}
