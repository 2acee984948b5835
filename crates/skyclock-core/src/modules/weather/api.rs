//! Wire structures for the geocoding and open-meteo responses.

use serde::Deserialize;

/// Geocoding match. Coordinates are kept as the strings the API returns and
/// forwarded verbatim to the forecast request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationData {
    pub display_name: String,
    pub lon: String,
    pub lat: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_seconds: i64,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentConditions {
    pub time: i64,
    pub temperature_2m: f64,
    pub weather_code: u16,
}

/// Hourly series; `is_day` is 1 for daylight hours and 0 at night.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<i64>,
    pub temperature_2m: Vec<f64>,
    pub weather_code: Vec<u16>,
    pub is_day: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailySeries {
    pub time: Vec<i64>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<u16>,
}
