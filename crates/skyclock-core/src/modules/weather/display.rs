use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::Serialize;
use skyclock_proto::time_format::format_clock;

use super::{ForecastResponse, WeatherError, icon_for};

const HOUR_LABEL_FORMAT: &str = "%-I %p";
const DAY_LABEL_FORMAT: &str = "%-m/%d";

/// How many hourly and daily entries a [`WeatherDisplay`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastLimits {
    pub hourly_entries: usize,
    pub daily_entries: usize,
}

/// Forecast shaped for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherDisplay {
    pub display_name: String,
    pub current: CurrentForecast,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentForecast {
    pub time: String,
    pub temp: i32,
    pub temp_max: i32,
    pub temp_min: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyForecast {
    pub label: String,
    pub temperature: i32,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyForecast {
    pub label: String,
    pub temperature_min: i32,
    pub temperature_max: i32,
    pub icon: &'static str,
}

struct HourlyEntry {
    at: NaiveDateTime,
    temperature: f64,
    code: u16,
    is_day: bool,
}

struct DailyEntry {
    at: NaiveDateTime,
    temperature_max: f64,
    temperature_min: f64,
    code: u16,
}

impl WeatherDisplay {
    /// Shape a raw forecast into display entries in the location's local time.
    ///
    /// The current temperature comes from the hourly entry covering the
    /// current local hour and today's range from the daily entry for the
    /// current local date. Hourly entries start at the current hour; daily
    /// entries start today.
    pub fn from_forecast(
        forecast: &ForecastResponse,
        display_name: &str,
        limits: ForecastLimits,
    ) -> Result<Self, WeatherError> {
        let offset = forecast.utc_offset_seconds;
        let now = local_time(forecast.current.time, offset)?;
        let this_hour = now
            .with_minute(0)
            .and_then(|time| time.with_second(0))
            .ok_or(WeatherError::InvalidTimestamp(forecast.current.time))?;
        let today = now.date();

        let hourly = hourly_entries(forecast, offset)?;
        let daily = daily_entries(forecast, offset)?;

        let current_hour = hourly
            .iter()
            .find(|entry| entry.at == this_hour)
            .ok_or(WeatherError::MissingHourlyForecast(this_hour))?;
        let todays = daily
            .iter()
            .find(|entry| entry.at.date() == today)
            .ok_or(WeatherError::MissingDailyForecast(today))?;

        let hourly = hourly
            .iter()
            .filter(|entry| entry.at >= this_hour)
            .take(limits.hourly_entries)
            .map(|entry| {
                Ok(HourlyForecast {
                    label: entry.at.format(HOUR_LABEL_FORMAT).to_string(),
                    temperature: entry.temperature as i32,
                    icon: icon_for(entry.code, entry.is_day)?,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        let daily = daily
            .iter()
            .filter(|entry| entry.at.date() >= today)
            .take(limits.daily_entries)
            .map(|entry| {
                Ok(DailyForecast {
                    label: entry.at.format(DAY_LABEL_FORMAT).to_string(),
                    temperature_min: entry.temperature_min as i32,
                    temperature_max: entry.temperature_max as i32,
                    icon: icon_for(entry.code, true)?,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(Self {
            display_name: short_name(display_name),
            current: CurrentForecast {
                time: format_clock(now.time()),
                temp: current_hour.temperature as i32,
                temp_max: todays.temperature_max as i32,
                temp_min: todays.temperature_min as i32,
            },
            hourly,
            daily,
        })
    }
}

fn local_time(unix: i64, offset: i64) -> Result<NaiveDateTime, WeatherError> {
    unix.checked_add(offset)
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
        .map(|time| time.naive_utc())
        .ok_or(WeatherError::InvalidTimestamp(unix))
}

fn hourly_entries(
    forecast: &ForecastResponse,
    offset: i64,
) -> Result<Vec<HourlyEntry>, WeatherError> {
    let series = &forecast.hourly;

    series
        .time
        .iter()
        .zip(&series.temperature_2m)
        .zip(&series.weather_code)
        .zip(&series.is_day)
        .map(|(((time, temperature), code), is_day)| {
            Ok(HourlyEntry {
                at: local_time(*time, offset)?,
                temperature: *temperature,
                code: *code,
                is_day: *is_day != 0,
            })
        })
        .collect()
}

fn daily_entries(
    forecast: &ForecastResponse,
    offset: i64,
) -> Result<Vec<DailyEntry>, WeatherError> {
    let series = &forecast.daily;

    series
        .time
        .iter()
        .zip(&series.temperature_2m_max)
        .zip(&series.temperature_2m_min)
        .zip(&series.weather_code)
        .map(|(((time, max), min), code)| {
            Ok(DailyEntry {
                at: local_time(*time, offset)?,
                temperature_max: *max,
                temperature_min: *min,
                code: *code,
            })
        })
        .collect()
}

/// Geocoded names look like "Springfield, Sangamon County, Illinois"; keep
/// the first component.
fn short_name(display_name: &str) -> String {
    display_name
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}
