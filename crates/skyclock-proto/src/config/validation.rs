use super::Config;

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    /// The clock element identifier is blank.
    #[error("clock element id must not be empty")]
    EmptyElementId,

    /// The forecast request would cover no days.
    #[error("weather forecast_days must be at least 1")]
    ZeroForecastDays,

    /// No hourly entries would be shown.
    #[error("weather hourly_entries must be at least 1")]
    ZeroHourlyEntries,

    /// More daily entries were requested than the forecast returns.
    #[error("weather daily_entries ({requested}) exceeds forecast_days ({available})")]
    DailyEntriesExceedForecast { requested: usize, available: usize },
}

impl Config {
    /// Validates the configuration, ensuring clock and weather settings are
    /// usable together.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] describing the first inconsistency
    /// found.
    ///
    /// # Examples
    ///
    /// ```
    /// use skyclock_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.clock.element_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyElementId);
        }

        let weather = &self.weather;

        if weather.forecast_days == 0 {
            return Err(ConfigValidationError::ZeroForecastDays);
        }

        if weather.hourly_entries == 0 {
            return Err(ConfigValidationError::ZeroHourlyEntries);
        }

        let available = usize::from(weather.forecast_days);
        if weather.daily_entries > available {
            return Err(ConfigValidationError::DailyEntriesExceedForecast {
                requested: weather.daily_entries,
                available,
            });
        }

        Ok(())
    }
}
