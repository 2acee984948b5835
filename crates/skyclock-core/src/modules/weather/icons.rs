use super::WeatherError;

/// Map a WMO weather code to an icon name.
///
/// Clear, mostly clear, partly cloudy and overcast skies have separate night
/// icons; every other condition uses the same icon day and night.
pub fn icon_for(code: u16, is_day: bool) -> Result<&'static str, WeatherError> {
    let icon = match (code, is_day) {
        (0, true) => "clear-day",
        (0, false) => "clear-night",
        (1, true) => "mostly-clear-day",
        (1, false) => "mostly-clear-night",
        (2, true) => "partly-cloudy-day",
        (2, false) => "partly-cloudy-night",
        (3, true) => "overcast-day",
        (3, false) => "overcast-night",
        (45 | 48, _) => "fog",
        (51 | 53 | 55, _) => "drizzle",
        (56 | 57, _) => "freezing-drizzle",
        (61 | 63 | 65, _) => "rain",
        (66 | 67, _) => "freezing-rain",
        (71 | 73 | 75, _) => "snow",
        (77, _) => "snow-grains",
        (80..=82, _) => "rain-showers",
        (85 | 86, _) => "snow-showers",
        (95, _) => "thunderstorm",
        (96 | 99, _) => "thunderstorm-hail",
        _ => return Err(WeatherError::UnknownWeatherCode(code)),
    };

    Ok(icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_codes_have_night_variants() {
        for code in 0..=3 {
            let day = icon_for(code, true).expect("day icon");
            let night = icon_for(code, false).expect("night icon");
            assert_ne!(day, night);
            assert!(night.ends_with("-night"));
        }
    }

    #[test]
    fn precipitation_ignores_daylight() {
        assert_eq!(icon_for(63, true).ok(), icon_for(63, false).ok());
        assert_eq!(icon_for(95, false).ok(), Some("thunderstorm"));
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert!(matches!(
            icon_for(42, true),
            Err(WeatherError::UnknownWeatherCode(42)),
        ));
    }
}
