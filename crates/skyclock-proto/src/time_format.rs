//! Clock text formatting shared by the native and browser widgets.

use chrono::NaiveTime;

/// chrono pattern for a 12-hour clock: unpadded hour, padded minute, AM/PM.
pub const CLOCK_FORMAT: &str = "%-I:%M %p";

/// Format a wall-clock time as `H:MM AM` / `H:MM PM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use skyclock_proto::time_format::format_clock;
///
/// let time = NaiveTime::from_hms_opt(15, 7, 42).expect("valid time");
/// assert_eq!(format_clock(time), "3:07 PM");
/// ```
pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Format an hour/minute pair as reported by a host clock.
///
/// Returns `None` when the pair is not a valid time of day.
pub fn format_hour_minute(hour: u32, minute: u32) -> Option<String> {
    NaiveTime::from_hms_opt(hour, minute, 0).map(format_clock)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).expect("valid time")
    }

    #[test]
    fn afternoon_drops_leading_zero() {
        assert_eq!(format_clock(at(15, 7, 42)), "3:07 PM");
    }

    #[test]
    fn midnight_hour_is_twelve_am() {
        assert_eq!(format_clock(at(0, 5, 0)), "12:05 AM");
    }

    #[test]
    fn noon_is_twelve_pm() {
        assert_eq!(format_clock(at(12, 0, 0)), "12:00 PM");
    }

    #[test]
    fn every_minute_of_the_day_matches_the_clock_shape() {
        for hour in 0..24 {
            for minute in 0..60 {
                let text = format_clock(at(hour, minute, 0));
                let (clock, marker) = text.split_once(' ').expect("marker separator");
                let (h, m) = clock.split_once(':').expect("hour separator");

                let h: u32 = h.parse().expect("numeric hour");
                assert!((1..=12).contains(&h), "hour out of range in {text}");
                assert!(!clock.starts_with('0'), "leading zero in {text}");
                assert_eq!(m.len(), 2, "minute not padded in {text}");
                assert_eq!(m.parse::<u32>().expect("numeric minute"), minute);

                let expected = if hour < 12 { "AM" } else { "PM" };
                assert_eq!(marker, expected);
            }
        }
    }

    #[test]
    fn seconds_do_not_change_the_text() {
        assert_eq!(format_clock(at(9, 30, 0)), format_clock(at(9, 30, 59)));
    }

    #[test]
    fn hour_minute_pair_rejects_out_of_range_values() {
        assert_eq!(format_hour_minute(23, 59).as_deref(), Some("11:59 PM"));
        assert_eq!(format_hour_minute(24, 0), None);
        assert_eq!(format_hour_minute(10, 60), None);
    }
}
