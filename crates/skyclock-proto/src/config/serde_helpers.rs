use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Deserialize a millisecond count into a [`Duration`], rejecting zero.
pub(super) fn positive_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = u64::deserialize(deserializer)?;

    if millis == 0 {
        return Err(serde::de::Error::custom(
            "Refresh interval must be greater than 0 milliseconds",
        ));
    }

    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use serde::de::value::{Error as DeError, U64Deserializer};

    use super::*;

    #[test]
    fn positive_millis_converts_to_duration() {
        let duration =
            positive_millis(U64Deserializer::<DeError>::new(250)).expect("positive interval");
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn positive_millis_rejects_zero() {
        assert!(positive_millis(U64Deserializer::<DeError>::new(0)).is_err());
    }
}
