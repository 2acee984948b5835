#![forbid(unsafe_code)]

//! Browser host for the skyclock page clock.
//!
//! On wasm32 this crate exports `initialize()` and the `PageClock` handle via
//! `wasm-bindgen`. The page calls `initialize()` once loaded; if the document
//! has no `time` element nothing happens, otherwise the element shows the
//! local time and is refreshed until the handle is stopped or freed.

use std::time::Duration;

use skyclock_proto::time_format::format_hour_minute;

pub use skyclock_proto::config::{DEFAULT_ELEMENT_ID, DEFAULT_REFRESH_INTERVAL};

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{PageClock, initialize, initialize_with};

/// Clock text for the hour and minute reported by the host's local clock.
pub fn clock_text(hours: u32, minutes: u32) -> Option<String> {
    format_hour_minute(hours, minutes)
}

/// Convert a refresh interval into the millisecond delay `setInterval` takes,
/// saturating at `i32::MAX` and never going below one millisecond.
pub fn interval_millis(interval: Duration) -> i32 {
    i32::try_from(interval.as_millis())
        .unwrap_or(i32::MAX)
        .max(1)
}
