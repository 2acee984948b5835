//! Port definitions shared between the clock hosts.
//!
//! The clock widget only talks to the outside world through these traits: a
//! locator that finds the element to write into, the element itself, and a
//! source of local wall-clock time. Native adapters live in `skyclock-core`;
//! the browser adapter lives in `skyclock-web`.

pub mod display;
pub mod time_source;
