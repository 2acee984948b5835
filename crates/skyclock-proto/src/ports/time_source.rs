use chrono::NaiveTime;

/// Source of the viewer's local wall-clock time.
pub trait TimeSource: Send + Sync {
    /// Current local time of day.
    fn now(&self) -> NaiveTime;
}
