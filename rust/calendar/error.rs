use thiserror::Error;

/// Error type for `CalendarPoint` construction.
///
/// Arithmetic over constructed points is total; only raw component values can
/// be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    /// The (year, month, day) values do not form a real civil date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The (hour, minute, second) values do not form a valid time-of-day.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
}
