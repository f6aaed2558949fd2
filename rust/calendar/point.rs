use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarError;

/// Create a `CalendarPoint` at UTC midnight.
///
/// Panics if date values are invalid.
pub fn cdt(year: i32, month: u32, day: u32) -> CalendarPoint {
    CalendarPoint::try_new(year, month, day, FixedOffset::east_opt(0).unwrap())
        .expect("`year`, `month` `day` are invalid.")
}

/// A civil date with time-of-day, pinned to an explicit UTC-offset.
///
/// A point is formed of 3 components:
///
/// - a civil date: a real proleptic-Gregorian (year, month, day) triple,
/// - a time-of-day, which navigation methods reset to midnight,
/// - a fixed UTC-offset, carried per value rather than read from any ambient
///   process-wide mode.
///
/// Ordering between points is full timestamp ordering of the instants they
/// denote. Civil-day comparisons read each point's date in its own offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarPoint {
    pub(crate) datetime: DateTime<FixedOffset>,
}

impl CalendarPoint {
    /// Create a point at midnight in the given offset.
    ///
    /// `year`, `month` and `day` must denote a real civil date.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        offset: FixedOffset,
    ) -> Result<Self, CalendarError> {
        Self::try_new_with_time(year, month, day, 0, 0, 0, offset)
    }

    /// Create a point with an explicit time-of-day in the given offset.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new_with_time(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        offset: FixedOffset,
    ) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(
            CalendarError::InvalidTime {
                hour,
                minute,
                second,
            },
        )?;
        Ok(CalendarPoint {
            datetime: NaiveDateTime::new(date, time)
                .and_local_timezone(offset)
                .unwrap(),
        })
    }

    // Fixed offsets map every local datetime to exactly one instant, so the
    // LocalResult is always single.
    pub(crate) fn from_date_at_offset(date: NaiveDate, offset: FixedOffset) -> Self {
        CalendarPoint {
            datetime: date
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_local_timezone(offset)
                .unwrap(),
        }
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.datetime.weekday()
    }

    /// ISO weekday number, Monday=1 through Sunday=7.
    pub fn iso_weekday(&self) -> u32 {
        self.datetime.weekday().number_from_monday()
    }

    pub fn time(&self) -> NaiveTime {
        self.datetime.time()
    }

    pub fn offset(&self) -> FixedOffset {
        *self.datetime.offset()
    }

    /// The underlying chrono value.
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.datetime
    }

    /// The same civil date at 00:00:00, in the point's own offset.
    pub fn at_midnight(&self) -> Self {
        Self::from_date_at_offset(self.datetime.date_naive(), self.offset())
    }

    /// The full English month name of the point's month.
    ///
    /// Localised naming is a caller concern; this delegates to the date
    /// library's own name table.
    pub fn month_name(&self) -> &'static str {
        Month::try_from(u8::try_from(self.month()).unwrap())
            .unwrap()
            .name()
    }
}

impl From<DateTime<FixedOffset>> for CalendarPoint {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        CalendarPoint { datetime }
    }
}
