use chrono::prelude::*;
use chrono::Days;

use crate::calendar::CalendarPoint;

impl CalendarPoint {
    /// The calendar day after the point, at midnight in the point's own offset.
    ///
    /// The step is one civil day, not a 24 hour duration, so the date
    /// component always advances by exactly one day.
    pub fn next_day(&self) -> Self {
        self.shift_days(1)
    }

    /// The calendar day before the point, at midnight in the point's own offset.
    pub fn previous_day(&self) -> Self {
        self.shift_days(-1)
    }

    fn shift_days(&self, days: i32) -> Self {
        let date = if days < 0 {
            self.datetime.date_naive() - Days::new(u64::try_from(-days).unwrap())
        } else {
            self.datetime.date_naive() + Days::new(u64::try_from(days).unwrap())
        };
        Self::from_date_at_offset(date, self.offset())
    }

    /// Clear time to midnight and advance the month by one.
    ///
    /// If the source day-of-month does not exist in the target month the day
    /// clamps to the last valid day, e.g. 31st January steps to 28th (or
    /// 29th) February.
    pub fn next_month(&self) -> Self {
        self.shift_month(1)
    }

    /// Clear time to midnight and step the month back by one, with the same
    /// day clamp as [`CalendarPoint::next_month`].
    pub fn previous_month(&self) -> Self {
        self.shift_month(-1)
    }

    fn shift_month(&self, step: i32) -> Self {
        let mut year = self.year();
        let mut month = i32::try_from(self.month()).unwrap() + step;
        if month == 0 {
            year -= 1;
            month = 12;
        } else if month == 13 {
            year += 1;
            month = 1;
        }
        let date = clamped_ymd(year, month.try_into().unwrap(), self.day());
        Self::from_date_at_offset(date, self.offset())
    }

    /// Apply [`CalendarPoint::next_month`] `x` times.
    ///
    /// Zero or negative `x` is no movement. The day clamp re-applies to each
    /// intermediate result rather than to the original day-of-month, so the
    /// day can drift downwards: 31st January stepped twice lands on 28th
    /// March in a non-leap year.
    pub fn next_x_month(&self, x: i32) -> Self {
        let mut new_point = *self;
        let mut counter: i32 = 0;
        while counter < x {
            new_point = new_point.next_month();
            counter += 1;
        }
        new_point
    }

    /// Apply [`CalendarPoint::previous_month`] `x` times.
    ///
    /// Zero or negative `x` is no movement; the day clamp accumulates as in
    /// [`CalendarPoint::next_x_month`].
    pub fn previous_x_month(&self, x: i32) -> Self {
        let mut new_point = *self;
        let mut counter: i32 = 0;
        while counter < x {
            new_point = new_point.previous_month();
            counter += 1;
        }
        new_point
    }

    /// The next day that is not a weekend, at midnight.
    ///
    /// Terminates in at most 3 single-day steps.
    pub fn next_weekday(&self) -> Self {
        let mut new_point = self.next_day();
        while new_point.is_weekend() {
            new_point = new_point.next_day();
        }
        new_point
    }

    /// The previous day that is not a weekend, at midnight.
    pub fn previous_weekday(&self) -> Self {
        let mut new_point = self.previous_day();
        while new_point.is_weekend() {
            new_point = new_point.previous_day();
        }
        new_point
    }

    /// Apply [`CalendarPoint::next_weekday`] `x` times.
    ///
    /// Zero or negative `x` returns the point unchanged, even when it falls
    /// on a weekend.
    pub fn next_x_weekday(&self, x: i32) -> Self {
        let mut new_point = *self;
        let mut counter: i32 = 0;
        while counter < x {
            new_point = new_point.next_weekday();
            counter += 1;
        }
        new_point
    }

    /// Apply [`CalendarPoint::previous_weekday`] `x` times.
    ///
    /// Zero or negative `x` returns the point unchanged.
    pub fn previous_x_weekday(&self, x: i32) -> Self {
        let mut new_point = *self;
        let mut counter: i32 = 0;
        while counter < x {
            new_point = new_point.previous_weekday();
            counter += 1;
        }
        new_point
    }
}

/// Return the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let month_obj = Month::try_from(u8::try_from(month).unwrap()).unwrap();
    month_obj.num_days(year).unwrap().into()
}

/// Test whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Return the date for a `day` in a given month, clamped to the last valid day.
fn clamped_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let d = NaiveDate::from_ymd_opt(year, month, day);
    match d {
        Some(date) => date,
        None => {
            if day > 28 {
                clamped_ymd(year, month, day - 1)
            } else {
                panic!("Unexpected error in `clamped_ymd`")
            }
        }
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::cdt;

    #[test]
    fn test_next_day() {
        assert_eq!(cdt(2023, 10, 14), cdt(2023, 10, 13).next_day());
        assert_eq!(cdt(2023, 11, 1), cdt(2023, 10, 31).next_day());
        assert_eq!(cdt(2024, 1, 1), cdt(2023, 12, 31).next_day());
        assert_eq!(cdt(2024, 2, 29), cdt(2024, 2, 28).next_day());
        assert_eq!(cdt(2023, 3, 1), cdt(2023, 2, 28).next_day());
    }

    #[test]
    fn test_previous_day() {
        assert_eq!(cdt(2023, 10, 13), cdt(2023, 10, 14).previous_day());
        assert_eq!(cdt(2023, 10, 31), cdt(2023, 11, 1).previous_day());
        assert_eq!(cdt(2023, 12, 31), cdt(2024, 1, 1).previous_day());
        assert_eq!(cdt(2024, 2, 29), cdt(2024, 3, 1).previous_day());
    }

    #[test]
    fn test_next_day_resets_time() {
        let point = CalendarPoint::try_new_with_time(
            2023,
            10,
            13,
            23,
            59,
            59,
            FixedOffset::east_opt(0).unwrap(),
        )
        .unwrap();
        let result = point.next_day();
        assert_eq!(cdt(2023, 10, 14), result);
        assert_eq!(NaiveTime::from_hms_opt(0, 0, 0).unwrap(), result.time());
    }

    #[test]
    fn test_day_round_trip() {
        let options: Vec<CalendarPoint> = vec![
            cdt(2023, 10, 13),
            cdt(2023, 1, 1),
            cdt(2023, 12, 31),
            cdt(2024, 2, 29),
            cdt(2023, 3, 1),
        ];
        for option in options {
            assert_eq!(option, option.previous_day().next_day());
            assert_eq!(option, option.next_day().previous_day());
        }

        // both steps reset to midnight, so a timed point round-trips to its
        // own midnight exactly
        let timed = CalendarPoint::try_new_with_time(
            2023,
            10,
            13,
            17,
            20,
            0,
            FixedOffset::east_opt(3600).unwrap(),
        )
        .unwrap();
        assert_eq!(timed.at_midnight(), timed.previous_day().next_day());
    }

    #[test]
    fn test_next_month_clamps_day() {
        let options: Vec<(CalendarPoint, CalendarPoint)> = vec![
            (cdt(2023, 1, 31), cdt(2023, 2, 28)),
            (cdt(2024, 1, 31), cdt(2024, 2, 29)), // leap year
            (cdt(2023, 3, 31), cdt(2023, 4, 30)),
            (cdt(2023, 10, 13), cdt(2023, 11, 13)),
            (cdt(2023, 12, 31), cdt(2024, 1, 31)), // year boundary, no clamp
        ];
        for option in options {
            assert_eq!(option.1, option.0.next_month());
        }
    }

    #[test]
    fn test_previous_month_clamps_day() {
        let options: Vec<(CalendarPoint, CalendarPoint)> = vec![
            (cdt(2023, 3, 31), cdt(2023, 2, 28)),
            (cdt(2024, 3, 31), cdt(2024, 2, 29)), // leap year
            (cdt(2023, 7, 31), cdt(2023, 6, 30)),
            (cdt(2023, 10, 13), cdt(2023, 9, 13)),
            (cdt(2024, 1, 31), cdt(2023, 12, 31)), // year boundary, no clamp
        ];
        for option in options {
            assert_eq!(option.1, option.0.previous_month());
        }
    }

    #[test]
    fn test_next_month_resets_time() {
        let point = CalendarPoint::try_new_with_time(
            2023,
            10,
            13,
            9,
            30,
            0,
            FixedOffset::east_opt(0).unwrap(),
        )
        .unwrap();
        assert_eq!(cdt(2023, 11, 13), point.next_month());
    }

    #[test]
    fn test_next_x_month_accumulates_clamp() {
        // the clamp applies per step: 31 Jan -> 28 Feb -> 28 Mar
        assert_eq!(cdt(2023, 3, 28), cdt(2023, 1, 31).next_x_month(2));
        assert_eq!(cdt(2024, 3, 29), cdt(2024, 1, 31).next_x_month(2));
        // and symmetrically backwards: 31 Mar -> 28 Feb -> 28 Jan
        assert_eq!(cdt(2023, 1, 28), cdt(2023, 3, 31).previous_x_month(2));
    }

    #[test]
    fn test_x_month_zero_and_negative_are_no_movement() {
        let point = CalendarPoint::try_new_with_time(
            2023,
            10,
            13,
            9,
            30,
            0,
            FixedOffset::east_opt(0).unwrap(),
        )
        .unwrap();
        assert_eq!(point, point.next_x_month(0));
        assert_eq!(point, point.next_x_month(-3));
        assert_eq!(point, point.previous_x_month(0));
        assert_eq!(point, point.previous_x_month(-3));
    }

    #[test]
    fn test_next_x_month_spans_years() {
        assert_eq!(cdt(2024, 4, 15), cdt(2023, 10, 15).next_x_month(6));
        assert_eq!(cdt(2022, 10, 15), cdt(2023, 10, 15).previous_x_month(12));
    }

    #[test]
    fn test_next_weekday() {
        assert_eq!(cdt(2023, 10, 16), cdt(2023, 10, 13).next_weekday()); // Fri -> Mon
        assert_eq!(cdt(2023, 10, 16), cdt(2023, 10, 14).next_weekday()); // Sat -> Mon
        assert_eq!(cdt(2023, 10, 16), cdt(2023, 10, 15).next_weekday()); // Sun -> Mon
        assert_eq!(cdt(2023, 10, 17), cdt(2023, 10, 16).next_weekday()); // Mon -> Tue
    }

    #[test]
    fn test_previous_weekday() {
        assert_eq!(cdt(2023, 10, 13), cdt(2023, 10, 16).previous_weekday()); // Mon -> Fri
        assert_eq!(cdt(2023, 10, 13), cdt(2023, 10, 15).previous_weekday()); // Sun -> Fri
        assert_eq!(cdt(2023, 10, 13), cdt(2023, 10, 14).previous_weekday()); // Sat -> Fri
        assert_eq!(cdt(2023, 10, 12), cdt(2023, 10, 13).previous_weekday()); // Fri -> Thu
    }

    #[test]
    fn test_next_x_weekday() {
        // 5 business days from a Monday is the following Monday
        assert_eq!(cdt(2023, 10, 23), cdt(2023, 10, 16).next_x_weekday(5));
        assert_eq!(cdt(2023, 10, 16), cdt(2023, 10, 23).previous_x_weekday(5));
        assert_eq!(cdt(2023, 10, 17), cdt(2023, 10, 13).next_x_weekday(2));
    }

    #[test]
    fn test_next_x_weekday_never_lands_on_weekend() {
        let start = cdt(2023, 10, 14); // Saturday
        for x in 1..15 {
            assert!(start.next_x_weekday(x).is_weekday());
            assert!(start.previous_x_weekday(x).is_weekday());
        }
    }

    #[test]
    fn test_x_weekday_zero_is_identity() {
        // no weekend snapping and no time reset on a zero count
        let saturday = CalendarPoint::try_new_with_time(
            2023,
            10,
            14,
            18,
            45,
            0,
            FixedOffset::east_opt(3600).unwrap(),
        )
        .unwrap();
        assert_eq!(saturday, saturday.next_x_weekday(0));
        assert_eq!(saturday, saturday.previous_x_weekday(0));
        assert_eq!(saturday, saturday.next_x_weekday(-1));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(31, days_in_month(2023, 10));
        assert_eq!(30, days_in_month(2023, 11));
        assert_eq!(28, days_in_month(2023, 2));
        assert_eq!(29, days_in_month(2024, 2));
    }

    #[test]
    fn test_is_leap_year() {
        assert_eq!(true, is_leap_year(2024));
        assert_eq!(false, is_leap_year(2023));
        assert_eq!(true, is_leap_year(2000));
        assert_eq!(false, is_leap_year(1900));
    }

    #[test]
    fn test_clamped_ymd() {
        assert_eq!(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap(), clamped_ymd(2023, 2, 31));
        assert_eq!(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), clamped_ymd(2024, 2, 31));
        assert_eq!(NaiveDate::from_ymd_opt(2023, 4, 30).unwrap(), clamped_ymd(2023, 4, 31));
        assert_eq!(NaiveDate::from_ymd_opt(2023, 4, 15).unwrap(), clamped_ymd(2023, 4, 15));
    }

    #[test]
    fn test_navigation_preserves_offset() {
        let offset = FixedOffset::west_opt(12 * 3600).unwrap();
        let point = CalendarPoint::try_new(2023, 10, 13, offset).unwrap();
        assert_eq!(offset, point.next_day().offset());
        assert_eq!(offset, point.next_month().offset());
        assert_eq!(offset, point.next_weekday().offset());
    }
}
