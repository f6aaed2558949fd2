use chrono::prelude::*;

use crate::calendar::{days_in_month, CalendarPoint};

impl CalendarPoint {
    /// Return every day of the point's (month, year), each at midnight, in
    /// ascending order.
    ///
    /// The result depends only on the point's month, year and offset; its day
    /// and time-of-day are irrelevant.
    pub fn days_of_month(&self) -> Vec<CalendarPoint> {
        let first = Self::from_date_at_offset(
            NaiveDate::from_ymd_opt(self.year(), self.month(), 1).unwrap(),
            self.offset(),
        );
        let mut vec = Vec::new();
        let mut sample_point = first;
        while sample_point.month() == self.month() {
            vec.push(sample_point);
            sample_point = sample_point.next_day();
        }
        vec
    }

    /// Return the days of the point's (month, year) that are not weekends,
    /// order preserved.
    pub fn weekdays_of_month(&self) -> Vec<CalendarPoint> {
        self.days_of_month()
            .into_iter()
            .filter(|point| point.is_weekday())
            .collect()
    }

    /// Print a representation of the month of the point, marking weekends.
    pub fn print_month(&self) -> String {
        let mut output = format!("{:>15} {}\n", self.month_name(), self.year());
        output += "Mo Tu We Th Fr Sa Su\n";

        let weekday = NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
            .unwrap()
            .weekday()
            .num_days_from_monday();
        let idx_start = weekday as usize;

        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for (i, point) in self.days_of_month().iter().enumerate() {
            let s: String = {
                if point.is_weekend() {
                    " .".to_string()
                } else {
                    format!("{:>2}", i + 1)
                }
            };
            arr[i + idx_start] = s;
        }

        let rows = (idx_start + days_in_month(self.year(), self.month()) as usize).div_ceil(7);
        for row in 0..rows {
            output += &format!(
                "{} {} {} {} {} {} {}\n",
                &arr[row * 7],
                &arr[row * 7 + 1],
                &arr[row * 7 + 2],
                &arr[row * 7 + 3],
                &arr[row * 7 + 4],
                &arr[row * 7 + 5],
                &arr[row * 7 + 6]
            );
        }
        output
    }
}
