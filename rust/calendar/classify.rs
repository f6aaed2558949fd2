use chrono::prelude::*;

use crate::calendar::CalendarPoint;

impl CalendarPoint {
    /// Return whether two points share the same civil (year, month, day).
    ///
    /// Each point's date is read in its own offset. An absent `other` is
    /// never the same day.
    pub fn is_same_day_as(&self, other: Option<&CalendarPoint>) -> bool {
        match other {
            Some(point) => self.datetime.date_naive() == point.datetime.date_naive(),
            None => false,
        }
    }

    /// Return whether two points share the same (month, year), ignoring day.
    pub fn is_same_month_year_as(&self, other: Option<&CalendarPoint>) -> bool {
        match other {
            Some(point) => self.year() == point.year() && self.month() == point.month(),
            None => false,
        }
    }

    /// Return whether `self` strictly precedes `other` as an instant, or both
    /// fall on the same civil day.
    pub fn is_before_or_same_day_as(&self, other: &CalendarPoint) -> bool {
        self.datetime < other.datetime || self.is_same_day_as(Some(other))
    }

    /// Return whether `self` falls on the civil day immediately before `other`.
    pub fn is_one_day_before(&self, other: &CalendarPoint) -> bool {
        self.is_same_day_as(Some(&other.previous_day()))
    }

    /// Return whether the point falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return whether the point falls on the general working week, Monday to Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }
}
