//! This is the documentation for datelib-rs
//!
//! *Datelib* is a pure calendar-arithmetic library. Given a point-in-time value,
//! a civil date with optional time-of-day in an explicit UTC-offset, it derives
//! adjacent days, adjacent weekdays (skipping weekends), adjacent months (with
//! day-of-month clamping), full day or weekday enumerations of a month, and
//! day/month/weekend classification predicates.


pub mod json;

pub mod calendar;
pub use crate::calendar::{cdt, days_in_month, is_leap_year, CalendarError, CalendarPoint};
