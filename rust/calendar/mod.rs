//! Navigate and classify civil dates with a [`CalendarPoint`].
//!
//! ### Basic usage
//!
//! A `CalendarPoint` is a civil date with time-of-day, pinned to an explicit
//! UTC-offset. The [`cdt`] constructor builds one at UTC midnight.
//!
//! ```rust
//! # use datelib::cdt;
//! let date = cdt(2023, 10, 13);  // Friday 13th October 2023
//! assert!(date.is_weekday());
//! assert!(date.next_day().is_weekend());
//! ```
//!
//! ### Weekday-skip navigation
//!
//! Stepping by weekdays skips Saturdays and Sundays. Counted variants repeat
//! the single step, so a zero (or negative) count is no movement at all.
//!
//! ```rust
//! # use datelib::cdt;
//! # let date = cdt(2023, 10, 13);  // Friday 13th October 2023
//! let spot = date.next_weekday();
//! // Monday 16th October 2023, skipping the weekend.
//! assert_eq!(spot, cdt(2023, 10, 16));
//! assert_eq!(date, spot.previous_weekday());
//! assert_eq!(spot, spot.next_x_weekday(0));
//! ```
//!
//! ### Month stepping and the day clamp
//!
//! Stepping months clears time-of-day and clamps the day-of-month to the last
//! valid day of the target month. Counted month steps re-apply the clamp to
//! each intermediate result, so the day can drift downwards across steps.
//!
//! ```rust
//! # use datelib::cdt;
//! let eom = cdt(2023, 1, 31);
//! assert_eq!(cdt(2023, 2, 28), eom.next_month());
//! assert_eq!(cdt(2023, 3, 28), eom.next_x_month(2));
//! ```
//!
//! ### Month enumeration
//!
//! ```rust
//! # use datelib::cdt;
//! let days = cdt(2023, 10, 10).days_of_month();
//! assert_eq!(31, days.len());
//! let weekdays = cdt(2023, 10, 10).weekdays_of_month();
//! assert_eq!(22, weekdays.len());
//! ```

mod point;
pub use crate::calendar::point::{cdt, CalendarPoint};

mod classify;

mod navigate;
pub use crate::calendar::navigate::{days_in_month, is_leap_year};

mod enumerate;

mod error;
pub use crate::calendar::error::CalendarError;
