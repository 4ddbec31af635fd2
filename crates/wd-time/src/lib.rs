//! # wd-time
//!
//! Date arithmetic on the proleptic Gregorian calendar (years 1601–3999)
//! and United States holiday computation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and calendar functions.
pub mod date;

/// United States holiday dates.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{Date, MAXIMUM_ABSOLUTE_DATE, MAXIMUM_YEAR, MINIMUM_YEAR};
pub use holiday::{Holiday, MonthPosition, HOLIDAY_MINIMUM_YEAR};
pub use month::Month;
pub use weekday::Weekday;
