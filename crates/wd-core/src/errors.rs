//! Error types for waydate-rs.
//!
//! The JavaScript original validated with an "assert or throw" idiom and a
//! generic message string.  Here every validation site gets its own
//! `thiserror`-derived variant so that callers can match on the exact
//! failure reason instead of parsing text.  The `ensure!` macro is the
//! validation idiom used throughout the workspace.

use thiserror::Error;

/// The top-level error type used throughout waydate-rs.
///
/// Every variant is a validation failure raised synchronously at the point
/// of construction or computation; the library never catches its own
/// errors and never clamps or wraps an out-of-range value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Month outside 1–12.
    #[error("month {month} out of range [1, 12]")]
    MonthOutOfRange {
        /// The offending month number.
        month: i64,
    },

    /// Day of month outside the valid range for its month and year.
    #[error("day {day} out of range [1, {max}] for {year}-{month:02}")]
    DayOutOfRange {
        /// The offending day of the month.
        day: i64,
        /// The number of days in that month.
        max: u8,
        /// The month the day was checked against.
        month: u8,
        /// The year the day was checked against.
        year: u16,
    },

    /// Year outside the representable range 1601–3999.
    #[error("year {year} out of range [1601, 3999]")]
    YearOutOfRange {
        /// The offending year.
        year: i64,
    },

    /// Day of year outside `[1, daysInYear(year)]`.
    #[error("day of year {day} out of range [1, {max}] for year {year}")]
    DayOfYearOutOfRange {
        /// The offending day ordinal.
        day: i64,
        /// The number of days in that year (365 or 366).
        max: u16,
        /// The year the ordinal was checked against.
        year: u16,
    },

    /// Absolute date outside `[1, 876216]`.
    #[error("absolute date {value} out of range [1, 876216]")]
    AbsoluteDateOutOfRange {
        /// The offending absolute-date value.
        value: i64,
    },

    /// Day-of-week number outside 0–6 (Sunday = 0).
    #[error("day of week {value} out of range [0, 6]")]
    WeekdayOutOfRange {
        /// The offending weekday number.
        value: i64,
    },

    /// Holiday computation requested for a year before 1900.
    #[error("holiday year {year} must be 1900 or later")]
    HolidayYearOutOfRange {
        /// The offending year.
        year: i64,
    },

    /// Increment past the maximum representable date (31-Dec-3999).
    #[error("cannot increment past the maximum date 31-Dec-3999")]
    DateOverflow,

    /// Decrement past the minimum representable date (1-Jan-1601).
    #[error("cannot decrement past the minimum date 01-Jan-1601")]
    DateUnderflow,

    /// The host clock reported a date this library cannot represent.
    #[error("system clock out of range: {0}")]
    Clock(String),
}

/// Shorthand `Result` type used throughout waydate-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error if a condition does not hold.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn month(m: i64) -> wd_core::errors::Result<i64> {
///     ensure!((1..=12).contains(&m), Error::MonthOutOfRange { month: m });
///     Ok(m)
/// }
/// assert!(month(7).is_ok());
/// assert_eq!(month(13), Err(Error::MonthOutOfRange { month: 13 }));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
