//! # waydate
//!
//! A Rust translation of the Waysys WayDate library: calendar-date
//! arithmetic over the proleptic Gregorian years 1601–3999 and United
//! States holiday computation.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use waydate::{Date, holiday};
//!
//! let independence = Date::new(7, 4, 2024)?;
//! assert_eq!(independence.to_string(), "04-Jul-2024");
//! assert_eq!(independence.absolute(), 154_683);
//!
//! let easter = holiday::easter(2024)?;
//! assert_eq!(easter, Date::new(3, 31, 2024)?);
//! # Ok::<(), waydate::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the `ensure!` macro.
pub use wd_core as core;

/// Date, month, weekday, and holiday types.
pub use wd_time as time;

pub use wd_core::{Error, Result};
pub use wd_time::{
    date, holiday, Date, Holiday, Month, MonthPosition, Weekday, HOLIDAY_MINIMUM_YEAR,
    MAXIMUM_ABSOLUTE_DATE, MAXIMUM_YEAR, MINIMUM_YEAR,
};
