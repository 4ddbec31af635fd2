//! `Date` — a calendar date on the proleptic Gregorian calendar.
//!
//! Dates span 1-Jan-1601 through 31-Dec-3999 and are stored as a validated
//! (month, day, year) triple.  The secondary representation is the
//! **absolute date**: the number of days elapsed since 31-Dec-1600, so
//! absolute date 1 is 1-Jan-1601 and absolute date 876216 is 31-Dec-3999.
//! The absolute date is an order-preserving bijection with the valid
//! triples and defines the total order over all dates.
//!
//! # Weekday alignment
//! 1-Jan-1601 is a Monday on the proleptic Gregorian calendar (the
//! Gregorian cycle repeats every 146097 days, a multiple of 7, and
//! 1-Jan-2001 was a Monday), so `absolute % 7` yields the weekday number
//! directly with 0 = Sunday … 6 = Saturday.

use crate::month::Month;
use crate::weekday::Weekday;
use wd_core::ensure;
use wd_core::errors::{Error, Result};

/// Minimum representable year.
pub const MINIMUM_YEAR: u16 = 1601;

/// Maximum representable year.
pub const MAXIMUM_YEAR: u16 = 3999;

/// Absolute date of 31-Dec-3999.
pub const MAXIMUM_ABSOLUTE_DATE: i32 = 876_216;

/// A calendar date.
///
/// Every constructed instance satisfies the validity predicate
/// [`is_valid_date`]; operations that change a date return a new instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    month: u8,
    day: u8,
    year: u16,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum representable date: 1-Jan-1601 (absolute date 1).
    pub const MIN: Date = Date {
        month: 1,
        day: 1,
        year: MINIMUM_YEAR,
    };

    /// Maximum representable date: 31-Dec-3999 (absolute date 876216).
    pub const MAX: Date = Date {
        month: 12,
        day: 31,
        year: MAXIMUM_YEAR,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from month (1–12), day of month, and year (1601–3999).
    pub fn new(month: u8, day: u8, year: u16) -> Result<Self> {
        validate(month, day, year)?;
        Ok(Date { month, day, year })
    }

    /// Create a date from an absolute date in `[1, 876216]`.
    pub fn from_absolute(value: i32) -> Result<Self> {
        ensure!(
            (1..=MAXIMUM_ABSOLUTE_DATE).contains(&value),
            Error::AbsoluteDateOutOfRange {
                value: value as i64
            }
        );
        let year = year_from_absolute(value);
        let day_of_year = value - elapsed_days(year as i32 - 1);
        let (month, day) = month_day_from_day_of_year(day_of_year as u16, year)?;
        Ok(Date { month, day, year })
    }

    /// Create a date from a day-of-year ordinal (1-Jan is day 1) and a year.
    pub fn from_day_of_year(day_of_year: u16, year: u16) -> Result<Self> {
        let (month, day) = month_day_from_day_of_year(day_of_year, year)?;
        Ok(Date { month, day, year })
    }

    /// Create a date for today, read from the host system clock.
    pub fn today() -> Result<Self> {
        use chrono::Datelike;
        let now = chrono::Local::now().date_naive();
        let year = u16::try_from(now.year())
            .map_err(|_| Error::Clock(format!("clock year {} not representable", now.year())))?;
        Self::new(now.month() as u8, now.day() as u8, year)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the year (1601–3999).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month).expect("month valid by construction")
    }

    /// Return the three-letter month abbreviation (`"Jan"` … `"Dec"`).
    pub fn month_abbrev(&self) -> &'static str {
        self.month_of_year().short_name()
    }

    /// Return the absolute date: days elapsed since 31-Dec-1600.
    pub fn absolute(&self) -> i32 {
        ordinal_day(self.month as i32, self.day as i32, self.year as i32)
            + elapsed_days(self.year as i32 - 1)
    }

    /// Return the day of the year (1-Jan is day 1).
    pub fn day_of_year(&self) -> u16 {
        ordinal_day(self.month as i32, self.day as i32, self.year as i32) as u16
    }

    /// Return `true` if the year of this date is a leap year.
    pub fn leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    // ── Comparison ────────────────────────────────────────────────────────────

    /// Three-way comparison by absolute date.
    pub fn compare(&self, other: &Date) -> std::cmp::Ordering {
        self.cmp(other)
    }

    /// Return `true` if this date is strictly after `other`.
    pub fn after(&self, other: &Date) -> bool {
        self > other
    }

    /// Return `true` if this date is strictly before `other`.
    pub fn before(&self, other: &Date) -> bool {
        self < other
    }

    /// Return the number of days between this date and `other`.
    /// Positive if this date is later.
    pub fn difference(&self, other: Date) -> i32 {
        self.absolute() - other.absolute()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Return the date of the following day.
    ///
    /// Fails with [`Error::DateOverflow`] on 31-Dec-3999.
    pub fn increment(&self) -> Result<Self> {
        if self.day < month_length(self.month, self.year) {
            Ok(Date {
                day: self.day + 1,
                ..*self
            })
        } else if self.month == 12 {
            ensure!(self.year < MAXIMUM_YEAR, Error::DateOverflow);
            Ok(Date {
                month: 1,
                day: 1,
                year: self.year + 1,
            })
        } else {
            Ok(Date {
                month: self.month + 1,
                day: 1,
                year: self.year,
            })
        }
    }

    /// Return the date of the preceding day.
    ///
    /// Fails with [`Error::DateUnderflow`] on 1-Jan-1601.
    pub fn decrement(&self) -> Result<Self> {
        if self.day > 1 {
            Ok(Date {
                day: self.day - 1,
                ..*self
            })
        } else if self.month == 1 {
            ensure!(self.year > MINIMUM_YEAR, Error::DateUnderflow);
            Ok(Date {
                month: 12,
                day: 31,
                year: self.year - 1,
            })
        } else {
            Ok(Date {
                month: self.month - 1,
                day: month_length(self.month - 1, self.year),
                year: self.year,
            })
        }
    }

    /// Add a (possibly negative) number of days.
    ///
    /// Fails if the result falls outside the representable range.
    pub fn add(&self, days: i32) -> Result<Self> {
        let value = self.absolute() as i64 + days as i64;
        ensure!(
            (1..=MAXIMUM_ABSOLUTE_DATE as i64).contains(&value),
            Error::AbsoluteDateOutOfRange { value }
        );
        Self::from_absolute(value as i32)
    }

    // ── Weekday ───────────────────────────────────────────────────────────────

    /// Return the day-of-week number (0 = Sunday … 6 = Saturday).
    pub fn day_of_week_number(&self) -> u8 {
        (self.absolute() % 7) as u8
    }

    /// Return the day of the week.
    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_number(self.day_of_week_number()).expect("modulus always in 0..=6")
    }

    /// Return the three-letter weekday abbreviation (`"Sun"` … `"Sat"`).
    pub fn day_of_week_abbrev(&self) -> &'static str {
        self.day_of_week().short_name()
    }

    // ── Month boundaries ──────────────────────────────────────────────────────

    /// Return the first day of the month containing this date.
    pub fn first_day_of_month(&self) -> Self {
        Date { day: 1, ..*self }
    }

    /// Return the last day of the month containing this date.
    pub fn last_day_of_month(&self) -> Self {
        Date {
            day: month_length(self.month, self.year),
            ..*self
        }
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;

    fn sub(self, rhs: Date) -> i32 {
        self.difference(rhs)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    /// Format as `DD-MON-YYYY`, e.g. `04-Jul-2024`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{}-{}", self.day, self.month_abbrev(), self.year)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({:04}-{:02}-{:02})", self.year, self.month, self.day)
    }
}

// ── Validity predicates ───────────────────────────────────────────────────────

/// Return `true` if `month` is a valid month number (1–12).
pub fn is_month(month: i64) -> bool {
    (1..=12).contains(&month)
}

/// Return `true` if `year` is within the representable range (1601–3999).
pub fn is_year(year: i64) -> bool {
    (MINIMUM_YEAR as i64..=MAXIMUM_YEAR as i64).contains(&year)
}

/// Return `true` if `day` is a valid day-of-week number (0–6).
pub fn is_day_of_week(day: i64) -> bool {
    (0..=6).contains(&day)
}

/// Return `true` if `day` is a valid day-of-year ordinal for `year`.
pub fn is_day_of_year(day: i64, year: i64) -> bool {
    if !is_year(year) {
        return false;
    }
    let max = if leap(year as i32) { 366 } else { 365 };
    (1..=max).contains(&day)
}

/// Return `true` if `value` is a valid absolute date.
pub fn is_absolute_date(value: i64) -> bool {
    (1..=MAXIMUM_ABSOLUTE_DATE as i64).contains(&value)
}

/// Return `true` if the (month, day, year) combination denotes a real
/// calendar date within the representable range.
pub fn is_valid_date(month: i64, day: i64, year: i64) -> bool {
    if !is_month(month) || !is_year(year) {
        return false;
    }
    let max = month_length(month as u8, year as u16) as i64;
    (1..=max).contains(&day)
}

// ── Calendar functions ────────────────────────────────────────────────────────

/// Return `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: u16) -> bool {
    leap(year as i32)
}

/// Return the number of days in the given month (1–12) of `year`.
pub fn days_in_month(month: u8, year: u16) -> Result<u8> {
    ensure!(
        is_month(month as i64),
        Error::MonthOutOfRange {
            month: month as i64
        }
    );
    Ok(month_length(month, year))
}

/// Return the number of days in `year`: 366 if leap, else 365.
pub fn days_in_year(year: u16) -> Result<u16> {
    ensure!(is_year(year as i64), Error::YearOutOfRange { year: year as i64 });
    Ok(if is_leap_year(year) { 366 } else { 365 })
}

/// Return the day-of-year ordinal for a valid (month, day, year): 1-Jan is
/// day 1 and the result is at most `days_in_year(year)`.
pub fn day_of_year(month: u8, day: u8, year: u16) -> Result<u16> {
    validate(month, day, year)?;
    Ok(ordinal_day(month as i32, day as i32, year as i32) as u16)
}

/// Return the cumulative day count of years 1601 through `year` inclusive.
///
/// This is the additive offset converting a day-of-year ordinal into an
/// absolute date; `days_in_past_years(1600)` is 0.
pub fn days_in_past_years(year: u16) -> Result<i32> {
    ensure!(
        (MINIMUM_YEAR - 1..=MAXIMUM_YEAR).contains(&year),
        Error::YearOutOfRange { year: year as i64 }
    );
    Ok(elapsed_days(year as i32))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn leap(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in a month, assuming `month` is 1–12.
fn month_length(month: u8, year: u16) -> u8 {
    debug_assert!((1..=12).contains(&month));
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[month as usize - 1]
    }
}

/// Closed-form day-of-year: `(367 * month - 362) / 12 + day`, corrected for
/// the length of February.  Assumes a valid (month, day, year).
fn ordinal_day(month: i32, day: i32, year: i32) -> i32 {
    let mut ordinal = (367 * month - 362) / 12 + day;
    if month > 2 {
        ordinal -= if leap(year) { 1 } else { 2 };
    }
    ordinal
}

/// Days in years 1601..=`year` (`elapsed_days(1600)` = 0).  Assumes
/// `year >= 1600`.
fn elapsed_days(year: i32) -> i32 {
    let y = year - 1600;
    365 * y + y / 4 - y / 100 + y / 400
}

/// Year containing the given absolute date.  Assumes `value` is in
/// `[1, MAXIMUM_ABSOLUTE_DATE]`.
///
/// Decomposes the day count into 400-year cycles (146097 days), 100-year
/// cycles (36524 days), 4-year cycles (1461 days), and single years.  When
/// the remainder decomposition lands exactly on the 4th unit (`n100 == 4`
/// or `n1 == 4`) the date is 31-Dec of the leap year closing the previous
/// cycle, so the base year is 1600 rather than 1601.
fn year_from_absolute(value: i32) -> u16 {
    let d0 = value - 1;
    let n400 = d0 / 146_097;
    let d1 = d0 % 146_097;
    let n100 = d1 / 36_524;
    let d2 = d1 % 36_524;
    let n4 = d2 / 1_461;
    let d3 = d2 % 1_461;
    let n1 = d3 / 365;
    let base = if n100 == 4 || n1 == 4 { 1600 } else { 1601 };
    (400 * n400 + 100 * n100 + 4 * n4 + n1 + base) as u16
}

/// Split a day-of-year ordinal into (month, day) by iteratively peeling off
/// whole months.
fn month_day_from_day_of_year(day_of_year: u16, year: u16) -> Result<(u8, u8)> {
    ensure!(is_year(year as i64), Error::YearOutOfRange { year: year as i64 });
    let max = if is_leap_year(year) { 366 } else { 365 };
    ensure!(
        (1..=max).contains(&day_of_year),
        Error::DayOfYearOutOfRange {
            day: day_of_year as i64,
            max,
            year,
        }
    );
    let mut month = 1u8;
    let mut remaining = day_of_year - 1;
    while remaining >= month_length(month, year) as u16 {
        remaining -= month_length(month, year) as u16;
        month += 1;
    }
    Ok((month, remaining as u8 + 1))
}

/// Validate a (month, day, year) combination, reporting the first failing
/// component.
fn validate(month: u8, day: u8, year: u16) -> Result<()> {
    ensure!(
        is_month(month as i64),
        Error::MonthOutOfRange {
            month: month as i64
        }
    );
    ensure!(is_year(year as i64), Error::YearOutOfRange { year: year as i64 });
    let max = month_length(month, year);
    ensure!(
        (1..=max).contains(&day),
        Error::DayOutOfRange {
            day: day as i64,
            max,
            month,
            year,
        }
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u8, d: u8, y: u16) -> Date {
        Date::new(m, d, y).unwrap()
    }

    #[test]
    fn epoch() {
        assert_eq!(Date::MIN.absolute(), 1);
        assert_eq!(Date::from_absolute(1).unwrap(), date(1, 1, 1601));
    }

    #[test]
    fn maximum() {
        assert_eq!(Date::MAX.absolute(), MAXIMUM_ABSOLUTE_DATE);
        assert_eq!(
            Date::from_absolute(MAXIMUM_ABSOLUTE_DATE).unwrap(),
            date(12, 31, 3999)
        );
    }

    #[test]
    fn known_absolute() {
        // 4-Jul-2024 has absolute date 154683
        assert_eq!(date(7, 4, 2024).absolute(), 154_683);
        assert_eq!(Date::from_absolute(154_683).unwrap(), date(7, 4, 2024));
    }

    #[test]
    fn roundtrip() {
        let cases = [
            (1, 1, 1601),
            (12, 31, 1601),
            (2, 29, 1604),
            (2, 29, 2000),  // leap century
            (2, 28, 1900),  // non-leap century
            (12, 31, 2000), // n100 == 4 boundary
            (12, 31, 2004), // n1 == 4 boundary
            (7, 4, 2024),
            (6, 15, 2023),
            (12, 31, 3999),
        ];
        for (m, d, y) in cases {
            let original = date(m, d, y);
            let restored = Date::from_absolute(original.absolute()).unwrap();
            assert_eq!(original, restored, "roundtrip failed for {original}");
        }
    }

    #[test]
    fn leap_years() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2024));
    }

    #[test]
    fn days_in_month_checks() {
        assert_eq!(days_in_month(2, 2024).unwrap(), 29);
        assert_eq!(days_in_month(2, 2023).unwrap(), 28);
        assert_eq!(days_in_month(9, 2023).unwrap(), 30);
        assert_eq!(
            days_in_month(13, 2023),
            Err(Error::MonthOutOfRange { month: 13 })
        );
    }

    #[test]
    fn days_in_year_checks() {
        assert_eq!(days_in_year(2024).unwrap(), 366);
        assert_eq!(days_in_year(2023).unwrap(), 365);
        assert_eq!(days_in_year(1600), Err(Error::YearOutOfRange { year: 1600 }));
    }

    #[test]
    fn day_of_year_closed_form() {
        assert_eq!(day_of_year(1, 1, 2023).unwrap(), 1);
        assert_eq!(day_of_year(12, 31, 2023).unwrap(), 365);
        assert_eq!(day_of_year(12, 31, 2024).unwrap(), 366);
        assert_eq!(day_of_year(3, 1, 2024).unwrap(), 61);
        assert_eq!(day_of_year(3, 1, 2023).unwrap(), 60);
    }

    #[test]
    fn from_day_of_year() {
        assert_eq!(Date::from_day_of_year(61, 2024).unwrap(), date(3, 1, 2024));
        assert_eq!(Date::from_day_of_year(366, 2024).unwrap(), date(12, 31, 2024));
        assert_eq!(
            Date::from_day_of_year(366, 2023),
            Err(Error::DayOfYearOutOfRange {
                day: 366,
                max: 365,
                year: 2023,
            })
        );
    }

    #[test]
    fn invalid_construction() {
        assert_eq!(
            Date::new(2, 30, 2023),
            Err(Error::DayOutOfRange {
                day: 30,
                max: 28,
                month: 2,
                year: 2023,
            })
        );
        assert_eq!(Date::new(0, 1, 2023), Err(Error::MonthOutOfRange { month: 0 }));
        assert_eq!(
            Date::new(1, 1, 4000),
            Err(Error::YearOutOfRange { year: 4000 })
        );
        assert!(Date::new(2, 29, 2024).is_ok());
        assert!(Date::new(2, 29, 2023).is_err());
    }

    #[test]
    fn invalid_absolute() {
        assert_eq!(
            Date::from_absolute(0),
            Err(Error::AbsoluteDateOutOfRange { value: 0 })
        );
        assert!(Date::from_absolute(MAXIMUM_ABSOLUTE_DATE + 1).is_err());
    }

    #[test]
    fn weekdays() {
        // The epoch is a Monday.
        assert_eq!(Date::MIN.day_of_week(), Weekday::Monday);
        // 1-Jan-2024 is a Monday, 6-Jan-2024 a Saturday.
        assert_eq!(date(1, 1, 2024).day_of_week(), Weekday::Monday);
        assert_eq!(date(1, 6, 2024).day_of_week(), Weekday::Saturday);
        assert_eq!(date(7, 4, 2024).day_of_week(), Weekday::Thursday);
        assert_eq!(date(7, 4, 2024).day_of_week_abbrev(), "Thu");
    }

    #[test]
    fn increment_and_decrement() {
        assert_eq!(date(1, 31, 2023).increment().unwrap(), date(2, 1, 2023));
        assert_eq!(date(12, 31, 2023).increment().unwrap(), date(1, 1, 2024));
        assert_eq!(date(2, 28, 2024).increment().unwrap(), date(2, 29, 2024));
        assert_eq!(date(3, 1, 2023).decrement().unwrap(), date(2, 28, 2023));
        assert_eq!(date(1, 1, 2024).decrement().unwrap(), date(12, 31, 2023));
        assert_eq!(Date::MAX.increment(), Err(Error::DateOverflow));
        assert_eq!(Date::MIN.decrement(), Err(Error::DateUnderflow));
    }

    #[test]
    fn increment_inverts_decrement() {
        let d = date(2, 29, 2024);
        assert_eq!(d.increment().unwrap().decrement().unwrap(), d);
        assert_eq!(d.increment().unwrap().difference(d), 1);
    }

    #[test]
    fn add_days() {
        let d = date(1, 1, 2023);
        assert_eq!(d.add(31).unwrap(), date(2, 1, 2023));
        assert_eq!(d.add(365).unwrap(), date(1, 1, 2024));
        assert_eq!(d.add(-1).unwrap(), date(12, 31, 2022));
        assert_eq!(d.add(0).unwrap(), d);
        assert!(Date::MIN.add(-1).is_err());
        assert!(Date::MAX.add(1).is_err());
    }

    #[test]
    fn comparison() {
        let a = date(6, 15, 2023);
        let b = date(6, 16, 2023);
        assert!(a.before(&b));
        assert!(b.after(&a));
        assert_eq!(a.compare(&b), std::cmp::Ordering::Less);
        assert_eq!(a.compare(&a), std::cmp::Ordering::Equal);
        assert_eq!(b.difference(a), 1);
        assert_eq!(a.difference(b), -1);
        assert_eq!(b - a, 1);
    }

    #[test]
    fn month_boundaries() {
        let d = date(2, 15, 2024);
        assert_eq!(d.first_day_of_month(), date(2, 1, 2024));
        assert_eq!(d.last_day_of_month(), date(2, 29, 2024));
    }

    #[test]
    fn formatting() {
        assert_eq!(date(7, 4, 2024).to_string(), "04-Jul-2024");
        assert_eq!(date(12, 25, 2023).to_string(), "25-Dec-2023");
        assert_eq!(format!("{:?}", date(7, 4, 2024)), "Date(2024-07-04)");
    }

    #[test]
    fn validity_predicates() {
        assert!(is_valid_date(2, 29, 2024));
        assert!(!is_valid_date(2, 29, 2023));
        assert!(!is_valid_date(0, 1, 2023));
        assert!(!is_valid_date(1, 1, 1600));
        assert!(is_absolute_date(1));
        assert!(!is_absolute_date(876_217));
        assert!(is_day_of_week(0));
        assert!(!is_day_of_week(7));
        assert!(is_day_of_year(366, 2024));
        assert!(!is_day_of_year(366, 2023));
    }

    #[test]
    fn past_years_accumulation() {
        assert_eq!(days_in_past_years(1600).unwrap(), 0);
        assert_eq!(days_in_past_years(1601).unwrap(), 365);
        // 400 Gregorian years contain 146097 days.
        assert_eq!(days_in_past_years(2000).unwrap(), 146_097);
        assert_eq!(days_in_past_years(3999).unwrap(), MAXIMUM_ABSOLUTE_DATE);
        assert!(days_in_past_years(1599).is_err());
    }

    #[test]
    fn today_is_representable() {
        let today = Date::today().unwrap();
        assert!(is_valid_date(
            today.month() as i64,
            today.day() as i64,
            today.year() as i64
        ));
    }
}
