//! United States holiday dates.
//!
//! Every function here is a pure computation over [`Date`]: fixed-date
//! holidays construct the date directly, positional holidays ("nth weekday
//! of month") are built on the weekday-on-or-before primitive, and Easter
//! uses the epact approximation of the paschal moon.  Holiday queries are
//! valid for years 1900 and later.

use crate::date::Date;
use crate::weekday::Weekday;
use wd_core::ensure;
use wd_core::errors::{Error, Result};

/// The earliest year for which holiday dates may be requested.
pub const HOLIDAY_MINIMUM_YEAR: u16 = 1900;

/// Position of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthPosition {
    /// First occurrence of the weekday in the month.
    First,
    /// Second occurrence.
    Second,
    /// Third occurrence.
    Third,
    /// Fourth occurrence.
    Fourth,
    /// Last occurrence.
    Last,
}

impl MonthPosition {
    /// Day offset applied after the initial weekday search: the search
    /// lands on the occurrence just before the month (or just after it for
    /// `Last`), and this offset moves it to the requested occurrence.
    fn offset(&self) -> i32 {
        match self {
            MonthPosition::First => 7,
            MonthPosition::Second => 14,
            MonthPosition::Third => 21,
            MonthPosition::Fourth => 28,
            MonthPosition::Last => -7,
        }
    }
}

/// A holiday date with its display metadata.
///
/// `observed` is the date the holiday would be observed as a federal
/// holiday: fixed-date holidays falling on a Saturday are observed the
/// preceding Friday and those falling on a Sunday the following Monday.
/// Positional holidays land on a weekday by construction and Easter is
/// always a Sunday; neither is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    /// The literal holiday date for the year.
    pub date: Date,
    /// The holiday's name.
    pub name: &'static str,
    /// `true` if the holiday falls on an unconditional month/day.
    pub fixed: bool,
    /// The date the holiday is observed.
    pub observed: Date,
}

impl Holiday {
    fn new(name: &'static str, fixed: bool, date: Date) -> Result<Self> {
        let observed = if fixed { observed_date(date)? } else { date };
        Ok(Holiday {
            date,
            name,
            fixed,
            observed,
        })
    }

    /// Return the three-letter weekday abbreviation of the observed date.
    pub fn observed_day_of_week(&self) -> &'static str {
        self.observed.day_of_week_abbrev()
    }
}

/// Return all holidays for `year` in calendar order.
pub fn holidays(year: u16) -> Result<Vec<Holiday>> {
    check_year(year)?;
    Ok(vec![
        Holiday::new("New Year's Day", true, new_years_day(year)?)?,
        Holiday::new(
            "Birthday of Martin Luther King, Jr.",
            false,
            martin_luther_king_day(year)?,
        )?,
        Holiday::new("Washington's Birthday", false, washingtons_birthday(year)?)?,
        Holiday::new("Easter", false, easter(year)?)?,
        Holiday::new("Memorial Day", false, memorial_day(year)?)?,
        Holiday::new(
            "Juneteenth National Independence Day",
            true,
            juneteenth(year)?,
        )?,
        Holiday::new("Independence Day", true, independence_day(year)?)?,
        Holiday::new("Labor Day", false, labor_day(year)?)?,
        Holiday::new("Columbus Day", false, columbus_day(year)?)?,
        Holiday::new("Veterans Day", true, veterans_day(year)?)?,
        Holiday::new("Thanksgiving Day", false, thanksgiving(year)?)?,
        Holiday::new("Christmas", true, christmas(year)?)?,
    ])
}

// ── Individual holidays ───────────────────────────────────────────────────────

/// New Year's Day: January 1.
pub fn new_years_day(year: u16) -> Result<Date> {
    check_year(year)?;
    Date::new(1, 1, year)
}

/// Martin Luther King Jr. Day: third Monday of January.
pub fn martin_luther_king_day(year: u16) -> Result<Date> {
    check_year(year)?;
    date_from_position(1, year, Weekday::Monday, MonthPosition::Third)
}

/// Washington's Birthday: third Monday of February.
pub fn washingtons_birthday(year: u16) -> Result<Date> {
    check_year(year)?;
    date_from_position(2, year, Weekday::Monday, MonthPosition::Third)
}

/// Memorial Day: last Monday of May.
pub fn memorial_day(year: u16) -> Result<Date> {
    check_year(year)?;
    date_from_position(5, year, Weekday::Monday, MonthPosition::Last)
}

/// Juneteenth: June 19.
pub fn juneteenth(year: u16) -> Result<Date> {
    check_year(year)?;
    Date::new(6, 19, year)
}

/// Independence Day: July 4.
pub fn independence_day(year: u16) -> Result<Date> {
    check_year(year)?;
    Date::new(7, 4, year)
}

/// Labor Day: first Monday of September.
pub fn labor_day(year: u16) -> Result<Date> {
    check_year(year)?;
    date_from_position(9, year, Weekday::Monday, MonthPosition::First)
}

/// Columbus Day: second Monday of October.
pub fn columbus_day(year: u16) -> Result<Date> {
    check_year(year)?;
    date_from_position(10, year, Weekday::Monday, MonthPosition::Second)
}

/// Veterans Day: November 11.
pub fn veterans_day(year: u16) -> Result<Date> {
    check_year(year)?;
    Date::new(11, 11, year)
}

/// Thanksgiving: fourth Thursday of November.
pub fn thanksgiving(year: u16) -> Result<Date> {
    check_year(year)?;
    date_from_position(11, year, Weekday::Thursday, MonthPosition::Fourth)
}

/// Christmas: December 25.
pub fn christmas(year: u16) -> Result<Date> {
    check_year(year)?;
    Date::new(12, 25, year)
}

// ── Easter ────────────────────────────────────────────────────────────────────

/// Easter: the first Sunday strictly after the paschal moon.
pub fn easter(year: u16) -> Result<Date> {
    check_year(year)?;
    let moon = paschal_moon(year)?;
    date_on_weekday_after(moon, Weekday::Sunday)
}

/// The date of the paschal full moon: 19-Apr minus the adjusted epact.
fn paschal_moon(year: u16) -> Result<Date> {
    let adjustment = adjusted_epact(year);
    Date::new(4, 19, year)?.add(-adjustment)
}

/// The shifted epact: the age of the ecclesiastical moon on January 1,
/// shifted so that it counts back from April 19.
fn shifted_epact(year: u16) -> i32 {
    let year = year as i32;
    let century = year / 100;
    (14 + 11 * (year % 19) - (3 * century) / 4 + (5 + 8 * century) / 25) % 30
}

/// The shifted epact corrected for the two cases where the paschal moon
/// would otherwise land a day early.
fn adjusted_epact(year: u16) -> i32 {
    let shifted = shifted_epact(year);
    if shifted == 0 || (shifted == 1 && (year % 19) > 10) {
        shifted + 1
    } else {
        shifted
    }
}

// ── Positional dates ──────────────────────────────────────────────────────────

/// Return the date in `month`/`year` falling on `weekday` at the given
/// month position.
pub fn date_from_position(
    month: u8,
    year: u16,
    weekday: Weekday,
    position: MonthPosition,
) -> Result<Date> {
    let start = if position == MonthPosition::Last {
        Date::new(month, 1, year)?.last_day_of_month()
    } else {
        Date::new(month, 1, year)?
    };
    let anchor = if position == MonthPosition::Last {
        date_on_weekday_after(start, weekday)?
    } else {
        date_on_weekday_before(start, weekday)?
    };
    anchor.add(position.offset())
}

/// Return the latest date on or before `date` falling on `weekday`.
///
/// Subtracting the target weekday number first and then that date's own
/// weekday number lands exactly on the most recent occurrence without
/// iterating day by day.  This is the primitive the `after` and `before`
/// searches are derived from.
fn date_on_weekday_on_or_before(date: Date, weekday: Weekday) -> Result<Date> {
    let shifted = date.add(-(weekday.number() as i32))?;
    let result = date.add(-(shifted.day_of_week_number() as i32))?;
    debug_assert_eq!(result.day_of_week(), weekday);
    debug_assert!(!result.after(&date));
    Ok(result)
}

/// Return the earliest date strictly after `date` falling on `weekday`.
fn date_on_weekday_after(date: Date, weekday: Weekday) -> Result<Date> {
    date_on_weekday_on_or_before(date.add(7)?, weekday)
}

/// Return the latest date strictly before `date` falling on `weekday`.
fn date_on_weekday_before(date: Date, weekday: Weekday) -> Result<Date> {
    date_on_weekday_on_or_before(date.add(-1)?, weekday)
}

// ── Observed dates ────────────────────────────────────────────────────────────

/// Return the date a holiday would be observed as a federal holiday:
/// Sunday moves to the following Monday, Saturday to the preceding Friday.
pub fn observed_date(date: Date) -> Result<Date> {
    match date.day_of_week() {
        Weekday::Sunday => date.add(1),
        Weekday::Saturday => date.add(-1),
        _ => Ok(date),
    }
}

/// Reject years before 1900.  The upper bound needs no separate check:
/// every holiday constructs a date in the requested year, so a year past
/// 3999 surfaces as [`Error::YearOutOfRange`] from the calendar engine.
fn check_year(year: u16) -> Result<()> {
    ensure!(
        year >= HOLIDAY_MINIMUM_YEAR,
        Error::HolidayYearOutOfRange { year: year as i64 }
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
