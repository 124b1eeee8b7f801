use std::str::FromStr;

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, LEAP_YEAR_CYCLE, MAX_JALAALI_YEAR, MAX_MONTH, MIN_DAY,
    MIN_JALAALI_YEAR,
};
use crate::prelude::*;
use crate::{JalaaliError, JalaaliWeek, d2g, d2j, g2d, j2d};

/// A date in the Jalaali (Persian) calendar.
///
/// Fields are plain data; use [`JalaaliDate::new`] or [`str::parse`] to get a
/// value checked against the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{jy:04}-{jm:02}-{jd:02}")]
pub struct JalaaliDate {
    /// Jalaali year (-61..=3177 for calendar lookups)
    pub jy: i32,
    /// Month, 1 (Farvardin) to 12 (Esfand)
    pub jm: i32,
    /// Day of month, 1 to 29/30/31
    pub jd: i32,
}

/// A date in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: 1 BC is `0`, 2 BC is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{gy:04}-{gm:02}-{gd:02}")]
pub struct GregorianDate {
    /// Gregorian year
    pub gy: i32,
    /// Month, 1 to 12
    pub gm: i32,
    /// Day of month, 1 to 28/29/30/31
    pub gd: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(
        fmt = "Invalid Jalaali year: {} (must be {}..={})",
        "_0",
        MIN_JALAALI_YEAR,
        MAX_JALAALI_YEAR
    )]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaaliDate {
    /// Creates a Jalaali date, validating year, month and day.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `ParseError::InvalidMonth` or
    /// `ParseError::InvalidDay` for the first component out of range.
    pub fn new(jy: i32, jm: i32, jd: i32) -> Result<Self, ParseError> {
        if !(MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR).contains(&jy) {
            return Err(ParseError::InvalidYear(jy));
        }
        if !(1..=MAX_MONTH).contains(&jm) {
            return Err(ParseError::InvalidMonth(jm));
        }
        let max_day = crate::jalaali_month_length(jy, jm).map_err(|_| ParseError::InvalidYear(jy))?;
        if !(MIN_DAY..=max_day).contains(&jd) {
            return Err(ParseError::InvalidDay {
                year: jy,
                month: jm,
                day: jd,
            });
        }
        Ok(Self { jy, jm, jd })
    }

    /// Converts to the Gregorian calendar
    ///
    /// # Errors
    /// Returns `JalaaliError::InvalidYear` if the year is outside the supported range.
    pub fn to_gregorian(self) -> Result<GregorianDate, JalaaliError> {
        crate::to_gregorian(self.jy, self.jm, self.jd)
    }

    /// Julian Day Number of this date
    ///
    /// # Errors
    /// Returns `JalaaliError::InvalidYear` if the year is outside the supported range.
    pub fn to_jdn(self) -> Result<i32, JalaaliError> {
        j2d(self.jy, self.jm, self.jd)
    }

    /// Jalaali date of a Julian Day Number
    ///
    /// # Errors
    /// Returns `JalaaliError::InvalidYear` if `jdn` is outside the supported range.
    pub fn from_jdn(jdn: i32) -> Result<Self, JalaaliError> {
        d2j(jdn)
    }

    /// # Errors
    /// Returns `JalaaliError::InvalidYear` if the year is outside the supported range.
    pub fn is_leap_year(self) -> Result<bool, JalaaliError> {
        crate::is_leap_jalaali_year(self.jy)
    }

    /// Number of days in this date's month
    ///
    /// # Errors
    /// Returns `JalaaliError` if the year or month is out of range.
    pub fn month_length(self) -> Result<i32, JalaaliError> {
        crate::jalaali_month_length(self.jy, self.jm)
    }

    /// The Saturday-to-Friday week containing this date
    ///
    /// # Errors
    /// Returns `JalaaliError` if the week leaves the supported range.
    pub fn week(self) -> Result<JalaaliWeek, JalaaliError> {
        crate::jalaali_week(self.jy, self.jm, self.jd)
    }
}

impl GregorianDate {
    /// Creates a Gregorian date, validating month and day.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay`.
    pub fn new(gy: i32, gm: i32, gd: i32) -> Result<Self, ParseError> {
        if !(1..=MAX_MONTH).contains(&gm) {
            return Err(ParseError::InvalidMonth(gm));
        }
        if !(MIN_DAY..=days_in_month(gy, gm)).contains(&gd) {
            return Err(ParseError::InvalidDay {
                year: gy,
                month: gm,
                day: gd,
            });
        }
        Ok(Self { gy, gm, gd })
    }

    /// Converts to the Jalaali calendar
    ///
    /// # Errors
    /// Returns `JalaaliError::InvalidYear` if the date maps outside the supported range.
    pub fn to_jalaali(self) -> Result<JalaaliDate, JalaaliError> {
        crate::to_jalaali(self.gy, self.gm, self.gd)
    }

    /// Julian Day Number of this date
    ///
    /// # Errors
    /// Returns `JalaaliError::JdnOutOfRange` if the day count overflows `i32`.
    pub fn to_jdn(self) -> Result<i32, JalaaliError> {
        g2d(self.gy, self.gm, self.gd)
    }

    /// Gregorian date of a Julian Day Number
    pub fn from_jdn(jdn: i32) -> Self {
        d2g(jdn)
    }

    /// Returns true when this date's year has a 29 February
    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.gy)
    }

    /// Number of days in this date's month, 0 if the month is out of range
    pub const fn days_in_month(self) -> i32 {
        days_in_month(self.gy, self.gm)
    }
}

impl TryFrom<(i32, i32, i32)> for JalaaliDate {
    type Error = ParseError;

    fn try_from((jy, jm, jd): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(jy, jm, jd)
    }
}

impl TryFrom<(i32, i32, i32)> for GregorianDate {
    type Error = ParseError;

    fn try_from((gy, gm, gd): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(gy, gm, gd)
    }
}

impl From<JalaaliDate> for (i32, i32, i32) {
    fn from(date: JalaaliDate) -> Self {
        (date.jy, date.jm, date.jd)
    }
}

impl From<GregorianDate> for (i32, i32, i32) {
    fn from(date: GregorianDate) -> Self {
        (date.gy, date.gm, date.gd)
    }
}

// --- parsing ---

/// Helper to parse an unsigned decimal component with better error messages
fn parse_component(s: &str) -> Result<i32, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Splits `[-]YYYY-MM-DD` into its numeric components.
fn parse_ymd(s: &str) -> Result<(i32, i32, i32), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // A leading separator is the sign of the year.
    let (negative, body) = trimmed
        .strip_prefix(DATE_SEPARATOR)
        .map_or((false, trimmed), |rest| (true, rest));

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected 2 {} separators, found {}: {trimmed}",
            DATE_SEPARATOR,
            parts.len() - 1
        )));
    };

    let year = parse_component(year)?;
    let month = parse_component(month)?;
    let day = parse_component(day)?;
    Ok((if negative { -year } else { year }, month, day))
}

impl FromStr for JalaaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (jy, jm, jd) = parse_ymd(s)?;
        Self::new(jy, jm, jd)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (gy, gm, gd) = parse_ymd(s)?;
        Self::new(gy, gm, gd)
    }
}

impl serde::Serialize for JalaaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Gregorian month rules

/// Gregorian leap-year rule: every 4th year, except centuries not divisible by 400
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month, 0 for a month outside 1..=12
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        FEBRUARY if is_leap_year(year) => FEBRUARY_DAYS_LEAP,
        1..=MAX_MONTH => GREGORIAN_DAYS_IN_MONTH[month as usize],
        _ => 0,
    }
}
