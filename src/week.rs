use std::str::FromStr;

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::{JalaaliDate, JalaaliError, ParseError, WEEK_SEPARATOR, d2j, j2d, prelude::*};

/// Days from the Saturday opening a week to its closing Friday
const WEEK_SPAN: i32 = 6;

/// The Saturday-to-Friday week containing a Jalaali date (both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{saturday}/{friday}")]
pub struct JalaaliWeek {
    /// First day of the week
    pub saturday: JalaaliDate,
    /// Last day of the week
    pub friday:   JalaaliDate,
}

/// Error type for week operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// The bounds do not form a Saturday-to-Friday week.
    #[error("Invalid week: {saturday} to {friday} is not a Saturday-to-Friday week")]
    InvalidWeek { saturday: JalaaliDate, friday: JalaaliDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Error locating the week in the calendar.
    #[error(transparent)]
    Calendar(#[from] JalaaliError),

    /// Invalid week format.
    #[error("Invalid week format: {0}")]
    InvalidFormat(String),
}

impl JalaaliWeek {
    /// Creates a week from its bounds.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidWeek` unless `saturday` is a Saturday and
    /// `friday` the Friday six days later.
    pub fn new(saturday: JalaaliDate, friday: JalaaliDate) -> Result<Self, WeekError> {
        let week = jalaali_week(saturday.jy, saturday.jm, saturday.jd)?;
        if week.saturday != saturday || week.friday != friday {
            return Err(WeekError::InvalidWeek { saturday, friday });
        }
        Ok(week)
    }

    /// Checks if the week contains a given date
    pub fn contains(&self, date: &JalaaliDate) -> bool {
        self.saturday <= *date && *date <= self.friday
    }

    /// Returns the seven days of the week, Saturday first.
    ///
    /// # Errors
    /// Returns `JalaaliError` if a day falls outside the supported range.
    pub fn dates(&self) -> Result<[JalaaliDate; 7], JalaaliError> {
        let JalaaliDate { jy, jm, jd } = self.saturday;
        let first = self.saturday.to_jdn()?;
        let mut days = [self.saturday; 7];
        for (offset, day) in (0..).zip(days.iter_mut()) {
            let jdn = first
                .checked_add(offset)
                .ok_or(JalaaliError::JdnOutOfRange { year: jy, month: jm, day: jd })?;
            *day = d2j(jdn)?;
        }
        Ok(days)
    }
}

/// Offset from a weekday back to the Saturday that opens its week.
const fn days_since_saturday(weekday: Weekday) -> i32 {
    match weekday {
        Weekday::Sat => 0,
        Weekday::Sun => 1,
        Weekday::Mon => 2,
        Weekday::Tue => 3,
        Weekday::Wed => 4,
        Weekday::Thu => 5,
        Weekday::Fri => 6,
    }
}

/// Returns the Saturday and Friday of the week containing a Jalaali date.
///
/// The week starts on Saturday. Both bounds are normalised through the Julian
/// Day Number, so weeks spanning a month or year boundary come out right.
///
/// # Errors
/// Returns `JalaaliError` if the date or either bound is outside the
/// supported range.
///
/// # Example
///
/// ```
/// use jalaali::{jalaali_week, JalaaliDate};
///
/// let week = jalaali_week(1404, 8, 24).unwrap();
/// assert_eq!(week.saturday, JalaaliDate { jy: 1404, jm: 8, jd: 24 });
/// assert_eq!(week.friday, JalaaliDate { jy: 1404, jm: 8, jd: 30 });
/// ```
#[tracing::instrument(level = "trace")]
pub fn jalaali_week(jy: i32, jm: i32, jd: i32) -> Result<JalaaliWeek, JalaaliError> {
    let jdn = j2d(jy, jm, jd)?;
    let weekday = crate::jalaali_to_date_time(jy, jm, jd)?.weekday();
    let out_of_range = JalaaliError::JdnOutOfRange { year: jy, month: jm, day: jd };
    let saturday = jdn
        .checked_sub(days_since_saturday(weekday))
        .ok_or_else(|| out_of_range.clone())?;
    let friday = saturday.checked_add(WEEK_SPAN).ok_or(out_of_range)?;
    Ok(JalaaliWeek {
        saturday: d2j(saturday)?,
        friday:   d2j(friday)?,
    })
}

impl FromStr for JalaaliWeek {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(WEEK_SEPARATOR).count();
        if separator_count != 1 {
            return Err(WeekError::InvalidFormat(format!(
                "Expected 1 '{WEEK_SEPARATOR}' separator, found {separator_count}: {s}"
            )));
        }

        let (saturday, friday) = trimmed.split_once(WEEK_SEPARATOR).ok_or_else(|| {
            WeekError::InvalidFormat(format!("Separator '{WEEK_SEPARATOR}' not found: {s}"))
        })?;

        let saturday = saturday.trim().parse::<JalaaliDate>()?;
        let friday = friday.trim().parse::<JalaaliDate>()?;

        Self::new(saturday, friday)
    }
}

impl Serialize for JalaaliWeek {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JalaaliWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
