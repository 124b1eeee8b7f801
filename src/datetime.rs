//! Interop with `chrono` date and date-time values.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::{GregorianDate, JalaaliDate, JalaaliError, to_gregorian, to_jalaali};

/// Converts any `chrono` date-like value (its calendar fields as they read
/// locally) to a Jalaali date.
///
/// # Errors
/// Returns `JalaaliError::InvalidYear` if the date maps outside the supported range.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use jalaali::{to_jalaali_from, JalaaliDate};
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
/// assert_eq!(to_jalaali_from(&date).unwrap(), JalaaliDate { jy: 1404, jm: 8, jd: 24 });
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn to_jalaali_from<D: Datelike>(date: &D) -> Result<JalaaliDate, JalaaliError> {
    // chrono months and days are at most 31
    to_jalaali(date.year(), date.month() as i32, date.day() as i32)
}

/// Converts a Jalaali date to a `NaiveDateTime` at midnight.
///
/// # Errors
/// Returns `JalaaliError` if the year is outside the supported range or the
/// Gregorian date cannot be represented by `chrono`.
pub fn jalaali_to_date_time(jy: i32, jm: i32, jd: i32) -> Result<NaiveDateTime, JalaaliError> {
    jalaali_to_date_time_hms_milli(jy, jm, jd, 0, 0, 0, 0)
}

/// Converts a Jalaali date and a wall-clock time to a `NaiveDateTime`.
///
/// The result carries no time zone; it is the local date and time as read
/// on a clock.
///
/// # Errors
/// Returns `JalaaliError::InvalidTime` for an hour, minute, second or
/// millisecond out of range, and the errors of [`jalaali_to_date_time`].
///
/// # Example
///
/// ```
/// use chrono::Timelike;
///
/// let dt = jalaali::jalaali_to_date_time_hms_milli(1404, 8, 24, 12, 30, 15, 0).unwrap();
/// assert_eq!(dt.to_string(), "2025-11-15 12:30:15");
/// assert_eq!(dt.hour(), 12);
/// ```
pub fn jalaali_to_date_time_hms_milli(
    jy: i32,
    jm: i32,
    jd: i32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
) -> Result<NaiveDateTime, JalaaliError> {
    let date = naive_date(to_gregorian(jy, jm, jd)?)?;
    date.and_hms_milli_opt(hour, minute, second, millisecond)
        .ok_or(JalaaliError::InvalidTime {
            hour,
            minute,
            second,
            millisecond,
        })
}

fn naive_date(date: GregorianDate) -> Result<NaiveDate, JalaaliError> {
    u32::try_from(date.gm)
        .ok()
        .zip(u32::try_from(date.gd).ok())
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(date.gy, month, day))
        .ok_or(JalaaliError::DateTimeOutOfRange {
            year:  date.gy,
            month: date.gm,
            day:   date.gd,
        })
}

impl TryFrom<NaiveDate> for JalaaliDate {
    type Error = JalaaliError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        to_jalaali_from(&date)
    }
}

impl TryFrom<JalaaliDate> for NaiveDate {
    type Error = JalaaliError;

    fn try_from(date: JalaaliDate) -> Result<Self, Self::Error> {
        naive_date(date.to_gregorian()?)
    }
}
