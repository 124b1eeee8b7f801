//! # jalaali
//!
//! Conversion between the Jalaali (Persian) solar calendar and the proleptic
//! Gregorian calendar.
//!
//! Every conversion pivots through a Julian Day Number (JDN):
//!
//! ```text
//! (gy, gm, gd) --g2d--> JDN --d2j--> (jy, jm, jd)
//! (gy, gm, gd) <--d2g-- JDN <--j2d-- (jy, jm, jd)
//! ```
//!
//! Jalaali leap years follow an empirically observed, nearly 33-year cycle
//! whose irregularities are captured by the [`BREAKS`] table; [`jal_cal`]
//! locates a year within it. Supported Jalaali years are
//! [`MIN_JALAALI_YEAR`]`..=`[`MAX_JALAALI_YEAR`].
//!
//! ## Quick Start
//!
//! ```
//! use jalaali::{to_gregorian, to_jalaali, GregorianDate, JalaaliDate};
//!
//! let j = to_jalaali(2025, 11, 15).unwrap();
//! assert_eq!(j, JalaaliDate { jy: 1404, jm: 8, jd: 24 });
//!
//! let g = to_gregorian(1404, 8, 24).unwrap();
//! assert_eq!(g, GregorianDate { gy: 2025, gm: 11, gd: 15 });
//!
//! assert!(jalaali::is_leap_jalaali_year(1403).unwrap());
//! assert_eq!(jalaali::jalaali_month_length(1404, 12).unwrap(), 29);
//! ```

mod calendar;
mod consts;
mod datetime;
mod julian;
mod math;
mod prelude;
mod types;
mod week;

pub use calendar::{JalCalResult, NewYear, jal_cal, jal_cal_without_leap};
pub use consts::*;
pub use datetime::{jalaali_to_date_time, jalaali_to_date_time_hms_milli, to_jalaali_from};
pub use julian::{d2g, d2j, g2d, j2d};
pub use types::{GregorianDate, JalaaliDate, ParseError};
pub use week::{JalaaliWeek, WeekError, jalaali_week};

use tracing::debug;

/// Error type for calendar computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JalaaliError {
    /// Jalaali year outside the break-point table.
    #[error("Invalid Jalaali year {year}")]
    InvalidYear { year: i32 },

    /// A Gregorian year was given without its month or day.
    #[error("Gregorian month and Gregorian day are required")]
    MissingMonthOrDay,

    /// The break-point table has no entries.
    #[error("break-point table cannot be empty")]
    EmptyBreakTable,

    /// Month outside 1..=12.
    #[error("Invalid month: {month} (must be 1-12)")]
    InvalidMonth { month: i32 },

    /// Time of day out of range.
    #[error("Invalid time: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour:        u32,
        minute:      u32,
        second:      u32,
        millisecond: u32,
    },

    /// Gregorian date outside the range `chrono` can represent.
    #[error("Date {year}-{month:02}-{day:02} cannot be represented as a date-time")]
    DateTimeOutOfRange { year: i32, month: i32, day: i32 },

    /// Date whose Julian Day Number does not fit in `i32`.
    #[error("Date {year}-{month:02}-{day:02} is outside the Julian Day Number range")]
    JdnOutOfRange { year: i32, month: i32, day: i32 },
}

/// Converts a Gregorian date to a Jalaali date.
///
/// # Errors
/// Returns `JalaaliError::InvalidYear` if the date maps outside the supported
/// range and `JalaaliError::JdnOutOfRange` if its day count overflows `i32`.
///
/// # Example
///
/// ```
/// use jalaali::{to_jalaali, JalaaliDate};
///
/// assert_eq!(to_jalaali(2025, 11, 15).unwrap(), JalaaliDate { jy: 1404, jm: 8, jd: 24 });
/// ```
pub fn to_jalaali(gy: i32, gm: i32, gd: i32) -> Result<JalaaliDate, JalaaliError> {
    d2j(g2d(gy, gm, gd)?)
}

/// Converts Gregorian columns where month and day may be absent.
///
/// A month or day of 0 counts as absent.
///
/// # Errors
/// Returns `JalaaliError::MissingMonthOrDay` unless both month and day are
/// present and non-zero, then the errors of [`to_jalaali`].
pub fn to_jalaali_from_columns(
    gy: i32,
    gm: Option<i32>,
    gd: Option<i32>,
) -> Result<JalaaliDate, JalaaliError> {
    match (gm, gd) {
        (Some(gm), Some(gd)) if gm != 0 && gd != 0 => to_jalaali(gy, gm, gd),
        _ => {
            debug!(gy, ?gm, ?gd, "Gregorian conversion without month or day");
            Err(JalaaliError::MissingMonthOrDay)
        },
    }
}

/// Converts a Jalaali date to a Gregorian date.
///
/// # Errors
/// Returns `JalaaliError::InvalidYear` if `jy` is outside the supported range.
pub fn to_gregorian(jy: i32, jm: i32, jd: i32) -> Result<GregorianDate, JalaaliError> {
    Ok(d2g(j2d(jy, jm, jd)?))
}

/// Checks whether the given Jalaali date is valid.
///
/// # Example
///
/// ```
/// assert!(jalaali::is_valid_jalaali_date(1404, 8, 24));
/// assert!(!jalaali::is_valid_jalaali_date(1404, 13, 1));
/// assert!(!jalaali::is_valid_jalaali_date(5000, 1, 1));
/// ```
pub fn is_valid_jalaali_date(jy: i32, jm: i32, jd: i32) -> bool {
    (MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR).contains(&jy)
        && (FARVARDIN..=ESFAND).contains(&jm)
        && jalaali_month_length(jy, jm).is_ok_and(|len| (MIN_DAY..=len).contains(&jd))
}

/// Checks whether a Jalaali year is leap (366 days).
///
/// # Errors
/// Returns `JalaaliError::InvalidYear` if `jy` is outside the supported range.
pub fn is_leap_jalaali_year(jy: i32) -> Result<bool, JalaaliError> {
    Ok(calendar::STANDARD.leap(jy)? == 0)
}

/// Returns the number of days in a Jalaali month.
///
/// # Errors
/// Returns `JalaaliError::InvalidMonth` for a month outside 1..=12 and
/// `JalaaliError::InvalidYear` when Esfand's length is asked of a year outside
/// the supported range.
pub fn jalaali_month_length(jy: i32, jm: i32) -> Result<i32, JalaaliError> {
    match jm {
        FARVARDIN..=SHAHRIVAR => Ok(FIRST_HALF_MONTH_DAYS),
        MEHR..=BAHMAN => Ok(SECOND_HALF_MONTH_DAYS),
        ESFAND if is_leap_jalaali_year(jy)? => Ok(ESFAND_DAYS_LEAP),
        ESFAND => Ok(ESFAND_DAYS),
        _ => Err(JalaaliError::InvalidMonth { month: jm }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_jalaali() {
        assert_eq!(
            to_jalaali(2025, 11, 15).unwrap(),
            JalaaliDate { jy: 1404, jm: 8, jd: 24 }
        );
        assert_eq!(
            to_jalaali(2025, 3, 21).unwrap(),
            JalaaliDate { jy: 1404, jm: 1, jd: 1 }
        );
        assert_eq!(
            to_jalaali(1979, 2, 11).unwrap(),
            JalaaliDate { jy: 1357, jm: 11, jd: 22 }
        );
    }

    #[test]
    fn test_to_gregorian() {
        assert_eq!(
            to_gregorian(1404, 8, 24).unwrap(),
            GregorianDate { gy: 2025, gm: 11, gd: 15 }
        );
        assert_eq!(
            to_gregorian(1403, 12, 30).unwrap(),
            GregorianDate { gy: 2025, gm: 3, gd: 20 }
        );
        assert_eq!(
            to_gregorian(1399, 12, 30).unwrap(),
            GregorianDate { gy: 2021, gm: 3, gd: 20 }
        );
    }

    #[test]
    fn test_reversible() {
        let g = GregorianDate { gy: 2025, gm: 11, gd: 15 };
        let j = to_jalaali(g.gy, g.gm, g.gd).unwrap();
        assert_eq!(to_gregorian(j.jy, j.jm, j.jd).unwrap(), g);
    }

    #[test]
    fn test_to_jalaali_from_columns() {
        assert_eq!(
            to_jalaali_from_columns(2025, Some(11), Some(15)).unwrap(),
            JalaaliDate { jy: 1404, jm: 8, jd: 24 }
        );
        assert_eq!(
            to_jalaali_from_columns(2025, None, None),
            Err(JalaaliError::MissingMonthOrDay)
        );
        assert_eq!(
            to_jalaali_from_columns(2025, Some(11), None),
            Err(JalaaliError::MissingMonthOrDay)
        );
        assert_eq!(
            to_jalaali_from_columns(2025, None, Some(15)),
            Err(JalaaliError::MissingMonthOrDay)
        );
    }

    #[test]
    fn test_to_jalaali_from_columns_zero_is_missing() {
        assert_eq!(
            to_jalaali_from_columns(2025, Some(0), Some(15)),
            Err(JalaaliError::MissingMonthOrDay)
        );
        assert_eq!(
            to_jalaali_from_columns(2025, Some(11), Some(0)),
            Err(JalaaliError::MissingMonthOrDay)
        );
        assert_eq!(
            to_jalaali_from_columns(2025, Some(0), Some(0)),
            Err(JalaaliError::MissingMonthOrDay)
        );
    }

    #[test]
    fn test_conversion_errors() {
        assert_eq!(
            to_gregorian(4000, 1, 1),
            Err(JalaaliError::InvalidYear { year: 4000 })
        );
        assert_eq!(
            to_jalaali(5000, 1, 1),
            Err(JalaaliError::InvalidYear { year: 4379 })
        );
    }

    #[test]
    fn test_far_future_dates_are_errors() {
        assert_eq!(
            to_jalaali(2_000_000, 1, 1),
            Err(JalaaliError::InvalidYear { year: 1_999_379 })
        );
        assert_eq!(
            to_jalaali(i32::MAX, 1, 1),
            Err(JalaaliError::JdnOutOfRange { year: i32::MAX, month: 1, day: 1 })
        );
        assert_eq!(
            to_gregorian(1404, 8, i32::MAX),
            Err(JalaaliError::JdnOutOfRange { year: 1404, month: 8, day: i32::MAX })
        );
        assert!(!is_valid_jalaali_date(1404, 8, i32::MAX));
    }

    #[test]
    fn test_is_valid_jalaali_date() {
        assert!(is_valid_jalaali_date(1404, 8, 24));
        assert!(is_valid_jalaali_date(1403, 12, 30));
        assert!(is_valid_jalaali_date(-61, 1, 1));
        assert!(is_valid_jalaali_date(3177, 12, 29));

        assert!(!is_valid_jalaali_date(1404, 13, 1));
        assert!(!is_valid_jalaali_date(1404, 0, 1));
        assert!(!is_valid_jalaali_date(5000, 1, 1));
        assert!(!is_valid_jalaali_date(-62, 1, 1));
        assert!(!is_valid_jalaali_date(3178, 1, 1));
        assert!(!is_valid_jalaali_date(1404, 12, 30));
        assert!(!is_valid_jalaali_date(1404, 7, 31));
        assert!(!is_valid_jalaali_date(1404, 1, 0));
        assert!(!is_valid_jalaali_date(1404, 1, 32));
    }

    #[test]
    fn test_is_leap_jalaali_year() {
        assert!(!is_leap_jalaali_year(1404).unwrap());
        assert!(is_leap_jalaali_year(1403).unwrap());
        assert!(is_leap_jalaali_year(1399).unwrap());
        assert!(is_leap_jalaali_year(1408).unwrap());
        assert_eq!(
            is_leap_jalaali_year(3178),
            Err(JalaaliError::InvalidYear { year: 3178 })
        );
    }

    #[test]
    fn test_jalaali_month_length() {
        assert_eq!(jalaali_month_length(1404, 1).unwrap(), 31);
        assert_eq!(jalaali_month_length(1404, 6).unwrap(), 31);
        assert_eq!(jalaali_month_length(1404, 7).unwrap(), 30);
        assert_eq!(jalaali_month_length(1404, 11).unwrap(), 30);
        assert_eq!(jalaali_month_length(1404, 12).unwrap(), 29);
        assert_eq!(jalaali_month_length(1403, 12).unwrap(), 30);
        assert_eq!(
            jalaali_month_length(1404, 13),
            Err(JalaaliError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            jalaali_month_length(1404, 0),
            Err(JalaaliError::InvalidMonth { month: 0 })
        );
        // Fixed-length months never consult the year.
        assert_eq!(jalaali_month_length(9999, 3).unwrap(), 31);
    }

    #[test]
    fn test_month_length_bounds_every_year() {
        for jy in MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR {
            let leap = is_leap_jalaali_year(jy).unwrap();
            for jm in 1..=12 {
                let len = jalaali_month_length(jy, jm).unwrap();
                let expected = match jm {
                    1..=6 => 31,
                    7..=11 => 30,
                    _ if leap => 30,
                    _ => 29,
                };
                assert_eq!(len, expected, "{jy}-{jm:02}");
            }
            assert_eq!(leap, jalaali_month_length(jy, 12).unwrap() == 30, "year {jy}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            JalaaliError::InvalidYear { year: -100 }.to_string(),
            "Invalid Jalaali year -100"
        );
        assert_eq!(
            JalaaliError::MissingMonthOrDay.to_string(),
            "Gregorian month and Gregorian day are required"
        );
        assert_eq!(
            JalaaliError::EmptyBreakTable.to_string(),
            "break-point table cannot be empty"
        );
        assert_eq!(
            JalaaliError::InvalidMonth { month: 13 }.to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            JalaaliError::InvalidTime {
                hour:        25,
                minute:      0,
                second:      7,
                millisecond: 5,
            }
            .to_string(),
            "Invalid time: 25:00:07.005"
        );
        assert_eq!(
            JalaaliError::JdnOutOfRange { year: 5_874_898, month: 6, day: 4 }.to_string(),
            "Date 5874898-06-04 is outside the Julian Day Number range"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<JalaaliError>();
        assert_impl::<ParseError>();
        assert_impl::<WeekError>();
    }

    #[test]
    fn test_constants() {
        assert_eq!(MIN_JALAALI_YEAR, -61);
        assert_eq!(MAX_JALAALI_YEAR, 3177);
        assert!(BREAKS.windows(2).all(|w| w[0] < w[1]), "break table must be ascending");
    }
}
