//! Julian Day Number conversions for both calendars.
//!
//! Every calendar-to-calendar conversion in the crate pivots through a JDN:
//! `g2d`/`d2g` handle the proleptic Gregorian side with closed-form
//! arithmetic, `j2d`/`d2j` layer the break-point engine on top of them.
//! The formulas run in `i64`; a day count that does not fit back into `i32`
//! is reported as `JalaaliError::JdnOutOfRange`.

use tracing::{debug, trace};

use crate::calendar::STANDARD;
use crate::consts::{
    FIRST_HALF_MONTH_DAYS, JALAALI_GREGORIAN_YEAR_OFFSET, MEHR, SECOND_HALF_MONTH_DAYS, SHAHRIVAR,
};
use crate::prelude::*;
use crate::{GregorianDate, JalaaliDate, JalaaliError};

/// Year shift keeping every intermediate positive back to 1 March -100100
const YEAR_SHIFT: i64 = 100_100;
/// Days in a four-year Julian block
const DAYS_PER_4_YEARS: i64 = 1461;
/// Days in a 400-year Gregorian block
const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in the five-month March..July group
const DAYS_PER_5_MONTHS: i64 = 153;
/// Gregorian March, the month every Jalaali year starts in
const MARCH: i32 = 3;
/// Days in the first six Jalaali months
const FIRST_HALF_DAYS: i32 = SHAHRIVAR * FIRST_HALF_MONTH_DAYS;
/// Days from 1 Mehr to the end of a common year
const PREVIOUS_YEAR_SHIFT: i32 = 179;

/// Narrows a day count back to `i32`, naming the date it was computed from.
fn narrow(jdn: i64, year: i32, month: i32, day: i32) -> Result<i32, JalaaliError> {
    i32::try_from(jdn).map_err(|_| {
        debug!(jdn, year, month, day, "Julian Day Number does not fit in i32");
        JalaaliError::JdnOutOfRange { year, month, day }
    })
}

/// Calculates the Julian Day Number of a proleptic Gregorian date.
///
/// The number corresponds to noon UT of the date. The formula holds from
/// 1 March -100100 onward; the result fits in `i32` up to 3 June 5874898.
///
/// # Errors
/// Returns `JalaaliError::JdnOutOfRange` when the day count does not fit in
/// `i32`.
///
/// # Example
///
/// ```
/// assert_eq!(jalaali::g2d(2025, 11, 15).unwrap(), 2460995);
/// assert_eq!(jalaali::g2d(2000, 1, 1).unwrap(), 2451545);
/// ```
pub fn g2d(gy: i32, gm: i32, gd: i32) -> Result<i32, JalaaliError> {
    let (year, month) = (i64::from(gy), i64::from(gm));
    let d = div_wide((year + div_wide(month - 8, 6) + YEAR_SHIFT) * DAYS_PER_4_YEARS, 4)
        + div_wide(DAYS_PER_5_MONTHS * modulo_wide(month + 9, 12) + 2, 5)
        + i64::from(gd)
        - 34_840_408;
    // Remove the Julian leap days the Gregorian calendar skips.
    let jdn = d - div_wide(div_wide(year + YEAR_SHIFT + div_wide(month - 8, 6), 100) * 3, 4) + 752;
    narrow(jdn, gy, gm, gd)
}

/// Calculates the proleptic Gregorian date of a Julian Day Number.
///
/// Valid from `jdn = -34839655` (year -100100) onward.
///
/// # Example
///
/// ```
/// use jalaali::{d2g, GregorianDate};
///
/// assert_eq!(d2g(2460995), GregorianDate { gy: 2025, gm: 11, gd: 15 });
/// ```
// An i32 day count spans under six million years, so every field fits in i32.
#[allow(clippy::cast_possible_truncation)]
pub fn d2g(jdn: i32) -> GregorianDate {
    let jdn = i64::from(jdn);
    let mut j = 4 * jdn + 139_361_631;
    j = j + div_wide(div_wide(4 * jdn + 183_187_720, DAYS_PER_400_YEARS) * 3, 4) * 4 - 3908;
    let i = div_wide(modulo_wide(j, DAYS_PER_4_YEARS), 4) * 5 + 308;
    let gd = div_wide(modulo_wide(i, DAYS_PER_5_MONTHS), 5) + 1;
    let gm = modulo_wide(div_wide(i, DAYS_PER_5_MONTHS), 12) + 1;
    let gy = div_wide(j, DAYS_PER_4_YEARS) - YEAR_SHIFT + div_wide(8 - gm, 6);
    GregorianDate {
        gy: gy as i32,
        gm: gm as i32,
        gd: gd as i32,
    }
}

/// Converts a Jalaali date to a Julian Day Number.
///
/// Month and day are not range-checked: a day past the end of its month
/// rolls forward through the day count.
///
/// # Errors
/// Returns `JalaaliError::InvalidYear` if `jy` is outside the supported range
/// and `JalaaliError::JdnOutOfRange` if the rolled-over day count does not
/// fit in `i32`.
///
/// # Example
///
/// ```
/// assert_eq!(jalaali::j2d(1404, 8, 24).unwrap(), 2460995);
/// ```
pub fn j2d(jy: i32, jm: i32, jd: i32) -> Result<i32, JalaaliError> {
    let new_year = STANDARD.new_year(jy)?;
    let (month, mehr) = (i64::from(jm), i64::from(MEHR));
    let jdn = i64::from(g2d(new_year.gy, MARCH, new_year.march)?)
        + (month - 1) * i64::from(FIRST_HALF_MONTH_DAYS)
        - div_wide(month, mehr) * (month - mehr)
        + i64::from(jd)
        - 1;
    narrow(jdn, jy, jm, jd)
}

/// Converts a Julian Day Number to a Jalaali date.
///
/// # Errors
/// Returns `JalaaliError::InvalidYear` if the Gregorian year of `jdn` maps to
/// a Jalaali year outside the supported range.
///
/// # Example
///
/// ```
/// use jalaali::{d2j, JalaaliDate};
///
/// assert_eq!(d2j(2460995).unwrap(), JalaaliDate { jy: 1404, jm: 8, jd: 24 });
/// ```
pub fn d2j(jdn: i32) -> Result<JalaaliDate, JalaaliError> {
    let gy = d2g(jdn).gy;
    let mut jy = gy - JALAALI_GREGORIAN_YEAR_OFFSET;
    let r = STANDARD.jal_cal(jy)?;
    let jdn1f = g2d(gy, MARCH, r.march)?;

    // Days since 1 Farvardin.
    let mut k = jdn - jdn1f;
    if k >= 0 {
        if k < FIRST_HALF_DAYS {
            return Ok(JalaaliDate {
                jy,
                jm: 1 + div(k, FIRST_HALF_MONTH_DAYS),
                jd: modulo(k, FIRST_HALF_MONTH_DAYS) + 1,
            });
        }
        k -= FIRST_HALF_DAYS;
    } else {
        trace!(jdn, jy, "date precedes 1 Farvardin, using previous Jalaali year");
        jy -= 1;
        k += PREVIOUS_YEAR_SHIFT;
        if r.leap == 1 {
            k += 1;
        }
    }

    Ok(JalaaliDate {
        jy,
        jm: MEHR + div(k, SECOND_HALF_MONTH_DAYS),
        jd: modulo(k, SECOND_HALF_MONTH_DAYS) + 1,
    })
}
