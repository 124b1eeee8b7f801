//! Break-point engine locating a Jalaali year within its leap cycle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::JalaaliError;
use crate::consts::{BREAKS, JALAALI_GREGORIAN_YEAR_OFFSET};
use crate::prelude::*;

/// Nominal length of a Jalaali leap cycle in years
const CYCLE_YEARS: i32 = 33;
/// Leap days in one full 33-year cycle
const CYCLE_LEAP_DAYS: i32 = 8;
/// Leap-day count at the first break point
const INITIAL_LEAP_DAYS: i32 = -14;
/// Day of March that the leap-day difference is measured from
const MARCH_BASE_DAY: i32 = 20;

/// Result of [`jal_cal`]: where a Jalaali year starts and where it sits in
/// its leap cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JalCalResult {
    /// Years since the last leap year (0..=4); 0 marks a leap year
    pub leap: i32,
    /// Gregorian year in which the Jalaali year begins
    pub gy: i32,
    /// Day of March (Gregorian) of 1 Farvardin
    pub march: i32,
}

impl JalCalResult {
    /// Returns true when the year has 366 days
    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.leap == 0
    }
}

/// Gregorian anchor of 1 Farvardin, as computed by [`jal_cal_without_leap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewYear {
    /// Gregorian year in which the Jalaali year begins
    pub gy: i32,
    /// Day of March (Gregorian) of 1 Farvardin
    pub march: i32,
}

/// Interval of the break table that contains a year.
struct Segment {
    /// Last break point not exceeding the year
    jp: i32,
    /// Distance from `jp` to the next break point
    jump: i32,
    /// Leap days accumulated over every fully-passed interval
    leap_j: i32,
}

/// Calendar engine over an ordered break-point table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BreakTable<'a> {
    breaks: &'a [i32],
}

/// The table the public API runs on.
pub(crate) const STANDARD: BreakTable<'static> = BreakTable::new(&BREAKS);

impl<'a> BreakTable<'a> {
    pub(crate) const fn new(breaks: &'a [i32]) -> Self {
        Self { breaks }
    }

    /// Splits the table after checking that it covers `jy`.
    fn bounds(&self, jy: i32) -> Result<(i32, &'a [i32]), JalaaliError> {
        let (&first, rest) = self
            .breaks
            .split_first()
            .ok_or(JalaaliError::EmptyBreakTable)?;
        let last = rest.last().copied().unwrap_or(first);
        if jy < first || jy >= last {
            debug!(jy, first, last, "Jalaali year outside the break-point table");
            return Err(JalaaliError::InvalidYear { year: jy });
        }
        Ok((first, rest))
    }

    /// Break interval `(jp, jump)` containing `jy`, without the leap-day sum.
    fn interval(&self, jy: i32) -> Result<(i32, i32), JalaaliError> {
        let (first, rest) = self.bounds(jy)?;
        let mut jp = first;
        for &next in rest {
            if jy < next {
                return Ok((jp, next - jp));
            }
            jp = next;
        }
        Ok((jp, 0))
    }

    fn locate(&self, jy: i32) -> Result<Segment, JalaaliError> {
        let (first, rest) = self.bounds(jy)?;

        let mut jp = first;
        let mut jump = 0;
        let mut leap_j = INITIAL_LEAP_DAYS;
        for &next in rest {
            jump = next - jp;
            if jy < next {
                break;
            }
            leap_j += div(jump, CYCLE_YEARS) * CYCLE_LEAP_DAYS + div(modulo(jump, CYCLE_YEARS), 4);
            jp = next;
        }

        Ok(Segment { jp, jump, leap_j })
    }

    /// Gregorian year and March day of 1 Farvardin of `jy`.
    pub(crate) fn new_year(&self, jy: i32) -> Result<NewYear, JalaaliError> {
        let segment = self.locate(jy)?;
        Ok(anchor(jy, &segment))
    }

    /// Full engine: anchor plus leap position.
    pub(crate) fn jal_cal(&self, jy: i32) -> Result<JalCalResult, JalaaliError> {
        let segment = self.locate(jy)?;
        let NewYear { gy, march } = anchor(jy, &segment);
        let leap = leap_position(segment.jump, jy - segment.jp);
        Ok(JalCalResult { leap, gy, march })
    }

    /// Leap position only, skipping the leap-day sum and the March anchor.
    pub(crate) fn leap(&self, jy: i32) -> Result<i32, JalaaliError> {
        let (jp, jump) = self.interval(jy)?;
        Ok(leap_position(jump, jy - jp))
    }
}

fn anchor(jy: i32, segment: &Segment) -> NewYear {
    let n = jy - segment.jp;
    let jump = segment.jump;

    // Leap days from AD 621 to the start of jy, Jalaali side.
    let mut leap_j = segment.leap_j + div(n, CYCLE_YEARS) * CYCLE_LEAP_DAYS
        + div(modulo(n, CYCLE_YEARS) + 3, 4);
    if modulo(jump, CYCLE_YEARS) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Same count on the Gregorian side, up to gy.
    let gy = jy + JALAALI_GREGORIAN_YEAR_OFFSET;
    let leap_g = div(gy, 4) - div((div(gy, 100) + 1) * 3, 4) - 150;

    NewYear {
        gy,
        march: MARCH_BASE_DAY + leap_j - leap_g,
    }
}

fn leap_position(jump: i32, n: i32) -> i32 {
    // Years close to the next break count from the following cycle.
    let n = if jump - n < 6 {
        n - jump + div(jump + 4, CYCLE_YEARS) * CYCLE_YEARS
    } else {
        n
    };
    match modulo(modulo(n + 1, CYCLE_YEARS) - 1, 4) {
        -1 => 4,
        leap => leap,
    }
}

/// Determines whether Jalaali year `jy` is leap and on which day of March
/// (Gregorian) its first day falls.
///
/// # Errors
/// Returns `JalaaliError::InvalidYear` if `jy` is outside
/// `MIN_JALAALI_YEAR..=MAX_JALAALI_YEAR`.
///
/// # Example
///
/// ```
/// use jalaali::{jal_cal, JalCalResult};
///
/// let r = jal_cal(1404).unwrap();
/// assert_eq!(r, JalCalResult { leap: 1, gy: 2025, march: 21 });
/// ```
pub fn jal_cal(jy: i32) -> Result<JalCalResult, JalaaliError> {
    STANDARD.jal_cal(jy)
}

/// Same as [`jal_cal`] without the leap position.
///
/// # Errors
/// Returns `JalaaliError::InvalidYear` if `jy` is outside the supported range.
pub fn jal_cal_without_leap(jy: i32) -> Result<NewYear, JalaaliError> {
    STANDARD.new_year(jy)
}
