/// Jalaali years at which the leap cycle deviates from the nominal 33-year
/// pattern. The last entry is the first year past the supported range.
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Earliest supported Jalaali year (inclusive)
pub const MIN_JALAALI_YEAR: i32 = BREAKS[0];

/// Latest supported Jalaali year (inclusive)
pub const MAX_JALAALI_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Gregorian year in which Jalaali year 0 begins
pub const JALAALI_GREGORIAN_YEAR_OFFSET: i32 = 621;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;

/// Month number for Farvardin
pub const FARVARDIN: i32 = 1;
/// Month number for Shahrivar, the last 31-day month
pub const SHAHRIVAR: i32 = 6;
/// Month number for Mehr, the first 30-day month
pub const MEHR: i32 = 7;
/// Month number for Bahman, the last fixed 30-day month
pub const BAHMAN: i32 = 11;
/// Month number for Esfand
pub const ESFAND: i32 = 12;

/// Days in each of the first six Jalaali months
pub const FIRST_HALF_MONTH_DAYS: i32 = 31;
/// Days in months 7 through 11
pub const SECOND_HALF_MONTH_DAYS: i32 = 30;
/// Days in Esfand of a common year
pub const ESFAND_DAYS: i32 = 29;
/// Days in Esfand of a leap year
pub const ESFAND_DAYS_LEAP: i32 = 30;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month number for February
pub(crate) const FEBRUARY: i32 = 2;
/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two bounds of a week (`saturday/friday`)
pub const WEEK_SEPARATOR: char = '/';
