//! UTC calendar utilities.
//! - vesting runs on whole elapsed days: floor((now - start) / 86400)
//! - monthly burns run during the last UTC day of a calendar month
//! - a burn period is identified by year * 12 + (month - 1)

use crate::constants::SECONDS_PER_DAY;
use crate::error::TreasuryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: i32,  // e.g. 2026
    pub month: u32, // 1-12
    pub day: u32,   // 1-31
    pub sod: u32,   // seconds of day [0, 86399]
}

/// Whole days elapsed since `start_ts`. Negative before start (floored, so
/// one second before start is day -1).
pub fn elapsed_days(now_ts: i64, start_ts: i64) -> Result<i64, TreasuryError> {
    let delta = now_ts
        .checked_sub(start_ts)
        .ok_or(TreasuryError::MathOverflow)?;
    Ok(delta.div_euclid(SECONDS_PER_DAY))
}

/// Timestamp of `start_ts` shifted by `offset_days` whole days.
pub fn day_offset_ts(start_ts: i64, offset_days: u32) -> Result<i64, TreasuryError> {
    (offset_days as i64)
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| start_ts.checked_add(secs))
        .ok_or(TreasuryError::MathOverflow)
}

/// Calendar month identifier for burn bookkeeping.
pub fn month_period(ts: i64) -> Result<u32, TreasuryError> {
    let dt = datetime_from_unix(ts)?;
    let period = (dt.year as i64)
        .checked_mul(12)
        .and_then(|p| p.checked_add(dt.month as i64 - 1))
        .ok_or(TreasuryError::MathOverflow)?;
    u32::try_from(period).map_err(|_| TreasuryError::MathOverflow)
}

pub fn is_last_day_of_month(ts: i64) -> Result<bool, TreasuryError> {
    let dt = datetime_from_unix(ts)?;
    Ok(dt.day == days_in_month(dt.year, dt.month)?)
}

/// Whole days left in the current month (0 on the last day).
pub fn days_until_month_end(ts: i64) -> Result<u32, TreasuryError> {
    let dt = datetime_from_unix(ts)?;
    Ok(days_in_month(dt.year, dt.month)? - dt.day)
}

/// 00:00:00 UTC of the last day of the month containing `ts`.
/// The burn window is open iff `burn_window_start(ts) <= ts`.
pub fn burn_window_start(ts: i64) -> Result<i64, TreasuryError> {
    let dt = datetime_from_unix(ts)?;
    unix_from_datetime(DateTimeUtc {
        year: dt.year,
        month: dt.month,
        day: days_in_month(dt.year, dt.month)?,
        sod: 0,
    })
}

fn datetime_from_unix(ts: i64) -> Result<DateTimeUtc, TreasuryError> {
    // Pre-epoch timestamps never occur on-chain.
    if ts < 0 {
        return Err(TreasuryError::InvalidTimestamp);
    }
    let days = ts / SECONDS_PER_DAY;
    let sod = (ts % SECONDS_PER_DAY) as u32;
    let (y, m, d) = civil_from_days(days);
    Ok(DateTimeUtc {
        year: y,
        month: m,
        day: d,
        sod,
    })
}

fn unix_from_datetime(dt: DateTimeUtc) -> Result<i64, TreasuryError> {
    if dt.sod >= 86_400 {
        return Err(TreasuryError::InvalidTimestamp);
    }
    let days = days_from_civil(dt.year, dt.month, dt.day)?;
    days.checked_mul(SECONDS_PER_DAY)
        .ok_or(TreasuryError::MathOverflow)?
        .checked_add(dt.sod as i64)
        .ok_or(TreasuryError::MathOverflow)
}

fn days_in_month(year: i32, month: u32) -> Result<u32, TreasuryError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        _ => Err(TreasuryError::InvalidTimestamp),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Proleptic Gregorian conversion: days from civil date.
/// Algorithm by Howard Hinnant (public domain).
fn days_from_civil(y: i32, m: u32, d: u32) -> Result<i64, TreasuryError> {
    if !(1..=12).contains(&m) || d == 0 || d > 31 {
        return Err(TreasuryError::InvalidTimestamp);
    }
    let y = y as i64 - if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 }.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = m as i64 + if m > 2 { -3 } else { 9 }; // [0, 11]
    let doy = (153 * mp + 2).div_euclid(5) + (d as i64) - 1; // [0, 365]
    let doe = yoe * 365 + yoe.div_euclid(4) - yoe.div_euclid(100) + doy; // [0, 146096]
    Ok(era * 146097 + doe - 719468) // days since 1970-01-01
}

/// Proleptic Gregorian conversion: civil date from days since epoch.
/// Algorithm by Howard Hinnant (public domain).
fn civil_from_days(z: i64) -> (i32, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 }.div_euclid(146097);
    let doe = z - era * 146097; // [0, 146096]
    let yoe = (doe - doe.div_euclid(1460) + doe.div_euclid(36524) - doe.div_euclid(146096))
        .div_euclid(365); // [0, 399]
    let y = (yoe + era * 400) as i32;
    let doy = doe - (365 * yoe + yoe.div_euclid(4) - yoe.div_euclid(100)); // [0, 365]
    let mp = (5 * doy + 2).div_euclid(153); // [0, 11]
    let d = (doy - (153 * mp + 2).div_euclid(5) + 1) as u32; // [1, 31]
    let m = (mp + if mp < 10 { 3 } else { -9 }) as u32; // [1, 12]
    let y = y + if m <= 2 { 1 } else { 0 };
    (y, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, sod: u32) -> i64 {
        unix_from_datetime(DateTimeUtc {
            year: y,
            month: m,
            day: d,
            sod,
        })
        .unwrap()
    }

    #[test]
    fn civil_round_trip_known_dates() {
        assert_eq!(ts(1970, 1, 1, 0), 0);
        assert_eq!(ts(2024, 2, 29, 0), 1_709_164_800);
        assert_eq!(datetime_from_unix(1_709_164_800 + 5).unwrap().day, 29);
    }

    #[test]
    fn elapsed_days_floors_partial_days() {
        let start = ts(2026, 4, 11, 12 * 3600);
        assert_eq!(elapsed_days(start, start).unwrap(), 0);
        assert_eq!(elapsed_days(start + SECONDS_PER_DAY - 1, start).unwrap(), 0);
        assert_eq!(elapsed_days(start + SECONDS_PER_DAY, start).unwrap(), 1);
        // Before start floors toward negative infinity.
        assert_eq!(elapsed_days(start - 1, start).unwrap(), -1);
        assert_eq!(elapsed_days(start - SECONDS_PER_DAY - 1, start).unwrap(), -2);
    }

    #[test]
    fn day_offset_is_whole_days() {
        let start = ts(2026, 1, 30, 3600);
        assert_eq!(day_offset_ts(start, 0).unwrap(), start);
        assert_eq!(day_offset_ts(start, 30).unwrap(), ts(2026, 3, 1, 3600));
        assert!(day_offset_ts(i64::MAX - 10, 1).is_err());
    }

    #[test]
    fn last_day_of_month_leap_and_common_years() {
        assert!(is_last_day_of_month(ts(2024, 2, 29, 0)).unwrap());
        assert!(!is_last_day_of_month(ts(2024, 2, 28, 86_399)).unwrap());
        assert!(is_last_day_of_month(ts(2026, 2, 28, 43_200)).unwrap());
        assert!(is_last_day_of_month(ts(2026, 12, 31, 86_399)).unwrap());
        assert!(!is_last_day_of_month(ts(2027, 1, 1, 0)).unwrap());
        assert!(is_last_day_of_month(ts(2026, 4, 30, 0)).unwrap());
    }

    #[test]
    fn days_until_month_end_counts_down() {
        assert_eq!(days_until_month_end(ts(2026, 4, 1, 0)).unwrap(), 29);
        assert_eq!(days_until_month_end(ts(2026, 4, 30, 0)).unwrap(), 0);
        assert_eq!(days_until_month_end(ts(2100, 2, 1, 0)).unwrap(), 27);
    }

    #[test]
    fn burn_window_opens_at_midnight_of_last_day() {
        let now = ts(2026, 10, 19, 1234);
        let window = burn_window_start(now).unwrap();
        assert_eq!(window, ts(2026, 10, 31, 0));
        assert!(window > now);

        let last_day = ts(2026, 10, 31, 60);
        assert!(burn_window_start(last_day).unwrap() <= last_day);
    }

    #[test]
    fn month_period_changes_at_month_boundary() {
        let jan_end = ts(2026, 1, 31, 86_399);
        let feb_start = jan_end + 1;
        assert_eq!(month_period(jan_end).unwrap() + 1, month_period(feb_start).unwrap());
        // December to January rolls the year.
        assert_eq!(
            month_period(ts(2026, 12, 31, 0)).unwrap() + 1,
            month_period(ts(2027, 1, 1, 0)).unwrap()
        );
    }

    #[test]
    fn negative_timestamp_rejected() {
        assert!(matches!(
            month_period(-1),
            Err(TreasuryError::InvalidTimestamp)
        ));
    }
}
