//! Time/Calendar (spec.md §4.1, component C1).
//!
//! Civil date x IANA zone <-> Julian Day (UTC) conversion, built on
//! `chrono`/`chrono_tz` rather than a hand-rolled zone table — every
//! example in the retrieved corpus that touches civil time reaches for
//! `chrono`. The JD reduction itself follows the Meeus algorithm as
//! implemented in `dra8an-hindu-calendar`'s `ephemeris::julian_day`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::error::{PanchangError, PanchangResult};

/// Julian Day number of a UTC civil instant (Meeus, *Astronomical
/// Algorithms*, ch. 7).
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * (y + 4716) as f64).floor()
        + (30.6001 * (m + 1) as f64).floor()
        + day as f64
        + hour / 24.0
        + b as f64
        - 1524.5
}

/// Inverse of [`julian_day`]: returns `(year, month, day, hour_fraction)`.
pub fn from_julian_day(jd: f64) -> (i32, u32, u32, f64) {
    let jd2 = jd + 0.5;
    let z = jd2.floor();
    let f = jd2 - z;
    let a = if z < 2299161.0 {
        z
    } else {
        let alpha = ((z - 1867216.25) / 36524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day_f = b - d - (30.6001 * e).floor() + f;
    let day = day_f.floor() as u32;
    let hour = (day_f - day as f64) * 24.0;
    let month = if e < 14.0 { e as i32 - 1 } else { e as i32 - 13 };
    let year = if month > 2 { c as i32 - 4716 } else { c as i32 - 4715 };
    (year, month as u32, day, hour)
}

/// Parses `dateStr` (`YYYY-MM-DD`) as local midnight in `zone`, converts
/// to UTC, and returns the corresponding Julian Day.
pub fn to_jd(date_str: &str, zone: &str) -> PanchangResult<f64> {
    let tz = parse_zone(zone)?;
    let naive_date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| PanchangError::invalid_input(format!("invalid date '{date_str}': {e}")))?;
    let naive = NaiveDateTime::new(naive_date, chrono::NaiveTime::MIN);
    let zoned = tz
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| PanchangError::invalid_input(format!("ambiguous local midnight for '{date_str}' in {zone}")))?;
    let utc = zoned.naive_utc();
    Ok(julian_day(
        utc.year(),
        utc.month(),
        utc.day(),
        utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0,
    ))
}

/// `startOfDay(date, zone)`: identical to `to_jd`, named separately to
/// mirror spec.md's C1 contract surface.
pub fn start_of_day(date_str: &str, zone: &str) -> PanchangResult<f64> {
    to_jd(date_str, zone)
}

/// Converts a UTC Julian Day to the zoned civil `(year, month, day, hour,
/// minute, second)` in `zone`.
pub fn from_jd(jd: f64, zone: &str) -> PanchangResult<(i32, u32, u32, u32, u32, u32)> {
    let tz = parse_zone(zone)?;
    let (year, month, day, hour_frac) = from_julian_day(jd);
    let total_seconds = (hour_frac * 3600.0).round() as i64;
    let naive_date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| PanchangError::invalid_input("JD reduced to an impossible calendar date"))?;
    let naive = NaiveDateTime::new(naive_date, chrono::NaiveTime::MIN)
        + chrono::Duration::seconds(total_seconds);
    let utc = chrono::Utc.from_utc_datetime(&naive);
    let local = utc.with_timezone(&tz);
    Ok((
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute(),
        local.second(),
    ))
}

pub fn weekday_index(date_str: &str, zone: &str) -> PanchangResult<u32> {
    let tz = parse_zone(zone)?;
    let naive_date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| PanchangError::invalid_input(format!("invalid date '{date_str}': {e}")))?;
    let naive = NaiveDateTime::new(naive_date, chrono::NaiveTime::MIN);
    let zoned = tz
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| PanchangError::invalid_input(format!("ambiguous local midnight for '{date_str}' in {zone}")))?;
    // chrono's Weekday numbers from Monday=0; spec.md wants 0=Sunday.
    Ok((zoned.weekday().num_days_from_sunday()) as u32)
}

pub fn parse_zone(zone: &str) -> PanchangResult<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| PanchangError::invalid_input(format!("unrecognized IANA zone '{zone}'")))
}

/// Formats a JD as `HH:MM:SS` in `zone`.
pub fn format_hhmmss(jd: f64, zone: &str) -> PanchangResult<String> {
    let (_, _, _, h, m, s) = from_jd(jd, zone)?;
    Ok(format!("{h:02}:{m:02}:{s:02}"))
}

/// Formats a JD as `HH:MM` in `zone`.
pub fn format_hhmm(jd: f64, zone: &str) -> PanchangResult<String> {
    let (_, _, _, h, m, _) = from_jd(jd, zone)?;
    Ok(format!("{h:02}:{m:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_at_j2000() {
        let jd = julian_day(2000, 1, 1, 12.0);
        assert!((jd - 2451545.0).abs() < 1e-9);
    }

    #[test]
    fn jd_roundtrip() {
        let jd = julian_day(2025, 3, 15, 6.0);
        let (y, m, d, h) = from_julian_day(jd);
        assert_eq!((y, m, d), (2025, 3, 15));
        assert!((h - 6.0).abs() < 1e-6);
    }

    #[test]
    fn to_jd_rejects_unknown_zone() {
        let err = to_jd("2025-01-15", "Not/AZone").unwrap_err();
        assert!(matches!(err, PanchangError::InvalidInput(_)));
    }

    #[test]
    fn weekday_index_matches_known_sunday() {
        // 2025-01-26 is a Sunday.
        let idx = weekday_index("2025-01-26", "UTC").unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn format_helpers_pad_correctly() {
        let jd = to_jd("2025-01-15", "UTC").unwrap();
        let s = format_hhmm(jd, "UTC").unwrap();
        assert_eq!(s, "00:00");
    }
}
