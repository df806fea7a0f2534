//! Lagnam / Ascendant table (spec.md §4.7, component C7).
//!
//! Scans the civil day in fixed steps and collapses consecutive samples
//! sharing a rasi into a single interval, the same "sample then merge
//! runs" shape the teacher uses nowhere but which mirrors
//! `dra8an-hindu-calendar`'s `generate_month_panchang` day-by-day sampling
//! loop, applied here at sub-day granularity.

use serde::{Deserialize, Serialize};

use crate::panchang::ephemeris::EphemerisProvider;
use crate::panchang::mappers::{self, BilingualName, RASI_NAMES};

const STEP_MINUTES: f64 = 10.0;
const STEP_DAYS: f64 = STEP_MINUTES / (24.0 * 60.0);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct LagnamInterval {
    pub rasi_index: u32,
    pub name: BilingualName,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Scans `[day_start_jd, day_start_jd + 1.0)` in `STEP_MINUTES` steps and
/// returns the ascendant-rasi intervals covering the full civil day.
pub fn lagnam_table<E: EphemerisProvider>(
    ephem: &E,
    day_start_jd: f64,
    latitude: f64,
    longitude: f64,
) -> Vec<LagnamInterval> {
    let day_end_jd = day_start_jd + 1.0;
    let mut intervals: Vec<LagnamInterval> = Vec::new();

    let mut jd = day_start_jd;
    while jd < day_end_jd {
        let rasi = mappers::rasi_index(ephem.ascendant(jd, latitude, longitude));
        match intervals.last_mut() {
            Some(last) if last.rasi_index == rasi => {
                last.end_jd = jd + STEP_DAYS;
            }
            _ => intervals.push(LagnamInterval {
                rasi_index: rasi,
                name: RASI_NAMES[(rasi - 1) as usize],
                start_jd: jd,
                end_jd: jd + STEP_DAYS,
            }),
        }
        jd += STEP_DAYS;
    }

    if let Some(last) = intervals.last_mut() {
        last.end_jd = day_end_jd;
    }

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panchang::ephemeris::AnalyticEphemeris;
    use crate::panchang::time::julian_day;

    #[test]
    fn lagnam_table_covers_the_full_day_without_gaps() {
        let ephem = AnalyticEphemeris;
        let day_start = julian_day(2025, 5, 1, 0.0);
        let table = lagnam_table(&ephem, day_start, 13.08, 80.27);
        assert!(!table.is_empty());
        assert!((table.first().unwrap().start_jd - day_start).abs() < 1e-9);
        assert!((table.last().unwrap().end_jd - (day_start + 1.0)).abs() < 1e-9);
        for pair in table.windows(2) {
            assert!((pair[0].end_jd - pair[1].start_jd).abs() < 1e-9);
        }
    }

    #[test]
    fn adjacent_intervals_never_share_a_rasi() {
        let ephem = AnalyticEphemeris;
        let day_start = julian_day(2025, 5, 1, 0.0);
        let table = lagnam_table(&ephem, day_start, 13.08, 80.27);
        for pair in table.windows(2) {
            assert_ne!(pair[0].rasi_index, pair[1].rasi_index);
        }
    }
}
