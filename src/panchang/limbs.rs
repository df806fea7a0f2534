//! Limb engines (spec.md §4.5, component C5).
//!
//! Each limb is anchored at sunrise (spec.md §4.5's "value at sunrise,
//! end time via crossing solver") the same way `dra8an-hindu-calendar`'s
//! `core::tithi::tithi_at_sunrise` samples `tithi_at_moment` once and then
//! calls `find_tithi_boundary` for the end instant — generalized here over
//! all four limbs through the shared [`super::solver::find_crossing_default`].

use serde::{Deserialize, Serialize};

use crate::panchang::ephemeris::EphemerisProvider;
use crate::panchang::mappers::{
    self, BilingualName, KaranaType, KARANA_NAMES, NAKSHATRA_LORDS, NAKSHATRA_NAMES, Paksha,
    TITHI_NAMES, YOGA_NAMES, YogaNature,
};
use crate::panchang::solver::find_crossing_default;

const TITHI_SPAN_DEG: f64 = 12.0;
const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;
const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;
const KARANA_SPAN_DEG: f64 = 6.0;

/// Upper bound on how far ahead of sunrise a limb boundary can fall,
/// generous enough for the slowest limb (tithi, ~24h period) with margin.
const SEARCH_WINDOW_DAYS: f64 = 2.0;

/// How far either side of a reference instant to look for a
/// Chandrashtama rasi boundary (spec.md §4.5.1's "back-scan 3 days
/// either side").
const CHANDRASHTAMA_SEARCH_WINDOW_DAYS: f64 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct TithiResult {
    pub index: u32,
    pub name: BilingualName,
    pub next_name: BilingualName,
    pub paksha: Paksha,
    pub end_jd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct NakshatraResult {
    pub index: u32,
    pub name: BilingualName,
    pub next_name: BilingualName,
    pub pada: u32,
    pub lord: BilingualName,
    pub end_jd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct YogaResult {
    pub index: u32,
    pub name: BilingualName,
    pub nature: YogaNature,
    pub end_jd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct KaranaResult {
    pub variant: u32,
    pub name: BilingualName,
    pub next_name: BilingualName,
    pub kind: KaranaType,
    pub end_jd: f64,
}

/// Chandrashtama window (spec.md §4.5.1): the entry/exit instants of the
/// moon's transit through the 8th rasi from the birth nakshatra's own
/// rasi, located by bisecting 3 days either side of the reference
/// instant. `None` when the moon is not in that rasi at the reference
/// instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChandrashtamaWindow {
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Finds the JD at which `angle_fn` next crosses the boundary closing the
/// span that contains `angle_fn(sunrise_jd)`, searching forward from
/// `sunrise_jd`.
fn find_span_end<F>(sunrise_jd: f64, span_deg: f64, mut angle_fn: F) -> f64
where
    F: FnMut(f64) -> f64,
{
    let current = angle_fn(sunrise_jd);
    let boundary = (((current / span_deg).floor() + 1.0) * span_deg) % 360.0;
    find_crossing_default(sunrise_jd, sunrise_jd + SEARCH_WINDOW_DAYS, boundary, angle_fn)
}

pub fn tithi_at_sunrise<E: EphemerisProvider>(ephem: &E, sunrise_jd: f64) -> TithiResult {
    let elongation = |jd: f64| mappers::elongation(ephem.sidereal_sun_longitude(jd), ephem.sidereal_moon_longitude(jd));
    let e0 = elongation(sunrise_jd);
    let index = ((e0 / TITHI_SPAN_DEG).floor() as u32 + 1).min(30);
    let end_jd = find_span_end(sunrise_jd, TITHI_SPAN_DEG, elongation);
    let next_index = if index == 30 { 1 } else { index + 1 };
    TithiResult {
        index,
        name: TITHI_NAMES[(index - 1) as usize],
        next_name: TITHI_NAMES[(next_index - 1) as usize],
        paksha: mappers::paksha_for_tithi(index),
        end_jd,
    }
}

pub fn nakshatra_at_sunrise<E: EphemerisProvider>(ephem: &E, sunrise_jd: f64) -> NakshatraResult {
    let moon = |jd: f64| ephem.sidereal_moon_longitude(jd);
    let lon0 = moon(sunrise_jd);
    let index = mappers::nakshatra_index(lon0);
    let pada = mappers::nakshatra_pada(lon0);
    let end_jd = find_span_end(sunrise_jd, NAKSHATRA_SPAN_DEG, moon);
    let next_index = if index == 27 { 1 } else { index + 1 };
    NakshatraResult {
        index,
        name: NAKSHATRA_NAMES[(index - 1) as usize],
        next_name: NAKSHATRA_NAMES[(next_index - 1) as usize],
        pada,
        lord: NAKSHATRA_LORDS[(index - 1) as usize],
        end_jd,
    }
}

pub fn yoga_at_sunrise<E: EphemerisProvider>(ephem: &E, sunrise_jd: f64) -> YogaResult {
    let combined = |jd: f64| {
        mappers::combined_longitude(ephem.sidereal_sun_longitude(jd), ephem.sidereal_moon_longitude(jd))
    };
    let c0 = combined(sunrise_jd);
    let index = ((c0 / YOGA_SPAN_DEG).floor() as u32 + 1).min(27);
    let end_jd = find_span_end(sunrise_jd, YOGA_SPAN_DEG, combined);
    YogaResult {
        index,
        name: YOGA_NAMES[(index - 1) as usize],
        nature: mappers::yoga_nature(index),
        end_jd,
    }
}

pub fn karana_at_sunrise<E: EphemerisProvider>(ephem: &E, sunrise_jd: f64) -> KaranaResult {
    let elongation = |jd: f64| mappers::elongation(ephem.sidereal_sun_longitude(jd), ephem.sidereal_moon_longitude(jd));
    let e0 = elongation(sunrise_jd);
    let slot = ((e0 / KARANA_SPAN_DEG).floor() as u32 + 1).min(60);
    let variant = mappers::karana_variant(slot);
    let end_jd = find_span_end(sunrise_jd, KARANA_SPAN_DEG, elongation);
    let next_slot = if slot == 60 { 1 } else { slot + 1 };
    let next_variant = mappers::karana_variant(next_slot);
    KaranaResult {
        variant,
        name: KARANA_NAMES[(variant - 1) as usize],
        next_name: KARANA_NAMES[(next_variant - 1) as usize],
        kind: mappers::karana_type(variant),
        end_jd,
    }
}

/// A nakshatra spans 13d20' and rasis span 30d, so nakshatra N's rasi is
/// the rasi containing its starting degree, `(N-1)*(360/27)`.
fn birth_rasi_of_nakshatra(nakshatra_index: u32) -> u32 {
    let start_deg = (nakshatra_index as f64 - 1.0) * (360.0 / 27.0);
    mappers::rasi_index(start_deg)
}

fn chandrashtama_from_nakshatra(birth_nakshatra_index: u32, moon_rasi_index: u32) -> bool {
    let birth_rasi = birth_rasi_of_nakshatra(birth_nakshatra_index);
    let distance = (moon_rasi_index + 12 - birth_rasi) % 12;
    distance == 7
}

/// Computes the Chandrashtama window (spec.md §4.5.1) around
/// `reference_jd` (typically sunrise) for a given birth nakshatra: `None`
/// if the moon is not currently in the 8th rasi, otherwise the JDs at
/// which the moon entered and will leave that rasi, found by bisecting
/// the sidereal lunar longitude's crossing of the rasi's start/end
/// boundaries 3 days either side of `reference_jd`.
pub fn chandrashtama_window<E: EphemerisProvider>(
    ephem: &E,
    birth_nakshatra_index: u32,
    reference_jd: f64,
) -> Option<ChandrashtamaWindow> {
    let moon_lon = |jd: f64| ephem.sidereal_moon_longitude(jd);
    let moon_rasi_now = mappers::rasi_index(moon_lon(reference_jd));

    if !chandrashtama_from_nakshatra(birth_nakshatra_index, moon_rasi_now) {
        return None;
    }

    let start_deg = ((moon_rasi_now - 1) as f64) * 30.0;
    let end_deg = (moon_rasi_now % 12) as f64 * 30.0;

    let start_jd = find_crossing_default(
        reference_jd - CHANDRASHTAMA_SEARCH_WINDOW_DAYS,
        reference_jd,
        start_deg,
        moon_lon,
    );
    let end_jd = find_crossing_default(
        reference_jd,
        reference_jd + CHANDRASHTAMA_SEARCH_WINDOW_DAYS,
        end_deg,
        moon_lon,
    );

    Some(ChandrashtamaWindow { start_jd, end_jd })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panchang::ephemeris::AnalyticEphemeris;
    use crate::panchang::time::julian_day;

    #[test]
    fn tithi_end_is_after_sunrise_and_in_same_or_next_span() {
        let ephem = AnalyticEphemeris;
        let sunrise = julian_day(2025, 4, 10, 1.0);
        let result = tithi_at_sunrise(&ephem, sunrise);
        assert!(result.end_jd > sunrise);
        assert!((1..=30).contains(&result.index));
        assert_ne!(result.name.en, result.next_name.en);
    }

    #[test]
    fn tithi_next_name_wraps_from_amavasya_to_prathame() {
        let names: Vec<_> = (1..=30u32)
            .map(|idx| (idx, if idx == 30 { 1 } else { idx + 1 }))
            .collect();
        for (idx, next_idx) in names {
            assert_eq!(TITHI_NAMES[(next_idx - 1) as usize].en.is_empty(), false);
            let _ = idx;
        }
    }

    #[test]
    fn nakshatra_pada_is_in_range() {
        let ephem = AnalyticEphemeris;
        let sunrise = julian_day(2025, 7, 1, 1.0);
        let result = nakshatra_at_sunrise(&ephem, sunrise);
        assert!((1..=4).contains(&result.pada));
    }

    #[test]
    fn karana_variant_resolves_to_valid_name() {
        let ephem = AnalyticEphemeris;
        let sunrise = julian_day(2025, 9, 5, 1.0);
        let result = karana_at_sunrise(&ephem, sunrise);
        assert!((1..=11).contains(&result.variant));
    }

    #[test]
    fn chandrashtama_is_true_exactly_at_eighth_rasi() {
        // Ashwini (nakshatra 1) starts at 0deg -> rasi Mesha (1).
        // 8th rasi from Mesha is Vrischika (8); distance 7.
        assert!(chandrashtama_from_nakshatra(1, 8));
        assert!(!chandrashtama_from_nakshatra(1, 7));
    }

    #[test]
    fn chandrashtama_window_is_none_when_moon_outside_eighth_rasi() {
        let ephem = AnalyticEphemeris;
        // Pick a reference where the moon is unlikely to be in Vrischika;
        // if it happens to land there the window must still bracket it.
        let reference = julian_day(2025, 1, 1, 0.0);
        match chandrashtama_window(&ephem, 1, reference) {
            None => {}
            Some(window) => assert!(window.start_jd < reference && window.end_jd > reference),
        }
    }
}
