//! Day segments (spec.md §4.6, component C6): Rahu Kalam, Yama Gandam,
//! Kuligai, the 8-segment Gowri Neram, and Nalla Neram.
//!
//! None of these exist in the teacher; they are built fresh in the
//! teacher's index-into-fixed-table idiom (the same style as its
//! RASHI/TITHI static arrays), partitioning the sunrise-sunset span into
//! eighths per spec.md's fixed weekday tables.

use serde::{Deserialize, Serialize};

use crate::panchang::mappers::BilingualName;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interval {
    pub start_jd: f64,
    pub end_jd: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SegmentQuality {
    Good,
    Bad,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct GowriSegment {
    pub interval: Interval,
    pub name: BilingualName,
    pub quality: SegmentQuality,
}

/// 1/8th-segment index (0-based) of Rahu Kalam by weekday (0=Sunday),
/// spec.md §4.6's fixed table.
const RAHU_KALAM_SEGMENT: [usize; 7] = [7, 1, 6, 4, 5, 3, 2];
/// Yama Gandam segment by weekday.
const YAMA_GANDAM_SEGMENT: [usize; 7] = [4, 3, 2, 1, 0, 6, 5];
/// Kuligai segment by weekday.
const KULIGAI_SEGMENT: [usize; 7] = [6, 5, 4, 3, 2, 1, 0];

/// Gowri Neram segment names, in sunrise-Sunday order (spec.md §4.6).
/// `nameIndex = (segment - 1 + weekday) mod 8` selects the name for a
/// given 1-indexed `segment` on a given weekday.
const GOWRI_NAMES: [BilingualName; 8] = [
    BilingualName { en: "Udhyogam", ta: "உத்யோகம்" },
    BilingualName { en: "Amirtham", ta: "அமிர்தம்" },
    BilingualName { en: "Rogam", ta: "ரோகம்" },
    BilingualName { en: "Laabam", ta: "லாபம்" },
    BilingualName { en: "Dhanam", ta: "தனம்" },
    BilingualName { en: "Sugam", ta: "சுகம்" },
    BilingualName { en: "Soram", ta: "சோரம்" },
    BilingualName { en: "Visham", ta: "விஷம்" },
];

/// Good 1-indexed segment numbers for {Sunday, Tuesday, Thursday,
/// Saturday} (weekday 0,2,4,6) per spec.md §4.6's fixed table.
const GOOD_SEGMENTS_SET_A: [usize; 4] = [1, 2, 5, 6];
/// Good 1-indexed segment numbers for {Monday, Wednesday, Friday}
/// (weekday 1,3,5).
const GOOD_SEGMENTS_SET_B: [usize; 4] = [3, 4, 7, 8];

fn is_good_segment(segment_number: usize, weekday_index: u32) -> bool {
    if weekday_index % 2 == 0 {
        GOOD_SEGMENTS_SET_A.contains(&segment_number)
    } else {
        GOOD_SEGMENTS_SET_B.contains(&segment_number)
    }
}

pub fn rahu_kalam(sunrise_jd: f64, sunset_jd: f64, weekday_index: u32) -> Interval {
    segment_interval(sunrise_jd, sunset_jd, RAHU_KALAM_SEGMENT[weekday_index as usize])
}

pub fn yama_gandam(sunrise_jd: f64, sunset_jd: f64, weekday_index: u32) -> Interval {
    segment_interval(sunrise_jd, sunset_jd, YAMA_GANDAM_SEGMENT[weekday_index as usize])
}

pub fn kuligai(sunrise_jd: f64, sunset_jd: f64, weekday_index: u32) -> Interval {
    segment_interval(sunrise_jd, sunset_jd, KULIGAI_SEGMENT[weekday_index as usize])
}

fn segment_interval(sunrise_jd: f64, sunset_jd: f64, segment_index: usize) -> Interval {
    let span = (sunset_jd - sunrise_jd) / 8.0;
    let start = sunrise_jd + span * segment_index as f64;
    Interval { start_jd: start, end_jd: start + span }
}

/// Partitions the sunrise-sunset span into the 8 Gowri Neram segments,
/// each tagged good/bad, rotated by weekday.
pub fn gowri_neram(sunrise_jd: f64, sunset_jd: f64, weekday_index: u32) -> Vec<GowriSegment> {
    let span = (sunset_jd - sunrise_jd) / 8.0;
    (0..8)
        .map(|slot| {
            let segment_number = slot + 1;
            // nameIndex = (segment - 1 + weekday) mod 8, and segment - 1 == slot.
            let name_index = (slot + weekday_index as usize) % 8;
            let start = sunrise_jd + span * slot as f64;
            GowriSegment {
                interval: Interval { start_jd: start, end_jd: start + span },
                name: GOWRI_NAMES[name_index],
                quality: if is_good_segment(segment_number, weekday_index) {
                    SegmentQuality::Good
                } else {
                    SegmentQuality::Bad
                },
            }
        })
        .collect()
}

/// Nalla Neram (spec.md §4.6): the subset of Gowri Neram segments tagged
/// `Good` and not overlapping Rahu Kalam/Yama Gandam/Kuligai.
pub fn nalla_neram(segments: &[GowriSegment], exclusions: &[Interval]) -> Vec<Interval> {
    segments
        .iter()
        .filter(|s| s.quality == SegmentQuality::Good)
        .map(|s| s.interval)
        .filter(|interval| !exclusions.iter().any(|excl| overlaps(interval, excl)))
        .collect()
}

fn overlaps(a: &Interval, b: &Interval) -> bool {
    a.start_jd < b.end_jd && b.start_jd < a.end_jd
}
