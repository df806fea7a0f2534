//! Daily report assembly (spec.md §4.9).

use serde::{Deserialize, Serialize};

use crate::panchang::daysegments::{GowriSegment, Interval};
use crate::panchang::festivals::MatchedFestival;
use crate::panchang::lagnam::LagnamInterval;
use crate::panchang::limbs::{ChandrashtamaWindow, KaranaResult, NakshatraResult, TithiResult, YogaResult};
use crate::panchang::mappers::BilingualName;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct SolarCalendarInfo {
    pub tamil_month: BilingualName,
    pub tamil_day: u32,
    pub tamil_year_name: String,
    pub tamil_year_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct DaySegments {
    pub rahu_kalam: Interval,
    pub yama_gandam: Interval,
    pub kuligai: Interval,
    pub gowri_neram: Vec<GowriSegment>,
    pub nalla_neram: Vec<Interval>,
}

/// Full panchangam for one civil day at one place.
///
/// `incomplete` is set when a diurnal event (sunrise/sunset) could not be
/// located for the requested place/date (e.g. polar latitudes) — spec.md
/// §7's `NoDiurnalEvent` is surfaced here as a report flag, never as an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct DailyReport {
    pub date: String,
    pub zone: String,
    pub latitude: f64,
    pub longitude: f64,

    pub weekday_index: u32,
    pub sunrise_jd: Option<f64>,
    pub sunset_jd: Option<f64>,
    pub sunrise_local: Option<String>,
    pub sunset_local: Option<String>,

    pub tithi: Option<TithiResult>,
    pub nakshatra: Option<NakshatraResult>,
    pub yoga: Option<YogaResult>,
    pub karana: Option<KaranaResult>,

    pub solar_calendar: Option<SolarCalendarInfo>,
    pub day_segments: Option<DaySegments>,
    pub lagnam_table: Vec<LagnamInterval>,
    pub festivals: Vec<MatchedFestival>,
    pub chandrashtama: Option<ChandrashtamaWindow>,

    pub incomplete: bool,
}
