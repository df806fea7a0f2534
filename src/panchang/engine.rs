//! Orchestrator (spec.md §4.9, component C9): wires C1-C8 into a single
//! `daily()` call, following the teacher's `calculate_panchanga` as the
//! "one function computes the whole day" shape, generalized from direct
//! index arithmetic into the sunrise-anchored multi-stage pipeline.

use tracing::instrument;

use crate::config;
use crate::error::{PanchangError, PanchangResult};
use crate::panchang::daysegments;
use crate::panchang::ephemeris::{AnalyticEphemeris, EphemerisProvider};
use crate::panchang::festivals::{self, FestivalCatalog};
use crate::panchang::lagnam;
use crate::panchang::limbs;
use crate::panchang::mappers::{self, TAMIL_MONTH_NAMES, TamilDayMode};
use crate::panchang::report::{DailyReport, DaySegments, SolarCalendarInfo};
use crate::panchang::time;

#[derive(Debug, Clone)]
pub struct DailyRequest {
    pub date: String,
    pub zone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub birth_nakshatra: Option<String>,
}

/// Computes the full panchangam for `request`, per spec.md §4.9's
/// sequence: (1) resolve civil midnight -> JD, (2) locate sunrise/sunset,
/// (3) sample each limb at sunrise, (4) derive the solar calendar date,
/// (5) compute day segments from the sunrise/sunset span, (6) scan the
/// ascendant table, (7) match festivals, (8) compute Chandrashtama if a
/// birth nakshatra was supplied, (9) assemble the report, (10) flag
/// `incomplete` if no sunrise/sunset could be found.
#[instrument(skip(request), fields(date = %request.date, zone = %request.zone))]
pub fn daily(request: &DailyRequest) -> PanchangResult<DailyReport> {
    let ephem = AnalyticEphemeris;
    let cfg = config::get();

    let birth_nakshatra_index = match &request.birth_nakshatra {
        Some(name) => Some(
            mappers::nakshatra_index_by_name(name)
                .ok_or_else(|| PanchangError::invalid_input(format!("unknown birth nakshatra '{name}'")))?,
        ),
        None => None,
    };

    let midnight_jd = time::to_jd(&request.date, &request.zone)?;
    let weekday_index = time::weekday_index(&request.date, &request.zone)?;

    let sunrise_jd = ephem.sunrise(midnight_jd, request.latitude, request.longitude);
    let sunset_jd = ephem.sunset(midnight_jd, request.latitude, request.longitude);

    let (Some(sunrise), Some(sunset)) = (sunrise_jd, sunset_jd) else {
        tracing::warn!(
            latitude = request.latitude,
            longitude = request.longitude,
            "no diurnal event found for this place/date; returning an incomplete report"
        );
        return Ok(incomplete_report(request, weekday_index, sunrise_jd, sunset_jd));
    };

    let tithi = limbs::tithi_at_sunrise(&ephem, sunrise);
    let nakshatra = limbs::nakshatra_at_sunrise(&ephem, sunrise);
    let yoga = limbs::yoga_at_sunrise(&ephem, sunrise);
    let karana = limbs::karana_at_sunrise(&ephem, sunrise);

    let current_tamil_month = mappers::tamil_month_index_degree_based(ephem.sidereal_sun_longitude(sunrise));
    let solar_calendar = solar_calendar_info(&ephem, cfg.tamil_day_mode, midnight_jd, sunrise, current_tamil_month);

    let (_, civil_month, civil_day, _, _, _) = time::from_jd(midnight_jd, &request.zone)?;

    let rahu_kalam = daysegments::rahu_kalam(sunrise, sunset, weekday_index);
    let yama_gandam = daysegments::yama_gandam(sunrise, sunset, weekday_index);
    let kuligai = daysegments::kuligai(sunrise, sunset, weekday_index);
    let gowri_neram = daysegments::gowri_neram(sunrise, sunset, weekday_index);
    let nalla_neram = daysegments::nalla_neram(&gowri_neram, &[rahu_kalam, yama_gandam, kuligai]);

    let lagnam_table = lagnam::lagnam_table(&ephem, sunrise, request.latitude, request.longitude);

    let catalog = load_catalog_or_default(cfg.festival_catalog_path.as_deref());
    let festivals = festivals::match_festivals(
        &catalog, &tithi, &nakshatra, &yoga, &karana, current_tamil_month, civil_month, civil_day,
    );

    let chandrashtama = birth_nakshatra_index
        .and_then(|birth| limbs::chandrashtama_window(&ephem, birth, sunrise));

    Ok(DailyReport {
        date: request.date.clone(),
        zone: request.zone.clone(),
        latitude: request.latitude,
        longitude: request.longitude,
        weekday_index,
        sunrise_jd: Some(sunrise),
        sunset_jd: Some(sunset),
        sunrise_local: Some(time::format_hhmmss(sunrise, &request.zone)?),
        sunset_local: Some(time::format_hhmmss(sunset, &request.zone)?),
        tithi: Some(tithi),
        nakshatra: Some(nakshatra),
        yoga: Some(yoga),
        karana: Some(karana),
        solar_calendar: Some(solar_calendar),
        day_segments: Some(DaySegments { rahu_kalam, yama_gandam, kuligai, gowri_neram, nalla_neram }),
        lagnam_table,
        festivals,
        chandrashtama,
        incomplete: false,
    })
}

fn incomplete_report(
    request: &DailyRequest,
    weekday_index: u32,
    sunrise_jd: Option<f64>,
    sunset_jd: Option<f64>,
) -> DailyReport {
    DailyReport {
        date: request.date.clone(),
        zone: request.zone.clone(),
        latitude: request.latitude,
        longitude: request.longitude,
        weekday_index,
        sunrise_jd,
        sunset_jd,
        sunrise_local: None,
        sunset_local: None,
        tithi: None,
        nakshatra: None,
        yoga: None,
        karana: None,
        solar_calendar: None,
        day_segments: None,
        lagnam_table: Vec::new(),
        festivals: Vec::new(),
        chandrashtama: None,
        incomplete: true,
    }
}

fn solar_calendar_info<E: EphemerisProvider>(
    ephem: &E,
    mode: TamilDayMode,
    midnight_jd: f64,
    sunrise_jd: f64,
    month_index: u32,
) -> SolarCalendarInfo {
    let sun_lon = ephem.sidereal_sun_longitude(sunrise_jd);

    let tamil_day = match mode {
        TamilDayMode::DegreeBased => mappers::tamil_day_degree_based(sun_lon),
        TamilDayMode::CivilSankranti => civil_sankranti_day(ephem, midnight_jd, month_index),
    };

    let (year, _, _, _) = time::from_julian_day(midnight_jd);
    SolarCalendarInfo {
        tamil_month: TAMIL_MONTH_NAMES[(month_index - 1) as usize],
        tamil_day,
        tamil_year_name: mappers::tamil_year_name(year).to_string(),
        tamil_year_number: mappers::tamil_year_number(year),
    }
}

/// Counts elapsed civil days since the most recent sankranti (the sun's
/// crossing into `month_index`'s rasi boundary), by bisecting backward
/// for the crossing instant and taking the whole-day difference.
fn civil_sankranti_day<E: EphemerisProvider>(ephem: &E, midnight_jd: f64, month_index: u32) -> u32 {
    let target_deg = ((month_index - 1) as f64) * 30.0;
    let lo = midnight_jd - 35.0;
    let hi = midnight_jd + 1.0;
    let sankranti_jd = crate::panchang::solver::find_crossing_default(lo, hi, target_deg, |jd| {
        ephem.sidereal_sun_longitude(jd)
    });
    let elapsed = (midnight_jd - sankranti_jd).floor();
    (elapsed.max(0.0) as u32) + 1
}

fn load_catalog_or_default(path: Option<&str>) -> FestivalCatalog {
    match festivals::load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load festival catalog; falling back to built-in");
            festivals::load_catalog(None).expect("built-in catalog always parses")
        }
    }
}
