//! End-to-end scenarios for the `daily()` orchestrator (spec.md §8).

use panchangam::panchang::engine::{self, DailyRequest};

fn chennai_request(date: &str) -> DailyRequest {
    DailyRequest {
        date: date.to_string(),
        zone: "Asia/Kolkata".to_string(),
        latitude: 13.0827,
        longitude: 80.2707,
        birth_nakshatra: None,
    }
}

#[test]
fn complete_report_has_all_limbs_and_a_tiled_day_segment_set() {
    let report = engine::daily(&chennai_request("2025-06-15")).expect("computes");
    assert!(!report.incomplete);

    let tithi = report.tithi.expect("tithi present");
    assert!((1..=30).contains(&tithi.index));

    let nakshatra = report.nakshatra.expect("nakshatra present");
    assert!((1..=27).contains(&nakshatra.index));
    assert!((1..=4).contains(&nakshatra.pada));

    let yoga = report.yoga.expect("yoga present");
    assert!((1..=27).contains(&yoga.index));

    let karana = report.karana.expect("karana present");
    assert!((1..=11).contains(&karana.variant));

    let segments = report.day_segments.expect("segments present");
    let sunrise = report.sunrise_jd.unwrap();
    let sunset = report.sunset_jd.unwrap();
    assert!(segments.rahu_kalam.start_jd >= sunrise && segments.rahu_kalam.end_jd <= sunset + 1e-9);
    assert_eq!(segments.gowri_neram.len(), 8);

    assert!(!report.lagnam_table.is_empty());
}

#[test]
fn report_is_idempotent_across_repeated_calls() {
    let request = chennai_request("2025-10-02");
    let first = engine::daily(&request).unwrap();
    let second = engine::daily(&request).unwrap();
    assert_eq!(first.tithi.unwrap().index, second.tithi.unwrap().index);
    assert_eq!(first.sunrise_jd, second.sunrise_jd);
}

#[test]
fn chandrashtama_flag_only_appears_when_birth_nakshatra_given() {
    let mut request = chennai_request("2025-03-01");
    let without = engine::daily(&request).unwrap();
    assert!(without.chandrashtama.is_none());

    request.birth_nakshatra = Some("Krittika".to_string());
    let with = engine::daily(&request).unwrap();
    let _ = with.chandrashtama;
}

#[test]
fn unknown_birth_nakshatra_is_rejected() {
    let mut request = chennai_request("2025-03-01");
    request.birth_nakshatra = Some("Not A Real Nakshatra".to_string());
    let err = engine::daily(&request).unwrap_err();
    assert!(matches!(err, panchangam::error::PanchangError::InvalidInput(_)));
}

#[test]
fn pongal_fixed_date_festival_fires_on_tamil_new_year_day() {
    let report = engine::daily(&chennai_request("2025-01-14")).unwrap();
    assert!(report.festivals.iter().any(|f| f.name_en == "Pongal"));
}

#[test]
fn invalid_zone_is_rejected_as_invalid_input() {
    let request = DailyRequest {
        date: "2025-01-01".to_string(),
        zone: "Definitely/NotAZone".to_string(),
        latitude: 13.0,
        longitude: 80.0,
        birth_nakshatra: None,
    };
    let err = engine::daily(&request).unwrap_err();
    assert!(matches!(err, panchangam::error::PanchangError::InvalidInput(_)));
}

#[test]
fn polar_winter_day_reports_incomplete_without_panicking() {
    let request = DailyRequest {
        date: "2025-12-21".to_string(),
        zone: "UTC".to_string(),
        latitude: 80.0,
        longitude: 15.0,
        birth_nakshatra: None,
    };
    let report = engine::daily(&request).unwrap();
    assert!(report.incomplete);
    assert!(report.tithi.is_none());
    assert!(report.festivals.is_empty());
}

#[test]
fn solar_calendar_tamil_day_is_a_plausible_month_day() {
    let report = engine::daily(&chennai_request("2025-06-15")).unwrap();
    let solar = report.solar_calendar.expect("solar calendar present");
    assert!(solar.tamil_day >= 1 && solar.tamil_day <= 32);
}
