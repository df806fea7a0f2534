//! Limb mappers (spec.md §4.4, component C4): pure angle -> index/name
//! arithmetic. Constants are fixed here, never tunable, per spec.md.
//!
//! The partitioning arithmetic itself (elongation/12, moon/(360/27), the
//! karana slot table) is the teacher's own `panchang/panchang.rs` logic,
//! generalized from "sample once, index a flat string table" into
//! structured records carrying bilingual names, lord/nature/type and
//! pada, per spec.md §3.

use serde::{Deserialize, Serialize};

pub fn normalize_degrees(x: f64) -> f64 {
    let m = x % 360.0;
    if m < 0.0 { m + 360.0 } else { m }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualName {
    pub en: &'static str,
    pub ta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YogaNature {
    Auspicious,
    Inauspicious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KaranaType {
    Movable,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TamilDayMode {
    DegreeBased,
    CivilSankranti,
}

// ---------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------

pub const TITHI_NAMES: [BilingualName; 30] = [
    BilingualName { en: "Prathame", ta: "பிரதமை" },
    BilingualName { en: "Dwitiya", ta: "துவிதியை" },
    BilingualName { en: "Tritiya", ta: "திருதியை" },
    BilingualName { en: "Chaturthi", ta: "சதுர்த்தி" },
    BilingualName { en: "Panchami", ta: "பஞ்சமி" },
    BilingualName { en: "Shashthi", ta: "சஷ்டி" },
    BilingualName { en: "Saptami", ta: "சப்தமி" },
    BilingualName { en: "Ashtami", ta: "அஷ்டமி" },
    BilingualName { en: "Navami", ta: "நவமி" },
    BilingualName { en: "Dashami", ta: "தசமி" },
    BilingualName { en: "Ekadashi", ta: "ஏகாதசி" },
    BilingualName { en: "Dwadashi", ta: "துவாதசி" },
    BilingualName { en: "Trayodashi", ta: "திரயோதசி" },
    BilingualName { en: "Chaturdashi", ta: "சதுர்த்தசி" },
    BilingualName { en: "Purnima", ta: "பௌர்ணமி" },
    BilingualName { en: "Prathame", ta: "பிரதமை" },
    BilingualName { en: "Dwitiya", ta: "துவிதியை" },
    BilingualName { en: "Tritiya", ta: "திருதியை" },
    BilingualName { en: "Chaturthi", ta: "சதுர்த்தி" },
    BilingualName { en: "Panchami", ta: "பஞ்சமி" },
    BilingualName { en: "Shashthi", ta: "சஷ்டி" },
    BilingualName { en: "Saptami", ta: "சப்தமி" },
    BilingualName { en: "Ashtami", ta: "அஷ்டமி" },
    BilingualName { en: "Navami", ta: "நவமி" },
    BilingualName { en: "Dashami", ta: "தசமி" },
    BilingualName { en: "Ekadashi", ta: "ஏகாதசி" },
    BilingualName { en: "Dwadashi", ta: "துவாதசி" },
    BilingualName { en: "Trayodashi", ta: "திரயோதசி" },
    BilingualName { en: "Chaturdashi", ta: "சதுர்த்தசி" },
    BilingualName { en: "Amavasya", ta: "அமாவாசை" },
];

pub const NAKSHATRA_NAMES: [BilingualName; 27] = [
    BilingualName { en: "Ashwini", ta: "அஸ்வினி" },
    BilingualName { en: "Bharani", ta: "பரணி" },
    BilingualName { en: "Krittika", ta: "கார்த்திகை" },
    BilingualName { en: "Rohini", ta: "ரோகிணி" },
    BilingualName { en: "Mrigashira", ta: "மிருகசீரிடம்" },
    BilingualName { en: "Ardra", ta: "திருவாதிரை" },
    BilingualName { en: "Punarvasu", ta: "புனர்பூசம்" },
    BilingualName { en: "Pushya", ta: "பூசம்" },
    BilingualName { en: "Ashlesha", ta: "ஆயில்யம்" },
    BilingualName { en: "Magha", ta: "மகம்" },
    BilingualName { en: "Purva Phalguni", ta: "பூரம்" },
    BilingualName { en: "Uttara Phalguni", ta: "உத்திரம்" },
    BilingualName { en: "Hasta", ta: "அஸ்தம்" },
    BilingualName { en: "Chitra", ta: "சித்திரை" },
    BilingualName { en: "Swati", ta: "சுவாதி" },
    BilingualName { en: "Vishakha", ta: "விசாகம்" },
    BilingualName { en: "Anuradha", ta: "அனுஷம்" },
    BilingualName { en: "Jyeshtha", ta: "கேட்டை" },
    BilingualName { en: "Mula", ta: "மூலம்" },
    BilingualName { en: "Purva Ashadha", ta: "பூராடம்" },
    BilingualName { en: "Uttara Ashadha", ta: "உத்திராடம்" },
    BilingualName { en: "Shravana", ta: "திருவோணம்" },
    BilingualName { en: "Dhanishta", ta: "அவிட்டம்" },
    BilingualName { en: "Shatabhisha", ta: "சதயம்" },
    BilingualName { en: "Purva Bhadrapada", ta: "பூரட்டாதி" },
    BilingualName { en: "Uttara Bhadrapada", ta: "உத்திரட்டாதி" },
    BilingualName { en: "Revati", ta: "ரேவதி" },
];

pub const NAKSHATRA_LORDS: [BilingualName; 27] = [
    BilingualName { en: "Ketu", ta: "கேது" },
    BilingualName { en: "Venus", ta: "சுக்கிரன்" },
    BilingualName { en: "Sun", ta: "சூரியன்" },
    BilingualName { en: "Moon", ta: "சந்திரன்" },
    BilingualName { en: "Mars", ta: "செவ்வாய்" },
    BilingualName { en: "Rahu", ta: "ராகு" },
    BilingualName { en: "Jupiter", ta: "குரு" },
    BilingualName { en: "Saturn", ta: "சனி" },
    BilingualName { en: "Mercury", ta: "புதன்" },
    BilingualName { en: "Ketu", ta: "கேது" },
    BilingualName { en: "Venus", ta: "சுக்கிரன்" },
    BilingualName { en: "Sun", ta: "சூரியன்" },
    BilingualName { en: "Moon", ta: "சந்திரன்" },
    BilingualName { en: "Mars", ta: "செவ்வாய்" },
    BilingualName { en: "Rahu", ta: "ராகு" },
    BilingualName { en: "Jupiter", ta: "குரு" },
    BilingualName { en: "Saturn", ta: "சனி" },
    BilingualName { en: "Mercury", ta: "புதன்" },
    BilingualName { en: "Ketu", ta: "கேது" },
    BilingualName { en: "Venus", ta: "சுக்கிரன்" },
    BilingualName { en: "Sun", ta: "சூரியன்" },
    BilingualName { en: "Moon", ta: "சந்திரன்" },
    BilingualName { en: "Mars", ta: "செவ்வாய்" },
    BilingualName { en: "Rahu", ta: "ராகு" },
    BilingualName { en: "Jupiter", ta: "குரு" },
    BilingualName { en: "Saturn", ta: "சனி" },
    BilingualName { en: "Mercury", ta: "புதன்" },
];

pub const YOGA_NAMES: [BilingualName; 27] = [
    BilingualName { en: "Vishkambha", ta: "விஷ்கம்பம்" },
    BilingualName { en: "Priti", ta: "பிரீதி" },
    BilingualName { en: "Ayushman", ta: "ஆயுஷ்மான்" },
    BilingualName { en: "Saubhagya", ta: "சௌபாக்கியம்" },
    BilingualName { en: "Shobhana", ta: "சோபனம்" },
    BilingualName { en: "Atiganda", ta: "அதிகண்டம்" },
    BilingualName { en: "Sukarman", ta: "சுகர்மா" },
    BilingualName { en: "Dhriti", ta: "திருதி" },
    BilingualName { en: "Shoola", ta: "சூலம்" },
    BilingualName { en: "Ganda", ta: "கண்டம்" },
    BilingualName { en: "Vriddhi", ta: "விருத்தி" },
    BilingualName { en: "Dhruva", ta: "துருவம்" },
    BilingualName { en: "Vyaghata", ta: "வியாகாதம்" },
    BilingualName { en: "Harshana", ta: "ஹர்ஷணம்" },
    BilingualName { en: "Vajra", ta: "வஜ்ரம்" },
    BilingualName { en: "Siddhi", ta: "சித்தி" },
    BilingualName { en: "Vyatipata", ta: "வியதீபாதம்" },
    BilingualName { en: "Variyan", ta: "வரியான்" },
    BilingualName { en: "Parigha", ta: "பரிகம்" },
    BilingualName { en: "Shiva", ta: "சிவம்" },
    BilingualName { en: "Siddha", ta: "சித்தம்" },
    BilingualName { en: "Sadhya", ta: "சாத்தியம்" },
    BilingualName { en: "Shubha", ta: "சுபம்" },
    BilingualName { en: "Shukla", ta: "சுக்லம்" },
    BilingualName { en: "Brahma", ta: "பிரம்மம்" },
    BilingualName { en: "Indra", ta: "இந்திரம்" },
    BilingualName { en: "Vaidhriti", ta: "வைதிருதி" },
];

const INAUSPICIOUS_YOGAS: [usize; 6] = [5, 8, 9, 12, 16, 26]; // 0-based index into YOGA_NAMES

/// 11 karana variants, in the fixed-then-movable order used by the
/// slot->variant table below (spec.md §3 invariant).
pub const KARANA_NAMES: [BilingualName; 11] = [
    BilingualName { en: "Kimstughna", ta: "கிம்ஸ்துக்னம்" },
    BilingualName { en: "Bava", ta: "பவம்" },
    BilingualName { en: "Balava", ta: "பாலவம்" },
    BilingualName { en: "Kaulava", ta: "கௌலவம்" },
    BilingualName { en: "Taitila", ta: "தைதிலம்" },
    BilingualName { en: "Gara", ta: "கரஜம்" },
    BilingualName { en: "Vanija", ta: "வணிஜம்" },
    BilingualName { en: "Vishti", ta: "பத்திரை" },
    BilingualName { en: "Shakuni", ta: "சகுனி" },
    BilingualName { en: "Chatushpada", ta: "சதுஷ்பாதம்" },
    BilingualName { en: "Naga", ta: "நாகவம்" },
];

pub const RASI_NAMES: [BilingualName; 12] = [
    BilingualName { en: "Mesha", ta: "மேஷம்" },
    BilingualName { en: "Vrishabha", ta: "ரிஷபம்" },
    BilingualName { en: "Mithuna", ta: "மிதுனம்" },
    BilingualName { en: "Karka", ta: "கடகம்" },
    BilingualName { en: "Simha", ta: "சிம்மம்" },
    BilingualName { en: "Kanya", ta: "கன்னி" },
    BilingualName { en: "Tula", ta: "துலாம்" },
    BilingualName { en: "Vrischika", ta: "விருச்சிகம்" },
    BilingualName { en: "Dhanu", ta: "தனுசு" },
    BilingualName { en: "Makara", ta: "மகரம்" },
    BilingualName { en: "Kumbha", ta: "கும்பம்" },
    BilingualName { en: "Meena", ta: "மீனம்" },
];

pub const RASI_LORDS: [BilingualName; 12] = [
    BilingualName { en: "Mars", ta: "செவ்வாய்" },
    BilingualName { en: "Venus", ta: "சுக்கிரன்" },
    BilingualName { en: "Mercury", ta: "புதன்" },
    BilingualName { en: "Moon", ta: "சந்திரன்" },
    BilingualName { en: "Sun", ta: "சூரியன்" },
    BilingualName { en: "Mercury", ta: "புதன்" },
    BilingualName { en: "Venus", ta: "சுக்கிரன்" },
    BilingualName { en: "Mars", ta: "செவ்வாய்" },
    BilingualName { en: "Jupiter", ta: "குரு" },
    BilingualName { en: "Saturn", ta: "சனி" },
    BilingualName { en: "Saturn", ta: "சனி" },
    BilingualName { en: "Jupiter", ta: "குரு" },
];

pub const TAMIL_MONTH_NAMES: [BilingualName; 12] = [
    BilingualName { en: "Chithirai", ta: "சித்திரை" },
    BilingualName { en: "Vaikasi", ta: "வைகாசி" },
    BilingualName { en: "Aani", ta: "ஆனி" },
    BilingualName { en: "Aadi", ta: "ஆடி" },
    BilingualName { en: "Aavani", ta: "ஆவணி" },
    BilingualName { en: "Purattasi", ta: "புரட்டாசி" },
    BilingualName { en: "Aippasi", ta: "ஐப்பசி" },
    BilingualName { en: "Karthikai", ta: "கார்த்திகை" },
    BilingualName { en: "Margazhi", ta: "மார்கழி" },
    BilingualName { en: "Thai", ta: "தை" },
    BilingualName { en: "Maasi", ta: "மாசி" },
    BilingualName { en: "Panguni", ta: "பங்குனி" },
];

/// 60-cycle Tamil year names; index 23 (0-based, the 24th entry) is
/// anchored to Gregorian year 2000 per spec.md §3.
pub const TAMIL_YEAR_NAMES: [&str; 60] = [
    "Prabhava", "Vibhava", "Shukla", "Pramoduta", "Prajapati", "Angirasa",
    "Shrimukha", "Bhava", "Yuva", "Dhatu", "Ishvara", "Bahudhanya",
    "Pramathi", "Vikrama", "Vishu", "Chitrabhanu", "Subhanu", "Tarana",
    "Parthiva", "Vyaya", "Sarvajit", "Sarvadhari", "Virodhi", "Vikruti",
    "Khara", "Nandana", "Vijaya", "Jaya", "Manmatha", "Durmukhi",
    "Hevilambi", "Vilambi", "Vikari", "Sharvari", "Plava", "Shubhakrit",
    "Shobhakrit", "Krodhi", "Vishvavasu", "Parabhava", "Plavanga",
    "Kilaka", "Saumya", "Sadharana", "Virodhikrit", "Paridhavi",
    "Pramadicha", "Ananda", "Rakshasa", "Nala", "Pingala", "Kalayukti",
    "Siddharthi", "Raudri", "Durmati", "Dundubhi", "Rudhirodgari",
    "Raktakshi", "Krodhana", "Akshaya",
];

// ---------------------------------------------------------------------
// Pure index arithmetic
// ---------------------------------------------------------------------

/// Elongation `E = (moon - sun) mod 360` (spec.md §4.4, Glossary).
pub fn elongation(sun_lon: f64, moon_lon: f64) -> f64 {
    normalize_degrees(moon_lon - sun_lon)
}

/// Combined sun+moon longitude used for Yoga.
pub fn combined_longitude(sun_lon: f64, moon_lon: f64) -> f64 {
    normalize_degrees(sun_lon + moon_lon)
}

pub fn tithi_index(sun_lon: f64, moon_lon: f64) -> u32 {
    let e = elongation(sun_lon, moon_lon);
    ((e / 12.0).floor() as u32 + 1).min(30)
}

pub fn paksha_for_tithi(index: u32) -> Paksha {
    if index <= 15 { Paksha::Shukla } else { Paksha::Krishna }
}

pub fn nakshatra_span() -> f64 {
    360.0 / 27.0
}

pub fn nakshatra_index(moon_lon: f64) -> u32 {
    let lon = normalize_degrees(moon_lon);
    ((lon / nakshatra_span()).floor() as u32 + 1).min(27)
}

pub fn nakshatra_pada(moon_lon: f64) -> u32 {
    let span = nakshatra_span();
    let lon = normalize_degrees(moon_lon);
    let within = lon % span;
    ((within / (span / 4.0)).floor() as u32 + 1).min(4)
}

pub fn yoga_index(sun_lon: f64, moon_lon: f64) -> u32 {
    let c = combined_longitude(sun_lon, moon_lon);
    let span = nakshatra_span();
    ((c / span).floor() as u32 + 1).min(27)
}

pub fn yoga_nature(index: u32) -> YogaNature {
    if INAUSPICIOUS_YOGAS.contains(&(index as usize - 1)) {
        YogaNature::Inauspicious
    } else {
        YogaNature::Auspicious
    }
}

/// Raw karana half-tithi slot in 1..=60.
pub fn karana_slot(sun_lon: f64, moon_lon: f64) -> u32 {
    let e = elongation(sun_lon, moon_lon);
    ((e / 6.0).floor() as u32 + 1).min(60)
}

/// Maps a karana slot (1..=60) to a karana variant index (1..=11) into
/// [`KARANA_NAMES`], per the fixed table in spec.md §3: slot 1 ->
/// Kimstughna; slots 58/59/60 -> Shakuni/Chatushpada/Naga; slots 2..=57
/// cycle Bava..Vishti (7-cycle) starting at Bava in slot 2.
pub fn karana_variant(slot: u32) -> u32 {
    match slot {
        1 => 1,           // Kimstughna
        58 => 9,          // Shakuni
        59 => 10,         // Chatushpada
        60 => 11,         // Naga
        2..=57 => 2 + ((slot - 2) % 7), // Bava(2)..Vishti(8)
        _ => 1,
    }
}

pub fn karana_type(variant: u32) -> KaranaType {
    if variant == 1 || variant >= 9 { KaranaType::Fixed } else { KaranaType::Movable }
}

pub fn rasi_index(longitude: f64) -> u32 {
    let lon = normalize_degrees(longitude);
    ((lon / 30.0).floor() as u32 + 1).min(12)
}

pub fn tamil_month_index_degree_based(sun_lon: f64) -> u32 {
    rasi_index(sun_lon)
}

/// Degree-based approximation of the Tamil day-of-month (spec.md §9 Open
/// Question, `DegreeBased` mode): `floor(sun mod 30) + 1`.
pub fn tamil_day_degree_based(sun_lon: f64) -> u32 {
    let lon = normalize_degrees(sun_lon);
    (lon % 30.0).floor() as u32 + 1
}

/// `cycleIndex = (23 + gregorianYear - 2000) mod 60` (spec.md §4.4),
/// anchored so 2000 -> the 24th entry (0-based index 23).
pub fn tamil_year_cycle_index(gregorian_year: i32) -> usize {
    let raw = 23 + (gregorian_year - 2000);
    raw.rem_euclid(60) as usize
}

pub fn tamil_year_name(gregorian_year: i32) -> &'static str {
    TAMIL_YEAR_NAMES[tamil_year_cycle_index(gregorian_year)]
}

pub fn tamil_year_number(gregorian_year: i32) -> i32 {
    gregorian_year + 3101
}

/// Resolves a nakshatra's English name to its 1-indexed position in
/// [`NAKSHATRA_NAMES`], case-insensitively. `None` on an unknown name
/// (spec.md §7: rejected by the caller as `InvalidInput`).
pub fn nakshatra_index_by_name(name: &str) -> Option<u32> {
    NAKSHATRA_NAMES
        .iter()
        .position(|n| n.en.eq_ignore_ascii_case(name))
        .map(|pos| pos as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tithi_boundaries() {
        assert_eq!(tithi_index(0.0, 0.0), 1);
        assert_eq!(tithi_index(0.0, 11.9), 1);
        assert_eq!(tithi_index(0.0, 12.0), 2);
        assert_eq!(tithi_index(0.0, 359.9), 30);
    }

    #[test]
    fn paksha_matches_index_invariant() {
        for idx in 1..=30u32 {
            let p = paksha_for_tithi(idx);
            assert_eq!(p == Paksha::Shukla, idx <= 15);
        }
    }

    #[test]
    fn nakshatra_pada_covers_all_four_quadrants() {
        let span = nakshatra_span();
        assert_eq!(nakshatra_pada(0.0), 1);
        assert_eq!(nakshatra_pada(span / 4.0 + 0.01), 2);
        assert_eq!(nakshatra_pada(span / 2.0 + 0.01), 3);
        assert_eq!(nakshatra_pada(3.0 * span / 4.0 + 0.01), 4);
    }

    #[test]
    fn karana_slot_table_matches_invariant() {
        assert_eq!(karana_variant(1), 1);
        assert_eq!(karana_variant(2), 2); // Bava
        assert_eq!(karana_variant(8), 8); // Vishti
        assert_eq!(karana_variant(9), 2); // cycles back to Bava
        assert_eq!(karana_variant(57), 8);
        assert_eq!(karana_variant(58), 9);
        assert_eq!(karana_variant(59), 10);
        assert_eq!(karana_variant(60), 11);
    }

    #[test]
    fn karana_type_matches_fixed_and_movable() {
        assert_eq!(karana_type(1), KaranaType::Fixed);
        assert_eq!(karana_type(2), KaranaType::Movable);
        assert_eq!(karana_type(9), KaranaType::Fixed);
    }

    #[test]
    fn rasi_index_is_in_range() {
        assert_eq!(rasi_index(0.0), 1);
        assert_eq!(rasi_index(359.999), 12);
        assert_eq!(rasi_index(-10.0), 12);
    }

    #[test]
    fn tamil_year_anchor_matches_spec() {
        assert_eq!(tamil_year_cycle_index(2000), 23);
        assert_eq!(tamil_year_name(2000), TAMIL_YEAR_NAMES[23]);
    }

    #[test]
    fn nakshatra_index_by_name_is_case_insensitive_and_rejects_unknown_names() {
        assert_eq!(nakshatra_index_by_name("Ashwini"), Some(1));
        assert_eq!(nakshatra_index_by_name("revati"), Some(27));
        assert_eq!(nakshatra_index_by_name("Not A Nakshatra"), None);
    }

    #[test]
    fn all_index_rules_stay_in_documented_ranges() {
        for i in 0..3600 {
            let angle = i as f64 / 10.0;
            assert!((1..=30).contains(&tithi_index(0.0, angle)));
            assert!((1..=27).contains(&nakshatra_index(angle)));
            assert!((1..=27).contains(&yoga_index(0.0, angle)));
            assert!((1..=12).contains(&rasi_index(angle)));
        }
        for slot in 1..=60u32 {
            assert!((1..=11).contains(&karana_variant(slot)));
        }
    }
}
