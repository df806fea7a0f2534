//! Festival matching (spec.md §4.8, component C8).
//!
//! Catalog loading follows the `toml`-file-plus-built-in-default pattern
//! documented for config (`crate::config`): an optional
//! `FESTIVAL_CATALOG_PATH` TOML file is parsed into [`FestivalRule`]
//! records; absent that, a small built-in catalog ships so the engine
//! never produces an empty festival list out of the box.

use serde::{Deserialize, Serialize};

use crate::error::{PanchangError, PanchangResult};
use crate::panchang::limbs::{KaranaResult, NakshatraResult, TithiResult, YogaResult};
use crate::panchang::mappers::Paksha;

/// `month == 0` means "any Tamil month"; otherwise it must equal the
/// current Tamil month index (1..=12) for the rule to be eligible
/// (spec.md §4.8: `month in {0, currentTamilMonth}`).
const ANY_MONTH: u32 = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedFestival {
    pub name_en: String,
    pub name_ta: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FestivalRule {
    Tithi {
        name_en: String,
        name_ta: Option<String>,
        category: String,
        tithi_index: u32,
        paksha: Option<RulePaksha>,
        #[serde(default)]
        month: u32,
    },
    Nakshatra {
        name_en: String,
        name_ta: Option<String>,
        category: String,
        nakshatra_index: u32,
        #[serde(default)]
        month: u32,
    },
    FixedDate {
        name_en: String,
        name_ta: Option<String>,
        category: String,
        month: u32,
        day: u32,
    },
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RulePaksha {
    Shukla,
    Krishna,
}

impl RulePaksha {
    fn matches(self, paksha: Paksha) -> bool {
        matches!(
            (self, paksha),
            (RulePaksha::Shukla, Paksha::Shukla) | (RulePaksha::Krishna, Paksha::Krishna)
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FestivalCatalog {
    #[serde(rename = "festival", default)]
    pub rules: Vec<FestivalRule>,
}

pub fn load_catalog(path: Option<&str>) -> PanchangResult<FestivalCatalog> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .map_err(|e| PanchangError::invalid_input(format!("cannot read festival catalog '{p}': {e}")))?;
            toml::from_str(&raw)
                .map_err(|e| PanchangError::invalid_input(format!("malformed festival catalog '{p}': {e}")))
        }
        None => Ok(built_in_catalog()),
    }
}

fn built_in_catalog() -> FestivalCatalog {
    FestivalCatalog {
        rules: vec![
            FestivalRule::Tithi {
                name_en: "Vinayaka Chaturthi".to_string(),
                name_ta: Some("விநாயக சதுர்த்தி".to_string()),
                category: "religious".to_string(),
                tithi_index: 4,
                paksha: Some(RulePaksha::Shukla),
                month: ANY_MONTH,
            },
            FestivalRule::Tithi {
                name_en: "Diwali (Naraka Chaturdashi)".to_string(),
                name_ta: Some("தீபாவளி".to_string()),
                category: "religious".to_string(),
                tithi_index: 14,
                paksha: Some(RulePaksha::Krishna),
                month: ANY_MONTH,
            },
            FestivalRule::Nakshatra {
                name_en: "Sri Rama Navami nakshatra window".to_string(),
                name_ta: None,
                category: "religious".to_string(),
                nakshatra_index: 13,
                month: ANY_MONTH,
            },
            FestivalRule::FixedDate {
                name_en: "Pongal".to_string(),
                name_ta: Some("பொங்கல்".to_string()),
                category: "government".to_string(),
                month: 1,
                day: 14,
            },
        ],
    }
}

/// Matches the day's computed limbs against the catalog, gating
/// tithi/nakshatra rules by `month in {0, currentTamilMonth}` and
/// fixed-date rules by the civil `(month, day)`, deduping by English
/// name so a rule that could fire via more than one condition only
/// contributes once (spec.md §4.8's dedup invariant).
pub fn match_festivals(
    catalog: &FestivalCatalog,
    tithi: &TithiResult,
    nakshatra: &NakshatraResult,
    _yoga: &YogaResult,
    _karana: &KaranaResult,
    current_tamil_month: u32,
    civil_month: u32,
    civil_day: u32,
) -> Vec<MatchedFestival> {
    let mut matched: Vec<MatchedFestival> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for rule in &catalog.rules {
        let hit = match rule {
            FestivalRule::Tithi { tithi_index, paksha, month, .. } => {
                tithi.index == *tithi_index
                    && paksha.map(|p| p.matches(tithi.paksha)).unwrap_or(true)
                    && month_matches(*month, current_tamil_month)
            }
            FestivalRule::Nakshatra { nakshatra_index, month, .. } => {
                nakshatra.index == *nakshatra_index && month_matches(*month, current_tamil_month)
            }
            FestivalRule::FixedDate { month, day, .. } => civil_month == *month && civil_day == *day,
        };

        if !hit {
            continue;
        }

        let (name_en, name_ta, category) = match rule {
            FestivalRule::Tithi { name_en, name_ta, category, .. }
            | FestivalRule::Nakshatra { name_en, name_ta, category, .. }
            | FestivalRule::FixedDate { name_en, name_ta, category, .. } => {
                (name_en.clone(), name_ta.clone(), category.clone())
            }
        };

        if seen.contains(&name_en) {
            continue;
        }
        seen.push(name_en.clone());
        matched.push(MatchedFestival { name_en, name_ta, category });
    }

    matched
}

fn month_matches(rule_month: u32, current_tamil_month: u32) -> bool {
    rule_month == ANY_MONTH || rule_month == current_tamil_month
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panchang::mappers::{
        KaranaType, KARANA_NAMES, NAKSHATRA_LORDS, NAKSHATRA_NAMES, TITHI_NAMES, YOGA_NAMES, YogaNature,
    };

    fn sample_tithi(index: u32, paksha: Paksha) -> TithiResult {
        TithiResult { index, name: TITHI_NAMES[(index - 1) as usize], paksha, next_name: TITHI_NAMES[0], end_jd: 0.0 }
    }

    fn sample_nakshatra(index: u32) -> NakshatraResult {
        NakshatraResult {
            index,
            name: NAKSHATRA_NAMES[(index - 1) as usize],
            next_name: NAKSHATRA_NAMES[0],
            pada: 1,
            lord: NAKSHATRA_LORDS[(index - 1) as usize],
            end_jd: 0.0,
        }
    }

    fn sample_yoga() -> YogaResult {
        YogaResult { index: 1, name: YOGA_NAMES[0], nature: YogaNature::Auspicious, end_jd: 0.0 }
    }

    fn sample_karana() -> KaranaResult {
        KaranaResult {
            variant: 2,
            name: KARANA_NAMES[1],
            next_name: KARANA_NAMES[2],
            kind: KaranaType::Movable,
            end_jd: 0.0,
        }
    }

    #[test]
    fn built_in_catalog_matches_vinayaka_chaturthi() {
        let catalog = built_in_catalog();
        let tithi = sample_tithi(4, Paksha::Shukla);
        let nakshatra = sample_nakshatra(1);
        let matched = match_festivals(&catalog, &tithi, &nakshatra, &sample_yoga(), &sample_karana(), 6, 8, 20);
        let hit = matched.iter().find(|f| f.name_en == "Vinayaka Chaturthi").expect("matched");
        assert_eq!(hit.category, "religious");
    }

    #[test]
    fn paksha_mismatch_does_not_match() {
        let catalog = built_in_catalog();
        let tithi = sample_tithi(4, Paksha::Krishna);
        let nakshatra = sample_nakshatra(1);
        let matched = match_festivals(&catalog, &tithi, &nakshatra, &sample_yoga(), &sample_karana(), 6, 8, 20);
        assert!(!matched.iter().any(|f| f.name_en == "Vinayaka Chaturthi"));
    }

    #[test]
    fn tamil_month_gate_excludes_rule_outside_its_month() {
        let catalog = FestivalCatalog {
            rules: vec![FestivalRule::Tithi {
                name_en: "Month-locked festival".to_string(),
                name_ta: None,
                category: "religious".to_string(),
                tithi_index: 4,
                paksha: None,
                month: 6,
            }],
        };
        let tithi = sample_tithi(4, Paksha::Shukla);
        let nakshatra = sample_nakshatra(1);
        let matched = match_festivals(&catalog, &tithi, &nakshatra, &sample_yoga(), &sample_karana(), 7, 8, 20);
        assert!(matched.is_empty());
    }

    #[test]
    fn fixed_date_rule_dedupes_by_name() {
        let catalog = FestivalCatalog {
            rules: vec![
                FestivalRule::FixedDate {
                    name_en: "Pongal".to_string(),
                    name_ta: None,
                    category: "government".to_string(),
                    month: 1,
                    day: 14,
                },
                FestivalRule::FixedDate {
                    name_en: "Pongal".to_string(),
                    name_ta: None,
                    category: "government".to_string(),
                    month: 1,
                    day: 14,
                },
            ],
        };
        let tithi = sample_tithi(1, Paksha::Shukla);
        let nakshatra = sample_nakshatra(1);
        let matched = match_festivals(&catalog, &tithi, &nakshatra, &sample_yoga(), &sample_karana(), 10, 1, 14);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].category, "government");
    }
}
