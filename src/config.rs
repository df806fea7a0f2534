//! Process-wide startup configuration.
//!
//! The ephemeris data path and ayanamsa mode are, per spec.md §3 and §5,
//! set once at process start and never mutated afterward. We follow the
//! teacher's pattern of reading configuration from the environment
//! (`src/db.rs` read `DB_HOST`/`DB_PORT`/...) via `dotenv`, but resolve it
//! once into an immutable `AppConfig` behind a `OnceLock` instead of
//! re-reading `env::var` on every call.

use std::env;
use std::sync::OnceLock;

use crate::panchang::mappers::TamilDayMode;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Optional path to `sepl*.se1`/`semo*.se1` ephemeris files. Absence
    /// falls back to the analytic solar/lunar theory (spec.md §6) — the
    /// engine ships only that fallback today; see DESIGN.md.
    pub ephemeris_data_path: Option<String>,
    /// Always "lahiri" today; kept as a named field so a future sidereal
    /// mode selection doesn't change the config shape.
    pub ayanamsa_mode: String,
    /// Path to a TOML festival catalog. Absent -> built-in sample catalog.
    pub festival_catalog_path: Option<String>,
    pub tamil_day_mode: TamilDayMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ephemeris_data_path: None,
            ayanamsa_mode: "lahiri".to_string(),
            festival_catalog_path: None,
            tamil_day_mode: TamilDayMode::CivilSankranti,
        }
    }
}

/// Idempotent, thread-safe one-time initialization (spec.md §9).
///
/// Safe to call from multiple threads or multiple times; only the first
/// call's environment is observed. Returns the process-wide config.
pub fn init() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        dotenv::dotenv().ok();

        let ephemeris_data_path = env::var("EPHEMERIS_DATA_PATH").ok().filter(|p| !p.is_empty());
        if ephemeris_data_path.is_none() {
            tracing::warn!("EPHEMERIS_DATA_PATH not set; using analytic ephemeris fallback");
        }

        let ayanamsa_mode = env::var("AYANAMSA_MODE").unwrap_or_else(|_| "lahiri".to_string());

        let festival_catalog_path = env::var("FESTIVAL_CATALOG_PATH")
            .ok()
            .filter(|p| !p.is_empty());

        let tamil_day_mode = env::var("TAMIL_DAY_MODE")
            .ok()
            .map(|raw| parse_tamil_day_mode(&raw))
            .unwrap_or(TamilDayMode::CivilSankranti);

        AppConfig {
            ephemeris_data_path,
            ayanamsa_mode,
            festival_catalog_path,
            tamil_day_mode,
        }
    })
}

/// Access the config, initializing with defaults if `init()` was never
/// called (e.g. in unit tests that construct the engine directly).
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

fn parse_tamil_day_mode(raw: &str) -> TamilDayMode {
    match raw.to_ascii_lowercase().as_str() {
        "degree" | "degree_based" | "degreebased" => TamilDayMode::DegreeBased,
        _ => TamilDayMode::CivilSankranti,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_civil_sankranti() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.tamil_day_mode, TamilDayMode::CivilSankranti);
        assert_eq!(cfg.ayanamsa_mode, "lahiri");
    }

    #[test]
    fn parses_degree_mode_case_insensitively() {
        assert_eq!(parse_tamil_day_mode("Degree"), TamilDayMode::DegreeBased);
        assert_eq!(parse_tamil_day_mode("civil_sankranti"), TamilDayMode::CivilSankranti);
    }
}
