//! HTTP-facing request/response DTOs (spec.md §4.9/§6), the thin
//! collaborator surface the engine exposes to `routes.rs`. Named and
//! shaped after the teacher's own `PanchangRequest`/`PanchangResponse`,
//! generalized from a DD/MM/YYYY + fixed-offset request shape to the
//! full IANA-zone + place request the expanded engine needs.

use serde::Deserialize;

use crate::error::PanchangResult;
use crate::panchang::engine::{self, DailyRequest};
use crate::panchang::report::DailyReport;

#[derive(Debug, Clone, Deserialize)]
pub struct PanchangRequest {
    /// Civil date, `YYYY-MM-DD`.
    pub date: String,
    /// IANA zone name, e.g. `Asia/Kolkata`.
    pub zone: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Optional birth nakshatra name (e.g. `"Ashwini"`), enabling
    /// Chandrashtama in the response.
    #[serde(default)]
    pub birth_nakshatra: Option<String>,
}

pub type PanchangResponse = DailyReport;

/// Bridges an HTTP request body into the engine's `daily()` orchestrator.
pub async fn calculate_panchang(request: PanchangRequest) -> PanchangResult<PanchangResponse> {
    let daily_request = DailyRequest {
        date: request.date,
        zone: request.zone,
        latitude: request.latitude,
        longitude: request.longitude,
        birth_nakshatra: request.birth_nakshatra,
    };
    engine::daily(&daily_request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn calculate_panchang_rejects_bad_zone() {
        let request = PanchangRequest {
            date: "2025-01-01".to_string(),
            zone: "Not/AZone".to_string(),
            latitude: 13.0,
            longitude: 80.0,
            birth_nakshatra: None,
        };
        let result = calculate_panchang(request).await;
        assert!(result.is_err());
    }
}
