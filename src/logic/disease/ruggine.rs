use super::{Pathogen, WetnessSummary};
use crate::models::RiskLevel;

/// Rust (Ruggine) risk classifier. Driven by wetness duration and
/// temperature only; humidity plays no role.
///
/// Tiers, first match wins:
/// - alto:     T 15-25 °C, wetness >= 8 h
/// - moderato: T 10-28 °C, wetness >= 6 h
/// - basso otherwise
pub struct Ruggine;

impl Pathogen for Ruggine {
    fn name(&self) -> &'static str {
        "Ruggine"
    }

    fn favorable_conditions(&self) -> &'static str {
        "T 15-25°C, bagnatura >6h"
    }

    fn assess(&self, s: &WetnessSummary) -> RiskLevel {
        if s.avg_temperature_c >= 15.0 && s.avg_temperature_c <= 25.0 && s.wetness_hours >= 8 {
            return RiskLevel::Alto;
        }
        if s.avg_temperature_c >= 10.0 && s.avg_temperature_c <= 28.0 && s.wetness_hours >= 6 {
            return RiskLevel::Moderato;
        }
        RiskLevel::Basso
    }
}
