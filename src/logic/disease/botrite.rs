use super::{Pathogen, WetnessSummary};
use crate::models::RiskLevel;

/// Botrytis (Botrite) risk classifier.
///
/// Tiers, first match wins:
/// - critico: T 15-25 °C, wetness >= 8 h, humidity >= 85 %
/// - alto:    T 15-25 °C, wetness >= 6 h, humidity >= 80 %
/// - moderato: wetness >= 4 h, humidity >= 70 %
/// - basso otherwise
pub struct Botrite;

impl Pathogen for Botrite {
    fn name(&self) -> &'static str {
        "Botrite"
    }

    fn favorable_conditions(&self) -> &'static str {
        "T 15-25°C, umidità >85%, bagnatura >6h"
    }

    fn assess(&self, s: &WetnessSummary) -> RiskLevel {
        let temp_in_range = s.avg_temperature_c >= 15.0 && s.avg_temperature_c <= 25.0;

        if temp_in_range && s.wetness_hours >= 8 && s.avg_humidity_pct >= 85.0 {
            return RiskLevel::Critico;
        }
        if temp_in_range && s.wetness_hours >= 6 && s.avg_humidity_pct >= 80.0 {
            return RiskLevel::Alto;
        }
        if s.wetness_hours >= 4 && s.avg_humidity_pct >= 70.0 {
            return RiskLevel::Moderato;
        }
        RiskLevel::Basso
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(wetness_hours: u32, avg_temperature_c: f64, avg_humidity_pct: f64) -> WetnessSummary {
        WetnessSummary {
            wetness_hours,
            avg_temperature_c,
            avg_humidity_pct,
            samples: 48,
        }
    }

    #[test]
    fn critico_in_optimal_conditions() {
        assert_eq!(Botrite.assess(&summary(8, 20.0, 90.0)), RiskLevel::Critico);
    }

    #[test]
    fn alto_in_favorable_conditions() {
        assert_eq!(Botrite.assess(&summary(6, 20.0, 82.0)), RiskLevel::Alto);
    }

    #[test]
    fn moderato_in_partial_conditions() {
        assert_eq!(Botrite.assess(&summary(4, 30.0, 75.0)), RiskLevel::Moderato);
    }

    #[test]
    fn basso_in_unfavorable_conditions() {
        assert_eq!(Botrite.assess(&summary(2, 30.0, 50.0)), RiskLevel::Basso);
    }
}
