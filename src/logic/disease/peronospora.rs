use super::{Pathogen, WetnessSummary};
use crate::models::RiskLevel;

/// Downy mildew (Peronospora) risk classifier.
///
/// Tiers, first match wins:
/// - critico: T 10-25 °C, wetness >= 6 h, humidity >= 80 %
/// - alto:    T 10-25 °C, wetness >= 4 h, humidity >= 70 %
/// - moderato: wetness >= 3 h, humidity >= 60 %
/// - basso otherwise
///
/// The moderato tier deliberately carries no temperature gate: hours
/// outside 10-25 °C can still land there, they only lose access to the
/// top two tiers.
pub struct Peronospora;

impl Pathogen for Peronospora {
    fn name(&self) -> &'static str {
        "Peronospora"
    }

    fn favorable_conditions(&self) -> &'static str {
        "T 10-25°C, umidità >80%, bagnatura >4h"
    }

    fn assess(&self, s: &WetnessSummary) -> RiskLevel {
        let temp_in_range = s.avg_temperature_c >= 10.0 && s.avg_temperature_c <= 25.0;

        if temp_in_range && s.wetness_hours >= 6 && s.avg_humidity_pct >= 80.0 {
            return RiskLevel::Critico;
        }
        if temp_in_range && s.wetness_hours >= 4 && s.avg_humidity_pct >= 70.0 {
            return RiskLevel::Alto;
        }
        if s.wetness_hours >= 3 && s.avg_humidity_pct >= 60.0 {
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
        assert_eq!(Peronospora.assess(&summary(6, 18.0, 85.0)), RiskLevel::Critico);
    }

    #[test]
    fn alto_in_favorable_conditions() {
        assert_eq!(Peronospora.assess(&summary(4, 18.0, 75.0)), RiskLevel::Alto);
    }

    #[test]
    fn moderato_in_partial_conditions() {
        assert_eq!(Peronospora.assess(&summary(3, 30.0, 65.0)), RiskLevel::Moderato);
    }

    #[test]
    fn basso_in_unfavorable_conditions() {
        assert_eq!(Peronospora.assess(&summary(1, 30.0, 40.0)), RiskLevel::Basso);
    }

    #[test]
    fn risk_moderato_when_temperature_out_of_range() {
        // Wet and humid but out of the 10-25 °C gate: falls through to
        // the ungated moderato tier, not to basso.
        assert_eq!(Peronospora.assess(&summary(6, 30.0, 85.0)), RiskLevel::Moderato);
        assert_eq!(Peronospora.assess(&summary(6, 5.0, 85.0)), RiskLevel::Moderato);
    }
}
