use super::{Pathogen, WetnessSummary};
use crate::models::RiskLevel;

/// Powdery mildew (Oidio) risk classifier.
///
/// Unlike the other pathogens it prefers warm, moderately humid air:
/// the classifier only grades risk inside the 20-30 °C / 40-80 %
/// humidity gate. Outside the gate the answer is basso, never an
/// intermediate tier.
pub struct Oidio;

impl Pathogen for Oidio {
    fn name(&self) -> &'static str {
        "Oidio"
    }

    fn favorable_conditions(&self) -> &'static str {
        "T 20-30°C, umidità 40-80%"
    }

    fn assess(&self, s: &WetnessSummary) -> RiskLevel {
        let in_gate = s.avg_temperature_c >= 20.0
            && s.avg_temperature_c <= 30.0
            && s.avg_humidity_pct >= 40.0
            && s.avg_humidity_pct <= 80.0;

        if in_gate {
            if s.wetness_hours >= 4 {
                return RiskLevel::Alto;
            }
            if s.wetness_hours >= 2 {
                return RiskLevel::Moderato;
            }
        }
        RiskLevel::Basso
    }
}
