pub mod botrite;
pub mod engine;
pub mod oidio;
pub mod peronospora;
pub mod ruggine;

pub use engine::{worst_risk, DiseaseRisk, DiseaseRiskEngine};

use crate::models::{HourlyObservation, RiskLevel};

/// Leaf wetness estimate for one hour. Three independent sufficient
/// conditions: any rain at all, near-saturated air, or a temperature
/// within 2 °C of the dew point.
pub fn leaf_wetness(
    temperature_c: f64,
    humidity_pct: f64,
    dew_point_c: f64,
    precipitation_mm: f64,
) -> bool {
    if precipitation_mm > 0.0 {
        return true;
    }
    if humidity_pct >= 90.0 {
        return true;
    }
    if temperature_c - dew_point_c <= 2.0 {
        return true;
    }
    false
}

/// Aggregates of the analysis window the pathogen classifiers consume.
/// The window itself (the original dashboard uses ±24 h around "now")
/// is chosen by the caller; the engine only sees the slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetnessSummary {
    pub wetness_hours: u32,
    pub avg_temperature_c: f64,
    pub avg_humidity_pct: f64,
    pub samples: usize,
}

/// Wetness count and temperature/humidity means over an hourly window.
/// An empty window yields the all-zero summary, which every classifier
/// maps to `basso`.
pub fn summarize_wetness(window: &[HourlyObservation]) -> WetnessSummary {
    if window.is_empty() {
        return WetnessSummary {
            wetness_hours: 0,
            avg_temperature_c: 0.0,
            avg_humidity_pct: 0.0,
            samples: 0,
        };
    }

    let wetness_hours = window
        .iter()
        .filter(|h| {
            leaf_wetness(
                h.temperature_c,
                h.humidity_pct,
                h.dew_point_c,
                h.precipitation_mm,
            )
        })
        .count() as u32;

    let n = window.len() as f64;
    WetnessSummary {
        wetness_hours,
        avg_temperature_c: window.iter().map(|h| h.temperature_c).sum::<f64>() / n,
        avg_humidity_pct: window.iter().map(|h| h.humidity_pct).sum::<f64>() / n,
        samples: window.len(),
    }
}

/// Trait for per-pathogen risk classifiers.
pub trait Pathogen: Send + Sync {
    /// Pathogen display name
    fn name(&self) -> &'static str;

    /// Short description of the conditions that favor this pathogen
    fn favorable_conditions(&self) -> &'static str;

    /// Classify the risk for an analysis window
    fn assess(&self, summary: &WetnessSummary) -> RiskLevel;
}

/// Worst level among the given ones; empty input is the no-risk baseline.
pub fn max_risk(levels: &[RiskLevel]) -> RiskLevel {
    levels.iter().copied().max().unwrap_or(RiskLevel::Basso)
}
