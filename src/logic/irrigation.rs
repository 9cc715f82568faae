use serde::{Deserialize, Serialize};

/// Irrigation-need tier from the daily reference evapotranspiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationTier {
    Basso,
    Moderato,
    Alto,
    #[serde(rename = "molto alto")]
    MoltoAlto,
}

impl IrrigationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationTier::Basso => "basso",
            IrrigationTier::Moderato => "moderato",
            IrrigationTier::Alto => "alto",
            IrrigationTier::MoltoAlto => "molto alto",
        }
    }

    /// Fixed advisory message attached to the tier.
    pub fn advice(&self) -> &'static str {
        match self {
            IrrigationTier::Basso => "Fabbisogno idrico basso. Irrigazione minima necessaria.",
            IrrigationTier::Moderato => {
                "Fabbisogno idrico moderato. Irrigazione regolare consigliata."
            }
            IrrigationTier::Alto => "Fabbisogno idrico alto. Aumentare frequenza irrigazione.",
            IrrigationTier::MoltoAlto => {
                "Fabbisogno idrico critico. Irrigazione frequente necessaria."
            }
        }
    }
}

impl std::fmt::Display for IrrigationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify one ET0 value (mm/day) into an irrigation tier.
pub fn irrigation_tier(et0_mm: f64) -> IrrigationTier {
    if et0_mm < 3.0 {
        IrrigationTier::Basso
    } else if et0_mm < 5.0 {
        IrrigationTier::Moderato
    } else if et0_mm < 7.0 {
        IrrigationTier::Alto
    } else {
        IrrigationTier::MoltoAlto
    }
}

/// Mean and sum over an ET0 series (mm). Water lost over the period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Et0Summary {
    pub average_mm: f64,
    pub total_mm: f64,
}

/// Weekly (or any period) ET0 aggregates. Empty input yields the zero
/// baseline rather than NaN.
pub fn weekly_totals(et0_mm: &[f64]) -> Et0Summary {
    if et0_mm.is_empty() {
        return Et0Summary {
            average_mm: 0.0,
            total_mm: 0.0,
        };
    }
    let total: f64 = et0_mm.iter().sum();
    Et0Summary {
        average_mm: total / et0_mm.len() as f64,
        total_mm: total,
    }
}
