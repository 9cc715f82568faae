use super::{
    botrite::Botrite, oidio::Oidio, peronospora::Peronospora, ruggine::Ruggine, Pathogen,
    WetnessSummary,
};
use crate::models::RiskLevel;
use serde::Serialize;

/// Risk classification for one pathogen over one analysis window.
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseRisk {
    pub pathogen: &'static str,
    pub risk: RiskLevel,
    pub conditions: &'static str,
}

pub struct DiseaseRiskEngine {
    pathogens: Vec<Box<dyn Pathogen>>,
}

impl DiseaseRiskEngine {
    pub fn new() -> Self {
        let pathogens: Vec<Box<dyn Pathogen>> = vec![
            Box::new(Peronospora),
            Box::new(Oidio),
            Box::new(Botrite),
            Box::new(Ruggine),
        ];

        Self { pathogens }
    }

    pub fn evaluate(&self, summary: &WetnessSummary) -> Vec<DiseaseRisk> {
        self.pathogens
            .iter()
            .map(|p| DiseaseRisk {
                pathogen: p.name(),
                risk: p.assess(summary),
                conditions: p.favorable_conditions(),
            })
            .collect()
    }

    pub fn list_pathogens(&self) -> Vec<&'static str> {
        self.pathogens.iter().map(|p| p.name()).collect()
    }
}

impl Default for DiseaseRiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// The entry with the worst risk level; on ties the first-encountered
/// maximal entry is kept.
pub fn worst_risk(risks: &[DiseaseRisk]) -> Option<&DiseaseRisk> {
    risks
        .iter()
        .reduce(|best, candidate| if candidate.risk > best.risk { candidate } else { best })
}
