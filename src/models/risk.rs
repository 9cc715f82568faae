use serde::{Deserialize, Serialize};

/// Disease risk level. Variant order defines severity: `basso` is the
/// floor every classifier falls back to, `critico` the worst case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Basso,
    Moderato,
    Alto,
    Critico,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Basso => "basso",
            RiskLevel::Moderato => "moderato",
            RiskLevel::Alto => "alto",
            RiskLevel::Critico => "critico",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
