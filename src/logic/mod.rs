pub mod alerts;
pub mod chilling;
pub mod disease;
pub mod gdd;
pub mod irrigation;
pub mod spray;

pub use disease::DiseaseRiskEngine;
