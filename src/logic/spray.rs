use crate::models::HourlyObservation;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Safety bounds for pesticide/fertilizer application. All seven must
/// hold simultaneously for an hour to count as good.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentThresholds {
    pub max_wind_kmh: f64,
    pub max_precipitation_mm: f64,
    pub max_precipitation_probability_pct: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub min_humidity_pct: f64,
    pub max_humidity_pct: f64,
}

impl Default for TreatmentThresholds {
    fn default() -> Self {
        Self {
            max_wind_kmh: 15.0,
            max_precipitation_mm: 0.1,
            max_precipitation_probability_pct: 30.0,
            min_temperature_c: 5.0,
            max_temperature_c: 30.0,
            min_humidity_pct: 40.0,
            max_humidity_pct: 90.0,
        }
    }
}

/// One violated bound, carrying the offending measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SprayIssue {
    Wind(f64),
    Rain(f64),
    RainLikely(f64),
    TooCold(f64),
    TooHot(f64),
    HumidityLow(f64),
    HumidityHigh(f64),
}

impl std::fmt::Display for SprayIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SprayIssue::Wind(v) => write!(f, "Vento {:.0} km/h", v),
            SprayIssue::Rain(v) => write!(f, "Pioggia {:.1} mm", v),
            SprayIssue::RainLikely(v) => write!(f, "Prob. pioggia {:.0}%", v),
            SprayIssue::TooCold(v) => write!(f, "Temp. bassa {:.0}°C", v),
            SprayIssue::TooHot(v) => write!(f, "Temp. alta {:.0}°C", v),
            SprayIssue::HumidityLow(v) => write!(f, "Umidità bassa {:.0}%", v),
            SprayIssue::HumidityHigh(v) => write!(f, "Umidità alta {:.0}%", v),
        }
    }
}

/// Suitability verdict for one hour. Every violated bound is reported,
/// not just the first.
#[derive(Debug, Clone, Serialize)]
pub struct HourAssessment {
    pub timestamp: NaiveDateTime,
    pub issues: Vec<SprayIssue>,
}

impl HourAssessment {
    pub fn is_good(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A maximal contiguous run of good hours, at least two hours long.
/// `end` is the timestamp of the last good hour in the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoodWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_hours: u32,
}

pub fn evaluate_hour(obs: &HourlyObservation, thresholds: &TreatmentThresholds) -> HourAssessment {
    let mut issues = Vec::new();

    if obs.wind_speed_kmh > thresholds.max_wind_kmh {
        issues.push(SprayIssue::Wind(obs.wind_speed_kmh));
    }
    if obs.precipitation_mm > thresholds.max_precipitation_mm {
        issues.push(SprayIssue::Rain(obs.precipitation_mm));
    }
    if obs.precipitation_probability_pct > thresholds.max_precipitation_probability_pct {
        issues.push(SprayIssue::RainLikely(obs.precipitation_probability_pct));
    }
    if obs.temperature_c < thresholds.min_temperature_c {
        issues.push(SprayIssue::TooCold(obs.temperature_c));
    }
    if obs.temperature_c > thresholds.max_temperature_c {
        issues.push(SprayIssue::TooHot(obs.temperature_c));
    }
    if obs.humidity_pct < thresholds.min_humidity_pct {
        issues.push(SprayIssue::HumidityLow(obs.humidity_pct));
    }
    if obs.humidity_pct > thresholds.max_humidity_pct {
        issues.push(SprayIssue::HumidityHigh(obs.humidity_pct));
    }

    HourAssessment {
        timestamp: obs.timestamp,
        issues,
    }
}

/// Scan the hours in chronological order and collect contiguous runs of
/// good hours of length >= 2. A single isolated good hour is not an
/// actionable treatment window. A run still open at the end of the
/// sequence is closed there.
pub fn find_good_windows(
    hours: &[HourlyObservation],
    thresholds: &TreatmentThresholds,
) -> Vec<GoodWindow> {
    let mut windows = Vec::new();
    let mut run_start: Option<NaiveDateTime> = None;
    let mut run_hours: u32 = 0;

    for (i, obs) in hours.iter().enumerate() {
        if evaluate_hour(obs, thresholds).is_good() {
            if run_start.is_none() {
                run_start = Some(obs.timestamp);
                run_hours = 1;
            } else {
                run_hours += 1;
            }
        } else {
            if let Some(start) = run_start {
                if run_hours >= 2 {
                    windows.push(GoodWindow {
                        start,
                        end: hours[i - 1].timestamp,
                        duration_hours: run_hours,
                    });
                }
            }
            run_start = None;
            run_hours = 0;
        }
    }

    if let Some(start) = run_start {
        if run_hours >= 2 {
            windows.push(GoodWindow {
                start,
                end: hours[hours.len() - 1].timestamp,
                duration_hours: run_hours,
            });
        }
    }

    windows
}
