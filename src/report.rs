use crate::error::Result;
use crate::logic::alerts::{self, FrostDay, WindLevel, WindyDay};
use crate::logic::chilling;
use crate::logic::disease::{self, DiseaseRisk, DiseaseRiskEngine};
use crate::logic::gdd;
use crate::logic::irrigation::{self, Et0Summary, IrrigationTier};
use crate::logic::spray::{self, GoodWindow, TreatmentThresholds};
use crate::models::{ChillRequirement, Crop, FruitCrop, RiskLevel, WeatherBundle};
use serde::{Deserialize, Serialize};

/// Analysis windows are policy of the calling layer, not of the engines:
/// the dashboard this replaces looked at ±24 h around "now" for disease
/// pressure and 48 h ahead for treatment windows, but nothing in the
/// models depends on those horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPolicy {
    pub disease_window_hours: usize,
    pub spray_lookahead_hours: usize,
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        Self {
            disease_window_hours: 48,
            spray_lookahead_hours: 48,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GddReport {
    pub crop: Crop,
    pub base_temperature_c: f64,
    pub maturity_gdd: f64,
    pub days_observed: usize,
    pub cumulative_gdd: f64,
    pub avg_daily_gdd: f64,
    pub progress_pct: f64,
    pub estimated_days_to_maturity: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChillReport {
    pub fruit: FruitCrop,
    pub requirement: ChillRequirement,
    pub chilling_hours: f64,
    pub chill_units: f64,
    pub progress_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseReport {
    pub window_hours: usize,
    pub wetness_hours: u32,
    pub avg_temperature_c: f64,
    pub avg_humidity_pct: f64,
    pub risks: Vec<DiseaseRisk>,
    pub overall: RiskLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SprayReport {
    pub hours_evaluated: usize,
    pub windows: Vec<GoodWindow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IrrigationReport {
    pub today_et0_mm: Option<f64>,
    pub today_tier: Option<IrrigationTier>,
    pub period: Et0Summary,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertReport {
    pub frost_days: Vec<FrostDay>,
    pub windy_days: Vec<WindyDay>,
    pub worst_wind: Option<WindLevel>,
}

/// Everything the presentation layer renders for one location.
#[derive(Debug, Clone, Serialize)]
pub struct AgroReport {
    pub gdd: GddReport,
    pub chill: ChillReport,
    pub disease: DiseaseReport,
    pub spray: SprayReport,
    pub irrigation: IrrigationReport,
    pub alerts: AlertReport,
}

/// Run every engine over a weather bundle. Progress percentages are
/// computed here, on the caller side of the engine boundary.
pub fn build_report(
    bundle: &WeatherBundle,
    crop: Crop,
    fruit: FruitCrop,
    thresholds: &TreatmentThresholds,
    policy: &AnalysisPolicy,
) -> Result<AgroReport> {
    let daily = bundle.daily.observations()?;
    let hourly = bundle.hourly.observations()?;

    tracing::debug!(
        days = daily.len(),
        hours = hourly.len(),
        "building agronomic report"
    );

    // GDD accumulation over the daily series
    let profile = crop.thermal_profile();
    let cumulative_gdd: f64 = daily
        .iter()
        .map(|d| gdd::daily_gdd(d.tmax_c, d.tmin_c, profile.base_temperature_c))
        .sum();
    let avg_daily_gdd = if daily.is_empty() {
        0.0
    } else {
        cumulative_gdd / daily.len() as f64
    };
    let gdd_report = GddReport {
        crop,
        base_temperature_c: profile.base_temperature_c,
        maturity_gdd: profile.maturity_gdd,
        days_observed: daily.len(),
        cumulative_gdd,
        avg_daily_gdd,
        progress_pct: progress_pct(cumulative_gdd, profile.maturity_gdd),
        estimated_days_to_maturity: gdd::estimate_days_to_maturity(
            avg_daily_gdd,
            profile.maturity_gdd,
        ),
    };

    // Chilling accumulation estimated from the daily extremes
    let tmin: Vec<f64> = daily.iter().map(|d| d.tmin_c).collect();
    let tmax: Vec<f64> = daily.iter().map(|d| d.tmax_c).collect();
    let chilling_hours = chilling::seasonal_chilling_hours(&tmin, &tmax)?;
    let chill_units = chilling::seasonal_chill_units(&tmin, &tmax)?;
    let requirement = fruit.chill_requirement();
    let chill_report = ChillReport {
        fruit,
        requirement,
        chilling_hours,
        chill_units,
        progress_pct: progress_pct(chilling_hours, requirement.min_hours),
    };

    // Disease pressure over the caller-selected hourly window
    let disease_window = clamp_window(&hourly, policy.disease_window_hours);
    let summary = disease::summarize_wetness(disease_window);
    let engine = DiseaseRiskEngine::new();
    let risks = engine.evaluate(&summary);
    let overall = disease::max_risk(&risks.iter().map(|r| r.risk).collect::<Vec<_>>());
    let disease_report = DiseaseReport {
        window_hours: disease_window.len(),
        wetness_hours: summary.wetness_hours,
        avg_temperature_c: summary.avg_temperature_c,
        avg_humidity_pct: summary.avg_humidity_pct,
        risks,
        overall,
    };

    // Treatment windows over the look-ahead horizon
    let spray_window = clamp_window(&hourly, policy.spray_lookahead_hours);
    let spray_report = SprayReport {
        hours_evaluated: spray_window.len(),
        windows: spray::find_good_windows(spray_window, thresholds),
    };

    // Irrigation need from ET0
    let et0: Vec<f64> = daily.iter().map(|d| d.et0_mm).collect();
    let today_et0_mm = et0.first().copied();
    let irrigation_report = IrrigationReport {
        today_et0_mm,
        today_tier: today_et0_mm.map(irrigation::irrigation_tier),
        period: irrigation::weekly_totals(&et0),
    };

    // Frost and wind alerts over the daily series
    let windy_days = alerts::wind_alerts(&daily);
    let alert_report = AlertReport {
        frost_days: alerts::frost_days(&daily),
        worst_wind: alerts::worst_wind_level(&windy_days),
        windy_days,
    };

    Ok(AgroReport {
        gdd: gdd_report,
        chill: chill_report,
        disease: disease_report,
        spray: spray_report,
        irrigation: irrigation_report,
        alerts: alert_report,
    })
}

fn progress_pct(accumulated: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (accumulated / target * 100.0).min(100.0)
}

fn clamp_window<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}
