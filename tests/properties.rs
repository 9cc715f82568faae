//! Property tests for the agronomic engines: invariants and the
//! pure-function guarantee (same input, same output) over randomized
//! but internally consistent weather sequences.

use agrometeo::logic::disease::{self, DiseaseRiskEngine};
use agrometeo::logic::{chilling, gdd, irrigation, spray};
use agrometeo::models::{HourlyObservation, RiskLevel};
use chrono::NaiveDate;
use proptest::prelude::*;

fn base_timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Physically plausible hourly samples on a contiguous hour grid.
fn hourly_sequence(max_len: usize) -> impl Strategy<Value = Vec<HourlyObservation>> {
    prop::collection::vec(
        (
            -20.0..45.0f64, // temperature
            0.0..=100.0f64, // humidity
            -25.0..30.0f64, // dew point
            0.0..20.0f64,   // precipitation
            0.0..=100.0f64, // precipitation probability
            0.0..80.0f64,   // wind
        ),
        0..max_len,
    )
    .prop_map(|samples| {
        samples
            .into_iter()
            .enumerate()
            .map(|(i, (t, rh, dew, rain, prob, wind))| HourlyObservation {
                timestamp: base_timestamp() + chrono::Duration::hours(i as i64),
                temperature_c: t,
                humidity_pct: rh,
                dew_point_c: dew,
                precipitation_mm: rain,
                precipitation_probability_pct: prob,
                wind_speed_kmh: wind,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn gdd_is_never_negative(
        tmax in -30.0..50.0f64,
        spread in 0.0..25.0f64,
        base in -5.0..20.0f64,
    ) {
        let tmin = tmax - spread;
        prop_assert!(gdd::daily_gdd(tmax, tmin, base) >= 0.0);
    }

    #[test]
    fn cumulative_gdd_equals_sum_of_daily(
        days in prop::collection::vec((-10.0..40.0f64, 0.0..15.0f64), 0..60),
        base in 0.0..15.0f64,
    ) {
        let tmax: Vec<f64> = days.iter().map(|(t, _)| *t).collect();
        let tmin: Vec<f64> = days.iter().map(|(t, s)| t - s).collect();
        let expected: f64 = tmax
            .iter()
            .zip(&tmin)
            .map(|(&a, &b)| gdd::daily_gdd(a, b, base))
            .sum();
        let total = gdd::cumulative_gdd(&tmax, &tmin, base).unwrap();
        prop_assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn chilling_hours_bounded_by_sequence_length(
        temps in prop::collection::vec(-20.0..40.0f64, 0..200),
    ) {
        prop_assert!(chilling::chilling_hours(&temps) <= temps.len());
    }

    #[test]
    fn chill_unit_takes_only_utah_values(t in -30.0..50.0f64) {
        let unit = chilling::chill_unit(t);
        prop_assert!([-1.0, -0.5, 0.0, 0.5, 1.0].contains(&unit));
    }

    #[test]
    fn total_chill_units_bounded_by_length(
        temps in prop::collection::vec(-20.0..40.0f64, 0..200),
    ) {
        let total = chilling::total_chill_units(&temps);
        let n = temps.len() as f64;
        prop_assert!(total >= -n && total <= n);
    }

    #[test]
    fn good_windows_are_at_least_two_hours_and_ordered(
        hours in hourly_sequence(96),
    ) {
        let thresholds = spray::TreatmentThresholds::default();
        let windows = spray::find_good_windows(&hours, &thresholds);
        for window in &windows {
            prop_assert!(window.duration_hours >= 2);
            prop_assert!(window.start <= window.end);
        }
        // Windows never overlap and appear in chronological order
        for pair in windows.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn window_hours_never_exceed_good_hours(
        hours in hourly_sequence(96),
    ) {
        let thresholds = spray::TreatmentThresholds::default();
        let good_count = hours
            .iter()
            .filter(|h| spray::evaluate_hour(h, &thresholds).is_good())
            .count() as u32;
        let windowed: u32 = spray::find_good_windows(&hours, &thresholds)
            .iter()
            .map(|w| w.duration_hours)
            .sum();
        prop_assert!(windowed <= good_count);
    }

    #[test]
    fn engines_are_idempotent(hours in hourly_sequence(72)) {
        let thresholds = spray::TreatmentThresholds::default();
        prop_assert_eq!(
            spray::find_good_windows(&hours, &thresholds),
            spray::find_good_windows(&hours, &thresholds)
        );

        let summary = disease::summarize_wetness(&hours);
        prop_assert_eq!(summary, disease::summarize_wetness(&hours));

        let engine = DiseaseRiskEngine::new();
        let first: Vec<RiskLevel> = engine.evaluate(&summary).iter().map(|r| r.risk).collect();
        let second: Vec<RiskLevel> = engine.evaluate(&summary).iter().map(|r| r.risk).collect();
        prop_assert_eq!(first, second);

        let temps: Vec<f64> = hours.iter().map(|h| h.temperature_c).collect();
        prop_assert_eq!(
            chilling::total_chill_units(&temps),
            chilling::total_chill_units(&temps)
        );
    }

    #[test]
    fn irrigation_tier_is_monotonic(a in 0.0..15.0f64, b in 0.0..15.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(irrigation::irrigation_tier(lo) <= irrigation::irrigation_tier(hi));
    }

    #[test]
    fn max_risk_dominates_every_entry(
        levels in prop::collection::vec(
            prop::sample::select(vec![
                RiskLevel::Basso,
                RiskLevel::Moderato,
                RiskLevel::Alto,
                RiskLevel::Critico,
            ]),
            0..10,
        ),
    ) {
        let worst = disease::max_risk(&levels);
        for level in &levels {
            prop_assert!(*level <= worst);
        }
        if levels.is_empty() {
            prop_assert_eq!(worst, RiskLevel::Basso);
        }
    }
}
