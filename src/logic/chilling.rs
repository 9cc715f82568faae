use crate::error::Result;
use crate::models::weather::ensure_aligned;

/// Count model: an hour contributes when the temperature sits in the
/// 0-7 °C range, both bounds inclusive.
pub fn is_chilling_hour(temperature_c: f64) -> bool {
    (0.0..=7.0).contains(&temperature_c)
}

/// Chilling hours accumulated over an hourly temperature series.
pub fn chilling_hours(temperatures_c: &[f64]) -> usize {
    temperatures_c
        .iter()
        .filter(|&&t| is_chilling_hour(t))
        .count()
}

/// Utah model: weighted chill units for one hourly temperature.
/// High temperatures erode previously accumulated dormancy effect.
pub fn chill_unit(temperature_c: f64) -> f64 {
    if temperature_c < 1.5 {
        0.0
    } else if temperature_c < 2.5 {
        0.5
    } else if temperature_c < 9.2 {
        1.0
    } else if temperature_c < 12.5 {
        0.5
    } else if temperature_c < 16.0 {
        0.0
    } else if temperature_c < 18.0 {
        -0.5
    } else {
        -1.0
    }
}

/// Total Utah chill units over an hourly temperature series; may be
/// negative.
pub fn total_chill_units(temperatures_c: &[f64]) -> f64 {
    temperatures_c.iter().map(|&t| chill_unit(t)).sum()
}

/// Approximate chilling hours for a whole day from its temperature
/// extremes, for seasonal accumulation over daily archives where no
/// hourly record exists.
pub fn estimate_daily_chilling_hours(tmin_c: f64, tmax_c: f64) -> f64 {
    let avg = (tmin_c + tmax_c) / 2.0;

    if avg < 0.0 {
        return (24.0 - tmin_c.abs() * 2.0).max(0.0);
    }
    if avg > 10.0 {
        return 0.0;
    }

    // Hours in the 0-7 °C band, estimated from distance to the band center
    (24.0 - (avg - 3.5).abs() * 3.0).clamp(0.0, 24.0)
}

/// Approximate Utah chill units for a whole day from its temperature
/// extremes.
pub fn estimate_daily_chill_units(tmin_c: f64, tmax_c: f64) -> f64 {
    let avg = (tmin_c + tmax_c) / 2.0;

    if (2.5..9.2).contains(&avg) {
        24.0
    } else if (1.5..2.5).contains(&avg) {
        12.0
    } else if (9.2..12.5).contains(&avg) {
        12.0
    } else if (12.5..16.0).contains(&avg) {
        0.0
    } else if (16.0..18.0).contains(&avg) {
        -12.0
    } else if avg >= 18.0 {
        -24.0
    } else {
        0.0
    }
}

/// Seasonal chilling-hour accumulation over aligned daily min/max series.
pub fn seasonal_chilling_hours(tmin_c: &[f64], tmax_c: &[f64]) -> Result<f64> {
    ensure_aligned("tmin", tmin_c.len(), "tmax", tmax_c.len())?;
    Ok(tmin_c
        .iter()
        .zip(tmax_c)
        .map(|(&tmin, &tmax)| estimate_daily_chilling_hours(tmin, tmax))
        .sum())
}

/// Seasonal Utah chill-unit accumulation over aligned daily min/max series.
pub fn seasonal_chill_units(tmin_c: &[f64], tmax_c: &[f64]) -> Result<f64> {
    ensure_aligned("tmin", tmin_c.len(), "tmax", tmax_c.len())?;
    Ok(tmin_c
        .iter()
        .zip(tmax_c)
        .map(|(&tmin, &tmax)| estimate_daily_chill_units(tmin, tmax))
        .sum())
}
