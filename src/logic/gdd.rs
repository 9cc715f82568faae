use crate::error::Result;
use crate::models::weather::ensure_aligned;

/// Growing Degree Days for one day.
/// Formula: GDD = max(0, ((Tmax + Tmin) / 2) - Tbase)
pub fn daily_gdd(tmax_c: f64, tmin_c: f64, base_c: f64) -> f64 {
    let avg = (tmax_c + tmin_c) / 2.0;
    (avg - base_c).max(0.0)
}

/// Sum of daily GDD over aligned max/min temperature series.
/// Empty series accumulate to zero.
pub fn cumulative_gdd(tmax_c: &[f64], tmin_c: &[f64], base_c: f64) -> Result<f64> {
    ensure_aligned("tmax", tmax_c.len(), "tmin", tmin_c.len())?;
    Ok(tmax_c
        .iter()
        .zip(tmin_c)
        .map(|(&tmax, &tmin)| daily_gdd(tmax, tmin, base_c))
        .sum())
}

/// Days until the maturity GDD target is reached at the observed
/// accumulation rate. `None` when growth has stalled (rate <= 0): no
/// ETA can be given.
pub fn estimate_days_to_maturity(avg_daily_gdd: f64, target_gdd: f64) -> Option<u32> {
    if avg_daily_gdd <= 0.0 {
        return None;
    }
    Some((target_gdd / avg_daily_gdd).round() as u32)
}
