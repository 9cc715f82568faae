use crate::error::{AgroError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One hourly weather sample. Temperatures in °C, precipitation in mm,
/// wind in km/h, humidity and precipitation probability in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub dew_point_c: f64,
    pub precipitation_mm: f64,
    pub precipitation_probability_pct: f64,
    pub wind_speed_kmh: f64,
}

/// One calendar day's aggregates: temperature extremes, reference
/// evapotranspiration and peak wind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub tmax_c: f64,
    pub tmin_c: f64,
    pub et0_mm: f64,
    pub wind_max_kmh: f64,
}

/// Hourly series as the weather collaborator delivers them: parallel
/// arrays sharing index correspondence, Open-Meteo field names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<NaiveDateTime>,
    pub temperature_2m: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub dew_point_2m: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub wind_speed_10m: Vec<f64>,
}

impl HourlySeries {
    /// Zip the parallel arrays into observation values. Misaligned
    /// lengths are a contract violation, not recoverable data.
    pub fn observations(&self) -> Result<Vec<HourlyObservation>> {
        ensure_aligned("time", self.time.len(), "temperature_2m", self.temperature_2m.len())?;
        ensure_aligned(
            "time",
            self.time.len(),
            "relative_humidity_2m",
            self.relative_humidity_2m.len(),
        )?;
        ensure_aligned("time", self.time.len(), "dew_point_2m", self.dew_point_2m.len())?;
        ensure_aligned("time", self.time.len(), "precipitation", self.precipitation.len())?;
        ensure_aligned(
            "time",
            self.time.len(),
            "precipitation_probability",
            self.precipitation_probability.len(),
        )?;
        ensure_aligned("time", self.time.len(), "wind_speed_10m", self.wind_speed_10m.len())?;

        Ok((0..self.time.len())
            .map(|i| HourlyObservation {
                timestamp: self.time[i],
                temperature_c: self.temperature_2m[i],
                humidity_pct: self.relative_humidity_2m[i],
                dew_point_c: self.dew_point_2m[i],
                precipitation_mm: self.precipitation[i],
                precipitation_probability_pct: self.precipitation_probability[i],
                wind_speed_kmh: self.wind_speed_10m[i],
            })
            .collect())
    }
}

/// Daily series in the collaborator's parallel-array form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub et0_fao_evapotranspiration: Vec<f64>,
    pub wind_speed_10m_max: Vec<f64>,
}

impl DailySeries {
    pub fn observations(&self) -> Result<Vec<DailyObservation>> {
        ensure_aligned(
            "time",
            self.time.len(),
            "temperature_2m_max",
            self.temperature_2m_max.len(),
        )?;
        ensure_aligned(
            "time",
            self.time.len(),
            "temperature_2m_min",
            self.temperature_2m_min.len(),
        )?;
        ensure_aligned(
            "time",
            self.time.len(),
            "et0_fao_evapotranspiration",
            self.et0_fao_evapotranspiration.len(),
        )?;
        ensure_aligned(
            "time",
            self.time.len(),
            "wind_speed_10m_max",
            self.wind_speed_10m_max.len(),
        )?;

        Ok((0..self.time.len())
            .map(|i| DailyObservation {
                date: self.time[i],
                tmax_c: self.temperature_2m_max[i],
                tmin_c: self.temperature_2m_min[i],
                et0_mm: self.et0_fao_evapotranspiration[i],
                wind_max_kmh: self.wind_speed_10m_max[i],
            })
            .collect())
    }
}

/// Full input contract: one daily and one hourly block, as exported by
/// the weather collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub daily: DailySeries,
    pub hourly: HourlySeries,
}

pub(crate) fn ensure_aligned(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> Result<()> {
    if left_len != right_len {
        return Err(AgroError::LengthMismatch {
            left,
            left_len,
            right,
            right_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hourly_fixture(n: usize) -> HourlySeries {
        let base = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        HourlySeries {
            time: (0..n)
                .map(|i| base + chrono::Duration::hours(i as i64))
                .collect(),
            temperature_2m: vec![15.0; n],
            relative_humidity_2m: vec![60.0; n],
            dew_point_2m: vec![8.0; n],
            precipitation: vec![0.0; n],
            precipitation_probability: vec![10.0; n],
            wind_speed_10m: vec![5.0; n],
        }
    }

    #[test]
    fn hourly_series_zips_into_observations() {
        let obs = hourly_fixture(3).observations().unwrap();
        assert_eq!(obs.len(), 3);
        assert_eq!(obs[0].temperature_c, 15.0);
        assert_eq!(obs[2].wind_speed_kmh, 5.0);
    }

    #[test]
    fn hourly_series_rejects_misaligned_arrays() {
        let mut series = hourly_fixture(3);
        series.precipitation.pop();
        let err = series.observations().unwrap_err();
        assert!(matches!(
            err,
            crate::error::AgroError::LengthMismatch {
                right: "precipitation",
                right_len: 2,
                ..
            }
        ));
    }

    #[test]
    fn daily_series_rejects_misaligned_arrays() {
        let series = DailySeries {
            time: vec![NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()],
            temperature_2m_max: vec![20.0],
            temperature_2m_min: vec![10.0, 11.0],
            et0_fao_evapotranspiration: vec![3.0],
            wind_speed_10m_max: vec![12.0],
        };
        assert!(series.observations().is_err());
    }

    #[test]
    fn empty_series_yield_empty_observations() {
        assert!(HourlySeries::default().observations().unwrap().is_empty());
        assert!(DailySeries::default().observations().unwrap().is_empty());
    }
}
