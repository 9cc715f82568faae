use crate::models::DailyObservation;
use chrono::NaiveDate;
use serde::Serialize;

/// Minimum temperature below which a day is flagged as a frost risk.
pub const FROST_THRESHOLD_C: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrostDay {
    pub date: NaiveDate,
    pub tmin_c: f64,
}

/// Days whose minimum temperature drops below the frost threshold.
pub fn frost_days(days: &[DailyObservation]) -> Vec<FrostDay> {
    days.iter()
        .filter(|d| d.tmin_c < FROST_THRESHOLD_C)
        .map(|d| FrostDay {
            date: d.date,
            tmin_c: d.tmin_c,
        })
        .collect()
}

/// Wind alert severity by daily peak speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindLevel {
    Moderato,
    Forte,
    #[serde(rename = "molto forte")]
    MoltoForte,
}

impl WindLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindLevel::Moderato => "moderato",
            WindLevel::Forte => "forte",
            WindLevel::MoltoForte => "molto forte",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            WindLevel::Moderato => "Verifica la stabilità di serre e tunnel.",
            WindLevel::Forte => "Rinforza protezioni e rimanda trattamenti fogliari.",
            WindLevel::MoltoForte => {
                "Rischio danni alle colture. Metti in sicurezza strutture e attrezzature."
            }
        }
    }
}

impl std::fmt::Display for WindLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Level for a daily peak wind speed; below 30 km/h no alert is raised.
pub fn wind_level(speed_kmh: f64) -> Option<WindLevel> {
    if speed_kmh >= 60.0 {
        Some(WindLevel::MoltoForte)
    } else if speed_kmh >= 40.0 {
        Some(WindLevel::Forte)
    } else if speed_kmh >= 30.0 {
        Some(WindLevel::Moderato)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindyDay {
    pub date: NaiveDate,
    pub wind_speed_kmh: f64,
    pub level: WindLevel,
}

/// Days whose peak wind reaches at least the moderato level.
pub fn wind_alerts(days: &[DailyObservation]) -> Vec<WindyDay> {
    days.iter()
        .filter_map(|d| {
            wind_level(d.wind_max_kmh).map(|level| WindyDay {
                date: d.date,
                wind_speed_kmh: d.wind_max_kmh,
                level,
            })
        })
        .collect()
}

/// Worst level among the flagged days; drives the alert headline.
pub fn worst_wind_level(days: &[WindyDay]) -> Option<WindLevel> {
    days.iter().map(|d| d.level).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date_day: u32, tmin_c: f64, wind_max_kmh: f64) -> DailyObservation {
        DailyObservation {
            date: NaiveDate::from_ymd_opt(2024, 11, date_day).unwrap(),
            tmax_c: tmin_c + 8.0,
            tmin_c,
            et0_mm: 1.0,
            wind_max_kmh,
        }
    }

    #[test]
    fn frost_days_below_two_degrees() {
        let days = [day(1, 5.0, 10.0), day(2, 1.9, 10.0), day(3, -3.0, 10.0)];
        let frost = frost_days(&days);
        assert_eq!(frost.len(), 2);
        assert_eq!(frost[0].tmin_c, 1.9);
        assert_eq!(frost[1].tmin_c, -3.0);
    }

    #[test]
    fn two_degrees_exactly_is_not_frost() {
        assert!(frost_days(&[day(1, 2.0, 10.0)]).is_empty());
    }

    #[test]
    fn wind_level_bands() {
        assert_eq!(wind_level(25.0), None);
        assert_eq!(wind_level(30.0), Some(WindLevel::Moderato));
        assert_eq!(wind_level(40.0), Some(WindLevel::Forte));
        assert_eq!(wind_level(59.9), Some(WindLevel::Forte));
        assert_eq!(wind_level(60.0), Some(WindLevel::MoltoForte));
    }

    #[test]
    fn wind_alerts_keep_only_flagged_days() {
        let days = [day(1, 5.0, 20.0), day(2, 5.0, 45.0), day(3, 5.0, 65.0)];
        let alerts = wind_alerts(&days);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].level, WindLevel::Forte);
        assert_eq!(alerts[1].level, WindLevel::MoltoForte);
    }

    #[test]
    fn worst_level_drives_the_headline() {
        let days = [day(1, 5.0, 31.0), day(2, 5.0, 62.0)];
        let alerts = wind_alerts(&days);
        assert_eq!(worst_wind_level(&alerts), Some(WindLevel::MoltoForte));
        assert_eq!(worst_wind_level(&[]), None);
    }

    #[test]
    fn quiet_week_raises_nothing() {
        let days = [day(1, 6.0, 12.0), day(2, 7.0, 18.0)];
        assert!(frost_days(&days).is_empty());
        assert!(wind_alerts(&days).is_empty());
    }
}
