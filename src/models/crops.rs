use serde::{Deserialize, Serialize};

/// Thermal accumulation profile for a field crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropThermalProfile {
    pub base_temperature_c: f64,
    pub maturity_gdd: f64,
}

/// Dormancy-breaking cold requirement for a fruit crop, in chilling hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChillRequirement {
    pub min_hours: f64,
    pub max_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crop {
    Maize,
    Wheat,
    Tomato,
    Grapevine,
    Sunflower,
}

impl Crop {
    pub const ALL: [Crop; 5] = [
        Crop::Maize,
        Crop::Wheat,
        Crop::Tomato,
        Crop::Grapevine,
        Crop::Sunflower,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Maize => "Mais",
            Crop::Wheat => "Grano",
            Crop::Tomato => "Pomodoro",
            Crop::Grapevine => "Vite",
            Crop::Sunflower => "Girasole",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mais" | "maize" | "corn" => Some(Crop::Maize),
            "grano" | "wheat" => Some(Crop::Wheat),
            "pomodoro" | "tomato" => Some(Crop::Tomato),
            "vite" | "grapevine" | "grape" => Some(Crop::Grapevine),
            "girasole" | "sunflower" => Some(Crop::Sunflower),
            _ => None,
        }
    }

    pub fn thermal_profile(&self) -> CropThermalProfile {
        let (base_temperature_c, maturity_gdd) = match self {
            Crop::Maize => (10.0, 2700.0),
            Crop::Wheat => (5.0, 1500.0),
            Crop::Tomato => (10.0, 1400.0),
            Crop::Grapevine => (10.0, 1800.0),
            Crop::Sunflower => (8.0, 1600.0),
        };
        CropThermalProfile {
            base_temperature_c,
            maturity_gdd,
        }
    }

    pub fn base_temperature_c(&self) -> f64 {
        self.thermal_profile().base_temperature_c
    }

    pub fn maturity_gdd(&self) -> f64 {
        self.thermal_profile().maturity_gdd
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitCrop {
    Apple,
    Pear,
    Peach,
    Cherry,
    Apricot,
    Plum,
}

impl FruitCrop {
    pub const ALL: [FruitCrop; 6] = [
        FruitCrop::Apple,
        FruitCrop::Pear,
        FruitCrop::Peach,
        FruitCrop::Cherry,
        FruitCrop::Apricot,
        FruitCrop::Plum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FruitCrop::Apple => "Melo",
            FruitCrop::Pear => "Pero",
            FruitCrop::Peach => "Pesco",
            FruitCrop::Cherry => "Ciliegio",
            FruitCrop::Apricot => "Albicocco",
            FruitCrop::Plum => "Susino",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "melo" | "apple" => Some(FruitCrop::Apple),
            "pero" | "pear" => Some(FruitCrop::Pear),
            "pesco" | "peach" => Some(FruitCrop::Peach),
            "ciliegio" | "cherry" => Some(FruitCrop::Cherry),
            "albicocco" | "apricot" => Some(FruitCrop::Apricot),
            "susino" | "plum" => Some(FruitCrop::Plum),
            _ => None,
        }
    }

    pub fn chill_requirement(&self) -> ChillRequirement {
        let (min_hours, max_hours) = match self {
            FruitCrop::Apple => (800.0, 1200.0),
            FruitCrop::Pear => (600.0, 1000.0),
            FruitCrop::Peach => (400.0, 800.0),
            FruitCrop::Cherry => (700.0, 1200.0),
            FruitCrop::Apricot => (300.0, 600.0),
            FruitCrop::Plum => (500.0, 900.0),
        };
        ChillRequirement {
            min_hours,
            max_hours,
        }
    }
}

impl std::fmt::Display for FruitCrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
