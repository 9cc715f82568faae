use crate::error::{AgroError, Result};
use crate::logic::spray::TreatmentThresholds;
use crate::models::{Crop, FruitCrop};
use crate::report::AnalysisPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub farm: FarmConfig,
    pub thresholds: TreatmentThresholds,
    pub analysis: AnalysisPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FarmConfig {
    pub name: String,
    /// Default crop for the GDD section; Italian or English name
    pub crop: String,
    /// Default fruit crop for the chilling section
    pub fruit_crop: String,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            name: "Azienda".into(),
            crop: "mais".into(),
            fruit_crop: "melo".into(),
        }
    }
}

impl FarmConfig {
    pub fn crop(&self) -> Result<Crop> {
        Crop::from_str(&self.crop).ok_or_else(|| AgroError::UnknownCrop(self.crop.clone()))
    }

    pub fn fruit_crop(&self) -> Result<FruitCrop> {
        FruitCrop::from_str(&self.fruit_crop)
            .ok_or_else(|| AgroError::UnknownCrop(self.fruit_crop.clone()))
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgroError::Config(format!(
                "Config file not found at {:?}",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgroError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| AgroError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Load from the standard locations, falling back to defaults when
    /// no config file exists. An unparseable file is still an error.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        match config_override {
            Some(p) => Self::load(Some(p)),
            None => {
                let path = Self::find_config_path()?;
                if path.exists() {
                    Self::load(Some(path))
                } else {
                    tracing::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agrometeo").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| AgroError::Config("Cannot determine config directory".into()))?
            .join("agrometeo")
            .join("config.yaml");
        Ok(default_path)
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
