use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domains::flight_planning::engine::PlannerTunables;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub planning: PlanningConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Wind speed above which sweep orientation follows the wind, km/h.
    pub drift_threshold_kmh: f64,
    /// Minimum polygon area as a fraction of the declared hectares.
    pub geometry_epsilon_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Base directory for boundary files; None falls back to the loader's
    /// resolution order.
    pub data_dir: Option<String>,
    /// Directory the file plan store writes into.
    pub plan_store_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn tunables(&self) -> PlannerTunables {
        PlannerTunables {
            drift_threshold_kmh: self.planning.drift_threshold_kmh,
            geometry_epsilon_ratio: self.planning.geometry_epsilon_ratio,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let defaults = PlannerTunables::default();
        Self {
            planning: PlanningConfig {
                drift_threshold_kmh: defaults.drift_threshold_kmh,
                geometry_epsilon_ratio: defaults.geometry_epsilon_ratio,
            },
            data: DataConfig {
                data_dir: None,
                plan_store_dir: "data/plans".to_string(),
            },
            logging: LoggingConfig { file: None },
        }
    }
}
