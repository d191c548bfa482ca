//! Конфигурация симуляции (JSON, все поля опциональны — `#[serde(default)]`)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::CatConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid simulation config: {0}")]
    Invalid(String),
}

/// Глобальные параметры уровня
///
/// Вставляется как Resource в `SimulationPlugin`; `cat` служит шаблоном
/// для `CatConfig` новых котов.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Частота FixedUpdate (движение котов)
    pub fixed_hz: f64,
    pub rng_seed: u64,
    /// Размер клетки сетки (world units)
    pub grid_cell_size: f32,
    /// Порог питания лазерной решётки по умолчанию
    pub laser_default_level: i32,
    pub cat: CatConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_hz: 60.0,
            rng_seed: 42,
            grid_cell_size: 1.0,
            laser_default_level: 3,
            cat: CatConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_hz > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fixed_hz must be positive, got {}",
                self.fixed_hz
            )));
        }
        if !(self.grid_cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid_cell_size must be positive, got {}",
                self.grid_cell_size
            )));
        }

        let cat = &self.cat;
        if cat.patrol_speed < 0.0 || cat.chase_speed < 0.0 {
            return Err(ConfigError::Invalid("cat speeds must be non-negative".into()));
        }
        if cat.length_of_view < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cat length_of_view must be non-negative, got {}",
                cat.length_of_view
            )));
        }
        if cat.lose_sight_grace < 0.0 {
            return Err(ConfigError::Invalid("cat lose_sight_grace must be non-negative".into()));
        }

        Ok(())
    }
}
