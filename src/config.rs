//! Construction-time simulation parameters
//!
//! Nothing here changes while a simulator is running.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Bubble simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Largest radius (px, exclusive)
    pub max_radius: u32,
    /// Smallest radius (px, inclusive)
    pub min_radius: u32,
    /// Maximum number of live bubbles
    pub max_count: usize,
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Upward speed bound (px/tick, exclusive)
    pub max_speed_y: f32,
    /// Spawn probability per eligible tick (0.0 - 1.0)
    pub spawn_chance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_radius: MAX_RADIUS,
            min_radius: MIN_RADIUS,
            max_count: MAX_COUNT,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_speed_y: MAX_SPEED_Y,
            spawn_chance: SPAWN_CHANCE,
        }
    }
}

impl SimConfig {
    /// Tick period as a [`Duration`]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject parameter sets the sampler cannot satisfy
    pub fn validate(&self) -> Result<()> {
        if self.min_radius >= self.max_radius {
            return Err(SimError::InvalidConfig(format!(
                "min_radius ({}) must be below max_radius ({})",
                self.min_radius, self.max_radius
            )));
        }
        // speed_y is drawn from [1, max_speed_y)
        if self.max_speed_y <= 1.0 || !self.max_speed_y.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "max_speed_y ({}) must be a finite value above 1",
                self.max_speed_y
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(SimError::InvalidConfig(
                "tick_interval_ms must be non-zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(SimError::InvalidConfig(format!(
                "spawn_chance ({}) must lie in [0, 1]",
                self.spawn_chance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = SimConfig::default();
        assert_eq!(config.max_radius, 30);
        assert_eq!(config.min_radius, 5);
        assert_eq!(config.max_count, 30);
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let radius = SimConfig {
            min_radius: 30,
            ..Default::default()
        };
        assert!(matches!(radius.validate(), Err(SimError::InvalidConfig(_))));

        let speed = SimConfig {
            max_speed_y: 1.0,
            ..Default::default()
        };
        assert!(speed.validate().is_err());

        let nan = SimConfig {
            max_speed_y: f32::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        let interval = SimConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(interval.validate().is_err());

        let chance = SimConfig {
            spawn_chance: 1.5,
            ..Default::default()
        };
        assert!(chance.validate().is_err());
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
