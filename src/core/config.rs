//! Engine configuration.
//!
//! Grid dimensions and the opponent's search parameters are configured at
//! startup. The wire names follow the recognized option set
//! `{gridWidth, gridHeight, probeRadius, probeAttempts}` plus
//! `openingRadius` and `seed`; every field has a default so partial
//! documents deserialize.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Default grid width (columns).
pub const DEFAULT_GRID_WIDTH: usize = 40;

/// Default grid height (rows).
pub const DEFAULT_GRID_HEIGHT: usize = 30;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Number of columns.
    pub grid_width: usize,

    /// Number of rows.
    pub grid_height: usize,

    /// Half-width of the random probe window around the last placement.
    pub probe_radius: i32,

    /// Random probes tried before falling back to the first unowned cell.
    pub probe_attempts: u32,

    /// Probe half-width used while the opponent owns no cells yet.
    pub opening_radius: i32,

    /// Seed for the opponent's default random source.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            probe_radius: 3,
            probe_attempts: 10,
            opening_radius: 1,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, width: usize, height: usize) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    /// Set the probe radius.
    #[must_use]
    pub fn with_probe_radius(mut self, radius: i32) -> Self {
        self.probe_radius = radius;
        self
    }

    /// Set the number of probe attempts.
    #[must_use]
    pub fn with_probe_attempts(mut self, attempts: u32) -> Self {
        self.probe_attempts = attempts;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> EngineResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if i32::try_from(self.grid_width).is_err() || i32::try_from(self.grid_height).is_err() {
            return Err(EngineError::InvalidConfig("grid dimensions exceed i32".into()));
        }
        if self.probe_radius < 0 || self.opening_radius < 0 {
            return Err(EngineError::InvalidConfig("probe radii must be non-negative".into()));
        }
        if self.probe_attempts == 0 {
            return Err(EngineError::InvalidConfig("probe attempts must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.probe_radius, 3);
        assert_eq!(config.probe_attempts, 10);
        assert_eq!(config.opening_radius, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_grid(9, 7)
            .with_probe_radius(2)
            .with_probe_attempts(4)
            .with_seed(7);

        assert_eq!(config.grid_width, 9);
        assert_eq!(config.grid_height, 7);
        assert_eq!(config.probe_radius, 2);
        assert_eq!(config.probe_attempts, 4);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let err = EngineConfig::default().with_grid(0, 5).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = EngineConfig::default().with_probe_attempts(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let config = EngineConfig::default().with_probe_radius(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = r#"{"gridWidth": 12, "gridHeight": 8, "probeRadius": 2, "probeAttempts": 5}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 8);
        assert_eq!(config.probe_radius, 2);
        assert_eq!(config.probe_attempts, 5);
        // Missing fields fall back to defaults
        assert_eq!(config.opening_radius, 1);
        assert_eq!(config.seed, 42);
    }
}
