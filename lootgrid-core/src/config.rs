use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error type for configuration validation.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("spacing must be a positive finite distance, got {0}")]
    InvalidSpacing(f64),
    #[error("lift step must be a non-negative finite distance, got {0}")]
    InvalidLiftStep(f64),
    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),
}

/// Which classification keys drive the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Rarity only; groups spread along the facing axis.
    Rarity,
    /// Rarity along the facing axis, category along the perpendicular.
    RarityCategory,
}

impl FromStr for SortMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "rarity" => Ok(SortMode::Rarity),
            "rarity-category" => Ok(SortMode::RarityCategory),
            other => Err(ConfigError::UnknownSortMode(other.to_string())),
        }
    }
}

/// Default spacing between groups, in world units.
pub const DEFAULT_SPACING: f64 = 75.0;

/// Placement configuration, snapshotted at invocation start and read-only
/// during a run.
///
/// `spacing` is the distance between adjacent group anchors; sensible
/// values sit in roughly [50, 200] world units, and anything not strictly
/// positive is rejected. `lift_step` is the legacy per-group vertical nudge
/// used by the rarity-only layout; zero disables it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub sort_mode: SortMode,
    pub spacing: f64,
    pub include_echo_logs: bool,
    pub flatten: bool,
    pub lift_step: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig {
            sort_mode: SortMode::Rarity,
            spacing: DEFAULT_SPACING,
            include_echo_logs: false,
            flatten: false,
            lift_step: 0.0,
        }
    }
}

impl PlacementConfig {
    /// Validates the configuration. Called once at configuration-load
    /// time; layout code assumes a valid config and never re-checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !self.lift_step.is_finite() || self.lift_step < 0.0 {
            return Err(ConfigError::InvalidLiftStep(self.lift_step));
        }
        Ok(())
    }
}
