//! Simulation settings
//!
//! Loaded from JSON by the shell; every field falls back to its default.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Obstacle density presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SettingsPreset {
    Sparse,
    #[default]
    Default,
    Dense,
}

impl SettingsPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsPreset::Sparse => "Sparse",
            SettingsPreset::Default => "Default",
            SettingsPreset::Dense => "Dense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sparse" => Some(SettingsPreset::Sparse),
            "default" | "normal" => Some(SettingsPreset::Default),
            "dense" => Some(SettingsPreset::Dense),
            _ => None,
        }
    }

    /// Obstacle count for this preset
    pub fn obstacle_count(&self) -> usize {
        match self {
            SettingsPreset::Sparse => 2,
            SettingsPreset::Default => OBSTACLE_COUNT,
            SettingsPreset::Dense => 20,
        }
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (same seed + settings = same run)
    pub seed: u64,

    // === Arena ===
    /// Ground spans [-half, half] on both axes
    pub arena_half_extent: f32,

    // === Obstacles ===
    pub obstacle_count: usize,
    pub obstacle_min_size: f32,
    pub obstacle_max_size: f32,
    /// Obstacle centres stay this far inside the arena edge
    pub obstacle_edge_margin: f32,

    // === Robots ===
    /// Distance moved per tick
    pub agent_speed: f32,
    /// Edge length of the robot cube (also the touch distance)
    pub agent_size: f32,
    /// Clearance kept from an obstacle when hiding behind it
    pub hiding_margin: f32,
    pub first_color: [f32; 4],
    pub second_color: [f32; 4],

    // === Placement ===
    /// Rejection-sampling cap for spawn positions
    pub max_placement_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,

            arena_half_extent: ARENA_HALF_EXTENT,

            obstacle_count: OBSTACLE_COUNT,
            obstacle_min_size: OBSTACLE_MIN_SIZE,
            obstacle_max_size: OBSTACLE_MAX_SIZE,
            obstacle_edge_margin: OBSTACLE_EDGE_MARGIN,

            agent_speed: AGENT_SPEED,
            agent_size: AGENT_SIZE,
            hiding_margin: HIDING_MARGIN,
            first_color: crate::render::colors::RED_ROBOT,
            second_color: crate::render::colors::BLUE_ROBOT,

            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Create settings from a preset (applies preset defaults)
    pub fn from_preset(preset: SettingsPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a preset (updates preset-dependent settings)
    pub fn apply_preset(&mut self, preset: SettingsPreset) {
        self.obstacle_count = preset.obstacle_count();
    }

    /// Obstacle edge length range
    pub fn obstacle_size_range(&self) -> RangeInclusive<f32> {
        self.obstacle_min_size..=self.obstacle_max_size
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check parameters the simulation relies on
    pub fn validate(&self) -> Result<(), SimError> {
        let invalid = |msg: &str| Err(SimError::InvalidSettings(msg.to_string()));

        let lengths = [
            ("arena_half_extent", self.arena_half_extent),
            ("obstacle_min_size", self.obstacle_min_size),
            ("obstacle_max_size", self.obstacle_max_size),
            ("obstacle_edge_margin", self.obstacle_edge_margin),
            ("agent_speed", self.agent_speed),
            ("agent_size", self.agent_size),
            ("hiding_margin", self.hiding_margin),
        ];
        if let Some((name, _)) = lengths.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(&format!("{name} must be finite"));
        }

        if !(self.arena_half_extent > 0.0) {
            return invalid("arena_half_extent must be positive");
        }
        if !(self.agent_speed > 0.0) {
            return invalid("agent_speed must be positive");
        }
        if !(self.agent_size > 0.0) {
            return invalid("agent_size must be positive");
        }
        if !(self.hiding_margin > 0.0) {
            return invalid("hiding_margin must be positive");
        }
        if !(self.obstacle_min_size > 0.0) || self.obstacle_min_size > self.obstacle_max_size {
            return invalid("obstacle size range must be positive and ordered");
        }
        if self.obstacle_edge_margin < 0.0 || self.obstacle_edge_margin > self.arena_half_extent {
            return invalid("obstacle_edge_margin must lie within the arena");
        }
        if self.max_placement_attempts == 0 {
            return invalid("max_placement_attempts must be at least 1");
        }
        Ok(())
    }
}
