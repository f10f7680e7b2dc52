use std::{fs, path::Path};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{components::RibbonConfig, contexts::ScaleSlider, DancersError, DancersResult};

/// One dancer on the floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DancerConfig {
    /// A helpful name, used in log messages
    pub name: String,
    /// Where the dancer stands, relative to the stage
    pub position: Vec3,
    /// Start with the skeleton debug view visible
    pub display: bool,
    /// Wear the tetra skin
    pub markers: bool,
    /// Wear the ribbon skin, and how it looks
    pub ribbon: Option<RibbonConfig>,
}

impl Default for DancerConfig {
    fn default() -> Self {
        Self {
            name: "Dancer".into(),
            position: Vec3::ZERO,
            display: false,
            markers: true,
            ribbon: Some(RibbonConfig::default()),
        }
    }
}

/// Everything needed to set up a [`crate::DanceFloor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DanceFloorConfig {
    /// The dancers, in the order they are spawned
    pub dancers: Vec<DancerConfig>,
    /// Initial scale of the whole floor
    pub scale: f32,
    /// Limits of the scale slider
    pub scale_slider: ScaleSlider,
    /// Seed for the ribbons' random offsets. Leave empty for a different show every time.
    pub seed: Option<u64>,
}

impl Default for DanceFloorConfig {
    fn default() -> Self {
        Self {
            dancers: vec![DancerConfig::default()],
            scale: 1.0,
            scale_slider: ScaleSlider::default(),
            seed: None,
        }
    }
}

impl DanceFloorConfig {
    /// Read a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> DancersResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a config
    pub fn from_json(json: &str) -> DancersResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is in range
    pub fn validate(&self) -> DancersResult<()> {
        let slider = &self.scale_slider;
        if !(slider.min > 0. && slider.min <= slider.max && slider.max.is_finite()) {
            return Err(DancersError::InvalidConfig(format!(
                "scale slider range {}..{} must be positive and not empty",
                slider.min, slider.max
            )));
        }
        if !slider.step.is_finite() || slider.step < 0. {
            return Err(DancersError::InvalidConfig(format!(
                "scale slider step must be a non-negative number, got {}",
                slider.step
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0. {
            return Err(DancersError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        for dancer in &self.dancers {
            if let Some(ribbon) = &dancer.ribbon {
                ribbon.validate()?;
            }
        }
        Ok(())
    }
}
