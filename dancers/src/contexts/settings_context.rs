use std::vec::Drain;

use serde::{Deserialize, Serialize};

/// Something the user did on the settings panel or a controller button
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsEvent {
    /// Flip every dancer's ribbon trails on or off
    ToggleRibbons,
    /// Flip every dancer's tetrahedron markers on or off
    ToggleMarkers,
    /// Flip every dancer's skeleton debug view on or off
    ToggleSkeleton,
    /// The scale slider moved
    SetScale(f32),
}

/// Range and granularity of the scale slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSlider {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for ScaleSlider {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 2.0,
            step: 0.1,
        }
    }
}

impl ScaleSlider {
    /// Clamp `value` to the slider's range and snap it to the nearest step
    pub fn quantize(&self, value: f32) -> f32 {
        let value = value.clamp(self.min, self.max);
        if self.step <= 0. {
            return value;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// Queue of [`SettingsEvent`]s waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct SettingsContext {
    pub scale_slider: ScaleSlider,
    pending: Vec<SettingsEvent>,
}

impl SettingsContext {
    pub fn new(scale_slider: ScaleSlider) -> Self {
        Self {
            scale_slider,
            pending: Vec::new(),
        }
    }

    /// Queue an event to be applied on the next tick
    pub fn send(&mut self, event: SettingsEvent) {
        self.pending.push(event);
    }

    /// Take every queued event, oldest first
    pub fn drain(&mut self) -> Drain<'_, SettingsEvent> {
        self.pending.drain(..)
    }
}
