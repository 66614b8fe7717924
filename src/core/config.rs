use serde::{Deserialize, Serialize};

use crate::dnd::DndError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u32,
    pub easing: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            easing: "ease".to_string(),
        }
    }
}

impl TransitionConfig {
    /// CSS `transition` value for the transform property.
    pub fn to_css(&self) -> String {
        format!("transform {}ms {}", self.duration_ms, self.easing)
    }
}

/// Settings for the drag-and-drop engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DndConfig {
    /// Pixels the pointer has to travel before a pressed handle starts a drag. Zero starts on press.
    pub activation_distance: f64,
    /// Pixels moved per arrow key while dragging with the keyboard.
    pub keyboard_step: f64,
    pub transition: TransitionConfig,
    /// When set, the source node stays in place and a drag overlay follows the pointer instead.
    pub overlay: bool,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self {
            activation_distance: 0.0,
            keyboard_step: 25.0,
            transition: TransitionConfig::default(),
            overlay: false,
        }
    }
}

impl DndConfig {
    pub fn from_json(raw: &str) -> Result<Self, DndError> {
        let config: DndConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DndError> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(DndError::InvalidConfig(format!(
                "activation_distance must be a non-negative number, got {}",
                self.activation_distance
            )));
        }
        if !self.keyboard_step.is_finite() || self.keyboard_step <= 0.0 {
            return Err(DndError::InvalidConfig(format!(
                "keyboard_step must be positive, got {}",
                self.keyboard_step
            )));
        }
        if self.transition.easing.trim().is_empty() {
            return Err(DndError::InvalidConfig("transition easing is empty".to_string()));
        }
        Ok(())
    }
}
