use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Alignment, Fit, Result};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub coordinator: CoordinatorConfig,
    pub viewport: ViewportConfig,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Everything the coordinator needs to know about the two scenes it drives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    pub markers: MarkerNames,
    pub inputs: InputNames,
    pub start: StartPolicy,
    pub advance: AdvancePolicy,
    pub layout: Layout,
}

/// State names whose appearance in a frame's state changes means something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerNames {
    /// Menu state entered once the player confirmed a character.
    pub idle_ready: String,
    pub hit: String,
    /// Game state entered when the player loses; closes the score for the round.
    pub round_over: String,
    /// Game state after which the menu is asked to reset.
    pub round_end: String,
    /// Game state at which the session may return to the menu.
    pub ready: String,
    /// Menu state entered once its outro has finished playing. Only read
    /// under [`StartPolicy::AfterOutro`].
    pub outro_complete: String,
}

impl Default for MarkerNames {
    fn default() -> Self {
        Self {
            idle_ready: "game_idle".to_string(),
            hit: "Hit".to_string(),
            round_over: "End".to_string(),
            round_end: "Back_Gone".to_string(),
            ready: "Wait".to_string(),
            outro_complete: "outro_done".to_string(),
        }
    }
}

/// Names of the trigger inputs fired across the two machines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputNames {
    pub play: String,
    pub reset: String,
}

impl Default for InputNames {
    fn default() -> Self {
        Self {
            play: "play".to_string(),
            reset: "reset".to_string(),
        }
    }
}

/// When the game's play trigger fires after a character has been chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StartPolicy {
    /// Switch to the game and fire on the frame the choice is observed.
    #[default]
    Immediate,
    /// Keep showing the menu until it enters the outro-complete marker, then
    /// switch and fire.
    AfterOutro,
}

/// Which machines are advanced each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancePolicy {
    /// Only the scene being rendered moves.
    #[default]
    VisibleOnly,
    /// Both scenes move every frame; the hidden scene's state changes are
    /// discarded.
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub fit: Fit,
    pub alignment: Alignment,
}

/// Size of the drawing surface in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
        }
    }
}
