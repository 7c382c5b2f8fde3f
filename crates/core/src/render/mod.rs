use serde::{Deserialize, Serialize};

use crate::Artboard;

/// How an artboard is scaled into the destination rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fit {
    Fill,
    #[default]
    Contain,
    Cover,
    FitWidth,
    FitHeight,
    ScaleDown,
    None,
}

/// Where a fitted artboard sits inside the destination rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Axis aligned rectangle used for artboard bounds and the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Presentation adapter the coordinator hands the active artboard to.
/// Alignment math and rasterisation live behind this trait.
pub trait Renderer {
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn align(&mut self, fit: Fit, alignment: Alignment, frame: Aabb, content: Aabb);
    fn draw(&mut self, artboard: &dyn Artboard);
}

/// Target for the two score text regions.
pub trait ScoreDisplay {
    fn set_score_text(&mut self, text: &str);
    fn set_high_score_text(&mut self, text: &str);
}

pub fn score_text(score: i32) -> String {
    format!("Score: {score}")
}

pub fn high_score_text(high_score: i32) -> String {
    format!("High Score: {high_score}")
}

/// In-memory score display, the headless stand-in for the two text elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    score: String,
    high_score: String,
    updates: usize,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: score_text(0),
            high_score: high_score_text(0),
            updates: 0,
        }
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> &str {
        &self.score
    }

    pub fn high_score(&self) -> &str {
        &self.high_score
    }

    /// Number of text writes received so far.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl ScoreDisplay for Scoreboard {
    fn set_score_text(&mut self, text: &str) {
        self.score = text.to_string();
        self.updates += 1;
    }

    fn set_high_score_text(&mut self, text: &str) {
        self.high_score = text.to_string();
        self.updates += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Align {
        fit: Fit,
        alignment: Alignment,
        frame: Aabb,
        content: Aabb,
    },
    Draw {
        artboard: String,
    },
}

/// Headless renderer. Keeps the command list of the most recent frame,
/// starting a new list on every `clear`.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started with `clear`.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Artboards drawn during the last frame.
    pub fn drawn(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Draw { artboard } => Some(artboard.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn align(&mut self, fit: Fit, alignment: Alignment, frame: Aabb, content: Aabb) {
        self.commands.push(DrawCommand::Align {
            fit,
            alignment,
            frame,
            content,
        });
    }

    fn draw(&mut self, artboard: &dyn Artboard) {
        self.commands.push(DrawCommand::Draw {
            artboard: artboard.name().to_string(),
        });
    }
}
