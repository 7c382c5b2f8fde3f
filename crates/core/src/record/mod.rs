use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Character, Mode, Result, SceneKind, SessionPhase};

/// Phase change observed during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: SessionPhase,
    pub to: SessionPhase,
}

/// Trigger fired by the coordinator during a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiredTrigger {
    pub scene: SceneKind,
    pub name: String,
}

/// Snapshot of the session taken at the end of one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: u64,
    pub delta_seconds: f32,
    pub phase: SessionPhase,
    pub mode: Mode,
    pub score: i32,
    pub high_score: i32,
    pub chosen: Option<Character>,
    pub transitions: Vec<PhaseChange>,
    pub fired: Vec<FiredTrigger>,
}

impl FrameReport {
    pub fn entered(&self, phase: SessionPhase) -> bool {
        self.transitions.iter().any(|change| change.to == phase)
    }

    pub fn fired(&self, scene: SceneKind, name: &str) -> bool {
        self.fired
            .iter()
            .any(|trigger| trigger.scene == scene && trigger.name == name)
    }
}

/// Configuration options for the recording subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingSettings {
    pub output_path: String,
    /// Stop collecting after this many frames.
    pub max_frames: Option<usize>,
}

impl Default for RecordingSettings {
    fn default() -> Self {
        Self {
            output_path: String::new(),
            max_frames: None,
        }
    }
}

/// Collects frame reports and writes them out as a JSON transcript.
#[derive(Debug, Default)]
pub struct Recorder {
    settings: RecordingSettings,
    frames: Vec<FrameReport>,
    is_recording: bool,
}

impl Recorder {
    pub fn new(settings: RecordingSettings) -> Self {
        Self {
            settings,
            frames: Vec::new(),
            is_recording: false,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        self.is_recording = true;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<()> {
        self.is_recording = false;
        Ok(())
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    pub fn frames(&self) -> &[FrameReport] {
        &self.frames
    }

    /// Keeps `report` if recording and under the frame limit.
    pub fn record(&mut self, report: &FrameReport) {
        if !self.is_recording {
            return;
        }
        if let Some(limit) = self.settings.max_frames {
            if self.frames.len() >= limit {
                return;
            }
        }
        self.frames.push(report.clone());
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.frames)?)
    }

    /// Writes the transcript to the configured output path.
    pub fn flush(&self) -> Result<()> {
        self.write_to(&self.settings.output_path)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
