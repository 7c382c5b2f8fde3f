use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    CoordinatorError, MachineScript, Result, SceneInstance, SceneKind, ScriptedArtboard,
    ScriptedStateMachine,
};

/// Descriptor for the artboard a bundle draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtboardDescriptor {
    pub name: String,
    #[serde(default = "default_extent")]
    pub width: f32,
    #[serde(default = "default_extent")]
    pub height: f32,
}

fn default_extent() -> f32 {
    500.0
}

/// One loadable scene: an artboard and the script of its state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneBundle {
    pub artboard: ArtboardDescriptor,
    pub machine: MachineScript,
}

/// Registry for the scene bundles the coordinator is built from.
#[derive(Debug, Default)]
pub struct AssetStore {
    bundles: HashMap<SceneKind, SceneBundle>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    pub fn register(&mut self, kind: SceneKind, bundle: SceneBundle) {
        self.bundles.insert(kind, bundle);
    }

    pub fn load_str(&mut self, kind: SceneKind, source_name: &str, json: &str) -> Result<()> {
        let bundle: SceneBundle =
            serde_json::from_str(json).map_err(|err| CoordinatorError::AssetLoad {
                scene: kind,
                source_name: source_name.to_string(),
                reason: err.to_string(),
            })?;
        tracing::debug!(scene = %kind, source_name, artboard = %bundle.artboard.name, "loaded scene bundle");
        self.register(kind, bundle);
        Ok(())
    }

    pub fn load_path(&mut self, kind: SceneKind, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|err| CoordinatorError::AssetLoad {
            scene: kind,
            source_name: source_name.clone(),
            reason: err.to_string(),
        })?;
        self.load_str(kind, &source_name, &json)
    }

    pub fn bundle(&self, kind: SceneKind) -> Option<&SceneBundle> {
        self.bundles.get(&kind)
    }

    /// Builds a fresh scene instance from the registered bundle.
    pub fn instantiate(
        &self,
        kind: SceneKind,
    ) -> Result<SceneInstance<ScriptedStateMachine, ScriptedArtboard>> {
        let bundle = self.bundle(kind).ok_or_else(|| CoordinatorError::AssetLoad {
            scene: kind,
            source_name: "<store>".to_string(),
            reason: "no bundle registered".to_string(),
        })?;

        let artboard = ScriptedArtboard::new(
            bundle.artboard.name.clone(),
            bundle.artboard.width,
            bundle.artboard.height,
        );
        let machine = ScriptedStateMachine::from_script(bundle.machine.clone());
        Ok(SceneInstance::new(kind, machine, artboard))
    }
}
