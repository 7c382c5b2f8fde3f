use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Artboard, BoolInput, InputCache, Result, StateChanges, StateMachine, TriggerInput};

/// The two scenes of the experience. Also names the rendering mode: the
/// scene whose kind matches the mode is the one drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    Menu,
    Game,
}

pub type Mode = SceneKind;

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => f.write_str("menu"),
            Self::Game => f.write_str("game"),
        }
    }
}

/// An artboard paired with the state machine that drives it.
#[derive(Debug)]
pub struct SceneInstance<M, A> {
    kind: SceneKind,
    machine: M,
    artboard: A,
    inputs: InputCache,
}

impl<M: StateMachine, A: Artboard> SceneInstance<M, A> {
    pub fn new(kind: SceneKind, machine: M, artboard: A) -> Self {
        Self {
            kind,
            machine,
            artboard,
            inputs: InputCache::new(kind),
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    pub fn artboard(&self) -> &A {
        &self.artboard
    }

    /// Advances the state machine, then the artboard it poses.
    pub fn advance(&mut self, seconds: f32) {
        self.machine.advance(seconds);
        self.artboard.advance(seconds);
    }

    pub fn state_changes(&self) -> StateChanges {
        StateChanges::read(&self.machine)
    }

    pub fn require_trigger(&mut self, name: &str) -> Result<TriggerInput> {
        self.inputs.trigger(&self.machine, name)
    }

    pub fn require_bool(&mut self, name: &str) -> Result<BoolInput> {
        self.inputs.boolean(&self.machine, name)
    }

    pub fn fire(&mut self, name: &str) -> Result<()> {
        let trigger = self.require_trigger(name)?;
        trigger.fire(&mut self.machine);
        Ok(())
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<()> {
        let input = self.require_bool(name)?;
        input.set(&mut self.machine, value);
        Ok(())
    }

    pub fn bool_value(&mut self, name: &str) -> Result<bool> {
        let input = self.require_bool(name)?;
        Ok(input.value(&self.machine))
    }
}
