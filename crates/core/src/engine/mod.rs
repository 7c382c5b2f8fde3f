use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Aabb, CoordinatorError, Result, SceneKind};

/// Capability set of a loaded state machine instance.
pub trait StateMachine {
    /// Advances the machine by `seconds`. State changes reported afterwards
    /// belong to this advance only.
    fn advance(&mut self, seconds: f32);

    fn input_count(&self) -> usize;

    fn input(&self, index: usize) -> Option<InputInfo<'_>>;

    fn fire_trigger(&mut self, index: usize);

    fn bool_value(&self, index: usize) -> bool;

    fn set_bool(&mut self, index: usize, value: bool);

    fn state_changed_count(&self) -> usize;

    fn state_changed_name(&self, index: usize) -> Option<&str>;
}

/// A drawable scene inside a loaded animation file.
pub trait Artboard {
    fn name(&self) -> &str;

    fn bounds(&self) -> Aabb;

    fn advance(&mut self, seconds: f32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Trigger,
    Bool,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trigger => f.write_str("trigger"),
            Self::Bool => f.write_str("bool"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputInfo<'a> {
    pub name: &'a str,
    pub kind: InputKind,
}

/// Fire-once input with no persistent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerInput {
    index: usize,
}

impl TriggerInput {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fire(&self, machine: &mut dyn StateMachine) {
        machine.fire_trigger(self.index);
    }
}

/// Persistent boolean input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolInput {
    index: usize,
}

impl BoolInput {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self, machine: &dyn StateMachine) -> bool {
        machine.bool_value(self.index)
    }

    pub fn set(&self, machine: &mut dyn StateMachine, value: bool) {
        machine.set_bool(self.index, value);
    }
}

/// Input handle resolved by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Trigger(TriggerInput),
    Bool(BoolInput),
}

impl Input {
    pub fn new(index: usize, kind: InputKind) -> Self {
        match kind {
            InputKind::Trigger => Self::Trigger(TriggerInput { index }),
            InputKind::Bool => Self::Bool(BoolInput { index }),
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::Trigger(_) => InputKind::Trigger,
            Self::Bool(_) => InputKind::Bool,
        }
    }
}

/// Linear scan over the machine's inputs.
pub fn find_input(machine: &dyn StateMachine, name: &str) -> Option<Input> {
    (0..machine.input_count()).find_map(|index| {
        let info = machine.input(index)?;
        (info.name == name).then(|| Input::new(index, info.kind))
    })
}

/// Name to handle cache for one machine. A machine's input set is fixed once
/// it is instantiated, so entries never go stale.
#[derive(Debug)]
pub struct InputCache {
    scene: SceneKind,
    resolved: HashMap<String, Input>,
}

impl InputCache {
    pub fn new(scene: SceneKind) -> Self {
        Self {
            scene,
            resolved: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn resolve(&mut self, machine: &dyn StateMachine, name: &str) -> Result<Input> {
        if let Some(input) = self.resolved.get(name) {
            return Ok(*input);
        }

        let input = find_input(machine, name).ok_or_else(|| CoordinatorError::MissingInput {
            scene: self.scene,
            name: name.to_string(),
        })?;
        tracing::debug!(scene = %self.scene, name, kind = %input.kind(), "resolved input");
        self.resolved.insert(name.to_string(), input);
        Ok(input)
    }

    pub fn trigger(&mut self, machine: &dyn StateMachine, name: &str) -> Result<TriggerInput> {
        match self.resolve(machine, name)? {
            Input::Trigger(trigger) => Ok(trigger),
            other => Err(self.mismatch(name, InputKind::Trigger, other.kind())),
        }
    }

    pub fn boolean(&mut self, machine: &dyn StateMachine, name: &str) -> Result<BoolInput> {
        match self.resolve(machine, name)? {
            Input::Bool(input) => Ok(input),
            other => Err(self.mismatch(name, InputKind::Bool, other.kind())),
        }
    }

    fn mismatch(&self, name: &str, expected: InputKind, found: InputKind) -> CoordinatorError {
        CoordinatorError::InputKindMismatch {
            scene: self.scene,
            name: name.to_string(),
            expected,
            found,
        }
    }
}

/// States entered during a single advance, in the order reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateChanges {
    names: Vec<String>,
}

impl StateChanges {
    pub fn read(machine: &dyn StateMachine) -> Self {
        let names = (0..machine.state_changed_count())
            .filter_map(|index| machine.state_changed_name(index))
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|entered| entered == name)
    }

    pub fn count(&self, name: &str) -> usize {
        self.names.iter().filter(|entered| *entered == name).count()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StateChanges {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
