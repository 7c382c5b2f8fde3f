use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{Aabb, Artboard, InputInfo, InputKind, StateMachine};

/// Declared input of a scripted machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedInput {
    pub name: String,
    pub kind: InputKind,
    #[serde(default)]
    pub value: bool,
}

impl ScriptedInput {
    pub fn trigger(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Trigger,
            value: false,
        }
    }

    pub fn boolean(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Bool,
            value,
        }
    }
}

/// States to enter and bool inputs to set once `at` seconds have passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub at: f32,
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub set: BTreeMap<String, bool>,
}

impl Cue {
    pub fn states<I, S>(at: f32, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            at,
            states: states.into_iter().map(Into::into).collect(),
            set: BTreeMap::new(),
        }
    }

    pub fn with_bool(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set.insert(name.into(), value);
        self
    }
}

/// Serialisable description of a scripted machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineScript {
    pub inputs: Vec<ScriptedInput>,
    #[serde(default)]
    pub cues: Vec<Cue>,
    /// Cues keyed by trigger name; `at` is relative to the fire time.
    #[serde(default)]
    pub reactions: HashMap<String, Vec<Cue>>,
}

#[derive(Debug, Clone)]
struct PendingCue {
    due: f64,
    cue: Cue,
}

#[derive(Debug, Clone)]
struct InputSlot {
    input: ScriptedInput,
    fired: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedStateMachine {
    inputs: Vec<InputSlot>,
    reactions: HashMap<String, Vec<Cue>>,
    pending: Vec<PendingCue>,
    queued: Vec<String>,
    changed: Vec<String>,
    elapsed: f64,
    advances: usize,
}

impl ScriptedStateMachine {
    pub fn new(inputs: Vec<ScriptedInput>) -> Self {
        Self {
            inputs: inputs
                .into_iter()
                .map(|input| InputSlot { input, fired: 0 })
                .collect(),
            ..Self::default()
        }
    }

    pub fn from_script(script: MachineScript) -> Self {
        let mut machine = Self::new(script.inputs);
        machine.reactions = script.reactions;
        for cue in script.cues {
            machine.schedule(f64::from(cue.at), cue);
        }
        machine
    }

    /// States reported by the next advance, ahead of any due cue.
    pub fn queue_states<I, S>(&mut self, states: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queued.extend(states.into_iter().map(Into::into));
    }

    pub fn schedule(&mut self, due: f64, cue: Cue) {
        self.pending.push(PendingCue { due, cue });
        // Stable sort keeps declaration order for equal due times.
        self.pending.sort_by(|a, b| a.due.total_cmp(&b.due));
    }

    pub fn react(&mut self, trigger: impl Into<String>, cue: Cue) {
        self.reactions.entry(trigger.into()).or_default().push(cue);
    }

    /// Sets a bool input by name, as pointer interaction would. Returns
    /// `false` when no bool input has that name.
    pub fn set_input(&mut self, name: &str, value: bool) -> bool {
        match self.slot_mut(name) {
            Some(slot) if slot.input.kind == InputKind::Bool => {
                slot.input.value = value;
                true
            }
            _ => false,
        }
    }

    pub fn input_value(&self, name: &str) -> Option<bool> {
        self.slot(name)
            .filter(|slot| slot.input.kind == InputKind::Bool)
            .map(|slot| slot.input.value)
    }

    pub fn fire_count(&self, name: &str) -> usize {
        self.slot(name).map_or(0, |slot| slot.fired)
    }

    pub fn advances(&self) -> usize {
        self.advances
    }

    pub fn pending_cues(&self) -> usize {
        self.pending.len()
    }

    fn slot(&self, name: &str) -> Option<&InputSlot> {
        self.inputs.iter().find(|slot| slot.input.name == name)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut InputSlot> {
        self.inputs.iter_mut().find(|slot| slot.input.name == name)
    }

    fn apply(&mut self, cue: Cue) {
        for (name, value) in &cue.set {
            if !self.set_input(name, *value) {
                tracing::warn!(name = name.as_str(), "cue sets an unknown bool input");
            }
        }
        self.changed.extend(cue.states);
    }
}

impl StateMachine for ScriptedStateMachine {
    fn advance(&mut self, seconds: f32) {
        self.elapsed += f64::from(seconds.max(0.0));
        self.advances += 1;
        self.changed = std::mem::take(&mut self.queued);

        let elapsed = self.elapsed;
        let split = self.pending.partition_point(|pending| pending.due <= elapsed);
        let due: Vec<PendingCue> = self.pending.drain(..split).collect();
        for pending in due {
            self.apply(pending.cue);
        }
    }

    fn input_count(&self) -> usize {
        self.inputs.len()
    }

    fn input(&self, index: usize) -> Option<InputInfo<'_>> {
        self.inputs.get(index).map(|slot| InputInfo {
            name: slot.input.name.as_str(),
            kind: slot.input.kind,
        })
    }

    fn fire_trigger(&mut self, index: usize) {
        let Some(slot) = self.inputs.get_mut(index) else {
            return;
        };
        if slot.input.kind != InputKind::Trigger {
            return;
        }
        slot.fired += 1;

        let name = slot.input.name.clone();
        let reactions = self.reactions.get(&name).cloned().unwrap_or_default();
        for cue in reactions {
            self.schedule(self.elapsed + f64::from(cue.at), cue);
        }
    }

    fn bool_value(&self, index: usize) -> bool {
        self.inputs
            .get(index)
            .is_some_and(|slot| slot.input.kind == InputKind::Bool && slot.input.value)
    }

    fn set_bool(&mut self, index: usize, value: bool) {
        if let Some(slot) = self.inputs.get_mut(index) {
            if slot.input.kind == InputKind::Bool {
                slot.input.value = value;
            }
        }
    }

    fn state_changed_count(&self) -> usize {
        self.changed.len()
    }

    fn state_changed_name(&self, index: usize) -> Option<&str> {
        self.changed.get(index).map(String::as_str)
    }
}

/// Artboard that only knows its name and size.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedArtboard {
    name: String,
    bounds: Aabb,
    elapsed: f64,
}

impl ScriptedArtboard {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            bounds: Aabb::from_size(width, height),
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Artboard for ScriptedArtboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn advance(&mut self, seconds: f32) {
        self.elapsed += f64::from(seconds.max(0.0));
    }
}
