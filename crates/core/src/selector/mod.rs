use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Input, StateChanges, StateMachine};

/// Playable characters. Each is also the name of a bool input on both the
/// menu and the game state machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    Turkey,
    Duck,
    Chicken,
    Balloon,
}

impl Character {
    pub const ALL: [Character; 4] = [
        Character::Turkey,
        Character::Duck,
        Character::Chicken,
        Character::Balloon,
    ];

    pub fn input_name(&self) -> &'static str {
        match self {
            Self::Turkey => "turkey",
            Self::Duck => "duck",
            Self::Chicken => "chicken",
            Self::Balloon => "balloon",
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_name())
    }
}

impl FromStr for Character {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|character| character.input_name() == value)
            .ok_or_else(|| format!("unknown character `{value}`"))
    }
}

/// Reads which character the player confirmed on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSelector {
    idle_marker: String,
}

impl CharacterSelector {
    pub fn new(idle_marker: impl Into<String>) -> Self {
        Self {
            idle_marker: idle_marker.into(),
        }
    }

    /// Returns the first character whose bool input is set, scanning the
    /// menu's inputs in declaration order, but only on a frame where the menu
    /// entered its idle-ready state. Never writes to the machine.
    pub fn select(&self, changes: &StateChanges, menu: &dyn StateMachine) -> Option<Character> {
        if !changes.contains(&self.idle_marker) {
            return None;
        }

        (0..menu.input_count()).find_map(|index| {
            let info = menu.input(index)?;
            match Input::new(index, info.kind) {
                Input::Bool(flag) if flag.value(menu) => info.name.parse().ok(),
                _ => None,
            }
        })
    }
}
