//! Core library for Scene Arcade.
//!
//! Two independently authored animation state machines, a menu and a game,
//! are stitched into one experience by the [`GameModeCoordinator`]: the menu
//! picks a character, the game is played, scores are tracked, and the session
//! returns to the menu when the round ends. The animation runtime and the
//! renderer stay behind the [`StateMachine`], [`Artboard`] and [`Renderer`]
//! traits; the [`script`] module provides a data driven implementation used
//! by the command line app and the tests.

pub mod assets;
pub mod config;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod record;
pub mod render;
pub mod scene;
pub mod score;
pub mod script;
pub mod selector;
pub mod timeline;

pub use assets::{ArtboardDescriptor, AssetStore, SceneBundle};
pub use config::{
    AdvancePolicy, AppConfig, CoordinatorConfig, InputNames, Layout, MarkerNames, StartPolicy,
    ViewportConfig,
};
pub use coordinator::{GameModeCoordinator, SessionPhase};
pub use engine::{
    find_input, Artboard, BoolInput, Input, InputCache, InputInfo, InputKind, StateChanges,
    StateMachine, TriggerInput,
};
pub use error::{CoordinatorError, Result};
pub use record::{FiredTrigger, FrameReport, PhaseChange, Recorder, RecordingSettings};
pub use render::{
    Aabb, Alignment, DrawCommand, Fit, RecordingRenderer, Renderer, ScoreDisplay, Scoreboard,
};
pub use scene::{Mode, SceneInstance, SceneKind};
pub use score::ScoreTracker;
pub use script::{Cue, MachineScript, ScriptedArtboard, ScriptedInput, ScriptedStateMachine};
pub use selector::{Character, CharacterSelector};
pub use timeline::FrameClock;
