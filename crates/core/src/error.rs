use crate::{InputKind, SceneKind};

/// Result alias that carries the custom [`CoordinatorError`] type.
pub type Result<T> = std::result::Result<T, CoordinatorError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    /// A named input the coordinator depends on does not exist on the
    /// expected state machine. Gameplay cannot continue without it.
    #[error("input `{name}` not found on the {scene} state machine")]
    MissingInput { scene: SceneKind, name: String },
    /// The input exists but is of the wrong kind for the requested action.
    #[error("input `{name}` on the {scene} state machine is a {found} input, expected {expected}")]
    InputKindMismatch {
        scene: SceneKind,
        name: String,
        expected: InputKind,
        found: InputKind,
    },
    /// A scene bundle could not be read or parsed.
    #[error("failed to load {scene} scene from `{source_name}`: {reason}")]
    AssetLoad {
        scene: SceneKind,
        source_name: String,
        reason: String,
    },
    /// Returned for every frame after a fatal error stopped the coordinator.
    #[error("coordinator halted: {0}")]
    Halted(String),
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl CoordinatorError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}
