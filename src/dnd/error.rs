use thiserror::Error;

use super::UniqueIdentifier;

#[derive(Debug, Error)]
pub enum DndError {
    #[error("a drag of `{active}` is already in progress")]
    SessionInProgress { active: UniqueIdentifier },

    #[error("invalid drag-and-drop config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse drag-and-drop config: {0}")]
    Config(#[from] serde_json::Error),
}
