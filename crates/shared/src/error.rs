use serde::Serialize;
use thiserror::Error;

use crate::domain::WebcastKey;

/// Why the grid ignored an intent. Rejections never change state; they only
/// travel on the outcome side channel.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    #[error("webcast {key} is not in the current catalog")]
    UnknownWebcast { key: WebcastKey },
    #[error("position {position} is outside a {num_cells}-cell layout")]
    PositionOutOfRange { position: usize, num_cells: usize },
    #[error("webcast {key} is already displayed")]
    AlreadyDisplayed { key: WebcastKey },
    #[error("no empty cell left in the current layout")]
    NoEmptyCell,
    #[error("webcast {key} is not displayed")]
    NotDisplayed { key: WebcastKey },
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed webcast snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("webcast entry {index} has an empty key")]
    EmptyKey { index: usize },
}
