use serde::{Deserialize, Serialize};

use crate::core::models::{Column, Task};

/// Payload attached to every sortable on the board, so drop handlers can tell column drags from
/// task drags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum DragData {
    Column { column: Column },
    Task { task: Task },
}

impl DragData {
    pub fn id(&self) -> &str {
        match self {
            DragData::Column { column } => &column.id,
            DragData::Task { task } => &task.id,
        }
    }
}
