pub mod column;
pub mod task_card;

pub use column::{column_key, KanbanColumn};
pub use task_card::TaskCard;
